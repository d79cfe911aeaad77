pub mod access_level;
pub mod dashboard;
pub mod employee;
pub mod identity;
pub mod priority;
pub mod requests;
pub mod scope;
pub mod ticket;
pub mod ticket_status;

pub use access_level::AccessLevel;
pub use dashboard::DashboardStats;
pub use employee::{Address, Employee};
pub use identity::Identity;
pub use priority::{priority_label, PriorityLevel};
pub use requests::*;
pub use scope::TicketScope;
pub use ticket::{ReportedBy, ResolutionStep, Ticket};
pub use ticket_status::TicketStatus;
