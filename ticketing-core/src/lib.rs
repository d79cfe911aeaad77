//! Business rules of the ticketing system: ticket lifecycle, access policy,
//! dashboard aggregation and the employee directory.
//!
//! Everything here is stateless and works over the repository traits of
//! `ticketing-db`, so the same rules run against PostgreSQL or the
//! in-memory store used in tests.

pub mod access_policy;
pub mod dashboard;
pub mod employee_directory;
pub mod password;
pub mod ticket_lifecycle;
pub mod ticket_number;
pub mod ticketing_service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use dashboard::{compute_stats, DashboardAggregator};
pub use employee_directory::EmployeeDirectory;
pub use password::Argon2PasswordHasher;
pub use ticket_lifecycle::{NewTicket, TicketLifecycleManager};
pub use ticketing_service::TicketingService;
