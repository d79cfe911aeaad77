pub mod employee_service;
pub mod password_hasher;
pub mod ticket_service;

pub use employee_service::EmployeeService;
pub use password_hasher::PasswordHasher;
pub use ticket_service::TicketService;
