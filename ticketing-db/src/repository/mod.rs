pub mod create;
pub mod delete;
pub mod employee_repository;
pub mod error;
pub mod load;
pub mod ticket_repository;

// Re-exports
pub use create::*;
pub use delete::*;
pub use employee_repository::*;
pub use error::*;
pub use load::*;
pub use ticket_repository::*;
