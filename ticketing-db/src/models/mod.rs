pub mod employee;
pub mod ticket;

use uuid::Uuid;

pub use employee::{AddressModel, EmployeeModel};
pub use ticket::{ReportedByModel, ResolutionStepModel, TicketModel};

/// Trait for persisted records that are uniquely identified by a UUID
pub trait Identifiable {
    fn get_id(&self) -> Uuid;
}
