use async_trait::async_trait;
use std::error::Error;
use uuid::Uuid;

use crate::models::EmployeeModel;
use crate::repository::{Create, Load};

/// Employee persistence.
///
/// Lookups by number or email only consider active employees, matching the
/// uniqueness rule. `load` returns inactive records too.
#[async_trait]
pub trait EmployeeRepository: Create<EmployeeModel> + Load<EmployeeModel> {
    async fn find_active_by_number(
        &self,
        employee_number: i32,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>>;

    /// Case-insensitive match on email
    async fn find_active_by_email(&self, email: &str) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>>;

    /// All active employees ordered by employee number
    async fn find_active(&self) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>>;

    /// Replaces the mutable fields of the stored employee.
    /// Id, employee number, password hash and created date are kept.
    async fn update(&self, employee: &EmployeeModel) -> Result<bool, Box<dyn Error + Send + Sync>>;

    /// Soft delete
    async fn deactivate(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>>;

    /// Physical removal, for maintenance and test cleanup only
    async fn purge(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>>;
}
