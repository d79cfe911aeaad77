use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Employee, Identity, LoginRequest, RegisterEmployeeRequest, UpdateEmployeeRequest};
use crate::error::ApiResult;

#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Open registration of a new employee
    async fn register(&self, request: RegisterEmployeeRequest) -> ApiResult<Employee>;

    /// Manager-initiated employee creation
    async fn create_employee(&self, identity: &Identity, request: RegisterEmployeeRequest) -> ApiResult<Employee>;

    async fn update_employee(
        &self,
        identity: &Identity,
        employee_id: Uuid,
        request: UpdateEmployeeRequest,
    ) -> ApiResult<Employee>;

    /// Soft delete: the record stays but is marked inactive
    async fn deactivate_employee(&self, identity: &Identity, employee_id: Uuid) -> ApiResult<()>;

    /// Verify credentials and return the matching active employee
    async fn authenticate(&self, request: LoginRequest) -> ApiResult<Employee>;

    async fn get_employee(&self, identity: &Identity, employee_id: Uuid) -> ApiResult<Option<Employee>>;

    async fn get_current_employee(&self, identity: &Identity) -> ApiResult<Employee>;

    async fn list_employees(&self, identity: &Identity) -> ApiResult<Vec<Employee>>;
}
