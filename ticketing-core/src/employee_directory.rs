//! Employee registration, maintenance, soft deletion and credential checks.

use async_trait::async_trait;
use chrono::Utc;
use std::error::Error;
use std::sync::Arc;
use ticketing_api::constants::error_messages;
use ticketing_api::domain::{Employee, Identity, LoginRequest, RegisterEmployeeRequest, UpdateEmployeeRequest};
use ticketing_api::error::{ApiError, ApiResult};
use ticketing_api::service::{EmployeeService, PasswordHasher};
use ticketing_db::models::{AddressModel, EmployeeModel};
use ticketing_db::repository::{EmployeeRepository, StoreError};
use ticketing_db::utils::{to_heapless, to_optional_heapless};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::access_policy;
use crate::password::Argon2PasswordHasher;

/// Maps a unique-key violation raised by the store to the matching conflict
fn store_conflict(error: Box<dyn Error + Send + Sync>) -> ApiError {
    match StoreError::find(error.as_ref()) {
        Some(StoreError::DuplicateKey { key, .. }) if key.contains("email") => {
            ApiError::conflict(error_messages::EMAIL_EXISTS)
        }
        Some(StoreError::DuplicateKey { .. }) => ApiError::conflict(error_messages::EMPLOYEE_NUMBER_EXISTS),
        None => error.into(),
    }
}

fn apply_changes(employee: &mut EmployeeModel, changes: &UpdateEmployeeRequest) -> Result<(), String> {
    if let Some(first_name) = &changes.first_name {
        employee.first_name = to_heapless(first_name.trim(), "first_name")?;
    }
    if let Some(last_name) = &changes.last_name {
        employee.last_name = to_heapless(last_name.trim(), "last_name")?;
    }
    if let Some(email) = &changes.email {
        employee.email = to_heapless(email.trim(), "email")?;
    }
    if let Some(department) = &changes.department {
        employee.department = to_heapless(department.trim(), "department")?;
    }
    if let Some(phone_number) = &changes.phone_number {
        // An empty phone number clears it
        let phone_number = Some(phone_number.trim()).filter(|p| !p.is_empty());
        employee.phone_number = to_optional_heapless(phone_number, "phone_number")?;
    }
    if let Some(address) = &changes.address {
        employee.address = Some(AddressModel::try_from(address)?);
    }
    if let Some(company) = &changes.company {
        employee.company = to_heapless(company.trim(), "company")?;
    }
    if let Some(access_level) = changes.access_level {
        employee.access_level = access_level;
    }
    if let Some(is_active) = changes.is_active {
        employee.is_active = is_active;
    }
    Ok(())
}

/// Employee directory over an [`EmployeeRepository`].
///
/// Email and employee number are unique among active employees. Deleting an
/// employee only deactivates the record.
pub struct EmployeeDirectory<E, H = Argon2PasswordHasher> {
    employees: Arc<E>,
    hasher: Arc<H>,
}

impl<E, H> Clone for EmployeeDirectory<E, H> {
    fn clone(&self) -> Self {
        Self {
            employees: self.employees.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<E: EmployeeRepository> EmployeeDirectory<E> {
    pub fn new(employees: Arc<E>) -> Self {
        Self::with_hasher(employees, Arc::new(Argon2PasswordHasher::new()))
    }
}

impl<E, H> EmployeeDirectory<E, H>
where
    E: EmployeeRepository,
    H: PasswordHasher,
{
    pub fn with_hasher(employees: Arc<E>, hasher: Arc<H>) -> Self {
        Self { employees, hasher }
    }

    async fn ensure_number_free(&self, employee_number: i32, except: Option<Uuid>) -> ApiResult<()> {
        if let Some(existing) = self.employees.find_active_by_number(employee_number).await? {
            if Some(existing.id) != except {
                return Err(ApiError::conflict(error_messages::EMPLOYEE_NUMBER_EXISTS));
            }
        }
        Ok(())
    }

    async fn ensure_email_free(&self, email: &str, except: Option<Uuid>) -> ApiResult<()> {
        if let Some(existing) = self.employees.find_active_by_email(email.trim()).await? {
            if Some(existing.id) != except {
                return Err(ApiError::conflict(error_messages::EMAIL_EXISTS));
            }
        }
        Ok(())
    }

    async fn load_required(&self, employee_id: Uuid) -> ApiResult<EmployeeModel> {
        self.employees
            .load(employee_id)
            .await?
            .ok_or_else(|| ApiError::not_found(error_messages::EMPLOYEE_NOT_FOUND))
    }
}

#[async_trait]
impl<E, H> EmployeeService for EmployeeDirectory<E, H>
where
    E: EmployeeRepository,
    H: PasswordHasher,
{
    async fn register(&self, request: RegisterEmployeeRequest) -> ApiResult<Employee> {
        request.validate()?;
        self.ensure_number_free(request.employee_number, None).await?;
        self.ensure_email_free(&request.email, None).await?;

        let password_hash = self.hasher.hash_password(&request.password)?;
        let model = EmployeeModel::from_registration(&request, password_hash, Utc::now())
            .map_err(ApiError::ValidationError)?;

        let saved = self.employees.create(model).await.map_err(store_conflict)?;
        info!(
            employee_id = %saved.id,
            employee_number = saved.employee_number,
            access_level = %saved.access_level,
            "employee registered"
        );
        Ok(Employee::from(saved))
    }

    async fn create_employee(&self, identity: &Identity, request: RegisterEmployeeRequest) -> ApiResult<Employee> {
        access_policy::ensure_can_manage_employees(identity)?;
        self.register(request).await
    }

    async fn update_employee(
        &self,
        identity: &Identity,
        employee_id: Uuid,
        request: UpdateEmployeeRequest,
    ) -> ApiResult<Employee> {
        access_policy::ensure_can_manage_employees(identity)?;
        request.validate()?;

        let mut employee = self.load_required(employee_id).await?;
        apply_changes(&mut employee, &request).map_err(ApiError::ValidationError)?;

        if employee.is_active {
            self.ensure_email_free(&employee.email, Some(employee.id)).await?;
            self.ensure_number_free(employee.employee_number, Some(employee.id)).await?;
        }

        if !self.employees.update(&employee).await.map_err(store_conflict)? {
            return Err(ApiError::not_found(error_messages::EMPLOYEE_NOT_FOUND));
        }

        info!(employee_id = %employee_id, updated_by = %identity.internal_id, "employee updated");
        Ok(Employee::from(employee))
    }

    async fn deactivate_employee(&self, identity: &Identity, employee_id: Uuid) -> ApiResult<()> {
        access_policy::ensure_can_delete_employee(identity, employee_id)?;

        if !self.employees.deactivate(employee_id).await? {
            return Err(ApiError::not_found(error_messages::EMPLOYEE_NOT_FOUND));
        }
        info!(employee_id = %employee_id, deactivated_by = %identity.internal_id, "employee deactivated");
        Ok(())
    }

    async fn authenticate(&self, request: LoginRequest) -> ApiResult<Employee> {
        let invalid = || ApiError::permission_denied(error_messages::INVALID_CREDENTIALS);

        let Some(employee) = self.employees.find_active_by_number(request.employee_number).await? else {
            warn!(employee_number = request.employee_number, "login for unknown employee number");
            return Err(invalid());
        };

        if !self.hasher.verify_password(&request.password, &employee.password_hash)? {
            warn!(employee_number = request.employee_number, "login with wrong password");
            return Err(invalid());
        }

        Ok(Employee::from(employee))
    }

    async fn get_employee(&self, identity: &Identity, employee_id: Uuid) -> ApiResult<Option<Employee>> {
        access_policy::ensure_can_view_employee(identity, employee_id)?;
        Ok(self.employees.load(employee_id).await?.map(Employee::from))
    }

    async fn get_current_employee(&self, identity: &Identity) -> ApiResult<Employee> {
        self.employees
            .load(identity.internal_id)
            .await?
            .filter(|employee| employee.is_active)
            .map(Employee::from)
            .ok_or_else(|| ApiError::not_found(error_messages::EMPLOYEE_NOT_FOUND))
    }

    async fn list_employees(&self, identity: &Identity) -> ApiResult<Vec<Employee>> {
        access_policy::ensure_can_list_employees(identity)?;
        let employees = self.employees.find_active().await?;
        Ok(employees.into_iter().map(Employee::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{identity_of_employee, register_request};
    use crate::test_utils::memory_store::MemoryEmployeeRepository;
    use ticketing_api::domain::{AccessLevel, Address};
    use ticketing_db::repository::Load;
    use tokio_test::assert_ok;

    fn directory() -> (EmployeeDirectory<MemoryEmployeeRepository>, Arc<MemoryEmployeeRepository>) {
        let repo = Arc::new(MemoryEmployeeRepository::new());
        (EmployeeDirectory::new(repo.clone()), repo)
    }

    async fn manager(directory: &EmployeeDirectory<MemoryEmployeeRepository>) -> Identity {
        let mut request = register_request(1, "boss@gardengroup.example");
        request.access_level = AccessLevel::Manager;
        identity_of_employee(&directory.register(request).await.unwrap())
    }

    #[tokio::test]
    async fn test_register_stores_hash_and_returns_active_employee() {
        let (directory, repo) = directory();
        let employee = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();

        assert!(employee.is_active);
        assert_eq!(employee.employee_number, 10);
        assert_eq!(employee.access_level, AccessLevel::Regular);

        let stored = repo.load(employee.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "password123");
        assert!(stored.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_request() {
        let (directory, _) = directory();
        let mut short_password = register_request(10, "ada@gardengroup.example");
        short_password.password = "abc".to_string();
        assert!(matches!(
            directory.register(short_password).await,
            Err(ApiError::ValidationError(_))
        ));

        let bad_email = register_request(11, "not-an-email");
        assert!(matches!(directory.register(bad_email).await, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_until_holder_deactivated() {
        let (directory, _) = directory();
        let boss = manager(&directory).await;
        let first = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();

        let duplicate = directory
            .register(register_request(11, "ADA@gardengroup.example"))
            .await;
        assert!(matches!(duplicate, Err(ApiError::Conflict(_))));

        directory.deactivate_employee(&boss, first.id).await.unwrap();
        assert_ok!(
            directory
                .register(register_request(11, "ada@gardengroup.example"))
                .await
        );
    }

    #[tokio::test]
    async fn test_duplicate_employee_number_conflicts() {
        let (directory, _) = directory();
        directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();
        let err = directory
            .register(register_request(10, "grace@gardengroup.example"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(message) if message == error_messages::EMPLOYEE_NUMBER_EXISTS));
    }

    #[tokio::test]
    async fn test_create_employee_requires_manager() {
        let (directory, _) = directory();
        let regular = identity_of_employee(
            &directory
                .register(register_request(10, "ada@gardengroup.example"))
                .await
                .unwrap(),
        );
        let result = directory
            .create_employee(&regular, register_request(11, "grace@gardengroup.example"))
            .await;
        assert!(matches!(result, Err(ApiError::PermissionDenied(_))));

        let boss = manager(&directory).await;
        assert_ok!(
            directory
                .create_employee(&boss, register_request(11, "grace@gardengroup.example"))
                .await
        );
    }

    #[tokio::test]
    async fn test_authenticate() {
        let (directory, _) = directory();
        let employee = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();

        let ok = directory
            .authenticate(LoginRequest {
                employee_number: 10,
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ok.id, employee.id);

        for (number, password) in [(10, "wrong-password"), (10, ""), (99, "password123")] {
            let err = directory
                .authenticate(LoginRequest {
                    employee_number: number,
                    password: password.to_string(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, ApiError::PermissionDenied(message) if message == error_messages::INVALID_CREDENTIALS));
        }
    }

    #[tokio::test]
    async fn test_deactivated_employee_cannot_authenticate() {
        let (directory, _) = directory();
        let boss = manager(&directory).await;
        let employee = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();
        directory.deactivate_employee(&boss, employee.id).await.unwrap();

        let result = directory
            .authenticate(LoginRequest {
                employee_number: 10,
                password: "password123".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::PermissionDenied(_))));
    }

    #[tokio::test]
    async fn test_manager_cannot_deactivate_self() {
        let (directory, repo) = directory();
        let boss = manager(&directory).await;
        let err = directory.deactivate_employee(&boss, boss.internal_id).await.unwrap_err();
        assert!(matches!(err, ApiError::PermissionDenied(message) if message == error_messages::CANNOT_DELETE_OWN_ACCOUNT));
        assert!(repo.load(boss.internal_id).await.unwrap().unwrap().is_active);
    }

    #[tokio::test]
    async fn test_deactivate_missing_is_not_found() {
        let (directory, _) = directory();
        let boss = manager(&directory).await;
        assert!(matches!(
            directory.deactivate_employee(&boss, Uuid::new_v4()).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_employee() {
        let (directory, _) = directory();
        let boss = manager(&directory).await;
        let employee = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();

        let changes = UpdateEmployeeRequest {
            department: Some("Service Desk".to_string()),
            access_level: Some(AccessLevel::ServiceDesk),
            address: Some(Address {
                street: Some("Main Street".to_string()),
                house_number: Some(12),
                city: Some("Haarlem".to_string()),
                postal_code: Some("2011 AB".to_string()),
            }),
            // Same email, different case, is not a conflict with itself
            email: Some("Ada@gardengroup.example".to_string()),
            ..Default::default()
        };
        let updated = directory.update_employee(&boss, employee.id, changes).await.unwrap();

        assert_eq!(updated.department, "Service Desk");
        assert_eq!(updated.access_level, AccessLevel::ServiceDesk);
        assert_eq!(updated.address.unwrap().city.as_deref(), Some("Haarlem"));
        assert_eq!(updated.employee_number, 10);
        assert_eq!(updated.first_name, employee.first_name);
    }

    #[tokio::test]
    async fn test_update_email_to_taken_address_conflicts() {
        let (directory, _) = directory();
        let boss = manager(&directory).await;
        let employee = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();

        let changes = UpdateEmployeeRequest {
            email: Some("boss@gardengroup.example".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            directory.update_employee(&boss, employee.id, changes).await,
            Err(ApiError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_update_requires_manager_and_existing_employee() {
        let (directory, _) = directory();
        let boss = manager(&directory).await;
        let employee = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();
        let regular = identity_of_employee(&employee);

        assert!(matches!(
            directory
                .update_employee(&regular, employee.id, UpdateEmployeeRequest::default())
                .await,
            Err(ApiError::PermissionDenied(_))
        ));
        assert!(matches!(
            directory
                .update_employee(&boss, Uuid::new_v4(), UpdateEmployeeRequest::default())
                .await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_reactivation_blocked_when_number_reused() {
        let (directory, _) = directory();
        let boss = manager(&directory).await;
        let original = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();
        directory.deactivate_employee(&boss, original.id).await.unwrap();
        directory
            .register(register_request(10, "grace@gardengroup.example"))
            .await
            .unwrap();

        let reactivate = UpdateEmployeeRequest {
            is_active: Some(true),
            ..Default::default()
        };
        assert!(matches!(
            directory.update_employee(&boss, original.id, reactivate).await,
            Err(ApiError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_lookups_and_listing() {
        let (directory, _) = directory();
        let boss = manager(&directory).await;
        let ada = directory
            .register(register_request(10, "ada@gardengroup.example"))
            .await
            .unwrap();
        let grace = directory
            .register(register_request(11, "grace@gardengroup.example"))
            .await
            .unwrap();
        directory.deactivate_employee(&boss, grace.id).await.unwrap();

        let listed = directory.list_employees(&boss).await.unwrap();
        let numbers: Vec<i32> = listed.iter().map(|e| e.employee_number).collect();
        assert_eq!(numbers, vec![1, 10]);

        let ada_identity = identity_of_employee(&ada);
        assert!(matches!(
            directory.list_employees(&ada_identity).await,
            Err(ApiError::PermissionDenied(_))
        ));
        assert_eq!(directory.get_current_employee(&ada_identity).await.unwrap().id, ada.id);
        assert_eq!(
            directory.get_employee(&ada_identity, ada.id).await.unwrap().unwrap().id,
            ada.id
        );
        assert!(matches!(
            directory.get_employee(&ada_identity, boss.internal_id).await,
            Err(ApiError::PermissionDenied(_))
        ));
        assert!(directory.get_employee(&boss, Uuid::new_v4()).await.unwrap().is_none());

        let grace_identity = identity_of_employee(&grace);
        assert!(matches!(
            directory.get_current_employee(&grace_identity).await,
            Err(ApiError::NotFound(_))
        ));
    }
}
