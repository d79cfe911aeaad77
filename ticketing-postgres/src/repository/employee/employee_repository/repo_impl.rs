use async_trait::async_trait;
use postgres_unit_of_work::{Executor, TransactionAware, TransactionResult};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use ticketing_db::models::{AddressModel, EmployeeModel};
use ticketing_db::repository::EmployeeRepository;
use uuid::Uuid;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct EmployeeRepositoryImpl {
    pub executor: Executor,
}

impl EmployeeRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for EmployeeModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let address = AddressModel {
            street: get_optional_heapless_string(row, "address_street")?,
            house_number: row.try_get("address_house_number")?,
            city: get_optional_heapless_string(row, "address_city")?,
            postal_code: get_optional_heapless_string(row, "address_postal_code")?,
        };
        let has_address = address != AddressModel::default();

        Ok(EmployeeModel {
            id: row.try_get("id")?,
            employee_number: row.try_get("employee_number")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_heapless_string(row, "last_name")?,
            email: get_heapless_string(row, "email")?,
            department: get_heapless_string(row, "department")?,
            phone_number: get_optional_heapless_string(row, "phone_number")?,
            address: has_address.then_some(address),
            company: get_heapless_string(row, "company")?,
            access_level: row.try_get("access_level")?,
            password_hash: row.try_get("password_hash")?,
            is_active: row.try_get("is_active")?,
            created_date: row.try_get("created_date")?,
        })
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeRepositoryImpl {
    async fn find_active_by_number(
        &self,
        employee_number: i32,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_active_by_number_impl(self, employee_number).await
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_active_by_email_impl(self, email).await
    }

    async fn find_active(&self) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_active_impl(self).await
    }

    async fn update(&self, employee: &EmployeeModel) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, employee).await
    }

    async fn deactivate(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::deactivate_impl(self, id).await
    }

    async fn purge(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::purge_impl(self, id).await
    }
}

#[async_trait]
impl TransactionAware for EmployeeRepositoryImpl {
    async fn on_commit(&self) -> TransactionResult<()> {
        Ok(())
    }

    async fn on_rollback(&self) -> TransactionResult<()> {
        Ok(())
    }
}
