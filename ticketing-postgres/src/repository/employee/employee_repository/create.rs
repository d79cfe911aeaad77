use async_trait::async_trait;
use sqlx::Row;
use std::error::Error;
use ticketing_db::models::EmployeeModel;
use ticketing_db::repository::{Create, StoreError};

use super::repo_impl::EmployeeRepositoryImpl;
use crate::utils::map_unique_violation;

impl EmployeeRepositoryImpl {
    /// Inserts the employee. A number or email already held by an active
    /// employee is reported as [`StoreError::DuplicateKey`].
    pub(super) async fn create_impl(
        repo: &EmployeeRepositoryImpl,
        item: EmployeeModel,
    ) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        let address = item.address.clone().unwrap_or_default();

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO employee
            (id, employee_number, first_name, last_name, email, department, phone_number,
             address_street, address_house_number, address_city, address_postal_code,
             company, access_level, password_hash, is_active, created_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT DO NOTHING
            RETURNING id
            "#,
        )
        .bind(item.id)
        .bind(item.employee_number)
        .bind(item.first_name.as_str())
        .bind(item.last_name.as_str())
        .bind(item.email.as_str())
        .bind(item.department.as_str())
        .bind(item.phone_number.as_deref())
        .bind(address.street.as_deref())
        .bind(address.house_number)
        .bind(address.city.as_deref())
        .bind(address.postal_code.as_deref())
        .bind(item.company.as_str())
        .bind(item.access_level)
        .bind(&item.password_hash)
        .bind(item.is_active)
        .bind(item.created_date)
        .fetch_optional(&mut **transaction)
        .await
        .map_err(|e| map_unique_violation(e, "employee", &item.id.to_string()))?;

        if inserted.is_some() {
            return Ok(item);
        }

        // Nothing inserted: find out which active key is taken
        let number_taken: bool = sqlx::query(
            "SELECT EXISTS (SELECT 1 FROM employee WHERE is_active AND employee_number = $1) AS taken",
        )
        .bind(item.employee_number)
        .fetch_one(&mut **transaction)
        .await?
        .try_get("taken")?;

        let error = if number_taken {
            StoreError::duplicate("employee_number", item.employee_number.to_string())
        } else {
            StoreError::duplicate("email", item.email.as_str())
        };
        Err(Box::new(error))
    }
}

#[async_trait]
impl Create<EmployeeModel> for EmployeeRepositoryImpl {
    async fn create(&self, item: EmployeeModel) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
