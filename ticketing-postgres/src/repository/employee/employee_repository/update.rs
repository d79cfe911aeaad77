use sqlx::Row;
use std::error::Error;
use ticketing_db::models::EmployeeModel;
use ticketing_db::repository::StoreError;

use super::repo_impl::EmployeeRepositoryImpl;
use crate::utils::map_unique_violation;

impl EmployeeRepositoryImpl {
    /// Replaces the mutable columns. Employee number, password hash and
    /// created date are never written here.
    ///
    /// Keys taken by another active employee are reported as
    /// [`StoreError::DuplicateKey`] before the update runs, so the
    /// transaction stays usable.
    pub(super) async fn update_impl(
        repo: &EmployeeRepositoryImpl,
        employee: &EmployeeModel,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let address = employee.address.clone().unwrap_or_default();

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        if employee.is_active {
            let taken = sqlx::query(
                r#"
                SELECT
                    EXISTS (SELECT 1 FROM employee
                            WHERE is_active AND id <> $1
                              AND employee_number = (SELECT employee_number FROM employee WHERE id = $1)) AS number_taken,
                    EXISTS (SELECT 1 FROM employee
                            WHERE is_active AND id <> $1 AND LOWER(email) = LOWER($2)) AS email_taken
                "#,
            )
            .bind(employee.id)
            .bind(employee.email.as_str())
            .fetch_one(&mut **transaction)
            .await?;

            if taken.try_get::<bool, _>("number_taken")? {
                return Err(Box::new(StoreError::duplicate(
                    "employee_number",
                    employee.employee_number.to_string(),
                )));
            }
            if taken.try_get::<bool, _>("email_taken")? {
                return Err(Box::new(StoreError::duplicate("email", employee.email.as_str())));
            }
        }

        let result = sqlx::query(
            r#"
            UPDATE employee SET
                first_name = $2,
                last_name = $3,
                email = $4,
                department = $5,
                phone_number = $6,
                address_street = $7,
                address_house_number = $8,
                address_city = $9,
                address_postal_code = $10,
                company = $11,
                access_level = $12,
                is_active = $13
            WHERE id = $1
            "#,
        )
        .bind(employee.id)
        .bind(employee.first_name.as_str())
        .bind(employee.last_name.as_str())
        .bind(employee.email.as_str())
        .bind(employee.department.as_str())
        .bind(employee.phone_number.as_deref())
        .bind(address.street.as_deref())
        .bind(address.house_number)
        .bind(address.city.as_deref())
        .bind(address.postal_code.as_deref())
        .bind(employee.company.as_str())
        .bind(employee.access_level)
        .bind(employee.is_active)
        .execute(&mut **transaction)
        .await
        .map_err(|e| map_unique_violation(e, "email", employee.email.as_str()))?;

        Ok(result.rows_affected() > 0)
    }
}
