use std::error::Error;
use ticketing_db::models::EmployeeModel;

use super::repo_impl::EmployeeRepositoryImpl;
use crate::utils::TryFromRow;

impl EmployeeRepositoryImpl {
    pub(super) async fn find_active_by_number_impl(
        repo: &EmployeeRepositoryImpl,
        employee_number: i32,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM employee WHERE is_active AND employee_number = $1")
                .bind(employee_number)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.map(|row| EmployeeModel::try_from_row(&row)).transpose()
    }

    pub(super) async fn find_active_by_email_impl(
        repo: &EmployeeRepositoryImpl,
        email: &str,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM employee WHERE is_active AND LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.map(|row| EmployeeModel::try_from_row(&row)).transpose()
    }

    pub(super) async fn find_active_impl(
        repo: &EmployeeRepositoryImpl,
    ) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM employee WHERE is_active ORDER BY employee_number")
                .fetch_all(&mut **transaction)
                .await?
        };

        let mut employees = Vec::with_capacity(rows.len());
        for row in rows {
            employees.push(EmployeeModel::try_from_row(&row)?);
        }
        Ok(employees)
    }
}
