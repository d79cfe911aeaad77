use async_trait::async_trait;
use std::error::Error;
use ticketing_db::models::EmployeeModel;
use ticketing_db::repository::Load;
use uuid::Uuid;

use super::repo_impl::EmployeeRepositoryImpl;
use crate::utils::TryFromRow;

impl EmployeeRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &EmployeeRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM employee WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.map(|row| EmployeeModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl Load<EmployeeModel> for EmployeeRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id).await
    }
}
