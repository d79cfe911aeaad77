use async_trait::async_trait;
use std::error::Error;
use ticketing_db::models::TicketModel;
use ticketing_db::repository::Load;
use uuid::Uuid;

use super::repo_impl::TicketRepositoryImpl;
use crate::utils::TryFromRow;

impl TicketRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &TicketRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<TicketModel>, Box<dyn Error + Send + Sync>> {
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM ticket WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.map(|row| TicketModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl Load<TicketModel> for TicketRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<TicketModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id).await
    }
}
