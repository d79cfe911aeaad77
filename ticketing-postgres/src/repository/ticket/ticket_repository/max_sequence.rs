use sqlx::Row;
use std::error::Error;
use ticketing_api::constants::ticket_number::PREFIX;

use super::repo_impl::TicketRepositoryImpl;

impl TicketRepositoryImpl {
    pub(super) async fn max_sequence_impl(
        repo: &TicketRepositoryImpl,
        year: i32,
    ) -> Result<Option<i64>, Box<dyn Error + Send + Sync>> {
        let year_prefix = format!("{PREFIX}-{year}-");
        let pattern = format!("^{PREFIX}-{year}-[0-9]+$");

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(
                r#"
                SELECT MAX(CAST(SUBSTRING(ticket_number FROM LENGTH($1) + 1) AS BIGINT)) AS max_sequence
                FROM ticket
                WHERE ticket_number ~ $2
                "#,
            )
            .bind(&year_prefix)
            .bind(&pattern)
            .fetch_one(&mut **transaction)
            .await?
        };

        Ok(row.try_get("max_sequence")?)
    }
}
