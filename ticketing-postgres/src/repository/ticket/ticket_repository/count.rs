use sqlx::{Postgres, QueryBuilder, Row};
use std::error::Error;
use ticketing_api::domain::TicketScope;

use super::repo_impl::TicketRepositoryImpl;

impl TicketRepositoryImpl {
    pub(super) async fn count_impl(
        repo: &TicketRepositoryImpl,
        scope: TicketScope,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) AS count FROM ticket");
        Self::push_scope_filter(&mut builder, scope);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_one(&mut **transaction).await?
        };

        Ok(row.try_get("count")?)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::ticket::ticket_repository::test_utils::{create_test_ticket, unique_ticket_number};
    use crate::test_helper::setup_test_context;
    use ticketing_api::domain::TicketScope;
    use ticketing_db::repository::{Create, TicketRepository};

    #[tokio::test]
    #[ignore]
    async fn test_count() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ticket_repo = &ctx.repos().ticket_repository;

        let before = ticket_repo.count(TicketScope::All).await?;
        ticket_repo.create(create_test_ticket(&unique_ticket_number(), 900_010)).await?;
        ticket_repo.create(create_test_ticket(&unique_ticket_number(), 900_010)).await?;

        assert_eq!(ticket_repo.count(TicketScope::All).await?, before + 2);
        assert_eq!(ticket_repo.count(TicketScope::ReportedBy(900_010)).await?, 2);

        Ok(())
    }
}
