use sqlx::{Postgres, QueryBuilder, Row};
use std::error::Error;
use ticketing_api::domain::TicketScope;
use ticketing_db::repository::{PriorityCount, StatusCount};

use super::repo_impl::TicketRepositoryImpl;

impl TicketRepositoryImpl {
    pub(super) async fn count_by_status_impl(
        repo: &TicketRepositoryImpl,
        scope: TicketScope,
    ) -> Result<Vec<StatusCount>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT status, COUNT(*) AS count FROM ticket");
        Self::push_scope_filter(&mut builder, scope);
        builder.push(" GROUP BY status ORDER BY status");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_all(&mut **transaction).await?
        };

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            counts.push(StatusCount {
                status: row.try_get("status")?,
                count: row.try_get("count")?,
            });
        }
        Ok(counts)
    }

    pub(super) async fn count_by_priority_impl(
        repo: &TicketRepositoryImpl,
        scope: TicketScope,
    ) -> Result<Vec<PriorityCount>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT priority_level, COUNT(*) AS count FROM ticket");
        Self::push_scope_filter(&mut builder, scope);
        builder.push(" GROUP BY priority_level ORDER BY priority_level");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_all(&mut **transaction).await?
        };

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            counts.push(PriorityCount {
                priority_level: row.try_get("priority_level")?,
                count: row.try_get("count")?,
            });
        }
        Ok(counts)
    }
}
