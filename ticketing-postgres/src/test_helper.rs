//! Transaction-scoped test isolation
//!
//! Each test runs inside a transaction that is rolled back when the
//! [`TestContext`] is dropped, so tests never see each other's rows.

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::PostgresConfig;
use crate::postgres_repositories::{PostgresRepositories, RepositorySession};

pub struct TestContext {
    session: RepositorySession,
}

impl TestContext {
    pub fn repos(&self) -> &RepositorySession {
        &self.session
    }
}

/// Connects to `DATABASE_URL`, applies the migrations and opens a session
/// that rolls back on drop
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let config = PostgresConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    let repos = PostgresRepositories::new(Arc::new(pool));
    let session = repos.begin_session().await?;

    Ok(TestContext { session })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ticket::ticket_repository::test_utils::{create_test_ticket, unique_ticket_number};
    use ticketing_db::repository::{Create, Load};

    #[tokio::test]
    #[ignore]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ticket = create_test_ticket(&unique_ticket_number(), 42);
        {
            let ctx = setup_test_context().await?;
            ctx.repos().ticket_repository.create(ticket.clone()).await?;
            assert!(ctx.repos().ticket_repository.load(ticket.id).await?.is_some());
        }

        let ctx = setup_test_context().await?;
        assert!(ctx.repos().ticket_repository.load(ticket.id).await?.is_none());

        Ok(())
    }
}
