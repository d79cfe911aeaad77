use postgres_unit_of_work::{Executor, TransactionAware};
use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

use crate::config::PostgresConfig;
use crate::repository::employee::EmployeeRepositoryImpl;
use crate::repository::ticket::TicketRepositoryImpl;

/// Entry point for building repositories over a connection pool
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        Ok(Self::new(Arc::new(config.connect().await?)))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Starts a transaction and builds every repository on it
    pub async fn begin_session(&self) -> Result<RepositorySession, sqlx::Error> {
        let tx = self.pool.begin().await?;
        debug!("repository session started");
        Ok(RepositorySession::new(Executor::new(tx)))
    }
}

/// All repositories sharing one transaction.
///
/// Dropping the session without [`commit`](Self::commit) rolls back.
pub struct RepositorySession {
    executor: Executor,
    pub ticket_repository: Arc<TicketRepositoryImpl>,
    pub employee_repository: Arc<EmployeeRepositoryImpl>,
}

impl RepositorySession {
    pub fn new(executor: Executor) -> Self {
        Self {
            ticket_repository: Arc::new(TicketRepositoryImpl::new(executor.clone())),
            employee_repository: Arc::new(EmployeeRepositoryImpl::new(executor.clone())),
            executor,
        }
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub async fn commit(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self.executor.tx.lock().await.take().ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        self.ticket_repository.on_commit().await?;
        self.employee_repository.on_commit().await?;
        debug!("repository session committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self.executor.tx.lock().await.take().ok_or("Transaction has been consumed")?;
        tx.rollback().await?;
        self.ticket_repository.on_rollback().await?;
        self.employee_repository.on_rollback().await?;
        debug!("repository session rolled back");
        Ok(())
    }
}
