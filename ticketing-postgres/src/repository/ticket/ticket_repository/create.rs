use async_trait::async_trait;
use sqlx::types::Json;
use std::error::Error;
use ticketing_db::models::TicketModel;
use ticketing_db::repository::{Create, StoreError};
use tracing::debug;

use super::repo_impl::TicketRepositoryImpl;
use crate::utils::map_unique_violation;

impl TicketRepositoryImpl {
    /// Inserts the ticket. A taken ticket number leaves the transaction usable
    /// and is reported as [`StoreError::DuplicateKey`].
    pub(super) async fn create_impl(
        repo: &TicketRepositoryImpl,
        item: TicketModel,
    ) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
        let inserted = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            sqlx::query(
                r#"
                INSERT INTO ticket
                (id, ticket_number, description, date,
                 reported_by_first_name, reported_by_last_name, reported_by_email, reported_by_department,
                 reported_by_phone_number, reported_by_company, reported_by_employee_number,
                 assigned_to, priority_level, deadline, status, resolution_notes, resolved_date, resolution_steps)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
                ON CONFLICT (ticket_number) DO NOTHING
                RETURNING id
                "#,
            )
            .bind(item.id)
            .bind(item.ticket_number.as_str())
            .bind(&item.description)
            .bind(item.date)
            .bind(item.reported_by.first_name.as_str())
            .bind(item.reported_by.last_name.as_str())
            .bind(item.reported_by.email.as_str())
            .bind(item.reported_by.department.as_str())
            .bind(item.reported_by.phone_number.as_deref())
            .bind(item.reported_by.company.as_str())
            .bind(item.reported_by.employee_number)
            .bind(item.assigned_to)
            .bind(item.priority_level)
            .bind(item.deadline)
            .bind(item.status)
            .bind(item.resolution_notes.as_deref())
            .bind(item.resolved_date)
            .bind(Json(&item.resolution_steps))
            .fetch_optional(&mut **transaction)
            .await
            .map_err(|e| map_unique_violation(e, "id", &item.id.to_string()))?
        };

        if inserted.is_none() {
            debug!(ticket_number = %item.ticket_number, "ticket number already taken");
            return Err(Box::new(StoreError::duplicate("ticket_number", item.ticket_number.as_str())));
        }
        Ok(item)
    }
}

#[async_trait]
impl Create<TicketModel> for TicketRepositoryImpl {
    async fn create(&self, item: TicketModel) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::ticket::ticket_repository::test_utils::{create_test_ticket, unique_ticket_number};
    use crate::test_helper::setup_test_context;
    use ticketing_db::repository::{Create, Load, StoreError};

    #[tokio::test]
    #[ignore]
    async fn test_create_and_load() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ticket_repo = &ctx.repos().ticket_repository;

        let ticket = create_test_ticket(&unique_ticket_number(), 42);
        let saved = ticket_repo.create(ticket.clone()).await?;
        assert_eq!(saved.id, ticket.id);

        let loaded = ticket_repo.load(ticket.id).await?.expect("ticket should exist");
        assert_eq!(loaded.ticket_number, ticket.ticket_number);
        assert_eq!(loaded.reported_by, ticket.reported_by);
        assert_eq!(loaded.status, ticket.status);
        assert!(loaded.resolution_steps.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn test_duplicate_ticket_number_keeps_transaction_usable() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ticket_repo = &ctx.repos().ticket_repository;

        let number = unique_ticket_number();
        ticket_repo.create(create_test_ticket(&number, 42)).await?;

        let err = ticket_repo.create(create_test_ticket(&number, 43)).await.unwrap_err();
        assert!(matches!(
            StoreError::find(err.as_ref()),
            Some(StoreError::DuplicateKey { .. })
        ));

        // Retrying with another number still works in the same transaction
        let retry = create_test_ticket(&unique_ticket_number(), 43);
        ticket_repo.create(retry.clone()).await?;
        assert!(ticket_repo.load(retry.id).await?.is_some());

        Ok(())
    }
}
