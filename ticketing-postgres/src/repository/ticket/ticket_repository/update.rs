use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;
use ticketing_db::repository::TicketPatch;
use uuid::Uuid;

use super::repo_impl::TicketRepositoryImpl;

impl TicketRepositoryImpl {
    /// Writes all patched columns and appends the new resolution steps to the
    /// JSONB array in a single `UPDATE`.
    pub(super) async fn update_impl(
        repo: &TicketRepositoryImpl,
        id: Uuid,
        patch: TicketPatch,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE ticket SET ");
        {
            let mut columns = builder.separated(", ");
            // Keeps the statement valid when the patch is empty
            columns.push("id = id");
            if let Some(description) = patch.description {
                columns.push("description = ").push_bind_unseparated(description);
            }
            if let Some(priority_level) = patch.priority_level {
                columns.push("priority_level = ").push_bind_unseparated(priority_level);
            }
            if let Some(status) = patch.status {
                columns.push("status = ").push_bind_unseparated(status);
            }
            if let Some(deadline) = patch.deadline {
                columns.push("deadline = ").push_bind_unseparated(deadline);
            }
            if let Some(assigned_to) = patch.assigned_to {
                columns.push("assigned_to = ").push_bind_unseparated(assigned_to);
            }
            if let Some(resolution_notes) = patch.resolution_notes {
                columns.push("resolution_notes = ").push_bind_unseparated(resolution_notes);
            }
            if let Some(resolved_date) = patch.resolved_date {
                columns.push("resolved_date = ").push_bind_unseparated(resolved_date);
            }
            if !patch.append_steps.is_empty() {
                columns
                    .push("resolution_steps = resolution_steps || ")
                    .push_bind_unseparated(Json(patch.append_steps));
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let result = builder.build().execute(&mut **transaction).await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::ticket::ticket_repository::test_utils::{create_test_ticket, unique_ticket_number};
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use ticketing_api::domain::TicketStatus;
    use ticketing_db::models::ResolutionStepModel;
    use ticketing_db::repository::{Create, Load, TicketPatch, TicketRepository};
    use uuid::Uuid;

    #[tokio::test]
    #[ignore]
    async fn test_update_only_touches_patched_columns() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ticket_repo = &ctx.repos().ticket_repository;

        let ticket = create_test_ticket(&unique_ticket_number(), 42);
        ticket_repo.create(ticket.clone()).await?;

        let patch = TicketPatch {
            priority_level: Some(3),
            ..Default::default()
        };
        assert!(ticket_repo.update(ticket.id, patch).await?);

        let loaded = ticket_repo.load(ticket.id).await?.expect("ticket should exist");
        assert_eq!(loaded.priority_level, 3);
        assert_eq!(loaded.description, ticket.description);
        assert_eq!(loaded.status, ticket.status);
        assert_eq!(loaded.assigned_to, None);

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn test_update_appends_steps() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ticket_repo = &ctx.repos().ticket_repository;

        let ticket = create_test_ticket(&unique_ticket_number(), 42);
        ticket_repo.create(ticket.clone()).await?;

        let actor = Uuid::new_v4();
        let step = |action: &str| ResolutionStepModel {
            actor_id: actor,
            timestamp: Utc::now(),
            action: action.to_string(),
        };

        let assign = TicketPatch {
            assigned_to: Some(actor),
            status: Some(TicketStatus::InProgress),
            append_steps: vec![step("Ticket assigned")],
            ..Default::default()
        };
        ticket_repo.update(ticket.id, assign).await?;

        let resolve = TicketPatch {
            status: Some(TicketStatus::Resolved),
            resolved_date: Some(Utc::now()),
            resolution_notes: Some("Cleared the paper tray".to_string()),
            append_steps: vec![step("Cleared the paper tray")],
            ..Default::default()
        };
        ticket_repo.update(ticket.id, resolve).await?;

        let loaded = ticket_repo.load(ticket.id).await?.expect("ticket should exist");
        assert_eq!(loaded.status, TicketStatus::Resolved);
        assert_eq!(loaded.assigned_to, Some(actor));
        assert!(loaded.resolved_date.is_some());
        let actions: Vec<&str> = loaded.resolution_steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(actions, vec!["Ticket assigned", "Cleared the paper tray"]);

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn test_update_missing_ticket() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ticket_repo = &ctx.repos().ticket_repository;

        let patch = TicketPatch {
            priority_level: Some(1),
            ..Default::default()
        };
        assert!(!ticket_repo.update(Uuid::new_v4(), patch).await?);

        Ok(())
    }
}
