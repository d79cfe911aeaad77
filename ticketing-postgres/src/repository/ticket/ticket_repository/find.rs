use sqlx::{Postgres, QueryBuilder};
use std::error::Error;
use ticketing_api::domain::TicketScope;
use ticketing_db::models::TicketModel;

use super::repo_impl::TicketRepositoryImpl;
use crate::utils::TryFromRow;

impl TicketRepositoryImpl {
    pub(super) async fn find_impl(
        repo: &TicketRepositoryImpl,
        scope: TicketScope,
    ) -> Result<Vec<TicketModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM ticket");
        Self::push_scope_filter(&mut builder, scope);
        builder.push(" ORDER BY date ASC, ticket_number ASC");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_all(&mut **transaction).await?
        };

        let mut tickets = Vec::with_capacity(rows.len());
        for row in rows {
            tickets.push(TicketModel::try_from_row(&row)?);
        }
        Ok(tickets)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::ticket::ticket_repository::test_utils::{create_test_ticket, unique_ticket_number};
    use crate::test_helper::setup_test_context;
    use ticketing_api::domain::TicketScope;
    use ticketing_db::repository::{Create, TicketRepository};
    use uuid::Uuid;

    #[tokio::test]
    #[ignore]
    async fn test_find_by_scope() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ticket_repo = &ctx.repos().ticket_repository;

        let reporter_number = 900_001;
        let assignee = Uuid::new_v4();

        let mut assigned = create_test_ticket(&unique_ticket_number(), reporter_number);
        assigned.assigned_to = Some(assignee);
        ticket_repo.create(assigned.clone()).await?;
        let unassigned = create_test_ticket(&unique_ticket_number(), reporter_number);
        ticket_repo.create(unassigned.clone()).await?;
        ticket_repo.create(create_test_ticket(&unique_ticket_number(), 900_002)).await?;

        let reported = ticket_repo.find(TicketScope::ReportedBy(reporter_number)).await?;
        assert_eq!(reported.len(), 2);
        assert!(reported.iter().all(|t| t.reported_by.employee_number == reporter_number));

        let mine = ticket_repo.find(TicketScope::AssignedTo(assignee)).await?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, assigned.id);

        assert!(ticket_repo.find(TicketScope::AssignedTo(Uuid::new_v4())).await?.is_empty());

        let all = ticket_repo.find(TicketScope::All).await?;
        assert!(all.iter().any(|t| t.id == unassigned.id));

        Ok(())
    }
}
