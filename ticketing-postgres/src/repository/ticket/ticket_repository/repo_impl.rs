use async_trait::async_trait;
use postgres_unit_of_work::{Executor, TransactionAware, TransactionResult};
use sqlx::types::Json;
use sqlx::{postgres::PgRow, Postgres, QueryBuilder, Row};
use std::error::Error;
use ticketing_api::domain::TicketScope;
use ticketing_db::models::{ReportedByModel, ResolutionStepModel, TicketModel};
use ticketing_db::repository::{PriorityCount, StatusCount, TicketPatch, TicketRepository};
use uuid::Uuid;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct TicketRepositoryImpl {
    pub executor: Executor,
}

impl TicketRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Appends the `WHERE` clause selecting `scope`
    pub(super) fn push_scope_filter(builder: &mut QueryBuilder<'_, Postgres>, scope: TicketScope) {
        match scope {
            TicketScope::All => {}
            TicketScope::AssignedTo(employee_id) => {
                builder.push(" WHERE assigned_to = ").push_bind(employee_id);
            }
            TicketScope::ReportedBy(employee_number) => {
                builder
                    .push(" WHERE reported_by_employee_number = ")
                    .push_bind(employee_number);
            }
        }
    }
}

impl TryFromRow<PgRow> for TicketModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let steps: Json<Vec<ResolutionStepModel>> = row.try_get("resolution_steps")?;
        Ok(TicketModel {
            id: row.try_get("id")?,
            ticket_number: get_heapless_string(row, "ticket_number")?,
            description: row.try_get("description")?,
            date: row.try_get("date")?,
            reported_by: ReportedByModel {
                first_name: get_heapless_string(row, "reported_by_first_name")?,
                last_name: get_heapless_string(row, "reported_by_last_name")?,
                email: get_heapless_string(row, "reported_by_email")?,
                department: get_heapless_string(row, "reported_by_department")?,
                phone_number: get_optional_heapless_string(row, "reported_by_phone_number")?,
                company: get_heapless_string(row, "reported_by_company")?,
                employee_number: row.try_get("reported_by_employee_number")?,
            },
            assigned_to: row.try_get("assigned_to")?,
            priority_level: row.try_get("priority_level")?,
            deadline: row.try_get("deadline")?,
            status: row.try_get("status")?,
            resolution_notes: row.try_get("resolution_notes")?,
            resolved_date: row.try_get("resolved_date")?,
            resolution_steps: steps.0,
        })
    }
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find(&self, scope: TicketScope) -> Result<Vec<TicketModel>, Box<dyn Error + Send + Sync>> {
        Self::find_impl(self, scope).await
    }

    async fn count(&self, scope: TicketScope) -> Result<i64, Box<dyn Error + Send + Sync>> {
        Self::count_impl(self, scope).await
    }

    async fn update(&self, id: Uuid, patch: TicketPatch) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, id, patch).await
    }

    async fn count_by_status(&self, scope: TicketScope) -> Result<Vec<StatusCount>, Box<dyn Error + Send + Sync>> {
        Self::count_by_status_impl(self, scope).await
    }

    async fn count_by_priority(&self, scope: TicketScope) -> Result<Vec<PriorityCount>, Box<dyn Error + Send + Sync>> {
        Self::count_by_priority_impl(self, scope).await
    }

    async fn max_sequence(&self, year: i32) -> Result<Option<i64>, Box<dyn Error + Send + Sync>> {
        Self::max_sequence_impl(self, year).await
    }
}

#[async_trait]
impl TransactionAware for TicketRepositoryImpl {
    async fn on_commit(&self) -> TransactionResult<()> {
        Ok(())
    }

    async fn on_rollback(&self) -> TransactionResult<()> {
        Ok(())
    }
}
