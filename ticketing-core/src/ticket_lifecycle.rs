//! Ticket creation, partial updates with audit trail, deletion and lookups.

use chrono::{DateTime, Datelike, Utc};
use std::sync::Arc;
use ticketing_api::constants::{error_messages, priority_levels, ticket_number::MAX_ALLOCATION_ATTEMPTS};
use ticketing_api::domain::{CreateTicketRequest, Identity, Ticket, TicketScope, TicketStatus, UpdateTicketRequest};
use ticketing_api::error::{ApiError, ApiResult};
use ticketing_db::models::{ReportedByModel, ResolutionStepModel, TicketModel};
use ticketing_db::repository::{EmployeeRepository, StoreError, TicketPatch, TicketRepository};
use ticketing_db::utils::to_heapless;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::ticket_number::{initial_sequence, ticket_number_for};

/// Action text recorded when a ticket gets an assignee
pub const TICKET_ASSIGNED_ACTION: &str = "Ticket assigned";

/// Input for ticket creation
#[derive(Debug, Clone, Default)]
pub struct NewTicket {
    pub description: String,
    pub priority_level: Option<i32>,
    pub deadline: Option<DateTime<Utc>>,
}

impl From<CreateTicketRequest> for NewTicket {
    fn from(request: CreateTicketRequest) -> Self {
        NewTicket {
            description: request.description,
            priority_level: request.priority_level,
            deadline: request.deadline,
        }
    }
}

/// Trimmed description, or `None` when nothing but whitespace is left
pub fn normalize_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn validate_priority(priority_level: i32) -> ApiResult<i32> {
    if (priority_levels::MIN..=priority_levels::MAX).contains(&priority_level) {
        Ok(priority_level)
    } else {
        Err(ApiError::validation(error_messages::INVALID_PRIORITY))
    }
}

/// A deadline equal to `now` is accepted; only strictly earlier instants fail
pub fn validate_deadline(deadline: DateTime<Utc>, now: DateTime<Utc>) -> ApiResult<DateTime<Utc>> {
    if deadline < now {
        Err(ApiError::validation(error_messages::DEADLINE_IN_PAST))
    } else {
        Ok(deadline)
    }
}

/// Turns a partial update request into the store patch.
///
/// Everything is validated before anything is written. Resolving stamps the
/// resolved date; assignment and resolution notes each append one step.
pub fn build_patch(
    changes: &UpdateTicketRequest,
    acting_user_id: Uuid,
    now: DateTime<Utc>,
) -> ApiResult<TicketPatch> {
    let mut patch = TicketPatch {
        description: changes.description.as_deref().and_then(normalize_description),
        ..Default::default()
    };

    if let Some(priority_level) = changes.priority_level {
        patch.priority_level = Some(validate_priority(priority_level)?);
    }

    if let Some(status) = &changes.status {
        let status: TicketStatus = status.parse().map_err(ApiError::ValidationError)?;
        if status == TicketStatus::Resolved {
            patch.resolved_date = Some(now);
        }
        patch.status = Some(status);
    }

    if let Some(deadline) = changes.deadline {
        patch.deadline = Some(validate_deadline(deadline, now)?);
    }

    if let Some(assignee_id) = changes.assigned_to {
        patch.assigned_to = Some(assignee_id);
        patch.append_steps.push(ResolutionStepModel {
            actor_id: acting_user_id,
            timestamp: now,
            action: TICKET_ASSIGNED_ACTION.to_string(),
        });
    }

    if let Some(notes) = changes.resolution_notes.as_deref().and_then(normalize_description) {
        patch.append_steps.push(ResolutionStepModel {
            actor_id: acting_user_id,
            timestamp: now,
            action: notes.clone(),
        });
        patch.resolution_notes = Some(notes);
    }

    Ok(patch)
}

/// Owns the ticket lifecycle rules. Holds no state besides the repositories.
pub struct TicketLifecycleManager<T, E> {
    tickets: Arc<T>,
    employees: Arc<E>,
}

impl<T, E> Clone for TicketLifecycleManager<T, E> {
    fn clone(&self) -> Self {
        Self {
            tickets: self.tickets.clone(),
            employees: self.employees.clone(),
        }
    }
}

impl<T, E> TicketLifecycleManager<T, E>
where
    T: TicketRepository,
    E: EmployeeRepository,
{
    pub fn new(tickets: Arc<T>, employees: Arc<E>) -> Self {
        Self { tickets, employees }
    }

    /// Creates a ticket reported by `reporter`.
    ///
    /// The ticket number uses the current ticket count plus one. When the
    /// store rejects the number as taken, allocation continues one past the
    /// highest sequence stored for the year.
    pub async fn create(&self, new_ticket: NewTicket, reporter: &Identity) -> ApiResult<Ticket> {
        let now = Utc::now();

        let description = normalize_description(&new_ticket.description)
            .ok_or_else(|| ApiError::validation(error_messages::INVALID_DESCRIPTION))?;
        let priority_level = match new_ticket.priority_level {
            Some(level) => validate_priority(level)?,
            None => priority_levels::DEFAULT,
        };
        if let Some(deadline) = new_ticket.deadline {
            validate_deadline(deadline, now)?;
        }

        let reporting_employee = self
            .employees
            .load(reporter.internal_id)
            .await?
            .filter(|employee| employee.is_active)
            .ok_or_else(|| ApiError::not_found(error_messages::EMPLOYEE_NOT_FOUND))?;

        let mut sequence = initial_sequence(self.tickets.count(TicketScope::All).await?);
        let mut ticket = TicketModel {
            id: Uuid::new_v4(),
            ticket_number: Default::default(),
            description,
            date: now,
            reported_by: ReportedByModel::snapshot(&reporting_employee),
            assigned_to: None,
            priority_level,
            deadline: new_ticket.deadline,
            status: TicketStatus::Open,
            resolution_notes: None,
            resolved_date: None,
            resolution_steps: Vec::new(),
        };

        for _ in 0..MAX_ALLOCATION_ATTEMPTS {
            let ticket_number = ticket_number_for(now, sequence);
            ticket.ticket_number =
                to_heapless(&ticket_number, "ticket_number").map_err(ApiError::InternalError)?;

            match self.tickets.create(ticket.clone()).await {
                Ok(saved) => {
                    info!(
                        ticket_id = %saved.id,
                        ticket_number = %saved.ticket_number,
                        employee_number = saved.reported_by.employee_number,
                        "ticket created"
                    );
                    return Ok(Ticket::from(saved));
                }
                Err(error) => match StoreError::find(error.as_ref()) {
                    Some(StoreError::DuplicateKey { .. }) => {
                        let highest = self.tickets.max_sequence(now.year()).await?;
                        sequence = highest.unwrap_or(sequence).max(sequence) + 1;
                        warn!(ticket_number = %ticket_number, next_sequence = sequence, "ticket number taken");
                    }
                    None => return Err(error.into()),
                },
            }
        }

        Err(ApiError::conflict("Could not allocate a unique ticket number"))
    }

    /// Applies a partial update authored by `acting_user_id`.
    ///
    /// A request without any recognized change does not reach the store.
    pub async fn update(
        &self,
        ticket_id: Uuid,
        changes: &UpdateTicketRequest,
        acting_user_id: Uuid,
    ) -> ApiResult<()> {
        let patch = build_patch(changes, acting_user_id, Utc::now())?;
        if patch.is_empty() {
            debug!(ticket_id = %ticket_id, "update without changes skipped");
            return Ok(());
        }

        let status = patch.status;
        if !self.tickets.update(ticket_id, patch).await? {
            return Err(ApiError::not_found(error_messages::TICKET_NOT_FOUND));
        }

        info!(ticket_id = %ticket_id, actor_id = %acting_user_id, status = ?status, "ticket updated");
        Ok(())
    }

    pub async fn delete(&self, ticket_id: Uuid) -> ApiResult<()> {
        if !self.tickets.delete(ticket_id).await? {
            return Err(ApiError::not_found(error_messages::TICKET_NOT_FOUND));
        }
        info!(ticket_id = %ticket_id, "ticket deleted");
        Ok(())
    }

    pub async fn get(&self, ticket_id: Uuid) -> ApiResult<Option<Ticket>> {
        Ok(self.tickets.load(ticket_id).await?.map(Ticket::from))
    }

    pub async fn list(&self, scope: TicketScope) -> ApiResult<Vec<Ticket>> {
        let tickets = self.tickets.find(scope).await?;
        Ok(tickets.into_iter().map(Ticket::from).collect())
    }

    pub async fn list_all(&self) -> ApiResult<Vec<Ticket>> {
        self.list(TicketScope::All).await
    }

    pub async fn list_by_reporter(&self, employee_number: i32) -> ApiResult<Vec<Ticket>> {
        self.list(TicketScope::ReportedBy(employee_number)).await
    }

    pub async fn list_by_assignee(&self, employee_id: Uuid) -> ApiResult<Vec<Ticket>> {
        self.list(TicketScope::AssignedTo(employee_id)).await
    }
}
