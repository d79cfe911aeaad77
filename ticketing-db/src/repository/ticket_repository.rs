use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::error::Error;
use ticketing_api::domain::{TicketScope, TicketStatus};
use uuid::Uuid;

use crate::models::{ResolutionStepModel, TicketModel};
use crate::repository::{Create, Delete, Load};

/// Field changes for one ticket, written by the store as a single atomic update.
///
/// `None` leaves the stored value untouched. Steps are appended after the
/// existing resolution steps, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPatch {
    pub description: Option<String>,
    pub priority_level: Option<i32>,
    pub status: Option<TicketStatus>,
    pub deadline: Option<DateTime<Utc>>,
    pub assigned_to: Option<Uuid>,
    pub resolution_notes: Option<String>,
    pub resolved_date: Option<DateTime<Utc>>,
    pub append_steps: Vec<ResolutionStepModel>,
}

impl TicketPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.priority_level.is_none()
            && self.status.is_none()
            && self.deadline.is_none()
            && self.assigned_to.is_none()
            && self.resolution_notes.is_none()
            && self.resolved_date.is_none()
            && self.append_steps.is_empty()
    }

    /// Applies the patch to an in-memory model
    pub fn apply_to(&self, ticket: &mut TicketModel) {
        if let Some(description) = &self.description {
            ticket.description = description.clone();
        }
        if let Some(priority_level) = self.priority_level {
            ticket.priority_level = priority_level;
        }
        if let Some(status) = self.status {
            ticket.status = status;
        }
        if let Some(deadline) = self.deadline {
            ticket.deadline = Some(deadline);
        }
        if let Some(assigned_to) = self.assigned_to {
            ticket.assigned_to = Some(assigned_to);
        }
        if let Some(notes) = &self.resolution_notes {
            ticket.resolution_notes = Some(notes.clone());
        }
        if let Some(resolved_date) = self.resolved_date {
            ticket.resolved_date = Some(resolved_date);
        }
        ticket.resolution_steps.extend(self.append_steps.iter().cloned());
    }
}

/// Number of tickets in one status, as returned by a grouping query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: TicketStatus,
    pub count: i64,
}

/// Number of tickets with one raw priority value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityCount {
    pub priority_level: i32,
    pub count: i64,
}

/// Returns true when `ticket` falls inside `scope`
pub fn scope_matches(scope: &TicketScope, ticket: &TicketModel) -> bool {
    match scope {
        TicketScope::All => true,
        TicketScope::AssignedTo(employee_id) => ticket.assigned_to == Some(*employee_id),
        TicketScope::ReportedBy(employee_number) => {
            ticket.reported_by.employee_number == *employee_number
        }
    }
}

/// Ticket persistence.
///
/// Listings are ordered by creation date ascending and return an empty
/// vector when nothing matches.
#[async_trait]
pub trait TicketRepository: Create<TicketModel> + Load<TicketModel> + Delete {
    async fn find(&self, scope: TicketScope) -> Result<Vec<TicketModel>, Box<dyn Error + Send + Sync>>;

    async fn count(&self, scope: TicketScope) -> Result<i64, Box<dyn Error + Send + Sync>>;

    /// Writes every change in `patch` in one update.
    /// Returns `false` without creating anything when no ticket has this ID.
    async fn update(&self, id: Uuid, patch: TicketPatch) -> Result<bool, Box<dyn Error + Send + Sync>>;

    /// Grouped ticket counts per status; statuses with no tickets are omitted
    async fn count_by_status(&self, scope: TicketScope) -> Result<Vec<StatusCount>, Box<dyn Error + Send + Sync>>;

    /// Grouped ticket counts per stored priority value
    async fn count_by_priority(&self, scope: TicketScope) -> Result<Vec<PriorityCount>, Box<dyn Error + Send + Sync>>;

    /// Highest sequence among the ticket numbers of `year`, or `None` when
    /// that year has no tickets
    async fn max_sequence(&self, year: i32) -> Result<Option<i64>, Box<dyn Error + Send + Sync>>;
}
