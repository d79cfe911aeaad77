use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::priority::priority_label;
use super::ticket_status::TicketStatus;

/// Reporter details copied onto the ticket at creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedBy {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub phone_number: Option<String>,
    pub company: String,
    pub employee_number: i32,
}

/// One audit-trail entry on a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionStep {
    pub actor_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub ticket_number: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub reported_by: ReportedBy,
    pub assigned_to: Option<Uuid>,
    pub priority_level: i32,
    pub deadline: Option<DateTime<Utc>>,
    pub status: TicketStatus,
    pub resolution_notes: Option<String>,
    pub resolved_date: Option<DateTime<Utc>>,
    pub resolution_steps: Vec<ResolutionStep>,
}

impl Ticket {
    pub fn priority_label(&self) -> &'static str {
        priority_label(self.priority_level)
    }

    pub fn is_reported_by(&self, employee_number: i32) -> bool {
        self.reported_by.employee_number == employee_number
    }
}
