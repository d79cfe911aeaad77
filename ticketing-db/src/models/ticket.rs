use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use ticketing_api::domain::{ReportedBy, ResolutionStep, Ticket, TicketStatus};
use uuid::Uuid;

use crate::models::{EmployeeModel, Identifiable};

/// Copy of the reporter taken when the ticket is created.
/// Later changes to the employee record do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedByModel {
    pub first_name: HeaplessString<50>,
    pub last_name: HeaplessString<50>,
    pub email: HeaplessString<100>,
    pub department: HeaplessString<50>,
    pub phone_number: Option<HeaplessString<20>>,
    pub company: HeaplessString<50>,
    pub employee_number: i32,
}

impl ReportedByModel {
    pub fn snapshot(employee: &EmployeeModel) -> Self {
        ReportedByModel {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            phone_number: employee.phone_number.clone(),
            company: employee.company.clone(),
            employee_number: employee.employee_number,
        }
    }
}

/// Audit-trail entry. Only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStepModel {
    /// Internal id of the employee who performed the action
    pub actor_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: String,
}

/// Database model for Ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketModel {
    pub id: Uuid,

    /// `TGG-YYYY-NNNNNN`, unique across all tickets
    pub ticket_number: HeaplessString<20>,

    pub description: String,

    /// Creation time, set by the system
    pub date: DateTime<Utc>,

    pub reported_by: ReportedByModel,

    /// References EmployeeModel.id of a service desk employee or manager
    pub assigned_to: Option<Uuid>,

    /// 1 = Low, 2 = Medium, 3 = High, 4 = Critical
    pub priority_level: i32,

    pub deadline: Option<DateTime<Utc>>,
    pub status: TicketStatus,
    pub resolution_notes: Option<String>,

    /// Stamped when the status moves to resolved
    pub resolved_date: Option<DateTime<Utc>>,

    pub resolution_steps: Vec<ResolutionStepModel>,
}

impl Identifiable for TicketModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<&ReportedByModel> for ReportedBy {
    fn from(model: &ReportedByModel) -> Self {
        ReportedBy {
            first_name: model.first_name.to_string(),
            last_name: model.last_name.to_string(),
            email: model.email.to_string(),
            department: model.department.to_string(),
            phone_number: model.phone_number.as_ref().map(|s| s.to_string()),
            company: model.company.to_string(),
            employee_number: model.employee_number,
        }
    }
}

impl From<&ResolutionStepModel> for ResolutionStep {
    fn from(model: &ResolutionStepModel) -> Self {
        ResolutionStep {
            actor_id: model.actor_id,
            timestamp: model.timestamp,
            action: model.action.clone(),
        }
    }
}

impl From<&TicketModel> for Ticket {
    fn from(model: &TicketModel) -> Self {
        Ticket {
            id: model.id,
            ticket_number: model.ticket_number.to_string(),
            description: model.description.clone(),
            date: model.date,
            reported_by: ReportedBy::from(&model.reported_by),
            assigned_to: model.assigned_to,
            priority_level: model.priority_level,
            deadline: model.deadline,
            status: model.status,
            resolution_notes: model.resolution_notes.clone(),
            resolved_date: model.resolved_date,
            resolution_steps: model.resolution_steps.iter().map(ResolutionStep::from).collect(),
        }
    }
}

impl From<TicketModel> for Ticket {
    fn from(model: TicketModel) -> Self {
        Ticket::from(&model)
    }
}
