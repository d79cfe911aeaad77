use chrono::Utc;
use heapless::String as HeaplessString;
use ticketing_api::domain::{AccessLevel, Employee, Identity, RegisterEmployeeRequest, Ticket, TicketStatus};
use ticketing_db::models::{EmployeeModel, ReportedByModel, TicketModel};
use uuid::Uuid;

use crate::ticket_number::ticket_number_for;

fn heapless<const N: usize>(value: &str) -> HeaplessString<N> {
    HeaplessString::try_from(value).unwrap()
}

/// Active employee with predictable names derived from its number
pub fn employee_model(employee_number: i32, access_level: AccessLevel) -> EmployeeModel {
    EmployeeModel {
        id: Uuid::new_v4(),
        employee_number,
        first_name: heapless(&format!("First{employee_number}")),
        last_name: heapless(&format!("Last{employee_number}")),
        email: heapless(&format!("employee{employee_number}@gardengroup.example")),
        department: heapless("IT"),
        phone_number: Some(heapless("+31 20 555 0100")),
        address: None,
        company: heapless("Garden Group"),
        access_level,
        password_hash: "not-a-real-hash".to_string(),
        is_active: true,
        created_date: Utc::now(),
    }
}

pub fn identity_of(employee: &EmployeeModel) -> Identity {
    Identity::new(employee.id, employee.employee_number, employee.access_level)
}

pub fn identity_of_employee(employee: &Employee) -> Identity {
    Identity::new(employee.id, employee.employee_number, employee.access_level)
}

/// Open medium-priority ticket reported by `employee_number`
pub fn ticket_model(sequence: i64, employee_number: i32) -> TicketModel {
    let now = Utc::now();
    let reporter = employee_model(employee_number, AccessLevel::Regular);
    TicketModel {
        id: Uuid::new_v4(),
        ticket_number: heapless(&ticket_number_for(now, sequence)),
        description: format!("Ticket {sequence}"),
        date: now,
        reported_by: ReportedByModel::snapshot(&reporter),
        assigned_to: None,
        priority_level: 2,
        deadline: None,
        status: TicketStatus::Open,
        resolution_notes: None,
        resolved_date: None,
        resolution_steps: Vec::new(),
    }
}

pub fn ticket_reported_by(employee_number: i32) -> Ticket {
    Ticket::from(ticket_model(1, employee_number))
}

pub fn register_request(employee_number: i32, email: &str) -> RegisterEmployeeRequest {
    RegisterEmployeeRequest {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        department: "Finance".to_string(),
        phone_number: None,
        address: None,
        company: "Garden Group".to_string(),
        employee_number,
        access_level: AccessLevel::Regular,
    }
}
