use chrono::Utc;
use heapless::String as HeaplessString;
use ticketing_api::domain::TicketStatus;
use ticketing_db::models::{ReportedByModel, TicketModel};
use uuid::Uuid;

pub fn create_test_ticket(ticket_number: &str, reporter_number: i32) -> TicketModel {
    TicketModel {
        id: Uuid::new_v4(),
        ticket_number: HeaplessString::try_from(ticket_number).unwrap(),
        description: "Printer on the second floor is jammed".to_string(),
        date: Utc::now(),
        reported_by: ReportedByModel {
            first_name: HeaplessString::try_from("Jan").unwrap(),
            last_name: HeaplessString::try_from("Jansen").unwrap(),
            email: HeaplessString::try_from("jan.jansen@gardengroup.example").unwrap(),
            department: HeaplessString::try_from("Sales").unwrap(),
            phone_number: None,
            company: HeaplessString::try_from("Garden Group").unwrap(),
            employee_number: reporter_number,
        },
        assigned_to: None,
        priority_level: 2,
        deadline: None,
        status: TicketStatus::Open,
        resolution_notes: None,
        resolved_date: None,
        resolution_steps: Vec::new(),
    }
}

/// Ticket number that does not collide with numbers created by other tests
pub fn unique_ticket_number() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("TEST-{}", &suffix[..12])
}
