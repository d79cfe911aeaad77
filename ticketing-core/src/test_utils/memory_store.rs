use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use ticketing_api::domain::TicketScope;
use ticketing_db::models::{EmployeeModel, TicketModel};
use ticketing_db::repository::{
    scope_matches, Create, Delete, EmployeeRepository, Load, PriorityCount, StatusCount, StoreError, TicketPatch,
    TicketRepository,
};
use uuid::Uuid;

use crate::ticket_number::parse_ticket_number;

/// Ticket store backed by a vector, with the same uniqueness rule on
/// ticket numbers as the database.
#[derive(Default)]
pub struct MemoryTicketRepository {
    tickets: RwLock<Vec<TicketModel>>,
    update_calls: AtomicUsize,
}

impl MemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tickets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.read().is_empty()
    }

    /// Number of `update` calls that reached the store
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Tickets in `scope`, oldest first
    pub fn snapshot(&self, scope: &TicketScope) -> Vec<TicketModel> {
        let mut matching: Vec<TicketModel> = self
            .tickets
            .read()
            .iter()
            .filter(|t| scope_matches(scope, t))
            .cloned()
            .collect();
        matching.sort_by_key(|t| t.date);
        matching
    }
}

#[async_trait]
impl Create<TicketModel> for MemoryTicketRepository {
    async fn create(&self, item: TicketModel) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
        let mut tickets = self.tickets.write();
        if tickets.iter().any(|t| t.ticket_number == item.ticket_number) {
            return Err(StoreError::duplicate("ticket_number", item.ticket_number.as_str()).into());
        }
        if tickets.iter().any(|t| t.id == item.id) {
            return Err(StoreError::duplicate("id", item.id.to_string()).into());
        }
        tickets.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl Load<TicketModel> for MemoryTicketRepository {
    async fn load(&self, id: Uuid) -> Result<Option<TicketModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.tickets.read().iter().find(|t| t.id == id).cloned())
    }
}

#[async_trait]
impl Delete for MemoryTicketRepository {
    async fn delete(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut tickets = self.tickets.write();
        let before = tickets.len();
        tickets.retain(|t| t.id != id);
        Ok(tickets.len() != before)
    }
}

#[async_trait]
impl TicketRepository for MemoryTicketRepository {
    async fn find(&self, scope: TicketScope) -> Result<Vec<TicketModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.snapshot(&scope))
    }

    async fn count(&self, scope: TicketScope) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let count = self.tickets.read().iter().filter(|t| scope_matches(&scope, t)).count();
        Ok(count as i64)
    }

    async fn update(&self, id: Uuid, patch: TicketPatch) -> Result<bool, Box<dyn Error + Send + Sync>> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut tickets = self.tickets.write();
        match tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                patch.apply_to(ticket);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_by_status(&self, scope: TicketScope) -> Result<Vec<StatusCount>, Box<dyn Error + Send + Sync>> {
        let mut counts: BTreeMap<&'static str, StatusCount> = BTreeMap::new();
        for ticket in self.tickets.read().iter().filter(|t| scope_matches(&scope, t)) {
            counts
                .entry(ticket.status.as_str())
                .or_insert(StatusCount {
                    status: ticket.status,
                    count: 0,
                })
                .count += 1;
        }
        Ok(counts.into_values().collect())
    }

    async fn count_by_priority(&self, scope: TicketScope) -> Result<Vec<PriorityCount>, Box<dyn Error + Send + Sync>> {
        let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
        for ticket in self.tickets.read().iter().filter(|t| scope_matches(&scope, t)) {
            *counts.entry(ticket.priority_level).or_insert(0) += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(priority_level, count)| PriorityCount { priority_level, count })
            .collect())
    }

    async fn max_sequence(&self, year: i32) -> Result<Option<i64>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .tickets
            .read()
            .iter()
            .filter_map(|t| parse_ticket_number(&t.ticket_number))
            .filter(|(ticket_year, _)| *ticket_year == year)
            .map(|(_, sequence)| sequence)
            .max())
    }
}

/// Employee store enforcing uniqueness of number and email among active records
#[derive(Default)]
pub struct MemoryEmployeeRepository {
    employees: RwLock<Vec<EmployeeModel>>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the active flag without going through the async trait
    pub fn deactivate_now(&self, id: Uuid) {
        if let Some(employee) = self.employees.write().iter_mut().find(|e| e.id == id) {
            employee.is_active = false;
        }
    }

    fn conflict(employees: &[EmployeeModel], candidate: &EmployeeModel) -> Option<StoreError> {
        if !candidate.is_active {
            return None;
        }
        let others = employees.iter().filter(|e| e.is_active && e.id != candidate.id);
        for other in others {
            if other.employee_number == candidate.employee_number {
                return Some(StoreError::duplicate("employee_number", candidate.employee_number.to_string()));
            }
            if other.email.eq_ignore_ascii_case(&candidate.email) {
                return Some(StoreError::duplicate("email", candidate.email.as_str()));
            }
        }
        None
    }
}

#[async_trait]
impl Create<EmployeeModel> for MemoryEmployeeRepository {
    async fn create(&self, item: EmployeeModel) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        let mut employees = self.employees.write();
        if let Some(conflict) = Self::conflict(&employees, &item) {
            return Err(conflict.into());
        }
        employees.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl Load<EmployeeModel> for MemoryEmployeeRepository {
    async fn load(&self, id: Uuid) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.employees.read().iter().find(|e| e.id == id).cloned())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_active_by_number(
        &self,
        employee_number: i32,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .employees
            .read()
            .iter()
            .find(|e| e.is_active && e.employee_number == employee_number)
            .cloned())
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .employees
            .read()
            .iter()
            .find(|e| e.is_active && e.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_active(&self) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let mut active: Vec<EmployeeModel> = self.employees.read().iter().filter(|e| e.is_active).cloned().collect();
        active.sort_by_key(|e| e.employee_number);
        Ok(active)
    }

    async fn update(&self, employee: &EmployeeModel) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut employees = self.employees.write();
        if let Some(conflict) = Self::conflict(&employees, employee) {
            return Err(conflict.into());
        }
        let Some(stored) = employees.iter_mut().find(|e| e.id == employee.id) else {
            return Ok(false);
        };
        *stored = EmployeeModel {
            id: stored.id,
            employee_number: stored.employee_number,
            password_hash: stored.password_hash.clone(),
            created_date: stored.created_date,
            ..employee.clone()
        };
        Ok(true)
    }

    async fn deactivate(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        match self.employees.write().iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                employee.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn purge(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut employees = self.employees.write();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        Ok(employees.len() != before)
    }
}
