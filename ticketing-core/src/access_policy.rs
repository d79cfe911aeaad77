//! Who may see and change what.
//!
//! Pure predicates over an explicit role and identity. The `ensure_*`
//! variants turn a failed predicate into [`ApiError::PermissionDenied`].

use ticketing_api::constants::error_messages;
use ticketing_api::domain::{AccessLevel, Identity, Ticket, TicketScope};
use ticketing_api::error::{ApiError, ApiResult};
use ticketing_db::models::EmployeeModel;
use uuid::Uuid;

pub fn can_view_all_tickets(role: AccessLevel) -> bool {
    role.is_service_desk_or_above()
}

pub fn can_view_ticket(role: AccessLevel, identity: &Identity, ticket: &Ticket) -> bool {
    can_view_all_tickets(role) || ticket.is_reported_by(identity.employee_number)
}

/// Any authenticated employee may report a ticket for themself
pub fn can_create_ticket(_role: AccessLevel) -> bool {
    true
}

pub fn can_update_ticket(role: AccessLevel) -> bool {
    role.is_service_desk_or_above()
}

pub fn can_delete_ticket(role: AccessLevel) -> bool {
    role.is_service_desk_or_above()
}

pub fn can_assign_ticket(role: AccessLevel) -> bool {
    role.is_service_desk_or_above()
}

pub fn can_list_scope(identity: &Identity, scope: &TicketScope) -> bool {
    match scope {
        TicketScope::All => can_view_all_tickets(identity.role),
        TicketScope::AssignedTo(_) => identity.role.is_service_desk_or_above(),
        TicketScope::ReportedBy(employee_number) => {
            can_view_all_tickets(identity.role) || *employee_number == identity.employee_number
        }
    }
}

pub fn can_manage_employees(role: AccessLevel) -> bool {
    role == AccessLevel::Manager
}

pub fn can_list_employees(role: AccessLevel) -> bool {
    role.is_service_desk_or_above()
}

pub fn can_view_employee(role: AccessLevel, identity: &Identity, employee_id: Uuid) -> bool {
    role.is_service_desk_or_above() || identity.internal_id == employee_id
}

pub fn can_view_employee_dashboard(role: AccessLevel) -> bool {
    role == AccessLevel::Manager
}

/// Nobody may delete their own employee record, whatever their role
pub fn can_delete_own_account() -> bool {
    false
}

pub fn can_delete_employee(role: AccessLevel, identity: &Identity, employee_id: Uuid) -> bool {
    if identity.internal_id == employee_id {
        return can_delete_own_account();
    }
    can_manage_employees(role)
}

fn ensure(allowed: bool) -> ApiResult<()> {
    if allowed {
        Ok(())
    } else {
        Err(ApiError::permission_denied(error_messages::UNAUTHORIZED_ACCESS))
    }
}

pub fn ensure_can_view_ticket(identity: &Identity, ticket: &Ticket) -> ApiResult<()> {
    ensure(can_view_ticket(identity.role, identity, ticket))
}

pub fn ensure_can_create_ticket(identity: &Identity) -> ApiResult<()> {
    ensure(can_create_ticket(identity.role))
}

pub fn ensure_can_update_ticket(identity: &Identity) -> ApiResult<()> {
    ensure(can_update_ticket(identity.role))
}

pub fn ensure_can_delete_ticket(identity: &Identity) -> ApiResult<()> {
    ensure(can_delete_ticket(identity.role))
}

pub fn ensure_can_assign_ticket(identity: &Identity) -> ApiResult<()> {
    ensure(can_assign_ticket(identity.role))
}

pub fn ensure_can_list_scope(identity: &Identity, scope: &TicketScope) -> ApiResult<()> {
    ensure(can_list_scope(identity, scope))
}

pub fn ensure_can_manage_employees(identity: &Identity) -> ApiResult<()> {
    ensure(can_manage_employees(identity.role))
}

pub fn ensure_can_list_employees(identity: &Identity) -> ApiResult<()> {
    ensure(can_list_employees(identity.role))
}

pub fn ensure_can_view_employee(identity: &Identity, employee_id: Uuid) -> ApiResult<()> {
    ensure(can_view_employee(identity.role, identity, employee_id))
}

pub fn ensure_can_view_employee_dashboard(identity: &Identity) -> ApiResult<()> {
    ensure(can_view_employee_dashboard(identity.role))
}

pub fn ensure_can_delete_employee(identity: &Identity, employee_id: Uuid) -> ApiResult<()> {
    if identity.internal_id == employee_id {
        return Err(ApiError::permission_denied(error_messages::CANNOT_DELETE_OWN_ACCOUNT));
    }
    ensure(can_delete_employee(identity.role, identity, employee_id))
}

/// Only active service desk employees and managers can hold tickets
pub fn ensure_assignable(employee: &EmployeeModel) -> ApiResult<()> {
    if !employee.is_active || !employee.access_level.is_service_desk_or_above() {
        return Err(ApiError::validation(error_messages::INVALID_ASSIGNEE));
    }
    Ok(())
}
