use async_trait::async_trait;
use std::sync::Arc;
use ticketing_api::constants::error_messages;
use ticketing_api::domain::{
    AccessLevel, AssignTicketRequest, CreateTicketRequest, DashboardStats, Identity, Ticket, TicketScope,
    TicketStatus, UpdateTicketRequest,
};
use ticketing_api::error::{ApiError, ApiResult};
use ticketing_api::service::TicketService;
use ticketing_db::repository::{EmployeeRepository, TicketRepository};
use uuid::Uuid;
use validator::Validate;

use crate::access_policy;
use crate::dashboard::DashboardAggregator;
use crate::ticket_lifecycle::TicketLifecycleManager;

/// [`TicketService`] over the lifecycle manager and the dashboard aggregator.
///
/// Permission and validation checks run before any store write.
pub struct TicketingService<T, E> {
    lifecycle: TicketLifecycleManager<T, E>,
    dashboard: DashboardAggregator<T>,
    employees: Arc<E>,
}

impl<T, E> Clone for TicketingService<T, E> {
    fn clone(&self) -> Self {
        Self {
            lifecycle: self.lifecycle.clone(),
            dashboard: self.dashboard.clone(),
            employees: self.employees.clone(),
        }
    }
}

impl<T, E> TicketingService<T, E>
where
    T: TicketRepository,
    E: EmployeeRepository,
{
    pub fn new(tickets: Arc<T>, employees: Arc<E>) -> Self {
        Self {
            lifecycle: TicketLifecycleManager::new(tickets.clone(), employees.clone()),
            dashboard: DashboardAggregator::new(tickets),
            employees,
        }
    }

    async fn ensure_assignee(&self, assignee_id: Uuid) -> ApiResult<()> {
        let assignee = self
            .employees
            .load(assignee_id)
            .await?
            .ok_or_else(|| ApiError::not_found(error_messages::ASSIGNEE_NOT_FOUND))?;
        access_policy::ensure_assignable(&assignee)
    }

    async fn apply_update(&self, identity: &Identity, ticket_id: Uuid, request: &UpdateTicketRequest) -> ApiResult<Ticket> {
        if let Some(assignee_id) = request.assigned_to {
            self.ensure_assignee(assignee_id).await?;
        }

        self.lifecycle.update(ticket_id, request, identity.internal_id).await?;
        self.lifecycle
            .get(ticket_id)
            .await?
            .ok_or_else(|| ApiError::not_found(error_messages::TICKET_NOT_FOUND))
    }
}

#[async_trait]
impl<T, E> TicketService for TicketingService<T, E>
where
    T: TicketRepository,
    E: EmployeeRepository,
{
    async fn create_ticket(&self, identity: &Identity, request: CreateTicketRequest) -> ApiResult<Ticket> {
        access_policy::ensure_can_create_ticket(identity)?;
        request.validate()?;
        self.lifecycle.create(request.into(), identity).await
    }

    async fn update_ticket(
        &self,
        identity: &Identity,
        ticket_id: Uuid,
        request: UpdateTicketRequest,
    ) -> ApiResult<Ticket> {
        access_policy::ensure_can_update_ticket(identity)?;
        request.validate()?;
        self.apply_update(identity, ticket_id, &request).await
    }

    async fn delete_ticket(&self, identity: &Identity, ticket_id: Uuid) -> ApiResult<()> {
        access_policy::ensure_can_delete_ticket(identity)?;
        self.lifecycle.delete(ticket_id).await
    }

    async fn get_ticket(&self, identity: &Identity, ticket_id: Uuid) -> ApiResult<Option<Ticket>> {
        let ticket = self.lifecycle.get(ticket_id).await?;
        if let Some(ticket) = &ticket {
            access_policy::ensure_can_view_ticket(identity, ticket)?;
        }
        Ok(ticket)
    }

    async fn list_tickets(&self, identity: &Identity, scope: TicketScope) -> ApiResult<Vec<Ticket>> {
        access_policy::ensure_can_list_scope(identity, &scope)?;
        self.lifecycle.list(scope).await
    }

    async fn assign_ticket(
        &self,
        identity: &Identity,
        ticket_id: Uuid,
        request: AssignTicketRequest,
    ) -> ApiResult<Ticket> {
        access_policy::ensure_can_assign_ticket(identity)?;
        let changes = UpdateTicketRequest {
            assigned_to: Some(request.assignee_id),
            status: Some(TicketStatus::InProgress.as_str().to_string()),
            ..Default::default()
        };
        self.apply_update(identity, ticket_id, &changes).await
    }

    async fn get_dashboard(&self, identity: &Identity) -> ApiResult<DashboardStats> {
        let include_priority = identity.role != AccessLevel::Regular;
        self.dashboard
            .stats_for(TicketScope::for_identity(identity), include_priority)
            .await
    }

    async fn get_employee_dashboard(&self, identity: &Identity, employee_number: i32) -> ApiResult<DashboardStats> {
        access_policy::ensure_can_view_employee_dashboard(identity)?;
        if self.employees.find_active_by_number(employee_number).await?.is_none() {
            return Err(ApiError::not_found(error_messages::EMPLOYEE_NOT_FOUND));
        }
        self.dashboard
            .stats_for(TicketScope::ReportedBy(employee_number), false)
            .await
    }
}
