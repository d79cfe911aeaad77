use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    AssignTicketRequest, CreateTicketRequest, DashboardStats, Identity, Ticket, TicketScope,
    UpdateTicketRequest,
};
use crate::error::ApiResult;

/// Ticket operations exposed to the transport layer.
///
/// Every call carries the verified caller identity; implementations check
/// access before touching the store.
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Report a new ticket on behalf of the caller
    async fn create_ticket(&self, identity: &Identity, request: CreateTicketRequest) -> ApiResult<Ticket>;

    /// Apply a partial update and return the ticket as stored afterwards
    async fn update_ticket(
        &self,
        identity: &Identity,
        ticket_id: Uuid,
        request: UpdateTicketRequest,
    ) -> ApiResult<Ticket>;

    async fn delete_ticket(&self, identity: &Identity, ticket_id: Uuid) -> ApiResult<()>;

    /// Point lookup. `Ok(None)` when the ticket does not exist.
    async fn get_ticket(&self, identity: &Identity, ticket_id: Uuid) -> ApiResult<Option<Ticket>>;

    async fn list_tickets(&self, identity: &Identity, scope: TicketScope) -> ApiResult<Vec<Ticket>>;

    /// Assign to a service desk employee and move the ticket to in progress
    async fn assign_ticket(
        &self,
        identity: &Identity,
        ticket_id: Uuid,
        request: AssignTicketRequest,
    ) -> ApiResult<Ticket>;

    /// Role-dependent dashboard for the caller
    async fn get_dashboard(&self, identity: &Identity) -> ApiResult<DashboardStats>;

    /// Dashboard of tickets reported by a given employee (managers only)
    async fn get_employee_dashboard(&self, identity: &Identity, employee_number: i32) -> ApiResult<DashboardStats>;
}
