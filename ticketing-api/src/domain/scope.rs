use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::access_level::AccessLevel;
use super::identity::Identity;

/// Which tickets a listing or dashboard covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum TicketScope {
    All,
    /// Tickets assigned to an employee, by internal id
    AssignedTo(Uuid),
    /// Tickets reported by an employee, by employee number
    ReportedBy(i32),
}

impl TicketScope {
    /// Default scope for a caller: managers see everything, service desk
    /// staff see their assignments, everyone else sees what they reported.
    pub fn for_identity(identity: &Identity) -> Self {
        match identity.role {
            AccessLevel::Manager => TicketScope::All,
            AccessLevel::ServiceDesk => TicketScope::AssignedTo(identity.internal_id),
            AccessLevel::Regular => TicketScope::ReportedBy(identity.employee_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_follows_role() {
        let id = Uuid::new_v4();
        assert_eq!(
            TicketScope::for_identity(&Identity::new(id, 7, AccessLevel::Manager)),
            TicketScope::All
        );
        assert_eq!(
            TicketScope::for_identity(&Identity::new(id, 7, AccessLevel::ServiceDesk)),
            TicketScope::AssignedTo(id)
        );
        assert_eq!(
            TicketScope::for_identity(&Identity::new(id, 7, AccessLevel::Regular)),
            TicketScope::ReportedBy(7)
        );
    }
}
