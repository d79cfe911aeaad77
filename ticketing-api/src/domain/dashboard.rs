use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ticket statistics computed on demand, never persisted
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tickets: i64,
    pub open_percentage: f64,
    pub resolved_percentage: f64,
    pub closed_without_resolve_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets_by_priority: Option<BTreeMap<String, i64>>,
}
