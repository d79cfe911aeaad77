//! Ticket statistics over a scoped set of tickets.
//!
//! Two paths produce the same [`DashboardStats`]: [`compute_stats`] works on
//! tickets already in memory, [`DashboardAggregator`] asks the store for
//! grouped counts. Both go through [`stats_from_counts`].

use std::collections::BTreeMap;
use std::sync::Arc;
use ticketing_api::domain::{priority_label, DashboardStats, Ticket, TicketScope, TicketStatus};
use ticketing_api::error::ApiResult;
use ticketing_db::repository::{PriorityCount, StatusCount, TicketRepository};
use tracing::debug;

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percentage(part: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    round_two_decimals(part as f64 * 100.0 / total as f64)
}

/// Builds the statistics from per-status counts and, when given, per-priority counts.
///
/// The total is the sum of the status counts. Open includes in-progress
/// tickets; closed counts as closed without resolution.
pub fn stats_from_counts(
    status_counts: &[StatusCount],
    priority_counts: Option<&[PriorityCount]>,
) -> DashboardStats {
    let count_of = |wanted: fn(TicketStatus) -> bool| -> i64 {
        status_counts
            .iter()
            .filter(|c| wanted(c.status))
            .map(|c| c.count)
            .sum()
    };

    let total = count_of(|_| true);
    let open = count_of(TicketStatus::is_open);
    let resolved = count_of(|s| s == TicketStatus::Resolved);
    let closed = count_of(|s| s == TicketStatus::Closed);

    let tickets_by_priority = priority_counts.map(|counts| {
        let mut by_label = BTreeMap::new();
        for c in counts {
            *by_label
                .entry(priority_label(c.priority_level).to_string())
                .or_insert(0) += c.count;
        }
        by_label
    });

    DashboardStats {
        total_tickets: total,
        open_percentage: percentage(open, total),
        resolved_percentage: percentage(resolved, total),
        closed_without_resolve_percentage: percentage(closed, total),
        tickets_by_priority,
    }
}

/// Statistics over tickets already loaded in memory
pub fn compute_stats(tickets: &[Ticket], include_priority: bool) -> DashboardStats {
    let mut by_status: BTreeMap<&'static str, StatusCount> = BTreeMap::new();
    let mut by_priority: BTreeMap<i32, i64> = BTreeMap::new();

    for ticket in tickets {
        by_status
            .entry(ticket.status.as_str())
            .or_insert(StatusCount {
                status: ticket.status,
                count: 0,
            })
            .count += 1;
        *by_priority.entry(ticket.priority_level).or_insert(0) += 1;
    }

    let status_counts: Vec<StatusCount> = by_status.into_values().collect();
    let priority_counts: Vec<PriorityCount> = by_priority
        .into_iter()
        .map(|(priority_level, count)| PriorityCount { priority_level, count })
        .collect();

    stats_from_counts(&status_counts, include_priority.then_some(priority_counts.as_slice()))
}

/// Computes dashboard statistics with grouping queries pushed to the store
pub struct DashboardAggregator<T> {
    tickets: Arc<T>,
}

impl<T> Clone for DashboardAggregator<T> {
    fn clone(&self) -> Self {
        Self {
            tickets: self.tickets.clone(),
        }
    }
}

impl<T: TicketRepository> DashboardAggregator<T> {
    pub fn new(tickets: Arc<T>) -> Self {
        Self { tickets }
    }

    pub async fn stats_for(&self, scope: TicketScope, include_priority: bool) -> ApiResult<DashboardStats> {
        let status_counts = self.tickets.count_by_status(scope).await?;
        let priority_counts = if include_priority {
            Some(self.tickets.count_by_priority(scope).await?)
        } else {
            None
        };

        let stats = stats_from_counts(&status_counts, priority_counts.as_deref());
        debug!(scope = ?scope, total = stats.total_tickets, "dashboard computed");
        Ok(stats)
    }
}
