use serde::{Deserialize, Serialize};

use crate::constants::priority_levels;

/// Ticket priority. Persisted as its integer value (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    pub const ALL: [PriorityLevel; 4] = [
        PriorityLevel::Low,
        PriorityLevel::Medium,
        PriorityLevel::High,
        PriorityLevel::Critical,
    ];

    pub fn from_level(level: i32) -> Option<Self> {
        match level {
            priority_levels::LOW => Some(PriorityLevel::Low),
            priority_levels::MEDIUM => Some(PriorityLevel::Medium),
            priority_levels::HIGH => Some(PriorityLevel::High),
            priority_levels::CRITICAL => Some(PriorityLevel::Critical),
            _ => None,
        }
    }

    pub fn level(self) -> i32 {
        match self {
            PriorityLevel::Low => priority_levels::LOW,
            PriorityLevel::Medium => priority_levels::MEDIUM,
            PriorityLevel::High => priority_levels::HIGH,
            PriorityLevel::Critical => priority_levels::CRITICAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriorityLevel::Low => "Low",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::High => "High",
            PriorityLevel::Critical => "Critical",
        }
    }
}

impl Default for PriorityLevel {
    fn default() -> Self {
        PriorityLevel::Medium
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label for a raw stored priority value; out-of-range values are "Unknown"
pub fn priority_label(level: i32) -> &'static str {
    PriorityLevel::from_level(level)
        .map(PriorityLevel::label)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_round_trip() {
        for priority in PriorityLevel::ALL {
            assert_eq!(PriorityLevel::from_level(priority.level()), Some(priority));
        }
        assert_eq!(PriorityLevel::default().level(), 2);
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(priority_label(0), "Unknown");
        assert_eq!(priority_label(5), "Unknown");
        assert_eq!(priority_label(4), "Critical");
    }
}
