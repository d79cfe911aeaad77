//! Human-readable ticket numbers: `TGG-{year}-{sequence}` with the sequence
//! zero-padded to six digits.

use chrono::{DateTime, Datelike, Utc};
use ticketing_api::constants::ticket_number::{PREFIX, SEQUENCE_LENGTH};

pub fn format_ticket_number(year: i32, sequence: i64) -> String {
    format!("{PREFIX}-{year}-{sequence:0width$}", width = SEQUENCE_LENGTH)
}

/// Sequence used for the first allocation attempt: one past the current
/// number of tickets in the store.
pub fn initial_sequence(ticket_count: i64) -> i64 {
    ticket_count.max(0) + 1
}

pub fn ticket_number_for(created_at: DateTime<Utc>, sequence: i64) -> String {
    format_ticket_number(created_at.year(), sequence)
}

/// Splits a ticket number into its year and sequence parts
pub fn parse_ticket_number(ticket_number: &str) -> Option<(i32, i64)> {
    let mut parts = ticket_number.splitn(3, '-');
    if parts.next()? != PREFIX {
        return None;
    }
    let year = parts.next()?;
    let sequence = parts.next()?;
    if year.len() != 4 || sequence.len() < SEQUENCE_LENGTH {
        return None;
    }
    Some((year.parse().ok()?, sequence.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_pads_to_six_digits() {
        assert_eq!(format_ticket_number(2026, 1), "TGG-2026-000001");
        assert_eq!(format_ticket_number(2026, 123456), "TGG-2026-123456");
    }

    #[test]
    fn test_format_grows_past_six_digits() {
        assert_eq!(format_ticket_number(2026, 1_000_000), "TGG-2026-1000000");
    }

    #[test]
    fn test_year_comes_from_creation_instant() {
        let created = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(ticket_number_for(created, 7), "TGG-2025-000007");
    }

    #[test]
    fn test_initial_sequence_is_count_plus_one() {
        assert_eq!(initial_sequence(0), 1);
        assert_eq!(initial_sequence(41), 42);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_ticket_number("TGG-2026-000042"), Some((2026, 42)));
        assert_eq!(parse_ticket_number("ABC-2026-000042"), None);
        assert_eq!(parse_ticket_number("TGG-26-000042"), None);
        assert_eq!(parse_ticket_number("TGG-2026-42"), None);
    }
}
