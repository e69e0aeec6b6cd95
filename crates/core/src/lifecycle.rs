//! Incident resolution rules.
//!
//! The resolution endpoint may submit any status. The resolution timestamp
//! is stamped whenever the submitted status is terminal (`resolved` or
//! `closed`), including a re-resolve, which re-stamps. Moving a resolved
//! incident back to `open`/`in_progress` keeps the old timestamp, so
//! `resolved_at` alone is not proof that an incident is currently
//! resolved.

use crate::types::{IncidentStatus, Timestamp};

/// Whether `status` marks the incident as dealt with.
pub fn is_terminal(status: IncidentStatus) -> bool {
    matches!(status, IncidentStatus::Resolved | IncidentStatus::Closed)
}

/// Whether an incident in `status` counts as open for the dashboard.
pub fn is_open(status: IncidentStatus) -> bool {
    matches!(status, IncidentStatus::Open | IncidentStatus::InProgress)
}

/// Compute the `resolved_at` value to store when a resolution form
/// submits `new_status` at time `now`.
///
/// Returns the fresh timestamp for terminal statuses and the existing
/// value (which may be a stale stamp from an earlier resolution)
/// otherwise.
pub fn resolved_at_after(
    existing: Option<Timestamp>,
    new_status: IncidentStatus,
    now: Timestamp,
) -> Option<Timestamp> {
    if is_terminal(new_status) {
        Some(now)
    } else {
        existing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(secs: i64) -> Timestamp {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn resolving_stamps_now() {
        assert_eq!(
            resolved_at_after(None, IncidentStatus::Resolved, ts(100)),
            Some(ts(100))
        );
        assert_eq!(
            resolved_at_after(None, IncidentStatus::Closed, ts(100)),
            Some(ts(100))
        );
    }

    #[test]
    fn re_resolving_re_stamps() {
        assert_eq!(
            resolved_at_after(Some(ts(50)), IncidentStatus::Closed, ts(200)),
            Some(ts(200))
        );
    }

    #[test]
    fn regression_keeps_stale_stamp() {
        assert_eq!(
            resolved_at_after(Some(ts(50)), IncidentStatus::Open, ts(200)),
            Some(ts(50))
        );
        assert_eq!(
            resolved_at_after(Some(ts(50)), IncidentStatus::InProgress, ts(200)),
            Some(ts(50))
        );
    }

    #[test]
    fn non_terminal_without_history_stays_unset() {
        assert_eq!(
            resolved_at_after(None, IncidentStatus::InProgress, ts(200)),
            None
        );
    }

    #[test]
    fn openness_for_dashboard_counting() {
        assert!(is_open(IncidentStatus::Open));
        assert!(is_open(IncidentStatus::InProgress));
        assert!(!is_open(IncidentStatus::Resolved));
        assert!(!is_open(IncidentStatus::Closed));
    }
}
