//! Roster-wide overview DTOs.

use crate::roster::RosterMember;
use crate::dto::MonthResponse;
use presence_core::{ComplianceStats, UserId, YearMonth};
use serde::{Deserialize, Serialize};

/// One roster member's row in the overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverview {
    pub user_id: UserId,
    pub display_name: String,
    pub stats: ComplianceStats,
    /// Marked dates as `YYYY-MM-DD`, ascending.
    pub present_dates: Vec<String>,
    /// A document exists for this user and month.
    pub has_data: bool,
    /// The fetch failed or timed out; `stats` are the empty-month values.
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UserOverview {
    /// Builds a row from a successful fetch.
    #[must_use]
    pub fn from_month(member: RosterMember, month: MonthResponse) -> Self {
        Self {
            user_id: member.user_id,
            display_name: member.display_name,
            stats: month.stats,
            present_dates: month.present_dates,
            has_data: month.exists,
            failed: false,
            error: None,
        }
    }

    /// Builds the zero-stats row that stands in for a failed fetch.
    #[must_use]
    pub fn failed(member: RosterMember, period: YearMonth, error: impl Into<String>) -> Self {
        Self {
            user_id: member.user_id,
            display_name: member.display_name,
            stats: ComplianceStats::empty(period),
            present_dates: Vec::new(),
            has_data: false,
            failed: true,
            error: Some(error.into()),
        }
    }
}

/// Roster-wide reductions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary {
    pub total_users: usize,
    pub users_with_data: usize,
    pub users_with_errors: usize,
    /// Mean of `presentDays` over the whole roster, failed users counted as 0.
    pub average_present_days: f64,
    pub compliant_users: usize,
    pub meets_all_saturdays: usize,
    #[serde(rename = "meets8Days2Sats")]
    pub meets_8_days_2_sats: usize,
    #[serde(rename = "meets10Weekdays")]
    pub meets_10_weekdays: usize,
}

impl OverviewSummary {
    /// Reduces per-user rows into roster-wide counts.
    #[must_use]
    pub fn from_rows(rows: &[UserOverview]) -> Self {
        let total_users = rows.len();
        let count = |pred: fn(&UserOverview) -> bool| rows.iter().filter(|r| pred(r)).count();
        let present_total: u64 = rows.iter().map(|r| u64::from(r.stats.present_days)).sum();

        #[allow(clippy::cast_precision_loss)]
        let average_present_days = if total_users == 0 {
            0.0
        } else {
            present_total as f64 / total_users as f64
        };

        Self {
            total_users,
            users_with_data: count(|r| r.has_data),
            users_with_errors: count(|r| r.failed),
            average_present_days,
            compliant_users: count(|r| r.stats.is_compliant),
            meets_all_saturdays: count(|r| r.stats.meets_all_saturdays),
            meets_8_days_2_sats: count(|r| r.stats.meets_8_days_2_sats),
            meets_10_weekdays: count(|r| r.stats.meets_10_weekdays),
        }
    }
}

/// Roster-wide snapshot for one month. Built on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewAggregate {
    pub year: i32,
    /// 0-based month index.
    pub month: u32,
    /// Rows in roster order.
    pub per_user: Vec<UserOverview>,
    pub summary: OverviewSummary,
}

impl OverviewAggregate {
    /// Assembles the aggregate, computing the summary from `per_user`.
    #[must_use]
    pub fn new(period: YearMonth, per_user: Vec<UserOverview>) -> Self {
        let summary = OverviewSummary::from_rows(&per_user);
        Self {
            year: period.year(),
            month: period.month(),
            per_user,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presence_core::{DayOfMonth, MonthlyPresenceRecord, PresenceKind};

    fn feb() -> YearMonth {
        YearMonth::new(2024, 1).unwrap()
    }

    fn row(user: &str, days: &[u32]) -> UserOverview {
        let mut record = MonthlyPresenceRecord::new(UserId::new(user), feb());
        for &d in days {
            record.mark(DayOfMonth::new(d).unwrap(), PresenceKind::Manual).unwrap();
        }
        UserOverview::from_month(RosterMember::new(user, user.to_uppercase()), record.into())
    }

    #[test]
    fn test_empty_roster_summary() {
        let summary = OverviewSummary::from_rows(&[]);
        assert_eq!(summary, OverviewSummary::default());
    }

    #[test]
    fn test_summary_counts_rules_independently() {
        let rows = vec![
            row("a", &[3, 10, 17, 24]),
            row("b", &[1, 2, 5, 6, 7, 8, 9, 12, 13, 14]),
            row("c", &[1, 3, 5, 6, 7, 8, 9, 10]),
            UserOverview::failed(RosterMember::new("d", "D"), feb(), "store down"),
        ];
        let summary = OverviewSummary::from_rows(&rows);
        assert_eq!(summary.total_users, 4);
        assert_eq!(summary.users_with_data, 3);
        assert_eq!(summary.users_with_errors, 1);
        assert_eq!(summary.meets_all_saturdays, 1);
        assert_eq!(summary.meets_10_weekdays, 1);
        assert_eq!(summary.meets_8_days_2_sats, 1);
        assert_eq!(summary.compliant_users, 3);
        assert!((summary.average_present_days - 22.0 / 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_failed_row_has_empty_stats() {
        let failed = UserOverview::failed(RosterMember::new("x", "X"), feb(), "timeout");
        assert!(failed.failed);
        assert!(!failed.has_data);
        assert_eq!(failed.stats, ComplianceStats::empty(feb()));
        assert_eq!(failed.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_summary_serializes_policy_names() {
        let json = serde_json::to_value(OverviewSummary::default()).unwrap();
        assert!(json.get("meets8Days2Sats").is_some());
        assert!(json.get("averagePresentDays").is_some());
    }
}
