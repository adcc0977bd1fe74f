//! Care reminder models and due-date arithmetic

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::UrgencyTier;

/// A watering/fertilizing reminder held in the session list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    /// Unique, monotonically assigned within a session
    pub id: i64,
    pub text: String,
    pub frequency_days: u32,
    pub next_reminder_date: NaiveDate,
}

/// Compute the next due date by adding whole calendar days.
///
/// Calendar-day arithmetic, not elapsed-time arithmetic: daylight-saving or
/// timezone shifts must not perturb the intended date.
pub fn next_due_date(from: NaiveDate, frequency_days: u32) -> NaiveDate {
    from.checked_add_days(Days::new(u64::from(frequency_days)))
        .unwrap_or(from)
}

/// Classify a due date into a display urgency tier.
///
/// Both dates are calendar dates, so the difference is already a whole
/// number of days. Overdue dates fold into `Critical`; there is no
/// separate overdue tier.
pub fn classify_urgency(due: NaiveDate, today: NaiveDate) -> UrgencyTier {
    let diff_days = (due - today).num_days();
    if diff_days <= 1 {
        UrgencyTier::Critical
    } else if diff_days <= 7 {
        UrgencyTier::Soon
    } else {
        UrgencyTier::Later
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_next_due_date_adds_calendar_days() {
        assert_eq!(next_due_date(date("2024-01-10"), 7), date("2024-01-17"));
        // Crosses a month boundary
        assert_eq!(next_due_date(date("2024-01-28"), 14), date("2024-02-11"));
        // Leap day
        assert_eq!(next_due_date(date("2024-02-28"), 1), date("2024-02-29"));
    }

    #[test]
    fn test_urgency_due_today_or_tomorrow_is_critical() {
        let today = date("2024-01-10");
        assert_eq!(classify_urgency(date("2024-01-10"), today), UrgencyTier::Critical);
        assert_eq!(classify_urgency(date("2024-01-11"), today), UrgencyTier::Critical);
    }

    #[test]
    fn test_urgency_within_a_week_is_soon() {
        let today = date("2024-01-10");
        assert_eq!(classify_urgency(date("2024-01-12"), today), UrgencyTier::Soon);
        assert_eq!(classify_urgency(date("2024-01-15"), today), UrgencyTier::Soon);
        assert_eq!(classify_urgency(date("2024-01-17"), today), UrgencyTier::Soon);
    }

    #[test]
    fn test_urgency_beyond_a_week_is_later() {
        let today = date("2024-01-10");
        assert_eq!(classify_urgency(date("2024-01-18"), today), UrgencyTier::Later);
        assert_eq!(classify_urgency(date("2024-01-25"), today), UrgencyTier::Later);
    }

    #[test]
    fn test_urgency_overdue_folds_into_critical() {
        let today = date("2024-01-10");
        assert_eq!(classify_urgency(date("2024-01-09"), today), UrgencyTier::Critical);
        assert_eq!(classify_urgency(date("2023-12-01"), today), UrgencyTier::Critical);
    }
}
