//! Due-date urgency classification.
//!
//! The classifier is a pure function over a deliverable's due date and
//! a caller-supplied "now". The day offset is the ceiling of the time
//! remaining until midnight of the due date, so a deliverable due at
//! any point later today still counts as offset 0.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Deliverables due within this many days count as urgent.
pub const URGENT_WITHIN_DAYS: i64 = 7;

/// Deliverables due within this many days (but not urgent) count as near.
pub const NEAR_WITHIN_DAYS: i64 = 30;

const SECS_PER_DAY: i64 = 86_400;

/// Discrete urgency tier of a deliverable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    /// Due date has passed
    Overdue,
    /// Due within 7 days (inclusive), today included
    Urgent,
    /// Due within 8..=30 days
    Near,
    /// Due more than 30 days out
    Normal,
}

impl UrgencyTier {
    /// Display color for the tier, matching the dashboard palette.
    pub fn color(self) -> &'static str {
        match self {
            UrgencyTier::Overdue => "#e74c3c",
            UrgencyTier::Urgent => "#d4af37",
            UrgencyTier::Near => "#3498db",
            UrgencyTier::Normal => "#666",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyTier::Overdue => "overdue",
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::Near => "near",
            UrgencyTier::Normal => "normal",
        }
    }
}

/// Result of classifying one due date against a reference time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    /// Signed calendar-day distance to the due date, rounded up.
    pub day_offset: i64,
    pub tier: UrgencyTier,
}

/// Signed day count from `now` to midnight of `due`, rounded up.
///
/// Negative for past due dates. A due date equal to `now`'s calendar
/// date yields 0 regardless of the time of day.
pub fn day_offset(due: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due_midnight = due.and_time(chrono::NaiveTime::MIN).and_utc();
    let secs = (due_midnight - now).num_seconds();
    // Integer ceiling division, correct for negative distances too.
    secs.div_euclid(SECS_PER_DAY) + i64::from(secs.rem_euclid(SECS_PER_DAY) != 0)
}

/// Assign the urgency tier for a day offset, first matching rule wins.
///
/// Boundary days 7 and 30 belong to the tighter tier.
pub fn tier_for_offset(offset: i64) -> UrgencyTier {
    if offset < 0 {
        UrgencyTier::Overdue
    } else if offset <= URGENT_WITHIN_DAYS {
        UrgencyTier::Urgent
    } else if offset <= NEAR_WITHIN_DAYS {
        UrgencyTier::Near
    } else {
        UrgencyTier::Normal
    }
}

/// Classify a due date against a reference time.
pub fn classify(due: NaiveDate, now: DateTime<Utc>) -> Classification {
    let day_offset = day_offset(due, now);
    Classification {
        day_offset,
        tier: tier_for_offset(day_offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn due_today_is_urgent_with_zero_offset() {
        let c = classify(date(2026, 3, 10), at(2026, 3, 10, 14));
        assert_eq!(c.day_offset, 0);
        assert_eq!(c.tier, UrgencyTier::Urgent);
    }

    #[test]
    fn due_today_at_midnight_exactly() {
        let c = classify(date(2026, 3, 10), at(2026, 3, 10, 0));
        assert_eq!(c.day_offset, 0);
        assert_eq!(c.tier, UrgencyTier::Urgent);
    }

    #[test]
    fn nine_days_past_is_overdue() {
        let c = classify(date(2026, 3, 1), at(2026, 3, 10, 9));
        assert_eq!(c.day_offset, -9);
        assert_eq!(c.tier, UrgencyTier::Overdue);
    }

    #[test]
    fn thirty_six_days_out_is_normal() {
        let c = classify(date(2026, 4, 15), at(2026, 3, 10, 9));
        assert_eq!(c.day_offset, 36);
        assert_eq!(c.tier, UrgencyTier::Normal);
    }

    #[test]
    fn tier_boundaries_are_inclusive_of_tighter_tier() {
        assert_eq!(tier_for_offset(-1), UrgencyTier::Overdue);
        assert_eq!(tier_for_offset(0), UrgencyTier::Urgent);
        assert_eq!(tier_for_offset(7), UrgencyTier::Urgent);
        assert_eq!(tier_for_offset(8), UrgencyTier::Near);
        assert_eq!(tier_for_offset(30), UrgencyTier::Near);
        assert_eq!(tier_for_offset(31), UrgencyTier::Normal);
    }

    #[test]
    fn offset_seven_days_regardless_of_time_of_day() {
        // Late in the evening, the due date is still 7 calendar days out.
        let c = classify(date(2026, 3, 17), at(2026, 3, 10, 23));
        assert_eq!(c.day_offset, 7);
        assert_eq!(c.tier, UrgencyTier::Urgent);
    }

    #[test]
    fn color_follows_tier() {
        assert_eq!(UrgencyTier::Overdue.color(), "#e74c3c");
        assert_eq!(UrgencyTier::Urgent.color(), "#d4af37");
        assert_eq!(UrgencyTier::Near.color(), "#3498db");
        assert_eq!(UrgencyTier::Normal.color(), "#666");
    }

    proptest! {
        /// At midnight the offset is exactly the calendar-day distance.
        #[test]
        fn offset_matches_calendar_distance_at_midnight(delta in -2000i64..2000) {
            let now = at(2026, 3, 10, 0);
            let due = date(2026, 3, 10) + chrono::Duration::days(delta);
            prop_assert_eq!(day_offset(due, now), delta);
        }

        /// Mid-day clock times never change the offset for a given date pair.
        #[test]
        fn offset_independent_of_time_of_day(delta in -2000i64..2000, hour in 0u32..24) {
            let due = date(2026, 3, 10) + chrono::Duration::days(delta);
            let at_midnight = day_offset(due, at(2026, 3, 10, 0));
            let later = Utc.with_ymd_and_hms(2026, 3, 10, hour, 30, 0).unwrap();
            prop_assert_eq!(day_offset(due, later), at_midnight);
        }

        /// Every offset lands in exactly the tier its range dictates.
        #[test]
        fn tier_partition_is_total(offset in -5000i64..5000) {
            let tier = tier_for_offset(offset);
            let expected = if offset < 0 {
                UrgencyTier::Overdue
            } else if offset <= 7 {
                UrgencyTier::Urgent
            } else if offset <= 30 {
                UrgencyTier::Near
            } else {
                UrgencyTier::Normal
            };
            prop_assert_eq!(tier, expected);
        }
    }
}
