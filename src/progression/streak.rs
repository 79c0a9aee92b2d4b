//! Daily streak continuity rules.

use chrono::{DateTime, Utc};

/// The result of folding one day of activity into a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub current: i32,
    pub longest: i32,
    /// False on the same-day branch, where nothing observable changed and
    /// the persistence layer may skip the write.
    pub changed: bool,
}

/// Computes the new streak for activity happening at `now`.
///
/// Both timestamps truncate to calendar days before comparing:
/// first-ever activity starts at 1, a consecutive day increments, a gap
/// resets to 1, and a same-day repeat is a no-op. A `last_active` in the
/// future (clock skew, tampered document) resets defensively instead of
/// erroring.
pub fn update_streak(
    current: i32,
    longest: i32,
    last_active: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> StreakUpdate {
    let today = now.date_naive();

    let (new_current, changed) = match last_active.map(|ts| ts.date_naive()) {
        None => (1, true),
        Some(last_day) => {
            let diff_days = (today - last_day).num_days();
            match diff_days {
                0 => (current, false),
                1 => (current + 1, true),
                d if d > 1 => (1, true),
                // Negative: the stored timestamp is ahead of our clock.
                _ => (1, true),
            }
        }
    };

    StreakUpdate {
        current: new_current,
        longest: longest.max(new_current),
        changed,
    }
}
