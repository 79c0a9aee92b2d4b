//! The rules engine for player progression.
//!
//! Everything in this module is pure: resolvers and evaluators take an
//! explicit [`PlayerSnapshot`] and return values, never touching the
//! database or the clock. The effectful edges live in `services` and
//! `activity`, which call into here and persist the results.

pub mod awards;
pub mod levels;
pub mod ranks;
pub mod streak;
pub mod transitions;
pub mod xp;

use serde::Serialize;

/// A point-in-time view of one player's progression-relevant fields.
///
/// `level` and `rank` are the *last-observed* (cached) values as stored on
/// the profile document; the resolvers recompute truth from the primary
/// fields (`xp`, `accuracy`, streaks, counters) and the reconciler compares
/// the two to detect transitions.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub xp: i64,
    pub level: i32,
    pub rank: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub accuracy: f64,
    pub lessons_completed: i32,
    pub challenges_completed: i32,
    pub perfect_lessons: i32,
    pub coins_earned: i64,
}

impl PlayerSnapshot {
    /// Stat view consumed by the rank resolver.
    pub fn rank_stats(&self) -> ranks::RankStats {
        ranks::RankStats {
            level: levels::resolve_level(self.xp).level,
            accuracy: self.accuracy,
            streak: self.current_streak,
            lessons_completed: self.lessons_completed,
        }
    }
}
