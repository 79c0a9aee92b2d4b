//! Row types mapping onto database tables and query results.

use crate::progression::PlayerSnapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One player's profile document. Created at signup with safe defaults,
/// mutated continuously by gameplay and by reconciliation writes, never
/// deleted.
///
/// `xp`, the stat counters, and the currency balances are primary fields,
/// only ever moved by atomic increments. `level` and `rank` are cached
/// resolver outputs; `current_streak`/`longest_streak` are last-writer
/// overwrites from the streak updater.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Profile {
    pub user_id: String,
    pub xp: i64,
    pub level: i32,
    pub rank: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_active_date: Option<DateTime<Utc>>,
    pub accuracy: f64,
    pub lessons_completed: i32,
    pub challenges_completed: i32,
    pub perfect_lessons: i32,
    pub coins: i64,
    pub tickets: i64,
    pub coins_earned: i64,
    pub tickets_earned: i64,
    pub unlocked_badges: Vec<String>,
    pub unlocked_achievements: Vec<String>,
    pub lives: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Profile> for PlayerSnapshot {
    fn from(p: &Profile) -> Self {
        PlayerSnapshot {
            xp: p.xp,
            level: p.level,
            rank: p.rank.clone(),
            current_streak: p.current_streak,
            longest_streak: p.longest_streak,
            accuracy: p.accuracy,
            lessons_completed: p.lessons_completed,
            challenges_completed: p.challenges_completed,
            perfect_lessons: p.perfect_lessons,
            coins_earned: p.coins_earned,
        }
    }
}

/// One entry of a player's bounded notification log. Immutable after
/// insertion except for the `read` flag.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct NotificationRecord {
    pub notification_id: i64,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub body: String,
    /// JSON-encoded structured payload, when the kind carries one.
    pub payload: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Everything a lesson completion folds into the profile in one atomic
/// statement.
#[derive(Debug, Default)]
pub struct LessonOutcome {
    pub xp_gain: i64,
    pub lesson_accuracy: f64,
    pub mistakes: i32,
    pub perfect: bool,
}
