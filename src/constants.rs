// Central constants for limits, costs, and cache lifetimes.

/// Soft capacity of a player's notification log; inserts past this are
/// dropped with a warning rather than failing the triggering operation.
pub const NOTIFICATION_CAPACITY: i64 = 100;
/// Log size at which a one-time "almost full" system entry is injected.
pub const NOTIFICATION_WARN_AT: i64 = 90;

pub const MAX_LIVES: i32 = 5;
pub const LIVES_REFILL_COST: i64 = 350;

/// Fixed coin reward for finishing a practice session.
pub const PRACTICE_COIN_REWARD: i64 = 5;
/// Coins per completed lesson, plus a bonus for a flawless run.
pub const LESSON_COIN_REWARD: i64 = 10;
pub const PERFECT_LESSON_COIN_BONUS: i64 = 5;
/// A flawless timed challenge refunds the entry ticket.
pub const CHALLENGE_PERFECT_TICKET_BONUS: i64 = 1;

pub const LEADERBOARD_LIMIT: i64 = 10;
pub const LEADERBOARD_CACHE_TTL_SECS: u64 = 30;

/// Postgres NOTIFY channel announcing profile writes.
pub const PROFILE_CHANNEL: &str = "profile_updates";

/// Exercises drawn into a daily practice session.
pub const PRACTICE_SESSION_SIZE: usize = 6;

/// Base XP per exercise in practice and challenge contexts; lessons carry
/// their own base on the lesson definition.
pub const PRACTICE_BASE_XP: i64 = 6;
pub const CHALLENGE_BASE_XP: i64 = 15;
pub const CHALLENGE_COINS_PER_CORRECT: i64 = 2;
