//! All functions for reading and mutating the `profiles` table. This is
//! the single source of truth for player documents.
//!
//! Counter fields move only through atomic `SET x = x + $n` increments and
//! the unlock sets only through guarded array appends, so two concurrent
//! sessions cannot clobber each other's earnings. The cached `level`,
//! `rank`, and streak fields are last-resolver-wins overwrites; a
//! duplicate reconciliation race on those is a known, low-impact case.

use super::init::DbPool;
use super::models::{LessonOutcome, Profile};
use chrono::{DateTime, Utc};
use sqlx::{Postgres, Transaction};

const PROFILE_COLUMNS: &str = "user_id, xp, level, rank, current_streak, longest_streak, \
     last_active_date, accuracy, lessons_completed, challenges_completed, perfect_lessons, \
     coins, tickets, coins_earned, tickets_earned, unlocked_badges, unlocked_achievements, \
     lives, created_at";

/// Retrieves a player's profile, creating it with default values on first
/// contact. Partially-initialized documents are expected right after
/// signup; every default is the safe baseline.
pub async fn get_or_create_profile(pool: &DbPool, user_id: &str) -> Result<Profile, sqlx::Error> {
    sqlx::query("INSERT INTO profiles (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
        .bind(user_id)
        .execute(pool)
        .await?;

    sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Point read without the implicit create; `None` for unknown users.
pub async fn fetch_profile(pool: &DbPool, user_id: &str) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Atomically adds XP to a profile.
pub async fn add_xp(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    delta: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE profiles SET xp = xp + $2 WHERE user_id = $1")
        .bind(user_id)
        .bind(delta)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Credits coins within a transaction, bumping the lifetime-earned
/// counter alongside the balance.
pub async fn add_coins(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    amount: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE profiles SET coins = coins + $2, coins_earned = coins_earned + $2 \
         WHERE user_id = $1",
    )
    .bind(user_id)
    .bind(amount)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Credits tickets within a transaction, bumping the lifetime-earned
/// counter alongside the balance.
pub async fn add_tickets(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    amount: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE profiles SET tickets = tickets + $2, tickets_earned = tickets_earned + $2 \
         WHERE user_id = $1",
    )
    .bind(user_id)
    .bind(amount)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Debits coins, guarded so the balance can never go negative. Returns
/// `false` (and writes nothing) when the player cannot afford `cost`.
pub async fn spend_coins(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    cost: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE profiles SET coins = coins - $2 WHERE user_id = $1 AND coins >= $2",
    )
    .bind(user_id)
    .bind(cost)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Debits one ticket; `false` when the player has none.
pub async fn spend_ticket(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE profiles SET tickets = tickets - 1 WHERE user_id = $1 AND tickets >= 1")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;
    Ok(result.rows_affected() == 1)
}

/// Folds a finished lesson into the profile in one atomic statement: XP,
/// running-average accuracy, the lesson counter, the perfect-lesson
/// counter, and a lives deduction floored at zero.
pub async fn record_lesson_outcome(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    outcome: &LessonOutcome,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE profiles SET \
            xp = xp + $2, \
            accuracy = (accuracy * lessons_completed + $3) / (lessons_completed + 1), \
            lessons_completed = lessons_completed + 1, \
            perfect_lessons = perfect_lessons + $4, \
            lives = GREATEST(0, lives - $5) \
         WHERE user_id = $1",
    )
    .bind(user_id)
    .bind(outcome.xp_gain)
    .bind(outcome.lesson_accuracy)
    .bind(if outcome.perfect { 1 } else { 0 })
    .bind(outcome.mistakes)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Records a finished timed challenge: XP plus the challenge counter.
pub async fn record_challenge_outcome(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    xp_gain: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE profiles SET xp = xp + $2, challenges_completed = challenges_completed + 1 \
         WHERE user_id = $1",
    )
    .bind(user_id)
    .bind(xp_gain)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Overwrites the streak fields after the streak updater has run.
pub async fn set_streak(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    current: i32,
    longest: i32,
    last_active: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE profiles SET current_streak = $2, longest_streak = $3, last_active_date = $4 \
         WHERE user_id = $1",
    )
    .bind(user_id)
    .bind(current)
    .bind(longest)
    .bind(last_active)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Reconciliation write: persists the resolver outputs for the cached
/// `level` and `rank` fields. Re-applying the same resolved values is a
/// no-op in observable state.
pub async fn set_progression(
    pool: &DbPool,
    user_id: &str,
    level: i32,
    rank: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE profiles SET level = $2, rank = $3 WHERE user_id = $1")
        .bind(user_id)
        .bind(level)
        .bind(rank)
        .execute(pool)
        .await?;
    Ok(())
}

/// Union-append of a badge id into the unlocked set. The guard makes the
/// add idempotent under concurrent evaluators; the returned flag is true
/// only for the write that actually appended, so rewards are paid once.
pub async fn unlock_badge(
    pool: &DbPool,
    user_id: &str,
    badge_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE profiles SET unlocked_badges = array_append(unlocked_badges, $2) \
         WHERE user_id = $1 AND NOT ($2 = ANY(unlocked_badges))",
    )
    .bind(user_id)
    .bind(badge_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Union-append of an achievement id. Same contract as [`unlock_badge`].
pub async fn unlock_achievement(
    pool: &DbPool,
    user_id: &str,
    achievement_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE profiles SET unlocked_achievements = array_append(unlocked_achievements, $2) \
         WHERE user_id = $1 AND NOT ($2 = ANY(unlocked_achievements))",
    )
    .bind(user_id)
    .bind(achievement_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Restores lives to the configured maximum.
pub async fn refill_lives(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    max_lives: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE profiles SET lives = $2 WHERE user_id = $1")
        .bind(user_id)
        .bind(max_lives)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
