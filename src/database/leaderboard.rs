//! Leaderboard queries over the profiles table.

use super::init::DbPool;
use serde::Serialize;
use sqlx::FromRow;

/// A single leaderboard row.
#[derive(FromRow, Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub score: i64,
}

/// Which board to rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderboardKind {
    Xp,
    Streak,
    Overall,
}

/// Top players by cumulative XP.
pub async fn get_xp_leaderboard(
    pool: &DbPool,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT user_id, xp AS score FROM profiles ORDER BY xp DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Top players by current streak length.
pub async fn get_streak_leaderboard(
    pool: &DbPool,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT user_id, current_streak::BIGINT AS score FROM profiles \
         ORDER BY current_streak DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Top players by the weighted overall score:
/// `xp + current_streak * 50 + lessons_completed * 25`.
pub async fn get_overall_leaderboard(
    pool: &DbPool,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT user_id, \
            (xp + current_streak * 50 + lessons_completed * 25) AS score \
         FROM profiles \
         ORDER BY (xp + current_streak * 50 + lessons_completed * 25) DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Dispatch helper so callers can cache all three boards uniformly.
pub async fn get_leaderboard(
    pool: &DbPool,
    kind: LeaderboardKind,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    match kind {
        LeaderboardKind::Xp => get_xp_leaderboard(pool, limit).await,
        LeaderboardKind::Streak => get_streak_leaderboard(pool, limit).await,
        LeaderboardKind::Overall => get_overall_leaderboard(pool, limit).await,
    }
}
