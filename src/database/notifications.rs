//! The per-player notification log: a bounded, append-mostly collection
//! whose entries only ever mutate by flipping their `read` flag.

use super::init::DbPool;
use super::models::NotificationRecord;
use crate::constants::{NOTIFICATION_CAPACITY, NOTIFICATION_WARN_AT};

/// What a notification announces. Stored as a plain text tag so new kinds
/// never need a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    LevelUp,
    RankChanged,
    BadgeUnlocked,
    AchievementUnlocked,
    System,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::LevelUp => "level_up",
            NotificationKind::RankChanged => "rank_changed",
            NotificationKind::BadgeUnlocked => "badge_unlocked",
            NotificationKind::AchievementUnlocked => "achievement_unlocked",
            NotificationKind::System => "system",
        }
    }
}

/// Total entries in a player's log.
pub async fn count(pool: &DbPool, user_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

/// Unread entries in a player's log.
pub async fn unread_count(pool: &DbPool, user_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND read = FALSE",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Appends a notification, enforcing the soft capacity.
///
/// Past capacity the insert is refused with a warning log and `Ok(false)`;
/// the operation that triggered it (a badge unlock, a rank change) must
/// never fail because the log is full. Crossing the warning threshold
/// injects a one-time system entry telling the player to clear the log.
pub async fn insert(
    pool: &DbPool,
    user_id: &str,
    kind: NotificationKind,
    title: &str,
    body: &str,
    payload: Option<&serde_json::Value>,
) -> Result<bool, sqlx::Error> {
    let existing = count(pool, user_id).await?;
    if existing >= NOTIFICATION_CAPACITY {
        tracing::warn!(user_id, kind = kind.as_str(), "notification log full, dropping entry");
        return Ok(false);
    }

    let encoded = payload.map(|value| value.to_string());
    sqlx::query(
        "INSERT INTO notifications (user_id, kind, title, body, payload) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(user_id)
    .bind(kind.as_str())
    .bind(title)
    .bind(body)
    .bind(encoded)
    .execute(pool)
    .await?;

    // Exactly-at-threshold check keeps the warning to a single injection
    // per fill-up rather than one per insert from here to the cap.
    if existing + 1 == NOTIFICATION_WARN_AT {
        sqlx::query(
            "INSERT INTO notifications (user_id, kind, title, body) VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(NotificationKind::System.as_str())
        .bind("Notification log almost full")
        .bind("Older notifications will stop being recorded soon. Mark some as read to keep the history tidy.")
        .execute(pool)
        .await?;
    }

    Ok(true)
}

/// The most recent entries, newest first.
pub async fn recent(
    pool: &DbPool,
    user_id: &str,
    limit: i64,
) -> Result<Vec<NotificationRecord>, sqlx::Error> {
    sqlx::query_as::<_, NotificationRecord>(
        "SELECT notification_id, user_id, kind, title, body, payload, read, created_at \
         FROM notifications WHERE user_id = $1 ORDER BY created_at DESC, notification_id DESC \
         LIMIT $2",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Flips one entry to read. Scoped by user so a player can only touch
/// their own log.
pub async fn mark_read(
    pool: &DbPool,
    user_id: &str,
    notification_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE notifications SET read = TRUE WHERE notification_id = $1 AND user_id = $2",
    )
    .bind(notification_id)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Flips a player's whole log to read.
pub async fn mark_all_read(pool: &DbPool, user_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE notifications SET read = TRUE WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
