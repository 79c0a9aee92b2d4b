//! Shared database types and schema bootstrap.

use sqlx::{Pool, Postgres};

/// A type alias for the database connection pool (`Pool<Postgres>`), used
/// throughout the application as the single shared handle.
pub type DbPool = Pool<Postgres>;

const CREATE_PROFILES: &str = r#"
CREATE TABLE IF NOT EXISTS profiles (
    user_id               TEXT PRIMARY KEY,
    xp                    BIGINT NOT NULL DEFAULT 0,
    level                 INT NOT NULL DEFAULT 1,
    rank                  TEXT NOT NULL DEFAULT 'Bronze',
    current_streak        INT NOT NULL DEFAULT 0,
    longest_streak        INT NOT NULL DEFAULT 0,
    last_active_date      TIMESTAMPTZ,
    accuracy              DOUBLE PRECISION NOT NULL DEFAULT 0,
    lessons_completed     INT NOT NULL DEFAULT 0,
    challenges_completed  INT NOT NULL DEFAULT 0,
    perfect_lessons       INT NOT NULL DEFAULT 0,
    coins                 BIGINT NOT NULL DEFAULT 0,
    tickets               BIGINT NOT NULL DEFAULT 1,
    coins_earned          BIGINT NOT NULL DEFAULT 0,
    tickets_earned        BIGINT NOT NULL DEFAULT 0,
    unlocked_badges       TEXT[] NOT NULL DEFAULT '{}',
    unlocked_achievements TEXT[] NOT NULL DEFAULT '{}',
    lives                 INT NOT NULL DEFAULT 5,
    created_at            TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_NOTIFICATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS notifications (
    notification_id BIGSERIAL PRIMARY KEY,
    user_id         TEXT NOT NULL,
    kind            TEXT NOT NULL,
    title           TEXT NOT NULL,
    body            TEXT NOT NULL,
    payload         TEXT,
    read            BOOLEAN NOT NULL DEFAULT FALSE,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_NOTIFICATIONS_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS notifications_user_recency
    ON notifications (user_id, created_at DESC)
"#;

/// Every write to a profile row announces the user id on the
/// `profile_updates` channel; `services::sync` listens on it.
const CREATE_NOTIFY_FN: &str = r#"
CREATE OR REPLACE FUNCTION notify_profile_change() RETURNS trigger AS $$
BEGIN
    PERFORM pg_notify('profile_updates', NEW.user_id);
    RETURN NEW;
END;
$$ LANGUAGE plpgsql
"#;

const CREATE_NOTIFY_TRIGGER: &str = r#"
DO $$
BEGIN
    IF NOT EXISTS (SELECT 1 FROM pg_trigger WHERE tgname = 'profiles_notify') THEN
        CREATE TRIGGER profiles_notify
            AFTER INSERT OR UPDATE ON profiles
            FOR EACH ROW EXECUTE FUNCTION notify_profile_change();
    END IF;
END;
$$
"#;

/// Creates all tables, indexes, and triggers if they are missing. Safe to
/// run on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    for ddl in [
        CREATE_PROFILES,
        CREATE_NOTIFICATIONS,
        CREATE_NOTIFICATIONS_INDEX,
        CREATE_NOTIFY_FN,
        CREATE_NOTIFY_TRIGGER,
    ] {
        sqlx::raw_sql(ddl).execute(pool).await?;
    }
    tracing::info!("database schema is up to date");
    Ok(())
}
