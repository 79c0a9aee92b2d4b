//! Shared application state handed to long-running services and gameplay
//! entry points.

use crate::constants::{LEADERBOARD_CACHE_TTL_SECS, LEADERBOARD_LIMIT};
use crate::database::init::DbPool;
use crate::database::leaderboard::{self, LeaderboardEntry, LeaderboardKind};
use crate::services::cache;
use crate::services::sync::ProfileFeed;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

type LeaderboardCache = HashMap<LeaderboardKind, (Instant, Vec<LeaderboardEntry>)>;

/// The central, shared state of the service. Cloned as `Arc<AppState>`
/// into every task that needs the pool, the live feed, or a cache.
pub struct AppState {
    /// The connection pool for the PostgreSQL database.
    pub db: DbPool,
    /// Fan-out point for live profile updates.
    pub feed: Arc<ProfileFeed>,
    /// Leaderboards are recomputed at most once per TTL window.
    leaderboard_cache: RwLock<LeaderboardCache>,
}

impl AppState {
    pub fn new(db: DbPool) -> Arc<Self> {
        Arc::new(Self {
            db,
            feed: Arc::new(ProfileFeed::new()),
            leaderboard_cache: RwLock::new(HashMap::new()),
        })
    }

    /// Fetches a leaderboard through the TTL cache, hitting the database
    /// only when the cached copy has expired.
    pub async fn leaderboard(
        &self,
        kind: LeaderboardKind,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let ttl = Duration::from_secs(LEADERBOARD_CACHE_TTL_SECS);
        if let Some(entries) = cache::get_with_ttl(&self.leaderboard_cache, &kind, ttl).await {
            return Ok(entries);
        }

        let entries = leaderboard::get_leaderboard(&self.db, kind, LEADERBOARD_LIMIT).await?;
        cache::insert(&self.leaderboard_cache, kind, entries.clone()).await;
        Ok(entries)
    }
}
