//! Live profile sync: fans Postgres `NOTIFY` events out to in-process
//! subscribers and drives reconciliation.
//!
//! Every write to a profile row fires the `profile_updates` trigger with
//! the user id as payload. The listener re-reads the full document and
//! pushes it to each subscriber, so a given subscriber always observes
//! documents in non-decreasing recency order. There is no cross-document
//! atomicity: a profile write and its derived notification are separate
//! statements, and reconciliation is written to re-converge if a crash
//! lands between them.

use crate::constants::PROFILE_CHANNEL;
use crate::database::models::Profile;
use crate::database::profile::fetch_profile;
use crate::model::AppState;
use crate::services::reconcile;
use sqlx::postgres::PgListener;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tokio::sync::mpsc;

struct Subscriber {
    alive: Arc<AtomicBool>,
    tx: mpsc::UnboundedSender<Profile>,
}

/// Fan-out point for live profile updates, keyed by user id.
pub struct ProfileFeed {
    subscribers: RwLock<HashMap<String, Vec<Subscriber>>>,
}

/// A live subscription to one player's document. Call [`teardown`] (or
/// drop the handle) when the consuming surface goes away; afterwards no
/// further snapshot can be delivered through it.
///
/// [`teardown`]: ProfileSubscription::teardown
pub struct ProfileSubscription {
    pub rx: mpsc::UnboundedReceiver<Profile>,
    alive: Arc<AtomicBool>,
}

impl ProfileSubscription {
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Drop for ProfileSubscription {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl ProfileFeed {
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a subscriber for one player's updates.
    pub async fn subscribe(&self, user_id: &str) -> ProfileSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let alive = Arc::new(AtomicBool::new(true));
        self.subscribers
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .push(Subscriber {
                alive: alive.clone(),
                tx,
            });
        ProfileSubscription { rx, alive }
    }

    /// Delivers a fresh snapshot to every live subscriber of this player.
    /// Torn-down and disconnected subscribers are pruned on the way.
    pub async fn dispatch(&self, profile: &Profile) {
        let mut map = self.subscribers.write().await;
        let Some(subs) = map.get_mut(&profile.user_id) else {
            return;
        };
        // The liveness check must happen before the send: a subscriber
        // torn down between events must never observe another snapshot.
        subs.retain(|sub| {
            sub.alive.load(Ordering::Acquire) && sub.tx.send(profile.clone()).is_ok()
        });
        if subs.is_empty() {
            map.remove(&profile.user_id);
        }
    }

    /// Number of live subscribers, for diagnostics.
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.values().map(Vec::len).sum()
    }
}

impl Default for ProfileFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Listens on the profile channel until the connection is lost beyond
/// recovery or the task is cancelled. On each event: re-read the
/// document, fan it out, then reconcile. Reconciliation writes re-enter
/// this loop once and reach a fixed point, because a reconciled profile
/// produces no further transitions.
pub async fn run_listener(app: Arc<AppState>) -> Result<(), sqlx::Error> {
    let mut listener = PgListener::connect_with(&app.db).await?;
    listener.listen(PROFILE_CHANNEL).await?;
    tracing::info!(channel = PROFILE_CHANNEL, "profile listener started");

    loop {
        let notification = listener.recv().await?;
        let user_id = notification.payload().to_string();

        let profile = match fetch_profile(&app.db, &user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::warn!(%user_id, "notify for unknown profile");
                continue;
            }
            Err(err) => {
                // Transient read failure: skip this event; the next write
                // will re-notify and the subscriber state stays uncorrupted.
                tracing::error!(%user_id, error = %err, "failed to read profile after notify");
                continue;
            }
        };

        app.feed.dispatch(&profile).await;

        if let Err(err) = reconcile::reconcile_profile(&app.db, &profile).await {
            tracing::error!(%user_id, error = %err, "reconciliation failed");
        }
    }
}
