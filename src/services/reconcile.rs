//! Effectful reconciliation: recomputes derived fields from a profile's
//! primary fields, persists any drift, pays newly-earned awards, and
//! enqueues notifications.
//!
//! Detection itself is pure (`progression::transitions`); this module owns
//! only the persistence and notification side effects, in that order per
//! unlock: persist the id, pay the reward, then notify. A notification
//! failure is logged and never fails the unlock that triggered it.

use crate::database::init::DbPool;
use crate::database::models::Profile;
use crate::database::notifications::{self, NotificationKind};
use crate::database::profile::{
    add_coins, add_tickets, set_progression, unlock_achievement, unlock_badge,
};
use crate::progression::PlayerSnapshot;
use crate::progression::awards::{self, AwardDefinition};
use crate::progression::transitions::{Transition, reconcile_snapshot};
use serde_json::json;

/// What one reconciliation pass changed. Empty on an already-reconciled
/// profile.
#[derive(Debug, Default)]
pub struct ReconcileOutcome {
    pub transitions: Vec<Transition>,
    pub new_badges: Vec<&'static AwardDefinition>,
    pub new_achievements: Vec<&'static AwardDefinition>,
}

impl ReconcileOutcome {
    pub fn is_noop(&self) -> bool {
        self.transitions.is_empty()
            && self.new_badges.is_empty()
            && self.new_achievements.is_empty()
    }
}

/// Runs one reconciliation pass over a freshly-read profile document.
///
/// Applying this twice to the same observed state is a no-op the second
/// time: the level/rank write lands the resolved values, and unlock
/// appends are guarded unions that pay out only when they actually append.
pub async fn reconcile_profile(
    pool: &DbPool,
    profile: &Profile,
) -> Result<ReconcileOutcome, sqlx::Error> {
    let snapshot = PlayerSnapshot::from(profile);
    let report = reconcile_snapshot(&snapshot);

    let mut outcome = ReconcileOutcome {
        transitions: report.transitions,
        ..Default::default()
    };

    let drifted = report.standing.level != profile.level || report.rank.name != profile.rank;
    if drifted {
        set_progression(pool, &profile.user_id, report.standing.level, report.rank.name).await?;
    }

    for transition in &outcome.transitions {
        notify_transition(pool, &profile.user_id, transition).await;
    }

    for def in awards::find_newly_earned(awards::BADGES, &profile.unlocked_badges, &snapshot) {
        if unlock_badge(pool, &profile.user_id, def.id).await? {
            grant_award(pool, &profile.user_id, def, NotificationKind::BadgeUnlocked).await?;
            outcome.new_badges.push(def);
        }
    }

    for def in
        awards::find_newly_earned(awards::ACHIEVEMENTS, &profile.unlocked_achievements, &snapshot)
    {
        if unlock_achievement(pool, &profile.user_id, def.id).await? {
            grant_award(pool, &profile.user_id, def, NotificationKind::AchievementUnlocked).await?;
            outcome.new_achievements.push(def);
        }
    }

    if !outcome.is_noop() {
        tracing::info!(
            user_id = %profile.user_id,
            transitions = outcome.transitions.len(),
            badges = outcome.new_badges.len(),
            achievements = outcome.new_achievements.len(),
            "reconciled profile"
        );
    }

    Ok(outcome)
}

/// Pays an award's currency reward and enqueues its unlock notification.
/// Called only when the union append actually landed, so a concurrent
/// duplicate pass cannot double-pay.
async fn grant_award(
    pool: &DbPool,
    user_id: &str,
    def: &'static AwardDefinition,
    kind: NotificationKind,
) -> Result<(), sqlx::Error> {
    if def.reward.coins > 0 || def.reward.tickets > 0 {
        let mut tx = pool.begin().await?;
        if def.reward.coins > 0 {
            add_coins(&mut tx, user_id, def.reward.coins).await?;
        }
        if def.reward.tickets > 0 {
            add_tickets(&mut tx, user_id, def.reward.tickets).await?;
        }
        tx.commit().await?;
    }

    let payload = json!({
        "id": def.id,
        "coins": def.reward.coins,
        "tickets": def.reward.tickets,
    });
    if let Err(err) =
        notifications::insert(pool, user_id, kind, def.name, def.description, Some(&payload)).await
    {
        tracing::error!(user_id, award = def.id, error = %err, "failed to enqueue unlock notification");
    }
    Ok(())
}

async fn notify_transition(pool: &DbPool, user_id: &str, transition: &Transition) {
    let (kind, title, body, payload) = match transition {
        Transition::LevelUp { from, to } => (
            NotificationKind::LevelUp,
            "Level up!".to_string(),
            format!("You advanced from level {from} to level {to}."),
            json!({ "from": from, "to": to }),
        ),
        Transition::RankChanged { from, to } => (
            NotificationKind::RankChanged,
            format!("Welcome to the {to} league"),
            format!("Your league changed from {from} to {to}."),
            json!({ "from": from, "to": to }),
        ),
    };

    if let Err(err) =
        notifications::insert(pool, user_id, kind, &title, &body, Some(&payload)).await
    {
        tracing::error!(user_id, error = %err, "failed to enqueue transition notification");
    }
}
