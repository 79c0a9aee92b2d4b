//! Pure detection of level and rank transitions between snapshots.

use super::PlayerSnapshot;
use super::levels::{LevelStanding, resolve_level};
use super::ranks::{RankDefinition, resolve_rank};
use serde::Serialize;

/// A threshold crossing the player should hear about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Transition {
    LevelUp { from: i32, to: i32 },
    RankChanged { from: String, to: String },
}

/// The resolver outputs for the current snapshot plus any transitions
/// relative to the previous one.
#[derive(Debug)]
pub struct TransitionReport {
    pub standing: LevelStanding,
    pub rank: &'static RankDefinition,
    pub transitions: Vec<Transition>,
}

/// Resolves the current snapshot from its primary fields and compares the
/// result against the previous snapshot's last-observed `level` and `rank`.
///
/// Comparing against last-observed state (rather than the notification
/// log) is what makes the reconciliation write idempotent: once the new
/// rank has been persisted and is observed back, the same inputs produce
/// an empty transition list and nothing is re-notified. A level that
/// resolves *below* the stored field (a repaired document) is corrected
/// silently, without announcing a level-up.
/// Reconciliation view of a single document: resolves truth from its
/// primary fields and compares against its own cached `level`/`rank`.
pub fn reconcile_snapshot(snapshot: &PlayerSnapshot) -> TransitionReport {
    detect_transitions(snapshot, snapshot)
}

pub fn detect_transitions(
    previous: &PlayerSnapshot,
    current: &PlayerSnapshot,
) -> TransitionReport {
    let standing = resolve_level(current.xp);
    let rank = resolve_rank(&current.rank_stats());

    let mut transitions = Vec::new();
    if standing.level > previous.level {
        transitions.push(Transition::LevelUp {
            from: previous.level,
            to: standing.level,
        });
    }
    if rank.name != previous.rank {
        transitions.push(Transition::RankChanged {
            from: previous.rank.clone(),
            to: rank.name.to_string(),
        });
    }

    TransitionReport {
        standing,
        rank,
        transitions,
    }
}
