//! Badge and achievement definitions plus the shared unlock evaluator.
//!
//! Badges and achievements used to be two parallel hand-written predicate
//! tables in the product; here both reuse one declarative [`Requirement`]
//! shape and one evaluator, so the two systems cannot drift apart.

use super::PlayerSnapshot;
use super::levels::resolve_level;
use serde::Serialize;

/// Declarative minimum thresholds over a player snapshot. A `None` field
/// does not gate; all present fields must hold (equality qualifies).
#[derive(Debug, Clone, Copy, Default)]
pub struct Requirement {
    pub xp: Option<i64>,
    pub level: Option<i32>,
    pub streak: Option<i32>,
    pub lessons: Option<i32>,
    pub accuracy: Option<f64>,
    pub challenges: Option<i32>,
    pub perfect_lessons: Option<i32>,
    pub coins_earned: Option<i64>,
}

impl Requirement {
    /// Evaluates the predicate against the current snapshot only. Level
    /// gates check the *resolved* level, not the cached field, so an
    /// unreconciled document cannot under-report.
    pub fn is_met(&self, snapshot: &PlayerSnapshot) -> bool {
        let meets = |min: Option<i32>, value: i32| min.is_none_or(|m| value >= m);

        self.xp.is_none_or(|m| snapshot.xp >= m)
            && self
                .level
                .is_none_or(|m| resolve_level(snapshot.xp).level >= m)
            && meets(self.streak, snapshot.current_streak)
            && meets(self.lessons, snapshot.lessons_completed)
            && self.accuracy.is_none_or(|m| snapshot.accuracy >= m)
            && meets(self.challenges, snapshot.challenges_completed)
            && meets(self.perfect_lessons, snapshot.perfect_lessons)
            && self.coins_earned.is_none_or(|m| snapshot.coins_earned >= m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AwardTier {
    Bronze,
    Silver,
    Gold,
}

/// Currency granted when an award unlocks. Applied as additive increments,
/// never absolute writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reward {
    pub coins: i64,
    pub tickets: i64,
}

/// One unlockable: a badge or an achievement, depending on which table it
/// lives in.
#[derive(Debug)]
pub struct AwardDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tier: AwardTier,
    pub requirement: Requirement,
    pub reward: Reward,
}

const NO_REQUIREMENT: Requirement = Requirement {
    xp: None,
    level: None,
    streak: None,
    lessons: None,
    accuracy: None,
    challenges: None,
    perfect_lessons: None,
    coins_earned: None,
};

pub const BADGES: &[AwardDefinition] = &[
    AwardDefinition {
        id: "first-steps",
        name: "First Steps",
        description: "Complete your first lesson.",
        tier: AwardTier::Bronze,
        requirement: Requirement { lessons: Some(1), ..NO_REQUIREMENT },
        reward: Reward { coins: 10, tickets: 0 },
    },
    AwardDefinition {
        id: "word-collector",
        name: "Word Collector",
        description: "Complete 10 lessons.",
        tier: AwardTier::Bronze,
        requirement: Requirement { lessons: Some(10), ..NO_REQUIREMENT },
        reward: Reward { coins: 25, tickets: 0 },
    },
    AwardDefinition {
        id: "scholar",
        name: "Scholar",
        description: "Complete 50 lessons.",
        tier: AwardTier::Silver,
        requirement: Requirement { lessons: Some(50), ..NO_REQUIREMENT },
        reward: Reward { coins: 100, tickets: 0 },
    },
    AwardDefinition {
        id: "sage",
        name: "Sage",
        description: "Complete 150 lessons.",
        tier: AwardTier::Gold,
        requirement: Requirement { lessons: Some(150), ..NO_REQUIREMENT },
        reward: Reward { coins: 300, tickets: 1 },
    },
    AwardDefinition {
        id: "kindling",
        name: "Kindling",
        description: "Reach a 3-day streak.",
        tier: AwardTier::Bronze,
        requirement: Requirement { streak: Some(3), ..NO_REQUIREMENT },
        reward: Reward { coins: 15, tickets: 0 },
    },
    AwardDefinition {
        id: "week-of-fire",
        name: "Week of Fire",
        description: "Reach a 7-day streak.",
        tier: AwardTier::Silver,
        requirement: Requirement { streak: Some(7), ..NO_REQUIREMENT },
        reward: Reward { coins: 50, tickets: 0 },
    },
    AwardDefinition {
        id: "month-of-fire",
        name: "Month of Fire",
        description: "Reach a 30-day streak.",
        tier: AwardTier::Gold,
        requirement: Requirement { streak: Some(30), ..NO_REQUIREMENT },
        reward: Reward { coins: 250, tickets: 2 },
    },
    AwardDefinition {
        id: "sharp-ear",
        name: "Sharp Ear",
        description: "Hold 80% accuracy across 20 lessons.",
        tier: AwardTier::Silver,
        requirement: Requirement {
            accuracy: Some(80.0),
            lessons: Some(20),
            ..NO_REQUIREMENT
        },
        reward: Reward { coins: 75, tickets: 0 },
    },
    AwardDefinition {
        id: "perfectionist",
        name: "Perfectionist",
        description: "Finish 10 lessons without a single mistake.",
        tier: AwardTier::Gold,
        requirement: Requirement { perfect_lessons: Some(10), ..NO_REQUIREMENT },
        reward: Reward { coins: 150, tickets: 1 },
    },
];

pub const ACHIEVEMENTS: &[AwardDefinition] = &[
    AwardDefinition {
        id: "rising-star",
        name: "Rising Star",
        description: "Reach level 5.",
        tier: AwardTier::Bronze,
        requirement: Requirement { level: Some(5), ..NO_REQUIREMENT },
        reward: Reward { coins: 50, tickets: 0 },
    },
    AwardDefinition {
        id: "dedicated-student",
        name: "Dedicated Student",
        description: "Reach level 10.",
        tier: AwardTier::Silver,
        requirement: Requirement { level: Some(10), ..NO_REQUIREMENT },
        reward: Reward { coins: 150, tickets: 1 },
    },
    AwardDefinition {
        id: "polyglot-in-training",
        name: "Polyglot in Training",
        description: "Reach level 20.",
        tier: AwardTier::Gold,
        requirement: Requirement { level: Some(20), ..NO_REQUIREMENT },
        reward: Reward { coins: 500, tickets: 2 },
    },
    AwardDefinition {
        id: "ten-thousand-club",
        name: "Ten Thousand Club",
        description: "Earn 10,000 XP.",
        tier: AwardTier::Silver,
        requirement: Requirement { xp: Some(10_000), ..NO_REQUIREMENT },
        reward: Reward { coins: 200, tickets: 0 },
    },
    AwardDefinition {
        id: "challenger",
        name: "Challenger",
        description: "Complete your first timed challenge.",
        tier: AwardTier::Bronze,
        requirement: Requirement { challenges: Some(1), ..NO_REQUIREMENT },
        reward: Reward { coins: 0, tickets: 1 },
    },
    AwardDefinition {
        id: "gladiator",
        name: "Gladiator",
        description: "Complete 25 timed challenges.",
        tier: AwardTier::Gold,
        requirement: Requirement { challenges: Some(25), ..NO_REQUIREMENT },
        reward: Reward { coins: 300, tickets: 3 },
    },
    AwardDefinition {
        id: "hoarder",
        name: "Hoarder",
        description: "Earn 1,000 coins over your lifetime.",
        tier: AwardTier::Silver,
        requirement: Requirement { coins_earned: Some(1_000), ..NO_REQUIREMENT },
        reward: Reward { coins: 100, tickets: 0 },
    },
];

/// Returns every definition whose requirement the snapshot now satisfies
/// and whose id is not yet in the unlocked set.
///
/// Pure and order-independent; calling it again on an unchanged snapshot
/// (after the ids landed in the set) yields nothing.
pub fn find_newly_earned<'a>(
    definitions: &'a [AwardDefinition],
    unlocked_ids: &[String],
    snapshot: &PlayerSnapshot,
) -> Vec<&'a AwardDefinition> {
    definitions
        .iter()
        .filter(|def| !unlocked_ids.iter().any(|id| id == def.id))
        .filter(|def| def.requirement.is_met(snapshot))
        .collect()
}

/// Looks up a definition in either table, for rendering notifications.
pub fn award_by_id(id: &str) -> Option<&'static AwardDefinition> {
    BADGES
        .iter()
        .chain(ACHIEVEMENTS.iter())
        .find(|def| def.id == id)
}
