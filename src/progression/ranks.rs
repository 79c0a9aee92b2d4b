//! The rank table and the resolver that places a player in a league.

/// Secondary thresholds a player must meet, on top of the level range,
/// to hold a rank. Equality qualifies.
#[derive(Debug, Clone, Copy)]
pub struct RankRequirements {
    pub accuracy: f64,
    pub streak: i32,
    pub lessons: i32,
}

#[derive(Debug)]
pub struct RankDefinition {
    pub name: &'static str,
    pub min_level: i32,
    pub max_level: i32,
    pub requirements: RankRequirements,
    /// Display color for league badges and embeds.
    pub color: &'static str,
}

/// League tiers, lowest to highest. Level ranges partition 1..=30 with no
/// overlap; requirement thresholds never decrease going up.
pub const RANKS: &[RankDefinition] = &[
    RankDefinition {
        name: "Bronze",
        min_level: 1,
        max_level: 5,
        requirements: RankRequirements { accuracy: 0.0, streak: 0, lessons: 0 },
        color: "#cd7f32",
    },
    RankDefinition {
        name: "Silver",
        min_level: 6,
        max_level: 10,
        requirements: RankRequirements { accuracy: 50.0, streak: 2, lessons: 5 },
        color: "#c0c0c0",
    },
    RankDefinition {
        name: "Topaz",
        min_level: 11,
        max_level: 15,
        requirements: RankRequirements { accuracy: 65.0, streak: 5, lessons: 10 },
        color: "#ffc87c",
    },
    RankDefinition {
        name: "Sapphire",
        min_level: 16,
        max_level: 20,
        requirements: RankRequirements { accuracy: 75.0, streak: 7, lessons: 20 },
        color: "#0f52ba",
    },
    RankDefinition {
        name: "Ruby",
        min_level: 21,
        max_level: 25,
        requirements: RankRequirements { accuracy: 80.0, streak: 10, lessons: 35 },
        color: "#e0115f",
    },
    RankDefinition {
        name: "Emerald",
        min_level: 26,
        max_level: 30,
        requirements: RankRequirements { accuracy: 85.0, streak: 14, lessons: 50 },
        color: "#50c878",
    },
];

/// The stat view the resolver gates on.
#[derive(Debug, Clone, Copy)]
pub struct RankStats {
    pub level: i32,
    pub accuracy: f64,
    pub streak: i32,
    pub lessons_completed: i32,
}

/// Resolves the highest rank whose level range contains the player and
/// whose secondary thresholds are all met.
///
/// Iterates highest tier first. Because the level ranges partition the
/// table, at most one rank can match on level; a player inside a high
/// rank's range who fails its side gates falls all the way through to the
/// default lowest rank. Level alone does not guarantee rank.
pub fn resolve_rank(stats: &RankStats) -> &'static RankDefinition {
    RANKS
        .iter()
        .rev()
        .find(|rank| {
            stats.level >= rank.min_level
                && stats.level <= rank.max_level
                && stats.accuracy >= rank.requirements.accuracy
                && stats.streak >= rank.requirements.streak
                && stats.lessons_completed >= rank.requirements.lessons
        })
        .unwrap_or(&RANKS[0])
}

/// Looks a rank up by name, e.g. when validating a stored profile field.
pub fn rank_by_name(name: &str) -> Option<&'static RankDefinition> {
    RANKS.iter().find(|rank| rank.name == name)
}
