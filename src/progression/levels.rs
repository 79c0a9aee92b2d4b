//! The level table and the resolver that maps cumulative XP onto it.

use serde::Serialize;

/// One row of the level table: the cumulative XP needed to *hold* `level`.
#[derive(Debug, Clone, Copy)]
pub struct LevelDefinition {
    pub level: i32,
    pub xp_required: i64,
}

/// The full level curve, ascending. Level 1 is free; thresholds are
/// cumulative totals, strictly increasing.
pub const LEVELS: &[LevelDefinition] = &[
    LevelDefinition { level: 1, xp_required: 0 },
    LevelDefinition { level: 2, xp_required: 100 },
    LevelDefinition { level: 3, xp_required: 250 },
    LevelDefinition { level: 4, xp_required: 450 },
    LevelDefinition { level: 5, xp_required: 700 },
    LevelDefinition { level: 6, xp_required: 1_000 },
    LevelDefinition { level: 7, xp_required: 1_375 },
    LevelDefinition { level: 8, xp_required: 1_825 },
    LevelDefinition { level: 9, xp_required: 2_350 },
    LevelDefinition { level: 10, xp_required: 2_950 },
    LevelDefinition { level: 11, xp_required: 3_650 },
    LevelDefinition { level: 12, xp_required: 4_450 },
    LevelDefinition { level: 13, xp_required: 5_350 },
    LevelDefinition { level: 14, xp_required: 6_350 },
    LevelDefinition { level: 15, xp_required: 7_450 },
    LevelDefinition { level: 16, xp_required: 8_675 },
    LevelDefinition { level: 17, xp_required: 10_025 },
    LevelDefinition { level: 18, xp_required: 11_500 },
    LevelDefinition { level: 19, xp_required: 13_100 },
    LevelDefinition { level: 20, xp_required: 14_825 },
    LevelDefinition { level: 21, xp_required: 16_700 },
    LevelDefinition { level: 22, xp_required: 18_725 },
    LevelDefinition { level: 23, xp_required: 20_900 },
    LevelDefinition { level: 24, xp_required: 23_225 },
    LevelDefinition { level: 25, xp_required: 25_700 },
    LevelDefinition { level: 26, xp_required: 28_350 },
    LevelDefinition { level: 27, xp_required: 31_175 },
    LevelDefinition { level: 28, xp_required: 34_175 },
    LevelDefinition { level: 29, xp_required: 37_350 },
    LevelDefinition { level: 30, xp_required: 40_700 },
];

/// Where a cumulative XP total lands on the level curve.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LevelStanding {
    pub level: i32,
    /// XP accumulated past the current level's threshold.
    pub xp_into_level: i64,
    /// XP still missing for the next level; `None` at the terminal level.
    pub xp_for_next_level: Option<i64>,
    /// Progress toward the next level in `[0, 100]`; 100 at the terminal level.
    pub progress_percent: f64,
}

/// Resolves a cumulative XP total to the highest level it fully funds.
///
/// Thresholds are inclusive: at exactly `xp_required` for level L the
/// player holds level L. Totals past the top of the table clamp to the
/// maximum level with no next target. Negative input is a contract
/// violation from a malformed document; it clamps to level 1 / 0 XP
/// rather than failing.
pub fn resolve_level(xp: i64) -> LevelStanding {
    let xp = xp.max(0);

    let idx = LEVELS
        .iter()
        .rposition(|def| def.xp_required <= xp)
        .unwrap_or(0);
    let current = &LEVELS[idx];

    match LEVELS.get(idx + 1) {
        Some(next) => {
            let span = next.xp_required - current.xp_required;
            let into = xp - current.xp_required;
            LevelStanding {
                level: current.level,
                xp_into_level: into,
                xp_for_next_level: Some(next.xp_required - xp),
                progress_percent: ((into as f64 / span as f64) * 100.0).min(100.0),
            }
        }
        None => LevelStanding {
            level: current.level,
            xp_into_level: xp - current.xp_required,
            xp_for_next_level: None,
            progress_percent: 100.0,
        },
    }
}

/// The terminal level of the curve.
pub fn max_level() -> i32 {
    LEVELS[LEVELS.len() - 1].level
}
