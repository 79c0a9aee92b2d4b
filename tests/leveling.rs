use linguaquest::progression::levels::{LEVELS, max_level, resolve_level};

#[test]
fn zero_xp_is_level_one_with_no_progress() {
    let standing = resolve_level(0);
    assert_eq!(standing.level, 1);
    assert_eq!(standing.xp_into_level, 0);
    assert_eq!(standing.progress_percent, 0.0);
    assert_eq!(standing.xp_for_next_level, Some(100));
}

#[test]
fn threshold_is_inclusive() {
    // At exactly the level-2 threshold the player holds level 2, not 1.
    let standing = resolve_level(100);
    assert_eq!(standing.level, 2);
    assert_eq!(standing.xp_into_level, 0);
    assert_eq!(standing.progress_percent, 0.0);

    let just_below = resolve_level(99);
    assert_eq!(just_below.level, 1);
}

#[test]
fn level_and_progress_are_well_behaved_across_the_curve() {
    let mut last_level = 0;
    for xp in (0..=45_000).step_by(37) {
        let standing = resolve_level(xp);
        assert!(standing.level >= last_level, "level regressed at xp={xp}");
        assert!(
            (0.0..=100.0).contains(&standing.progress_percent),
            "progress out of range at xp={xp}"
        );
        last_level = standing.level;
    }
}

#[test]
fn past_the_top_of_the_table_clamps_to_max_level() {
    let top = LEVELS[LEVELS.len() - 1];
    let standing = resolve_level(top.xp_required + 999_999);
    assert_eq!(standing.level, max_level());
    assert_eq!(standing.xp_for_next_level, None);
    assert_eq!(standing.progress_percent, 100.0);
}

#[test]
fn negative_xp_clamps_to_the_baseline() {
    let standing = resolve_level(-500);
    assert_eq!(standing.level, 1);
    assert_eq!(standing.xp_into_level, 0);
    assert_eq!(standing.progress_percent, 0.0);
}

#[test]
fn table_thresholds_strictly_increase() {
    for pair in LEVELS.windows(2) {
        assert!(pair[1].xp_required > pair[0].xp_required);
        assert_eq!(pair[1].level, pair[0].level + 1);
    }
    assert_eq!(LEVELS[0].level, 1);
    assert_eq!(LEVELS[0].xp_required, 0);
}
