use linguaquest::progression::xp::{
    CHALLENGE_TUNING, LESSON_TUNING, PRACTICE_TUNING, compute_xp,
};

#[test]
fn wrong_answers_still_earn_partial_credit() {
    let correct = compute_xp(10, true, 0, 12, 1.0, &LESSON_TUNING);
    let wrong = compute_xp(10, false, 0, 12, 1.0, &LESSON_TUNING);
    assert!(wrong > 0, "partial credit must be non-zero");
    assert!(wrong < correct);
}

#[test]
fn baseline_award_is_the_base_value() {
    // Ideal time, no streak, neutral difficulty: every factor is 1.
    assert_eq!(compute_xp(10, true, 0, 12, 1.0, &LESSON_TUNING), 10);
}

#[test]
fn streak_bonus_is_capped() {
    let capped = compute_xp(10, true, 1_000, 12, 1.0, &LESSON_TUNING);
    let at_cap = compute_xp(10, true, 25, 12, 1.0, &LESSON_TUNING);
    // 25 days * 0.02 reaches the 0.5 cap exactly; a thousand-day streak
    // earns no more.
    assert_eq!(capped, at_cap);
    assert_eq!(capped, 15);
}

#[test]
fn speed_factor_clamps_at_both_ends() {
    // Instant answers hit the ceiling, not infinity (and a zero duration
    // must not divide by zero).
    let instant = compute_xp(10, true, 0, 0, 1.0, &LESSON_TUNING);
    assert_eq!(instant, 15);

    // A very slow answer keeps the floor.
    let slow = compute_xp(10, true, 0, 1_200, 1.0, &LESSON_TUNING);
    assert_eq!(slow, 5);
}

#[test]
fn difficulty_scales_the_award() {
    let normal = compute_xp(10, true, 0, 12, 1.0, &LESSON_TUNING);
    let hard = compute_xp(10, true, 0, 12, 2.0, &LESSON_TUNING);
    assert_eq!(hard, normal * 2);
}

#[test]
fn contexts_are_tuned_independently() {
    assert!(CHALLENGE_TUNING.partial_credit < PRACTICE_TUNING.partial_credit);
    assert!(CHALLENGE_TUNING.speed_ceiling > PRACTICE_TUNING.speed_ceiling);
    assert_ne!(LESSON_TUNING.ideal_time_secs, CHALLENGE_TUNING.ideal_time_secs);

    // The same answer is worth different XP in different contexts.
    let lesson = compute_xp(10, true, 5, 5, 1.0, &LESSON_TUNING);
    let challenge = compute_xp(10, true, 5, 5, 1.0, &CHALLENGE_TUNING);
    assert_ne!(lesson, challenge);
}
