//! XP reward arithmetic for lesson, practice, and challenge exercises.

/// Multiplier constants for one exercise context. Practice and challenges
/// tune the same formula differently, so the constants travel with the
/// call site as a value instead of being baked into it.
#[derive(Debug, Clone, Copy)]
pub struct XpTuning {
    /// Share of the base awarded for a wrong answer. Small but non-zero:
    /// attempting still teaches.
    pub partial_credit: f64,
    /// Streak bonus gained per consecutive day.
    pub streak_rate: f64,
    /// Ceiling on the total streak bonus.
    pub streak_cap: f64,
    /// Answer time that earns a neutral speed factor.
    pub ideal_time_secs: f64,
    pub speed_floor: f64,
    pub speed_ceiling: f64,
}

/// Standard lessons: balanced rewards.
pub const LESSON_TUNING: XpTuning = XpTuning {
    partial_credit: 0.2,
    streak_rate: 0.02,
    streak_cap: 0.5,
    ideal_time_secs: 12.0,
    speed_floor: 0.5,
    speed_ceiling: 1.5,
};

/// Practice sessions: gentler stakes, flatter speed curve.
pub const PRACTICE_TUNING: XpTuning = XpTuning {
    partial_credit: 0.25,
    streak_rate: 0.01,
    streak_cap: 0.25,
    ideal_time_secs: 15.0,
    speed_floor: 0.75,
    speed_ceiling: 1.25,
};

/// Timed challenges: speed matters most, wrong answers pay least.
pub const CHALLENGE_TUNING: XpTuning = XpTuning {
    partial_credit: 0.1,
    streak_rate: 0.03,
    streak_cap: 0.75,
    ideal_time_secs: 8.0,
    speed_floor: 0.25,
    speed_ceiling: 2.0,
};

/// Computes the XP award for one answered exercise.
///
/// `base * accuracy_factor * streak_bonus * speed_factor * difficulty`,
/// rounded. The streak bonus is `1 + min(cap, streak * rate)`; the speed
/// factor is `ideal / max(1, taken)` clamped into the tuning's window, so
/// instant answers cannot blow past the ceiling and slow ones keep a floor.
pub fn compute_xp(
    base: i64,
    correct: bool,
    streak: i32,
    time_taken_secs: u32,
    difficulty: f64,
    tuning: &XpTuning,
) -> i64 {
    let accuracy_factor = if correct { 1.0 } else { tuning.partial_credit };
    let streak_bonus = 1.0 + (streak.max(0) as f64 * tuning.streak_rate).min(tuning.streak_cap);
    let speed_factor = (tuning.ideal_time_secs / time_taken_secs.max(1) as f64)
        .clamp(tuning.speed_floor, tuning.speed_ceiling);

    (base as f64 * accuracy_factor * streak_bonus * speed_factor * difficulty).round() as i64
}
