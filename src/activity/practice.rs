//! Practice sessions: low-stakes review of previously seen material.

use super::AnswerRecord;
use super::content::{Exercise, daily_review_rotation};
use crate::constants::{PRACTICE_BASE_XP, PRACTICE_COIN_REWARD};
use crate::database::init::DbPool;
use crate::database::profile::{add_coins, add_xp, get_or_create_profile, set_streak};
use crate::error::ActivityError;
use crate::progression::streak::update_streak;
use crate::progression::xp::{PRACTICE_TUNING, compute_xp};
use crate::services::reconcile::{self, ReconcileOutcome};
use chrono::Utc;
use rand::{Rng, rng};

/// The exercises for one practice run: today's deterministic review set
/// for this player, in a freshly randomized presentation order.
pub fn build_practice_session(user_id: &str) -> Vec<&'static Exercise> {
    let mut session = daily_review_rotation(user_id, Utc::now().date_naive());

    // Fisher-Yates: the selection is stable all day, the order is not.
    let mut r = rng();
    for i in (1..session.len()).rev() {
        session.swap(i, r.random_range(0..=i));
    }
    session
}

#[derive(Debug)]
pub struct PracticeReport {
    pub xp_earned: i64,
    pub coins_earned: i64,
    pub streak: i32,
    pub outcome: ReconcileOutcome,
}

/// Completes a practice session. No lives at stake and no lesson counter
/// movement; XP flows through the gentler practice tuning and the streak
/// still advances.
pub async fn complete_practice(
    pool: &DbPool,
    user_id: &str,
    session: &[&Exercise],
    answers: &[AnswerRecord],
) -> Result<PracticeReport, ActivityError> {
    let profile = get_or_create_profile(pool, user_id).await?;

    let now = Utc::now();
    let streak = update_streak(
        profile.current_streak,
        profile.longest_streak,
        profile.last_active_date,
        now,
    );

    let xp_gain: i64 = session
        .iter()
        .zip(answers)
        .map(|(exercise, answer)| {
            compute_xp(
                PRACTICE_BASE_XP,
                answer.correct,
                streak.current,
                answer.time_taken_secs,
                exercise.difficulty,
                &PRACTICE_TUNING,
            )
        })
        .sum();

    let mut tx = pool.begin().await?;
    add_xp(&mut tx, user_id, xp_gain).await?;
    add_coins(&mut tx, user_id, PRACTICE_COIN_REWARD).await?;
    set_streak(&mut tx, user_id, streak.current, streak.longest, now).await?;
    tx.commit().await?;

    let reconciled = match reconcile::reconcile_profile(
        pool,
        &get_or_create_profile(pool, user_id).await?,
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(user_id, error = %err, "post-practice reconciliation failed");
            ReconcileOutcome::default()
        }
    };

    Ok(PracticeReport {
        xp_earned: xp_gain,
        coins_earned: PRACTICE_COIN_REWARD,
        streak: streak.current,
        outcome: reconciled,
    })
}
