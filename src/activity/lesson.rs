//! Core logic for completing a lesson.

use super::AnswerRecord;
use super::content;
use crate::constants::{LESSON_COIN_REWARD, PERFECT_LESSON_COIN_BONUS};
use crate::database::init::DbPool;
use crate::database::models::LessonOutcome;
use crate::database::profile::{add_coins, get_or_create_profile, record_lesson_outcome, set_streak};
use crate::error::ActivityError;
use crate::progression::streak::update_streak;
use crate::progression::xp::{LESSON_TUNING, compute_xp};
use crate::services::reconcile::{self, ReconcileOutcome};
use chrono::Utc;

/// Everything the caller needs to present a finished lesson.
#[derive(Debug)]
pub struct LessonReport {
    pub xp_earned: i64,
    pub coins_earned: i64,
    /// Accuracy of this lesson alone, in percent.
    pub lesson_accuracy: f64,
    pub streak: i32,
    pub lives_left: i32,
    pub perfect: bool,
    /// Transitions and awards the completion triggered.
    pub outcome: ReconcileOutcome,
}

/// Completes a lesson for a player: awards XP per answer, folds accuracy
/// and lives into the profile, advances the streak, and reconciles.
///
/// Requires at least one life; mistakes each cost one, floored at zero.
/// Every answer earns something; wrong ones at the partial-credit rate.
pub async fn complete_lesson(
    pool: &DbPool,
    user_id: &str,
    lesson_id: &str,
    answers: &[AnswerRecord],
) -> Result<LessonReport, ActivityError> {
    let lesson = content::lesson_by_id(lesson_id)
        .ok_or_else(|| ActivityError::UnknownLesson(lesson_id.to_string()))?;

    let profile = get_or_create_profile(pool, user_id).await?;
    if profile.lives <= 0 {
        return Err(ActivityError::OutOfLives);
    }

    let now = Utc::now();
    let streak = update_streak(
        profile.current_streak,
        profile.longest_streak,
        profile.last_active_date,
        now,
    );

    // Today's activity counts toward today's streak bonus.
    let xp_gain: i64 = lesson
        .exercises
        .iter()
        .zip(answers)
        .map(|(exercise, answer)| {
            compute_xp(
                lesson.base_xp,
                answer.correct,
                streak.current,
                answer.time_taken_secs,
                exercise.difficulty,
                &LESSON_TUNING,
            )
        })
        .sum();

    let total = answers.len().max(1) as i32;
    let correct = answers.iter().filter(|a| a.correct).count() as i32;
    let mistakes = total - correct;
    let perfect = mistakes == 0;
    let lesson_accuracy = f64::from(correct) / f64::from(total) * 100.0;

    let coins = LESSON_COIN_REWARD + if perfect { PERFECT_LESSON_COIN_BONUS } else { 0 };

    let outcome = LessonOutcome {
        xp_gain,
        lesson_accuracy,
        mistakes,
        perfect,
    };

    let mut tx = pool.begin().await?;
    record_lesson_outcome(&mut tx, user_id, &outcome).await?;
    add_coins(&mut tx, user_id, coins).await?;
    // Persisted even on the same-day no-op branch, to keep the activity
    // timestamp fresh.
    set_streak(&mut tx, user_id, streak.current, streak.longest, now).await?;
    tx.commit().await?;

    // Reconciliation failures must not undo a committed lesson; the live
    // listener will retry on the next profile write.
    let reconciled = match reconcile::reconcile_profile(pool, &get_or_create_profile(pool, user_id).await?).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(user_id, error = %err, "post-lesson reconciliation failed");
            ReconcileOutcome::default()
        }
    };

    Ok(LessonReport {
        xp_earned: xp_gain,
        coins_earned: coins,
        lesson_accuracy,
        streak: streak.current,
        lives_left: (profile.lives - mistakes).max(0),
        perfect,
        outcome: reconciled,
    })
}
