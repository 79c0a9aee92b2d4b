//! Timed challenges: ticket-gated runs where speed pays.

use super::AnswerRecord;
use crate::constants::{
    CHALLENGE_BASE_XP, CHALLENGE_COINS_PER_CORRECT, CHALLENGE_PERFECT_TICKET_BONUS,
};
use crate::database::init::DbPool;
use crate::database::profile::{
    add_coins, add_tickets, get_or_create_profile, record_challenge_outcome, set_streak,
    spend_ticket,
};
use crate::error::ActivityError;
use crate::progression::streak::update_streak;
use crate::progression::xp::{CHALLENGE_TUNING, compute_xp};
use crate::services::reconcile::{self, ReconcileOutcome};
use chrono::Utc;

#[derive(Debug)]
pub struct ChallengeReport {
    pub xp_earned: i64,
    pub coins_earned: i64,
    /// A flawless run refunds the entry ticket.
    pub ticket_refunded: bool,
    pub streak: i32,
    pub outcome: ReconcileOutcome,
}

/// Completes a timed challenge. Entry costs one ticket, spent in the same
/// transaction as the results so an interrupted run never burns one.
pub async fn complete_challenge(
    pool: &DbPool,
    user_id: &str,
    answers: &[AnswerRecord],
) -> Result<ChallengeReport, ActivityError> {
    let profile = get_or_create_profile(pool, user_id).await?;

    let now = Utc::now();
    let streak = update_streak(
        profile.current_streak,
        profile.longest_streak,
        profile.last_active_date,
        now,
    );

    let xp_gain: i64 = answers
        .iter()
        .map(|answer| {
            compute_xp(
                CHALLENGE_BASE_XP,
                answer.correct,
                streak.current,
                answer.time_taken_secs,
                1.0,
                &CHALLENGE_TUNING,
            )
        })
        .sum();

    let correct = answers.iter().filter(|a| a.correct).count() as i64;
    let perfect = !answers.is_empty() && correct == answers.len() as i64;
    let coins = correct * CHALLENGE_COINS_PER_CORRECT;

    let mut tx = pool.begin().await?;
    if !spend_ticket(&mut tx, user_id).await? {
        tx.rollback().await.ok();
        return Err(ActivityError::NoTickets);
    }
    record_challenge_outcome(&mut tx, user_id, xp_gain).await?;
    if coins > 0 {
        add_coins(&mut tx, user_id, coins).await?;
    }
    if perfect {
        add_tickets(&mut tx, user_id, CHALLENGE_PERFECT_TICKET_BONUS).await?;
    }
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
            tracing::error!(user_id, error = %err, "post-challenge reconciliation failed");
            ReconcileOutcome::default()
        }
    };

    Ok(ChallengeReport {
        xp_earned: xp_gain,
        coins_earned: coins,
        ticket_refunded: perfect,
        streak: streak.current,
        outcome: reconciled,
    })
}
