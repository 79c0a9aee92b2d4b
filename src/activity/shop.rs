//! The lives shop.

use crate::constants::{LIVES_REFILL_COST, MAX_LIVES};
use crate::database::init::DbPool;
use crate::database::profile::{get_or_create_profile, refill_lives, spend_coins};
use crate::error::ActivityError;

#[derive(Debug)]
pub struct RefillReport {
    pub lives: i32,
    pub coins_left: i64,
}

/// Buys a full refill of lives. Refused when lives are already full or
/// the balance cannot cover the cost; the guarded spend means a race
/// between two sessions can never drive the balance negative.
pub async fn buy_lives_refill(pool: &DbPool, user_id: &str) -> Result<RefillReport, ActivityError> {
    let profile = get_or_create_profile(pool, user_id).await?;
    if profile.lives >= MAX_LIVES {
        return Err(ActivityError::LivesFull);
    }

    let mut tx = pool.begin().await?;
    if !spend_coins(&mut tx, user_id, LIVES_REFILL_COST).await? {
        tx.rollback().await.ok();
        return Err(ActivityError::InsufficientCoins {
            needed: LIVES_REFILL_COST,
            have: profile.coins,
        });
    }
    refill_lives(&mut tx, user_id, MAX_LIVES).await?;
    tx.commit().await?;

    Ok(RefillReport {
        lives: MAX_LIVES,
        coins_left: profile.coins - LIVES_REFILL_COST,
    })
}
