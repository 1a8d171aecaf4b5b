//! Odds engine.
//!
//! odds = time × imbalance / 100, every factor scaled ×100 and every
//! division truncating.
//!
//!   time      = 150 − 50 × (now − start) / (deadline − start)
//!               decays linearly from 150 at open to 100 at the deadline
//!   imbalance = 100 + (100 − share)
//!               share = candidate side's post-deposit % of the pool
//!
//! A side holding exactly half the pool, or all of it, is neutral (100).
//! Below half it earns a bonus, above half it is discounted.

use crate::constants::{IMBALANCE_NEUTRAL, ODDS_SCALE, TIME_ODDS_MAX, TIME_ODDS_MIN};
use crate::state::{Ante, Side};

/// Time factor for a stake placed at `now` in the window `[start, deadline]`.
pub fn time_component(start: i64, deadline: i64, now: i64) -> u64 {
    if now >= deadline {
        return TIME_ODDS_MIN;
    }
    if now <= start {
        return TIME_ODDS_MAX;
    }

    let elapsed = (now - start) as u128;
    let window = (deadline - start) as u128;
    let decay = (TIME_ODDS_MAX - TIME_ODDS_MIN) as u128 * elapsed / window;

    TIME_ODDS_MAX - decay as u64
}

/// Imbalance factor for adding `amount` to `side` of a pool currently
/// holding `for_total` / `against_total`.
pub fn imbalance_component(for_total: u64, against_total: u64, amount: u64, side: Side) -> u64 {
    let total = for_total as u128 + against_total as u128 + amount as u128;
    if total == 0 {
        return IMBALANCE_NEUTRAL;
    }

    let side_total = match side {
        Side::For => for_total,
        Side::Against => against_total,
    };
    let share = (side_total as u128 + amount as u128) * 100 / total;

    // share <= 100, so this never goes below neutral
    IMBALANCE_NEUTRAL + (100 - share as u64)
}

/// Odds (×100) a deposit of `amount` on `side` would lock in at `now`,
/// priced against the ante's current totals.
pub fn compute_odds(ante: &Ante, amount: u64, side: Side, now: i64) -> u64 {
    let time = time_component(ante.staking_start_time, ante.staking_deadline, now);
    let imbalance = imbalance_component(ante.for_total, ante.against_total, amount, side);

    time * imbalance / ODDS_SCALE
}
