use anchor_lang::prelude::*;

use crate::constants::ODDS_SCALE;
use crate::errors::AnteError;
use crate::state::{OddsPolicy, Side};

/// ─── Stake ────────────────────────────────────────────────────────
///
/// PDA: seeds = [b"stake", ante.key, staker.key]
///
/// One participant's position in one ante. References its ante by
/// address only.
#[account]
#[derive(Default, Debug)]
pub struct Stake {
    /// The ante this stake belongs to.
    pub ante: Pubkey,

    /// The participant who owns this stake.
    pub staker: Pubkey,

    /// Cumulative amount deposited; zeroed on withdrawal.
    pub amount: u64,

    /// Side of the most recent deposit.
    pub side: Side,

    /// Odds (×100) applied to the whole `amount` on a win.
    pub odds: u64,

    /// Unix timestamp of the most recent deposit.
    pub deposited_at: i64,

    /// Bump seed.
    pub bump: u8,

    /// Reserved.
    pub _reserved: [u8; 32],
}

impl Stake {
    pub const SIZE: usize = 8  // discriminator
        + 32                    // ante
        + 32                    // staker
        + 8                     // amount
        + 1                     // side
        + 8                     // odds
        + 8                     // deposited_at
        + 1                     // bump
        + 32;                   // reserved

    pub fn is_bound(&self) -> bool {
        self.staker != Pubkey::default()
    }

    /// The record after adding a deposit of `amount` priced at `odds`.
    ///
    /// `Latest` keeps the new odds for the whole cumulative amount.
    /// `Weighted` blends old and new odds by amount.
    pub fn with_deposit(
        &self,
        amount: u64,
        side: Side,
        odds: u64,
        policy: OddsPolicy,
        now: i64,
    ) -> Result<Stake> {
        let total = self
            .amount
            .checked_add(amount)
            .ok_or(AnteError::Overflow)?;

        let recorded_odds = match policy {
            OddsPolicy::Weighted if self.amount > 0 => {
                let weighted = (self.amount as u128 * self.odds as u128
                    + amount as u128 * odds as u128)
                    / total as u128;
                u64::try_from(weighted).map_err(|_| AnteError::Overflow)?
            }
            _ => odds,
        };

        Ok(Stake {
            amount: total,
            side,
            odds: recorded_odds,
            deposited_at: now,
            ..self.clone()
        })
    }

    pub fn is_winner(&self, outcome: Side) -> bool {
        self.side == outcome
    }

    /// Amount owed on settlement: `amount × odds / 100` for the winning
    /// side, nothing otherwise.
    pub fn payout(&self, outcome: Side) -> Result<u64> {
        if !self.is_winner(outcome) {
            return Ok(0);
        }
        let owed = self.amount as u128 * self.odds as u128 / ODDS_SCALE as u128;
        Ok(u64::try_from(owed).map_err(|_| AnteError::Overflow)?)
    }
}
