use anchor_lang::prelude::*;

use crate::errors::AnteError;
use crate::state::{AnteTerms, OddsPolicy, SidePolicy};

/// ─── Global Config ────────────────────────────────────────────────
///
/// PDA: seeds = [b"config"]
///
/// Protocol-level settings. Antes copy the policies at creation time.
#[account]
#[derive(Default)]
pub struct GlobalConfig {
    /// Protocol authority (can update config).
    pub authority: Pubkey,

    /// Odds policy handed to newly created antes.
    pub odds_policy: OddsPolicy,

    /// Side policy handed to newly created antes.
    pub side_policy: SidePolicy,

    /// Total antes created.
    pub total_antes: u64,

    /// Total volume staked across all antes.
    pub total_volume: u64,

    /// Bump seed.
    pub bump: u8,

    /// Reserved.
    pub _reserved: [u8; 32],
}

impl GlobalConfig {
    pub const SIZE: usize = 8  // discriminator
        + 32                    // authority
        + 1                     // odds_policy
        + 1                     // side_policy
        + 8                     // total_antes
        + 8                     // total_volume
        + 1                     // bump
        + 32;                   // reserved

    pub fn terms(
        &self,
        stake_mint: Pubkey,
        staking_deadline: i64,
        unstaking_deadline: i64,
    ) -> AnteTerms {
        AnteTerms {
            stake_mint,
            staking_deadline,
            unstaking_deadline,
            odds_policy: self.odds_policy,
            side_policy: self.side_policy,
        }
    }

    pub fn set_policies(
        &mut self,
        odds_policy: OddsPolicy,
        side_policy: SidePolicy,
        caller: Pubkey,
    ) -> Result<()> {
        require_keys_eq!(caller, self.authority, AnteError::Unauthorized);
        self.odds_policy = odds_policy;
        self.side_policy = side_policy;
        Ok(())
    }

    pub fn record_ante(&mut self) -> Result<()> {
        self.total_antes = self
            .total_antes
            .checked_add(1)
            .ok_or(AnteError::Overflow)?;
        Ok(())
    }

    pub fn record_volume(&mut self, amount: u64) -> Result<()> {
        self.total_volume = self
            .total_volume
            .checked_add(amount)
            .ok_or(AnteError::Overflow)?;
        Ok(())
    }
}
