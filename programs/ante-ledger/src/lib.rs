use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod odds;
pub mod state;

use instructions::*;
use state::{Ante, OddsPolicy, Side, SidePolicy};

declare_id!("Aa2PvG3DCfF9RfMAtHK6duGDkHdsPxh8FEdepXSHM1hX");

#[program]
pub mod ante_ledger {
    use super::*;

    /// Create the global config.
    ///
    /// The signer becomes the protocol authority. The policies chosen here
    /// are copied into every ante created afterwards.
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        odds_policy: OddsPolicy,
        side_policy: SidePolicy,
    ) -> Result<()> {
        instructions::initialize_config::handler(ctx, odds_policy, side_policy)
    }

    /// Change the policies handed to future antes. Authority only.
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        odds_policy: OddsPolicy,
        side_policy: SidePolicy,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, odds_policy, side_policy)
    }

    /// Register a new ante under `key`.
    ///
    /// Staking opens immediately and runs until `staking_deadline`;
    /// withdrawals run from `staking_deadline` to `unstaking_deadline`.
    /// The stake token is the `stake_mint` account. A taken key fails with
    /// `AlreadyExists` whatever mint is passed. Keys longer than 32 bytes
    /// are not valid PDA seeds and fail account validation.
    pub fn create_ante(
        ctx: Context<CreateAnte>,
        key: String,
        staking_deadline: i64,
        unstaking_deadline: i64,
    ) -> Result<()> {
        instructions::create_ante::handler(ctx, key, staking_deadline, unstaking_deadline)
    }

    /// Stake `amount` on `side`.
    ///
    /// Odds are locked in at deposit time from the elapsed share of the
    /// staking window and the side's share of the pool. For wrapped-SOL
    /// antes, `native_value` lamports may be sent instead of tokens and are
    /// wrapped into the vault.
    ///
    /// A key that was never created fails with Anchor's
    /// `AccountNotInitialized` before any ledger check runs.
    pub fn deposit(
        ctx: Context<Deposit>,
        key: String,
        amount: u64,
        side: Side,
        native_value: u64,
    ) -> Result<()> {
        instructions::deposit::handler(ctx, key, amount, side, native_value)
    }

    /// Resolve the ante. Only callable by its author, only once.
    ///
    /// A key that was never created fails with `AccountNotInitialized`.
    pub fn settle(ctx: Context<Settle>, key: String, outcome: Side) -> Result<()> {
        instructions::settle::handler(ctx, key, outcome)
    }

    /// Withdraw after settlement.
    ///
    /// Winners receive `amount × odds / 100` from the vault; losing stakes
    /// are forfeited. Either way the stake is closed out. A key that was
    /// never created fails with `AccountNotInitialized`.
    pub fn withdraw(ctx: Context<Withdraw>, key: String) -> Result<()> {
        instructions::withdraw::handler(ctx, key)
    }

    /// Odds a deposit of `amount` on `side` would receive right now.
    pub fn quote_odds(
        ctx: Context<QuoteOdds>,
        key: String,
        amount: u64,
        side: Side,
    ) -> Result<u64> {
        instructions::quote_odds::handler(ctx, key, amount, side)
    }

    /// Fetch the ante registered under `key`, or `NotFound`.
    pub fn lookup(ctx: Context<Lookup>, key: String) -> Result<Ante> {
        instructions::lookup::handler(ctx, key)
    }
}
