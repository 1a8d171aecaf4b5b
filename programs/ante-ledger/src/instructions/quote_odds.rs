use anchor_lang::prelude::*;

use crate::constants::ANTE_SEED;
use crate::odds;
use crate::state::*;

#[derive(Accounts)]
#[instruction(key: String)]
pub struct QuoteOdds<'info> {
    #[account(
        seeds = [ANTE_SEED, key.as_bytes()],
        bump = ante.bump,
    )]
    pub ante: Account<'info, Ante>,
}

/// Odds a deposit would lock in right now. Read-only.
pub fn handler(ctx: Context<QuoteOdds>, _key: String, amount: u64, side: Side) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(odds::compute_odds(&ctx.accounts.ante, amount, side, now))
}
