use anchor_lang::prelude::*;

use crate::constants::ANTE_SEED;
use crate::state::*;

#[derive(Accounts)]
#[instruction(key: String)]
pub struct Lookup<'info> {
    /// CHECK: May not exist; `load_ante` validates owner and discriminator.
    #[account(
        seeds = [ANTE_SEED, key.as_bytes()],
        bump,
    )]
    pub ante: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<Lookup>, _key: String) -> Result<Ante> {
    load_ante(&ctx.accounts.ante)
}
