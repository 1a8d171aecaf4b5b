use anchor_lang::prelude::*;

use crate::constants::ANTE_SEED;
use crate::events::AnteSettled;
use crate::state::*;

#[derive(Accounts)]
#[instruction(key: String)]
pub struct Settle<'info> {
    /// Must be the ante's author.
    pub author: Signer<'info>,

    /// The ante to settle.
    #[account(
        mut,
        seeds = [ANTE_SEED, key.as_bytes()],
        bump = ante.bump,
    )]
    pub ante: Account<'info, Ante>,
}

pub fn handler(ctx: Context<Settle>, key: String, outcome: Side) -> Result<()> {
    let caller = ctx.accounts.author.key();
    let ante = &mut ctx.accounts.ante;
    ante.settle(outcome, caller)?;

    emit!(AnteSettled {
        key: key.clone(),
        outcome,
    });

    msg!(
        "Ante '{}' settled: outcome={:?}, for={}, against={}",
        key,
        outcome,
        ante.for_total,
        ante.against_total,
    );

    Ok(())
}
