use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    odds_policy: OddsPolicy,
    side_policy: SidePolicy,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts
        .config
        .set_policies(odds_policy, side_policy, authority)?;

    msg!(
        "Config updated: odds_policy={:?} side_policy={:?}",
        odds_policy,
        side_policy,
    );

    Ok(())
}
