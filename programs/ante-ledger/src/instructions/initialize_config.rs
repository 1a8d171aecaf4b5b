use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::ConfigInitialized;
use crate::state::*;

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// Protocol authority pays for the config account.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global config PDA.
    #[account(
        init,
        payer = authority,
        space = GlobalConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeConfig>,
    odds_policy: OddsPolicy,
    side_policy: SidePolicy,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.odds_policy = odds_policy;
    config.side_policy = side_policy;
    config.total_antes = 0;
    config.total_volume = 0;
    config.bump = ctx.bumps.config;

    emit!(ConfigInitialized {
        authority: config.authority,
        odds_policy,
        side_policy,
    });

    msg!(
        "Config initialized: authority={} odds_policy={:?} side_policy={:?}",
        config.authority,
        odds_policy,
        side_policy,
    );

    Ok(())
}
