use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ANTE_SEED, CONFIG_SEED, STAKE_SEED, VAULT_SEED};
use crate::custody::VaultCustody;
use crate::events::StakeRecorded;
use crate::state::*;

#[derive(Accounts)]
#[instruction(key: String)]
pub struct Deposit<'info> {
    /// The participant staking.
    #[account(mut)]
    pub staker: Signer<'info>,

    /// The ante being staked on.
    #[account(
        mut,
        seeds = [ANTE_SEED, key.as_bytes()],
        bump = ante.bump,
    )]
    pub ante: Account<'info, Ante>,

    /// Stake PDA, created on first deposit, topped up afterwards.
    #[account(
        init_if_needed,
        payer = staker,
        space = Stake::SIZE,
        seeds = [STAKE_SEED, ante.key().as_ref(), staker.key().as_ref()],
        bump,
    )]
    pub stake: Account<'info, Stake>,

    /// Token being deposited; checked against the ante's stake mint.
    pub mint: Account<'info, Mint>,

    /// Ante vault. Receives the deposit.
    #[account(
        mut,
        seeds = [VAULT_SEED, ante.key().as_ref()],
        bump = ante.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Staker's token account. Not needed when depositing native value.
    #[account(mut)]
    pub staker_tokens: Option<Account<'info, TokenAccount>>,

    /// Global config for volume tracking.
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<Deposit>,
    key: String,
    amount: u64,
    side: Side,
    native_value: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let staker = ctx.accounts.staker.key();
    let ante_key = ctx.accounts.ante.key();

    let request = DepositRequest {
        amount,
        side,
        mint: ctx.accounts.mint.key(),
        native_value,
    };

    let mut custody = VaultCustody {
        token_program: &ctx.accounts.token_program,
        system_program: &ctx.accounts.system_program,
        mint: &ctx.accounts.mint,
        vault: &ctx.accounts.vault,
        vault_authority: ctx.accounts.ante.to_account_info(),
        vault_signer: &[],
        party: ctx.accounts.staker.to_account_info(),
        party_tokens: ctx.accounts.staker_tokens.as_ref(),
    };

    let stake = &mut ctx.accounts.stake;
    if !stake.is_bound() {
        // First deposit: bind to the ante
        stake.ante = ante_key;
        stake.bump = ctx.bumps.stake;
    }

    let odds = ctx
        .accounts
        .ante
        .deposit(stake, &request, staker, now, &mut custody)?;

    ctx.accounts.config.record_volume(amount)?;

    emit!(StakeRecorded {
        staker,
        key: key.clone(),
        side,
        amount,
        odds,
    });

    msg!(
        "Stake recorded: {} on {:?} of '{}' at odds {} by {} (for={}, against={})",
        amount,
        side,
        key,
        odds,
        staker,
        ctx.accounts.ante.for_total,
        ctx.accounts.ante.against_total,
    );

    Ok(())
}
