use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ANTE_SEED, STAKE_SEED, VAULT_SEED};
use crate::custody::VaultCustody;
use crate::errors::AnteError;
use crate::events::Withdrawn;
use crate::state::*;

#[derive(Accounts)]
#[instruction(key: String)]
pub struct Withdraw<'info> {
    /// The staker withdrawing.
    #[account(mut)]
    pub staker: Signer<'info>,

    /// The settled ante.
    #[account(
        seeds = [ANTE_SEED, key.as_bytes()],
        bump = ante.bump,
    )]
    pub ante: Account<'info, Ante>,

    /// Staker's stake PDA.
    #[account(
        mut,
        seeds = [STAKE_SEED, ante.key().as_ref(), staker.key().as_ref()],
        bump = stake.bump,
    )]
    pub stake: Account<'info, Stake>,

    /// The ante's stake mint.
    #[account(address = ante.stake_mint @ AnteError::TokenMismatch)]
    pub mint: Account<'info, Mint>,

    /// Ante vault, source of payouts.
    #[account(
        mut,
        seeds = [VAULT_SEED, ante.key().as_ref()],
        bump = ante.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Staker's token account receiving the payout.
    #[account(mut)]
    pub staker_tokens: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, key: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let staker = ctx.accounts.staker.key();
    let staked = ctx.accounts.stake.amount;

    // Ante PDA is the vault authority
    let bump = [ctx.accounts.ante.bump];
    let seeds: &[&[u8]] = &[ANTE_SEED, key.as_bytes(), &bump];
    let signer = &[seeds];

    let mut custody = VaultCustody {
        token_program: &ctx.accounts.token_program,
        system_program: &ctx.accounts.system_program,
        mint: &ctx.accounts.mint,
        vault: &ctx.accounts.vault,
        vault_authority: ctx.accounts.ante.to_account_info(),
        vault_signer: signer,
        party: ctx.accounts.staker.to_account_info(),
        party_tokens: Some(&ctx.accounts.staker_tokens),
    };

    let payout = ctx
        .accounts
        .ante
        .withdraw(&mut ctx.accounts.stake, staker, now, &mut custody)?;

    emit!(Withdrawn {
        staker,
        key: key.clone(),
        payout,
    });

    msg!(
        "Withdrawn: staker={} stake={} payout={} from '{}'",
        staker,
        staked,
        payout,
        key,
    );

    Ok(())
}
