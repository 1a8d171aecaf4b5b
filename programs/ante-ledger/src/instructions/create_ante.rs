use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::system_program;
use anchor_spl::token::{self, spl_token, InitializeAccount3, Mint, Token};

use crate::constants::{ANTE_SEED, CONFIG_SEED, VAULT_SEED};
use crate::events::AnteCreated;
use crate::state::*;

#[derive(Accounts)]
#[instruction(key: String)]
pub struct CreateAnte<'info> {
    /// Ante author pays for allocation and is the only settler.
    #[account(mut)]
    pub author: Signer<'info>,

    /// Global config. Supplies the policies the ante is created with.
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    /// Ante PDA. Loaded rather than re-created when the key is taken, so
    /// the handler can report `AlreadyExists`.
    #[account(
        init_if_needed,
        payer = author,
        space = Ante::SIZE,
        seeds = [ANTE_SEED, key.as_bytes()],
        bump,
    )]
    pub ante: Account<'info, Ante>,

    /// Token accepted for stakes.
    pub stake_mint: Account<'info, Mint>,

    /// CHECK: Vault PDA. Only the address is checked here; the token
    /// account is created by the handler once the key is known to be free.
    #[account(
        mut,
        seeds = [VAULT_SEED, ante.key().as_ref()],
        bump,
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateAnte<'info> {
    /// Allocate the vault PDA as a token account for `stake_mint`, owned
    /// by the ante PDA.
    fn open_vault(&self, vault_bump: u8) -> Result<()> {
        let ante_key = self.ante.key();
        let bump = [vault_bump];
        let seeds: &[&[u8]] = &[VAULT_SEED, ante_key.as_ref(), &bump];
        let space = spl_token::state::Account::LEN;

        system_program::create_account(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                system_program::CreateAccount {
                    from: self.author.to_account_info(),
                    to: self.vault.to_account_info(),
                },
                &[seeds],
            ),
            self.rent.minimum_balance(space),
            space as u64,
            &self.token_program.key(),
        )?;

        token::initialize_account3(CpiContext::new(
            self.token_program.to_account_info(),
            InitializeAccount3 {
                account: self.vault.to_account_info(),
                mint: self.stake_mint.to_account_info(),
                authority: self.ante.to_account_info(),
            },
        ))
    }
}

pub fn handler(
    ctx: Context<CreateAnte>,
    key: String,
    staking_deadline: i64,
    unstaking_deadline: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let author = ctx.accounts.author.key();
    let terms = ctx.accounts.config.terms(
        ctx.accounts.stake_mint.key(),
        staking_deadline,
        unstaking_deadline,
    );

    // A taken key fails here, before the vault is touched
    ctx.accounts.ante.open(&key, terms, author, now)?;
    ctx.accounts.open_vault(ctx.bumps.vault)?;

    let ante = &mut ctx.accounts.ante;
    ante.vault = ctx.accounts.vault.key();
    ante.bump = ctx.bumps.ante;
    ante.vault_bump = ctx.bumps.vault;

    ctx.accounts.config.record_ante()?;

    let ante = &ctx.accounts.ante;
    emit!(AnteCreated {
        ante: ante.key(),
        key: key.clone(),
        author,
        stake_mint: ante.stake_mint,
        staking_deadline,
        unstaking_deadline,
    });

    msg!(
        "Ante '{}' created by {} | mint: {} | staking until {} | unstaking until {}",
        key,
        author,
        ante.stake_mint,
        staking_deadline,
        unstaking_deadline,
    );

    Ok(())
}
