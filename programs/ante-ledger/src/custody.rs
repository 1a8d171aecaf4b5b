//! Value custody.
//!
//! The ledger never moves value itself: deposits and payouts go through a
//! [`Custody`] implementation bound to one ante's vault and one
//! counterparty. On-chain that is [`VaultCustody`], backed by SPL Token
//! CPIs; tests substitute an in-memory recorder.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Mint, SyncNative, Token, TokenAccount, TransferChecked};

use crate::errors::AnteError;

pub trait Custody {
    /// Move `amount` native lamports from the counterparty into the vault
    /// and credit them as wrapped tokens.
    fn wrap_native(&mut self, amount: u64) -> Result<()>;

    /// Move `amount` tokens from the counterparty into the vault.
    fn pull(&mut self, amount: u64) -> Result<()>;

    /// Move `amount` tokens from the vault to the counterparty.
    fn push(&mut self, amount: u64) -> Result<()>;
}

/// SPL Token custody for a single ante vault.
pub struct VaultCustody<'a, 'info> {
    pub token_program: &'a Program<'info, Token>,
    pub system_program: &'a Program<'info, System>,
    pub mint: &'a Account<'info, Mint>,
    pub vault: &'a Account<'info, TokenAccount>,

    /// Ante PDA owning the vault; signs payouts.
    pub vault_authority: AccountInfo<'info>,
    pub vault_signer: &'a [&'a [&'a [u8]]],

    /// Staker wallet (signer for deposits).
    pub party: AccountInfo<'info>,

    /// Staker token account for the stake mint.
    pub party_tokens: Option<&'a Account<'info, TokenAccount>>,
}

impl<'a, 'info> VaultCustody<'a, 'info> {
    fn party_tokens(&self) -> Result<&'a Account<'info, TokenAccount>> {
        self.party_tokens
            .ok_or_else(|| error!(AnteError::TransferFailed))
    }
}

impl Custody for VaultCustody<'_, '_> {
    fn wrap_native(&mut self, amount: u64) -> Result<()> {
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.party.clone(),
                    to: self.vault.to_account_info(),
                },
            ),
            amount,
        )
        .map_err(|_| error!(AnteError::TransferFailed))?;

        token::sync_native(CpiContext::new(
            self.token_program.to_account_info(),
            SyncNative {
                account: self.vault.to_account_info(),
            },
        ))
        .map_err(|_| error!(AnteError::TransferFailed))
    }

    fn pull(&mut self, amount: u64) -> Result<()> {
        let from = self.party_tokens()?;
        require!(from.amount >= amount, AnteError::TransferFailed);

        token::transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: from.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.party.clone(),
                },
            ),
            amount,
            self.mint.decimals,
        )
        .map_err(|_| error!(AnteError::TransferFailed))
    }

    fn push(&mut self, amount: u64) -> Result<()> {
        let to = self.party_tokens()?;
        // Payouts are not capped by the pool; an underfunded vault fails here.
        require!(self.vault.amount >= amount, AnteError::TransferFailed);

        token::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.vault.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: to.to_account_info(),
                    authority: self.vault_authority.clone(),
                },
                self.vault_signer,
            ),
            amount,
            self.mint.decimals,
        )
        .map_err(|_| error!(AnteError::TransferFailed))
    }
}
