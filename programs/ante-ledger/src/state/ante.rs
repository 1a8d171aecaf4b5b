use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::native_mint;

use crate::constants::MAX_KEY_LEN;
use crate::custody::Custody;
use crate::errors::AnteError;
use crate::odds;
use crate::state::{OddsPolicy, Side, SidePolicy, Stake};

/// ─── Ante Account ─────────────────────────────────────────────────
///
/// PDA: seeds = [b"ante", key.as_bytes()]
///
/// A binary claim open for staking on either side until its staking
/// deadline, settled once by its author.
#[account]
#[derive(Default, Debug)]
pub struct Ante {
    /// Caller-supplied unique key (max 32 bytes, used as a seed).
    pub key: String,

    /// Creator; the only identity allowed to settle.
    pub author: Pubkey,

    /// Mint of the token accepted for stakes.
    pub stake_mint: Pubkey,

    /// Token vault PDA holding every deposit for this ante.
    pub vault: Pubkey,

    // ─── Pool accounting ───
    /// Total staked on the "for" side.
    pub for_total: u64,

    /// Total staked on the "against" side.
    pub against_total: u64,

    // ─── Settlement state ───
    /// Flips to true exactly once.
    pub settled: bool,

    /// Winning side (only valid when `settled`).
    pub outcome: Side,

    // ─── Windows ───
    /// Unix timestamp the ante was created at.
    pub staking_start_time: i64,

    /// Last instant deposits are accepted; first instant withdrawals are.
    pub staking_deadline: i64,

    /// Last instant withdrawals are accepted.
    pub unstaking_deadline: i64,

    /// Policies snapshotted from the global config at creation.
    pub odds_policy: OddsPolicy,
    pub side_policy: SidePolicy,

    /// Ante PDA bump seed.
    pub bump: u8,

    /// Vault bump seed.
    pub vault_bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 32],
}

/// Immutable terms an ante is opened with.
#[derive(Clone, Copy, Debug)]
pub struct AnteTerms {
    pub stake_mint: Pubkey,
    pub staking_deadline: i64,
    pub unstaking_deadline: i64,
    pub odds_policy: OddsPolicy,
    pub side_policy: SidePolicy,
}

/// A single deposit as submitted by a staker.
#[derive(Clone, Copy, Debug)]
pub struct DepositRequest {
    pub amount: u64,
    pub side: Side,
    /// Mint the staker claims to be depositing.
    pub mint: Pubkey,
    /// Native lamports sent along for wrapping (0 when depositing tokens).
    pub native_value: u64,
}

impl Ante {
    /// Account size for Anchor allocation.
    pub const SIZE: usize = 8  // discriminator
        + (4 + MAX_KEY_LEN)     // key
        + 32                    // author
        + 32                    // stake_mint
        + 32                    // vault
        + 8                     // for_total
        + 8                     // against_total
        + 1                     // settled
        + 1                     // outcome
        + 8                     // staking_start_time
        + 8                     // staking_deadline
        + 8                     // unstaking_deadline
        + 1                     // odds_policy
        + 1                     // side_policy
        + 1                     // bump
        + 1                     // vault_bump
        + 32;                   // reserved

    /// Records are zeroed until `open` assigns an author.
    pub fn is_created(&self) -> bool {
        self.author != Pubkey::default()
    }

    pub fn ensure_created(&self) -> Result<()> {
        require!(self.is_created(), AnteError::NotFound);
        Ok(())
    }

    /// Register this record under `key`.
    ///
    /// `now` becomes the staking start time, so the window ordering
    /// `start <= now < staking_deadline < unstaking_deadline` holds from
    /// the first instant the ante exists.
    ///
    /// On-chain a key over `MAX_KEY_LEN` bytes never gets this far: it is
    /// not a valid PDA seed, so account validation rejects the transaction
    /// before `KeyTooLong` can be returned.
    pub fn open(&mut self, key: &str, terms: AnteTerms, author: Pubkey, now: i64) -> Result<()> {
        require!(!self.is_created(), AnteError::AlreadyExists);
        require!(key.len() <= MAX_KEY_LEN, AnteError::KeyTooLong);
        require!(
            terms.stake_mint != Pubkey::default(),
            AnteError::InvalidToken
        );
        require!(terms.staking_deadline > now, AnteError::InvalidDeadline);
        require!(
            terms.unstaking_deadline > terms.staking_deadline,
            AnteError::InvalidDeadline
        );

        self.key = key.to_string();
        self.author = author;
        self.stake_mint = terms.stake_mint;
        self.for_total = 0;
        self.against_total = 0;
        self.settled = false;
        self.outcome = Side::default();
        self.staking_start_time = now;
        self.staking_deadline = terms.staking_deadline;
        self.unstaking_deadline = terms.unstaking_deadline;
        self.odds_policy = terms.odds_policy;
        self.side_policy = terms.side_policy;

        Ok(())
    }

    pub fn side_total(&self, side: Side) -> u64 {
        match side {
            Side::For => self.for_total,
            Side::Against => self.against_total,
        }
    }

    pub fn total_staked(&self) -> u64 {
        self.for_total.saturating_add(self.against_total)
    }

    /// Inclusive on both ends.
    pub fn staking_open(&self, now: i64) -> bool {
        now >= self.staking_start_time && now <= self.staking_deadline
    }

    /// Inclusive on both ends; the staking deadline instant belongs to
    /// both windows.
    pub fn unstaking_open(&self, now: i64) -> bool {
        now >= self.staking_deadline && now <= self.unstaking_deadline
    }

    pub fn takes_native(&self) -> bool {
        self.stake_mint == native_mint::ID
    }

    /// Accept a deposit from `staker` into `stake`.
    ///
    /// Odds are priced against the totals as they stand before this
    /// deposit. Every new value is computed up front so that nothing is
    /// written unless custody accepted the funds. Returns the odds the
    /// deposit was priced at.
    pub fn deposit<C: Custody>(
        &mut self,
        stake: &mut Stake,
        request: &DepositRequest,
        staker: Pubkey,
        now: i64,
        custody: &mut C,
    ) -> Result<u64> {
        self.ensure_created()?;
        require_keys_eq!(request.mint, self.stake_mint, AnteError::TokenMismatch);
        require!(self.staking_open(now), AnteError::StakingNotOpen);
        require!(request.amount > 0, AnteError::ZeroAmount);

        if stake.is_bound() {
            require_keys_eq!(stake.staker, staker, AnteError::Unauthorized);
        }
        if self.side_policy == SidePolicy::Reject && stake.amount > 0 {
            require!(stake.side == request.side, AnteError::SideMismatch);
        }

        let odds = odds::compute_odds(self, request.amount, request.side, now);
        let next_stake = stake.with_deposit(
            request.amount,
            request.side,
            odds,
            self.odds_policy,
            now,
        )?;
        let next_side_total = self
            .side_total(request.side)
            .checked_add(request.amount)
            .ok_or(AnteError::Overflow)?;

        self.take_value(request, custody)?;

        *stake = Stake {
            staker,
            ..next_stake
        };
        match request.side {
            Side::For => self.for_total = next_side_total,
            Side::Against => self.against_total = next_side_total,
        }

        Ok(odds)
    }

    fn take_value<C: Custody>(&self, request: &DepositRequest, custody: &mut C) -> Result<()> {
        if self.takes_native() && request.native_value > 0 {
            require!(
                request.native_value == request.amount,
                AnteError::NativeAmountMismatch
            );
            custody.wrap_native(request.amount)
        } else {
            require!(request.native_value == 0, AnteError::NativeValueNotAccepted);
            custody.pull(request.amount)
        }
    }

    /// Record the outcome. Only the author may settle, and only once.
    ///
    /// No deadline gate: the author may settle while staking is still open.
    pub fn settle(&mut self, outcome: Side, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.author, AnteError::Unauthorized);
        self.ensure_created()?;
        require!(!self.settled, AnteError::AlreadySettled);

        self.settled = true;
        self.outcome = outcome;

        Ok(())
    }

    /// Release `stake` to `staker`.
    ///
    /// Winners are pushed `amount × odds / 100`; losers forfeit. The stake
    /// is zeroed only once custody has paid, so a failed push leaves it
    /// withdrawable. Returns the payout.
    pub fn withdraw<C: Custody>(
        &self,
        stake: &mut Stake,
        staker: Pubkey,
        now: i64,
        custody: &mut C,
    ) -> Result<u64> {
        self.ensure_created()?;
        require!(self.settled, AnteError::NotSettled);
        require!(stake.amount > 0, AnteError::NoStake);
        require_keys_eq!(stake.staker, staker, AnteError::Unauthorized);
        require!(self.unstaking_open(now), AnteError::UnstakingNotOpen);

        let payout = stake.payout(self.outcome)?;
        if payout > 0 {
            custody.push(payout)?;
        }

        stake.amount = 0;

        Ok(payout)
    }
}

/// Read an ante straight from its account, reporting a missing or
/// foreign account as `NotFound`.
pub fn load_ante(info: &AccountInfo) -> Result<Ante> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return err!(AnteError::NotFound);
    }
    let data = info.try_borrow_data()?;
    let mut bytes: &[u8] = &data;
    let ante = Ante::try_deserialize(&mut bytes)?;
    ante.ensure_created()?;
    Ok(ante)
}
