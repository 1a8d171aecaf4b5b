#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use ante_ledger::custody::Custody;
use ante_ledger::errors::AnteError;
use ante_ledger::state::*;

pub const START: i64 = 1_700_000_000;
pub const HOUR: i64 = 3_600;
pub const DAY: i64 = 86_400;
pub const SOL: u64 = 1_000_000_000;

/// In-memory vault that refuses to pay out more than it holds.
#[derive(Default)]
pub struct MemoryVault {
    pub balance: u64,
    pub deposited: u64,
    pub wrapped: u64,
    pub paid_out: u64,
    pub refuse_pushes: bool,
}

impl Custody for MemoryVault {
    fn wrap_native(&mut self, amount: u64) -> Result<()> {
        self.wrapped += amount;
        self.pull(amount)
    }

    fn pull(&mut self, amount: u64) -> Result<()> {
        self.balance += amount;
        self.deposited += amount;
        Ok(())
    }

    fn push(&mut self, amount: u64) -> Result<()> {
        require!(!self.refuse_pushes, AnteError::TransferFailed);
        require!(self.balance >= amount, AnteError::TransferFailed);
        self.balance -= amount;
        self.paid_out += amount;
        Ok(())
    }
}

/// One ante with its stakes and vault, driven with explicit clock and
/// caller values.
pub struct Market {
    pub ante: Ante,
    pub author: Pubkey,
    pub stakes: HashMap<Pubkey, Stake>,
    pub vault: MemoryVault,
}

impl Market {
    /// 1-day staking window followed by a 6-day unstaking window.
    pub fn open(odds_policy: OddsPolicy, side_policy: SidePolicy) -> Self {
        let author = Pubkey::new_unique();
        let mut ante = Ante::default();
        ante.open(
            "will-it-rain",
            AnteTerms {
                stake_mint: Pubkey::new_unique(),
                staking_deadline: START + DAY,
                unstaking_deadline: START + 7 * DAY,
                odds_policy,
                side_policy,
            },
            author,
            START,
        )
        .expect("open ante");

        Self {
            ante,
            author,
            stakes: HashMap::new(),
            vault: MemoryVault::default(),
        }
    }

    pub fn literal() -> Self {
        Self::open(OddsPolicy::Latest, SidePolicy::Overwrite)
    }

    pub fn deposit(&mut self, staker: Pubkey, amount: u64, side: Side, at: i64) -> Result<u64> {
        let request = DepositRequest {
            amount,
            side,
            mint: self.ante.stake_mint,
            native_value: 0,
        };
        let stake = self.stakes.entry(staker).or_default();
        self.ante.deposit(stake, &request, staker, at, &mut self.vault)
    }

    pub fn settle(&mut self, outcome: Side) -> Result<()> {
        self.ante.settle(outcome, self.author)
    }

    pub fn withdraw(&mut self, staker: Pubkey, at: i64) -> Result<u64> {
        let stake = self.stakes.entry(staker).or_default();
        self.ante.withdraw(stake, staker, at, &mut self.vault)
    }

    pub fn stake(&self, staker: &Pubkey) -> &Stake {
        &self.stakes[staker]
    }

    /// Sum of stake amounts currently recorded on `side`.
    pub fn staked_on(&self, side: Side) -> u64 {
        self.stakes
            .values()
            .filter(|s| s.side == side)
            .map(|s| s.amount)
            .sum()
    }
}

pub fn ante_err(err: AnteError) -> Error {
    Error::from(err)
}
