use anchor_lang::prelude::*;

use crate::state::{OddsPolicy, Side, SidePolicy};

#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub odds_policy: OddsPolicy,
    pub side_policy: SidePolicy,
}

#[event]
pub struct AnteCreated {
    pub ante: Pubkey,
    pub key: String,
    pub author: Pubkey,
    pub stake_mint: Pubkey,
    pub staking_deadline: i64,
    pub unstaking_deadline: i64,
}

#[event]
pub struct StakeRecorded {
    pub staker: Pubkey,
    pub key: String,
    pub side: Side,
    pub amount: u64,
    pub odds: u64,
}

#[event]
pub struct AnteSettled {
    pub key: String,
    pub outcome: Side,
}

#[event]
pub struct Withdrawn {
    pub staker: Pubkey,
    pub key: String,
    pub payout: u64,
}
