//! Seeds and fixed parameters shared by the program.

pub const CONFIG_SEED: &[u8] = b"config";
pub const ANTE_SEED: &[u8] = b"ante";
pub const STAKE_SEED: &[u8] = b"stake";
pub const VAULT_SEED: &[u8] = b"vault";

/// Keys are used verbatim as a PDA seed, which caps them at 32 bytes.
pub const MAX_KEY_LEN: usize = 32;

/// Odds are integers scaled by 100 (100 = 1.0×).
pub const ODDS_SCALE: u64 = 100;

/// Time component at the moment staking opens.
pub const TIME_ODDS_MAX: u64 = 150;

/// Time component from the staking deadline onward.
pub const TIME_ODDS_MIN: u64 = 100;

/// Neutral imbalance component.
pub const IMBALANCE_NEUTRAL: u64 = 100;
