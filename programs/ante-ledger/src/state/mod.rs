use anchor_lang::prelude::*;

pub mod ante;
pub mod config;
pub mod stake;

pub use ante::*;
pub use config::*;
pub use stake::*;

/// ─── Side ─────────────────────────────────────────────────────────
///
/// Which way a stake (or a settled outcome) points.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Side {
    /// The proposition holds.
    #[default]
    For,

    /// The proposition fails.
    Against,
}

impl From<bool> for Side {
    fn from(value: bool) -> Self {
        if value {
            Side::For
        } else {
            Side::Against
        }
    }
}

/// ─── Odds Policy ──────────────────────────────────────────────────
///
/// How a top-up combines with odds already recorded on a stake.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum OddsPolicy {
    /// The latest deposit's odds govern the whole cumulative amount.
    #[default]
    Latest,

    /// Recorded odds are the amount-weighted average across deposits.
    Weighted,
}

/// ─── Side Policy ──────────────────────────────────────────────────
///
/// What happens when a participant tops up on the opposite side.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SidePolicy {
    /// The stake's side is overwritten by the latest deposit.
    #[default]
    Overwrite,

    /// Opposite-side top-ups fail with `SideMismatch`.
    Reject,
}
