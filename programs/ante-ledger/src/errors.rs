use anchor_lang::prelude::*;

/// Custom error codes for the Ante ledger program.
///
/// Error codes are offset from 6000 (Anchor convention).
#[error_code]
pub enum AnteError {
    /// An ante is already registered under this key.
    #[msg("Ante already exists for this key")]
    AlreadyExists,

    /// No ante is registered under this key.
    #[msg("Ante not found")]
    NotFound,

    /// The stake token is the zero address.
    #[msg("Invalid stake token")]
    InvalidToken,

    /// Deadlines must satisfy now < staking deadline < unstaking deadline.
    #[msg("Invalid deadline ordering")]
    InvalidDeadline,

    /// The token supplied with a deposit is not the ante's stake token.
    #[msg("Token does not match the ante's stake token")]
    TokenMismatch,

    /// Deposits are only accepted inside the staking window.
    #[msg("Staking window is not open")]
    StakingNotOpen,

    /// Withdrawals are only accepted inside the unstaking window.
    #[msg("Unstaking window is not open")]
    UnstakingNotOpen,

    /// The ante has not been settled yet.
    #[msg("Ante not settled")]
    NotSettled,

    /// The ante has already been settled.
    #[msg("Ante already settled")]
    AlreadySettled,

    /// Signer is not allowed to perform this action.
    #[msg("Unauthorized")]
    Unauthorized,

    /// Caller has nothing staked (or already withdrew).
    #[msg("No stake to withdraw")]
    NoStake,

    /// The custody transfer could not be completed.
    #[msg("Token transfer failed")]
    TransferFailed,

    /// A top-up landed on the opposite side of an existing stake.
    #[msg("Deposit side does not match existing stake")]
    SideMismatch,

    /// Deposit amount must be greater than zero.
    #[msg("Deposit amount must be > 0")]
    ZeroAmount,

    /// Native value accompanying a deposit must equal the deposit amount.
    #[msg("Native value does not match deposit amount")]
    NativeAmountMismatch,

    /// Native value was supplied for an ante that does not take wrapped native.
    #[msg("Native value not accepted for this ante")]
    NativeValueNotAccepted,

    /// Key exceeds the PDA seed limit (32 bytes).
    #[msg("Ante key too long (max 32 bytes)")]
    KeyTooLong,

    /// Overflow in arithmetic operation.
    #[msg("Arithmetic overflow")]
    Overflow,
}
