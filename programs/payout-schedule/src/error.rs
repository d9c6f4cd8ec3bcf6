use anchor_lang::prelude::*;

/// Custom error codes for the payout schedule program.
#[error_code]
pub enum PayoutError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: beneficiary signature required")]
    UnauthorizedBeneficiary,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Schedule is not initialized")]
    NotInitialized,

    #[msg("Schedule is already initialized")]
    AlreadyInitialized,

    #[msg("Schedule is closed")]
    AlreadyClosed,

    #[msg("No claimable amount")]
    NoClaimableAmount,

    #[msg("Invalid claim amount")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Report content too long")]
    ReportTooLong,

    #[msg("Math overflow")]
    MathOverflow,
}
