//! Program-wide constants.

/// Seed prefix for the schedule state PDA.
pub const SCHEDULE_SEED: &[u8] = b"schedule";

/// Seed prefix for the token vault PDA.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix for progress report PDAs.
pub const REPORT_SEED: &[u8] = b"report";

/// Max UTF-8 bytes stored per progress report.
pub const MAX_REPORT_LEN: usize = 512;
