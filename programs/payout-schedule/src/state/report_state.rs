use anchor_lang::prelude::*;

use crate::constants::MAX_REPORT_LEN;

/// Progress report submitted by the beneficiary, keyed by timestamp
/// (PDA `["report", schedule, submitted_at]`).
#[account]
pub struct ReportState {
    pub schedule: Pubkey,
    pub author: Pubkey,
    pub submitted_at: i64,
    pub content: String,
}

impl ReportState {
    /// Discriminator excluded; `content` reserves its full bound.
    pub const SIZE: usize =
        32 + // schedule
        32 + // author
        8 +  // submitted_at
        4 + MAX_REPORT_LEN; // content
}
