use anchor_lang::prelude::*;

use crate::constants::{MAX_REPORT_LEN, REPORT_SEED};
use crate::error::PayoutError;
use crate::state::{ReportState, ScheduleState};

/// Stores a beneficiary progress report keyed by timestamp. The event carries
/// a blake3 digest so log consumers can reference content compactly.
pub fn handle_submit_report(
    ctx: Context<SubmitReport>,
    submitted_at: i64,
    content: String,
) -> Result<()> {
    require!(submitted_at > 0, PayoutError::InvalidTimestamp);
    require!(content.len() <= MAX_REPORT_LEN, PayoutError::ReportTooLong);

    let content_hash: [u8; 32] = blake3::hash(content.as_bytes()).into();

    let report = &mut ctx.accounts.report;
    report.schedule = ctx.accounts.schedule.key();
    report.author = ctx.accounts.beneficiary.key();
    report.submitted_at = submitted_at;
    report.content = content;

    emit!(ReportSubmitted {
        schedule: report.schedule,
        author: report.author,
        submitted_at,
        content_hash,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(submitted_at: i64)]
pub struct SubmitReport<'info> {
    #[account(has_one = beneficiary @ PayoutError::UnauthorizedBeneficiary)]
    pub schedule: Account<'info, ScheduleState>,

    #[account(
        init,
        payer = beneficiary,
        space = 8 + ReportState::SIZE,
        seeds = [
            REPORT_SEED,
            schedule.key().as_ref(),
            &submitted_at.to_le_bytes(),
        ],
        bump
    )]
    pub report: Account<'info, ReportState>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ReportSubmitted {
    pub schedule: Pubkey,
    pub author: Pubkey,
    pub submitted_at: i64,
    pub content_hash: [u8; 32],
}
