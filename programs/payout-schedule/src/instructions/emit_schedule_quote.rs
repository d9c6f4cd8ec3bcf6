use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::VAULT_SEED;
use crate::state::ScheduleState;

/// Read-only query surface for off-chain consumers: evaluates the accrual
/// state at the current time and emits it as an event.
pub fn handle_emit_schedule_quote(ctx: Context<EmitScheduleQuote>) -> Result<()> {
    let st = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;

    let total_released = st.total_released(now)?;
    let current_claimable = st.current_claimable(now)?;
    let total_locked = st.total_locked(now)?;

    emit!(ScheduleQuote {
        schedule: st.key(),
        beneficiary: st.beneficiary,
        timestamp: now,
        total_released,
        total_claimed: st.total_claimed,
        current_claimable,
        total_locked,
        vault_balance: ctx.accounts.vault.amount,
        is_closed: st.is_closed(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitScheduleQuote<'info> {
    pub schedule: Account<'info, ScheduleState>,

    #[account(
        seeds = [VAULT_SEED, schedule.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct ScheduleQuote {
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub timestamp: i64,
    pub total_released: u64,
    pub total_claimed: u64,
    pub current_claimable: u64,
    pub total_locked: u64,
    pub vault_balance: u64,
    pub is_closed: bool,
}
