use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};
use crate::error::PayoutError;
use crate::state::{ScheduleKind, ScheduleParams, ScheduleState};

pub fn handle_create_schedule(
    ctx: Context<CreateSchedule>,
    params: ScheduleParams,
) -> Result<()> {
    params.validate()?;
    require!(
        params.beneficiary != ctx.accounts.admin.key(),
        PayoutError::InvalidConfig
    );

    let now = Clock::get()?.unix_timestamp;

    let st = &mut ctx.accounts.schedule;
    st.kind = params.kind;
    st.admin = ctx.accounts.admin.key();
    st.beneficiary = params.beneficiary;
    st.mint = ctx.accounts.mint.key();
    st.seed = params.seed;
    st.bump = ctx.bumps.schedule;
    // Salary accrues from the moment of creation; vesting from the
    // caller-supplied start.
    st.start_ts = match params.kind {
        ScheduleKind::Salary => now,
        ScheduleKind::Vesting => params.start_ts,
    };
    st.interval_secs = params.interval_secs;
    st.period_amount = params.period_amount;
    st.initial_amount = params.initial_amount;
    st.total_supply = params.total_supply;
    st.release_count = params.release_count;
    st.claim_amount = params.claim_amount;
    st.total_claimed = 0;
    st.last_claimed_ts = 0;
    st.closed_at = 0;
    // Salary has no escrowed principal to wait for.
    st.initialized = matches!(params.kind, ScheduleKind::Salary);

    emit!(ScheduleCreated {
        schedule: st.key(),
        kind: st.kind,
        admin: st.admin,
        beneficiary: st.beneficiary,
        mint: st.mint,
        start_ts: st.start_ts,
        interval_secs: st.interval_secs,
        period_amount: st.period_amount,
        total_supply: st.total_supply,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(params: ScheduleParams)]
pub struct CreateSchedule<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + ScheduleState::SIZE,
        seeds = [
            SCHEDULE_SEED,
            params.beneficiary.as_ref(),
            mint.key().as_ref(),
            &params.seed.to_le_bytes(),
        ],
        bump
    )]
    pub schedule: Account<'info, ScheduleState>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = schedule,
        seeds = [VAULT_SEED, schedule.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ScheduleCreated {
    pub schedule: Pubkey,
    pub kind: ScheduleKind,
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
    pub mint: Pubkey,
    pub start_ts: i64,
    pub interval_secs: i64,
    pub period_amount: u64,
    pub total_supply: u64,
}
