use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};
use crate::error::PayoutError;
use crate::state::ScheduleState;

/// Withdraws accrued funds to the beneficiary.
///
/// Salary schedules take no amount and always claim the full accrued
/// balance; vesting schedules require an explicit amount within the current
/// claimable balance (which is already gated by the rolling allowance).
pub fn handle_claim(ctx: Context<Claim>, amount: Option<u64>) -> Result<()> {
    // Capture AccountInfos before taking mutable borrows.
    let schedule_ai = ctx.accounts.schedule.to_account_info();

    let st = &ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        PayoutError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        st.beneficiary,
        PayoutError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let claimed = st.resolve_claim(amount, now)?;

    require!(
        ctx.accounts.vault.amount >= claimed,
        PayoutError::InsufficientVaultBalance
    );

    let beneficiary_key = st.beneficiary;
    let mint_key = st.mint;
    let seed_bytes = st.seed.to_le_bytes();
    let bump_bytes = [st.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[
        SCHEDULE_SEED,
        beneficiary_key.as_ref(),
        mint_key.as_ref(),
        &seed_bytes,
        &bump_bytes,
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        claimed,
    )?;

    let st = &mut ctx.accounts.schedule;
    st.record_claim(claimed, now)?;

    emit!(Claimed {
        schedule: st.key(),
        beneficiary: st.beneficiary,
        amount: claimed,
        total_claimed: st.total_claimed,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        has_one = beneficiary @ PayoutError::UnauthorizedBeneficiary,
        seeds = [
            SCHEDULE_SEED,
            schedule.beneficiary.as_ref(),
            schedule.mint.as_ref(),
            &schedule.seed.to_le_bytes(),
        ],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, ScheduleState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, schedule.key().as_ref()],
        bump,
        constraint = vault.mint == schedule.mint @ PayoutError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub timestamp: i64,
}
