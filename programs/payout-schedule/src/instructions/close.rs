use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};
use crate::error::PayoutError;
use crate::state::ScheduleState;

/// Irreversibly freezes accrual at the current time and returns whatever the
/// beneficiary can no longer earn to the admin. Already-accrued balance stays
/// claimable: closure stops future accrual, it does not revoke vested funds.
pub fn handle_close(ctx: Context<Close>) -> Result<()> {
    let schedule_ai = ctx.accounts.schedule.to_account_info();

    let st = &ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        st.mint,
        PayoutError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        PayoutError::InvalidTokenAccount
    );

    let beneficiary_key = st.beneficiary;
    let mint_key = st.mint;
    let seed_bytes = st.seed.to_le_bytes();
    let bump_bytes = [st.bump];

    let now = Clock::get()?.unix_timestamp;
    // Everything released but unclaimed must stay in the vault for the
    // beneficiary; the allowance gate is lifted at close.
    let st = &mut ctx.accounts.schedule;
    let outstanding = st.record_close(now)?;
    // For vesting this equals total_supply - released (never-to-vest
    // principal); for salary it returns surplus funding. An underfunded
    // salary vault simply has nothing to sweep.
    let swept = ctx.accounts.vault.amount.saturating_sub(outstanding);

    if swept > 0 {
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
                    to: ctx.accounts.admin_token_account.to_account_info(),
                    authority: schedule_ai,
                },
                signer_seeds,
            ),
            swept,
        )?;
    }

    emit!(Closed {
        schedule: ctx.accounts.schedule.key(),
        admin: ctx.accounts.schedule.admin,
        closed_at: now,
        swept,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Close<'info> {
    #[account(
        mut,
        has_one = admin @ PayoutError::UnauthorizedAdmin,
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
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Closed {
    pub schedule: Pubkey,
    pub admin: Pubkey,
    pub closed_at: i64,
    pub swept: u64,
}
