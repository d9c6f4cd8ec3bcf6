use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::PayoutError;
use crate::state::{ScheduleKind, ScheduleState};

/// One-shot principal deposit for a vesting schedule. Claims are rejected
/// until this has run.
pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    let st = &ctx.accounts.schedule;
    require!(st.kind == ScheduleKind::Vesting, PayoutError::InvalidConfig);
    require!(!st.initialized, PayoutError::AlreadyInitialized);
    require!(!st.is_closed(), PayoutError::AlreadyClosed);

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

    let amount = st.total_supply;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    let st = &mut ctx.accounts.schedule;
    st.initialized = true;

    ctx.accounts.vault.reload()?;
    emit!(PrincipalDeposited {
        schedule: st.key(),
        admin: st.admin,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        mut,
        has_one = admin @ PayoutError::UnauthorizedAdmin,
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

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PrincipalDeposited {
    pub schedule: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
