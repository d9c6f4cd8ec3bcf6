use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::PayoutError;
use crate::state::{ScheduleKind, ScheduleState};

/// Tops up the vault a salary schedule pays claims from. Salary accrual is
/// uncapped on paper; in practice claims are bounded by what the admin has
/// deposited here.
pub fn handle_deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, PayoutError::InvalidAmount);

    let st = &ctx.accounts.schedule;
    require!(st.kind == ScheduleKind::Salary, PayoutError::InvalidConfig);
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

    ctx.accounts.vault.reload()?;
    emit!(TokensDeposited {
        schedule: st.key(),
        admin: st.admin,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(has_one = admin @ PayoutError::UnauthorizedAdmin)]
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
pub struct TokensDeposited {
    pub schedule: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
