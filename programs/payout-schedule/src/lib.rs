//! Time-based payout schedules on Solana.
//!
//! One parameterized accrual/claim engine covers two payout variants:
//!
//! - **Salary**: a fixed wage accrues per elapsed period from creation,
//!   uncapped, no initial unlock; the employee claims the whole accrued
//!   balance in one call. The admin funds the vault with `deposit_tokens`.
//! - **Vesting**: a capped release schedule with an initial unlock at
//!   `start_ts`, a fixed number of periodic releases, and a rolling
//!   per-period claim allowance. The principal is escrowed up front via
//!   `initialize`; the beneficiary claims any portion of the allowed balance.
//!
//! Accrual is evaluated on demand as a pure function of the caller-observed
//! clock; nothing runs in the background. `close` freezes accrual one-way and
//! sweeps never-to-release funds back to the admin, while everything already
//! accrued stays claimable by the beneficiary.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::ScheduleParams;

declare_id!("5PzLPCnvX27oscXokubyo4DLS5sop546R7A8R5ycG6XK");

#[program]
pub mod payout_schedule {
    use super::*;

    /// Creates a schedule and its token vault. Admin-only by construction
    /// (the creator becomes the admin).
    pub fn create_schedule(ctx: Context<CreateSchedule>, params: ScheduleParams) -> Result<()> {
        handle_create_schedule(ctx, params)
    }

    /// Escrows the full vesting principal into the vault. Vesting only,
    /// admin-only, one-shot; claims are rejected until this has run.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handle_initialize(ctx)
    }

    /// Tops up a salary vault. Salary only, admin-only.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        handle_deposit_tokens(ctx, amount)
    }

    /// Withdraws accrued funds to the beneficiary. Salary claims take no
    /// amount and pay out everything claimable; vesting claims require an
    /// amount within the current claimable balance.
    pub fn claim(ctx: Context<Claim>, amount: Option<u64>) -> Result<()> {
        handle_claim(ctx, amount)
    }

    /// Freezes accrual as of now (irreversible) and sweeps funds that will
    /// never release back to the admin. Admin-only.
    pub fn close(ctx: Context<Close>) -> Result<()> {
        handle_close(ctx)
    }

    /// Emits the current accrual state as an event (read-only query).
    pub fn emit_schedule_quote(ctx: Context<EmitScheduleQuote>) -> Result<()> {
        handle_emit_schedule_quote(ctx)
    }

    /// Stores a beneficiary progress report keyed by timestamp.
    pub fn submit_report(
        ctx: Context<SubmitReport>,
        submitted_at: i64,
        content: String,
    ) -> Result<()> {
        handle_submit_report(ctx, submitted_at, content)
    }
}
