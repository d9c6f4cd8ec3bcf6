use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::PayoutError;
use crate::utils::accrual::{self, AccrualSchedule};

/// Which payout variant a schedule runs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleKind {
    /// Fixed wage per period, uncapped, accrues from creation; claims always
    /// take the full accrued balance.
    Salary,
    /// Capped release with an initial unlock at `start_ts`, a fixed number of
    /// releases, and a rolling per-period claim allowance; principal is
    /// escrowed up front.
    Vesting,
}

/// Creation parameters, validated before the schedule account is written.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct ScheduleParams {
    pub kind: ScheduleKind,
    pub beneficiary: Pubkey,
    /// Distinguishes multiple schedules per (beneficiary, mint).
    pub seed: u64,
    /// Accrual start (vesting only; salary accrues from creation time).
    pub start_ts: i64,
    pub interval_secs: i64,
    pub period_amount: u64,
    pub initial_amount: u64,
    pub total_supply: u64,
    pub release_count: u64,
    pub claim_amount: u64,
}

impl ScheduleParams {
    /// Configuration rules for each variant. Salary schedules must leave the
    /// vesting-only bounds at zero; vesting schedules must carry a positive
    /// supply and release count.
    pub fn validate(&self) -> Result<(), PayoutError> {
        if self.beneficiary == Pubkey::default() {
            return Err(PayoutError::InvalidPubkey);
        }
        if self.interval_secs <= 0 || self.period_amount == 0 {
            return Err(PayoutError::InvalidConfig);
        }
        match self.kind {
            ScheduleKind::Salary => {
                if self.initial_amount != 0
                    || self.total_supply != 0
                    || self.release_count != 0
                    || self.claim_amount != 0
                {
                    return Err(PayoutError::InvalidConfig);
                }
            }
            ScheduleKind::Vesting => {
                if self.start_ts <= 0 {
                    return Err(PayoutError::InvalidTimestamp);
                }
                if self.total_supply == 0 || self.release_count == 0 {
                    return Err(PayoutError::InvalidConfig);
                }
                if self.initial_amount > self.total_supply {
                    return Err(PayoutError::InvalidConfig);
                }
            }
        }
        Ok(())
    }
}

/// Single payout schedule state PDA.
#[account]
pub struct ScheduleState {
    pub kind: ScheduleKind,
    /// Admin authority: funds the schedule and may close it.
    pub admin: Pubkey,
    /// Beneficiary: the only party that may claim.
    pub beneficiary: Pubkey,
    /// Token mint paid out by this schedule.
    pub mint: Pubkey,
    /// Creation seed (part of the PDA derivation).
    pub seed: u64,
    /// PDA bump, saved to avoid recomputation on claims.
    pub bump: u8,
    /// Accrual origin timestamp.
    pub start_ts: i64,
    /// Accrual period length in seconds.
    pub interval_secs: i64,
    /// Amount released per full elapsed period.
    pub period_amount: u64,
    /// Amount unlocked at `start_ts` (vesting; 0 for salary).
    pub initial_amount: u64,
    /// Lifetime cap and escrowed principal (vesting; 0 = uncapped).
    pub total_supply: u64,
    /// Number of periodic releases (vesting; 0 = open-ended).
    pub release_count: u64,
    /// Rolling per-period claim allowance (vesting; 0 = unbounded).
    pub claim_amount: u64,
    /// Cumulative claimed amount; monotonically non-decreasing.
    pub total_claimed: u64,
    /// Timestamp of the last successful claim (informational).
    pub last_claimed_ts: i64,
    /// Termination timestamp; 0 = open. One-shot, never cleared.
    pub closed_at: i64,
    /// Principal received (vesting); salary schedules start initialized.
    pub initialized: bool,
}

impl ScheduleState {
    pub const SIZE: usize =
        1 +  // kind
        32 + // admin
        32 + // beneficiary
        32 + // mint
        8 +  // seed
        1 +  // bump
        8 +  // start_ts
        8 +  // interval_secs
        8 +  // period_amount
        8 +  // initial_amount
        8 +  // total_supply
        8 +  // release_count
        8 +  // claim_amount
        8 +  // total_claimed
        8 +  // last_claimed_ts
        8 +  // closed_at
        1;   // initialized

    pub fn is_closed(&self) -> bool {
        self.closed_at > 0
    }

    /// The immutable parameters in the form the accrual math consumes.
    pub fn accrual(&self) -> AccrualSchedule {
        AccrualSchedule {
            start_ts: self.start_ts,
            interval_secs: self.interval_secs,
            period_amount: self.period_amount,
            initial_amount: self.initial_amount,
            total_supply: self.total_supply,
            release_count: self.release_count,
            claim_amount: self.claim_amount,
        }
    }

    pub fn total_released(&self, now_ts: i64) -> Result<u64, PayoutError> {
        accrual::total_released(&self.accrual(), self.closed_at, now_ts)
    }

    pub fn current_claimable(&self, now_ts: i64) -> Result<u64, PayoutError> {
        accrual::claimable(&self.accrual(), self.closed_at, self.total_claimed, now_ts)
    }

    /// Principal that has not yet released (vesting; always 0 for salary).
    pub fn total_locked(&self, now_ts: i64) -> Result<u64, PayoutError> {
        if self.total_supply == 0 {
            return Ok(0);
        }
        self.total_supply
            .checked_sub(self.total_released(now_ts)?)
            .ok_or(PayoutError::MathOverflow)
    }

    /// Claim policy: the amount a claim pays out, or the reason it is
    /// rejected. Salary takes no requested amount and pays everything
    /// claimable; vesting requires an amount within the claimable balance.
    pub fn resolve_claim(
        &self,
        requested: Option<u64>,
        now_ts: i64,
    ) -> Result<u64, PayoutError> {
        if !self.initialized {
            return Err(PayoutError::NotInitialized);
        }
        let claimable = self.current_claimable(now_ts)?;
        match self.kind {
            ScheduleKind::Salary => {
                // A supplied amount is a caller bug, not a partial claim.
                if requested.is_some() {
                    return Err(PayoutError::InvalidAmount);
                }
                if claimable == 0 {
                    return Err(PayoutError::NoClaimableAmount);
                }
                Ok(claimable)
            }
            ScheduleKind::Vesting => {
                let amount = requested.ok_or(PayoutError::InvalidAmount)?;
                if amount == 0 || amount > claimable {
                    return Err(PayoutError::InvalidAmount);
                }
                Ok(amount)
            }
        }
    }

    /// Records a successful claim. `total_claimed` only ever grows.
    pub fn record_claim(&mut self, amount: u64, now_ts: i64) -> Result<(), PayoutError> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(PayoutError::MathOverflow)?;
        self.last_claimed_ts = now_ts;
        Ok(())
    }

    /// One-way close: freezes accrual at `now_ts` and returns the released
    /// but unclaimed balance that must stay available to the beneficiary.
    /// An uninitialized vesting schedule has no principal behind it and
    /// cannot be closed.
    pub fn record_close(&mut self, now_ts: i64) -> Result<u64, PayoutError> {
        if self.is_closed() {
            return Err(PayoutError::AlreadyClosed);
        }
        if self.kind == ScheduleKind::Vesting && !self.initialized {
            return Err(PayoutError::NotInitialized);
        }
        let released = self.total_released(now_ts)?;
        let outstanding = released
            .checked_sub(self.total_claimed)
            .ok_or(PayoutError::MathOverflow)?;
        self.closed_at = now_ts;
        Ok(outstanding)
    }
}
