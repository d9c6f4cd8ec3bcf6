//! Pure accrual arithmetic shared by the salary and vesting variants.
//!
//! Period counting is floor division on elapsed seconds: a partial period
//! releases nothing. All amount math runs through u128 intermediates with
//! checked ops; overflow surfaces as `MathOverflow` and never wraps.
//! Evaluation time is always caller-supplied, so everything here is testable
//! without a clock.

use crate::error::PayoutError;

/// Immutable accrual parameters, extracted from a schedule account.
///
/// A zero in `total_supply`, `release_count`, or `claim_amount` means the
/// corresponding bound is absent (the salary configuration).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccrualSchedule {
    /// Timestamp accrual is measured from (inclusive).
    pub start_ts: i64,
    /// Length of one accrual period in seconds, > 0.
    pub interval_secs: i64,
    /// Amount released per full elapsed period.
    pub period_amount: u64,
    /// Amount unlocked at `start_ts` before periodic accrual.
    pub initial_amount: u64,
    /// Lifetime release cap; 0 = uncapped.
    pub total_supply: u64,
    /// Number of periodic releases; once elapsed periods reach this, the
    /// full `total_supply` is released (absorbs division remainder).
    /// 0 = open-ended.
    pub release_count: u64,
    /// Rolling per-period claim allowance; 0 = unbounded.
    pub claim_amount: u64,
}

/// Evaluation time after applying the termination freeze.
/// `closed_at == 0` means the schedule is still open.
pub fn effective_time(now_ts: i64, closed_at: i64) -> i64 {
    if closed_at > 0 {
        now_ts.min(closed_at)
    } else {
        now_ts
    }
}

/// Number of full periods elapsed at `at_ts`, or `None` before `start_ts`.
pub fn elapsed_periods(schedule: &AccrualSchedule, at_ts: i64) -> Option<u64> {
    if at_ts < schedule.start_ts {
        return None;
    }
    // interval_secs > 0 is enforced at schedule creation.
    Some(((at_ts - schedule.start_ts) / schedule.interval_secs) as u64)
}

/// Total amount released up to `now_ts`, honoring the termination freeze,
/// the lifetime cap, and the exact-remainder release at `release_count`.
pub fn total_released(
    schedule: &AccrualSchedule,
    closed_at: i64,
    now_ts: i64,
) -> Result<u64, PayoutError> {
    let eff = effective_time(now_ts, closed_at);
    let Some(elapsed) = elapsed_periods(schedule, eff) else {
        return Ok(0);
    };

    // Final release pays the full supply so integer-division remainder from
    // per-period amounts never strands principal.
    if schedule.release_count > 0 && elapsed >= schedule.release_count {
        return Ok(schedule.total_supply);
    }

    let periodic = (elapsed as u128)
        .checked_mul(schedule.period_amount as u128)
        .ok_or(PayoutError::MathOverflow)?;
    let raw = (schedule.initial_amount as u128)
        .checked_add(periodic)
        .ok_or(PayoutError::MathOverflow)?;

    let released = if schedule.total_supply > 0 {
        raw.min(schedule.total_supply as u128)
    } else {
        raw
    };
    u64::try_from(released).map_err(|_| PayoutError::MathOverflow)
}

/// Upper bound on cumulative claims imposed by the rolling allowance:
/// `claim_amount` becomes claimable per period, one unit at `start_ts`.
/// Unbounded when no allowance is configured or once the schedule is closed.
pub fn claim_allowance(schedule: &AccrualSchedule, closed_at: i64, now_ts: i64) -> u64 {
    if schedule.claim_amount == 0 || closed_at > 0 {
        return u64::MAX;
    }
    match elapsed_periods(schedule, now_ts) {
        None => 0,
        Some(elapsed) => {
            // Upper bound only; saturation cannot over-release because the
            // result is min-ed with total_released.
            let allowance = (schedule.claim_amount as u128).saturating_mul(elapsed as u128 + 1);
            u64::try_from(allowance).unwrap_or(u64::MAX)
        }
    }
}

/// Amount claimable right now: released-to-date gated by the rolling
/// allowance, minus what has already been claimed.
pub fn claimable(
    schedule: &AccrualSchedule,
    closed_at: i64,
    total_claimed: u64,
    now_ts: i64,
) -> Result<u64, PayoutError> {
    let released = total_released(schedule, closed_at, now_ts)?;
    let gated = released.min(claim_allowance(schedule, closed_at, now_ts));
    // total_claimed never exceeds the gated amount; a shortfall here means
    // corrupted state, not a rounding artifact.
    gated
        .checked_sub(total_claimed)
        .ok_or(PayoutError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const WEEK: i64 = 7 * DAY;

    /// Salary configuration: wage 100 per 7-day period, no bounds.
    fn salary(start: i64) -> AccrualSchedule {
        AccrualSchedule {
            start_ts: start,
            interval_secs: WEEK,
            period_amount: 100,
            initial_amount: 0,
            total_supply: 0,
            release_count: 0,
            claim_amount: 0,
        }
    }

    /// Vesting configuration from the reference scenario: 100000 supply,
    /// 50000 initial unlock, 52 weekly releases, 2-period claim allowance.
    fn vesting(start: i64) -> AccrualSchedule {
        let release = 50_000u64 / 52;
        AccrualSchedule {
            start_ts: start,
            interval_secs: WEEK,
            period_amount: release,
            initial_amount: 50_000,
            total_supply: 100_000,
            release_count: 52,
            claim_amount: release * 2,
        }
    }

    #[test]
    fn salary_releases_per_full_period() {
        let s = salary(1_000);
        assert_eq!(total_released(&s, 0, 999).unwrap(), 0);
        assert_eq!(total_released(&s, 0, 1_000).unwrap(), 0);
        assert_eq!(total_released(&s, 0, 1_000 + WEEK - 1).unwrap(), 0);
        assert_eq!(total_released(&s, 0, 1_000 + WEEK).unwrap(), 100);
        assert_eq!(total_released(&s, 0, 1_000 + 10 * WEEK).unwrap(), 1_000);
    }

    #[test]
    fn salary_claim_then_reaccrue() {
        let s = salary(0);
        // One full period accrued, claim it all.
        assert_eq!(claimable(&s, 0, 0, WEEK).unwrap(), 100);
        // After claiming 100, nine more periods leave 900 claimable.
        assert_eq!(claimable(&s, 0, 100, 10 * WEEK).unwrap(), 900);
        // Fully claimed again: nothing left at the same instant.
        assert_eq!(claimable(&s, 0, 1_000, 10 * WEEK).unwrap(), 0);
    }

    #[test]
    fn salary_unbounded_allowance() {
        let s = salary(0);
        assert_eq!(claim_allowance(&s, 0, 10 * WEEK), u64::MAX);
    }

    #[test]
    fn vesting_zero_before_start() {
        let start = 1_000_000;
        let v = vesting(start);
        assert_eq!(total_released(&v, 0, start - 1).unwrap(), 0);
        assert_eq!(claimable(&v, 0, 0, start - 1).unwrap(), 0);
    }

    #[test]
    fn vesting_initial_unlock_gated_by_allowance() {
        let start = 1_000_000;
        let v = vesting(start);
        // Initial unlock is fully released at start...
        assert_eq!(total_released(&v, 0, start).unwrap(), 50_000);
        // ...but only one allowance unit (2 x period amount) is claimable.
        assert_eq!(claimable(&v, 0, 0, start).unwrap(), v.claim_amount);
    }

    #[test]
    fn vesting_allowance_accrues_per_period() {
        let start = 0;
        let v = vesting(start);
        let at10 = 10 * WEEK;
        assert_eq!(
            total_released(&v, 0, at10).unwrap(),
            50_000 + 10 * v.period_amount
        );
        // 11 allowance units (one at start plus one per elapsed period).
        assert_eq!(claimable(&v, 0, 0, at10).unwrap(), 11 * v.claim_amount);
        // Claiming one period amount leaves the rest of the allowance.
        assert_eq!(
            claimable(&v, 0, v.period_amount, at10).unwrap(),
            11 * v.claim_amount - v.period_amount
        );
    }

    #[test]
    fn vesting_full_supply_at_final_release() {
        let v = vesting(0);
        // 52 * floor(50000/52) < 50000; the final release absorbs the
        // remainder and pays out the exact total supply.
        assert!(v.initial_amount + v.release_count * v.period_amount < v.total_supply);
        assert_eq!(total_released(&v, 0, 52 * WEEK).unwrap(), 100_000);
        assert_eq!(total_released(&v, 0, 500 * WEEK).unwrap(), 100_000);
    }

    #[test]
    fn released_monotone_while_open() {
        let v = vesting(0);
        let mut prev = 0;
        for w in 0..60 {
            let r = total_released(&v, 0, w * WEEK + DAY).unwrap();
            assert!(r >= prev);
            assert!(r <= v.total_supply);
            prev = r;
        }
    }

    #[test]
    fn close_freezes_release() {
        let v = vesting(0);
        let closed_at = 10 * WEEK;
        let frozen = total_released(&v, 0, closed_at).unwrap();
        assert_eq!(total_released(&v, closed_at, 12 * WEEK).unwrap(), frozen);
        assert_eq!(total_released(&v, closed_at, 500 * WEEK).unwrap(), frozen);
        // Evaluation before the close point is unaffected.
        assert_eq!(
            total_released(&v, closed_at, 3 * WEEK).unwrap(),
            total_released(&v, 0, 3 * WEEK).unwrap()
        );
    }

    #[test]
    fn close_lifts_claim_allowance() {
        let v = vesting(0);
        let closed_at = 10 * WEEK;
        let frozen = total_released(&v, 0, closed_at).unwrap();
        // Open: claimable is allowance-gated.
        assert_eq!(claimable(&v, 0, 0, closed_at).unwrap(), 11 * v.claim_amount);
        // Closed: the whole frozen release is claimable.
        assert_eq!(claimable(&v, closed_at, 0, 12 * WEEK).unwrap(), frozen);
    }

    #[test]
    fn swept_principal_is_supply_minus_released() {
        let v = vesting(0);
        let closed_at = 10 * WEEK;
        let released = total_released(&v, 0, closed_at).unwrap();
        let swept = v.total_supply - released;
        assert_eq!(swept, 100_000 - (50_000 + 10 * v.period_amount));
    }

    #[test]
    fn salary_close_freezes_release() {
        let s = salary(0);
        let closed_at = 10 * WEEK;
        assert_eq!(total_released(&s, closed_at, 11 * WEEK).unwrap(), 1_000);
        assert_eq!(claimable(&s, closed_at, 0, 11 * WEEK).unwrap(), 1_000);
    }

    #[test]
    fn overflow_is_fatal_not_wrapped() {
        let s = AccrualSchedule {
            start_ts: 0,
            interval_secs: 1,
            period_amount: u64::MAX,
            initial_amount: 0,
            total_supply: 0,
            release_count: 0,
            claim_amount: 0,
        };
        // Two elapsed one-second periods of u64::MAX exceed u64.
        assert!(matches!(
            total_released(&s, 0, 2),
            Err(PayoutError::MathOverflow)
        ));
        // Under a cap the same parameters stay in range.
        let capped = AccrualSchedule {
            total_supply: 1_000,
            ..s
        };
        assert_eq!(total_released(&capped, 0, 2).unwrap(), 1_000);
    }

    #[test]
    fn allowance_saturates_as_upper_bound() {
        let s = AccrualSchedule {
            start_ts: 0,
            interval_secs: 1,
            period_amount: 1,
            initial_amount: 0,
            total_supply: 10,
            release_count: 0,
            claim_amount: u64::MAX,
        };
        assert_eq!(claim_allowance(&s, 0, 5), u64::MAX);
        // The saturated bound never inflates claimable past released.
        assert_eq!(claimable(&s, 0, 0, 5).unwrap(), 5);
    }
}
