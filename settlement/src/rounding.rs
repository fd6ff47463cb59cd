//! Integer money arithmetic.
//!
//! All settlement math runs on `u64` amounts with `u128` intermediates;
//! floating point never touches money. Results that cannot fit a `u64` are
//! clamped rather than wrapped.

pub fn clamp_u64(value: u128) -> u64 {
    value.min(u64::MAX as u128) as u64
}

pub fn clamp_i64(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Floor `amount` to a whole multiple of `unit`.
///
/// A unit of 0 or 1 leaves the amount untouched.
pub fn floor_to_unit(amount: u64, unit: u64) -> u64 {
    if unit <= 1 {
        return amount;
    }
    amount / unit * unit
}

/// `total * percent / 100`, rounded half-up.
///
/// Half-up equals half-away-from-zero here since both inputs are
/// non-negative; this is the pinned rounding rule for percentage shares.
pub fn round_half_up_percent(total: u64, percent: u64) -> u64 {
    let scaled = total as u128 * percent as u128;
    clamp_u64((scaled + 50) / 100)
}

/// `pool * part / whole`, truncating; 0 when `whole` is 0.
pub fn proportional(pool: u64, part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    clamp_u64(pool as u128 * part as u128 / whole as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_to_unit() {
        assert_eq!(floor_to_unit(12_345, 100), 12_300);
        assert_eq!(floor_to_unit(12_300, 100), 12_300);
        assert_eq!(floor_to_unit(99, 100), 0);
        assert_eq!(floor_to_unit(12_345, 1), 12_345);
        assert_eq!(floor_to_unit(12_345, 0), 12_345);
    }

    #[test]
    fn test_round_half_up_percent() {
        assert_eq!(round_half_up_percent(1_000, 50), 500);
        assert_eq!(round_half_up_percent(100, 33), 33);
        // Half rounds up, away from zero.
        assert_eq!(round_half_up_percent(10, 25), 3);
        assert_eq!(round_half_up_percent(10, 15), 2);
        assert_eq!(round_half_up_percent(0, 50), 0);
        assert_eq!(round_half_up_percent(1_000, 0), 0);
    }

    #[test]
    fn test_round_half_up_percent_no_overflow() {
        // Product exceeds u64; intermediate math must not wrap.
        assert_eq!(round_half_up_percent(u64::MAX, 100), u64::MAX);
        assert_eq!(round_half_up_percent(u64::MAX, 50), u64::MAX / 2 + 1);
    }

    #[test]
    fn test_proportional() {
        assert_eq!(proportional(6_000, 10_000, 10_000), 6_000);
        assert_eq!(proportional(6_000, 5_000, 10_000), 3_000);
        // Truncates, never rounds up.
        assert_eq!(proportional(100, 1, 3), 33);
        assert_eq!(proportional(100, 2, 3), 66);
        assert_eq!(proportional(100, 0, 3), 0);
        assert_eq!(proportional(100, 3, 0), 0);
    }

    #[test]
    fn test_proportional_large_values() {
        let pool = u64::MAX;
        assert_eq!(proportional(pool, 1, 1), pool);
        assert_eq!(proportional(pool, u64::MAX, u64::MAX), pool);
    }

    #[test]
    fn test_clamp_i64() {
        assert_eq!(clamp_i64(0), 0);
        assert_eq!(clamp_i64(i128::from(i64::MAX) + 1), i64::MAX);
        assert_eq!(clamp_i64(i128::from(i64::MIN) - 1), i64::MIN);
    }
}
