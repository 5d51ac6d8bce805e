//! Scalar butterfly primitives.
//!
//! All lattice arithmetic runs in `i32` lanes whose fixed-point format is
//! chosen per stage by the configuration tables. Debug builds verify stage
//! ranges and multiply headroom; release builds compile both checks out.

/// Drops `bit` fractional bits, rounding to nearest with ties away from zero.
///
/// A non-positive `bit` is an exact left shift by `-bit` and never rounds.
#[inline]
pub fn round_shift(value: i32, bit: i8) -> i32 {
    if bit <= 0 {
        return value << -bit;
    }
    let half = 1 << (bit - 1);
    if value < 0 {
        -((-value + half) >> bit)
    } else {
        (value + half) >> bit
    }
}

/// Applies [`round_shift`] across a line of coefficients.
///
/// `bit == 0` leaves the line untouched. Callers pass the negated table
/// shift, so a positive configured shift scales up.
#[inline]
pub fn round_shift_array(arr: &mut [i32], bit: i8) {
    if bit == 0 {
        return;
    }
    for v in arr.iter_mut() {
        *v = round_shift(*v, bit);
    }
}

/// Half butterfly: `round_shift(w0 * in0 + w1 * in1, bit)` in 32-bit
/// arithmetic.
///
/// Debug builds recompute the product sum in 64 bits and panic if the 32-bit
/// accumulator wrapped. The configuration tables keep every stage inside
/// headroom, so a panic here means a table or wiring defect, not bad input.
#[inline]
pub fn half_btf(w0: i32, in0: i32, w1: i32, in1: i32, bit: i8) -> i32 {
    let result_32 = w0.wrapping_mul(in0).wrapping_add(w1.wrapping_mul(in1));
    if cfg!(debug_assertions) {
        let result_64 = i64::from(w0) * i64::from(in0) + i64::from(w1) * i64::from(in1);
        assert!(
            i64::from(result_32) == result_64,
            "half butterfly overflow: w0={} in0={} w1={} in1={} gave {} instead of {}",
            w0,
            in0,
            w1,
            in1,
            result_32,
            result_64
        );
    }
    round_shift(result_32, bit)
}

/// Panics in debug builds when any value exceeds the stage's signed bit
/// budget, naming the stage and offending lane.
#[inline]
pub(crate) fn range_check(stage: usize, input: &[i32], bit: i8) {
    if cfg!(debug_assertions) {
        for (i, &v) in input.iter().enumerate() {
            assert!(
                v.unsigned_abs() < (1u32 << bit),
                "stage {} lane {}: {} exceeds {} bits",
                stage,
                i,
                v,
                bit
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_shift_ties_away_from_zero() {
        assert_eq!(round_shift(2, 2), 1);
        assert_eq!(round_shift(-2, 2), -1);
        assert_eq!(round_shift(1, 1), 1);
        assert_eq!(round_shift(-1, 1), -1);
        assert_eq!(round_shift(5, 1), 3);
        assert_eq!(round_shift(-5, 1), -3);
        assert_eq!(round_shift(7, 2), 2);
        assert_eq!(round_shift(-7, 2), -2);
    }

    #[test]
    fn round_shift_negative_bit_is_exact() {
        assert_eq!(round_shift(3, -4), 48);
        assert_eq!(round_shift(-3, -4), -48);
        assert_eq!(round_shift(123, 0), 123);
    }

    #[test]
    fn round_shift_array_zero_bit_is_noop() {
        let mut line = [5, -5, 1023, -1024];
        round_shift_array(&mut line, 0);
        assert_eq!(line, [5, -5, 1023, -1024]);
        round_shift_array(&mut line, 1);
        assert_eq!(line, [3, -3, 512, -512]);
    }

    #[test]
    fn half_btf_matches_wide_arithmetic() {
        // cos/sin pair at precision 12 applied to a typical stage value.
        let got = half_btf(4017, 100, 799, -50, 12);
        let want =
            ((4017i64 * 100 + 799i64 * -50 + (1 << 11)) >> 12) as i32;
        assert_eq!(got, want);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds")]
    fn range_check_rejects_out_of_budget_values() {
        range_check(3, &[1 << 15], 15);
    }

    #[test]
    fn range_check_accepts_full_budget() {
        range_check(0, &[(1 << 15) - 1, -(1 << 15) + 1], 15);
    }
}
