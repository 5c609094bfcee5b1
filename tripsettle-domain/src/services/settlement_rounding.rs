//! Two-decimal rounding used at every stage of the settlement pipeline.
//!
//! Amounts are plain `f64`. Before scaling, `f64::EPSILON` is added to push
//! values such as `1.005` (stored as `1.00499999...`) over the midpoint, and
//! the midpoint itself rounds toward positive infinity, so `0.125 -> 0.13`
//! while `-0.125 -> -0.12`.

/// Nets whose magnitude stays below this are treated as settled.
pub const SETTLED_THRESHOLD: f64 = 0.001;

pub fn round2(value: f64) -> f64 {
    round_half_up((value + f64::EPSILON) * 100.0) / 100.0
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // `value - floor` is exact for every finite f64.
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

pub fn is_settled(net: f64) -> bool {
    net.abs() < SETTLED_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::epsilon_pushes_representation_error(1.005, 1.01)]
    #[case::larger_magnitude_midpoint(10.005, 10.01)]
    #[case::classic_binary_midpoint(2.675, 2.68)]
    #[case::third(100.0 / 3.0, 33.33)]
    #[case::two_thirds(200.0 / 3.0, 66.67)]
    #[case::exact_midpoint(0.125, 0.13)]
    #[case::negative_midpoint_rounds_up(-0.125, -0.12)]
    #[case::negative_third(-100.0 / 3.0, -33.33)]
    #[case::negative_representation_error(-1.005, -1.0)]
    #[case::already_rounded(66.67, 66.67)]
    #[case::zero(0.0, 0.0)]
    fn round2_cases(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round2(value), expected);
    }

    #[test]
    fn round2_is_stable_on_two_decimal_values() {
        for cents in -10_000_i64..=10_000 {
            let value = cents as f64 / 100.0;
            assert_eq!(round2(value), value, "value {value}");
        }
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(0.0009, true)]
    #[case(-0.0009, true)]
    #[case(0.001, false)]
    #[case(-0.01, false)]
    fn settled_threshold(#[case] net: f64, #[case] expected: bool) {
        assert_eq!(is_settled(net), expected);
    }
}
