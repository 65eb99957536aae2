/// Halves round towards positive infinity, so -1.25 becomes -1.2.
fn round(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor + 0.5).floor() / factor
}

/// Round to one decimal place, for display.
pub fn to_one_dp(value: f64) -> f64 {
    round(value, 1)
}

/// Round to two decimal places, for display.
pub fn to_two_dp(value: f64) -> f64 {
    round(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_towards_positive_infinity() {
        assert_eq!(to_one_dp(1.25), 1.3);
        assert_eq!(to_one_dp(-1.25), -1.2);
        assert_eq!(to_one_dp(-1.26), -1.3);
        assert_eq!(to_two_dp(-0.125), -0.12);
        assert_eq!(to_two_dp(333.333_333), 333.33);
        assert_eq!(to_two_dp(1.005_1), 1.01);
    }
}
