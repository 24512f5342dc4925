/// Round a value to two decimal places (display cents)
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1.006), 1.01);
        assert_eq!(round_cents(123.4567), 123.46);
        assert_eq!(round_cents(-0.456), -0.46);
        assert_eq!(round_cents(100.0), 100.0);
    }
}
