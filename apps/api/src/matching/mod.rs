pub mod aggregate;
pub mod degree;
pub mod domain;
pub mod embedding;
pub mod engine;
pub mod fuzzy;
pub mod handlers;
pub mod major;
pub mod normalize;
pub mod projects;
pub mod reducer;
pub mod similarity;
pub mod skills;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(96.666), 96.67);
        assert_eq!(round2(0.6 * 100.0 + 0.4 * 50.0), 80.0);
        assert_eq!(round2(140.0), 140.0);
    }
}
