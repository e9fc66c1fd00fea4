use serde::{Deserialize, Serialize};

/// One signal's contribution to a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalScore {
    pub signal_name: String,
    pub raw_value: f64,
    pub weight: f64,
    pub weighted_score: f64,
}

impl SignalScore {
    pub fn new(signal_name: impl Into<String>, raw_value: f64, weight: f64) -> Self {
        Self {
            signal_name: signal_name.into(),
            raw_value,
            weight,
            weighted_score: raw_value * weight,
        }
    }
}

/// Weighted mean of the signal values, as a percentage.
///
/// Weights are non-negative and values lie in [0, 1], so the result is
/// already within 0-100.
pub fn compute_composite(scores: &[SignalScore]) -> f64 {
    let total_weighted: f64 = scores.iter().map(|s| s.weighted_score).sum();
    let total_weight: f64 = scores.iter().map(|s| s.weight).sum();

    if total_weight == 0.0 {
        return 0.0;
    }

    total_weighted / total_weight * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scores() {
        assert_eq!(compute_composite(&[]), 0.0);
    }

    #[test]
    fn single_full_score() {
        let scores = vec![SignalScore::new("test", 1.0, 0.5)];
        assert!((compute_composite(&scores) - 100.0).abs() < 0.01);
    }

    #[test]
    fn equal_halves() {
        let scores = vec![
            SignalScore::new("stars", 0.6, 0.5), // 0.30
            SignalScore::new("sentiment", 0.5, 0.5), // 0.25
        ];
        assert!((compute_composite(&scores) - 55.0).abs() < 0.01);
    }

    #[test]
    fn weights_need_not_sum_to_one() {
        let scores = vec![
            SignalScore::new("a", 1.0, 6.0), // 6.0
            SignalScore::new("b", 0.5, 4.0), // 2.0
        ];
        // total_weighted = 8.0, total_weight = 10.0 → 80.0
        assert!((compute_composite(&scores) - 80.0).abs() < 0.01);
    }

    #[test]
    fn weighted_score_precomputed() {
        let score = SignalScore::new("stars", 0.8, 0.5);
        assert!((score.weighted_score - 0.4).abs() < 1e-12);
    }

    #[test]
    fn extremes_hit_bounds_exactly() {
        let best = vec![
            SignalScore::new("stars", 1.0, 0.5),
            SignalScore::new("sentiment", 1.0, 0.5),
        ];
        let worst = vec![
            SignalScore::new("stars", 0.0, 0.5),
            SignalScore::new("sentiment", 0.0, 0.5),
        ];
        assert_eq!(compute_composite(&best), 100.0);
        assert_eq!(compute_composite(&worst), 0.0);
    }

    #[test]
    fn zero_weights() {
        let scores = vec![SignalScore::new("a", 1.0, 0.0)];
        assert_eq!(compute_composite(&scores), 0.0);
    }
}
