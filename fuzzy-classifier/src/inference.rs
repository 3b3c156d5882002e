use crate::{
    consts::*,
    errors::ClassifierError,
    membership::{membership, MembershipVector},
};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Consumption tier derived from the defuzzified score
pub enum Category {
    /// Frugal, score below 35
    Hemat,
    /// Score in [35, 65)
    Normal,
    /// Wasteful, score of 65 and above
    Boros,
}

impl Category {
    pub fn from_score(score: f64) -> Self {
        if score < NORMAL_THRESHOLD {
            Category::Hemat
        } else if score < BOROS_THRESHOLD {
            Category::Normal
        } else {
            Category::Boros
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hemat => "Hemat",
            Category::Normal => "Normal",
            Category::Boros => "Boros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyResult {
    pub category: Category,
    /// Defuzzified score rounded half-up, in [0, 100]
    pub score: u8,
    pub membership: MembershipVector,
}

/// Fuzzifies a daily reading and defuzzifies it into a score and category.
///
/// Readings must be finite and non-negative.
pub fn classify(kwh: f64) -> Result<FuzzyResult, ClassifierError> {
    if !kwh.is_finite() || kwh < 0.0 {
        return Err(ClassifierError::InvalidEnergy(kwh));
    }

    let membership = membership(kwh);
    let score = defuzzify(&membership);
    // Thresholds apply to the unrounded score
    let category = Category::from_score(score);

    debug!(
        "{kwh} kWh -> low={:.3} medium={:.3} high={:.3} score={score:.3} ({category})",
        membership.low, membership.medium, membership.high
    );

    Ok(FuzzyResult {
        category,
        score: round_score(score),
        membership,
    })
}

/// Weighted average of the rule singletons, one rule per linguistic term
pub fn defuzzify(membership: &MembershipVector) -> f64 {
    let weight = membership.total();
    if weight <= 0.0 {
        warn!("No rule fired for {membership:?}, falling back to score {FALLBACK_SCORE}");
        return FALLBACK_SCORE;
    }

    (membership.low * HEMAT_SINGLETON
        + membership.medium * NORMAL_SINGLETON
        + membership.high * BOROS_SINGLETON)
        / weight
}

/// Rounds half-up and clamps into the score range
pub fn round_score(score: f64) -> u8 {
    (score + 0.5).floor().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_is_hemat() {
        let result = classify(0.0).unwrap();

        assert_eq!(result.category, Category::Hemat);
        assert_eq!(result.score, 20);
        assert!(result.score < 35);
    }

    #[test]
    fn test_twenty_is_boros() {
        let result = classify(20.0).unwrap();

        assert_eq!(result.category, Category::Boros);
        assert_eq!(result.score, 85);
    }

    #[test]
    fn test_ten_sits_on_medium_plateau() {
        let result = classify(10.0).unwrap();

        assert_eq!(
            result.membership,
            MembershipVector {
                low: 0.0,
                medium: 1.0,
                high: 0.0,
            }
        );
        assert_eq!(result.score, 50);
        assert_eq!(result.category, Category::Normal);
    }

    #[test]
    fn test_breakpoint_scores() {
        for (kwh, score, category) in [
            (3.0, 20, Category::Hemat),
            (5.0, 20, Category::Hemat),
            (7.0, 50, Category::Normal),
            (8.0, 50, Category::Normal),
            (10.0, 50, Category::Normal),
            (12.0, 60, Category::Normal),
            (15.0, 85, Category::Boros),
        ] {
            let m = membership(kwh);
            assert!(m.total() > 0.0, "no rule fires at {kwh}");

            let result = classify(kwh).unwrap();
            assert_eq!(result.score, score, "score at {kwh}");
            assert_eq!(result.category, category, "category at {kwh}");
        }
        assert_close(defuzzify(&membership(12.0)), 60.0);
    }

    #[test]
    fn test_overlapping_ramps() {
        // low = 0.25, medium = 1/3
        let score = defuzzify(&membership(6.0));
        assert_close(score, 260.0 / 7.0);
        assert_eq!(classify(6.0).unwrap().category, Category::Normal);
        assert_eq!(classify(6.0).unwrap().score, 37);

        // medium = 2/3, high = 0.6
        assert_eq!(classify(13.0).unwrap().category, Category::Boros);
        assert_eq!(classify(13.0).unwrap().score, 67);
    }

    #[test]
    fn test_threshold_uses_unrounded_score() {
        assert_eq!(Category::from_score(34.6), Category::Hemat);
        assert_eq!(round_score(34.6), 35);
        assert_eq!(Category::from_score(64.7), Category::Normal);
        assert_eq!(round_score(64.7), 65);
        assert_eq!(Category::from_score(35.0), Category::Normal);
        assert_eq!(Category::from_score(65.0), Category::Boros);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_score(42.5), 43);
        assert_eq!(round_score(41.5), 42);
        assert_eq!(round_score(42.49), 42);
        assert_eq!(round_score(100.0), 100);
    }

    #[test]
    fn test_degenerate_membership_falls_back() {
        let none = MembershipVector {
            low: 0.0,
            medium: 0.0,
            high: 0.0,
        };

        assert_eq!(defuzzify(&none), 50.0);
        assert_eq!(Category::from_score(defuzzify(&none)), Category::Normal);
    }

    #[test]
    fn test_scores_within_range() {
        for kwh in (0..=300).map(|v| v as f64 / 10.0) {
            let result = classify(kwh).unwrap();
            assert!((20..=85).contains(&result.score), "{kwh} kWh");
        }
    }

    #[test]
    fn test_rejects_readings_outside_domain() {
        for kwh in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            assert!(matches!(
                classify(kwh),
                Err(ClassifierError::InvalidEnergy(_))
            ));
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Hemat.to_string(), "Hemat");
        assert_eq!(Category::Boros.as_str(), "Boros");
    }
}
