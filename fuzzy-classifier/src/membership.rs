//! Trapezoidal membership functions for the daily consumption variable.

use crate::consts::*;
use serde::Serialize;

/// Degrees of truth of "usage is Low/Medium/High" for one reading.
///
/// The degrees overlap and are not normalised, so they need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MembershipVector {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl MembershipVector {
    pub fn total(&self) -> f64 {
        self.low + self.medium + self.high
    }
}

pub fn membership(kwh: f64) -> MembershipVector {
    MembershipVector {
        low: low(kwh),
        medium: medium(kwh),
        high: high(kwh),
    }
}

pub fn low(kwh: f64) -> f64 {
    if kwh <= LOW_FULL_UNTIL {
        1.0
    } else if kwh >= LOW_ZERO_FROM {
        0.0
    } else {
        (LOW_ZERO_FROM - kwh) / (LOW_ZERO_FROM - LOW_FULL_UNTIL)
    }
}

pub fn medium(kwh: f64) -> f64 {
    if kwh <= MEDIUM_RISE_FROM || kwh >= MEDIUM_ZERO_FROM {
        0.0
    } else if (MEDIUM_PLATEAU_FROM..=MEDIUM_PLATEAU_UNTIL).contains(&kwh) {
        1.0
    } else if kwh < MEDIUM_PLATEAU_FROM {
        (kwh - MEDIUM_RISE_FROM) / (MEDIUM_PLATEAU_FROM - MEDIUM_RISE_FROM)
    } else {
        (MEDIUM_ZERO_FROM - kwh) / (MEDIUM_ZERO_FROM - MEDIUM_PLATEAU_UNTIL)
    }
}

pub fn high(kwh: f64) -> f64 {
    if kwh <= HIGH_RISE_FROM {
        0.0
    } else if kwh >= HIGH_FULL_FROM {
        1.0
    } else {
        (kwh - HIGH_RISE_FROM) / (HIGH_FULL_FROM - HIGH_RISE_FROM)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sweep() -> impl Iterator<Item = f64> {
        (0..=400).map(|step| step as f64 * 0.05)
    }

    #[test]
    fn test_degrees_stay_in_unit_interval() {
        for kwh in sweep().chain([1e6, f64::MAX]) {
            let m = membership(kwh);
            for degree in [m.low, m.medium, m.high] {
                assert!((0.0..=1.0).contains(&degree), "{degree} at {kwh} kWh");
            }
        }
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(low(3.0), 1.0);
        assert_eq!(low(7.0), 0.0);
        assert_eq!(medium(5.0), 0.0);
        assert_eq!(medium(8.0), 1.0);
        assert_eq!(medium(12.0), 1.0);
        assert_eq!(medium(15.0), 0.0);
        assert_eq!(high(10.0), 0.0);
        assert_eq!(high(15.0), 1.0);
    }

    #[test]
    fn test_ramps() {
        assert_eq!(low(5.0), 0.5);
        assert_eq!(medium(6.5), 0.5);
        assert_eq!(medium(13.5), 0.5);
        assert_eq!(high(12.5), 0.5);
    }

    #[test]
    fn test_continuous_at_breakpoints() {
        let eps = 1e-9;
        for kwh in [3.0, 5.0, 7.0, 8.0, 10.0, 12.0, 15.0] {
            for f in [low, medium, high] {
                assert!((f(kwh - eps) - f(kwh)).abs() < 1e-6, "jump below {kwh}");
                assert!((f(kwh + eps) - f(kwh)).abs() < 1e-6, "jump above {kwh}");
            }
        }
    }

    #[test]
    fn test_monotonic_ramps() {
        let mut prev = low(3.0);
        for kwh in (300..=700).map(|v| v as f64 / 100.0) {
            assert!(low(kwh) <= prev);
            prev = low(kwh);
        }

        let mut prev = high(10.0);
        for kwh in (1000..=1500).map(|v| v as f64 / 100.0) {
            assert!(high(kwh) >= prev);
            prev = high(kwh);
        }
    }

    #[test]
    fn test_zero_reading() {
        assert_eq!(
            membership(0.0),
            MembershipVector {
                low: 1.0,
                medium: 0.0,
                high: 0.0,
            }
        );
    }
}
