//! Reference growth functions g(n) offered in the selector.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrowthFn {
    Linear,
    LogN,
    #[default]
    NLogN,
    Quadratic,
    Exponential,
}

impl GrowthFn {
    /// Every selectable function, in dropdown order.
    pub const ALL: [GrowthFn; 5] = [
        GrowthFn::Linear,
        GrowthFn::LogN,
        GrowthFn::NLogN,
        GrowthFn::Quadratic,
        GrowthFn::Exponential,
    ];

    /// Evaluate g(n).
    pub fn eval(self, n: u32) -> f64 {
        let x = n as f64;
        match self {
            GrowthFn::Linear => x,
            GrowthFn::LogN => x.log2(),
            GrowthFn::NLogN => x * x.log2(),
            GrowthFn::Quadratic => x * x,
            GrowthFn::Exponential => 2f64.powf(x),
        }
    }

    /// Stable key used as the `<select>` option value.
    pub fn key(self) -> &'static str {
        match self {
            GrowthFn::Linear => "linear",
            GrowthFn::LogN => "logn",
            GrowthFn::NLogN => "nlogn",
            GrowthFn::Quadratic => "quadratic",
            GrowthFn::Exponential => "exponential",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GrowthFn::Linear => "g(n) = n",
            GrowthFn::LogN => "g(n) = log₂n",
            GrowthFn::NLogN => "g(n) = n log₂n",
            GrowthFn::Quadratic => "g(n) = n²",
            GrowthFn::Exponential => "g(n) = 2ⁿ",
        }
    }

    /// Look up a selector key. Unrecognised keys fall back to n·log₂(n).
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or(GrowthFn::NLogN)
    }
}

impl fmt::Display for GrowthFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a selector key names no growth function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGrowthFn(pub String);

impl fmt::Display for UnknownGrowthFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown growth function: {}", self.0)
    }
}

impl std::error::Error for UnknownGrowthFn {}

impl FromStr for GrowthFn {
    type Err = UnknownGrowthFn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrowthFn::ALL
            .into_iter()
            .find(|g| g.key() == s)
            .ok_or_else(|| UnknownGrowthFn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_values() {
        assert_eq!(GrowthFn::Linear.eval(4), 4.0);
        assert_eq!(GrowthFn::LogN.eval(8), 3.0);
        assert_eq!(GrowthFn::NLogN.eval(8), 24.0);
        assert_eq!(GrowthFn::Quadratic.eval(5), 25.0);
        assert_eq!(GrowthFn::Exponential.eval(5), 32.0);
    }

    #[test]
    fn log_of_one_is_zero() {
        assert_eq!(GrowthFn::LogN.eval(1), 0.0);
        assert_eq!(GrowthFn::NLogN.eval(1), 0.0);
    }

    #[test]
    fn exponential_stays_finite_at_largest_n() {
        assert!(GrowthFn::Exponential.eval(200).is_finite());
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for g in GrowthFn::ALL {
            assert_eq!(GrowthFn::from_key(g.key()), g);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_nlogn() {
        assert_eq!(GrowthFn::from_key("cubic"), GrowthFn::NLogN);
        assert_eq!(GrowthFn::from_key(""), GrowthFn::NLogN);
        assert!("cubic".parse::<GrowthFn>().is_err());
    }
}
