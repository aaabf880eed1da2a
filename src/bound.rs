//! Check whether the plotted c·g(n) actually bounds f(n) from n0 on.

use crate::series::SeriesSet;
use std::fmt;

/// Overall reading of a [`BoundReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Holds,
    Violated,
    /// Nothing was compared: n0 is past maxN or f(n) is undefined throughout.
    Inconclusive,
}

/// Outcome of comparing f(n) against c·g(n) over n0..=maxN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundReport {
    pub n0: u32,
    pub max_n: u32,
    /// First n ≥ n0 with f(n) > c·g(n).
    pub first_violation: Option<u32>,
    /// Points at or after n0 where f(n) or c·g(n) is NaN or infinite.
    pub undefined_points: usize,
    /// Points that were actually compared.
    pub checked_points: usize,
}

impl BoundReport {
    pub fn check(series: &SeriesSet, n0: u32) -> Self {
        let mut first_violation = None;
        let mut undefined_points = 0;
        let mut checked_points = 0;

        for (n, f, g) in series.points().filter(|(n, _, _)| *n >= n0) {
            let Some(g) = g else {
                continue;
            };
            if !f.is_finite() || !g.is_finite() {
                undefined_points += 1;
                continue;
            }
            checked_points += 1;
            if f > g && first_violation.is_none() {
                first_violation = Some(n);
            }
        }

        Self {
            n0,
            max_n: series.labels.last().copied().unwrap_or(0),
            first_violation,
            undefined_points,
            checked_points,
        }
    }

    /// True when every compared point satisfies f(n) ≤ c·g(n) and at least one was compared.
    pub fn holds(&self) -> bool {
        self.first_violation.is_none() && self.checked_points > 0
    }

    /// n0 lies past maxN, so there was nothing to compare. Neither holds nor violated.
    pub fn beyond_range(&self) -> bool {
        self.n0 > self.max_n
    }

    pub fn is_violated(&self) -> bool {
        self.first_violation.is_some()
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_violated() {
            Verdict::Violated
        } else if self.holds() {
            Verdict::Holds
        } else {
            Verdict::Inconclusive
        }
    }
}

impl fmt::Display for BoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.beyond_range() {
            return write!(f, "n₀ = {} lies beyond the plotted range", self.n0);
        }
        match self.first_violation {
            Some(n) => write!(f, "f(n) > c·g(n) first at n = {}", n)?,
            None if self.checked_points == 0 => write!(f, "f(n) is undefined on the whole range")?,
            None => write!(
                f,
                "f(n) ≤ c·g(n) for all {} ≤ n ≤ {}",
                self.n0, self.max_n
            )?,
        }
        if self.undefined_points > 0 && self.checked_points > 0 {
            write!(f, " ({} undefined points skipped)", self.undefined_points)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::GrowthFn;
    use crate::params::ParameterSet;

    fn report(c: f64, n0: u32, max_n: u32, expr: &str, growth: GrowthFn) -> BoundReport {
        let params = ParameterSet {
            c,
            n0,
            max_n,
            f_expr: expr.to_string(),
            growth,
        };
        BoundReport::check(&SeriesSet::derive(&params), n0)
    }

    #[test]
    fn linear_is_bounded_by_itself() {
        let r = report(1.0, 1, 50, "n", GrowthFn::Linear);
        assert!(r.holds());
        assert_eq!(r.verdict(), Verdict::Holds);
        assert_eq!(r.checked_points, 50);
        assert_eq!(r.to_string(), "f(n) ≤ c·g(n) for all 1 ≤ n ≤ 50");
    }

    #[test]
    fn quadratic_escapes_linear_bound() {
        let r = report(10.0, 1, 50, "n*n", GrowthFn::Linear);
        assert_eq!(r.first_violation, Some(11));
        assert!(!r.holds());
        assert!(r.is_violated());
        assert!(!r.beyond_range());
        assert_eq!(r.verdict(), Verdict::Violated);
        assert_eq!(r.to_string(), "f(n) > c·g(n) first at n = 11");
    }

    #[test]
    fn threshold_skips_early_violations() {
        // 3n + 10 > 4n only while n < 10
        assert_eq!(report(4.0, 1, 30, "3*n + 10", GrowthFn::Linear).first_violation, Some(1));
        assert!(report(4.0, 10, 30, "3*n + 10", GrowthFn::Linear).holds());
    }

    #[test]
    fn undefined_points_are_counted_not_compared() {
        let r = report(1.0, 1, 10, "1/(n-3)", GrowthFn::Linear);
        assert_eq!(r.undefined_points, 1);
        assert_eq!(r.checked_points, 9);
        assert!(r.holds());
    }

    #[test]
    fn unevaluable_expression_never_holds() {
        let r = report(1.0, 1, 10, "nope", GrowthFn::Linear);
        assert_eq!(r.checked_points, 0);
        assert!(!r.holds());
        assert_eq!(r.verdict(), Verdict::Inconclusive);
        assert_eq!(r.to_string(), "f(n) is undefined on the whole range");
    }

    #[test]
    fn n0_past_range() {
        let r = report(1.0, 50, 10, "n", GrowthFn::Linear);
        assert_eq!(r.checked_points, 0);
        assert!(r.beyond_range());
        assert!(!r.is_violated());
        assert!(!r.holds());
        assert_eq!(r.verdict(), Verdict::Inconclusive);
        assert_eq!(r.to_string(), "n₀ = 50 lies beyond the plotted range");
    }
}
