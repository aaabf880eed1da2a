//! Derivation of the two plotted series from a [`ParameterSet`].

use crate::cache;
use crate::params::ParameterSet;
use log::debug;

/// Both series over n = 1..=maxN, index-aligned with `labels`.
///
/// `f` holds NaN wherever f(n) could not be evaluated. `scaled_g` holds
/// `None` for every n < n0: no data, which is neither zero nor NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    pub labels: Vec<u32>,
    pub f: Vec<f64>,
    pub scaled_g: Vec<Option<f64>>,
}

impl SeriesSet {
    /// Recompute both series. Pure apart from the shared expression cache.
    pub fn derive(params: &ParameterSet) -> Self {
        let labels: Vec<u32> = (1..=params.max_n).collect();

        let f = match cache::compile(&params.f_expr) {
            Ok(expr) => labels.iter().map(|&n| expr.eval(n as f64)).collect(),
            Err(e) => {
                debug!("f(n) = {:?} does not evaluate: {}", params.f_expr, e);
                vec![f64::NAN; labels.len()]
            }
        };

        let scaled_g = labels
            .iter()
            .map(|&n| (n >= params.n0).then(|| params.c * params.growth.eval(n)))
            .collect();

        debug!(
            "Derived series for n = 1..={} (c = {}, n0 = {}, g = {})",
            params.max_n, params.c, params.n0, params.growth
        );

        Self {
            labels,
            f,
            scaled_g,
        }
    }

    /// Points as (n, f(n), c·g(n)) triples in increasing n.
    pub fn points(&self) -> impl Iterator<Item = (u32, f64, Option<f64>)> + '_ {
        self.labels
            .iter()
            .zip(&self.f)
            .zip(&self.scaled_g)
            .map(|((&n, &f), &g)| (n, f, g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::GrowthFn;

    fn params(c: f64, n0: u32, max_n: u32, expr: &str, growth: GrowthFn) -> ParameterSet {
        ParameterSet {
            c,
            n0,
            max_n,
            f_expr: expr.to_string(),
            growth,
        }
    }

    #[test]
    fn default_parameters_give_one_hundred_points() {
        let s = SeriesSet::derive(&ParameterSet::default());
        assert_eq!(s.labels.len(), 100);
        assert_eq!(s.labels.first(), Some(&1));
        assert_eq!(s.labels.last(), Some(&100));
        assert_eq!(s.f[9], 10.0);
        assert_eq!(s.scaled_g[7], Some(24.0));
    }

    #[test]
    fn threshold_hides_points_before_n0() {
        let s = SeriesSet::derive(&params(2.0, 5, 10, "n", GrowthFn::Linear));
        for (n, _, g) in s.points() {
            if n < 5 {
                assert_eq!(g, None);
            } else {
                assert_eq!(g, Some(2.0 * n as f64));
            }
        }
    }

    #[test]
    fn f_series_ignores_threshold() {
        let s = SeriesSet::derive(&params(1.0, 8, 10, "n*n", GrowthFn::Linear));
        assert!(s.f.iter().all(|v| v.is_finite()));
        assert_eq!(s.f[0], 1.0);
    }

    #[test]
    fn bad_expression_fills_with_nan() {
        let s = SeriesSet::derive(&params(1.0, 1, 10, "n +", GrowthFn::Linear));
        assert_eq!(s.f.len(), 10);
        assert!(s.f.iter().all(|v| v.is_nan()));
        assert!(s.scaled_g.iter().all(|g| g.is_some()));
    }

    #[test]
    fn partial_domain_leaves_isolated_gaps() {
        let s = SeriesSet::derive(&params(1.0, 1, 10, "1/(n-3)", GrowthFn::Linear));
        assert!(s.f[2].is_infinite());
        assert!(s.f[3].is_finite());
    }
}
