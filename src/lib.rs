//! Core of the Big-O visualizer: a restricted f(n) expression evaluator, the
//! reference growth functions g(n), the parameter set behind the controls,
//! and the derivation of the f(n) and c·g(n) series the chart draws.
//!
//! Nothing here touches the browser, so the whole core runs and tests natively.

pub mod bound;
pub mod cache;
pub mod chart_data;
pub mod config;
pub mod expr;
pub mod growth;
pub mod params;
pub mod series;

pub use bound::BoundReport;
pub use chart_data::{ChartPayload, YScale};
pub use expr::{evaluate, Expr, ExprError};
pub use growth::GrowthFn;
pub use params::{ParamChange, ParamError, ParameterSet};
pub use series::SeriesSet;
