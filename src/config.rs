//! Application-level configuration constants.

use crate::growth::GrowthFn;

// Multiplier c
pub const DEFAULT_C: f64 = 1.0;
pub const MIN_C: f64 = 0.5;
pub const MAX_C: f64 = 200.0;
pub const C_STEP: f64 = 0.5;

// Threshold n0
pub const DEFAULT_N0: u32 = 1;
pub const MIN_N0: u32 = 1;
pub const MAX_N0: u32 = 50;

// Largest plotted input size
pub const DEFAULT_MAX_N: u32 = 100;
pub const MIN_MAX_N: u32 = 10;
pub const MAX_MAX_N: u32 = 200;
pub const MAX_N_STEP: u32 = 10;

// Default f(n) and g(n)
pub const DEFAULT_EXPR: &str = "n";
pub const DEFAULT_GROWTH: GrowthFn = GrowthFn::NLogN;

// Expression evaluator limits
pub const EXPR_CACHE_CAPACITY: usize = 64;
pub const MAX_EXPR_DEPTH: usize = 256;

// Chart presentation
pub const CHART_CANVAS_ID: &str = "complexityChart";
pub const F_COLOR: &str = "#1f77b4";
pub const G_COLOR: &str = "#ff7f0e";
pub const G_DASH: [u32; 2] = [5, 5];

pub const NOTES_URL: &str = "https://spangled-airport-56f.notion.site/Warm-up-Practice-Questions-on-Time-Complexity-Of-Algorithms-23876128a3ef80438078cfb416685265";
