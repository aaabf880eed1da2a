//! The parameter set driving the chart and the validated ways to change it.

use crate::config::*;
use crate::growth::GrowthFn;
use std::fmt;

/// Current values of every control. Setters keep each field inside the range
/// (and on the step) its slider can produce.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    pub c: f64,
    pub n0: u32,
    pub max_n: u32,
    pub f_expr: String,
    pub growth: GrowthFn,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            c: DEFAULT_C,
            n0: DEFAULT_N0,
            max_n: DEFAULT_MAX_N,
            f_expr: DEFAULT_EXPR.to_string(),
            growth: DEFAULT_GROWTH,
        }
    }
}

/// A single-field update emitted by one control.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamChange {
    C(f64),
    N0(u32),
    MaxN(u32),
    FExpr(String),
    Growth(GrowthFn),
}

impl ParameterSet {
    /// Set c, snapped to the nearest 0.5 inside [0.5, 200]. Non-finite input is ignored.
    pub fn set_c(&mut self, c: f64) {
        if !c.is_finite() {
            return;
        }
        let snapped = (c / C_STEP).round() * C_STEP;
        self.c = snapped.clamp(MIN_C, MAX_C);
    }

    pub fn set_n0(&mut self, n0: u32) {
        self.n0 = n0.clamp(MIN_N0, MAX_N0);
    }

    /// Set maxN, snapped to the nearest multiple of 10 inside [10, 200].
    pub fn set_max_n(&mut self, max_n: u32) {
        let snapped = max_n.saturating_add(MAX_N_STEP / 2) / MAX_N_STEP * MAX_N_STEP;
        self.max_n = snapped.clamp(MIN_MAX_N, MAX_MAX_N);
    }

    pub fn set_f_expr(&mut self, expr: impl Into<String>) {
        self.f_expr = expr.into();
    }

    pub fn set_growth(&mut self, growth: GrowthFn) {
        self.growth = growth;
    }

    pub fn apply(&mut self, change: ParamChange) {
        match change {
            ParamChange::C(c) => self.set_c(c),
            ParamChange::N0(n0) => self.set_n0(n0),
            ParamChange::MaxN(max_n) => self.set_max_n(max_n),
            ParamChange::FExpr(expr) => self.set_f_expr(expr),
            ParamChange::Growth(g) => self.set_growth(g),
        }
    }
}

/// Control input that could not be turned into a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    Empty(&'static str),
    NotANumber(&'static str),
    BelowMin { field: &'static str, min: String },
    AboveMax { field: &'static str, max: String },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Empty(field) => write!(f, "{} cannot be empty", field),
            ParamError::NotANumber(field) => write!(f, "{} must be a valid number", field),
            ParamError::BelowMin { field, min } => {
                write!(f, "{} must be at least {}", field, min)
            }
            ParamError::AboveMax { field, max } => write!(f, "{} cannot exceed {}", field, max),
        }
    }
}

impl std::error::Error for ParamError {}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: T,
    max: T,
    field_name: &'static str,
) -> Result<T, ParamError>
where
    T: std::str::FromStr + fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParamError::Empty(field_name));
    }

    let val = trimmed
        .parse::<T>()
        .map_err(|_| ParamError::NotANumber(field_name))?;
    if val < min {
        return Err(ParamError::BelowMin {
            field: field_name,
            min: min.to_string(),
        });
    }
    if val > max {
        return Err(ParamError::AboveMax {
            field: field_name,
            max: max.to_string(),
        });
    }
    Ok(val)
}

/// Parse the c slider's value.
pub fn parse_c(input: &str) -> Result<ParamChange, ParamError> {
    let c: f64 = validate_numeric_input(input, MIN_C, MAX_C, "c")?;
    if !c.is_finite() {
        return Err(ParamError::NotANumber("c"));
    }
    Ok(ParamChange::C(c))
}

/// Parse the n0 slider's value.
pub fn parse_n0(input: &str) -> Result<ParamChange, ParamError> {
    validate_numeric_input(input, MIN_N0, MAX_N0, "n0").map(ParamChange::N0)
}

/// Parse the max-n slider's value.
pub fn parse_max_n(input: &str) -> Result<ParamChange, ParamError> {
    validate_numeric_input(input, MIN_MAX_N, MAX_MAX_N, "Max n").map(ParamChange::MaxN)
}
