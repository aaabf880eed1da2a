//! Restricted arithmetic expressions over the single variable `n`.
//!
//! User text is tokenized and parsed by recursive descent into an [`Expr`]
//! tree, which is then evaluated for each input size. Nothing outside the
//! grammar below can be named or executed:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary (('^' | '**') unary)?
//! primary := NUMBER | IDENT | IDENT '(' args ')' | '(' expr ')'
//! ```
//!
//! Identifiers are `n`, the constants `pi` and `e`, and a fixed list of math
//! functions. A leading `Math.` is accepted so that `n*Math.log2(n)` parses.

use crate::config::MAX_EXPR_DEPTH;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap());
static IDENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*").unwrap());

/// Parse failures. Evaluation of a parsed expression cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    Empty,
    UnexpectedChar { ch: char, pos: usize },
    UnexpectedToken { found: String, pos: usize },
    UnexpectedEnd,
    UnknownIdentifier(String),
    WrongArity {
        name: &'static str,
        expected: Arity,
        found: usize,
    },
    TooDeep,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Empty => write!(f, "Expression is empty"),
            ExprError::UnexpectedChar { ch, pos } => {
                write!(f, "Unexpected character '{}' at position {}", ch, pos)
            }
            ExprError::UnexpectedToken { found, pos } => {
                write!(f, "Unexpected '{}' at position {}", found, pos)
            }
            ExprError::UnexpectedEnd => write!(f, "Expression ends unexpectedly"),
            ExprError::UnknownIdentifier(name) => write!(f, "Unknown name '{}'", name),
            ExprError::WrongArity {
                name,
                expected,
                found,
            } => write!(
                f,
                "{}() takes {} argument(s), got {}",
                name, expected, found
            ),
            ExprError::TooDeep => write!(
                f,
                "Expression nests deeper than {} levels",
                MAX_EXPR_DEPTH
            ),
        }
    }
}

impl std::error::Error for ExprError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(k) => count == k,
            Arity::AtLeast(k) => count >= k,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(k) => write!(f, "{}", k),
            Arity::AtLeast(k) => write!(f, "at least {}", k),
        }
    }
}

/// Allowlisted math functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Log2,
    Log10,
    Ln,
    Sqrt,
    Cbrt,
    Exp,
    Abs,
    Floor,
    Ceil,
    Round,
    Sin,
    Cos,
    Tan,
    Pow,
    Min,
    Max,
}

impl Func {
    fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "log2" => Func::Log2,
            "log10" => Func::Log10,
            "log" | "ln" => Func::Ln,
            "sqrt" => Func::Sqrt,
            "cbrt" => Func::Cbrt,
            "exp" => Func::Exp,
            "abs" => Func::Abs,
            "floor" => Func::Floor,
            "ceil" => Func::Ceil,
            "round" => Func::Round,
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "pow" => Func::Pow,
            "min" => Func::Min,
            "max" => Func::Max,
            _ => return None,
        };
        Some(func)
    }

    pub fn name(self) -> &'static str {
        match self {
            Func::Log2 => "log2",
            Func::Log10 => "log10",
            Func::Ln => "log",
            Func::Sqrt => "sqrt",
            Func::Cbrt => "cbrt",
            Func::Exp => "exp",
            Func::Abs => "abs",
            Func::Floor => "floor",
            Func::Ceil => "ceil",
            Func::Round => "round",
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Pow => "pow",
            Func::Min => "min",
            Func::Max => "max",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Func::Pow => Arity::Exactly(2),
            Func::Min | Func::Max => Arity::AtLeast(1),
            _ => Arity::Exactly(1),
        }
    }

    fn apply(self, args: &[f64]) -> f64 {
        let x = args.first().copied().unwrap_or(f64::NAN);
        match self {
            Func::Log2 => x.log2(),
            Func::Log10 => x.log10(),
            Func::Ln => x.ln(),
            Func::Sqrt => x.sqrt(),
            Func::Cbrt => x.cbrt(),
            Func::Exp => x.exp(),
            Func::Abs => x.abs(),
            Func::Floor => x.floor(),
            Func::Ceil => x.ceil(),
            // halves round up, -2.5 -> -2
            Func::Round => (x + 0.5).floor(),
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Pow => x.powf(args.get(1).copied().unwrap_or(f64::NAN)),
            Func::Min => fold_nan(args, f64::min),
            Func::Max => fold_nan(args, f64::max),
        }
    }
}

/// Fold that propagates NaN instead of skipping it like `f64::min` does.
fn fold_nan(args: &[f64], op: fn(f64, f64) -> f64) -> f64 {
    if args.iter().any(|a| a.is_nan()) {
        return f64::NAN;
    }
    args.iter().copied().reduce(op).unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Var,
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Vec<Expr>),
}

impl Expr {
    pub fn parse(input: &str) -> Result<Expr, ExprError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ExprError::Empty);
        }
        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
        };
        let expr = parser.parse_expr()?;
        match parser.peek() {
            None => Ok(expr),
            Some(tok) => Err(tok.unexpected()),
        }
    }

    /// Evaluate with the variable bound to `n`. IEEE-754 semantics throughout.
    pub fn eval(&self, n: f64) -> f64 {
        match self {
            Expr::Num(v) => *v,
            Expr::Var => n,
            Expr::Neg(inner) => -inner.eval(n),
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.eval(n);
                let b = rhs.eval(n);
                match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => a / b,
                    BinOp::Rem => a % b,
                    BinOp::Pow => a.powf(b),
                }
            }
            Expr::Call(func, args) => {
                let values: Vec<f64> = args.iter().map(|a| a.eval(n)).collect();
                func.apply(&values)
            }
        }
    }
}

/// Evaluate `expr` at `n`, yielding NaN when the text does not parse.
pub fn evaluate(expr: &str, n: u32) -> f64 {
    match Expr::parse(expr) {
        Ok(parsed) => parsed.eval(n as f64),
        Err(_) => f64::NAN,
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Tokenizer

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Num(v) => write!(f, "{}", v),
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::Percent => f.write_str("%"),
            TokenKind::Caret => f.write_str("^"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Comma => f.write_str(","),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    pos: usize,
}

impl Token {
    fn unexpected(&self) -> ExprError {
        ExprError::UnexpectedToken {
            found: self.kind.to_string(),
            pos: self.pos,
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let Some(ch) = rest.chars().next() else {
            break;
        };

        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        if let Some(m) = NUMBER_REGEX.find(rest) {
            let value = m
                .as_str()
                .parse::<f64>()
                .map_err(|_| ExprError::UnexpectedChar { ch, pos })?;
            tokens.push(Token {
                kind: TokenKind::Num(value),
                pos,
            });
            pos += m.end();
            continue;
        }

        if let Some(m) = IDENT_REGEX.find(rest) {
            tokens.push(Token {
                kind: TokenKind::Ident(m.as_str().to_string()),
                pos,
            });
            pos += m.end();
            continue;
        }

        let (kind, width) = match ch {
            '+' => (TokenKind::Plus, 1),
            '-' => (TokenKind::Minus, 1),
            '*' if rest.starts_with("**") => (TokenKind::Caret, 2),
            '*' => (TokenKind::Star, 1),
            '/' => (TokenKind::Slash, 1),
            '%' => (TokenKind::Percent, 1),
            '^' => (TokenKind::Caret, 1),
            '(' => (TokenKind::LParen, 1),
            ')' => (TokenKind::RParen, 1),
            ',' => (TokenKind::Comma, 1),
            _ => return Err(ExprError::UnexpectedChar { ch, pos }),
        };
        tokens.push(Token { kind, pos });
        pos += width;
    }

    Ok(tokens)
}

// ──────────────────────────────────────────────────────────────────────────────
// Parser

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn advance(&mut self) -> Result<Token, ExprError> {
        let tok = self.tokens.get(self.pos).cloned().ok_or(ExprError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(tok)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ExprError> {
        let tok = self.advance()?;
        if &tok.kind == kind {
            Ok(())
        } else {
            Err(tok.unexpected())
        }
    }

    fn enter(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_EXPR_DEPTH {
            return Err(ExprError::TooDeep);
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.leave_by(1);
    }

    fn leave_by(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        self.enter()?;
        let mut lhs = self.parse_term()?;
        // each chained operator deepens the left-leaning tree by one level
        let mut chained = 0;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            self.enter()?;
            chained += 1;
            let rhs = self.parse_term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        self.leave_by(chained + 1);
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_unary()?;
        let mut chained = 0;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinOp::Mul,
                Some(TokenKind::Slash) => BinOp::Div,
                Some(TokenKind::Percent) => BinOp::Rem,
                _ => break,
            };
            self.pos += 1;
            self.enter()?;
            chained += 1;
            let rhs = self.parse_unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        self.leave_by(chained);
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        self.enter()?;
        let expr = if self.eat(&TokenKind::Minus) {
            Expr::Neg(Box::new(self.parse_unary()?))
        } else if self.eat(&TokenKind::Plus) {
            self.parse_unary()?
        } else {
            self.parse_power()?
        };
        self.leave();
        Ok(expr)
    }

    fn parse_power(&mut self) -> Result<Expr, ExprError> {
        let base = self.parse_primary()?;
        if self.eat(&TokenKind::Caret) {
            // right associative: the exponent may itself be a power
            let exponent = self.parse_unary()?;
            return Ok(Expr::Binary(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Num(v) => Ok(Expr::Num(v)),
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Ident(ref name) => {
                let name = name.strip_prefix("Math.").unwrap_or(name.as_str());
                if self.eat(&TokenKind::LParen) {
                    let func = Func::from_name(name)
                        .ok_or_else(|| ExprError::UnknownIdentifier(name.to_string()))?;
                    let args = self.parse_args()?;
                    if !func.arity().accepts(args.len()) {
                        return Err(ExprError::WrongArity {
                            name: func.name(),
                            expected: func.arity(),
                            found: args.len(),
                        });
                    }
                    return Ok(Expr::Call(func, args));
                }
                match name {
                    "n" => Ok(Expr::Var),
                    "pi" | "PI" => Ok(Expr::Num(std::f64::consts::PI)),
                    "e" | "E" => Ok(Expr::Num(std::f64::consts::E)),
                    _ => Err(ExprError::UnknownIdentifier(name.to_string())),
                }
            }
            _ => Err(tok.unexpected()),
        }
    }

    /// Comma-separated arguments after an opening parenthesis.
    fn parse_args(&mut self) -> Result<Vec<Expr>, ExprError> {
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.expect(&TokenKind::RParen)?;
            return Ok(args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_at(expr: &str, n: f64) -> f64 {
        Expr::parse(expr).expect("expression parses").eval(n)
    }

    #[test]
    fn variable_and_products() {
        assert_eq!(evaluate("n", 10), 10.0);
        assert_eq!(evaluate("n*n", 10), 100.0);
        assert_eq!(evaluate("3*n + 2", 4), 14.0);
    }

    #[test]
    fn unknown_name_is_nan_for_every_n() {
        for n in 1..=20 {
            assert!(evaluate("notAVariable+1", n).is_nan());
        }
        assert_eq!(
            Expr::parse("notAVariable+1"),
            Err(ExprError::UnknownIdentifier("notAVariable".to_string()))
        );
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(eval_at("2 + 3 * 4", 0.0), 14.0);
        assert_eq!(eval_at("(2 + 3) * 4", 0.0), 20.0);
        assert_eq!(eval_at("10 - 4 - 3", 0.0), 3.0);
        assert_eq!(eval_at("2 ^ 3 ^ 2", 0.0), 512.0);
        assert_eq!(eval_at("2 ** 10", 0.0), 1024.0);
        assert_eq!(eval_at("-2 ^ 2", 0.0), -4.0);
        assert_eq!(eval_at("2 ^ -1", 0.0), 0.5);
        assert_eq!(eval_at("7 % 4", 0.0), 3.0);
    }

    #[test]
    fn math_prefix_and_functions() {
        assert_eq!(eval_at("n*Math.log2(n)", 8.0), 24.0);
        assert_eq!(eval_at("log2(n)", 1024.0), 10.0);
        assert_eq!(eval_at("pow(n, 3)", 3.0), 27.0);
        assert_eq!(eval_at("Math.sqrt(n)", 49.0), 7.0);
        assert_eq!(eval_at("max(1, n, 3)", 2.0), 3.0);
        assert_eq!(eval_at("min(n)", 2.0), 2.0);
        assert!((eval_at("Math.PI", 0.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((eval_at("log(e)", 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn round_matches_half_up() {
        assert_eq!(eval_at("round(2.5)", 0.0), 3.0);
        assert_eq!(eval_at("round(-2.5)", 0.0), -2.0);
    }

    #[test]
    fn number_literals() {
        assert_eq!(eval_at("1e3", 0.0), 1000.0);
        assert_eq!(eval_at(".5 * n", 4.0), 2.0);
        assert_eq!(eval_at("2.", 0.0), 2.0);
    }

    #[test]
    fn runtime_arithmetic_never_fails() {
        assert!(eval_at("1/0", 0.0).is_infinite());
        assert!(eval_at("sqrt(-n)", 4.0).is_nan());
        assert!(eval_at("max(n, 0/0)", 1.0).is_nan());
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(Expr::parse(""), Err(ExprError::Empty));
        assert_eq!(Expr::parse("   "), Err(ExprError::Empty));
        assert_eq!(Expr::parse("n +"), Err(ExprError::UnexpectedEnd));
        assert_eq!(Expr::parse("(n"), Err(ExprError::UnexpectedEnd));
        assert!(matches!(
            Expr::parse("n)"),
            Err(ExprError::UnexpectedToken { pos: 1, .. })
        ));
        assert!(matches!(
            Expr::parse("n $ 2"),
            Err(ExprError::UnexpectedChar { ch: '$', pos: 2 })
        ));
        assert!(matches!(
            Expr::parse("n n"),
            Err(ExprError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn code_like_input_is_rejected() {
        assert!(Expr::parse("alert(1)").is_err());
        assert!(Expr::parse("n; while(true){}").is_err());
        assert!(Expr::parse("Math.constructor").is_err());
        assert!(Expr::parse("window.n").is_err());
    }

    #[test]
    fn arity_is_checked() {
        assert_eq!(
            Expr::parse("pow(n)"),
            Err(ExprError::WrongArity {
                name: "pow",
                expected: Arity::Exactly(2),
                found: 1,
            })
        );
        assert!(matches!(
            Expr::parse("max()"),
            Err(ExprError::WrongArity { name: "max", found: 0, .. })
        ));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let deep = format!("{}n{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(Expr::parse(&deep), Err(ExprError::TooDeep));
        let negations = format!("{}n", "-".repeat(300));
        assert_eq!(Expr::parse(&negations), Err(ExprError::TooDeep));
        let shallow = format!("{}n{}", "(".repeat(10), ")".repeat(10));
        assert_eq!(eval_at(&shallow, 3.0), 3.0);
    }

    #[test]
    fn long_flat_chains_are_rejected() {
        let sums = format!("n{}", "+n".repeat(100_000));
        assert_eq!(Expr::parse(&sums), Err(ExprError::TooDeep));
        assert!(evaluate(&sums, 1).is_nan());

        let products = format!("n{}", "*1".repeat(20_000));
        assert_eq!(Expr::parse(&products), Err(ExprError::TooDeep));
        assert!(evaluate(&products, 1).is_nan());
    }

    #[test]
    fn moderate_chains_still_evaluate() {
        let sums = format!("n{}", "+n".repeat(99));
        assert_eq!(eval_at(&sums, 2.0), 200.0);
        let products = format!("n{}", "*1".repeat(100));
        assert_eq!(eval_at(&products, 7.0), 7.0);
    }

    #[test]
    fn errors_display_readably() {
        let err = Expr::parse("foo(n)").unwrap_err();
        assert_eq!(err.to_string(), "Unknown name 'foo'");
    }
}
