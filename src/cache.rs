//! Thread-local cache of compiled f(n) expressions.
//!
//! Every recomputation evaluates the same expression text once per n, and
//! slider drags recompute with unchanged text, so the parsed tree (or the parse
//! error) is kept keyed by the exact input string.
//!
//! The cache is cleared wholesale once it holds `EXPR_CACHE_CAPACITY` entries;
//! typing an expression produces one entry per keystroke and old prefixes are
//! never looked up again.

use crate::config::EXPR_CACHE_CAPACITY;
use crate::expr::{Expr, ExprError};
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Cache value: parsed tree, or the reason the text does not parse
pub type CompiledExpr = Result<Rc<Expr>, ExprError>;

thread_local! {
    /// Thread-local to avoid synchronization overhead in WASM.
    static EXPR_CACHE: RefCell<HashMap<String, CompiledExpr>> =
        RefCell::new(HashMap::with_capacity(EXPR_CACHE_CAPACITY));
}

/// Parse `text`, reusing an earlier result for identical text.
pub fn compile(text: &str) -> CompiledExpr {
    EXPR_CACHE.with(|c| {
        if let Some(hit) = c.borrow().get(text) {
            return hit.clone();
        }

        let compiled = Expr::parse(text).map(Rc::new);
        let mut map = c.borrow_mut();
        if map.len() >= EXPR_CACHE_CAPACITY {
            debug!("Expression cache full ({} entries), clearing", map.len());
            map.clear();
        }
        map.insert(text.to_string(), compiled.clone());
        compiled
    })
}
