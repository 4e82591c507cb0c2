use crate::expr::Expr;
use crate::ident::{Identifier, Namespace};

/// One statement in a [`Config`].
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Import(Namespace),
    Include(String),
    Binding(Identifier, Expr),
    /// Only survives until `flatten_withs` runs.
    With(Namespace, Vec<Stmt>),
}

/// A parsed, pre-transform configuration: an ordered sequence of
/// bindings, imports, includes, and (until flattened) `with` blocks.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Config {
    pub stmts: Vec<Stmt>,
}

impl Config {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}
