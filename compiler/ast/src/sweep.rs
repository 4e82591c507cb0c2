use crate::expr::Expr;
use crate::ident::{Identifier, Namespace};

/// The identifier list naming a [`Table`]'s columns: `table a, b:`.
#[derive(Clone, Debug, PartialEq)]
pub struct Header(pub Vec<Identifier>);

/// One data row of a [`Table`]: `1, 10`. The enumerator and
/// `validate_sweep` both enforce `row.0.len() == header.0.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Row(pub Vec<Expr>);

/// One statement inside a [`Sweep`] — every [`crate::config::Stmt`] kind,
/// plus the three sweep-specific block forms.
#[derive(Clone, Debug, PartialEq)]
pub enum SweepStmt {
    Import(Namespace),
    Include(String),
    Binding(Identifier, Expr),
    With(Namespace, Vec<SweepStmt>),
    /// `ns.name: [e1, e2, ...]`. `exprs` is non-empty.
    All(Identifier, Vec<Expr>),
    /// `product:` block.
    Product(Vec<SweepStmt>),
    /// `union:` block.
    Union(Vec<SweepStmt>),
    /// `table a, b:` block. Has at least one row;
    /// per-row width is checked by `validate_sweep`, not enforced by
    /// this type, since the parser must be able to represent an invalid
    /// (uneven) table long enough for `validate_sweep` to reject it with
    /// a `ValidationError` rather than panicking in the parser.
    Table(Header, Vec<Row>),
}

/// A parsed, pre-transform sweep tree.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Sweep {
    pub stmts: Vec<SweepStmt>,
}

impl Sweep {
    pub fn new(stmts: Vec<SweepStmt>) -> Self {
        Self { stmts }
    }
}
