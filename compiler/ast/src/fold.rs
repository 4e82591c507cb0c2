//! The single structural-recursion primitive behind every transform and
//! the renderer.
//!
//! A [`Fold`] implementation supplies zero or more of `fold_expr`,
//! `fold_stmt`, `fold_sweep_stmt`, `fold_config`, `fold_sweep`; any method
//! left at its default simply descends (post-order) without changing
//! anything. The `walk_*` free functions are the generic-recursion half
//! (rebuild a node's children, structure unchanged), the `Fold` methods
//! are the node-specific-behavior half, and a transform overrides a
//! `fold_*` method by first calling the matching `walk_*` function to
//! rebuild its children, then applying its own logic to the rebuilt
//! node: descend, then apply.

use crate::config::{Config, Stmt};
use crate::expr::Expr;
use crate::sweep::{Sweep, SweepStmt};
use hyperion_errors::Result;

pub trait Fold {
    fn fold_expr(&mut self, expr: Expr) -> Result<Expr> {
        walk_expr(self, expr)
    }

    fn fold_stmt(&mut self, stmt: Stmt) -> Result<Stmt> {
        walk_stmt(self, stmt)
    }

    fn fold_sweep_stmt(&mut self, stmt: SweepStmt) -> Result<SweepStmt> {
        walk_sweep_stmt(self, stmt)
    }

    fn fold_config(&mut self, config: Config) -> Result<Config> {
        walk_config(self, config)
    }

    fn fold_sweep(&mut self, sweep: Sweep) -> Result<Sweep> {
        walk_sweep(self, sweep)
    }
}

/// Descends into every structural child of `expr`, folding each with
/// `f.fold_expr`, and rebuilds the node. Leaves (`Null`, `Bool`, `Int`,
/// `Float`, `Str`, `Macro`, `Reference`) have no children and pass
/// through unchanged.
pub fn walk_expr<F: Fold + ?Sized>(f: &mut F, expr: Expr) -> Result<Expr> {
    Ok(match expr {
        Expr::Unary(op, operand) => Expr::Unary(op, Box::new(f.fold_expr(*operand)?)),
        Expr::Binary(left, op, right) => {
            let left = f.fold_expr(*left)?;
            let right = f.fold_expr(*right)?;
            Expr::Binary(Box::new(left), op, Box::new(right))
        }
        Expr::Paren(inner) => Expr::Paren(Box::new(f.fold_expr(*inner)?)),
        Expr::Call(id, args) => {
            let args =
                args.into_iter().map(|(k, v)| Ok((k, f.fold_expr(v)?))).collect::<Result<Vec<_>>>()?;
            Expr::Call(id, args)
        }
        Expr::Dict(items) => {
            let items = items
                .into_iter()
                .map(|(k, v)| Ok((f.fold_expr(k)?, f.fold_expr(v)?)))
                .collect::<Result<Vec<_>>>()?;
            Expr::Dict(items)
        }
        Expr::List(items) => {
            Expr::List(items.into_iter().map(|v| f.fold_expr(v)).collect::<Result<Vec<_>>>()?)
        }
        Expr::Tuple(items) => {
            Expr::Tuple(items.into_iter().map(|v| f.fold_expr(v)).collect::<Result<Vec<_>>>()?)
        }
        leaf @ (Expr::Null
        | Expr::Bool(_)
        | Expr::Int(_)
        | Expr::Float(_)
        | Expr::Str(_)
        | Expr::Macro(_)
        | Expr::Reference(_)) => leaf,
    })
}

pub fn walk_stmt<F: Fold + ?Sized>(f: &mut F, stmt: Stmt) -> Result<Stmt> {
    Ok(match stmt {
        Stmt::Import(ns) => Stmt::Import(ns),
        Stmt::Include(path) => Stmt::Include(path),
        Stmt::Binding(id, expr) => Stmt::Binding(id, f.fold_expr(expr)?),
        Stmt::With(ns, stmts) => {
            let stmts = stmts.into_iter().map(|s| f.fold_stmt(s)).collect::<Result<Vec<_>>>()?;
            Stmt::With(ns, stmts)
        }
    })
}

pub fn walk_sweep_stmt<F: Fold + ?Sized>(f: &mut F, stmt: SweepStmt) -> Result<SweepStmt> {
    Ok(match stmt {
        SweepStmt::Import(ns) => SweepStmt::Import(ns),
        SweepStmt::Include(path) => SweepStmt::Include(path),
        SweepStmt::Binding(id, expr) => SweepStmt::Binding(id, f.fold_expr(expr)?),
        SweepStmt::With(ns, stmts) => {
            let stmts = stmts.into_iter().map(|s| f.fold_sweep_stmt(s)).collect::<Result<Vec<_>>>()?;
            SweepStmt::With(ns, stmts)
        }
        SweepStmt::All(id, exprs) => {
            let exprs = exprs.into_iter().map(|e| f.fold_expr(e)).collect::<Result<Vec<_>>>()?;
            SweepStmt::All(id, exprs)
        }
        SweepStmt::Product(stmts) => {
            SweepStmt::Product(stmts.into_iter().map(|s| f.fold_sweep_stmt(s)).collect::<Result<Vec<_>>>()?)
        }
        SweepStmt::Union(stmts) => {
            SweepStmt::Union(stmts.into_iter().map(|s| f.fold_sweep_stmt(s)).collect::<Result<Vec<_>>>()?)
        }
        SweepStmt::Table(header, rows) => {
            let rows = rows
                .into_iter()
                .map(|row| {
                    let exprs = row.0.into_iter().map(|e| f.fold_expr(e)).collect::<Result<Vec<_>>>()?;
                    Ok(crate::sweep::Row(exprs))
                })
                .collect::<Result<Vec<_>>>()?;
            SweepStmt::Table(header, rows)
        }
    })
}

pub fn walk_config<F: Fold + ?Sized>(f: &mut F, config: Config) -> Result<Config> {
    let stmts = config.stmts.into_iter().map(|s| f.fold_stmt(s)).collect::<Result<Vec<_>>>()?;
    Ok(Config { stmts })
}

pub fn walk_sweep<F: Fold + ?Sized>(f: &mut F, sweep: Sweep) -> Result<Sweep> {
    let stmts = sweep.stmts.into_iter().map(|s| f.fold_sweep_stmt(s)).collect::<Result<Vec<_>>>()?;
    Ok(Sweep { stmts })
}

/// Strips every [`Expr::Paren`] node, which exists only to short-circuit
/// the parser's disambiguation predicate and never survives
/// past this point in any public API.
struct ParenStripper;

impl Fold for ParenStripper {
    fn fold_expr(&mut self, expr: Expr) -> Result<Expr> {
        let expr = walk_expr(self, expr)?;
        Ok(match expr {
            Expr::Paren(inner) => *inner,
            other => other,
        })
    }
}

pub fn remove_parentheses_config(config: Config) -> Result<Config> {
    ParenStripper.fold_config(config)
}

pub fn remove_parentheses_sweep(sweep: Sweep) -> Result<Sweep> {
    ParenStripper.fold_sweep(sweep)
}

/// Used by `parse_value`, which parses a single bare expression rather
/// than a whole config or sweep.
pub fn remove_parentheses_expr(expr: Expr) -> Result<Expr> {
    ParenStripper.fold_expr(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::BinaryOp;

    struct Identity;
    impl Fold for Identity {}

    #[test]
    fn default_fold_is_identity() {
        let expr = Expr::binary(Expr::Int(1), BinaryOp::Add, Expr::Paren(Box::new(Expr::Int(2))));
        let folded = Identity.fold_expr(expr.clone()).unwrap();
        assert_eq!(expr, folded);
    }

    #[test]
    fn paren_stripper_removes_nested_parens() {
        let expr = Expr::binary(
            Expr::Paren(Box::new(Expr::Int(1))),
            BinaryOp::Add,
            Expr::Paren(Box::new(Expr::binary(Expr::Int(2), BinaryOp::Mul, Expr::Int(3)))),
        );
        let stripped = ParenStripper.fold_expr(expr).unwrap();
        assert_eq!(
            stripped,
            Expr::binary(Expr::Int(1), BinaryOp::Add, Expr::binary(Expr::Int(2), BinaryOp::Mul, Expr::Int(3)))
        );
    }
}
