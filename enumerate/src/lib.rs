//! Realizes the configs a sweep describes: `All`/`Product`/
//! `Union`/`Table` become, bottom-up, a lazy sequence of
//! `IndexMap<Identifier, Expr>` dicts, right-biased-merged on key
//! conflict, and finally serialized into [`Config`]s with the sweep's
//! prelude re-prepended to each one.
//!
//! Built as `itertools`-driven iterator adapters instead of a
//! hand-rolled nested loop. A `Product`'s children are each collected
//! into their own base sequence before `itertools::multi_cartesian_product`
//! combines them: combining lazily re-drives each child from a fixed
//! base rather than materializing the full combination count up front,
//! which is the part of "lazy sequence" that actually matters for a
//! sweep with a handful of large `All` blocks multiplied together.

use hyperion_ast::{Config, Expr, Identifier, Stmt, Sweep, SweepStmt};
use hyperion_errors::{InternalError, Result};
use hyperion_passes::remove_prelude;
use indexmap::IndexMap;
use itertools::Itertools;

type Dict = IndexMap<Identifier, Expr>;

/// `generate_configs(sweep) -> lazy sequence of Config`.
/// The sweep's own top-level statement list is treated as an implicit
/// `Product`, after its prelude (`Import`/`Include`) is peeled off and
/// re-prepended to every produced `Config`.
#[tracing::instrument(skip_all)]
pub fn generate_configs(sweep: Sweep) -> Result<Box<dyn Iterator<Item = Config>>> {
    let (body, prelude) = remove_prelude(sweep);
    let prelude: Vec<Stmt> = prelude
        .into_iter()
        .map(|stmt| match stmt {
            SweepStmt::Import(ns) => Stmt::Import(ns),
            SweepStmt::Include(path) => Stmt::Include(path),
            other => unreachable!("remove_prelude only yields Import/Include, got {other:?}"),
        })
        .collect();
    let dicts = enumerate_product(body.stmts)?;
    Ok(Box::new(dicts.map(move |dict| {
        let mut stmts = prelude.clone();
        stmts.extend(dict.into_iter().map(|(id, expr)| Stmt::Binding(id, expr)));
        Config::new(stmts)
    })))
}

fn enumerate_stmt(stmt: SweepStmt) -> Result<Box<dyn Iterator<Item = Dict>>> {
    match stmt {
        SweepStmt::All(id, exprs) => Ok(Box::new(exprs.into_iter().map(move |expr| {
            let mut dict = Dict::new();
            dict.insert(id.clone(), expr);
            dict
        }))),
        SweepStmt::Product(stmts) => enumerate_product(stmts),
        SweepStmt::Union(stmts) => enumerate_union(stmts),
        SweepStmt::Table(header, rows) => Ok(Box::new(
            rows.into_iter().map(move |row| header.0.iter().cloned().zip(row.0).collect()),
        )),
        other @ (SweepStmt::Binding(..) | SweepStmt::With(..) | SweepStmt::Import(..) | SweepStmt::Include(..)) => {
            Err(InternalError::new(format!("sweep enumerator reached a statement the transform pipeline should have eliminated: {other:?}")).into())
        }
    }
}

/// `Product()` = singleton `{}`; otherwise the
/// right-biased-merged Cartesian product of every child's own sequence,
/// "outer loop = first child".
fn enumerate_product(stmts: Vec<SweepStmt>) -> Result<Box<dyn Iterator<Item = Dict>>> {
    if stmts.is_empty() {
        return Ok(Box::new(std::iter::once(Dict::new())));
    }
    let bases: Vec<Vec<Dict>> = stmts.into_iter().map(|stmt| enumerate_stmt(stmt).map(Iterator::collect)).collect::<Result<_>>()?;
    Ok(Box::new(bases.into_iter().multi_cartesian_product().map(|combo| combo.into_iter().fold(Dict::new(), |mut acc, next| {
        acc.extend(next);
        acc
    }))))
}

/// `Union()` = empty; otherwise the
/// concatenation of every child's own sequence, in order.
fn enumerate_union(stmts: Vec<SweepStmt>) -> Result<Box<dyn Iterator<Item = Dict>>> {
    let children: Vec<Box<dyn Iterator<Item = Dict>>> = stmts.into_iter().map(enumerate_stmt).collect::<Result<_>>()?;
    Ok(Box::new(children.into_iter().flatten()))
}
