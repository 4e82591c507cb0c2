use hyperion_ast::{Config, Header, Identifier, Namespace, Row, Stmt, Sweep, SweepStmt};
use hyperion_errors::Result;

/// Eliminates every `With(namespace, statements)` by prefixing its
/// namespace onto every enclosed binding target and splicing the
/// rewritten statements into the parent block. This is a
/// list-level splice, not a node-for-node catamorphism — one `With`
/// statement expands into zero or more sibling statements — so it is
/// written as explicit recursion over `Vec<Stmt>`/`Vec<SweepStmt>`
/// rather than as a `Fold` impl (the `Fold` trait's `fold_stmt` can only
/// replace one statement with exactly one statement).
///
/// References and calls inside expressions are left untouched per spec
/// §4.3.4 — they name configurables, not binding targets.
fn prefixed(id: Identifier, prefix: &Namespace) -> Identifier {
    if prefix.is_empty() {
        return id;
    }
    id.with_namespace(id.namespace.prefixed(prefix))
}

fn flatten_config_stmts(stmts: Vec<Stmt>, prefix: &Namespace) -> Vec<Stmt> {
    let mut out = Vec::with_capacity(stmts.len());
    for stmt in stmts {
        match stmt {
            Stmt::With(ns, inner) => {
                let combined = ns.prefixed(prefix);
                out.extend(flatten_config_stmts(inner, &combined));
            }
            Stmt::Binding(id, expr) => out.push(Stmt::Binding(prefixed(id, prefix), expr)),
            other => out.push(other),
        }
    }
    out
}

fn flatten_sweep_stmts(stmts: Vec<SweepStmt>, prefix: &Namespace) -> Vec<SweepStmt> {
    let mut out = Vec::with_capacity(stmts.len());
    for stmt in stmts {
        match stmt {
            SweepStmt::With(ns, inner) => {
                let combined = ns.prefixed(prefix);
                out.extend(flatten_sweep_stmts(inner, &combined));
            }
            SweepStmt::Binding(id, expr) => out.push(SweepStmt::Binding(prefixed(id, prefix), expr)),
            SweepStmt::All(id, exprs) => out.push(SweepStmt::All(prefixed(id, prefix), exprs)),
            SweepStmt::Product(inner) => out.push(SweepStmt::Product(flatten_sweep_stmts(inner, prefix))),
            SweepStmt::Union(inner) => out.push(SweepStmt::Union(flatten_sweep_stmts(inner, prefix))),
            SweepStmt::Table(header, rows) => {
                // Rows carry only expressions, not identifiers, so only
                // the header's column names need prefixing.
                let header = Header(header.0.into_iter().map(|id| prefixed(id, prefix)).collect());
                out.push(SweepStmt::Table(header, rows));
            }
            other => out.push(other),
        }
    }
    out
}

#[tracing::instrument(skip_all)]
pub fn flatten_withs_config(config: Config) -> Result<Config> {
    Ok(Config { stmts: flatten_config_stmts(config.stmts, &Namespace::empty()) })
}

#[tracing::instrument(skip_all)]
pub fn flatten_withs_sweep(sweep: Sweep) -> Result<Sweep> {
    Ok(Sweep { stmts: flatten_sweep_stmts(sweep.stmts, &Namespace::empty()) })
}
