use hyperion_ast::{Sweep, SweepStmt};

/// Partitions a sweep's top-level statements into the prelude
/// (`Import`/`Include`, in original order) and everything else (spec
/// §4.3.6). Only the top-level statement list is partitioned — a
/// prelude nested inside a `Product`/`Union`/`With` stays where it is,
/// since only the top level is ever re-prepended by the enumerator.
#[tracing::instrument(skip_all)]
pub fn remove_prelude(sweep: Sweep) -> (Sweep, Vec<SweepStmt>) {
    let mut prelude = Vec::new();
    let mut rest = Vec::new();
    for stmt in sweep.stmts {
        match stmt {
            SweepStmt::Import(_) | SweepStmt::Include(_) => prelude.push(stmt),
            other => rest.push(other),
        }
    }
    (Sweep { stmts: rest }, prelude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperion_ast::{Expr, Identifier, Namespace};

    #[test]
    fn separates_imports_and_includes_from_the_rest() {
        let sweep = Sweep::new(vec![
            SweepStmt::Import(Namespace(vec!["a".into()])),
            SweepStmt::Include("path.hyp".into()),
            SweepStmt::Binding(Identifier::bare("x"), Expr::Int(1)),
        ]);
        let (rest, prelude) = remove_prelude(sweep);
        assert_eq!(prelude.len(), 2);
        assert_eq!(rest.stmts.len(), 1);
    }

    #[test]
    fn preserves_prelude_order() {
        let sweep = Sweep::new(vec![
            SweepStmt::Import(Namespace(vec!["a".into()])),
            SweepStmt::Import(Namespace(vec!["b".into()])),
        ]);
        let (_, prelude) = remove_prelude(sweep);
        assert_eq!(prelude, vec![SweepStmt::Import(Namespace(vec!["a".into()])), SweepStmt::Import(Namespace(vec!["b".into()]))]);
    }

    #[test]
    fn is_idempotent_on_the_filtered_sweep() {
        let sweep = Sweep::new(vec![SweepStmt::Import(Namespace(vec!["a".into()])), SweepStmt::Binding(Identifier::bare("x"), Expr::Int(1))]);
        let (once, _) = remove_prelude(sweep);
        let (twice, second_prelude) = remove_prelude(once.clone());
        assert_eq!(once, twice);
        assert!(second_prelude.is_empty());
    }
}
