use hyperion_ast::{Sweep, SweepStmt};
use hyperion_errors::Result;

/// Normalises every `Binding` inside a sweep into a singleton `All`
///, so the enumerator only ever has to handle
/// `All`/`Product`/`Union`/`Table` uniformly.
///
/// Inside a `Union`, a bare `Binding` does not mean "one of the
/// alternatives" the way every other union child does — it is a
/// constant that should apply to *every* branch. Such bindings are
/// factored out into an enclosing `Product` alongside a `Union` of
/// whatever non-binding children remain: `union: [a = 1,
/// <alts>]` becomes `product: [a: [1], union: [<alts>]]`. If the union
/// turns out to have no remaining alternatives after extracting its
/// bindings, the wrapping `Union([])` is dropped rather than emitted —
/// `Union()`'s identity is the empty sequence, and `product:
/// [a: [1], union: []]` would silently zero out the whole product,
/// which is not what a union consisting only of bindings means.
#[tracing::instrument(skip_all)]
pub fn bindings_to_singletons(sweep: Sweep) -> Result<Sweep> {
    Ok(Sweep { stmts: transform_block(sweep.stmts) })
}

fn transform_block(stmts: Vec<SweepStmt>) -> Vec<SweepStmt> {
    stmts.into_iter().map(transform_stmt).collect()
}

fn transform_stmt(stmt: SweepStmt) -> SweepStmt {
    match stmt {
        SweepStmt::Binding(id, expr) => SweepStmt::All(id, vec![expr]),
        SweepStmt::With(ns, stmts) => SweepStmt::With(ns, transform_block(stmts)),
        SweepStmt::Product(stmts) => SweepStmt::Product(transform_block(stmts)),
        SweepStmt::Union(stmts) => transform_union(stmts),
        other => other,
    }
}

fn transform_union(stmts: Vec<SweepStmt>) -> SweepStmt {
    let mut singletons = Vec::new();
    let mut rest = Vec::new();
    for stmt in stmts {
        match stmt {
            SweepStmt::Binding(id, expr) => singletons.push(SweepStmt::All(id, vec![expr])),
            other => rest.push(transform_stmt(other)),
        }
    }
    if singletons.is_empty() {
        SweepStmt::Union(rest)
    } else if rest.is_empty() {
        SweepStmt::Product(singletons)
    } else {
        let mut product_stmts = singletons;
        product_stmts.push(SweepStmt::Union(rest));
        SweepStmt::Product(product_stmts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperion_ast::{Expr, Identifier};

    #[test]
    fn binding_becomes_singleton_all() {
        let sweep = Sweep::new(vec![SweepStmt::Binding(Identifier::bare("lr"), Expr::Float(0.1))]);
        let out = bindings_to_singletons(sweep).unwrap();
        assert_eq!(out.stmts, vec![SweepStmt::All(Identifier::bare("lr"), vec![Expr::Float(0.1)])]);
    }

    #[test]
    fn union_with_bindings_factors_into_product() {
        let sweep = Sweep::new(vec![SweepStmt::Union(vec![
            SweepStmt::Binding(Identifier::bare("a"), Expr::Int(1)),
            SweepStmt::All(Identifier::bare("b"), vec![Expr::Int(2), Expr::Int(3)]),
        ])]);
        let out = bindings_to_singletons(sweep).unwrap();
        match &out.stmts[0] {
            SweepStmt::Product(stmts) => {
                assert_eq!(stmts[0], SweepStmt::All(Identifier::bare("a"), vec![Expr::Int(1)]));
                match &stmts[1] {
                    SweepStmt::Union(rest) => assert_eq!(rest.len(), 1),
                    other => panic!("expected a nested union, got {other:?}"),
                }
            }
            other => panic!("expected a product, got {other:?}"),
        }
    }

    #[test]
    fn union_without_bindings_is_left_as_a_union() {
        let sweep = Sweep::new(vec![SweepStmt::Union(vec![
            SweepStmt::All(Identifier::bare("a"), vec![Expr::Int(1)]),
            SweepStmt::All(Identifier::bare("a"), vec![Expr::Int(2)]),
        ])]);
        let out = bindings_to_singletons(sweep.clone()).unwrap();
        assert_eq!(out, sweep);
    }

    #[test]
    fn no_bindings_survive_after_the_pass() {
        let sweep = Sweep::new(vec![SweepStmt::Product(vec![
            SweepStmt::Binding(Identifier::bare("a"), Expr::Int(1)),
            SweepStmt::With(hyperion_ast::Namespace(vec!["m".into()]), vec![SweepStmt::Binding(Identifier::bare("b"), Expr::Int(2))]),
        ])]);
        let out = bindings_to_singletons(sweep).unwrap();
        fn has_binding(stmts: &[SweepStmt]) -> bool {
            stmts.iter().any(|s| match s {
                SweepStmt::Binding(_, _) => true,
                SweepStmt::With(_, s) | SweepStmt::Product(s) | SweepStmt::Union(s) => has_binding(s),
                _ => false,
            })
        }
        assert!(!has_binding(&out.stmts));
    }

    #[test]
    fn is_idempotent() {
        let sweep = Sweep::new(vec![SweepStmt::Union(vec![
            SweepStmt::Binding(Identifier::bare("a"), Expr::Int(1)),
            SweepStmt::All(Identifier::bare("b"), vec![Expr::Int(2)]),
        ])]);
        let once = bindings_to_singletons(sweep).unwrap();
        let twice = bindings_to_singletons(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
