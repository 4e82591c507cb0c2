use hyperion_ast::{walk_expr, Config, Expr, Fold, Identifier, Stmt, Sweep, SweepStmt};
use hyperion_errors::Result;

/// Lowers every `Call` with a non-empty argument list into an
/// argumentless reference plus a run of synthetic `Binding`s, one per
/// original argument. The fresh-name counter and the accumulated
/// synthetic bindings are threaded through this single struct for the
/// lifetime of one `fold_config`/`fold_sweep` call.
struct CallsToEvaluatedReferences {
    counter: usize,
    extra: Vec<(Identifier, Expr)>,
}

impl CallsToEvaluatedReferences {
    fn new() -> Self {
        Self { counter: 0, extra: Vec::new() }
    }

    fn fresh_scope_segment(&mut self) -> String {
        let segment = format!("_{}", self.counter);
        self.counter += 1;
        segment
    }
}

impl Fold for CallsToEvaluatedReferences {
    fn fold_expr(&mut self, expr: Expr) -> Result<Expr> {
        let expr = walk_expr(self, expr)?;
        Ok(match expr {
            Expr::Call(id, args) if !args.is_empty() => {
                let segment = self.fresh_scope_segment();
                let lowered_id = id.with_scope(id.scope.appended(segment));
                for (name, value) in args {
                    let target = Identifier::new(lowered_id.scope.clone(), lowered_id.namespace.appended(lowered_id.name.clone()), name);
                    self.extra.push((target, value));
                }
                Expr::Call(lowered_id, Vec::new())
            }
            other => other,
        })
    }
}

#[tracing::instrument(skip_all)]
pub fn calls_to_evaluated_references_config(config: Config) -> Result<Config> {
    let mut pass = CallsToEvaluatedReferences::new();
    let mut config = pass.fold_config(config)?;
    config.stmts.extend(pass.extra.into_iter().map(|(id, value)| Stmt::Binding(id, value)));
    Ok(config)
}

#[tracing::instrument(skip_all)]
pub fn calls_to_evaluated_references_sweep(sweep: Sweep) -> Result<Sweep> {
    let mut pass = CallsToEvaluatedReferences::new();
    let mut sweep = pass.fold_sweep(sweep)?;
    sweep.stmts.extend(pass.extra.into_iter().map(|(id, value)| SweepStmt::Binding(id, value)));
    Ok(sweep)
}
