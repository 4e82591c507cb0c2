use hyperion_ast::{walk_expr, Argument, Config, Expr, Fold, Identifier, Namespace, Scope, Sweep};
use hyperion_errors::Result;

/// The stable external name of one of the runtime shim's two evaluators
///: `_h.u` for unary, `_h.b` for binary. Surface
/// form `_h._u` — namespace `_h`, name `_u`.
fn shim_identifier(name: &str) -> Identifier {
    Identifier::new(Scope::empty(), Namespace(vec!["_h".to_string()]), name)
}

/// Rewrites every remaining `Unary`/`Binary` node into a `Call` of the
/// runtime shim. By the time this pass runs,
/// `partial_eval` has already folded every operator application whose
/// operands were fully static; what remains necessarily involves a
/// `Reference`, `Macro`, or `Call` operand whose value is only known
/// once the base-config library resolves it.
struct ExpressionsToCalls;

impl Fold for ExpressionsToCalls {
    fn fold_expr(&mut self, expr: Expr) -> Result<Expr> {
        let expr = walk_expr(self, expr)?;
        Ok(match expr {
            Expr::Unary(op, operand) => {
                let args: Vec<Argument> = vec![("o".to_string(), Expr::Str(op.tag().to_string())), ("v".to_string(), *operand)];
                Expr::Call(shim_identifier("_u"), args)
            }
            Expr::Binary(left, op, right) => {
                let args: Vec<Argument> = vec![
                    ("l".to_string(), *left),
                    ("o".to_string(), Expr::Str(op.tag().to_string())),
                    ("r".to_string(), *right),
                ];
                Expr::Call(shim_identifier("_b"), args)
            }
            other => other,
        })
    }
}

#[tracing::instrument(skip_all)]
pub fn expressions_to_calls_config(config: Config) -> Result<Config> {
    ExpressionsToCalls.fold_config(config)
}

#[tracing::instrument(skip_all)]
pub fn expressions_to_calls_sweep(sweep: Sweep) -> Result<Sweep> {
    ExpressionsToCalls.fold_sweep(sweep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperion_ast::{BinaryOp, Stmt, UnaryOp};

    #[test]
    fn lowers_binary_op_to_shim_call() {
        let config = Config::new(vec![Stmt::Binding(
            Identifier::bare("lr"),
            Expr::binary(Expr::Reference(Identifier::bare("base")), BinaryOp::Add, Expr::Int(1)),
        )]);
        let lowered = expressions_to_calls_config(config).unwrap();
        match &lowered.stmts[0] {
            Stmt::Binding(_, Expr::Call(id, args)) => {
                assert_eq!(id.namespace.0, vec!["_h".to_string()]);
                assert_eq!(id.name, "_b");
                assert_eq!(args.len(), 3);
                assert_eq!(args[1], ("o".to_string(), Expr::Str("add".to_string())));
            }
            other => panic!("expected a lowered call, got {other:?}"),
        }
    }

    #[test]
    fn lowers_unary_op_to_shim_call() {
        let config =
            Config::new(vec![Stmt::Binding(Identifier::bare("x"), Expr::unary(UnaryOp::Neg, Expr::Reference(Identifier::bare("base"))))]);
        let lowered = expressions_to_calls_config(config).unwrap();
        match &lowered.stmts[0] {
            Stmt::Binding(_, Expr::Call(id, args)) => {
                assert_eq!(id.name, "_u");
                assert_eq!(args, &vec![
                    ("o".to_string(), Expr::Str("neg".to_string())),
                    ("v".to_string(), Expr::Reference(Identifier::bare("base"))),
                ]);
            }
            other => panic!("expected a lowered call, got {other:?}"),
        }
    }

    #[test]
    fn is_idempotent() {
        let config = Config::new(vec![Stmt::Binding(
            Identifier::bare("lr"),
            Expr::binary(Expr::Reference(Identifier::bare("base")), BinaryOp::Add, Expr::Int(1)),
        )]);
        let once = expressions_to_calls_config(config).unwrap();
        let twice = expressions_to_calls_config(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
