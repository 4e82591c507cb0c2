use hyperion_ast::{walk_expr, Config, Expr, Fold, Sweep};
use hyperion_errors::Result;
use hyperion_eval::{eval_binary, eval_unary, Value};

/// Constant-folds every `Unary`/`Binary` node whose operands are all
/// static literals: descend first (`walk_expr`), then fold the rebuilt
/// node if its immediate children are now literals. The single
/// exception to pass idempotence lives here: a subtree with a
/// non-static operand is left untouched rather than erroring, so only a
/// genuinely evaluable-but-failing expression (division by zero,
/// overflow, ...) raises.
struct PartialEval;

impl Fold for PartialEval {
    fn fold_expr(&mut self, expr: Expr) -> Result<Expr> {
        let expr = walk_expr(self, expr)?;
        Ok(match expr {
            Expr::Unary(op, operand) if operand.is_static_literal() => {
                let value = Value::try_from(&*operand).expect("is_static_literal guarantees a literal");
                eval_unary(op, &value)?.into()
            }
            Expr::Binary(left, op, right) if left.is_static_literal() && right.is_static_literal() => {
                let lhs = Value::try_from(&*left).expect("is_static_literal guarantees a literal");
                let rhs = Value::try_from(&*right).expect("is_static_literal guarantees a literal");
                eval_binary(op, &lhs, &rhs)?.into()
            }
            other => other,
        })
    }
}

#[tracing::instrument(skip_all)]
pub fn partial_eval_config(config: Config) -> Result<Config> {
    PartialEval.fold_config(config)
}

#[tracing::instrument(skip_all)]
pub fn partial_eval_sweep(sweep: Sweep) -> Result<Sweep> {
    PartialEval.fold_sweep(sweep)
}

/// `partial_eval` restricted to a single standalone expression, used by
/// the `parse_value` entry point rather than a full config
/// or sweep.
#[tracing::instrument(skip_all)]
pub fn partial_eval_expr(expr: Expr) -> Result<Expr> {
    PartialEval.fold_expr(expr)
}
