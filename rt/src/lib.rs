//! The two evaluators a lowered expression calls back into at
//! base-config-parse time: `_h._u(o, v)` and `_h._b(l, o, r)`,
//! the stable external names `expressions_to_calls` bakes into every
//! lowered `UnaryOp`/`BinaryOp`.
//!
//! `eval_unary_op`/`eval_binary_op` are thin wrappers around the same
//! evaluator `partial_eval` uses. A real downstream dependency-injection
//! library is out of scope here, so `register` populates an in-process
//! `HashMap<Identifier, ShimFn>` as the stand-in the thin external glue
//! would otherwise wire into that library, the way a one-time
//! core-function table gets built and installed once per process.
//! `register` is `Once`-guarded so re-registration is always safe.

use hyperion_ast::{BinaryOp, Identifier, Namespace, Scope, UnaryOp};
use hyperion_errors::{EvalError, Result};
use hyperion_eval::Value;
use std::collections::HashMap;
use std::sync::{Once, OnceLock};

/// Mirrors `expressions_to_calls`'s private helper of the same shape:
/// `Identifier` equality/hashing ignores `Span`, so this produces an
/// identifier equal to the one a lowered `Call` actually carries.
fn shim_identifier(name: &str) -> Identifier {
    Identifier::new(Scope::empty(), Namespace(vec!["_h".to_string()]), name)
}

/// One entry in the shim registry: a callback taking the lowered call's
/// named arguments (in the order `expressions_to_calls` emits them) and
/// returning the evaluated [`Value`].
type ShimFn = fn(&[(String, Value)]) -> Result<Value>;

static REGISTERED: Once = Once::new();
static REGISTRY: OnceLock<HashMap<Identifier, ShimFn>> = OnceLock::new();

fn call_unary(args: &[(String, Value)]) -> Result<Value> {
    let o = arg_str(args, "o")?;
    let v = arg_value(args, "v")?;
    eval_unary_shim(o, v)
}

fn call_binary(args: &[(String, Value)]) -> Result<Value> {
    let l = arg_value(args, "l")?;
    let o = arg_str(args, "o")?;
    let r = arg_value(args, "r")?;
    eval_binary_shim(l, o, r)
}

fn arg_value(args: &[(String, Value)], name: &str) -> Result<Value> {
    args.iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.clone())
        .ok_or_else(|| EvalError::UnknownOperator(format!("missing argument {name:?}")).into())
}

fn arg_str<'a>(args: &'a [(String, Value)], name: &str) -> Result<&'a str> {
    match args.iter().find(|(n, _)| n == name) {
        Some((_, Value::Str(s))) => Ok(s.as_str()),
        Some((_, other)) => Err(EvalError::TypeMismatch {
            op: format!("argument {name:?}"),
            operands: format!("a string, got {}", other.type_name()),
        }
        .into()),
        None => Err(EvalError::UnknownOperator(format!("missing argument {name:?}")).into()),
    }
}

/// Registers `_h._u`/`_h._b` into the in-process registry. Safe to call
/// more than once — only the first call has any effect.
#[tracing::instrument]
pub fn register() {
    REGISTERED.call_once(|| {
        let mut registry = HashMap::new();
        registry.insert(shim_identifier("_u"), call_unary as ShimFn);
        registry.insert(shim_identifier("_b"), call_binary as ShimFn);
        REGISTRY.set(registry).expect("REGISTRY is only ever written inside Once::call_once, so this set() cannot race");
    });
}

/// Whether [`register`] has run at least once.
pub fn is_registered() -> bool {
    REGISTERED.is_completed()
}

/// The stable external names [`register`] has made available. Empty
/// until [`register`] has been called.
pub fn registrations() -> Vec<&'static Identifier> {
    REGISTRY.get().map(|r| r.keys().collect()).unwrap_or_default()
}

/// Looks `id` up in the shim registry and evaluates it against the
/// lowered call's already-resolved named arguments. This is the entry
/// point a base-config library calls back into for every `Call` node
/// that survived lowering — the two it will ever see are
/// `_h._u`/`_h._b`, but any identifier is accepted so an unregistered
/// name surfaces as a proper error rather than a panic.
#[tracing::instrument(skip(args))]
pub fn eval_identifier_call(id: &Identifier, args: &[(String, Value)]) -> Result<Value> {
    register();
    match REGISTRY.get().and_then(|r| r.get(id)) {
        Some(shim) => shim(args),
        None => Err(EvalError::UnknownOperator(format!("{}.{}", id.namespace.0.join("."), id.name)).into()),
    }
}

/// `_h._u(o, v) = eval_unary_op(o, v)`. `o` is the tag stored
/// in the lowered call's companion binding (e.g. `"neg"`); unknown tags
/// are an `EvalError`, not a panic, since `o` ultimately comes from
/// parsed user input by way of a companion binding.
#[tracing::instrument(skip(v))]
pub fn eval_unary_shim(o: &str, v: Value) -> Result<Value> {
    let op = UnaryOp::from_tag(o).ok_or_else(|| EvalError::UnknownOperator(o.to_string()))?;
    hyperion_eval::eval_unary(op, &v)
}

/// `_h._b(l, o, r) = eval_binary_op(l, o, r)`.
#[tracing::instrument(skip(l, r))]
pub fn eval_binary_shim(l: Value, o: &str, r: Value) -> Result<Value> {
    let op = BinaryOp::from_tag(o).ok_or_else(|| EvalError::UnknownOperator(o.to_string()))?;
    hyperion_eval::eval_binary(op, &l, &r)
}
