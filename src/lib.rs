//! The thin external glue: five entry points over the
//! `compiler/*`, `enumerate`, `render`, and `rt` crates underneath —
//! parse, preprocess, render, with file reading factored out into a
//! one-line wrapper.
//!
//! `parse_config_file`/`parse_sweep_file` are the only two functions in
//! this crate that touch the filesystem (`std::fs::read_to_string`, no
//! retry, no encoding sniffing — environment/file I/O wrappers are
//! someone else's job).

use hyperion_ast::{BinaryOp, Expr, UnaryOp};
use hyperion_errors::{Error, Result, ValidationError};
use hyperion_eval::Value;
use hyperion_passes::{flatten_withs_config, flatten_withs_sweep, partial_eval_expr, preprocess_config, preprocess_sweep};
use std::path::Path;

/// Parses `text` as a single config and renders it to base-config text
///. `with` blocks are part of the plain `config` grammar
/// too, so `flatten_withs_config` runs ahead of
/// `preprocess_config` here exactly as `flatten_withs_sweep` does ahead
/// of `preprocess_sweep` below.
#[tracing::instrument(skip_all)]
pub fn parse_config(text: &str) -> Result<String> {
    let config = hyperion_parser::parse_config(text)?;
    let config = flatten_withs_config(config)?;
    let config = preprocess_config(config)?;
    Ok(hyperion_render::render_config(&config))
}

/// Reads `path` and delegates to [`parse_config`].
#[tracing::instrument(skip(path))]
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::from(hyperion_errors::IoError::new(path.display().to_string(), e)))?;
    parse_config(&text)
}

/// Parses `text` as a sweep and returns the lazy sequence of rendered
/// base-config texts it describes: one rendered
/// config per element of [`hyperion_enumerate::generate_configs`]'s
/// output.
#[tracing::instrument(skip_all)]
pub fn parse_sweep(text: &str) -> Result<Box<dyn Iterator<Item = String>>> {
    let sweep = hyperion_parser::parse_sweep(text)?;
    let sweep = flatten_withs_sweep(sweep)?;
    let sweep = preprocess_sweep(sweep)?;
    let configs = hyperion_enumerate::generate_configs(sweep)?;
    Ok(Box::new(configs.map(|config| hyperion_render::render_config(&config))))
}

/// Reads `path` and delegates to [`parse_sweep`].
#[tracing::instrument(skip(path))]
pub fn parse_sweep_file(path: impl AsRef<Path>) -> Result<Box<dyn Iterator<Item = String>>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::from(hyperion_errors::IoError::new(path.display().to_string(), e)))?;
    parse_sweep(&text)
}

/// Parses `text` as a single expression, folds every static subtree,
/// then evaluates what remains via the runtime shim.
/// Only `Null`/`Bool`/`Int`/`Float`/`Str` literals and `Unary`/`Binary`
/// nodes built from them are resolvable this way — a bare `Reference`
/// or `Macro` names a configurable only a downstream library can
/// resolve, and is a [`ValidationError`] here.
#[tracing::instrument(skip_all)]
pub fn parse_value(text: &str) -> Result<Value> {
    let expr = hyperion_parser::parse_expr(text)?;
    let expr = partial_eval_expr(expr)?;
    eval_expr(expr)
}

fn eval_expr(expr: Expr) -> Result<Value> {
    match expr {
        Expr::Null => Ok(Value::Null),
        Expr::Bool(b) => Ok(Value::Bool(b)),
        Expr::Int(i) => Ok(Value::Int(i)),
        Expr::Float(f) => Ok(Value::Float(f)),
        Expr::Str(s) => Ok(Value::Str(s)),
        Expr::Unary(op, operand) => {
            let v = eval_expr(*operand)?;
            hyperion_rt::eval_unary_shim(unary_tag(op), v)
        }
        Expr::Binary(left, op, right) => {
            let l = eval_expr(*left)?;
            let r = eval_expr(*right)?;
            hyperion_rt::eval_binary_shim(l, binary_tag(op), r)
        }
        other => Err(ValidationError::new(format!("{other:?} has no value outside a downstream config library")).into()),
    }
}

fn unary_tag(op: UnaryOp) -> &'static str {
    op.tag()
}

fn binary_tag(op: BinaryOp) -> &'static str {
    op.tag()
}
