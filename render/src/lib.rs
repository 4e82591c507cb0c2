//! Renders [`Config`]s and [`Sweep`]s back to surface syntax: a fold
//! whose output is a plain `String` for statements and a
//! `(String, precedence)` pair for expressions, so a child expression
//! knows whether it needs parenthesizing against its parent's operator.
//!
//! One function per syntactic category, threading the precedence pair
//! through `render_unary_op`/`render_binary_op` the way the parser
//! threads precedence on the way in. `pow`'s right-associative
//! parenthesization inverts the strict/non-strict rule every other
//! operator uses here, since it is the one right-associative operator.

use hyperion_ast::{Config, Expr, Header, Row, Stmt, Sweep, SweepStmt, ATOM_PRECEDENCE};

/// `@identifier(...)` renders with precedence 1 (higher than every atom
/// but lower than every real operator, `pow` included at 2).
const CALL_PRECEDENCE: u8 = 1;

const INDENT: &str = "    ";

/// `render(config) -> String`.
pub fn render_config(config: &Config) -> String {
    config.stmts.iter().map(|stmt| render_stmt(stmt, 0)).collect::<Vec<_>>().join("\n")
}

/// `render(sweep) -> String`, covering the three sweep-only block forms
/// in addition to everything `render_config` handles.
pub fn render_sweep(sweep: &Sweep) -> String {
    sweep.stmts.iter().map(|stmt| render_sweep_stmt(stmt, 0)).collect::<Vec<_>>().join("\n")
}

fn pad(depth: usize) -> String {
    INDENT.repeat(depth)
}

fn render_stmt(stmt: &Stmt, depth: usize) -> String {
    let p = pad(depth);
    match stmt {
        Stmt::Import(ns) => format!("{p}import {ns}"),
        Stmt::Include(path) => format!("{p}include \"{}\"", escape_str(path)),
        Stmt::Binding(id, expr) => format!("{p}{id} = {}", render_expr(expr).0),
        Stmt::With(ns, stmts) => render_block(&p, &format!("with {ns}"), stmts, depth, render_stmt),
    }
}

fn render_sweep_stmt(stmt: &SweepStmt, depth: usize) -> String {
    let p = pad(depth);
    match stmt {
        SweepStmt::Import(ns) => format!("{p}import {ns}"),
        SweepStmt::Include(path) => format!("{p}include \"{}\"", escape_str(path)),
        SweepStmt::Binding(id, expr) => format!("{p}{id} = {}", render_expr(expr).0),
        SweepStmt::With(ns, stmts) => render_block(&p, &format!("with {ns}"), stmts, depth, render_sweep_stmt),
        SweepStmt::All(id, exprs) => {
            let items = exprs.iter().map(|e| render_expr(e).0).collect::<Vec<_>>().join(", ");
            format!("{p}{id}: [{items}]")
        }
        SweepStmt::Product(stmts) => render_block(&p, "product", stmts, depth, render_sweep_stmt),
        SweepStmt::Union(stmts) => render_block(&p, "union", stmts, depth, render_sweep_stmt),
        SweepStmt::Table(header, rows) => render_table(&p, header, rows, depth),
    }
}

fn render_block<T>(p: &str, header: &str, stmts: &[T], depth: usize, render_one: impl Fn(&T, usize) -> String) -> String {
    let body = stmts.iter().map(|s| render_one(s, depth + 1)).collect::<Vec<_>>().join("\n");
    format!("{p}{header}:\n{body}")
}

fn render_table(p: &str, header: &Header, rows: &[Row], depth: usize) -> String {
    let cols = header.0.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
    let row_pad = pad(depth + 1);
    let body = rows
        .iter()
        .map(|row| format!("{row_pad}{}", row.0.iter().map(|e| render_expr(e).0).collect::<Vec<_>>().join(", ")))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{p}table {cols}:\n{body}")
}

/// Renders one expression, returning its text alongside the precedence
/// of its outermost operator (0 for every atom) so the caller can decide
/// whether to parenthesize it.
fn render_expr(expr: &Expr) -> (String, u8) {
    match expr {
        Expr::Null => ("None".to_string(), ATOM_PRECEDENCE),
        Expr::Bool(b) => ((if *b { "True" } else { "False" }).to_string(), ATOM_PRECEDENCE),
        Expr::Int(i) => (i.to_string(), ATOM_PRECEDENCE),
        Expr::Float(f) => (render_float(*f), ATOM_PRECEDENCE),
        Expr::Str(s) => (format!("\"{}\"", escape_str(s)), ATOM_PRECEDENCE),
        Expr::Macro(name) => (format!("%{name}"), ATOM_PRECEDENCE),
        Expr::Reference(id) => (format!("@{id}"), ATOM_PRECEDENCE),
        Expr::Call(id, args) => {
            let args_text = args.iter().map(|(name, value)| format!("{name}={}", render_expr(value).0)).collect::<Vec<_>>().join(", ");
            (format!("@{id}({args_text})"), CALL_PRECEDENCE)
        }
        Expr::Dict(items) => {
            let text = items.iter().map(|(k, v)| format!("{}: {}", render_expr(k).0, render_expr(v).0)).collect::<Vec<_>>().join(", ");
            (format!("{{{text}}}"), ATOM_PRECEDENCE)
        }
        Expr::List(items) => (format!("[{}]", items.iter().map(|e| render_expr(e).0).collect::<Vec<_>>().join(", ")), ATOM_PRECEDENCE),
        Expr::Tuple(items) => {
            let text = match items.as_slice() {
                [single] => format!("({},)", render_expr(single).0),
                _ => format!("({})", items.iter().map(|e| render_expr(e).0).collect::<Vec<_>>().join(", ")),
            };
            (text, ATOM_PRECEDENCE)
        }
        Expr::Unary(op, operand) => {
            let (mut text, operand_prec) = render_expr(operand);
            let prec = op.precedence();
            if operand_prec > prec {
                text = format!("({text})");
            }
            (format!("{}{text}", op.symbol()), prec)
        }
        Expr::Binary(left, op, right) => {
            let (mut left_text, left_prec) = render_expr(left);
            let (mut right_text, right_prec) = render_expr(right);
            let prec = op.precedence();
            // Strict-vs-nonstrict asymmetry realises left-associative
            // rendering; `pow` (the sole right-associative operator)
            // inverts it.
            if op.is_right_associative() {
                if left_prec >= prec {
                    left_text = format!("({left_text})");
                }
                if right_prec > prec {
                    right_text = format!("({right_text})");
                }
            } else {
                if left_prec > prec {
                    left_text = format!("({left_text})");
                }
                if right_prec >= prec {
                    right_text = format!("({right_text})");
                }
            }
            (format!("{left_text} {} {right_text}", op.symbol()), prec)
        }
        // Never produced by `parse_config`/`parse_sweep` (both strip
        // `Paren` before returning); handled here only so a hand-built
        // tree still renders something sensible instead of panicking.
        Expr::Paren(inner) => render_expr(inner),
    }
}

fn render_float(f: f64) -> String {
    if f.is_finite() && f == f.trunc() {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}

fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\0' => out.push_str("\\0"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperion_ast::{BinaryOp, Identifier, Namespace, UnaryOp};
    use hyperion_parser::{parse_config, parse_sweep};

    #[test]
    fn renders_a_simple_binding() {
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("lr"), Expr::Float(0.1))]);
        assert_eq!(render_config(&config), "lr = 0.1");
    }

    #[test]
    fn renders_whole_number_floats_with_a_decimal_point() {
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("n"), Expr::Float(2.0))]);
        assert_eq!(render_config(&config), "n = 2.0");
    }

    #[test]
    fn mul_does_not_need_parens_around_its_add_parent() {
        let expr = Expr::binary(Expr::Int(2), BinaryOp::Mul, Expr::Int(3));
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), Expr::binary(expr, BinaryOp::Add, Expr::Int(1)))]);
        assert_eq!(render_config(&config), "x = 2 * 3 + 1");
    }

    #[test]
    fn left_associative_chain_renders_without_parens() {
        let expr = Expr::binary(Expr::binary(Expr::Int(8), BinaryOp::Sub, Expr::Int(3)), BinaryOp::Sub, Expr::Int(2));
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), expr)]);
        assert_eq!(render_config(&config), "x = 8 - 3 - 2");
    }

    #[test]
    fn right_nested_sub_needs_parens_to_round_trip() {
        // 8 - (3 - 2) is not the same value as 8 - 3 - 2, so the
        // renderer must parenthesize the right child here even though
        // it would not for a literally left-nested chain.
        let expr = Expr::binary(Expr::Int(8), BinaryOp::Sub, Expr::binary(Expr::Int(3), BinaryOp::Sub, Expr::Int(2)));
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), expr)]);
        assert_eq!(render_config(&config), "x = 8 - (3 - 2)");
    }

    #[test]
    fn pow_chain_renders_right_associatively_without_parens() {
        let expr = Expr::binary(Expr::Int(2), BinaryOp::Pow, Expr::binary(Expr::Int(3), BinaryOp::Pow, Expr::Int(2)));
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), expr)]);
        assert_eq!(render_config(&config), "x = 2 ** 3 ** 2");
    }

    #[test]
    fn left_nested_pow_needs_parens() {
        let expr = Expr::binary(Expr::binary(Expr::Int(2), BinaryOp::Pow, Expr::Int(3)), BinaryOp::Pow, Expr::Int(2));
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), expr)]);
        assert_eq!(render_config(&config), "x = (2 ** 3) ** 2");
    }

    #[test]
    fn not_does_not_need_parens_around_a_tighter_comparison_and_round_trips() {
        // `not`'s own precedence (11) is looser than `eq` (10), so its
        // comparison operand needs no parens, and re-parsing the
        // rendered text must yield the same tree back.
        let expr = Expr::unary(UnaryOp::Not, Expr::binary(Expr::Int(1), BinaryOp::Eq, Expr::Int(2)));
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), expr.clone())]);
        let rendered = render_config(&config);
        assert_eq!(rendered, "x = not 1 == 2");
        let reparsed = parse_config(&rendered).unwrap();
        assert_eq!(reparsed.stmts[0], Stmt::Binding(Identifier::bare("x"), expr));
    }

    #[test]
    fn unary_parenthesizes_a_looser_operand() {
        let expr = Expr::unary(UnaryOp::Neg, Expr::binary(Expr::Int(1), BinaryOp::Add, Expr::Int(2)));
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), expr)]);
        assert_eq!(render_config(&config), "x = -(1 + 2)");
    }

    #[test]
    fn singleton_tuple_keeps_its_trailing_comma() {
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), Expr::Tuple(vec![Expr::Int(1)]))]);
        assert_eq!(render_config(&config), "x = (1,)");
    }

    #[test]
    fn string_literal_escapes_quotes_and_backslashes() {
        let config = Config::new(vec![Stmt::Binding(Identifier::bare("x"), Expr::Str("a\"b\\c\n".into()))]);
        assert_eq!(render_config(&config), r#"x = "a\"b\\c\n""#);
    }

    #[test]
    fn with_block_renders_header_and_indented_body() {
        let config = Config::new(vec![Stmt::With(Namespace(vec!["m".into()]), vec![Stmt::Binding(Identifier::bare("a"), Expr::Int(1))])]);
        assert_eq!(render_config(&config), "with m:\n    a = 1");
    }

    #[test]
    fn round_trips_a_config_with_mixed_expressions() {
        let text = "model.lr = 2 * 3 + 1\nmodel.name = \"gru\"\n";
        let config = parse_config(text).unwrap();
        let rendered = render_config(&config);
        let reparsed = parse_config(&rendered).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn round_trips_a_sweep_with_every_block_form() {
        let text = "product:\n    a: [1, 2]\n    table b, c:\n        10, 100\n        20, 200\n";
        let sweep = parse_sweep(text).unwrap();
        let rendered = render_sweep(&sweep);
        let reparsed = parse_sweep(&rendered).unwrap();
        assert_eq!(sweep, reparsed);
    }

    #[test]
    fn round_trips_parenthesized_input_modulo_the_parens_themselves() {
        let text = "x = (1 + 2) * 3\n";
        let config = parse_config(text).unwrap();
        let rendered = render_config(&config);
        assert_eq!(rendered, "x = (1 + 2) * 3");
        let reparsed = parse_config(&rendered).unwrap();
        assert_eq!(config, reparsed);
    }
}
