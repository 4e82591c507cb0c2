//! Lexer and precedence-climbing parser for Hyperion configs and
//! sweeps: a standalone token stream first, then a recursive-descent
//! parser with a dedicated expression module for the ambiguity-prone
//! operator grammar.

mod file;
mod parser;
mod tokenizer;

pub use file::{parse_config, parse_expr, parse_sweep};
pub use tokenizer::{tokenize, SpannedToken, Token};

#[cfg(test)]
mod tests {
    use super::*;
    use hyperion_ast::{BinaryOp, Expr, Stmt, SweepStmt, UnaryOp};

    #[test]
    fn parses_arithmetic_precedence() {
        let expr = parse_expr("2 + 3 * 4").unwrap();
        assert_eq!(expr, Expr::binary(Expr::Int(2), BinaryOp::Add, Expr::binary(Expr::Int(3), BinaryOp::Mul, Expr::Int(4))));
    }

    #[test]
    fn left_associative_chain_folds_left() {
        let expr = parse_expr("8 - 3 - 2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(Expr::binary(Expr::Int(8), BinaryOp::Sub, Expr::Int(3)), BinaryOp::Sub, Expr::Int(2))
        );
    }

    #[test]
    fn pow_is_right_associative() {
        let expr = parse_expr("2 ** 3 ** 2").unwrap();
        assert_eq!(expr, Expr::binary(Expr::Int(2), BinaryOp::Pow, Expr::binary(Expr::Int(3), BinaryOp::Pow, Expr::Int(2))));
    }

    #[test]
    fn unary_binds_looser_than_pow() {
        let expr = parse_expr("-2 ** 2").unwrap();
        assert_eq!(expr, Expr::unary(UnaryOp::Neg, Expr::binary(Expr::Int(2), BinaryOp::Pow, Expr::Int(2))));
    }

    #[test]
    fn parentheses_are_stripped_after_parsing() {
        let expr = parse_expr("(1 + 2) * 3").unwrap();
        assert_eq!(expr, Expr::binary(Expr::binary(Expr::Int(1), BinaryOp::Add, Expr::Int(2)), BinaryOp::Mul, Expr::Int(3)));
    }

    #[test]
    fn not_in_parses_as_one_operator() {
        let expr = parse_expr(r#""a" not in "abc""#).unwrap();
        assert_eq!(expr, Expr::binary(Expr::Str("a".into()), BinaryOp::NotIn, Expr::Str("abc".into())));
    }

    #[test]
    fn not_binds_looser_than_comparison() {
        // `not a == b` is `Unary(Not, Binary(a, Eq, b))`: `not_`'s
        // precedence (11) is looser than `eq` (10), so the comparison
        // binds first and `not` wraps the whole thing.
        let expr = parse_expr("not a == b").unwrap();
        assert_eq!(
            expr,
            Expr::unary(
                UnaryOp::Not,
                Expr::binary(
                    Expr::Reference(hyperion_ast::Identifier::new(hyperion_ast::Scope::empty(), hyperion_ast::Namespace::empty(), "a")),
                    BinaryOp::Eq,
                    Expr::Reference(hyperion_ast::Identifier::new(hyperion_ast::Scope::empty(), hyperion_ast::Namespace::empty(), "b")),
                ),
            )
        );
    }

    #[test]
    fn not_binds_tighter_than_and_or() {
        // `not a and b` is `Binary(Unary(Not, a), And, b)`: `not_` (11)
        // binds tighter than `and` (12).
        let expr = parse_expr("not True and False").unwrap();
        assert_eq!(expr, Expr::binary(Expr::unary(UnaryOp::Not, Expr::Bool(true)), BinaryOp::LAnd, Expr::Bool(false)));
    }

    #[test]
    fn not_chains_onto_another_not() {
        let expr = parse_expr("not not True").unwrap();
        assert_eq!(expr, Expr::unary(UnaryOp::Not, Expr::unary(UnaryOp::Not, Expr::Bool(true))));
    }

    #[test]
    fn singleton_tuple_requires_trailing_comma() {
        assert_eq!(parse_expr("(1,)").unwrap(), Expr::Tuple(vec![Expr::Int(1)]));
        assert_eq!(parse_expr("(1)").unwrap(), Expr::Int(1));
    }

    #[test]
    fn reference_and_call_parse() {
        assert_eq!(parse_expr("@s1/ns1.name").unwrap(), Expr::Reference(hyperion_ast::Identifier::new(
            hyperion_ast::Scope(vec!["s1".into()]),
            hyperion_ast::Namespace(vec!["ns1".into()]),
            "name",
        )));
        let call = parse_expr("@ns.configurable(k=1)").unwrap();
        match call {
            Expr::Call(id, args) => {
                assert_eq!(id.name, "configurable");
                assert_eq!(args, vec![("k".to_string(), Expr::Int(1))]);
            }
            other => panic!("expected a call, got {other:?}"),
        }
    }

    #[test]
    fn simple_config_parses_bindings() {
        let config = parse_config("model.lr = 2 * 3 + 1\nmodel.name = \"gru\"\n").unwrap();
        assert_eq!(config.stmts.len(), 2);
        assert!(matches!(config.stmts[0], Stmt::Binding(_, _)));
    }

    #[test]
    fn with_block_flattens_into_nested_statements() {
        let config = parse_config("with m:\n    a = 1\n    b = 2\n").unwrap();
        match &config.stmts[0] {
            Stmt::With(ns, stmts) => {
                assert_eq!(ns.0, vec!["m".to_string()]);
                assert_eq!(stmts.len(), 2);
            }
            other => panic!("expected a with block, got {other:?}"),
        }
    }

    #[test]
    fn sweep_parses_all_product_union_table() {
        let sweep = parse_sweep("lr: [0.1, 0.01]\n").unwrap();
        assert_eq!(sweep.stmts.len(), 1);
        assert!(matches!(sweep.stmts[0], SweepStmt::All(_, _)));

        let sweep = parse_sweep("product:\n    a.x: [1, 2]\n    b.y: [10, 20]\n").unwrap();
        match &sweep.stmts[0] {
            SweepStmt::Product(stmts) => assert_eq!(stmts.len(), 2),
            other => panic!("expected a product block, got {other:?}"),
        }

        let sweep = parse_sweep("table a, b:\n    1, 10\n    2, 20\n").unwrap();
        match &sweep.stmts[0] {
            SweepStmt::Table(header, rows) => {
                assert_eq!(header.0.len(), 2);
                assert_eq!(rows.len(), 2);
            }
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn config_text_also_parses_as_sweep() {
        let text = "model.lr = 2 * 3 + 1\n";
        let config = parse_config(text).unwrap();
        let sweep = parse_sweep(text).unwrap();
        assert_eq!(sweep.stmts.len(), config.stmts.len());
    }

    #[test]
    fn uneven_table_rows_still_parse_successfully() {
        // Row-width validation is `validate_sweep`'s job (a `ValidationError`),
        // not the parser's — see hyperion-passes for the rejecting test.
        let sweep = parse_sweep("table a, b:\n    1, 10\n    2\n").unwrap();
        match &sweep.stmts[0] {
            SweepStmt::Table(_, rows) => assert_eq!(rows[1].0.len(), 1),
            other => panic!("expected a table, got {other:?}"),
        }
    }
}
