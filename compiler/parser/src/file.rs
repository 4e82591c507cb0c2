use crate::parser::ParserContext;
use crate::tokenizer::{tokenize, Token};
use hyperion_ast::{remove_parentheses_config, remove_parentheses_expr, remove_parentheses_sweep, Config, Expr, Sweep};
use hyperion_errors::Result;

/// Parses `text` as a [`Config`]: imports, includes, bindings, and
/// `with` blocks only. Parentheses are stripped before
/// the tree is returned, since they exist only to disambiguate parsing
///.
pub fn parse_config(text: &str) -> Result<Config> {
    let tokens = tokenize(text)?;
    let config = ParserContext::new(tokens).parse_config()?;
    remove_parentheses_config(config)
}

/// Parses `text` as a [`Sweep`]: everything a [`Config`] accepts, plus
/// `All`/`Product`/`Union`/`Table` blocks. Every text that parses as a
/// `Config` also parses as a `Sweep` with identical statements (spec
/// §8 property 4), since `Sweep`'s statement grammar is a superset.
pub fn parse_sweep(text: &str) -> Result<Sweep> {
    let tokens = tokenize(text)?;
    let sweep = ParserContext::new(tokens).parse_sweep()?;
    remove_parentheses_sweep(sweep)
}

/// Parses `text` as a single bare expression — the entry point behind
/// `parse_value`, which lowers and evaluates it via the
/// runtime shim rather than embedding it in a binding.
pub fn parse_expr(text: &str) -> Result<Expr> {
    let tokens = tokenize(text)?;
    let mut ctx = ParserContext::new(tokens);
    let expr = ctx.parse_expr()?;
    ctx.expect(&Token::Eof)?;
    remove_parentheses_expr(expr)
}
