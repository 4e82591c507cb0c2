use super::context::ParserContext;
use crate::tokenizer::Token;
use hyperion_ast::{Argument, BinaryOp, DictItem, Expr, UnaryOp};
use hyperion_errors::Result;

/// Precedence-climbing entry point and the atomic operand for every
/// binary level: `pow` and the unary operators are resolved first
/// (`parse_unary`/`parse_pow`), then the climbing loop in
/// `parse_binary` folds every remaining left-associative level
///.
const LOOSEST: u8 = u8::MAX;

/// `not_`'s precedence (spec's operator table): looser than every
/// comparison/arithmetic/bitwise operator (2-10), tighter than `and`/`or`
/// (12/13).
const NOT_PREC: u8 = 11;

impl ParserContext {
    pub fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_binary(LOOSEST)
    }

    /// `min_prec` is the loosest precedence the caller will still accept
    /// binding into its right-hand side; since lower numbers bind
    /// tighter in this scale, a qualifying operator
    /// must have `precedence() <= min_prec`.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr> {
        let mut lhs = self.parse_unary_or_not(min_prec)?;
        while let Some(op) = self.peek_non_pow_binary_op() {
            let prec = op.precedence();
            if prec > min_prec {
                break;
            }
            self.bump_binary_op(op);
            // Left-associative: exclude operators at this same level from
            // the right operand, so the outer loop folds them leftward.
            let rhs = self.parse_binary(prec - 1)?;
            lhs = Expr::binary(lhs, op, rhs);
        }
        Ok(lhs)
    }

    fn peek_non_pow_binary_op(&self) -> Option<BinaryOp> {
        Some(match self.token() {
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::TrueDiv,
            Token::SlashSlash => BinaryOp::FloorDiv,
            Token::Percent => BinaryOp::Mod,
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            Token::LtLt => BinaryOp::LShift,
            Token::GtGt => BinaryOp::RShift,
            Token::Amp => BinaryOp::And,
            Token::Caret => BinaryOp::Xor,
            Token::Pipe => BinaryOp::Or,
            Token::EqEq => BinaryOp::Eq,
            Token::NotEq => BinaryOp::Ne,
            Token::Lt => BinaryOp::Lt,
            Token::Gt => BinaryOp::Gt,
            Token::LtEq => BinaryOp::Le,
            Token::GtEq => BinaryOp::Ge,
            Token::In => BinaryOp::In,
            Token::Not if self.peek_nth(1) == &Token::In => BinaryOp::NotIn,
            Token::And => BinaryOp::LAnd,
            Token::Or => BinaryOp::LOr,
            _ => return None,
        })
    }

    fn bump_binary_op(&mut self, op: BinaryOp) {
        self.bump();
        if op == BinaryOp::NotIn {
            self.bump();
        }
    }

    /// `not_` sits at its own precedence level (11) between the climbing
    /// loop's comparison/arithmetic/bitwise levels (2-10) and `and`/`or`
    /// (12/13), so it can't be folded into `parse_unary`'s chain the way
    /// `+`/`-`/`~` are: unlike those, its operand is parsed by re-entering
    /// `parse_binary`, not by recursing through `parse_pow`. Only
    /// dispatched here when the caller's `min_prec` still admits
    /// precedence 11 — otherwise a bare `not` is left for `parse_unary` to
    /// reject, matching a tighter operator refusing an un-parenthesised
    /// `not` operand.
    fn parse_unary_or_not(&mut self, min_prec: u8) -> Result<Expr> {
        if min_prec >= NOT_PREC && matches!(self.token(), Token::Not) {
            self.bump();
            let operand = self.parse_not_operand()?;
            return Ok(Expr::unary(UnaryOp::Not, operand));
        }
        self.parse_unary()
    }

    /// A `not`'s operand: another chained `not` (same precedence, so
    /// `not not a` is `Unary(Not, Unary(Not, a))`), or anything tighter
    /// than precedence 11 otherwise.
    fn parse_not_operand(&mut self) -> Result<Expr> {
        if matches!(self.token(), Token::Not) {
            self.bump();
            let operand = self.parse_not_operand()?;
            return Ok(Expr::unary(UnaryOp::Not, operand));
        }
        self.parse_binary(NOT_PREC - 1)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.token() {
            Token::Plus => UnaryOp::Pos,
            Token::Minus => UnaryOp::Neg,
            Token::Tilde => UnaryOp::Inv,
            _ => return self.parse_pow(),
        };
        self.bump();
        let operand = self.parse_unary()?;
        Ok(Expr::unary(op, operand))
    }

    /// `pow` binds tighter than unary and is right-associative, so its right-hand side is
    /// parsed by recursing back into `parse_unary` rather than
    /// `parse_primary` — `2 ** -2` and `2 ** 3 ** 2` both fall out of
    /// this directly.
    fn parse_pow(&mut self) -> Result<Expr> {
        let base = self.parse_primary()?;
        if self.eat(&Token::StarStar) {
            let exponent = self.parse_unary()?;
            return Ok(Expr::binary(base, BinaryOp::Pow, exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.token().clone() {
            Token::Int(i) => {
                self.bump();
                Ok(Expr::Int(i))
            }
            Token::Float(x) => {
                self.bump();
                Ok(Expr::Float(x))
            }
            Token::Str(s) => {
                self.bump();
                Ok(Expr::Str(s))
            }
            Token::True => {
                self.bump();
                Ok(Expr::Bool(true))
            }
            Token::False => {
                self.bump();
                Ok(Expr::Bool(false))
            }
            Token::Null => {
                self.bump();
                Ok(Expr::Null)
            }
            Token::Percent => {
                self.bump();
                let name = self.expect_bare_name()?;
                Ok(Expr::Macro(name))
            }
            Token::At => {
                self.bump();
                let id = self.parse_identifier()?;
                if self.eat(&Token::LParen) {
                    let args = self.parse_call_arguments()?;
                    self.expect(&Token::RParen)?;
                    Ok(Expr::Call(id, args))
                } else {
                    Ok(Expr::Reference(id))
                }
            }
            Token::LParen => self.parse_paren_or_tuple(),
            Token::LBracket => self.parse_list(),
            Token::LBrace => self.parse_dict(),
            other => Err(self.error_here(format!("expected an expression, found {}", other.describe()))),
        }
    }

    fn parse_call_arguments(&mut self) -> Result<Vec<Argument>> {
        let mut args = Vec::new();
        if self.check(&Token::RParen) {
            return Ok(args);
        }
        loop {
            let name = self.expect_bare_name()?;
            self.expect(&Token::Equals)?;
            let value = self.parse_expr()?;
            args.push((name, value));
            if !self.eat(&Token::Comma) {
                break;
            }
            if self.check(&Token::RParen) {
                break;
            }
        }
        Ok(args)
    }

    /// `(e)` is a parenthesised expression; `(e,)` and `(e1, e2, ...)`
    /// are tuples — the trailing comma after a lone element is what
    /// distinguishes a singleton tuple from a grouped expression.
    fn parse_paren_or_tuple(&mut self) -> Result<Expr> {
        self.expect(&Token::LParen)?;
        if self.eat(&Token::RParen) {
            return Ok(Expr::Tuple(Vec::new()));
        }
        let first = self.parse_expr()?;
        if self.eat(&Token::Comma) {
            let mut items = vec![first];
            while !self.check(&Token::RParen) {
                items.push(self.parse_expr()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
            self.expect(&Token::RParen)?;
            Ok(Expr::Tuple(items))
        } else {
            self.expect(&Token::RParen)?;
            Ok(Expr::Paren(Box::new(first)))
        }
    }

    fn parse_list(&mut self) -> Result<Expr> {
        self.expect(&Token::LBracket)?;
        let items = self.parse_expr_list(&Token::RBracket)?;
        self.expect(&Token::RBracket)?;
        Ok(Expr::List(items))
    }

    fn parse_dict(&mut self) -> Result<Expr> {
        self.expect(&Token::LBrace)?;
        let mut items: Vec<DictItem> = Vec::new();
        if !self.check(&Token::RBrace) {
            loop {
                let key = self.parse_expr()?;
                self.expect(&Token::Colon)?;
                let value = self.parse_expr()?;
                items.push((key, value));
                if !self.eat(&Token::Comma) {
                    break;
                }
                if self.check(&Token::RBrace) {
                    break;
                }
            }
        }
        self.expect(&Token::RBrace)?;
        Ok(Expr::Dict(items))
    }

    /// A comma-separated list of expressions, terminated by `end`
    /// (without consuming it), used for list literals and `All`/`table`
    /// row bodies alike.
    pub(crate) fn parse_expr_list(&mut self, end: &Token) -> Result<Vec<Expr>> {
        let mut items = Vec::new();
        if self.check(end) {
            return Ok(items);
        }
        loop {
            items.push(self.parse_expr()?);
            if !self.eat(&Token::Comma) {
                break;
            }
            if self.check(end) {
                break;
            }
        }
        Ok(items)
    }
}
