use super::context::ParserContext;
use crate::tokenizer::Token;
use hyperion_ast::{Identifier, Name, Namespace, Scope};
use hyperion_errors::Result;

impl ParserContext {
    /// Assembles `(name '/')* (name '.')* name`: a run of
    /// `Ident '/'` pairs is the scope, a run of `Ident '.'` pairs is the
    /// namespace, and the final bare `Ident` is the name. Both runs are
    /// recognized with one token of lookahead so a trailing infix `/` or
    /// `.` that does not introduce another identifier segment is left
    /// for the expression parser (e.g. the `/` in `@a.b / 2`).
    pub(crate) fn parse_identifier(&mut self) -> Result<Identifier> {
        let lo = self.span();
        let mut scope = Vec::new();
        while self.is_ident() && self.peek_nth(1) == &Token::Slash {
            scope.push(self.expect_bare_name()?);
            self.expect(&Token::Slash)?;
        }
        let mut namespace = Vec::new();
        while self.is_ident() && self.peek_nth(1) == &Token::Dot {
            namespace.push(self.expect_bare_name()?);
            self.expect(&Token::Dot)?;
        }
        let name = self.expect_bare_name()?;
        let span = lo.merge(self.prev_span());
        Ok(Identifier::new(Scope(scope), Namespace(namespace), name).with_span(span))
    }

    /// Parses a pure dotted path with no scope/name split, used for
    /// `import`/`with` headers (wire format: `import a.b.c`).
    pub(crate) fn parse_namespace(&mut self) -> Result<Namespace> {
        let mut parts = vec![self.expect_bare_name()?];
        while self.eat(&Token::Dot) {
            parts.push(self.expect_bare_name()?);
        }
        Ok(Namespace(parts))
    }

    fn is_ident(&self) -> bool {
        matches!(self.token(), Token::Ident(_))
    }

    pub(crate) fn expect_bare_name(&mut self) -> Result<Name> {
        match self.token().clone() {
            Token::Ident(name) => {
                self.bump();
                Ok(name)
            }
            other => Err(self.error_here(format!("expected a name, found {}", other.describe()))),
        }
    }
}
