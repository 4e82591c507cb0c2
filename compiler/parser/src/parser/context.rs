use crate::tokenizer::{SpannedToken, Token};
use hyperion_errors::{ParseError, Result};
use hyperion_span::Span;

/// Token cursor over a pre-lexed stream: a current token plus
/// `bump`/`check`/`eat`. Indexes into the token vector rather than
/// popping off a reversed stack, since identifier assembly needs
/// two-token lookahead (`Ident` then `Slash`/`Dot`) that a pure
/// pop-stack cursor can't offer without an extra buffer.
pub struct ParserContext {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl ParserContext {
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn token(&self) -> &Token {
        &self.tokens[self.pos].token
    }

    pub fn span(&self) -> Span {
        self.tokens[self.pos].span
    }

    /// The span of the token just consumed by the last `bump`/`eat`,
    /// used to close off the span of a node whose final token has
    /// already been bumped past.
    pub fn prev_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].span
    }

    pub fn peek_nth(&self, dist: usize) -> &Token {
        self.tokens.get(self.pos + dist).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    pub fn bump(&mut self) -> SpannedToken {
        let current = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        current
    }

    pub fn check(&self, token: &Token) -> bool {
        self.token() == token
    }

    pub fn eat(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, token: &Token) -> Result<()> {
        if self.eat(token) {
            Ok(())
        } else {
            let offset = self.span().lo as usize;
            Err(ParseError::expected(offset, &token.to_string(), &self.token().describe()).into())
        }
    }

    pub fn error_here(&self, message: impl Into<String>) -> hyperion_errors::Error {
        ParseError::at_span(self.span(), message.into()).into()
    }
}
