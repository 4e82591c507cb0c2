use super::context::ParserContext;
use crate::tokenizer::Token;
use hyperion_ast::{Config, Header, Identifier, Row, Stmt, Sweep, SweepStmt};
use hyperion_errors::Result;

impl ParserContext {
    pub fn parse_config(&mut self) -> Result<Config> {
        let stmts = self.parse_top_level(Self::parse_config_stmt)?;
        self.expect(&Token::Eof)?;
        Ok(Config { stmts })
    }

    pub fn parse_sweep(&mut self) -> Result<Sweep> {
        let stmts = self.parse_top_level(Self::parse_sweep_stmt)?;
        self.expect(&Token::Eof)?;
        Ok(Sweep { stmts })
    }

    /// `(statement NEWLINE)*` at zero indentation: unlike a
    /// nested block, the top level may be empty and is not wrapped in
    /// `Indent`/`Dedent`.
    fn parse_top_level<T>(&mut self, mut parse_one: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        let mut stmts = Vec::new();
        while !self.check(&Token::Eof) {
            stmts.push(parse_one(self)?);
            if !self.eat(&Token::Newline) {
                break;
            }
        }
        Ok(stmts)
    }

    /// `':' NEWLINE INDENT (item NEWLINE)+ DEDENT`, shared by `with`,
    /// `product`, and `union` bodies.
    fn parse_block<T>(&mut self, mut parse_one: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        self.expect(&Token::Colon)?;
        self.expect(&Token::Newline)?;
        self.expect(&Token::Indent)?;
        let mut items = vec![parse_one(self)?];
        self.expect(&Token::Newline)?;
        while !self.eat(&Token::Dedent) {
            items.push(parse_one(self)?);
            self.expect(&Token::Newline)?;
        }
        Ok(items)
    }

    fn parse_config_stmt(&mut self) -> Result<Stmt> {
        match self.token() {
            Token::Import => {
                self.bump();
                Ok(Stmt::Import(self.parse_namespace()?))
            }
            Token::Include => {
                self.bump();
                Ok(Stmt::Include(self.expect_string()?))
            }
            Token::With => {
                self.bump();
                let ns = self.parse_namespace()?;
                let stmts = self.parse_block(Self::parse_config_stmt)?;
                Ok(Stmt::With(ns, stmts))
            }
            _ => {
                let id = self.parse_identifier()?;
                self.expect(&Token::Equals)?;
                let expr = self.parse_expr()?;
                Ok(Stmt::Binding(id, expr))
            }
        }
    }

    fn parse_sweep_stmt(&mut self) -> Result<SweepStmt> {
        match self.token() {
            Token::Import => {
                self.bump();
                Ok(SweepStmt::Import(self.parse_namespace()?))
            }
            Token::Include => {
                self.bump();
                Ok(SweepStmt::Include(self.expect_string()?))
            }
            Token::With => {
                self.bump();
                let ns = self.parse_namespace()?;
                let stmts = self.parse_block(Self::parse_sweep_stmt)?;
                Ok(SweepStmt::With(ns, stmts))
            }
            Token::Product => {
                self.bump();
                Ok(SweepStmt::Product(self.parse_block(Self::parse_sweep_stmt)?))
            }
            Token::Union => {
                self.bump();
                Ok(SweepStmt::Union(self.parse_block(Self::parse_sweep_stmt)?))
            }
            Token::Table => {
                self.bump();
                self.parse_table()
            }
            _ => {
                let id = self.parse_identifier()?;
                match self.token() {
                    Token::Colon => {
                        self.bump();
                        self.expect(&Token::LBracket)?;
                        let exprs = self.parse_expr_list(&Token::RBracket)?;
                        self.expect(&Token::RBracket)?;
                        if exprs.is_empty() {
                            return Err(self.error_here("`all` entries require at least one expression"));
                        }
                        Ok(SweepStmt::All(id, exprs))
                    }
                    Token::Equals => {
                        self.bump();
                        let expr = self.parse_expr()?;
                        Ok(SweepStmt::Binding(id, expr))
                    }
                    other => Err(self.error_here(format!("expected `=` or `:` after identifier, found {}", other.describe()))),
                }
            }
        }
    }

    /// Row width is deliberately not checked here — an uneven table must
    /// still parse successfully so `validate_sweep` can reject it with a
    /// `ValidationError`, not a `ParseError`.
    fn parse_table(&mut self) -> Result<SweepStmt> {
        let mut identifiers: Vec<Identifier> = vec![self.parse_identifier()?];
        while self.eat(&Token::Comma) {
            identifiers.push(self.parse_identifier()?);
        }
        let header = Header(identifiers);
        let rows = self.parse_block(|p| Ok(Row(p.parse_expr_list(&Token::Newline)?)))?;
        Ok(SweepStmt::Table(header, rows))
    }

    fn expect_string(&mut self) -> Result<String> {
        match self.token().clone() {
            Token::Str(s) => {
                self.bump();
                Ok(s)
            }
            other => Err(self.error_here(format!("expected a string literal, found {}", other.describe()))),
        }
    }
}
