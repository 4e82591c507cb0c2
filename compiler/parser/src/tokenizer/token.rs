use std::fmt;

/// All lexical tokens the lexer can produce, plus the
/// synthetic `Indent`/`Dedent`/`Newline`/`Eof` tokens the indentation
/// pass injects. `not`/`in`/`and`/`or` are single tokens; the parser
/// assembles the two-word `not in` operator itself by looking one token
/// ahead, the way it assembles `ns1.ns2.name` from a run of `Ident`,
/// `Dot`, `Slash` tokens rather than lexing identifiers whole.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Ident(String),
    Int(i64),
    Float(f64),
    Str(String),
    True,
    False,
    Null,

    Import,
    Include,
    With,
    Product,
    Union,
    Table,
    Not,
    And,
    Or,
    In,

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Equals,
    Dot,
    Slash,
    At,
    Percent,

    Plus,
    Minus,
    Star,
    StarStar,
    SlashSlash,
    LtLt,
    GtGt,
    Amp,
    Caret,
    Pipe,
    Tilde,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    Newline,
    Indent,
    Dedent,
    Eof,
}

impl Token {
    pub fn keyword_from_str(s: &str) -> Option<Token> {
        Some(match s {
            "import" => Token::Import,
            "include" => Token::Include,
            "with" => Token::With,
            "product" => Token::Product,
            "union" => Token::Union,
            "table" => Token::Table,
            "not" => Token::Not,
            "and" => Token::And,
            "or" => Token::Or,
            "in" => Token::In,
            "None" => Token::Null,
            "True" => Token::True,
            "False" => Token::False,
            _ => return None,
        })
    }

    pub fn describe(&self) -> String {
        match self {
            Token::Ident(s) => format!("identifier `{s}`"),
            Token::Int(i) => format!("integer `{i}`"),
            Token::Float(x) => format!("float `{x}`"),
            Token::Str(s) => format!("string {s:?}"),
            Token::Newline => "newline".into(),
            Token::Indent => "indent".into(),
            Token::Dedent => "dedent".into(),
            Token::Eof => "end of input".into(),
            other => format!("`{other}`"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Ident(s) => return write!(f, "{s}"),
            Token::Int(i) => return write!(f, "{i}"),
            Token::Float(x) => return write!(f, "{x}"),
            Token::Str(s) => return write!(f, "{s:?}"),
            Token::True => "True",
            Token::False => "False",
            Token::Null => "None",
            Token::Import => "import",
            Token::Include => "include",
            Token::With => "with",
            Token::Product => "product",
            Token::Union => "union",
            Token::Table => "table",
            Token::Not => "not",
            Token::And => "and",
            Token::Or => "or",
            Token::In => "in",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Equals => "=",
            Token::Dot => ".",
            Token::Slash => "/",
            Token::At => "@",
            Token::Percent => "%",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::StarStar => "**",
            Token::SlashSlash => "//",
            Token::LtLt => "<<",
            Token::GtGt => ">>",
            Token::Amp => "&",
            Token::Caret => "^",
            Token::Pipe => "|",
            Token::Tilde => "~",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::LtEq => "<=",
            Token::GtEq => ">=",
            Token::Newline => "newline",
            Token::Indent => "indent",
            Token::Dedent => "dedent",
            Token::Eof => "eof",
        };
        write!(f, "{s}")
    }
}
