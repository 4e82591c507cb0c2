pub mod lexer;
pub mod token;

pub use lexer::{tokenize, SpannedToken, INDENT_WIDTH};
pub use token::Token;
