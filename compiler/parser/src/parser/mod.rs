mod context;
mod expression;
mod identifier;
mod statement;

pub use context::ParserContext;
