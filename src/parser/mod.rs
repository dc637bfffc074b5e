//! sprig source parser
//!
//! This module transforms sprig source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`parse`]: Parsing (tokens → AST), extended by `statements` and
//!   `expressions`
//! - [`operators`]: Binary operator precedence and associativity
//! - [`ast`]: AST node definitions
//!
//! # Grammar
//!
//! ```text
//! statement  := "let" IDENT "=" expr ";"
//!             | "const" IDENT "=" expr ";"
//!             | "{" expr* "}"
//!             | expr
//! expr       := primary (OP expr)*          -- precedence climbing
//! primary    := INT | FLOAT | STRING | IDENT
//! ```
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary
//! operators. No backtracking: a failed match never consumes input.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod operators;
pub mod parse;
mod statements;

pub use expressions::MAX_EXPRESSION_DEPTH;
pub use parse::{ParseError, ParseResult, Parser};
