//! # Introduction
//!
//! sprig is the front end of a small scripting language: a pull-based
//! tokenizer and a recursive-descent parser that turn source text into an
//! abstract syntax tree. Nothing here evaluates the tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Program (Vec<AstNode>)
//! ```
//!
//! The parser drives the lexer one token at a time; see [`parser`].
//!
//! ```
//! use sprig::parser::{ast::AstNode, Parser};
//!
//! let program = Parser::from_source("let total = 1 + 2 * 3;").parse().unwrap();
//! assert!(matches!(program.nodes[0], AstNode::LetBinding { .. }));
//! ```
//!
//! ## Error policy
//!
//! The lexer never fails: unknown characters become `illegal_token` tokens
//! and unterminated strings close at end of input. The parser stops at the
//! first grammar violation with a [`parser::ParseError`] and returns no
//! partial result.

pub mod parser;
