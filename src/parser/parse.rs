//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, lookahead helpers, and the `parse` driver
//! - `statements`: `let`/`const` bindings, blocks, expression statements
//! - `expressions`: precedence climbing over the operator table
//!
//! Parser methods are split across these files using `impl Parser` blocks.
//! The only state is a one-token lookahead window (current and previous)
//! plus the lexer that feeds it; tokens are pulled on demand, never buffered.

use thiserror::Error;
use tracing::debug;

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};

/// The result of a parse operation.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parser error type. The first error aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A mandatory token was missing.
    #[error("expected {expected}, got {found}")]
    Expected {
        expected: &'static str,
        found: String,
    },

    /// No literal or identifier where an expression had to start.
    #[error("expected a primary token, got {found}")]
    ExpectedPrimary { found: String },

    /// Binary operators nested past the supported depth.
    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Recursive descent parser for sprig
pub struct Parser {
    lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) previous: Token,
}

impl Parser {
    /// Create a parser that pulls tokens from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        Self {
            lexer,
            previous: current.clone(),
            current,
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse statements until end of input.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let mut program = Program::new();

        while !self.at_end() {
            let stmt = self.parse_statement()?;
            program.nodes.push(stmt);
        }

        debug!(statements = program.len(), "parse complete");
        Ok(program)
    }

    // ===== Helper methods =====

    /// Shift current into previous and pull a fresh token.
    pub(crate) fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.previous = std::mem::replace(&mut self.current, next);
    }

    /// Advance if the current token is one of `kinds`. State is untouched
    /// on a miss.
    pub(crate) fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        if self.check(kinds) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current.kind)
    }

    pub(crate) fn at_end(&self) -> bool {
        self.current.is_eof()
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> ParseResult<()> {
        if self.match_token(&[kind]) {
            Ok(())
        } else {
            Err(self.error_expected(expected))
        }
    }

    /// Consume an identifier and return its name.
    pub(crate) fn expect_identifier(
        &mut self,
        expected: &'static str,
    ) -> ParseResult<String> {
        self.expect_token(TokenKind::Identifier, expected)?;
        Ok(self.previous.lexeme.clone())
    }

    pub(crate) fn error_expected(&self, expected: &'static str) -> ParseError {
        ParseError::Expected {
            expected,
            found: self.current.describe(),
        }
    }
}
