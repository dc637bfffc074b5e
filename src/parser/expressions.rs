//! Expression parsing implementation
//!
//! Binary expressions use precedence climbing over the table in
//! [`operators`](crate::parser::operators). Operators are recognised by the
//! current token's lexeme rather than its kind, which is how the word
//! operators (`or`, `and`, `not`) and `^` take part even though the lexer
//! reports them as identifiers and illegal tokens.
//!
//! Primaries are integer, float and string literals and identifiers, tried
//! in that order.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::operators::{self, Operator};
use crate::parser::parse::{ParseError, ParseResult, Parser};

/// Deepest binary-expression nesting accepted, in tree levels.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> ParseResult<AstNode> {
        let (node, _height) = self.parse_binary(0, 0)?;
        Ok(node)
    }

    /// Parse a primary, then fold in every following operator whose
    /// precedence is at least `min_precedence`.
    ///
    /// Returns the expression with its tree height. `depth` counts the
    /// enclosing recursive calls; neither may exceed
    /// [`MAX_EXPRESSION_DEPTH`], which keeps both this recursion and every
    /// later walk of the tree (drop, display) within the stack.
    pub(crate) fn parse_binary(
        &mut self,
        min_precedence: u8,
        depth: usize,
    ) -> ParseResult<(AstNode, usize)> {
        if depth >= MAX_EXPRESSION_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_EXPRESSION_DEPTH,
            });
        }

        let mut lhs = self.parse_primary()?;
        let mut height = 1;

        while let Some(op) = self.current_operator() {
            if op.precedence < min_precedence {
                break;
            }

            self.advance();
            let (rhs, rhs_height) =
                self.parse_binary(op.next_min_precedence(), depth + 1)?;

            height = height.max(rhs_height) + 1;
            if height > MAX_EXPRESSION_DEPTH {
                return Err(ParseError::TooDeep {
                    limit: MAX_EXPRESSION_DEPTH,
                });
            }
            lhs = AstNode::binary(lhs, op.lexeme, rhs);
        }

        Ok((lhs, height))
    }

    /// Binary operator spelled by the current token, if any.
    fn current_operator(&self) -> Option<&'static Operator> {
        match self.current.kind {
            TokenKind::Eof | TokenKind::String => None,
            _ => operators::lookup(&self.current.lexeme),
        }
    }

    /// Parse primary expression
    fn parse_primary(&mut self) -> ParseResult<AstNode> {
        if self.match_token(&[TokenKind::Int]) {
            return Ok(AstNode::IntLiteral(self.previous.lexeme.clone()));
        }

        if self.match_token(&[TokenKind::Float]) {
            return Ok(AstNode::FloatLiteral(self.previous.lexeme.clone()));
        }

        if self.match_token(&[TokenKind::String]) {
            return Ok(AstNode::StringLiteral(self.previous.lexeme.clone()));
        }

        if self.match_token(&[TokenKind::Identifier]) {
            return Ok(AstNode::Identifier(self.previous.lexeme.clone()));
        }

        Err(ParseError::ExpectedPrimary {
            found: self.current.describe(),
        })
    }
}
