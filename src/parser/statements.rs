//! Statement parsing implementation
//!
//! Statement rules are tried in order, each falling through to the next when
//! its leading token does not match:
//!
//! 1. `let IDENT = expr ;`
//! 2. `const IDENT = expr ;`
//! 3. `{ expr* }`
//! 4. a bare expression

use tracing::trace;

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseResult, Parser};

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> ParseResult<AstNode> {
        trace!(token = %self.current, "statement");

        if self.match_token(&[TokenKind::Let]) {
            let (name, initializer) = self.parse_binding("identifier after 'let'")?;
            return Ok(AstNode::LetBinding { name, initializer });
        }

        if self.match_token(&[TokenKind::Const]) {
            let (name, initializer) =
                self.parse_binding("identifier after 'const'")?;
            return Ok(AstNode::ConstBinding { name, initializer });
        }

        if self.match_token(&[TokenKind::LeftBrace]) {
            return self.parse_block();
        }

        self.parse_expression()
    }

    /// Rest of a binding after its keyword: `IDENT = expr ;`
    fn parse_binding(
        &mut self,
        expected_name: &'static str,
    ) -> ParseResult<(String, Box<AstNode>)> {
        let name = self.expect_identifier(expected_name)?;
        self.expect_token(TokenKind::Equal, "'=' after binding name")?;
        let initializer = Box::new(self.parse_expression()?);
        self.expect_token(TokenKind::SemiColon, "';' after binding")?;
        Ok((name, initializer))
    }

    /// Block body after the opening brace.
    fn parse_block(&mut self) -> ParseResult<AstNode> {
        let mut statements = Vec::new();

        while !self.check(&[TokenKind::RightBrace]) && !self.at_end() {
            statements.push(self.parse_expression()?);
        }

        self.expect_token(TokenKind::RightBrace, "'}' to close block")?;
        Ok(AstNode::Block(statements))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::AstNode;
    use crate::parser::parse::{ParseError, Parser};

    fn parse_one(source: &str) -> AstNode {
        let mut program = Parser::from_source(source).parse().unwrap();
        assert_eq!(program.len(), 1, "{source:?}");
        program.nodes.remove(0)
    }

    #[test]
    fn test_let_binding() {
        let node = parse_one("let x = 5;");
        assert_eq!(
            node,
            AstNode::LetBinding {
                name: "x".into(),
                initializer: Box::new(AstNode::IntLiteral("5".into())),
            }
        );
    }

    #[test]
    fn test_const_binding() {
        match parse_one("const pi = 3.14;") {
            AstNode::ConstBinding { name, initializer } => {
                assert_eq!(name, "pi");
                assert_eq!(*initializer, AstNode::FloatLiteral("3.14".into()));
            }
            other => panic!("Expected const binding, got {other}"),
        }
    }

    #[test]
    fn test_block() {
        let node = parse_one("{ 1 x + 2 \"s\" }");
        match node {
            AstNode::Block(children) => {
                assert_eq!(children.len(), 3);
                assert!(matches!(children[1], AstNode::BinaryExpr { .. }));
            }
            other => panic!("Expected block, got {other}"),
        }

        assert_eq!(parse_one("{}"), AstNode::Block(Vec::new()));
    }

    #[test]
    fn test_missing_identifier() {
        let err = Parser::from_source("let = 5;").parse().unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "identifier after 'let'",
                found: "'='".into(),
            }
        );
    }

    #[test]
    fn test_missing_equal() {
        let err = Parser::from_source("const x 5;").parse().unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "'=' after binding name",
                found: "'5'".into(),
            }
        );
    }

    #[test]
    fn test_missing_semicolon() {
        let err = Parser::from_source("let x = 5").parse().unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "';' after binding",
                found: "end of input".into(),
            }
        );
    }

    #[test]
    fn test_unterminated_block() {
        let err = Parser::from_source("{ 1 2").parse().unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "'}' to close block",
                found: "end of input".into(),
            }
        );
    }

    #[test]
    fn test_keyword_as_binding_name() {
        let err = Parser::from_source("let while = 1;").parse().unwrap_err();
        assert!(matches!(err, ParseError::Expected { .. }));
    }
}
