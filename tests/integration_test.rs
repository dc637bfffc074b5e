// Integration tests for the sprig lexer and parser

use sprig::parser::ast::AstNode;
use sprig::parser::lexer::{Lexer, LexerConfig, Token, TokenKind, WhitespacePolicy};
use sprig::parser::{ParseError, Parser};

fn int(text: &str) -> AstNode {
    AstNode::IntLiteral(text.to_string())
}

#[test]
fn test_end_to_end_let() {
    let program = Parser::from_source("let total = 1 + 2 * 3;")
        .parse()
        .expect("Parsing failed");

    let expected = AstNode::LetBinding {
        name: "total".to_string(),
        initializer: Box::new(AstNode::binary(
            int("1"),
            "+",
            AstNode::binary(int("2"), "*", int("3")),
        )),
    };

    assert_eq!(program.nodes, vec![expected]);
    assert_eq!(
        program.to_string(),
        "LetBinding(total, BinaryExpr(IntLiteral(1), +, BinaryExpr(IntLiteral(2), *, IntLiteral(3))))\n"
    );
}

#[test]
fn test_parser_from_lexer_instance() {
    let lexer = Lexer::new("const name = \"sprig\";");
    let program = Parser::new(lexer).parse().expect("Parsing failed");

    match &program.nodes[0] {
        AstNode::ConstBinding { name, initializer } => {
            assert_eq!(name, "name");
            assert_eq!(**initializer, AstNode::StringLiteral("sprig".into()));
        }
        other => panic!("Expected const binding, got {other}"),
    }
}

#[test]
fn test_associativity() {
    let program = Parser::from_source("2 ^ 3 ^ 2").parse().unwrap();
    assert_eq!(
        program.nodes[0],
        AstNode::binary(int("2"), "^", AstNode::binary(int("3"), "^", int("2")))
    );

    let program = Parser::from_source("1 - 2 - 3").parse().unwrap();
    assert_eq!(
        program.nodes[0],
        AstNode::binary(AstNode::binary(int("1"), "-", int("2")), "-", int("3"))
    );
}

#[test]
fn test_mixed_statements() {
    let source = "let a = 1; const b = a * 2.5; { a b } a + b";
    let program = Parser::from_source(source).parse().unwrap();

    assert_eq!(program.len(), 4);
    assert!(matches!(program.nodes[0], AstNode::LetBinding { .. }));
    assert!(matches!(program.nodes[1], AstNode::ConstBinding { .. }));
    assert!(matches!(program.nodes[2], AstNode::Block(ref items) if items.len() == 2));
    assert!(matches!(program.nodes[3], AstNode::BinaryExpr { ref op, .. } if op == "+"));
}

#[test]
fn test_errors_return_no_partial_result() {
    let err = Parser::from_source("let = 5;").parse().unwrap_err();
    assert!(err.to_string().contains("identifier"));
    assert!(err.to_string().contains("'='"));

    let err = Parser::from_source("{ 1 2").parse().unwrap_err();
    assert!(matches!(err, ParseError::Expected { .. }));
    assert!(err.to_string().contains("'}'"));
}

#[test]
fn test_illegal_token_reaches_parser() {
    let err = Parser::from_source("let x = @;").parse().unwrap_err();
    assert_eq!(err.to_string(), "expected a primary token, got '@'");
}

#[test]
fn test_multiline_needs_ascii_whitespace() {
    let source = "let a = 1;\nlet b = 2;";

    let err = Parser::from_source(source).parse().unwrap_err();
    assert!(matches!(err, ParseError::ExpectedPrimary { .. }));

    let config = LexerConfig {
        whitespace: WhitespacePolicy::Ascii,
    };
    let program = Parser::new(Lexer::with_config(source, config))
        .parse()
        .unwrap();
    assert_eq!(program.len(), 2);
}

#[test]
fn test_tokenize_stream() {
    let tokens = Lexer::new("x += 1.5 ** y").tokenize();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "x"),
            Token::new(TokenKind::PlusEqual, "+="),
            Token::new(TokenKind::Float, "1.5"),
            Token::new(TokenKind::StarStar, "**"),
            Token::new(TokenKind::Identifier, "y"),
            Token::eof(),
        ]
    );
}
