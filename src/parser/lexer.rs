//! Lexer (tokenizer) for sprig source text
//!
//! The lexer is pull-based: the parser asks for one [`Token`] at a time via
//! [`Lexer::next_token`] and the lexer only ever holds its cursor. It never
//! fails. Characters it does not recognise come back as
//! [`TokenKind::IllegalToken`] and an unterminated string literal is closed
//! silently at end of input; reacting to either is the parser's job.

use std::fmt;

use tracing::trace;

/// Closed set of token kinds the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    /// `{`. Curly braces are braces; square brackets are brackets.
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    SemiColon,
    Colon,

    // Arithmetic and assignment
    Plus,       // +
    PlusPlus,   // ++
    PlusEqual,  // +=
    Minus,      // -
    MinusMinus, // --
    MinusEqual, // -=
    Star,       // *
    StarStar,   // **
    StarEqual,  // *=
    Slash,      // /
    SlashEqual, // /=
    Equal,      // =
    EqualEqual, // ==

    // Comparison
    GreaterThan,      // >
    GreaterThanEqual, // >=
    LessThan,         // <
    LessThanEqual,    // <=

    // Literals
    String,
    Int,
    Float,

    Identifier,

    // Keywords
    For,
    While,
    If,
    Else,
    Function,
    Return,
    Let,
    Const,
    Class,

    IllegalToken,
    Eof,
}

impl TokenKind {
    /// Keyword kind for `text`, if it is one. Matching is case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "for" => TokenKind::For,
            "while" => TokenKind::While,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "function" => TokenKind::Function,
            "return" => TokenKind::Return,
            "let" => TokenKind::Let,
            "const" => TokenKind::Const,
            "class" => TokenKind::Class,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::LeftBrace => "left_brace",
            TokenKind::RightBrace => "right_brace",
            TokenKind::LeftBracket => "left_bracket",
            TokenKind::RightBracket => "right_bracket",
            TokenKind::SemiColon => "semi_colon",
            TokenKind::Colon => "colon",
            TokenKind::Plus => "plus",
            TokenKind::PlusPlus => "plus_plus",
            TokenKind::PlusEqual => "plus_equal",
            TokenKind::Minus => "minus",
            TokenKind::MinusMinus => "minus_minus",
            TokenKind::MinusEqual => "minus_equal",
            TokenKind::Star => "star",
            TokenKind::StarStar => "star_star",
            TokenKind::StarEqual => "star_equal",
            TokenKind::Slash => "slash",
            TokenKind::SlashEqual => "slash_equal",
            TokenKind::Equal => "equal",
            TokenKind::EqualEqual => "equal_equal",
            TokenKind::GreaterThan => "greater_than",
            TokenKind::GreaterThanEqual => "greater_than_equal",
            TokenKind::LessThan => "less_than",
            TokenKind::LessThanEqual => "less_than_equal",
            TokenKind::String => "string",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Identifier => "identifier",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Function => "function",
            TokenKind::Return => "return",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::Class => "class",
            TokenKind::IllegalToken => "illegal_token",
            TokenKind::Eof => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit.
///
/// `lexeme` is the exact source text, except for string literals where it is
/// the raw text between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "eof")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Short human-readable form used in diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::String => format!("string \"{}\"", self.lexeme),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, '{}')", self.kind, self.lexeme)
    }
}

/// Which characters the lexer skips between tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WhitespacePolicy {
    /// Only the space character. Tabs and newlines lex as illegal tokens.
    #[default]
    SpaceOnly,
    /// Any ASCII whitespace.
    Ascii,
}

/// Lexer settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerConfig {
    pub whitespace: WhitespacePolicy,
}

/// Pull-based lexer over a source string
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    config: LexerConfig,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    pub fn with_config(input: &str, config: LexerConfig) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            config,
        }
    }

    /// Drain the lexer. The returned vector always ends with one eof token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Produce the next token. Past the end of input this keeps returning eof.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.advance() {
            None => Token::eof(),
            Some(ch) => self.classify(ch),
        };

        trace!(kind = %token.kind, lexeme = %token.lexeme, "token");
        token
    }

    /// Character classes are tried in a fixed order; the first match wins.
    fn classify(&mut self, ch: char) -> Token {
        match ch {
            '(' => Token::new(TokenKind::LeftParen, "("),
            ')' => Token::new(TokenKind::RightParen, ")"),
            '[' => Token::new(TokenKind::LeftBracket, "["),
            ']' => Token::new(TokenKind::RightBracket, "]"),
            '{' => Token::new(TokenKind::LeftBrace, "{"),
            '}' => Token::new(TokenKind::RightBrace, "}"),

            '+' => {
                if self.match_char('+') {
                    Token::new(TokenKind::PlusPlus, "++")
                } else if self.match_char('=') {
                    Token::new(TokenKind::PlusEqual, "+=")
                } else {
                    Token::new(TokenKind::Plus, "+")
                }
            }
            '-' => {
                if self.match_char('-') {
                    Token::new(TokenKind::MinusMinus, "--")
                } else if self.match_char('=') {
                    Token::new(TokenKind::MinusEqual, "-=")
                } else {
                    Token::new(TokenKind::Minus, "-")
                }
            }
            '*' => {
                if self.match_char('*') {
                    Token::new(TokenKind::StarStar, "**")
                } else if self.match_char('=') {
                    Token::new(TokenKind::StarEqual, "*=")
                } else {
                    Token::new(TokenKind::Star, "*")
                }
            }
            '/' => {
                if self.match_char('=') {
                    Token::new(TokenKind::SlashEqual, "/=")
                } else {
                    Token::new(TokenKind::Slash, "/")
                }
            }
            '=' => {
                if self.match_char('=') {
                    Token::new(TokenKind::EqualEqual, "==")
                } else {
                    Token::new(TokenKind::Equal, "=")
                }
            }
            '>' => {
                if self.match_char('=') {
                    Token::new(TokenKind::GreaterThanEqual, ">=")
                } else {
                    Token::new(TokenKind::GreaterThan, ">")
                }
            }
            '<' => {
                if self.match_char('=') {
                    Token::new(TokenKind::LessThanEqual, "<=")
                } else {
                    Token::new(TokenKind::LessThan, "<")
                }
            }

            ';' => Token::new(TokenKind::SemiColon, ";"),
            ':' => Token::new(TokenKind::Colon, ":"),

            '"' => self.string_literal(),
            '0'..='9' => self.number_literal(ch),
            'a'..='z' | 'A'..='Z' => self.identifier_or_keyword(ch),

            _ => Token::new(TokenKind::IllegalToken, ch.to_string()),
        }
    }

    /// String literal body up to the closing quote, taken verbatim.
    /// No escapes; a missing closing quote ends the literal at end of input.
    fn string_literal(&mut self) -> Token {
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                break;
            }
            string.push(ch);
        }

        Token::new(TokenKind::String, string)
    }

    /// Digits, optionally followed by one `.` and more digits.
    ///
    /// The literal ends before a second `.`, so `1.2.3` lexes as `1.2`, an
    /// illegal `.`, then `3`.
    fn number_literal(&mut self, first_digit: char) -> Token {
        let mut num_str = String::new();
        num_str.push(first_digit);
        self.consume_digits(&mut num_str);

        if self.match_char('.') {
            num_str.push('.');
            self.consume_digits(&mut num_str);
            return Token::new(TokenKind::Float, num_str);
        }

        Token::new(TokenKind::Int, num_str)
    }

    fn consume_digits(&mut self, out: &mut String) {
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            out.push(ch);
            self.advance();
        }
    }

    fn identifier_or_keyword(&mut self, first_char: char) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            ident.push(ch);
            self.advance();
        }

        match TokenKind::keyword(&ident) {
            Some(kind) => Token::new(kind, ident),
            None => Token::new(TokenKind::Identifier, ident),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            let skip = match self.config.whitespace {
                WhitespacePolicy::SpaceOnly => ch == ' ',
                WhitespacePolicy::Ascii => ch.is_ascii_whitespace(),
            };
            if !skip {
                break;
            }
            self.advance();
        }
    }

    /// Consume the current character if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}
