//! Lexical analysis: turns a source string into a flat token stream plus any
//! lexical errors encountered along the way. See [`Lexer::scan`].

mod cursor;
mod token;

pub use cursor::*;
pub use token::*;

use std::fmt::{self, Display};

/// A single lexical error: an unrecognised character or an unterminated
/// string, tagged with the line it was found on.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalError {
    pub line: usize,
    pub message: String,
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for LexicalError {}

/// Single-pass, state-machine scanner over a [`CharCursor`]. Construct with
/// [`Lexer::new`] and drive to completion with [`Lexer::scan`].
#[derive(Debug, Clone)]
pub struct Lexer {
    cursor: CharCursor,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            cursor: CharCursor::new(source),
            line: 1,
            tokens: vec![],
            errors: vec![],
        }
    }

    /// Scan the entire source, returning the token stream (always terminated
    /// by exactly one `EOF`) and any lexical errors collected along the way.
    pub fn scan(mut self) -> (Vec<Token>, Vec<LexicalError>) {
        while !self.cursor.is_at_end() {
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));
        (self.tokens, self.errors)
    }

    fn advance(&mut self) -> char {
        let current = self.cursor.current().expect("advance past end-of-input");
        self.cursor = self.cursor.advance();
        current
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.cursor.current() != Some(expected) {
            return false;
        }
        self.cursor = self.cursor.advance();
        true
    }

    fn push(&mut self, kind: TokenKind, lexeme: impl Into<String>) {
        self.tokens.push(Token::new(kind, lexeme, Literal::None, self.line));
    }

    fn scan_token(&mut self) {
        use TokenKind::*;

        let c = self.advance();
        match c {
            '(' => self.push(LEFT_PAREN, "("),
            ')' => self.push(RIGHT_PAREN, ")"),
            '{' => self.push(LEFT_BRACE, "{"),
            '}' => self.push(RIGHT_BRACE, "}"),
            '*' => self.push(STAR, "*"),
            '.' => self.push(DOT, "."),
            ',' => self.push(COMMA, ","),
            '+' => self.push(PLUS, "+"),
            '-' => self.push(MINUS, "-"),
            ';' => self.push(SEMICOLON, ";"),
            '=' => {
                if self.matches('=') {
                    self.push(EQUAL_EQUAL, "==");
                } else {
                    self.push(EQUAL, "=");
                }
            }
            '!' => {
                if self.matches('=') {
                    self.push(BANG_EQUAL, "!=");
                } else {
                    self.push(BANG, "!");
                }
            }
            '<' => {
                if self.matches('=') {
                    self.push(LESS_EQUAL, "<=");
                } else {
                    self.push(LESS, "<");
                }
            }
            '>' => {
                if self.matches('=') {
                    self.push(GREATER_EQUAL, ">=");
                } else {
                    self.push(GREATER, ">");
                }
            }
            '/' => {
                if self.matches('/') {
                    while self.cursor.current().is_some_and(|c| c != '\n') {
                        self.cursor = self.cursor.advance();
                    }
                } else {
                    self.push(SLASH, "/");
                }
            }
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '"' => self.scan_string(),
            '0'..='9' => self.scan_number(c),
            c if is_identifier_start(c) => self.scan_identifier(c),
            other => self.errors.push(LexicalError {
                line: self.line,
                message: format!("Unexpected character: {other}"),
            }),
        }
    }

    fn scan_string(&mut self) {
        let start_line = self.line;
        let mut value = String::new();

        loop {
            match self.cursor.current() {
                None => {
                    self.errors.push(LexicalError {
                        line: start_line,
                        message: "Unterminated string.".to_owned(),
                    });
                    return;
                }
                Some('\n') => {
                    self.errors.push(LexicalError {
                        line: start_line,
                        message: "Unterminated string.".to_owned(),
                    });
                    return;
                }
                Some('"') => {
                    self.cursor = self.cursor.advance();
                    break;
                }
                Some(c) => {
                    value.push(c);
                    self.cursor = self.cursor.advance();
                }
            }
        }

        self.tokens.push(Token::new(
            TokenKind::STRING,
            format!("\"{value}\""),
            Literal::Str(value),
            start_line,
        ));
    }

    fn scan_number(&mut self, first: char) {
        let mut lexeme = String::from(first);

        while let Some(c @ ('0'..='9' | '.')) = self.cursor.current() {
            lexeme.push(c);
            self.cursor = self.cursor.advance();
        }

        // A lexeme with more than one `.` (`1.2.3`) has no sane `parse_double`
        // reading, so it is rejected here rather than handed to the parser
        // as a `NAN`-valued NumberToken.
        if lexeme.matches('.').count() > 1 {
            self.errors.push(LexicalError {
                line: self.line,
                message: format!("Invalid number literal: {lexeme}"),
            });
            return;
        }

        let value: f64 = lexeme.parse().unwrap_or(f64::NAN);
        self.tokens
            .push(Token::new(TokenKind::NUMBER, lexeme, Literal::Num(value), self.line));
    }

    fn scan_identifier(&mut self, first: char) {
        let mut lexeme = String::from(first);

        while let Some(c) = self.cursor.current() {
            if c.is_ascii_alphanumeric() || c == '_' {
                lexeme.push(c);
                self.cursor = self.cursor.advance();
            } else {
                break;
            }
        }

        let kind = KEYWORDS.get(lexeme.as_str()).copied().unwrap_or(TokenKind::IDENTIFIER);
        self.push(kind, lexeme);
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> Vec<Token> {
        Lexer::new(src).scan().0
    }

    #[test]
    fn ends_with_single_eof() {
        let tokens = scan("(( ))");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
        assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(), 1);
    }

    #[test]
    fn two_char_operators() {
        let tokens = scan("== != <= >=");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::EQUAL_EQUAL,
                TokenKind::BANG_EQUAL,
                TokenKind::LESS_EQUAL,
                TokenKind::GREATER_EQUAL,
                TokenKind::EOF,
            ]
        );
    }

    #[test]
    fn comment_is_skipped() {
        let tokens = scan("1 // hello\n2");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::NUMBER, TokenKind::NUMBER, TokenKind::EOF]);
    }

    #[test]
    fn string_literal_without_quotes() {
        let tokens = scan("\"hello\"");
        let Literal::Str(value) = &tokens[0].literal else {
            panic!("expected string literal")
        };
        assert_eq!(value, "hello");
    }

    #[test]
    fn unterminated_string_is_reported() {
        let (_, errors) = Lexer::new("\"hello").scan();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unterminated string.");
    }

    #[test]
    fn unexpected_character_is_reported_and_lexing_continues() {
        let (tokens, errors) = Lexer::new("@1").scan();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains('@'));
        assert_eq!(tokens[0].kind, TokenKind::NUMBER);
    }

    #[test]
    fn keyword_vs_identifier() {
        let tokens = scan("and andy");
        assert_eq!(tokens[0].kind, TokenKind::AND);
        assert_eq!(tokens[1].kind, TokenKind::IDENTIFIER);
    }

    #[test]
    fn number_literal_value() {
        let tokens = scan("10.40");
        let Literal::Num(value) = tokens[0].literal else {
            panic!("expected number literal")
        };
        assert_eq!(value, 10.40);
    }

    #[test]
    fn number_with_two_dots_is_a_lexical_error() {
        let (tokens, errors) = Lexer::new("1.2.3").scan();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("1.2.3"));
        assert_eq!(tokens, vec![Token::eof(1)]);
    }
}
