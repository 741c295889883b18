//! Recursive-descent parser over an immutable [`TokenCursor`]. Builds
//! expression/statement trees, recovering at statement boundaries so a
//! single `parse()` call can surface more than one syntax error.

mod cursor;

pub use cursor::*;

use std::fmt::{self, Display};

use crate::ast::{BinaryOp, Expr, Stmt, UnaryOp};
use crate::lexer::{Token, TokenKind};

/// A syntax error: a message plus the line it was found on. The parser
/// recovers from these at the `program` level by advancing one token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

type ParseResult<T> = Result<T, ParseError>;

/// Parse a full program, accumulating as many statements and errors as
/// possible. On error the parser advances one token and resumes at the next
/// declaration, per the recovery rule described by the grammar.
pub fn parse(tokens: Vec<Token>) -> (Vec<Stmt>, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let mut statements = vec![];
    let mut errors = vec![];

    while !parser.cursor.is_at_end() {
        match parser.declaration() {
            Ok(stmt) => statements.push(stmt),
            Err(err) => {
                errors.push(err);
                parser.cursor = parser.cursor.advance();
            }
        }
    }

    (statements, errors)
}

/// Parse a single bare expression, with no trailing `;` expected. Used by
/// the `evaluate`/`parse` single-expression compatibility mode.
pub fn parse_expression(tokens: Vec<Token>) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens);
    parser.expression()
}

struct Parser {
    cursor: TokenCursor,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
        }
    }

    fn advance(&mut self) -> Token {
        let token = self.cursor.current().clone();
        self.cursor = self.cursor.advance();
        token
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.cursor.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError {
                message: message.to_owned(),
                line: self.cursor.current().line,
            })
        }
    }

    // declaration → varDecl | statement
    fn declaration(&mut self) -> ParseResult<Stmt> {
        if self.cursor.check(TokenKind::VAR) {
            self.var_decl()
        } else {
            self.statement()
        }
    }

    // varDecl → "var" IDENTIFIER ( "=" expression )? ";"
    fn var_decl(&mut self) -> ParseResult<Stmt> {
        self.advance(); // 'var'
        let name = self.consume(TokenKind::IDENTIFIER, "Expect variable name.")?;

        let initializer = if self.cursor.check(TokenKind::EQUAL) {
            self.advance();
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::SEMICOLON, "Expected ';' after variable declaration.")?;

        Ok(Stmt::Var {
            name: name.lexeme,
            initializer,
        })
    }

    // statement → printStmt | block | exprStmt
    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.cursor.check(TokenKind::PRINT) {
            self.print_stmt()
        } else if self.cursor.check(TokenKind::LEFT_BRACE) {
            self.block_stmt()
        } else {
            self.expr_stmt()
        }
    }

    // printStmt → "print" expression ";"
    fn print_stmt(&mut self) -> ParseResult<Stmt> {
        self.advance(); // 'print'
        let expr = self.expression()?;
        self.consume(TokenKind::SEMICOLON, "Expected ';' after value.")?;
        Ok(Stmt::Print(expr))
    }

    // block → "{" declaration* "}"
    fn block_stmt(&mut self) -> ParseResult<Stmt> {
        self.advance(); // '{'
        let mut statements = vec![];

        while !self.cursor.check(TokenKind::RIGHT_BRACE) && !self.cursor.is_at_end() {
            statements.push(self.declaration()?);
        }

        self.consume(TokenKind::RIGHT_BRACE, "Expect '}' after block.")?;
        Ok(Stmt::Block(statements))
    }

    // exprStmt → expression ";"
    fn expr_stmt(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::SEMICOLON, "Expected ';' after expression.")?;
        Ok(Stmt::Expr(expr))
    }

    // expression → assignment
    fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    // assignment → IDENTIFIER "=" assignment | equality
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.equality()?;

        if self.cursor.check(TokenKind::EQUAL) {
            let equals_line = self.cursor.current().line;
            self.advance();
            let value = self.assignment()?;

            return match expr {
                Expr::Variable { name } => Ok(Expr::assignment(name, value)),
                _ => Err(ParseError {
                    message: "Invalid assignment target".to_owned(),
                    line: equals_line,
                }),
            };
        }

        Ok(expr)
    }

    // equality → comparison ( ("==" | "!=") comparison )*
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        loop {
            let op = match self.cursor.current().kind {
                TokenKind::EQUAL_EQUAL => BinaryOp::Equal,
                TokenKind::BANG_EQUAL => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.comparison()?;
            expr = Expr::binary(expr, op, right);
        }

        Ok(expr)
    }

    // comparison → term ( (">" | ">=" | "<" | "<=") term )*
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        loop {
            let op = match self.cursor.current().kind {
                TokenKind::GREATER => BinaryOp::Greater,
                TokenKind::GREATER_EQUAL => BinaryOp::GreaterEqual,
                TokenKind::LESS => BinaryOp::Less,
                TokenKind::LESS_EQUAL => BinaryOp::LessEqual,
                _ => break,
            };
            self.advance();
            let right = self.term()?;
            expr = Expr::binary(expr, op, right);
        }

        Ok(expr)
    }

    // term → factor ( ("+" | "-") factor )*
    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        loop {
            let op = match self.cursor.current().kind {
                TokenKind::PLUS => BinaryOp::Add,
                TokenKind::MINUS => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.factor()?;
            expr = Expr::binary(expr, op, right);
        }

        Ok(expr)
    }

    // factor → unary ( ("*" | "/") unary )*
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        loop {
            let op = match self.cursor.current().kind {
                TokenKind::STAR => BinaryOp::Multiply,
                TokenKind::SLASH => BinaryOp::Divide,
                _ => break,
            };
            self.advance();
            let right = self.unary()?;
            expr = Expr::binary(expr, op, right);
        }

        Ok(expr)
    }

    // unary → ("!" | "-") unary | primary
    fn unary(&mut self) -> ParseResult<Expr> {
        let op = match self.cursor.current().kind {
            TokenKind::BANG => Some(UnaryOp::Not),
            TokenKind::MINUS => Some(UnaryOp::Negate),
            _ => None,
        };

        if let Some(op) = op {
            self.advance();
            let right = self.unary()?;
            return Ok(Expr::unary(op, right));
        }

        self.primary()
    }

    // primary → NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER | "(" expression ")"
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.current().clone();

        match &token.kind {
            TokenKind::NUMBER => {
                self.advance();
                let crate::lexer::Literal::Num(value) = token.literal else {
                    unreachable!("NUMBER token without a numeric literal")
                };
                Ok(Expr::NumberLiteral {
                    value,
                    lexeme: token.lexeme,
                })
            }
            TokenKind::STRING => {
                self.advance();
                let crate::lexer::Literal::Str(value) = token.literal else {
                    unreachable!("STRING token without a string literal")
                };
                Ok(Expr::StringLiteral { value })
            }
            TokenKind::TRUE => {
                self.advance();
                Ok(Expr::BooleanLiteral { value: true })
            }
            TokenKind::FALSE => {
                self.advance();
                Ok(Expr::BooleanLiteral { value: false })
            }
            TokenKind::NIL => {
                self.advance();
                Ok(Expr::NilLiteral)
            }
            TokenKind::IDENTIFIER => {
                self.advance();
                Ok(Expr::Variable { name: token.lexeme })
            }
            TokenKind::LEFT_PAREN => {
                self.advance();
                let inner = self.expression()?;
                self.consume(TokenKind::RIGHT_PAREN, "Expected ')' after expression.")?;
                Ok(Expr::grouping(inner))
            }
            _ => Err(ParseError {
                message: "Expect expression.".to_owned(),
                line: token.line,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::printer::print_expr;

    fn parse_expr_src(src: &str) -> Expr {
        let (tokens, errors) = Lexer::new(src).scan();
        assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
        parse_expression(tokens).expect("expected a valid expression")
    }

    #[test]
    fn left_associative_subtraction() {
        let expr = parse_expr_src("1 - 2 - 3");
        assert_eq!(print_expr(&expr), "(- (- 1.0 2.0) 3.0)");
    }

    #[test]
    fn right_associative_assignment() {
        let (tokens, errors) = Lexer::new("a = b = c;").scan();
        assert!(errors.is_empty());
        let (stmts, parse_errors) = parse(tokens);
        assert!(parse_errors.is_empty(), "{parse_errors:?}");
        let Stmt::Expr(expr) = &stmts[0] else {
            panic!("expected expression statement")
        };
        assert_eq!(print_expr(expr), "(= a (= b c))");
    }

    #[test]
    fn precedence_of_addition_and_multiplication() {
        let expr = parse_expr_src("1 + 2 * 3");
        assert_eq!(print_expr(&expr), "(+ 1.0 (* 2.0 3.0))");
    }

    #[test]
    fn invalid_assignment_target_is_an_error() {
        let (tokens, _) = Lexer::new("1 = 2;").scan();
        let (_, errors) = parse(tokens);
        assert_eq!(errors[0].message, "Invalid assignment target");
    }

    #[test]
    fn missing_semicolon_is_reported() {
        let (tokens, _) = Lexer::new("var a = 1").scan();
        let (_, errors) = parse(tokens);
        assert!(errors[0].message.starts_with("Expected ';'"));
    }

    #[test]
    fn parser_recovers_and_finds_later_statements() {
        let (tokens, _) = Lexer::new("1 + ; var a = 1;").scan();
        let (stmts, errors) = parse(tokens);
        assert_eq!(errors.len(), 1);
        assert_eq!(stmts.len(), 1);
    }
}
