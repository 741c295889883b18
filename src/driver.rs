//! Wires the lexer, parser, printer and evaluator together behind the four
//! CLI subcommands, and maps their outcomes onto the process exit codes the
//! `loxi` binary promises: `0` success, `65` lexical/syntax error, `70`
//! runtime error.

use log::debug;

use crate::ast::{Expr, Stmt};
use crate::interpreter::{self, Environment};
use crate::lexer::{Lexer, Token};
use crate::parser::{self, ParseError};
use crate::printer;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DATA_ERROR: i32 = 65;
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// `tokenize`: print every token on its own line, then report any lexical
/// errors to stderr. A malformed source still prints the tokens found
/// around the bad characters; only the exit code reflects the failure.
pub fn tokenize(source: &str) -> i32 {
    let (tokens, errors) = Lexer::new(source).scan();

    for token in &tokens {
        println!("{}", token.format_line());
    }

    for error in &errors {
        eprintln!("{error}");
    }

    if errors.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_DATA_ERROR
    }
}

/// `parse`: print the S-expression form of each parsed statement. Falls
/// back to single-expression compatibility mode (see [`parse_statements_or_expression`])
/// so that bare expressions without a trailing `;` still parse.
pub fn parse(source: &str) -> i32 {
    let (tokens, lex_errors) = Lexer::new(source).scan();
    if !lex_errors.is_empty() {
        for error in &lex_errors {
            eprintln!("{error}");
        }
        return EXIT_DATA_ERROR;
    }

    match parse_statements_or_expression(tokens) {
        Ok(Parsed::Statements(statements)) => {
            for stmt in &statements {
                println!("{}", printer::print_stmt(stmt));
            }
            EXIT_SUCCESS
        }
        Ok(Parsed::Expression(expr)) => {
            println!("{}", printer::print_expr(&expr));
            EXIT_SUCCESS
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            EXIT_DATA_ERROR
        }
    }
}

/// `evaluate`: parse (with the same single-expression fallback as `parse`)
/// and evaluate, printing the resulting value or running the statements for
/// effect.
pub fn evaluate(source: &str) -> i32 {
    let (tokens, lex_errors) = Lexer::new(source).scan();
    if !lex_errors.is_empty() {
        for error in &lex_errors {
            eprintln!("{error}");
        }
        return EXIT_DATA_ERROR;
    }

    match parse_statements_or_expression(tokens) {
        Ok(Parsed::Expression(expr)) => {
            let (result, _) = interpreter::eval(&expr, Environment::new());
            match result {
                Ok(value) => {
                    println!("{value}");
                    EXIT_SUCCESS
                }
                Err(error) => {
                    eprintln!("{error}");
                    EXIT_RUNTIME_ERROR
                }
            }
        }
        Ok(Parsed::Statements(statements)) => run_statements(&statements),
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            EXIT_DATA_ERROR
        }
    }
}

/// `run`: parse a full program and execute its statements for effect. No
/// single-expression fallback here: `run` always expects statements.
pub fn run(source: &str) -> i32 {
    let (tokens, lex_errors) = Lexer::new(source).scan();
    if !lex_errors.is_empty() {
        for error in &lex_errors {
            eprintln!("{error}");
        }
        return EXIT_DATA_ERROR;
    }

    let (statements, parse_errors) = parser::parse(tokens);
    if !parse_errors.is_empty() {
        for error in &parse_errors {
            eprintln!("{error}");
        }
        return EXIT_DATA_ERROR;
    }

    run_statements(&statements)
}

fn run_statements(statements: &[Stmt]) -> i32 {
    match interpreter::run(statements) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            EXIT_RUNTIME_ERROR
        }
    }
}

enum Parsed {
    Statements(Vec<Stmt>),
    Expression(Expr),
}

/// `parse`/`evaluate` predate statement support in the reference test
/// suite, which feeds bare expressions with no trailing `;`. Detecting that
/// case from the error text is a compatibility hack, not a design choice:
/// `parser::parse` always reports a missing terminating semicolon with a
/// message starting `"Expected ';'"`, so seeing exactly that on the first
/// statement is the signal to retry as a single expression.
fn parse_statements_or_expression(tokens: Vec<Token>) -> Result<Parsed, Vec<ParseError>> {
    let (statements, errors) = parser::parse(tokens.clone());

    match errors.first() {
        Some(first) if first.message.starts_with("Expected ';'") => {
            debug!("falling back to single-expression parse: {first}");
            parser::parse_expression(tokens)
                .map(Parsed::Expression)
                .map_err(|err| vec![err])
        }
        Some(_) => Err(errors),
        None => Ok(Parsed::Statements(statements)),
    }
}
