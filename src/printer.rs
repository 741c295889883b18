//! Pretty-prints the AST in Lisp-like, fully parenthesised form.

use crate::ast::{BinaryOp, Expr, Stmt, UnaryOp};

impl UnaryOp {
    fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
        }
    }
}

/// Render an expression as a parenthesised S-expression.
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::NumberLiteral { value, .. } => format_number(*value),
        Expr::StringLiteral { value } => value.clone(),
        Expr::BooleanLiteral { value } => value.to_string(),
        Expr::NilLiteral => "nil".to_owned(),
        Expr::Grouping(inner) => format!("(group {})", print_expr(inner)),
        Expr::Unary { op, right } => format!("({} {})", op.symbol(), print_expr(right)),
        Expr::Binary { left, op, right } => {
            format!("({} {} {})", op.symbol(), print_expr(left), print_expr(right))
        }
        Expr::Variable { name } => name.clone(),
        Expr::Assignment { name, value } => format!("(= {} {})", name, print_expr(value)),
    }
}

/// Render a statement the same way, for the `parse` subcommand.
pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expr(e) => format!("(expr {})", print_expr(e)),
        Stmt::Print(e) => format!("(print {})", print_expr(e)),
        Stmt::Var { name, initializer } => match initializer {
            Some(e) => format!("(var {} {})", name, print_expr(e)),
            None => format!("(var {} nil)", name),
        },
        Stmt::Block(stmts) => {
            let inner = stmts.iter().map(print_stmt).collect::<Vec<_>>().join(" ");
            format!("(block {inner})")
        }
    }
}

/// The canonical literal rendering the printer (and the `NUMBER` lexeme in
/// `tokenize` output) uses for numbers: `1 + 2` prints as `1.0`.
fn format_number(value: f64) -> String {
    if value == value.trunc() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
