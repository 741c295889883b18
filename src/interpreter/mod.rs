//! Tree-walking evaluator. Walks the AST against an [`Environment`],
//! yielding values for expressions or executing statements for effect.

mod environment;
mod error;
mod value;

pub use environment::Environment;
pub use error::RuntimeError;
pub use value::Value;

use crate::ast::{BinaryOp, Expr, Stmt, UnaryOp};

type EvalResult = (Result<Value, RuntimeError>, Environment);
type ExecResult = (Result<(), RuntimeError>, Environment);

/// Execute a whole program's statements in order against a fresh global
/// environment, stopping at the first runtime error.
pub fn run(statements: &[Stmt]) -> Result<(), RuntimeError> {
    let mut env = Environment::new();
    for stmt in statements {
        let (result, next_env) = exec(stmt, env);
        env = next_env;
        result?;
    }
    Ok(())
}

/// Execute a single statement for effect, threading the environment through.
pub fn exec(stmt: &Stmt, env: Environment) -> ExecResult {
    match stmt {
        Stmt::Expr(expr) => {
            let (result, env) = eval(expr, env);
            (result.map(|_| ()), env)
        }
        Stmt::Print(expr) => {
            let (result, env) = eval(expr, env);
            match result {
                Ok(value) => {
                    println!("{value}");
                    (Ok(()), env)
                }
                Err(err) => (Err(err), env),
            }
        }
        Stmt::Var { name, initializer } => {
            let (value, env) = match initializer {
                Some(expr) => {
                    let (result, env) = eval(expr, env);
                    match result {
                        Ok(value) => (value, env),
                        Err(err) => return (Err(err), env),
                    }
                }
                None => (Value::Nil, env),
            };
            (Ok(()), env.define(name, value))
        }
        Stmt::Block(statements) => {
            let mut env = env.push_scope();
            for stmt in statements {
                let (result, next_env) = exec(stmt, env);
                env = next_env;
                if let Err(err) = result {
                    return (Err(err), env.pop_scope());
                }
            }
            (Ok(()), env.pop_scope())
        }
    }
}

/// Evaluate an expression, returning its value (or the first runtime error)
/// alongside the (possibly updated) environment.
pub fn eval(expr: &Expr, env: Environment) -> EvalResult {
    match expr {
        Expr::NumberLiteral { value, .. } => (Ok(Value::Number(*value)), env),
        Expr::StringLiteral { value } => (Ok(Value::String(value.clone())), env),
        Expr::BooleanLiteral { value } => (Ok(Value::Boolean(*value)), env),
        Expr::NilLiteral => (Ok(Value::Nil), env),
        Expr::Grouping(inner) => eval(inner, env),
        Expr::Unary { op, right } => eval_unary(*op, right, env),
        Expr::Binary { left, op, right } => eval_binary(left, *op, right, env),
        Expr::Variable { name } => {
            let value = env.get(name).ok_or_else(|| RuntimeError::undefined_variable(name));
            (value, env)
        }
        Expr::Assignment { name, value } => {
            let (result, env) = eval(value, env);
            match result {
                Ok(value) => match env.assign(name, value.clone()) {
                    Some(env) => (Ok(value), env),
                    None => (Err(RuntimeError::undefined_variable(name)), env),
                },
                Err(err) => (Err(err), env),
            }
        }
    }
}

fn eval_unary(op: UnaryOp, right: &Expr, env: Environment) -> EvalResult {
    let (result, env) = eval(right, env);
    let value = match result {
        Ok(value) => value,
        Err(err) => return (Err(err), env),
    };

    let result = match op {
        UnaryOp::Not => Ok(Value::Boolean(!value.is_truthy())),
        UnaryOp::Negate => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::new("Operand must be a number for unary operator '-'")),
        },
    };

    (result, env)
}

/// Left is evaluated first, then right against the environment left left
/// behind; the final environment is returned regardless of which side (if
/// either) produced an error.
fn eval_binary(left: &Expr, op: BinaryOp, right: &Expr, env: Environment) -> EvalResult {
    let (left_result, env) = eval(left, env);
    let (right_result, env) = eval(right, env);

    let left_value = match left_result {
        Ok(value) => value,
        Err(err) => return (Err(err), env),
    };
    let right_value = match right_result {
        Ok(value) => value,
        Err(err) => return (Err(err), env),
    };

    (apply_binary_op(op, left_value, right_value), env)
}

fn apply_binary_op(op: BinaryOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    use BinaryOp::*;

    match op {
        Equal => Ok(Value::Boolean(values_equal(&left, &right))),
        NotEqual => Ok(Value::Boolean(!values_equal(&left, &right))),
        Add => match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::String(l), Value::String(r)) => Ok(Value::String(l + &r)),
            _ => Err(RuntimeError::new("Operands must be two numbers or two strings")),
        },
        Subtract | Multiply | Divide => {
            let (Value::Number(l), Value::Number(r)) = (left, right) else {
                return Err(RuntimeError::new("Operands must be numbers"));
            };
            match op {
                Subtract => Ok(Value::Number(l - r)),
                Multiply => Ok(Value::Number(l * r)),
                Divide => {
                    if r == 0.0 {
                        Err(RuntimeError::new("Division by zero"))
                    } else {
                        Ok(Value::Number(l / r))
                    }
                }
                _ => unreachable!(),
            }
        }
        Less | LessEqual | Greater | GreaterEqual => {
            let (Value::Number(l), Value::Number(r)) = (left, right) else {
                return Err(RuntimeError::new("Operands must be numbers"));
            };
            let result = match op {
                Less => l < r,
                LessEqual => l <= r,
                Greater => l > r,
                GreaterEqual => l >= r,
                _ => unreachable!(),
            };
            Ok(Value::Boolean(result))
        }
    }
}

/// Equality never errors: values of different runtime types are simply
/// unequal (`1 == "1"` is `false`, `nil == false` is `false`).
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Nil, Value::Nil) => true,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::{parse, parse_expression};

    fn eval_src(src: &str) -> Value {
        let (tokens, _) = Lexer::new(src).scan();
        let expr = parse_expression(tokens).expect("valid expression");
        eval(&expr, Environment::new()).0.expect("no runtime error")
    }

    fn eval_src_err(src: &str) -> RuntimeError {
        let (tokens, _) = Lexer::new(src).scan();
        let expr = parse_expression(tokens).expect("valid expression");
        eval(&expr, Environment::new()).0.expect_err("expected a runtime error")
    }

    #[test]
    fn negation() {
        assert_eq!(eval_src("-42"), Value::Number(-42.0));
    }

    #[test]
    fn double_negation_of_nil_is_true() {
        assert_eq!(eval_src("!nil"), Value::Boolean(true));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(
            eval_src("\"hello\" + \" \" + \"world\""),
            Value::String("hello world".to_owned())
        );
    }

    #[test]
    fn division_by_zero_errors() {
        assert_eq!(eval_src_err("1 / 0").message, "Division by zero");
    }

    #[test]
    fn equality_across_types_is_false() {
        assert_eq!(eval_src("1 == \"1\""), Value::Boolean(false));
        assert_eq!(eval_src("nil == false"), Value::Boolean(false));
    }

    #[test]
    fn truthiness_law_matches_double_negation() {
        for (src, truthy) in [("0", true), ("\"\"", true), ("nil", false), ("false", false)] {
            assert_eq!(eval_src(&format!("!!{src}")), Value::Boolean(truthy));
        }
    }

    fn run_src(src: &str) {
        let (tokens, _) = Lexer::new(src).scan();
        let (statements, errors) = parse(tokens);
        assert!(errors.is_empty(), "{errors:?}");
        run(&statements).expect("no runtime error");
    }

    #[test]
    fn variables_and_arithmetic() {
        run_src("var a = 1; var b = 2; print a + b;");
    }

    #[test]
    fn reassignment_is_visible_to_later_statements() {
        run_src("var a = 1; a = a + 2; print a;");
    }

    #[test]
    fn undefined_variable_is_a_runtime_error() {
        let (tokens, _) = Lexer::new("print x;").scan();
        let (statements, errors) = parse(tokens);
        assert!(errors.is_empty());
        let err = run(&statements).unwrap_err();
        assert_eq!(err.message, "Undefined variable 'x'");
    }

    #[test]
    fn block_scoped_variables_do_not_leak() {
        let (tokens, _) = Lexer::new("var a = 1; { var a = 2; } print a;").scan();
        let (statements, errors) = parse(tokens);
        assert!(errors.is_empty());
        run(&statements).expect("no runtime error");
    }
}
