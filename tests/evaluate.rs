use std::path::Path;

use test_utils::{check_evaluate, Expected};

#[test]
fn negation() -> Result<(), Box<dyn std::error::Error>> {
    check_evaluate(
        Path::new("tests/fixtures/negate.lox"),
        Expected {
            stdout: "-42\n",
            stderr: "",
            exit_code: 0,
        },
    )
}

#[test]
fn double_negation_of_nil() -> Result<(), Box<dyn std::error::Error>> {
    check_evaluate(
        Path::new("tests/fixtures/not_nil.lox"),
        Expected {
            stdout: "true\n",
            stderr: "",
            exit_code: 0,
        },
    )
}

#[test]
fn fractional_number_trims_trailing_zero() -> Result<(), Box<dyn std::error::Error>> {
    check_evaluate(
        Path::new("tests/fixtures/fraction.lox"),
        Expected {
            stdout: "10.4\n",
            stderr: "",
            exit_code: 0,
        },
    )
}

#[test]
fn string_concatenation() -> Result<(), Box<dyn std::error::Error>> {
    check_evaluate(
        Path::new("tests/fixtures/string_concat.lox"),
        Expected {
            stdout: "hello world\n",
            stderr: "",
            exit_code: 0,
        },
    )
}

#[test]
fn division_by_zero_is_a_runtime_error() -> Result<(), Box<dyn std::error::Error>> {
    check_evaluate(
        Path::new("tests/fixtures/division_by_zero.lox"),
        Expected {
            stdout: "",
            stderr: "Division by zero\n",
            exit_code: 70,
        },
    )
}
