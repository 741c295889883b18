use std::path::Path;

use test_utils::{check_run, Expected};

#[test]
fn variable_declarations_and_arithmetic() -> Result<(), Box<dyn std::error::Error>> {
    check_run(
        Path::new("tests/fixtures/arithmetic.lox"),
        Expected {
            stdout: "3\n",
            stderr: "",
            exit_code: 0,
        },
    )
}

#[test]
fn reassignment_is_visible_to_later_statements() -> Result<(), Box<dyn std::error::Error>> {
    check_run(
        Path::new("tests/fixtures/reassignment.lox"),
        Expected {
            stdout: "3\n",
            stderr: "",
            exit_code: 0,
        },
    )
}

#[test]
fn undefined_variable_is_a_runtime_error() -> Result<(), Box<dyn std::error::Error>> {
    check_run(
        Path::new("tests/fixtures/undefined_variable.lox"),
        Expected {
            stdout: "",
            stderr: "Undefined variable 'x'\n",
            exit_code: 70,
        },
    )
}
