use std::path::Path;

use test_utils::{check_parse, Expected};

#[test]
fn precedence() -> Result<(), Box<dyn std::error::Error>> {
    check_parse(
        Path::new("tests/fixtures/precedence.lox"),
        Expected {
            stdout: "(+ 1.0 (* 2.0 3.0))\n",
            stderr: "",
            exit_code: 0,
        },
    )
}

#[test]
fn statement_form() -> Result<(), Box<dyn std::error::Error>> {
    check_parse(
        Path::new("tests/fixtures/arithmetic.lox"),
        Expected {
            stdout: "(var a 1.0)\n(var b 2.0)\n(print (+ a b))\n",
            stderr: "",
            exit_code: 0,
        },
    )
}
