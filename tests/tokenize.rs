use std::path::Path;

use test_utils::{check_tokenize, Expected};

#[test]
fn parens() -> Result<(), Box<dyn std::error::Error>> {
    check_tokenize(
        Path::new("tests/fixtures/parens.lox"),
        Expected {
            stdout: "LEFT_PAREN ( null\nLEFT_PAREN ( null\nRIGHT_PAREN ) null\nRIGHT_PAREN ) null\nEOF  null\n",
            stderr: "",
            exit_code: 0,
        },
    )
}
