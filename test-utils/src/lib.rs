use std::{
    error::Error,
    io,
    path::Path,
    process::{Command, Output},
    str,
};

const LOXI_PATH: &str = "./target/debug/loxi";

pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
    pub exit_code: i32,
}

impl<'a> Expected<'a> {
    fn assert_matches(self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(str::from_utf8(&output.stdout)?, self.stdout, "stdout mismatch");
        assert_eq!(str::from_utf8(&output.stderr)?, self.stderr, "stderr mismatch");
        assert_eq!(output.status.code(), Some(self.exit_code), "exit code mismatch");
        Ok(())
    }
}

fn run_loxi(subcommand: &str, src_path: &Path) -> Result<Output, io::Error> {
    Command::new(LOXI_PATH).arg(subcommand).arg(src_path).output()
}

fn check(subcommand: &str, src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    let output = run_loxi(subcommand, src_path)?;
    expected.assert_matches(&output)
}

pub fn check_tokenize(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    check("tokenize", src_path, expected)
}

pub fn check_parse(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    check("parse", src_path, expected)
}

pub fn check_evaluate(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    check("evaluate", src_path, expected)
}

pub fn check_run(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    check("run", src_path, expected)
}
