use std::fs;
use std::process::ExitCode;

use tysp::{type_of_expression, type_of_program};

fn main() -> anyhow::Result<ExitCode> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: tysp <file>");
        return Ok(ExitCode::FAILURE);
    };

    let source = fs::read_to_string(&path)?;
    let result = if source.trim_start().starts_with("(program") {
        type_of_program(&source)
    } else {
        type_of_expression(&source)
    };

    match result {
        Ok(ty) => {
            println!("{}", ty);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
