//! Textual entry points: lex, parse, and type check a source string,
//! returning the printed type.
//!
//! `type_of_expression` handles a single top-level form; `type_of_program`
//! additionally validates the `(program ...)` wrapper before parsing.

use std::fmt;

use super::check::Checker;
use super::env::TEnv;
use super::error::TypeError;
use crate::lexer::Token;
use crate::parser::{ParseError, ParseState, parse_form, parse_program};

/// Any failure of the source-to-type pipeline.
#[derive(Debug, Clone)]
pub enum CheckError {
    /// The source could not be tokenized.
    Lex(String),
    /// The token stream does not form a valid expression or program.
    Parse(ParseError),
    /// The source is not wrapped in the program marker.
    MalformedProgram { message: String },
    /// The parsed form is ill-typed.
    Type(TypeError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckError::Lex(msg) => write!(f, "Lex error: {}", msg),
            CheckError::Parse(err) => write!(f, "{}", err),
            CheckError::MalformedProgram { message } => {
                write!(f, "Malformed program: {}", message)
            }
            CheckError::Type(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CheckError {}

impl From<ParseError> for CheckError {
    fn from(err: ParseError) -> Self {
        CheckError::Parse(err)
    }
}

impl From<TypeError> for CheckError {
    fn from(err: TypeError) -> Self {
        CheckError::Type(err)
    }
}

fn lex(source: &str) -> Result<ParseState, CheckError> {
    let tokens = Token::lex(source).map_err(|e| CheckError::Lex(e.to_string()))?;
    Ok(ParseState::new(tokens))
}

fn expect_consumed(state: &ParseState) -> Result<(), CheckError> {
    match state.peek() {
        Some(tok) => Err(CheckError::Parse(
            ParseError::new("unexpected token after complete form")
                .expected("end of input")
                .found(tok.describe())
                .at(tok.pos()),
        )),
        None => Ok(()),
    }
}

/// Type check a single top-level form and return its printed type.
pub fn type_of_expression(source: &str) -> Result<String, CheckError> {
    let mut state = lex(source)?;
    let form = parse_form(&mut state)?;
    expect_consumed(&state)?;

    let mut checker = Checker::new();
    let (ty, _) = checker.type_of_form(&form, &TEnv::empty())?;
    Ok(ty.pretty())
}

/// Type check a whole `(program ...)` source and return its printed type.
pub fn type_of_program(source: &str) -> Result<String, CheckError> {
    let trimmed = source.trim();
    if !trimmed.starts_with("(program") || !trimmed.ends_with(')') {
        return Err(CheckError::MalformedProgram {
            message: "source must be wrapped in (program ...)".to_string(),
        });
    }

    let mut state = lex(source)?;
    let program = parse_program(&mut state)?;
    expect_consumed(&state)?;

    let ty = Checker::new().type_of_program(&program)?;
    Ok(ty.pretty())
}
