use std::fmt::Display;

use thiserror::Error;
use xs_core::SyntaxError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub(crate) struct CliError {
    pub(crate) code: String,
    pub(crate) message: String,
}

impl CliError {
    pub(crate) fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<SyntaxError> for CliError {
    fn from(error: SyntaxError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

fn map_error(code: &'static str, error: impl Display) -> CliError {
    CliError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: CliError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).expect("string json")
    );
    1
}

pub(crate) fn map_cli_source_open(error: std::io::Error) -> CliError {
    map_error("CLI_SOURCE_OPEN", error)
}

pub(crate) fn map_cli_output_json(error: serde_json::Error) -> CliError {
    map_error("CLI_OUTPUT_JSON", error)
}
