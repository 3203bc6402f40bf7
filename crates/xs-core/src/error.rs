use std::fmt;

use thiserror::Error;

/// Which fixed table a name failed to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Group,
    ParameterKind,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => f.write_str("command group"),
            Self::ParameterKind => f.write_str("parameter kind"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
    #[error("line {line}: unrecognized {kind} \"{name}\"")]
    UnrecognizedName {
        kind: NameKind,
        name: String,
        line: usize,
    },
    #[error("statement \"{hash}\" is ambiguous between commands {candidates:?}")]
    AmbiguousMatch { hash: String, candidates: Vec<u32> },
    #[error("unknown command \"{hash}\": {reason}")]
    NotFound { hash: String, reason: String },
    #[error("index {index} is out of range for a catalog of {len} commands")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0}")]
    Argument(String),
}

impl SyntaxError {
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    pub fn not_found(hash: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotFound {
            hash: hash.into(),
            reason: reason.into(),
        }
    }

    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    /// Stable machine-readable code, used by the command line front end.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Format { .. } => "FORMAT_ERROR",
            Self::UnrecognizedName { .. } => "UNRECOGNIZED_NAME",
            Self::AmbiguousMatch { .. } => "AMBIGUOUS_MATCH",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Self::Argument(_) => "ARGUMENT_ERROR",
        }
    }
}
