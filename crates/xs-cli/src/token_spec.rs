use xs_catalog::ObjectLookup;
use xs_core::{Token, TokenKind};

use crate::CliError;

/// Parses `Kind:text` pairs separated by whitespace.
pub(crate) fn parse_token_spec(spec: &str) -> Result<Vec<Token>, CliError> {
    spec.split_whitespace()
        .map(|entry| {
            let Some((kind, text)) = entry.split_once(':') else {
                return Err(CliError::new(
                    "CLI_TOKEN_INVALID",
                    format!("Expected Kind:text, found \"{}\".", entry),
                ));
            };
            let kind = TokenKind::from_name(kind).ok_or_else(|| {
                CliError::new(
                    "CLI_TOKEN_INVALID",
                    format!("Unknown token kind \"{}\".", kind),
                )
            })?;
            Ok(Token::new(kind, text))
        })
        .collect()
}

/// Object tokens on the command line name their string as `page/id`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct InlineObjects;

impl ObjectLookup for InlineObjects {
    fn locate(&self, token: &Token) -> Option<(u32, u32)> {
        let (page, id) = token.text.split_once('/')?;
        Some((page.parse().ok()?, id.parse().ok()?))
    }
}
