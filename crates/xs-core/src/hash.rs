use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::{Token, TokenKind};

/// Shape identity of one statement plus the argument tokens it carries.
///
/// Equality and hashing only look at the shape: two calls of the same command
/// with different arguments compare equal.
#[derive(Debug, Clone, Serialize)]
pub struct CommandHash {
    hash: String,
    parameters: Vec<Token>,
}

impl CommandHash {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        Self {
            hash: Self::generate_hash(tokens),
            parameters: Self::separate_params(tokens),
        }
    }

    /// Tokenizes a canonical syntax string the way a call site of that
    /// command would be tokenized: `$N` markers become variables and every
    /// other whitespace-separated run becomes text.
    pub fn from_syntax(syntax: &str) -> Self {
        Self::from_tokens(&syntax_tokens(syntax))
    }

    pub fn generate_hash(tokens: &[Token]) -> String {
        tokens
            .iter()
            .filter(|token| token.kind.is_hashed())
            .map(|token| token.text.to_lowercase())
            .collect()
    }

    pub fn separate_params(tokens: &[Token]) -> Vec<Token> {
        tokens
            .iter()
            .filter(|token| !token.kind.is_discarded_from_params())
            .cloned()
            .collect()
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn parameters(&self) -> &[Token] {
        &self.parameters
    }

    pub fn into_parameters(self) -> Vec<Token> {
        self.parameters
    }
}

impl PartialEq for CommandHash {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for CommandHash {}

impl Hash for CommandHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

/// Matches a `$N` parameter marker, capturing `N`.
pub fn parameter_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\$(\d+)").expect("parameter marker regex"))
}

fn syntax_tokens(syntax: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for word in syntax.split_whitespace() {
        let mut offset = 0usize;
        for marker in parameter_marker_regex().find_iter(word) {
            if marker.start() > offset {
                tokens.push(Token::new(TokenKind::Text, &word[offset..marker.start()]));
            }
            tokens.push(Token::new(TokenKind::Variable, marker.as_str()));
            offset = marker.end();
        }
        if offset < word.len() {
            tokens.push(Token::new(TokenKind::Text, &word[offset..]));
        }
    }
    tokens
}
