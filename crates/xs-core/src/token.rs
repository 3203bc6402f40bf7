use serde::{Deserialize, Serialize};

/// Classification assigned by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Text,
    Label,
    BinaryOp,
    UnaryOp,
    Keyword,
    Literal,
    Variable,
    GameObject,
    ScriptObject,
    Null,
}

const TOKEN_KIND_NAMES: [(TokenKind, &str); 10] = [
    (TokenKind::Text, "Text"),
    (TokenKind::Label, "Label"),
    (TokenKind::BinaryOp, "BinaryOp"),
    (TokenKind::UnaryOp, "UnaryOp"),
    (TokenKind::Keyword, "Keyword"),
    (TokenKind::Literal, "Literal"),
    (TokenKind::Variable, "Variable"),
    (TokenKind::GameObject, "GameObject"),
    (TokenKind::ScriptObject, "ScriptObject"),
    (TokenKind::Null, "Null"),
];

impl TokenKind {
    pub fn name(self) -> &'static str {
        TOKEN_KIND_NAMES[self as usize].1
    }

    pub fn from_name(name: &str) -> Option<Self> {
        TOKEN_KIND_NAMES
            .iter()
            .find(|(_, text)| *text == name)
            .map(|(kind, _)| *kind)
    }

    /// Tokens of these kinds make up the shape of a command.
    pub fn is_hashed(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Label | Self::BinaryOp | Self::UnaryOp | Self::Keyword
        )
    }

    /// Tokens of these kinds never carry an argument. `Label` is absent on
    /// purpose: a label is both part of the shape and an argument.
    pub fn is_discarded_from_params(self) -> bool {
        matches!(
            self,
            Self::Text | Self::BinaryOp | Self::UnaryOp | Self::Keyword
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
