//! Decode errors.

use std::fmt;

use crate::lineup::LineupError;
use crate::rally::Mode;

/// Why a rally could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeErrorKind {
    #[error("missing header separator '{0}'")]
    MissingSeparator(char),

    #[error(transparent)]
    Lineup(#[from] LineupError),

    #[error("value {value} is out of range, expected {expected}")]
    OutOfRange { value: usize, expected: &'static str },

    #[error("expected marker '{expected}', found '{found}'")]
    WrongMarker { expected: char, found: char },

    #[error("token mixes marker characters")]
    MixedRun,

    #[error("unknown marker character '{0}'")]
    UnknownMarker(char),

    #[error("malformed substitution, expected <out-in> or <->")]
    MalformedSubstitution,

    #[error("point is already over, expected an empty token")]
    AfterTerminal,
}

/// Where in a rally line decoding failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPosition {
    Header { text: String },
    Token { index: usize, text: String, mode: Mode },
}

/// A rally that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// 1-based index of the rally line.
    pub rally: usize,
    pub position: ErrorPosition,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn header(rally: usize, text: &str, kind: impl Into<DecodeErrorKind>) -> Self {
        Self {
            rally,
            position: ErrorPosition::Header {
                text: text.trim().to_string(),
            },
            kind: kind.into(),
        }
    }

    pub fn token(
        rally: usize,
        index: usize,
        text: &str,
        mode: Mode,
        kind: impl Into<DecodeErrorKind>,
    ) -> Self {
        Self {
            rally,
            position: ErrorPosition::Token {
                index,
                text: text.to_string(),
                mode,
            },
            kind: kind.into(),
        }
    }

    /// Mode the state machine was in, if the error came from a token.
    pub fn mode(&self) -> Option<Mode> {
        match &self.position {
            ErrorPosition::Token { mode, .. } => Some(*mode),
            ErrorPosition::Header { .. } => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            ErrorPosition::Header { text } => {
                write!(f, "rally {}, header '{}': {}", self.rally, text, self.kind)
            }
            ErrorPosition::Token { index, text, mode } => write!(
                f,
                "rally {}, token {} '{}' while {}: {}",
                self.rally,
                index + 1,
                text,
                mode,
                self.kind
            ),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
