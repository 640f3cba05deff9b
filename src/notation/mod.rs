//! Scouting notation: transcripts, rally lines and tokens.

pub mod codes;
mod error;
mod token;
mod transcript;

pub use error::{DecodeError, DecodeErrorKind, ErrorPosition};
pub use token::{split_rally, tokenize, RawToken, Syntax, Token, Tokens};
pub use transcript::{RallyLine, Transcript, TranscriptError, SERVE_POSITIONS};
