//! Rally line splitting and tokenization.
//!
//! Tokens are separated by single spaces, so two consecutive spaces produce an
//! empty token. Empty tokens are meaningful: they end the current sequence.
//! Tokenization is lazy and never fails; classification into [`Token`]
//! happens when the state machine consumes a token, so errors can name the
//! mode the machine was in.

use std::fmt;

use super::error::DecodeErrorKind;
use crate::lineup::Substitution;

/// Characters that carry meaning in a rally line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    /// Splits the lineup header from the action tokens.
    pub separator: char,
    /// Marker for every action code.
    pub action_marker: char,
    /// Marker for "ball came back from the opponent".
    pub return_marker: char,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            separator: '>',
            action_marker: '.',
            return_marker: ',',
        }
    }
}

impl Syntax {
    fn is_marker(&self, c: char) -> bool {
        c == self.action_marker || c == self.return_marker
    }
}

/// Split a rally line into lineup header and action text at the first
/// separator. Returns `None` when the separator is missing.
pub fn split_rally(line: &str, separator: char) -> Option<(&str, &str)> {
    let line = line.trim_end_matches(['\r', '\n']);
    line.split_once(separator)
}

/// Lazily split action text into raw tokens.
pub fn tokenize(action_text: &str) -> Tokens<'_> {
    Tokens {
        inner: action_text.trim_end_matches(['\r', '\n']).split(' '),
        index: 0,
    }
}

/// Iterator over the raw tokens of one rally line.
pub struct Tokens<'a> {
    inner: std::str::Split<'a, char>,
    index: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.inner.next()?;
        let token = RawToken {
            index: self.index,
            text,
        };
        self.index += 1;
        Some(token)
    }
}

/// Token text and its position in the action text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl RawToken<'_> {
    /// Classify the raw text. Runs must repeat a single known marker.
    pub fn classify(&self, syntax: &Syntax) -> Result<Token, DecodeErrorKind> {
        let text = self.text;
        let Some(first) = text.chars().next() else {
            return Ok(Token::Empty);
        };

        if first == '<' {
            return Substitution::parse(text)
                .map(Token::Substitution)
                .ok_or(DecodeErrorKind::MalformedSubstitution);
        }

        if !syntax.is_marker(first) {
            return Err(DecodeErrorKind::UnknownMarker(first));
        }

        if let Some(other) = text.chars().find(|c| *c != first) {
            return Err(if syntax.is_marker(other) {
                DecodeErrorKind::MixedRun
            } else {
                DecodeErrorKind::UnknownMarker(other)
            });
        }

        Ok(Token::Run {
            marker: first,
            len: text.chars().count(),
        })
    }
}

/// A classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Empty,
    Run { marker: char, len: usize },
    Substitution(Substitution),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Empty => Ok(()),
            Token::Run { marker, len } => {
                for _ in 0..*len {
                    write!(f, "{}", marker)?;
                }
                Ok(())
            }
            Token::Substitution(sub) => write!(f, "{}", sub),
        }
    }
}
