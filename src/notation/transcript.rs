//! Transcript reader.
//!
//! A transcript holds one rally line per line of text. Blank lines and lines
//! starting with `#` are ignored. Lines starting with `>` carry metadata:
//!
//! ```text
//! >  3 1  15 2  8 4         serve positions: player, position
//! >>  3 F  15 J  8 H        serve types: player, type
//! ```

use std::collections::BTreeMap;

use crate::lineup::PlayerId;
use crate::notation::codes::ServeType;

const METADATA: char = '>';
const COMMENT: char = '#';

/// Positions a server can serve from along the baseline.
pub const SERVE_POSITIONS: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("line {line}: metadata entries must come in pairs, '{entry}' has no value")]
    UnpairedEntry { line: usize, entry: String },

    #[error("line {line}: '{text}' is not a player number")]
    InvalidPlayer { line: usize, text: String },

    #[error("line {line}: serve position '{text}' must be a number between 1 and 5")]
    InvalidServePosition { line: usize, text: String },

    #[error("line {line}: unknown serve type '{text}' (use F, J, H or 1-4)")]
    InvalidServeType { line: usize, text: String },

    #[error("line {line}: unknown metadata line starting with '{prefix}'")]
    UnknownMetadata { line: usize, prefix: String },
}

/// One rally line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RallyLine {
    /// 1-based index among rally lines.
    pub index: usize,
    /// 1-based line number in the source text.
    pub line_number: usize,
    pub text: String,
}

/// A parsed transcript: metadata tables and rally lines in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub serve_positions: BTreeMap<PlayerId, u8>,
    pub serve_types: BTreeMap<PlayerId, ServeType>,
    pub rallies: Vec<RallyLine>,
}

impl Transcript {
    pub fn parse(text: &str) -> Result<Self, TranscriptError> {
        let mut transcript = Transcript::default();

        for (i, line) in text.lines().enumerate() {
            let line_number = i + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix(METADATA) {
                match rest.strip_prefix(METADATA) {
                    Some(types) if types.starts_with(METADATA) => {
                        return Err(TranscriptError::UnknownMetadata {
                            line: line_number,
                            prefix: ">>>".to_string(),
                        })
                    }
                    Some(types) => transcript.read_serve_types(line_number, types)?,
                    None => transcript.read_serve_positions(line_number, rest)?,
                }
                continue;
            }

            transcript.rallies.push(RallyLine {
                index: transcript.rallies.len() + 1,
                line_number,
                text: line.to_string(),
            });
        }

        Ok(transcript)
    }

    fn read_serve_positions(&mut self, line: usize, text: &str) -> Result<(), TranscriptError> {
        for (player, value) in pairs(line, text)? {
            let position = value
                .parse::<u8>()
                .ok()
                .filter(|p| SERVE_POSITIONS.contains(p))
                .ok_or_else(|| TranscriptError::InvalidServePosition {
                    line,
                    text: value.to_string(),
                })?;
            self.serve_positions.insert(player, position);
        }
        Ok(())
    }

    fn read_serve_types(&mut self, line: usize, text: &str) -> Result<(), TranscriptError> {
        for (player, value) in pairs(line, text)? {
            let serve_type =
                ServeType::parse(value).ok_or_else(|| TranscriptError::InvalidServeType {
                    line,
                    text: value.to_string(),
                })?;
            self.serve_types.insert(player, serve_type);
        }
        Ok(())
    }
}

fn pairs(line: usize, text: &str) -> Result<Vec<(PlayerId, &str)>, TranscriptError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    fields
        .chunks(2)
        .map(|chunk| {
            let &[player, value] = chunk else {
                return Err(TranscriptError::UnpairedEntry {
                    line,
                    entry: chunk.join(" "),
                });
            };
            player
                .parse::<PlayerId>()
                .map(|p| (p, value))
                .map_err(|_| TranscriptError::InvalidPlayer {
                    line,
                    text: player.to_string(),
                })
        })
        .collect()
}
