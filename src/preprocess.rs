//! Keybinding preprocessing.
//!
//! Scouts may type with keys that are more comfortable than the notation
//! characters. Lines starting with `!` are typed with those keys: the `!` is
//! dropped and every bound key is replaced by its notation character. All
//! other lines pass through untouched.

use std::collections::BTreeMap;

/// Marks a line typed with display keys.
pub const BOUND_LINE: char = '!';

/// Map of display key to notation character.
pub type Keybindings = BTreeMap<char, char>;

/// Apply keybindings to a whole transcript.
pub fn preprocess(text: &str, bindings: &Keybindings) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&preprocess_line(line, bindings));
    }
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Apply keybindings to one line.
pub fn preprocess_line(line: &str, bindings: &Keybindings) -> String {
    match line.strip_prefix(BOUND_LINE) {
        Some(rest) => rest
            .chars()
            .map(|c| bindings.get(&c).copied().unwrap_or(c))
            .collect(),
        None => line.to_string(),
    }
}

/// Number of lines that would be rewritten.
pub fn bound_lines(text: &str) -> usize {
    text.lines().filter(|l| l.starts_with(BOUND_LINE)).count()
}
