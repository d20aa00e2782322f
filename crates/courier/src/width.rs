//! Character width registry for the centering engine.
//!
//! Widths are pixel counts in the baseline display font. The table is
//! mutable at runtime: the hosting application may register widths for
//! custom glyphs or remove entries again.

use std::collections::HashMap;
use std::sync::RwLock;

use phf::phf_map;

/// Fallback width for characters without an entry.
pub const DEFAULT_WIDTH: u8 = 5;

/// Default glyph widths for the baseline font.
static DEFAULT_WIDTHS: phf::Map<char, u8> = phf_map! {
    'A' => 5, 'a' => 5,
    'B' => 5, 'b' => 5,
    'C' => 5, 'c' => 5,
    'D' => 5, 'd' => 5,
    'E' => 5, 'e' => 5,
    'F' => 5, 'f' => 4,
    'G' => 5, 'g' => 5,
    'H' => 5, 'h' => 5,
    'I' => 3, 'i' => 1,
    'J' => 5, 'j' => 5,
    'K' => 5, 'k' => 4,
    'L' => 5, 'l' => 1,
    'M' => 5, 'm' => 5,
    'N' => 5, 'n' => 5,
    'O' => 5, 'o' => 5,
    'P' => 5, 'p' => 5,
    'Q' => 5, 'q' => 5,
    'R' => 5, 'r' => 5,
    'S' => 5, 's' => 5,
    'T' => 5, 't' => 4,
    'U' => 5, 'u' => 5,
    'V' => 5, 'v' => 5,
    'W' => 5, 'w' => 5,
    'X' => 5, 'x' => 5,
    'Y' => 5, 'y' => 5,
    'Z' => 5, 'z' => 5,
    '0' => 5, '1' => 5, '2' => 5, '3' => 5, '4' => 5,
    '5' => 5, '6' => 5, '7' => 5, '8' => 5, '9' => 5,
    '!' => 1, '@' => 6, '#' => 5, '$' => 5, '%' => 5,
    '^' => 5, '&' => 5, '*' => 5,
    '(' => 4, ')' => 4,
    '-' => 5, '_' => 5, '+' => 5, '=' => 5,
    '{' => 4, '}' => 4, '[' => 3, ']' => 3,
    ':' => 1, ';' => 1, '"' => 3, '\'' => 1,
    '<' => 4, '>' => 4, '?' => 5, '/' => 5, '\\' => 5,
    '|' => 1, '~' => 5, '`' => 2,
    '.' => 1, ',' => 1, ' ' => 3,
};

/// Mutable character-to-width mapping.
///
/// Reads happen on every centered line while writes are rare administrative
/// operations, so the map sits behind an `RwLock`. Lookups never fail:
/// unmapped characters fall back to [`DEFAULT_WIDTH`].
pub struct CharTable {
    widths: RwLock<HashMap<char, u8>>,
}

impl CharTable {
    /// A table seeded with the default font metrics.
    pub fn new() -> Self {
        let widths = DEFAULT_WIDTHS
            .entries()
            .map(|(&c, &width)| (c, width))
            .collect();
        Self {
            widths: RwLock::new(widths),
        }
    }

    /// Display width of `c`.
    pub fn width(&self, c: char) -> u8 {
        self.widths
            .read()
            .unwrap()
            .get(&c)
            .copied()
            .unwrap_or(DEFAULT_WIDTH)
    }

    /// Display width of `c` in bold: one extra pixel, except for the space
    /// character.
    pub fn bold_width(&self, c: char) -> u8 {
        let width = self.width(c);
        if c == ' ' { width } else { width + 1 }
    }

    /// Register a width, returning the previous value if one existed.
    pub fn insert(&self, c: char, width: u8) -> Option<u8> {
        self.widths.write().unwrap().insert(c, width)
    }

    /// Remove a character's entry, returning the removed width.
    ///
    /// Lookups for the character fall back to [`DEFAULT_WIDTH`] afterwards.
    pub fn remove(&self, c: char) -> Option<u8> {
        self.widths.write().unwrap().remove(&c)
    }

    /// Number of registered characters.
    pub fn len(&self) -> usize {
        self.widths.read().unwrap().len()
    }

    /// Returns true if no characters are registered.
    pub fn is_empty(&self) -> bool {
        self.widths.read().unwrap().is_empty()
    }
}

impl Default for CharTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_defaults() {
        let table = CharTable::new();
        assert_eq!(table.width('a'), 5);
        assert_eq!(table.width('i'), 1);
        assert_eq!(table.width('@'), 6);
        assert_eq!(table.width(' '), 3);
    }

    #[test]
    fn unmapped_falls_back() {
        let table = CharTable::new();
        assert_eq!(table.width('✦'), DEFAULT_WIDTH);
    }

    #[test]
    fn bold_adds_one_except_space() {
        let table = CharTable::new();
        assert_eq!(table.bold_width('a'), 6);
        assert_eq!(table.bold_width(' '), 3);
    }

    #[test]
    fn insert_returns_previous() {
        let table = CharTable::new();
        assert_eq!(table.insert('✦', 7), None);
        assert_eq!(table.width('✦'), 7);
        assert_eq!(table.insert('✦', 9), Some(7));
        assert_eq!(table.remove('✦'), Some(9));
        assert_eq!(table.width('✦'), DEFAULT_WIDTH);
    }
}
