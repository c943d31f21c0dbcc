//! Structured verse positions and module bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Testament index of the Old Testament.
pub const OLD_TESTAMENT: u8 = 1;
/// Testament index of the New Testament.
pub const NEW_TESTAMENT: u8 = 2;

/// A verse position: `(testament, book, chapter, verse)`.
///
/// Book indices are 1-based within their testament. Field order matches
/// canon order, so the derived `Ord` compares positions the way a reader
/// walks through the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub testament: u8,
    pub book: u8,
    pub chapter: u16,
    pub verse: u16,
}

impl Position {
    pub const fn new(testament: u8, book: u8, chapter: u16, verse: u16) -> Self {
        Self {
            testament,
            book,
            chapter,
            verse,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(OLD_TESTAMENT, 1, 1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.testament, self.book, self.chapter, self.verse
        )
    }
}

/// Inclusive range of positions a module provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleBounds {
    pub lower: Position,
    pub upper: Position,
}

impl ModuleBounds {
    pub const fn new(lower: Position, upper: Position) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.lower <= position && position <= self.upper
    }

    /// Snap `position` to the nearest bound. The flag is `true` when the
    /// position had to move.
    pub fn clamp(&self, position: Position) -> (Position, bool) {
        if position < self.lower {
            (self.lower, true)
        } else if position > self.upper {
            (self.upper, true)
        } else {
            (position, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_json() {
        let bounds = ModuleBounds::new(Position::new(1, 1, 1, 1), Position::new(1, 39, 4, 6));
        let json = serde_json::to_string(&bounds).unwrap();
        assert_eq!(
            json,
            r#"{"lower":{"testament":1,"book":1,"chapter":1,"verse":1},"upper":{"testament":1,"book":39,"chapter":4,"verse":6}}"#
        );

        let parsed: ModuleBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bounds);
        assert!(serde_json::from_str::<Position>(r#"{"testament":1,"book":300}"#).is_err());
    }

    #[test]
    fn test_ordering_follows_canon() {
        let malachi = Position::new(1, 39, 4, 6);
        let matthew = Position::new(2, 1, 1, 1);
        let genesis_2 = Position::new(1, 1, 2, 1);
        let genesis_1_31 = Position::new(1, 1, 1, 31);

        assert!(malachi < matthew);
        assert!(genesis_1_31 < genesis_2);
        assert_eq!(Position::default(), Position::new(1, 1, 1, 1));
    }

    #[test]
    fn test_clamp_to_bounds() {
        let bounds = ModuleBounds::new(Position::new(1, 1, 1, 1), Position::new(1, 39, 4, 6));

        assert_eq!(
            bounds.clamp(Position::new(2, 1, 1, 1)),
            (Position::new(1, 39, 4, 6), true)
        );
        assert_eq!(
            bounds.clamp(Position::new(1, 19, 23, 1)),
            (Position::new(1, 19, 23, 1), false)
        );
        assert!(!bounds.contains(Position::new(1, 1, 1, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 4, 3, 16).to_string(), "2.4.3.16");
    }
}
