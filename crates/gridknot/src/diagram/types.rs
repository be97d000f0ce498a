//! Small enums shared by the grid model, the move parser, and callers.
//!
//! Each enum has a canonical lower-case token (`Display`) that `FromStr`
//! accepts back, so moves and diagrams can be written as plain text.

use std::fmt;
use std::str::FromStr;

/// Grid cell content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Entry {
    X,
    O,
    #[default]
    Blank,
}

impl Entry {
    /// X ↔ O; `Blank` stays blank.
    #[inline]
    pub fn opposite(self) -> Entry {
        match self {
            Entry::X => Entry::O,
            Entry::O => Entry::X,
            Entry::Blank => Entry::Blank,
        }
    }
    #[inline]
    pub fn is_blank(self) -> bool {
        self == Entry::Blank
    }
    /// Token used by the delimited-text diagram format.
    pub fn token(self) -> &'static str {
        match self {
            Entry::X => "x",
            Entry::O => "o",
            Entry::Blank => " ",
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Cyclic translation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// Row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Col => "col",
        })
    }
}

/// Corner of the 2×2 block created by a stabilization that ends up blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    NW,
    SW,
    NE,
    SE,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::NW, Corner::SW, Corner::NE, Corner::SE];
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Corner::NW => "nw",
            Corner::SW => "sw",
            Corner::NE => "ne",
            Corner::SE => "se",
        })
    }
}

/// Unrecognized textual token for one of the enums above.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTokenError {
    pub kind: &'static str,
    pub token: String,
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} token {:?}", self.kind, self.token)
    }
}

impl std::error::Error for ParseTokenError {}

fn unknown(kind: &'static str, token: &str) -> ParseTokenError {
    ParseTokenError {
        kind,
        token: token.to_string(),
    }
}

impl FromStr for Entry {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Entry::X),
            "o" | "O" => Ok(Entry::O),
            // Blank cells are usually a single space; tolerate a few spellings.
            "" | " " | "_" | "." => Ok(Entry::Blank),
            other if other.trim().is_empty() => Ok(Entry::Blank),
            other => Err(unknown("entry", other)),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            _ => Err(unknown("direction", s)),
        }
    }
}

impl FromStr for Axis {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "row" => Ok(Axis::Row),
            "col" | "column" => Ok(Axis::Col),
            _ => Err(unknown("axis", s)),
        }
    }
}

impl FromStr for Corner {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nw" => Ok(Corner::NW),
            "sw" => Ok(Corner::SW),
            "ne" => Ok(Corner::NE),
            "se" => Ok(Corner::SE),
            _ => Err(unknown("corner", s)),
        }
    }
}
