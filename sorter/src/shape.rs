//! The shape catalog.
//!
//! Four kinds exist, each with a display glyph and a color. The lowercase
//! tag doubles as the `data-shape` attribute on holes and as the CSS class
//! on pieces, so parsing it back is how the host identifies a hole found by
//! hit-testing.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// A shape kind. A piece fits a hole when their kinds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Star,
}

impl ShapeKind {
    /// Every kind, in catalog order. Holes are laid out in this order.
    pub const ALL: [Self; 4] = [Self::Circle, Self::Square, Self::Triangle, Self::Star];

    /// Lowercase tag used in markup (`data-shape`, CSS classes).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Star => "star",
        }
    }

    /// Glyph rendered inside the piece.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Circle => "\u{1F534}",
            Self::Square => "\u{1F7E6}",
            Self::Triangle => "\u{1F53A}",
            Self::Star => "\u{2B50}",
        }
    }

    /// Catalog color as a CSS hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Circle => "#FF6B6B",
            Self::Square => "#4ECDC4",
            Self::Triangle => "#FFEAA7",
            Self::Star => "#DDA0DD",
        }
    }

    /// Whether a piece of this kind fits `hole`.
    #[must_use]
    pub fn fits(self, hole: ShapeKind) -> bool {
        self == hole
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| ShapeError::UnknownTag(s.to_owned()))
    }
}
