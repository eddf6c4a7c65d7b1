use std::fmt;

use rustc_hash::FxHashMap;

use crate::square::Square;

/// One result of the capture search: where the piece ends up and which
/// enemy squares it took along the way, in jump order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturePath {
    pub end: Square,
    pub captured: Vec<Square>,
}

/// The legal destinations of a single piece, each mapped to the enemy
/// squares cleared by playing it. Simple moves map to an empty list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LegalMoves(pub FxHashMap<Square, Vec<Square>>);

impl LegalMoves {
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&Vec<Square>> {
        self.0.get(&square)
    }

    pub fn insert(&mut self, to: Square, captured: Vec<Square>) {
        self.0.insert(to, captured);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn has_capture(&self) -> bool {
        self.0.values().any(|captured| !captured.is_empty())
    }

    /// Drops the non-capturing entries, used when a capture is mandatory.
    pub fn retain_captures(&mut self) {
        self.0.retain(|_, captured| !captured.is_empty());
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Square> {
        self.0.keys()
    }
}

impl fmt::Display for LegalMoves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (to, captured) in &self.0 {
            write!(f, "{to}")?;
            for square in captured {
                write!(f, "x{square}")?;
            }
            write!(f, " ")?;
        }

        Ok(())
    }
}
