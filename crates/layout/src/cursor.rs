//! A cursor identifies a position *between* elements of a paragraph line.
//!
//! Plain value type: two indices with a total order, never a reference into
//! storage, so line structures stay immutable and freely shareable.
//! Movement returns a new cursor; "no movement possible" is `None`, not an
//! error.

use crate::zone::ParagraphLine;
use serde::{Deserialize, Serialize};

/// Position between elements: `(zone, element)` where `element` indexes
/// within the zone. `(0, 0)` is the paragraph start; `(zone_count, 0)` is
/// the paragraph end (the only valid cursor with `zone == zone_count`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub zone: usize,
    pub element: usize,
}

impl Cursor {
    pub fn new(zone: usize, element: usize) -> Self {
        Self { zone, element }
    }

    pub fn start() -> Self {
        Self { zone: 0, element: 0 }
    }

    pub fn is_start(self) -> bool {
        self.zone == 0 && self.element == 0
    }

    pub fn is_at_end(self, line: &ParagraphLine) -> bool {
        self.zone >= line.zone_count()
    }

    /// One element forward, crossing zone boundaries. `None` at the end.
    pub fn next_element(self, line: &ParagraphLine) -> Option<Cursor> {
        if self.is_at_end(line) {
            return None;
        }
        let zone = line.zone_at(self.zone);
        if self.element + 1 < zone.len() {
            Some(Cursor::new(self.zone, self.element + 1))
        } else {
            Some(Cursor::new(self.zone + 1, 0))
        }
    }

    /// One element backward, crossing zone boundaries. `None` at the start.
    pub fn previous_element(self, line: &ParagraphLine) -> Option<Cursor> {
        if self.is_start() {
            return None;
        }
        if self.element > 0 {
            Some(Cursor::new(self.zone, self.element - 1))
        } else {
            let prev = self.zone - 1;
            Some(Cursor::new(prev, line.zone_at(prev).len() - 1))
        }
    }

    /// Forward to the start of the next zone. `None` at the end.
    pub fn next_zone_boundary(self, line: &ParagraphLine) -> Option<Cursor> {
        if self.is_at_end(line) {
            return None;
        }
        Some(Cursor::new(self.zone + 1, 0))
    }

    /// Backward to the nearest earlier zone boundary: the start of this
    /// zone when mid-zone, otherwise the start of the previous zone.
    /// `None` at the start.
    pub fn previous_zone_boundary(self, _line: &ParagraphLine) -> Option<Cursor> {
        if self.is_start() {
            return None;
        }
        if self.element > 0 {
            Some(Cursor::new(self.zone, 0))
        } else {
            Some(Cursor::new(self.zone - 1, 0))
        }
    }
}
