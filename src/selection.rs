//! Lightbox selection state.
//!
//! The lightbox shows at most one artwork. [`SelectionStore`] is the single
//! slot recording which one, and it is the only thing templates consult to
//! decide whether the overlay is rendered. It is owned by whoever drives a
//! render session and handed to templates by reference; there is no global.
//!
//! ```text
//! Closed ──select(a)──▶ Open(a) ──select(b)──▶ Open(b)
//!   ▲                      │
//!   └──────── clear() ─────┘
//! ```
//!
//! Selecting while open replaces the artwork directly; there is no closed
//! state in between. `clear()` on a closed store is a no-op.

use crate::catalog::Catalog;
use crate::types::Artwork;

/// What the lightbox currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Selection<'a> {
    #[default]
    Closed,
    Open(&'a Artwork),
}

#[derive(Debug, Default)]
pub struct SelectionStore<'a> {
    current: Selection<'a>,
}

impl<'a> SelectionStore<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `artwork`, replacing whatever was shown.
    pub fn select(&mut self, artwork: &'a Artwork) {
        self.current = Selection::Open(artwork);
    }

    /// Select by id, checking membership in `catalog`.
    ///
    /// Unknown ids close the viewer rather than leaving a stale selection.
    pub fn select_id(&mut self, catalog: &'a Catalog, id: &str) -> Option<&'a Artwork> {
        match catalog.find(id) {
            Some(artwork) => {
                self.select(artwork);
                Some(artwork)
            }
            None => {
                self.clear();
                None
            }
        }
    }

    /// Close the viewer.
    pub fn clear(&mut self) {
        self.current = Selection::Closed;
    }

    pub fn current(&self) -> Selection<'a> {
        self.current
    }

    pub fn selected(&self) -> Option<&'a Artwork> {
        match self.current {
            Selection::Open(artwork) => Some(artwork),
            Selection::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.current, Selection::Open(_))
    }
}
