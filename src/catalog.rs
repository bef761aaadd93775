//! Chapter grouping for the works section.
//!
//! The works section renders one block per chapter, in the order chapters
//! appear in `chapters.json`, with that chapter's artworks sorted by their
//! `order` field. [`group`] derives that structure from the two flat lists.
//!
//! ## Rules
//!
//! - Every chapter produces exactly one [`ChapterGroup`], even when it has no
//!   artworks.
//! - Artworks are sorted ascending by `order` with a stable sort, so equal
//!   keys keep their position from `artworks.json`.
//! - Artworks whose `chapter` matches no chapter id are left out of every
//!   group. Grouping never fails; [`orphans`] lists the dropped entries so
//!   `check` can report them.
//!
//! ## Memoization
//!
//! [`group`] is pure and cheap, so calling it per render is fine. [`Catalog`]
//! owns both lists and caches the grouping as index lists the first time it
//! is asked for. The lists are private and never mutated after construction,
//! so the cache can't drift from its source.

use crate::types::{Artwork, Chapter};
use std::cell::OnceCell;
use std::collections::HashSet;

/// A chapter paired with its artworks in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterGroup<'a> {
    pub chapter: &'a Chapter,
    pub artworks: Vec<&'a Artwork>,
}

/// Group `artworks` under `chapters`, preserving chapter order.
pub fn group<'a>(chapters: &'a [Chapter], artworks: &'a [Artwork]) -> Vec<ChapterGroup<'a>> {
    layout(chapters, artworks)
        .into_iter()
        .zip(chapters)
        .map(|(indices, chapter)| ChapterGroup {
            chapter,
            artworks: indices.into_iter().map(|i| &artworks[i]).collect(),
        })
        .collect()
}

/// Per chapter, indices into `artworks` in display order.
fn layout(chapters: &[Chapter], artworks: &[Artwork]) -> Vec<Vec<usize>> {
    chapters
        .iter()
        .map(|chapter| {
            let mut indices: Vec<usize> = (0..artworks.len())
                .filter(|&i| artworks[i].chapter == chapter.id)
                .collect();
            // sort_by_key is stable
            indices.sort_by_key(|&i| artworks[i].order);
            indices
        })
        .collect()
}

/// Artworks whose chapter id matches no chapter, in input order.
pub fn orphans<'a>(chapters: &[Chapter], artworks: &'a [Artwork]) -> Vec<&'a Artwork> {
    let known: HashSet<&str> = chapters.iter().map(|c| c.id.as_str()).collect();
    artworks
        .iter()
        .filter(|artwork| !known.contains(artwork.chapter.as_str()))
        .collect()
}

/// Owned chapters and artworks with a memoized grouping.
#[derive(Debug)]
pub struct Catalog {
    chapters: Vec<Chapter>,
    artworks: Vec<Artwork>,
    /// Per chapter, indices into `artworks` in display order.
    layout: OnceCell<Vec<Vec<usize>>>,
}

impl Catalog {
    pub fn new(chapters: Vec<Chapter>, artworks: Vec<Artwork>) -> Self {
        Self {
            chapters,
            artworks,
            layout: OnceCell::new(),
        }
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// The grouped catalog. Computed once per `Catalog`.
    pub fn groups(&self) -> Vec<ChapterGroup<'_>> {
        self.layout()
            .iter()
            .zip(&self.chapters)
            .map(|(indices, chapter)| ChapterGroup {
                chapter,
                artworks: indices.iter().map(|&i| &self.artworks[i]).collect(),
            })
            .collect()
    }

    /// Artworks that belong to no chapter.
    pub fn orphans(&self) -> Vec<&Artwork> {
        orphans(&self.chapters, &self.artworks)
    }

    pub fn find(&self, id: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|artwork| artwork.id == id)
    }

    /// The chapter an artwork is displayed under, if any.
    pub fn chapter_of(&self, artwork: &Artwork) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == artwork.chapter)
    }

    /// Previous and next artwork within the same chapter group.
    ///
    /// Both are `None` for ids that aren't displayed (unknown or orphaned).
    pub fn neighbors(&self, id: &str) -> (Option<&Artwork>, Option<&Artwork>) {
        for indices in self.layout() {
            if let Some(pos) = indices.iter().position(|&i| self.artworks[i].id == id) {
                let prev = pos.checked_sub(1).map(|p| &self.artworks[indices[p]]);
                let next = indices.get(pos + 1).map(|&i| &self.artworks[i]);
                return (prev, next);
            }
        }
        (None, None)
    }

    /// Displayed artworks in page order: chapter by chapter.
    pub fn displayed(&self) -> impl Iterator<Item = &Artwork> + '_ {
        self.layout().iter().flatten().map(|&i| &self.artworks[i])
    }

    fn layout(&self) -> &[Vec<usize>] {
        self.layout.get_or_init(|| layout(&self.chapters, &self.artworks))
    }
}
