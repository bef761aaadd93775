//! # Simple Folio
//!
//! A static site generator for single-artist portfolios. Artworks are
//! grouped into thematic chapters and shown on one scrolling page; a
//! lightbox overlay presents one work at a time.
//!
//! # Architecture
//!
//! ```text
//! content/  →  data::load  →  SiteData  →  generate  →  dist/
//!                               │
//!                               └─ Catalog::groups()  (chapter → ordered artworks)
//! ```
//!
//! Loading reads everything up front into owned records. The [`catalog`]
//! derives the displayed structure from them (pure, memoized), and
//! [`generate`] renders it with a [`selection::SelectionStore`] deciding
//! which artwork, if any, the lightbox shows.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Content records: `Artist`, `Chapter`, `Artwork` |
//! | [`catalog`] | Groups artworks under chapters, sorted by `order`; orphan detection |
//! | [`selection`] | Single-slot lightbox state: closed or open on one artwork |
//! | [`data`] | Loads the JSON records and `config.toml` from the content directory |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`imaging`] | Parallel image dimension probing |
//! | [`naming`] | Slugs and anchors derived from ids |
//! | [`generate`] | Renders the HTML site using Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Page, Many Entry Points
//!
//! The portfolio is a single page. Rather than a client-side router, every
//! artwork gets a static copy of that page at `works/<slug>/index.html` with
//! the lightbox already open. Closing links back to the chapter on the index;
//! prev/next link to sibling viewer pages. The lightbox works without
//! JavaScript; a few lines of script only add keyboard and swipe shortcuts.
//!
//! ## Orphans Are Not Errors
//!
//! An artwork whose `chapter` names no existing chapter is excluded from the
//! site without failing the build. `check` lists such artworks and
//! `check --strict` rejects them.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error and all interpolation is auto-escaped. Artist statements
//! are rendered from markdown with raw HTML escaped.

pub mod catalog;
pub mod config;
pub mod data;
pub mod generate;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod selection;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
