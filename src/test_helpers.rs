//! Shared test utilities for the simple-folio test suite.
//!
//! Record builders keep grouping and selection tests focused on the fields
//! that matter (`id`, `chapter`, `order`); fixture helpers give filesystem
//! tests an isolated copy of `fixtures/content/`.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let chapters = vec![chapter("c1")];
//! let artworks = vec![artwork("a1", "c1", 0)];
//! let groups = catalog::group(&chapters, &artworks);
//! assert_eq!(ids(&groups[0].artworks), vec!["a1"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{Artist, Artwork, ArtworkDetails, Chapter, Contact, Education, Statement};

// =========================================================================
// Record builders
// =========================================================================

/// A chapter whose text fields are derived from its id.
pub fn chapter(id: &str) -> Chapter {
    Chapter {
        id: id.to_string(),
        title: format!("Chapter {id}"),
        title_kr: format!("챕터 {id}"),
        question: format!("What is {id}?"),
        question_kr: format!("{id}은 무엇인가?"),
        description: format!("About {id}."),
        description_kr: format!("{id}에 대하여."),
    }
}

/// An artwork with a title and image path derived from its id.
pub fn artwork(id: &str, chapter: &str, order: i64) -> Artwork {
    Artwork {
        id: id.to_string(),
        chapter: chapter.to_string(),
        order,
        details: ArtworkDetails {
            title: format!("Work {id}"),
            image: format!("images/works/{id}.jpg"),
            ..Default::default()
        },
    }
}

pub fn artist() -> Artist {
    Artist {
        name: "Lim Hyejung".to_string(),
        name_kr: "임혜정".to_string(),
        profile_image: "images/profile.jpg".to_string(),
        education: vec![Education {
            degree: "BFA".to_string(),
            institution: "Hongik University".to_string(),
            year: Some("2012".to_string()),
        }],
        statement: Statement {
            en: "First paragraph.\n\nSecond paragraph.".to_string(),
            kr: "첫 문단.\n\n둘째 문단.".to_string(),
        },
        contact: Contact {
            email: Some("studio@example.com".to_string()),
            instagram: Some("lim.studio".to_string()),
            ..Default::default()
        },
    }
}

/// Ids of a list of artworks, in order.
pub fn ids<'a>(artworks: &[&'a Artwork]) -> Vec<&'a str> {
    artworks.iter().map(|a| a.id.as_str()).collect()
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a solid-color PNG of the given size, creating parent directories.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 210, 190]))
        .save(path)
        .unwrap();
}
