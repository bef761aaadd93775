//! Content loading.
//!
//! Reads the three JSON record files and `config.toml` from the content
//! directory into a [`SiteData`]. Everything is loaded up front; nothing
//! downstream touches the content directory except to copy image assets.
//!
//! ## Integrity
//!
//! A record that doesn't match its schema (missing `id`, `order` that isn't
//! an integer, ...) fails the whole load with the offending file named in the
//! error. Duplicate chapter or artwork ids are rejected too, since anchors and
//! viewer pages are keyed by id.
//!
//! Artworks pointing at a chapter that doesn't exist are *not* an error here.
//! They load normally and are simply left out of the works section; see
//! [`crate::catalog::orphans`].

use crate::catalog::Catalog;
use crate::config::{self, SiteConfig};
use crate::types::{Artist, Artwork, Chapter};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ARTIST_FILE: &str = "artist.json";
pub const CHAPTERS_FILE: &str = "chapters.json";
pub const ARTWORKS_FILE: &str = "artworks.json";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed record in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Duplicate {kind} id '{id}' in {file}")]
    DuplicateId {
        kind: &'static str,
        id: String,
        file: &'static str,
    },
}

/// Content problems that only `check --strict` treats as fatal.
#[derive(Error, Debug, PartialEq)]
pub enum CheckError {
    #[error("{} artwork(s) reference a missing chapter: {}", .0.len(), .0.join(", "))]
    Orphans(Vec<String>),
}

/// Everything a build needs, loaded from one content directory.
#[derive(Debug)]
pub struct SiteData {
    pub artist: Artist,
    pub catalog: Catalog,
    pub config: SiteConfig,
}

/// Load and validate the content directory at `root`.
pub fn load(root: &Path) -> Result<SiteData, DataError> {
    let config = config::load_config(root)?;
    let artist: Artist = read_json(&root.join(ARTIST_FILE))?;
    let chapters: Vec<Chapter> = read_json(&root.join(CHAPTERS_FILE))?;
    let artworks: Vec<Artwork> = read_json(&root.join(ARTWORKS_FILE))?;

    check_unique(chapters.iter().map(|c| c.id.as_str()), "chapter", CHAPTERS_FILE)?;
    check_unique(artworks.iter().map(|a| a.id.as_str()), "artwork", ARTWORKS_FILE)?;

    Ok(SiteData {
        artist,
        catalog: Catalog::new(chapters, artworks),
        config,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn check_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &'static str,
    file: &'static str,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                kind,
                id: id.to_string(),
                file,
            });
        }
    }
    Ok(())
}

/// Fail if any artwork would be left out of the works section.
pub fn check_strict(catalog: &Catalog) -> Result<(), CheckError> {
    let orphans: Vec<String> = catalog.orphans().iter().map(|a| a.id.clone()).collect();
    if orphans.is_empty() {
        Ok(())
    } else {
        Err(CheckError::Orphans(orphans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixtures;

    #[test]
    fn loads_fixture_content() {
        let tmp = setup_fixtures();
        let data = load(tmp.path()).unwrap();

        assert_eq!(data.artist.name, "Lim Hyejung");
        assert_eq!(data.catalog.chapters().len(), 3);
        assert_eq!(data.catalog.artworks().len(), 6);
        assert_eq!(data.config.hero.tagline, "Utopia = Reality");
    }

    #[test]
    fn fixture_orphan_is_loaded_but_not_grouped() {
        let tmp = setup_fixtures();
        let data = load(tmp.path()).unwrap();

        assert!(data.catalog.find("stray-sketch").is_some());
        let orphan_ids: Vec<&str> = data
            .catalog
            .orphans()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(orphan_ids, vec!["stray-sketch"]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let tmp = setup_fixtures();
        fs::remove_file(tmp.path().join(CHAPTERS_FILE)).unwrap();

        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("chapters.json"));
    }

    #[test]
    fn malformed_record_is_error() {
        let tmp = setup_fixtures();
        fs::write(
            tmp.path().join(ARTWORKS_FILE),
            r#"[{"id": "a1", "chapter": "c1", "order": "first", "title": "t", "image": "i.jpg"}]"#,
        )
        .unwrap();

        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
        assert!(err.to_string().contains("artworks.json"));
    }

    #[test]
    fn duplicate_artwork_id_is_error() {
        let tmp = setup_fixtures();
        fs::write(
            tmp.path().join(ARTWORKS_FILE),
            r#"[
                {"id": "a1", "chapter": "c1", "order": 0, "title": "t", "image": "i.jpg"},
                {"id": "a1", "chapter": "c1", "order": 1, "title": "u", "image": "j.jpg"}
            ]"#,
        )
        .unwrap();

        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            DataError::DuplicateId { kind: "artwork", .. }
        ));
    }

    #[test]
    fn duplicate_chapter_id_is_error() {
        let tmp = setup_fixtures();
        let chapters = fs::read_to_string(tmp.path().join(CHAPTERS_FILE)).unwrap();
        let mut list: Vec<serde_json::Value> = serde_json::from_str(&chapters).unwrap();
        list.push(list[0].clone());
        fs::write(
            tmp.path().join(CHAPTERS_FILE),
            serde_json::to_string(&list).unwrap(),
        )
        .unwrap();

        let err = load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate chapter id"));
    }

    #[test]
    fn bad_config_is_error() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("config.toml"), "[hero]\nunknown = 1\n").unwrap();
        assert!(matches!(load(tmp.path()), Err(DataError::Config(_))));
    }

    #[test]
    fn strict_check_rejects_orphans() {
        let tmp = setup_fixtures();
        let data = load(tmp.path()).unwrap();
        let err = check_strict(&data.catalog).unwrap_err();
        assert_eq!(err, CheckError::Orphans(vec!["stray-sketch".to_string()]));
        assert_eq!(
            err.to_string(),
            "1 artwork(s) reference a missing chapter: stray-sketch"
        );
    }

    #[test]
    fn strict_check_passes_clean_catalog() {
        use crate::test_helpers::{artwork, chapter};
        let catalog = Catalog::new(vec![chapter("c1")], vec![artwork("a1", "c1", 0)]);
        assert!(check_strict(&catalog).is_ok());
    }
}
