//! Image dimension probing.
//!
//! Images are served exactly as the author supplied them; this module only
//! reads their pixel dimensions so cards and the lightbox can carry
//! `width`/`height` attributes and an `--aspect-ratio` (no layout shift while
//! images load). `image::image_dimensions` reads just the header, so probing
//! is cheap, but a catalog of large TIFFs still benefits from running it on
//! the rayon pool.
//!
//! A missing or unreadable file is not fatal: the image is rendered without
//! dimensions and the failure is returned as a [`ProbeWarning`] for the CLI
//! to print.

use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }
}

/// An image that could not be probed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeWarning {
    /// Path as written in the content files.
    pub image: String,
    pub reason: String,
}

/// Dimensions of every probed image, keyed by content-relative path.
#[derive(Debug, Default)]
pub struct ImageIndex {
    dimensions: BTreeMap<String, Dimensions>,
}

impl ImageIndex {
    pub fn get(&self, image: &str) -> Option<Dimensions> {
        self.dimensions.get(image).copied()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

/// Probe `images` (paths relative to `root`) in parallel.
///
/// Duplicate and empty paths are skipped.
pub fn probe_all<'a>(
    root: &Path,
    images: impl IntoIterator<Item = &'a str>,
) -> (ImageIndex, Vec<ProbeWarning>) {
    let mut unique: Vec<&str> = images.into_iter().filter(|p| !p.is_empty()).collect();
    unique.sort_unstable();
    unique.dedup();

    let results: Vec<(String, Result<Dimensions, String>)> = unique
        .par_iter()
        .map(|image| (image.to_string(), probe(&root.join(image))))
        .collect();

    let mut index = ImageIndex::default();
    let mut warnings = Vec::new();
    for (image, result) in results {
        match result {
            Ok(dims) => {
                index.dimensions.insert(image, dims);
            }
            Err(reason) => warnings.push(ProbeWarning { image, reason }),
        }
    }
    (index, warnings)
}

fn probe(path: &Path) -> Result<Dimensions, String> {
    if !path.exists() {
        return Err("file not found".to_string());
    }
    let (width, height) = image::image_dimensions(path).map_err(|e| e.to_string())?;
    Ok(Dimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_png;
    use tempfile::TempDir;

    #[test]
    fn probes_existing_images() {
        let tmp = TempDir::new().unwrap();
        write_png(&tmp.path().join("images/a.png"), 40, 30);
        write_png(&tmp.path().join("images/b.png"), 10, 20);

        let (index, warnings) = probe_all(tmp.path(), ["images/a.png", "images/b.png"]);
        assert!(warnings.is_empty());
        assert_eq!(
            index.get("images/a.png"),
            Some(Dimensions {
                width: 40,
                height: 30
            })
        );
        assert_eq!(index.get("images/b.png").unwrap().height, 20);
    }

    #[test]
    fn missing_image_is_a_warning() {
        let tmp = TempDir::new().unwrap();
        let (index, warnings) = probe_all(tmp.path(), ["images/gone.jpg"]);

        assert!(index.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].image, "images/gone.jpg");
        assert_eq!(warnings[0].reason, "file not found");
    }

    #[test]
    fn unreadable_image_is_a_warning() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("broken.png"), b"not a png").unwrap();

        let (_, warnings) = probe_all(tmp.path(), ["broken.png"]);
        assert_eq!(warnings.len(), 1);
        assert_ne!(warnings[0].reason, "file not found");
    }

    #[test]
    fn duplicates_and_empty_paths_skipped() {
        let tmp = TempDir::new().unwrap();
        write_png(&tmp.path().join("a.png"), 4, 4);

        let (index, warnings) = probe_all(tmp.path(), ["a.png", "", "a.png"]);
        assert_eq!(index.len(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn aspect_ratio() {
        let dims = Dimensions {
            width: 1600,
            height: 1200,
        };
        assert!((dims.aspect_ratio() - 4.0 / 3.0).abs() < 1e-9);
    }
}
