//! Source records loaded from the content directory.
//!
//! These mirror the JSON files an author maintains (`artist.json`,
//! `chapters.json`, `artworks.json`). Keys are camelCase on disk. Records are
//! immutable once loaded; everything downstream borrows them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A thematic chapter of the catalog, with bilingual text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub title_kr: String,
    pub question: String,
    pub question_kr: String,
    pub description: String,
    pub description_kr: String,
}

/// A single catalog entry.
///
/// Only `id`, `chapter` and `order` matter for grouping. Everything else lives
/// in [`ArtworkDetails`] and is carried through to the templates untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    /// Id of the owning [`Chapter`].
    pub chapter: String,
    /// Position within the chapter. Ascending, ties keep file order.
    pub order: i64,
    #[serde(flatten)]
    pub details: ArtworkDetails,
}

/// Display-only artwork fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetails {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_kr: Option<String>,
    /// Image path relative to the content root, e.g. `images/works/01.jpg`.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// Physical dimensions as written by the artist (`"91 x 116.8 cm"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Keys this generator doesn't know about.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    pub name_kr: String,
    pub profile_image: String,
    #[serde(default)]
    pub education: Vec<Education>,
    pub statement: Statement,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl Education {
    /// `"MFA, Seoul National University (2015)"`, year omitted when absent.
    pub fn display_line(&self) -> String {
        match &self.year {
            Some(year) if !year.is_empty() => {
                format!("{}, {} ({})", self.degree, self.institution, year)
            }
            _ => format!("{}, {}", self.degree, self.institution),
        }
    }
}

/// Artist statement in English and Korean. Paragraphs are separated by a
/// blank line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub en: String,
    pub kr: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.instagram.is_none()
            && self.website.is_none()
            && self.phone.is_none()
    }
}
