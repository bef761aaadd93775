//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML value, the user's file is merged on top key by key,
//! and the result is deserialized and validated.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml      # optional
//! ├── artist.json
//! ├── chapters.json
//! └── artworks.json
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! lang = "en"
//! description = ""
//!
//! [hero]
//! image = ""                # Path under the content root; empty = no image
//! tagline = ""
//!
//! [labels]
//! works = "Works"
//! works_subtitle = "작품"
//! about = "About"
//! statement = "Artist Statement"
//! contact = "Contact"
//!
//! [theme]
//! columns = 3               # Max cards per row on wide screens (1-6)
//! grid_gap = "2.5rem"
//!
//! [theme.section_gap]
//! size = "12vw"
//! min = "6rem"
//! max = "10rem"
//!
//! [colors.light]
//! background = "#fdfcf9"
//! text = "#1c1c1c"
//! text_muted = "#6b6b6b"
//! border = "#e4e2dc"
//! link = "#333333"
//! link_hover = "#000000"
//! accent = "#e3efe3"        # About section background
//!
//! [colors.dark]
//! background = "#121212"
//! text = "#ececec"
//! text_muted = "#9a9a9a"
//! border = "#2e2e2e"
//! link = "#cccccc"
//! link_hover = "#ffffff"
//! accent = "#1b241b"
//!
//! [processing]
//! max_processes = 4         # Image probing workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title, language and meta description.
    pub site: SiteMeta,
    /// Full-screen banner at the top of the page.
    pub hero: HeroConfig,
    /// Section headings.
    pub labels: LabelsConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        if !(1..=6).contains(&self.theme.columns) {
            return Err(ConfigError::Validation(
                "theme.columns must be 1-6".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    pub title: String,
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
    /// `<meta name="description">`; omitted when empty.
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            lang: "en".to_string(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Background image, relative to the content root. Empty for none.
    pub image: String,
    /// Line shown under the artist name.
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    pub works: String,
    pub works_subtitle: String,
    pub about: String,
    pub statement: String,
    pub contact: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            works: "Works".to_string(),
            works_subtitle: "작품".to_string(),
            about: "About".to_string(),
            statement: "Artist Statement".to_string(),
            contact: "Contact".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of image probing workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"12vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"6rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"10rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum cards per row on wide screens.
    pub columns: u32,
    /// Gap between artwork cards (CSS value).
    pub grid_gap: String,
    /// Vertical space between chapters.
    pub section_gap: ClampSize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            grid_gap: "2.5rem".to_string(),
            section_gap: ClampSize {
                size: "12vw".to_string(),
                min: "6rem".to_string(),
                max: "10rem".to_string(),
            },
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text: Korean lines, captions, education.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Tinted background of the about section.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fdfcf9".to_string(),
            text: "#1c1c1c".to_string(),
            text_muted: "#6b6b6b".to_string(),
            border: "#e4e2dc".to_string(),
            link: "#333333".to_string(),
            link_hover: "#000000".to_string(),
            accent: "#e3efe3".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#121212".to_string(),
            text: "#ececec".to_string(),
            text_muted: "#9a9a9a".to_string(),
            border: "#2e2e2e".to_string(),
            link: "#cccccc".to_string(),
            link_hover: "#ffffff".to_string(),
            accent: "#1b241b".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to artist.json, chapters.json and artworks.json.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Browser tab title.
title = "Portfolio"

# Language of the page (<html lang="...">).
lang = "en"

# Search engine description. Leave empty to omit.
description = ""

# ---------------------------------------------------------------------------
# Hero banner
# ---------------------------------------------------------------------------
[hero]
# Background image, relative to the content directory.
# Leave empty for a plain banner.
image = ""

# Line shown under the artist name.
tagline = ""

# ---------------------------------------------------------------------------
# Section headings
# ---------------------------------------------------------------------------
[labels]
works = "Works"
works_subtitle = "작품"
about = "About"
statement = "Artist Statement"
contact = "Contact"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
# Maximum artwork cards per row on wide screens (1-6).
columns = 3

# Gap between artwork cards (CSS value).
grid_gap = "2.5rem"

# Vertical space between chapters, as CSS clamp(min, size, max).
[theme.section_gap]
size = "12vw"
min = "6rem"
max = "10rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fdfcf9"
text = "#1c1c1c"
text_muted = "#6b6b6b"    # Korean lines, captions
border = "#e4e2dc"
link = "#333333"
link_hover = "#000000"
accent = "#e3efe3"        # About section background

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#121212"
text = "#ececec"
text_muted = "#9a9a9a"
border = "#2e2e2e"
link = "#cccccc"
link_hover = "#ffffff"
accent = "#1b241b"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel workers for reading image dimensions.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --grid-columns: {columns};
    --grid-gap: {grid_gap};
    --section-gap: {section_gap};
}}"#,
        columns = theme.columns,
        grid_gap = theme.grid_gap,
        section_gap = theme.section_gap.to_css(),
    )
}
