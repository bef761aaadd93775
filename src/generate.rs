//! HTML site generation.
//!
//! Renders the portfolio from loaded [`SiteData`]. The page is a single
//! document (hero, works, about, contact); the lightbox is that same document
//! with an overlay on top. Each artwork gets its own copy of the page with the
//! overlay open, so a viewer URL can be shared and the site needs no
//! JavaScript to open or close the viewer.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Portfolio, lightbox closed
//! ├── works/
//! │   ├── passing-through/
//! │   │   └── index.html         # Portfolio, lightbox on "passing-through"
//! │   └── ...
//! └── images/                    # Copied verbatim from content/images/
//! ```
//!
//! ## Render Session
//!
//! [`generate`] owns one [`SelectionStore`] for the whole build. The index is
//! rendered while it is closed; then each displayed artwork is selected in
//! turn and the page re-rendered. Templates never decide on their own whether
//! the lightbox shows: they read the store.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and layout injected from config)
//! - `static/lightbox.js`: Escape to close, arrow keys for prev/next
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolation is escaped; statements go through `pulldown-cmark` with
//! raw HTML demoted to text.

use crate::catalog::{Catalog, ChapterGroup};
use crate::config::{self, SiteConfig};
use crate::data::SiteData;
use crate::imaging::{self, ImageIndex, ProbeWarning};
use crate::naming;
use crate::selection::SelectionStore;
use crate::types::{Artwork, Chapter, Contact};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot copy assets: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Artwork id '{0}' has no usable characters for a URL")]
    EmptySlug(String),
    #[error("Artworks '{first}' and '{second}' both map to works/{slug}/")]
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },
    #[error("Chapters '{first}' and '{second}' both map to #{anchor}")]
    AnchorCollision {
        anchor: String,
        first: String,
        second: String,
    },
}

/// What a build produced, for CLI display.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub chapters: Vec<ChapterReport>,
    /// Ids of artworks that belong to no chapter (no card, no viewer page).
    pub orphans: Vec<String>,
    pub assets_copied: usize,
    pub warnings: Vec<ProbeWarning>,
}

impl BuildReport {
    pub fn viewer_pages(&self) -> usize {
        self.chapters.iter().map(|c| c.works.len()).sum()
    }
}

#[derive(Debug)]
pub struct ChapterReport {
    pub title: String,
    pub anchor: String,
    pub works: Vec<WorkReport>,
}

#[derive(Debug)]
pub struct WorkReport {
    pub title: String,
    /// Page path relative to the output directory.
    pub path: String,
}

/// Result of rendering a single page for preview.
#[derive(Debug)]
pub struct Preview {
    pub html: String,
    /// Requested artwork id that isn't in the catalog.
    pub unknown: Option<String>,
    pub warnings: Vec<ProbeWarning>,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/lightbox.js");

/// Directory under the content root copied verbatim to the output.
pub const IMAGES_DIR: &str = "images";

/// Everything a template needs besides the selection.
struct PageContext<'a> {
    data: &'a SiteData,
    groups: &'a [ChapterGroup<'a>],
    images: &'a ImageIndex,
    slugs: &'a HashMap<&'a str, String>,
    anchors: &'a HashMap<&'a str, String>,
    css: &'a str,
}

impl PageContext<'_> {
    fn anchor(&self, chapter: &Chapter) -> &str {
        self.anchors
            .get(chapter.id.as_str())
            .map_or("works", String::as_str)
    }
}

/// Render the full site for `data` into `output_dir`.
pub fn generate(
    data: &SiteData,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    let groups = data.catalog.groups();
    let slugs = assign_slugs(&data.catalog)?;
    let anchors = assign_anchors(data.catalog.chapters())?;
    let (images, warnings) = probe_displayed_images(data, source_dir);
    let css = site_css(&data.config);

    let ctx = PageContext {
        data,
        groups: &groups,
        images: &images,
        slugs: &slugs,
        anchors: &anchors,
        css: &css,
    };

    fs::create_dir_all(output_dir)?;
    let assets_copied = copy_images(source_dir, output_dir)?;

    let mut store = SelectionStore::new();
    fs::write(
        output_dir.join("index.html"),
        render_page(&ctx, &store, "").into_string(),
    )?;

    let mut chapters = Vec::new();
    for group in &groups {
        let mut works = Vec::new();
        for &artwork in &group.artworks {
            store.select(artwork);
            let dir = naming::viewer_dir(&slugs[artwork.id.as_str()]);
            fs::create_dir_all(output_dir.join(&dir))?;
            let path = format!("{dir}/index.html");
            fs::write(
                output_dir.join(&path),
                render_page(&ctx, &store, "../../").into_string(),
            )?;
            works.push(WorkReport {
                title: artwork.details.title.clone(),
                path,
            });
        }
        chapters.push(ChapterReport {
            title: group.chapter.title.clone(),
            anchor: ctx.anchor(group.chapter).to_string(),
            works,
        });
    }
    store.clear();

    Ok(BuildReport {
        chapters,
        orphans: data
            .catalog
            .orphans()
            .iter()
            .map(|a| a.id.clone())
            .collect(),
        assets_copied,
        warnings,
    })
}

/// Render one page, optionally with the lightbox open on `artwork_id`.
///
/// Unknown ids render the closed page and are reported in [`Preview::unknown`].
pub fn preview(
    data: &SiteData,
    source_dir: &Path,
    artwork_id: Option<&str>,
) -> Result<Preview, GenerateError> {
    let groups = data.catalog.groups();
    let slugs = assign_slugs(&data.catalog)?;
    let anchors = assign_anchors(data.catalog.chapters())?;
    let (images, warnings) = probe_images(data, source_dir);
    let css = site_css(&data.config);
    let ctx = PageContext {
        data,
        groups: &groups,
        images: &images,
        slugs: &slugs,
        anchors: &anchors,
        css: &css,
    };

    let mut store = SelectionStore::new();
    let mut unknown = None;
    if let Some(id) = artwork_id
        && store.select_id(&data.catalog, id).is_none()
    {
        unknown = Some(id.to_string());
    }

    Ok(Preview {
        html: render_page(&ctx, &store, "").into_string(),
        unknown,
        warnings,
    })
}

/// Map each displayed artwork id to its viewer slug, rejecting collisions.
fn assign_slugs(catalog: &Catalog) -> Result<HashMap<&str, String>, GenerateError> {
    let mut slugs = HashMap::new();
    let mut owners: HashMap<String, &str> = HashMap::new();
    for artwork in catalog.displayed() {
        let slug = naming::slugify(&artwork.id);
        if slug.is_empty() {
            return Err(GenerateError::EmptySlug(artwork.id.clone()));
        }
        if let Some(first) = owners.insert(slug.clone(), artwork.id.as_str()) {
            return Err(GenerateError::SlugCollision {
                slug,
                first: first.to_string(),
                second: artwork.id.clone(),
            });
        }
        slugs.insert(artwork.id.as_str(), slug);
    }
    Ok(slugs)
}

/// Map each chapter id to its section anchor, rejecting collisions.
fn assign_anchors(chapters: &[Chapter]) -> Result<HashMap<&str, String>, GenerateError> {
    let mut anchors = HashMap::new();
    let mut owners: HashMap<String, &str> = HashMap::new();
    for chapter in chapters {
        let anchor = naming::chapter_anchor(&chapter.id);
        if let Some(first) = owners.insert(anchor.clone(), chapter.id.as_str()) {
            return Err(GenerateError::AnchorCollision {
                anchor,
                first: first.to_string(),
                second: chapter.id.clone(),
            });
        }
        anchors.insert(chapter.id.as_str(), anchor);
    }
    Ok(anchors)
}

/// Probe every image the content references, orphaned artworks included.
pub fn probe_images(data: &SiteData, source_dir: &Path) -> (ImageIndex, Vec<ProbeWarning>) {
    probe_with(data, source_dir, data.catalog.artworks().iter())
}

/// Probe only the images a built page shows.
fn probe_displayed_images(
    data: &SiteData,
    source_dir: &Path,
) -> (ImageIndex, Vec<ProbeWarning>) {
    probe_with(data, source_dir, data.catalog.displayed())
}

fn probe_with<'a>(
    data: &'a SiteData,
    source_dir: &Path,
    artworks: impl Iterator<Item = &'a Artwork>,
) -> (ImageIndex, Vec<ProbeWarning>) {
    let referenced = artworks.map(|a| a.details.image.as_str()).chain([
        data.config.hero.image.as_str(),
        data.artist.profile_image.as_str(),
    ]);
    imaging::probe_all(source_dir, referenced)
}

fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Copy `images/` from the content root. Returns the number of files copied.
fn copy_images(source_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    let src = source_dir.join(IMAGES_DIR);
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(&src)
        .into_iter()
        .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(source_dir) else {
            continue;
        };
        let dst = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Convert statement text to HTML paragraphs. Raw HTML is shown as text.
fn render_markdown(text: &str) -> String {
    let parser = Parser::new(text).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    config: &SiteConfig,
    css: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    let description = Some(config.site.description.as_str()).filter(|d| !d.is_empty());
    html! {
        (DOCTYPE)
        html lang=(config.site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(desc) = description {
                    meta name="description" content=(desc);
                }
                title { (config.site.title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Fixed header with in-page section links.
fn site_header(ctx: &PageContext, root: &str) -> Markup {
    let labels = &ctx.data.config.labels;
    html! {
        header.site-header {
            a.site-name href={ (root) "index.html" } { (ctx.data.artist.name) }
            nav.site-nav {
                a href={ (root) "index.html#works" } { (labels.works) }
                a href={ (root) "index.html#about" } { (labels.about) }
                a href={ (root) "index.html#contact" } { (labels.contact) }
            }
        }
    }
}

/// `width`/`height` attributes for an image, when known.
fn dims_of(images: &ImageIndex, image: &str) -> (Option<u32>, Option<u32>) {
    match images.get(image) {
        Some(d) => (Some(d.width), Some(d.height)),
        None => (None, None),
    }
}

fn hero_section(ctx: &PageContext, root: &str) -> Markup {
    let hero = &ctx.data.config.hero;
    let style = (!hero.image.is_empty())
        .then(|| format!("background-image: url('{}{}');", root, hero.image));
    html! {
        section.hero style=[style] {
            div.hero-overlay {
                h1.hero-name { (ctx.data.artist.name) }
                @if !hero.tagline.is_empty() {
                    p.hero-tagline { (hero.tagline) }
                }
                a.hero-scroll href="#works" aria-label="Scroll to works" { "↓" }
            }
        }
    }
}

fn works_section(ctx: &PageContext, root: &str) -> Markup {
    let labels = &ctx.data.config.labels;
    html! {
        section #works .works {
            h2.section-title { (labels.works) }
            @if !labels.works_subtitle.is_empty() {
                p.section-subtitle { (labels.works_subtitle) }
            }
            div.chapters {
                @for group in ctx.groups {
                    (chapter_block(ctx, group, root))
                }
            }
        }
    }
}

fn chapter_block(ctx: &PageContext, group: &ChapterGroup, root: &str) -> Markup {
    let chapter = group.chapter;
    html! {
        div.chapter id=(ctx.anchor(chapter)) {
            header.chapter-header {
                h3.chapter-title { (chapter.title) }
                p.chapter-title-kr { (chapter.title_kr) }
                p.chapter-question { "\u{201C}" (chapter.question) "\u{201D}" }
                p.chapter-question-kr { (chapter.question_kr) }
                div.chapter-divider {}
                p.chapter-description { (chapter.description) }
                p.chapter-description-kr { (chapter.description_kr) }
            }
            @if !group.artworks.is_empty() {
                div.artwork-grid {
                    @for artwork in &group.artworks {
                        (artwork_card(ctx, artwork, root))
                    }
                }
            }
        }
    }
}

fn artwork_card(ctx: &PageContext, artwork: &Artwork, root: &str) -> Markup {
    let details = &artwork.details;
    let (width, height) = dims_of(ctx.images, &details.image);
    let href = format!(
        "{}{}/index.html",
        root,
        naming::viewer_dir(&ctx.slugs[artwork.id.as_str()])
    );
    html! {
        a.artwork-card href=(href) {
            div.artwork-thumb {
                img src={ (root) (details.image) } alt=(details.title) loading="lazy"
                    width=[width] height=[height];
            }
            span.artwork-title { (details.title) }
            @if let Some(year) = &details.year {
                span.artwork-year { (year) }
            }
        }
    }
}

fn about_section(ctx: &PageContext, root: &str) -> Markup {
    let artist = &ctx.data.artist;
    let labels = &ctx.data.config.labels;
    let (width, height) = dims_of(ctx.images, &artist.profile_image);
    html! {
        section #about .about {
            div.profile {
                @if !artist.profile_image.is_empty() {
                    img.profile-image src={ (root) (artist.profile_image) } alt=(artist.name)
                        width=[width] height=[height];
                }
                h2.profile-name { (artist.name) }
                p.profile-name-kr { (artist.name_kr) }
                @if !artist.education.is_empty() {
                    div.education {
                        @for edu in &artist.education {
                            p { (edu.display_line()) }
                        }
                    }
                }
            }
            div.statement {
                h3.statement-title { (labels.statement) }
                div.statement-en { (PreEscaped(render_markdown(&artist.statement.en))) }
                div.statement-kr { (PreEscaped(render_markdown(&artist.statement.kr))) }
            }
        }
    }
}

fn contact_section(ctx: &PageContext) -> Markup {
    html! {
        section #contact .contact {
            h2.section-title { (ctx.data.config.labels.contact) }
            (contact_links(&ctx.data.artist.contact))
        }
    }
}

/// Contact links; empty markup when the artist lists none.
fn contact_links(contact: &Contact) -> Markup {
    let instagram = contact
        .instagram
        .as_deref()
        .map(|handle| handle.trim_start_matches('@'));
    html! {
        @if !contact.is_empty() {
            ul.contact-links {
                @if let Some(email) = &contact.email {
                    li { a href={ "mailto:" (email) } { (email) } }
                }
                @if let Some(handle) = instagram {
                    li {
                        a href={ "https://instagram.com/" (handle) } target="_blank" rel="noopener" {
                            "@" (handle)
                        }
                    }
                }
                @if let Some(site) = &contact.website {
                    li { a href=(site) target="_blank" rel="noopener" { (site) } }
                }
                @if let Some(phone) = &contact.phone {
                    li { a href={ "tel:" (phone) } { (phone) } }
                }
            }
        }
    }
}

/// The viewer overlay for the selected artwork, or nothing when closed.
fn lightbox(ctx: &PageContext, selection: &SelectionStore, root: &str) -> Markup {
    let Some(artwork) = selection.selected() else {
        return html! {};
    };
    let details = &artwork.details;
    let catalog = &ctx.data.catalog;

    let close_url = match catalog.chapter_of(artwork) {
        Some(chapter) => format!("{}index.html#{}", root, ctx.anchor(chapter)),
        None => format!("{root}index.html#works"),
    };
    let (prev, next) = catalog.neighbors(&artwork.id);
    let viewer_url = |a: &Artwork| {
        format!(
            "{}{}/index.html",
            root,
            naming::viewer_dir(&ctx.slugs[a.id.as_str()])
        )
    };
    let prev_url = prev.map(viewer_url);
    let next_url = next.map(viewer_url);

    let dims = ctx.images.get(&details.image);
    let aspect_style = dims.map(|d| format!("--aspect-ratio: {};", d.aspect_ratio()));
    let meta: Vec<&str> = [&details.year, &details.medium, &details.size]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect();

    html! {
        div.lightbox role="dialog" aria-modal="true" aria-label=(details.title)
            data-close=(close_url) data-prev=[prev_url.as_deref()] data-next=[next_url.as_deref()] {
            a.lightbox-backdrop href=(close_url) tabindex="-1" aria-hidden="true" {}
            figure.lightbox-frame style=[aspect_style] {
                img src={ (root) (details.image) } alt=(details.title)
                    width=[dims.map(|d| d.width)] height=[dims.map(|d| d.height)];
                figcaption.lightbox-caption {
                    h2.lightbox-title { (details.title) }
                    @if let Some(title_kr) = &details.title_kr {
                        p.lightbox-title-kr { (title_kr) }
                    }
                    @if !meta.is_empty() {
                        p.lightbox-meta { (meta.join(" · ")) }
                    }
                    @if let Some(desc) = &details.description {
                        p.lightbox-description { (desc) }
                    }
                }
            }
            a.lightbox-close href=(close_url) aria-label="Close" { "×" }
            @if let Some(url) = &prev_url {
                a.lightbox-prev href=(url) aria-label="Previous" { "‹" }
            }
            @if let Some(url) = &next_url {
                a.lightbox-next href=(url) aria-label="Next" { "›" }
            }
        }
        script { (PreEscaped(JS)) }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the portfolio page. `root` is the relative path back to the site
/// root (`""` for the index, `"../../"` for viewer pages).
fn render_page(ctx: &PageContext, selection: &SelectionStore, root: &str) -> Markup {
    let body_class = selection.is_open().then_some("lightbox-open");
    let content = html! {
        (site_header(ctx, root))
        main {
            (hero_section(ctx, root))
            (works_section(ctx, root))
            (about_section(ctx, root))
            (contact_section(ctx))
        }
        footer.site-footer {
            p { "© " (ctx.data.artist.name) }
        }
        (lightbox(ctx, selection, root))
    };
    base_document(&ctx.data.config, ctx.css, body_class, content)
}

// ============================================================================
// Tests
// ============================================================================
