//! URL-safe names for artworks and chapters.
//!
//! Record ids come from hand-edited JSON and may contain spaces, capitals or
//! punctuation (`"I am only passing through"`). They are used in two places
//! that need a restricted alphabet:
//!
//! - chapter anchors in the works section (`#passing-through`)
//! - viewer page directories (`works/i-am-only-passing-through/`)
//!
//! [`slugify`] maps an id into that alphabet. Non-ASCII letters are kept as-is
//! so Korean ids stay readable; browsers and file systems handle them fine.

/// Normalize an id for use in URLs, anchors and directory names.
///
/// - ASCII letters are lowercased
/// - any run of characters that are not alphanumeric becomes a single `-`
/// - leading and trailing dashes are dropped
///
/// `"I am only passing through..."` → `"i-am-only-passing-through"`.
/// An id with no alphanumeric characters at all slugifies to `""`.
pub fn slugify(id: &str) -> String {
    let mut slug = String::with_capacity(id.len());
    let mut pending_dash = false;
    for c in id.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Ids of the fixed page sections. Chapter anchors must not reuse them.
pub const SECTION_IDS: [&str; 3] = ["works", "about", "contact"];

/// Directory of the viewer page for an artwork slug, relative to the site root.
pub fn viewer_dir(slug: &str) -> String {
    format!("works/{slug}")
}

/// Anchor id of a chapter section on the index page.
///
/// Ids that slugify to a [`SECTION_IDS`] entry are prefixed with `chapter-`.
/// Distinct ids can still share an anchor (`"Woods"`, `"woods"`); the
/// generator rejects those.
pub fn chapter_anchor(chapter_id: &str) -> String {
    let slug = slugify(chapter_id);
    if slug.is_empty() {
        "chapter".to_string()
    } else if SECTION_IDS.contains(&slug.as_str()) {
        format!("chapter-{slug}")
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_id_unchanged() {
        assert_eq!(slugify("a1"), "a1");
        assert_eq!(slugify("chapter-1"), "chapter-1");
    }

    #[test]
    fn spaces_and_punctuation_collapse() {
        assert_eq!(
            slugify("I am only passing though the woods."),
            "i-am-only-passing-though-the-woods"
        );
        assert_eq!(slugify("Utopia = Reality"), "utopia-reality");
    }

    #[test]
    fn leading_and_trailing_junk_dropped() {
        assert_eq!(slugify("  --Dawn--  "), "dawn");
        assert_eq!(slugify("1. Woods"), "1-woods");
    }

    #[test]
    fn non_ascii_letters_kept() {
        assert_eq!(slugify("숲 속 길"), "숲-속-길");
    }

    #[test]
    fn nothing_alphanumeric_is_empty() {
        assert_eq!(slugify("..."), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn viewer_dir_under_works() {
        assert_eq!(viewer_dir("a1"), "works/a1");
    }

    #[test]
    fn chapter_anchor_falls_back_when_empty() {
        assert_eq!(chapter_anchor("Chapter One"), "chapter-one");
        assert_eq!(chapter_anchor("???"), "chapter");
    }

    #[test]
    fn chapter_anchor_avoids_section_ids() {
        assert_eq!(chapter_anchor("works"), "chapter-works");
        assert_eq!(chapter_anchor("About"), "chapter-about");
        assert_eq!(chapter_anchor("contact!"), "chapter-contact");
        assert_eq!(chapter_anchor("works 2"), "works-2");
    }
}
