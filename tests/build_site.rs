//! End-to-end tests: run the built binary against `fixtures/content`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(args: &[&str], output_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simple-folio"))
        .args(args)
        .arg("--source")
        .arg(fixtures())
        .arg("--output")
        .arg(output_dir)
        .output()
        .expect("failed to run simple-folio")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn build_writes_index_and_viewer_pages() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = run(&["build"], &dist);
    assert!(out.status.success(), "build failed: {}", stderr(&out));

    let index = std::fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(index.contains("Lim Hyejung"));
    assert!(!index.contains(r#"class="lightbox-open""#));

    for slug in [
        "passing-through",
        "birch-morning",
        "glass-garden",
        "utopia-reality",
        "quiet-field",
    ] {
        assert!(
            dist.join("works").join(slug).join("index.html").exists(),
            "missing viewer page for {slug}"
        );
    }
    assert!(!dist.join("works/stray-sketch").exists());
    assert!(dist.join("images/hero.png").exists());
    assert!(dist.join("images/works/glass-garden.png").exists());
}

#[test]
fn viewer_page_opens_lightbox_on_its_artwork() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    assert!(run(&["build"], &dist).status.success());

    let page = std::fs::read_to_string(dist.join("works/passing-through/index.html")).unwrap();
    assert!(page.contains(r#"class="lightbox-open""#));
    assert!(page.contains(r#"data-close="../../index.html#woods""#));
    assert!(page.contains(r#"data-next="../../works/birch-morning/index.html""#));
    assert!(!page.contains("data-prev="));
}

#[test]
fn build_summary_lists_chapters_in_order() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["build"], &tmp.path().join("dist"));
    let text = stdout(&out);

    let woods = text.find("001 I Am Only Passing Through the Woods").unwrap();
    let utopia = text.find("002 Utopia = Reality").unwrap();
    assert!(woods < utopia);
    assert!(text.contains("Skipped 1 artwork (no matching chapter): stray-sketch"));
    assert!(!stderr(&out).contains("stray-sketch.png"));
}

#[test]
fn check_reports_orphan_without_failing() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["check"], tmp.path());
    assert!(out.status.success(), "check failed: {}", stderr(&out));
    assert!(stdout(&out).contains("stray-sketch \u{2192} chapter \"sketches\""));
    assert!(stderr(&out).contains("warning: images/works/stray-sketch.png: file not found"));
    assert!(!tmp.path().join("index.html").exists());
}

#[test]
fn strict_check_fails_on_orphan() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["check", "--strict"], tmp.path());
    assert!(!out.status.success());
    assert!(stderr(&out).contains("stray-sketch"));
}

#[test]
fn preview_with_unknown_artwork_renders_closed() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["preview", "--artwork", "no-such-work"], tmp.path());
    assert!(out.status.success());
    assert!(stderr(&out).contains("no artwork with id 'no-such-work'"));
    assert!(!stdout(&out).contains(r#"class="lightbox-open""#));
}

#[test]
fn preview_opens_requested_artwork() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["preview", "--artwork", "glass-garden"], tmp.path());
    assert!(out.status.success());
    let html = stdout(&out);
    assert!(html.contains(r#"class="lightbox-open""#));
    assert!(html.contains(r#"aria-label="Glass Garden""#));
}

#[test]
fn gen_config_parses_back() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["gen-config"], tmp.path());
    assert!(out.status.success());
    let value: toml::Value = toml::from_str(&stdout(&out)).unwrap();
    assert!(value.get("site").is_some());
}
