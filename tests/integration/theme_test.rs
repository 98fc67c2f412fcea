//! Theme file handling through the CLI.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use src2png::canvas::MARGIN;
use src2png::render::BORDER_WIDTH;

use crate::helpers::{create_source_file, decode_png, pixel_at, run_src2png};

#[test]
fn theme_overrides_border_and_background() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_source_file(&temp_dir, "in.txt", "themed\n");
    let theme = create_source_file(
        &temp_dir,
        "theme.toml",
        r##"
background = "#112233"
border = "#445566"
"##,
    );
    let out = temp_dir.path().join("out.png");

    run_src2png()
        .arg(&input)
        .arg(&out)
        .arg("--theme")
        .arg(&theme)
        .assert()
        .success();

    let (info, buf) = decode_png(&out);
    assert_eq!(pixel_at(&buf, info.width, 0, 0), [0x44, 0x55, 0x66, 0xff]);
    // Inside the margin but left of the text: pure background
    assert_eq!(
        pixel_at(&buf, info.width, BORDER_WIDTH + 1, MARGIN - 2),
        [0x11, 0x22, 0x33, 0xff]
    );
}

#[test]
fn missing_theme_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_source_file(&temp_dir, "in.txt", "x\n");
    let out = temp_dir.path().join("out.png");

    run_src2png()
        .arg(&input)
        .arg(&out)
        .arg("--theme")
        .arg("no-such-theme.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-theme.toml"));

    assert!(!out.exists());
}

#[test]
fn malformed_theme_color_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_source_file(&temp_dir, "in.txt", "x\n");
    let theme = create_source_file(&temp_dir, "theme.toml", r#"keyword = "red""#);
    let out = temp_dir.path().join("out.png");

    run_src2png()
        .arg(&input)
        .arg(&out)
        .arg("--theme")
        .arg(&theme)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Keyword"));

    assert!(!out.exists());
}

#[test]
fn unparseable_theme_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_source_file(&temp_dir, "in.txt", "x\n");
    let theme = create_source_file(&temp_dir, "theme.toml", "not = [valid");
    let out = temp_dir.path().join("out.png");

    run_src2png()
        .arg(&input)
        .arg(&out)
        .arg("--theme")
        .arg(&theme)
        .assert()
        .failure()
        .stderr(predicate::str::contains("theme.toml"));
}
