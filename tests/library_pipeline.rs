// tests/library_pipeline.rs

mod common;

use common::FakeGitHub;
use plugin_scaffold::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const API: &str = "https://api.github.com/repos/acme/plugin-template";
const RAW: &str = "https://raw.githubusercontent.com/acme/plugin-template/v2.1.0";

fn file_entry(path: &str) -> serde_json::Value {
    json!({
        "name": path.rsplit('/').next().unwrap(),
        "path": path,
        "type": "file",
        "download_url": format!("{}/{}", RAW, path),
        "url": format!("{}/contents/{}?ref=v2.1.0", API, path),
    })
}

fn dir_entry(path: &str) -> serde_json::Value {
    json!({
        "name": path.rsplit('/').next().unwrap(),
        "path": path,
        "type": "dir",
        "download_url": null,
        "url": format!("{}/contents/{}?ref=v2.1.0", API, path),
    })
}

/// A repository with a `template/` directory two levels deep, plus root files that must be skipped.
fn templated_repository() -> FakeGitHub {
    FakeGitHub::new()
        .json(
            &format!("{}/contents?ref=v2.1.0", API),
            json!([file_entry("README.md"), dir_entry("template"), dir_entry("docs")]),
        )
        .json(
            &format!("{}/contents/template?ref=v2.1.0", API),
            json!([
                file_entry("template/package.json"),
                dir_entry("template/src"),
                dir_entry("template/public")
            ]),
        )
        .json(
            &format!("{}/contents/template/src?ref=v2.1.0", API),
            json!([file_entry("template/src/index.js"), dir_entry("template/src/components")]),
        )
        .json(
            &format!("{}/contents/template/src/components?ref=v2.1.0", API),
            json!([file_entry("template/src/components/Panel.jsx")]),
        )
        .json(
            &format!("{}/contents/template/public?ref=v2.1.0", API),
            json!([file_entry("template/public/logo.png")]),
        )
        .file(&format!("{}/template/package.json", RAW), b"{\"name\":\"plugin\"}")
        .file(&format!("{}/template/src/index.js", RAW), b"import './components/Panel';")
        .file(
            &format!("{}/template/src/components/Panel.jsx", RAW),
            b"export default () => null;",
        )
        .file(&format!("{}/template/public/logo.png", RAW), &[0x89, 0x50, 0x4e, 0x47, 0x00, 0xff])
}

fn scaffold_into(client: &FakeGitHub, output: &Path, parallel: bool) -> Result<DownloadSummary> {
    let reference = parse_reference("https://github.com/acme/plugin-template/tree/v2.1.0")?;
    download_repo(
        client,
        &GitHubApi::for_reference(&reference),
        &reference,
        output,
        DownloadOptions {
            parallel,
            progress: None,
        },
    )
}

#[test]
fn test_scaffolds_nested_template_tree() -> anyhow::Result<()> {
    for parallel in [false, true] {
        let temp = tempdir()?;
        let client = templated_repository();

        let summary = scaffold_into(&client, temp.path(), parallel)?;

        assert_eq!(
            summary,
            DownloadSummary {
                files: 4,
                directories: 3
            }
        );
        let root = temp.path();
        assert_eq!(fs::read_to_string(root.join("package.json"))?, "{\"name\":\"plugin\"}");
        assert!(root.join("src").join("index.js").is_file());
        assert!(root.join("src").join("components").join("Panel.jsx").is_file());
        assert_eq!(
            fs::read(root.join("public").join("logo.png"))?,
            vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff]
        );
        assert!(!root.join("README.md").exists());
        assert!(!root.join("docs").exists());
        assert!(!root.join("template").exists());
    }
    Ok(())
}

#[test]
fn test_untemplated_repository_is_mirrored_from_root() -> anyhow::Result<()> {
    let temp = tempdir()?;
    let client = FakeGitHub::new()
        .json(
            &format!("{}/contents?ref=v2.1.0", API),
            json!([file_entry("package.json"), dir_entry("src")]),
        )
        .json(
            &format!("{}/contents/src?ref=v2.1.0", API),
            json!([file_entry("src/index.js")]),
        )
        .file(&format!("{}/package.json", RAW), b"{}")
        .file(&format!("{}/src/index.js", RAW), b"// entry");

    let summary = scaffold_into(&client, temp.path(), false)?;

    assert_eq!(summary.files, 2);
    assert_eq!(fs::read_to_string(temp.path().join("src").join("index.js"))?, "// entry");
    // The root is listed twice: once by the template check, once by the walk.
    assert_eq!(client.request_count(), 5);
    Ok(())
}

#[test]
fn test_missing_raw_file_aborts_with_status() -> anyhow::Result<()> {
    let temp = tempdir()?;
    let client = FakeGitHub::new()
        .json(
            &format!("{}/contents?ref=v2.1.0", API),
            json!([file_entry("package.json")]),
        );

    let result = scaffold_into(&client, temp.path(), false);

    assert!(matches!(result, Err(Error::HttpStatus { status: 404, .. })));
    assert!(!temp.path().join("package.json").exists());
    Ok(())
}

#[test]
fn test_unknown_ref_fails_at_template_check() -> anyhow::Result<()> {
    let temp = tempdir()?;
    let client = FakeGitHub::new();

    let result = scaffold_into(&client, temp.path(), true);

    assert!(matches!(result, Err(Error::HttpStatus { status: 404, .. })));
    assert_eq!(client.request_count(), 1);
    Ok(())
}

#[test]
fn test_list_tags_through_public_api() -> anyhow::Result<()> {
    let client = FakeGitHub::new().json(
        &format!("{}/git/refs/tags", API),
        json!([
            {"ref": "refs/tags/v1.0.0"},
            {"ref": "refs/tags/nightly"},
            {"ref": "refs/tags/v2.1.0"}
        ]),
    );
    let reference = parse_reference("https://github.com/acme/plugin-template")?;

    let tags = list_tags(&client, &GitHubApi::for_reference(&reference), &reference)?;

    assert_eq!(tags, vec!["1.0.0", "2.1.0"]);
    Ok(())
}
