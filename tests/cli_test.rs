#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use portfolio_registry::{app, CliConfig, ProjectsDocument, RegistryError};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> std::result::Result<String, RegistryError> {
    let argv = std::iter::once("portfolio-registry").chain(args.iter().copied());
    let config = CliConfig::try_parse_from(argv).expect("arguments should parse");
    let mut out = Vec::new();
    app::run(&config, &mut out)?;
    Ok(String::from_utf8(out).expect("output should be UTF-8"))
}

/// 匯出至巢狀目錄後再以 --source 讀回
#[test]
fn test_export_by_extension_then_check() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("site/data/projects.toml");
    let path_str = path.to_string_lossy().into_owned();

    let saved = run_cli(&["export", "-o", &path_str])?;
    assert!(saved.contains("Output saved to"));

    let written = std::fs::read_to_string(&path)?;
    assert!(written.starts_with("[[projects]]"), "{written}");
    assert_eq!(ProjectsDocument::from_toml_str(&written)?.projects.len(), 6);

    let report = run_cli(&["--source", &path_str, "check"])?;
    assert_eq!(report, "✅ 6 projects (5 displayable, 2 starred)\n");
    Ok(())
}

#[test]
fn test_export_format_contradicting_extension_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("projects.toml");
    let path_str = path.to_string_lossy().into_owned();

    let err = run_cli(&["export", "--format", "json", "-o", &path_str]).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_export_to_stdout_ends_with_newline() -> Result<()> {
    let json = run_cli(&["export"])?;
    assert!(json.ends_with("}\n"));
    assert_eq!(ProjectsDocument::from_json_str(&json)?.projects.len(), 6);
    Ok(())
}

#[test]
fn test_show_unknown_project_exits_with_one() {
    let err = run_cli(&["show", "Nonexistent"]).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { ref name } if name == "Nonexistent"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_show_prints_record_json() -> Result<()> {
    let shown = run_cli(&["show", "My blog"])?;
    let value: serde_json::Value = serde_json::from_str(&shown)?;
    assert_eq!(value["href"], "/blog/");
    Ok(())
}

#[test]
fn test_list_starred() -> Result<()> {
    let listed = run_cli(&["list", "--starred"])?;
    let names: Vec<&str> = listed.lines().collect();
    assert_eq!(names.len(), 2);
    assert!(names[0].starts_with("* createPokémon.team"));
    assert!(names[1].starts_with("* Pelican Metadata Generator"));

    assert_eq!(run_cli(&["list", "--all"])?.lines().count(), 6);
    Ok(())
}
