use std::fs;

use fab_cli::commands::classify::{resolve, run, write_catalog, ClassifyArgs};
use fab_cli::commands::count::count;
use fab_cli::commands::partitions::write_partitions;
use fab_cli::config::{load_config, OutputConfig, OutputFormat};
use fab_core::{FabError, GroupOrder};
use fab_group::{Decomposition, Notation};

fn render(n: u64, config: &OutputConfig) -> Result<String, FabError> {
    let mut buffer = Vec::new();
    write_catalog(GroupOrder::new(n)?, config, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("utf8"))
}

#[test]
fn default_lines_show_headline_and_primary_forms() -> Result<(), FabError> {
    let text = render(12, &OutputConfig::default())?;
    assert_eq!(
        text,
        "There are 2 abelian groups of order 12.\nZ/4 × Z/3\nZ/2 × Z/2 × Z/3\n"
    );
    Ok(())
}

#[test]
fn invariant_lines_without_headline() -> Result<(), FabError> {
    let config = OutputConfig {
        decomposition: Decomposition::Invariant,
        notation: Notation::Ascii,
        headline: false,
        ..OutputConfig::default()
    };
    assert_eq!(render(8, &config)?, "Z/8\nZ/2 x Z/4\nZ/2 x Z/2 x Z/2\n");
    Ok(())
}

#[test]
fn trivial_group_uses_singular_headline() -> Result<(), FabError> {
    let text = render(1, &OutputConfig::default())?;
    assert_eq!(text, "There is one abelian group of order 1.\nZ/1\n");
    Ok(())
}

#[test]
fn document_wraps_rows_in_gather() -> Result<(), FabError> {
    let config = OutputConfig {
        format: OutputFormat::Document,
        ..OutputConfig::default()
    };
    let doc = render(4, &config)?;
    assert!(doc.starts_with("\\documentclass{amsart}\n"));
    assert!(doc.contains("\\title{Abelian Groups of Order 4}"));
    assert!(doc.contains("There are 2 abelian groups of order 4."));
    assert!(doc.contains("\\begin{gather*}\n\\Z/4\\\\\n\\Z/2 \\oplus \\Z/2\n\\end{gather*}"));
    assert!(doc.ends_with("\\end{document}\n"));
    Ok(())
}

#[test]
fn document_respects_no_headline() -> Result<(), FabError> {
    let args = ClassifyArgs {
        order: "4".into(),
        tex: true,
        no_headline: true,
        ..ClassifyArgs::default()
    };
    let config = resolve(&args)?;
    assert!(!config.headline);
    assert_eq!(config.notation, Notation::Tex);
    let doc = render(4, &config)?;
    assert!(!doc.contains("abelian group"));
    assert!(doc.contains("\\begin{gather*}\n\\Z/4\\\\\n\\Z/2 \\oplus \\Z/2\n"));
    Ok(())
}

#[test]
fn document_rejects_non_tex_notation() {
    for args in [
        ClassifyArgs {
            order: "4".into(),
            tex: true,
            notation: Some(Notation::Unicode),
            ..ClassifyArgs::default()
        },
        ClassifyArgs {
            order: "4".into(),
            format: Some(OutputFormat::Document),
            notation: Some(Notation::Ascii),
            ..ClassifyArgs::default()
        },
    ] {
        let err = resolve(&args).unwrap_err();
        assert!(matches!(err, FabError::Config(_)));
        assert_eq!(err.info().code, "flag-conflict");
    }
    let explicit_tex = ClassifyArgs {
        order: "4".into(),
        tex: true,
        notation: Some(Notation::Tex),
        ..ClassifyArgs::default()
    };
    assert!(resolve(&explicit_tex).is_ok());
}

#[test]
fn json_output_is_a_catalog_report() -> Result<(), FabError> {
    let config = OutputConfig {
        format: OutputFormat::Json,
        ..OutputConfig::default()
    };
    let text = render(36, &config)?;
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["order"], 36);
    assert_eq!(value["count"], 4);
    assert_eq!(value["groups"][2]["invariant"], serde_json::json!([2, 18]));
    assert!(value["catalog_hash"].as_str().is_some());
    Ok(())
}

#[test]
fn config_file_supplies_defaults() -> Result<(), FabError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fab.yaml");
    fs::write(&path, "decomposition: both\nnotation: unicode\nheadline: false\n")
        .expect("write config");
    let config = load_config(&path)?;
    assert_eq!(config.decomposition, Decomposition::Both);
    assert_eq!(config.notation, Notation::Unicode);
    assert_eq!(config.format, OutputFormat::Lines);
    assert!(!config.headline);
    assert_eq!(render(4, &config)?, "ℤ/4 ≅ ℤ/4\nℤ/2 ⊕ ℤ/2 ≅ ℤ/2 ⊕ ℤ/2\n");
    Ok(())
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fab.yaml");
    fs::write(&path, "notation: roman\n").expect("write config");
    let err = load_config(&path).unwrap_err();
    assert_eq!(err.info().code, "config-parse");
    let missing = load_config(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(missing.info().code, "config-read");
}

#[test]
fn out_flag_writes_file() -> Result<(), FabError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("groups.txt");
    let args = ClassifyArgs {
        order: "16".into(),
        invariant: true,
        no_headline: true,
        out: Some(path.clone()),
        ..ClassifyArgs::default()
    };
    run(&args)?;
    let written = fs::read_to_string(&path).expect("read output");
    assert_eq!(written.lines().count(), 5);
    assert_eq!(written.lines().last(), Some("Z/2 × Z/2 × Z/2 × Z/2"));
    Ok(())
}

#[test]
fn count_and_partitions_helpers() -> Result<(), FabError> {
    assert_eq!(count(GroupOrder::new(720)?)?, 10);
    let mut buffer = Vec::new();
    write_partitions(3, &mut buffer)?;
    assert_eq!(
        String::from_utf8(buffer).expect("utf8"),
        "(3)\n(2, 1)\n(1, 1, 1)\n"
    );
    Ok(())
}
