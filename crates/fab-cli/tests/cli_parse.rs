use clap::Parser;
use fab_cli::commands::classify::resolve;
use fab_cli::config::OutputFormat;
use fab_cli::{Cli, Command};
use fab_core::FabError;
use fab_group::{Decomposition, Notation};

fn classify_args(argv: &[&str]) -> fab_cli::commands::classify::ClassifyArgs {
    let cli = Cli::try_parse_from(argv.iter().copied()).expect("parse");
    match cli.command {
        Command::Classify(args) => args,
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn primary_and_invariant_flags_select_both() -> Result<(), FabError> {
    let args = classify_args(&["fab", "classify", "-p", "-i", "36"]);
    assert_eq!(args.order, "36");
    assert_eq!(resolve(&args)?.decomposition, Decomposition::Both);
    let args = classify_args(&["fab", "classify", "-i", "36"]);
    assert_eq!(resolve(&args)?.decomposition, Decomposition::Invariant);
    let args = classify_args(&["fab", "classify", "36"]);
    assert_eq!(resolve(&args)?.decomposition, Decomposition::Primary);
    Ok(())
}

#[test]
fn tex_flag_selects_document_and_tex_symbols() -> Result<(), FabError> {
    let args = classify_args(&["fab", "classify", "-t", "8"]);
    let config = resolve(&args)?;
    assert_eq!(config.format, OutputFormat::Document);
    assert_eq!(config.notation, Notation::Tex);
    Ok(())
}

#[test]
fn negative_order_reaches_validation() {
    let args = classify_args(&["fab", "classify", "-5"]);
    let err = fab_cli::commands::classify::run(&args).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.info().code, "order-negative");
}

#[test]
fn conflicting_formats_are_rejected() {
    let args = classify_args(&["fab", "classify", "--json", "-t", "8"]);
    let err = resolve(&args).unwrap_err();
    assert!(matches!(err, FabError::Config(_)));
    assert_eq!(err.info().code, "flag-conflict");
}

#[test]
fn notation_and_format_parse_from_flags() -> Result<(), FabError> {
    let args = classify_args(&[
        "fab",
        "classify",
        "--notation",
        "unicode",
        "--format",
        "json",
        "--no-headline",
        "12",
    ]);
    let config = resolve(&args)?;
    assert_eq!(config.notation, Notation::Unicode);
    assert_eq!(config.format, OutputFormat::Json);
    assert!(!config.headline);
    Ok(())
}

#[test]
fn unknown_notation_is_a_parse_error() {
    assert!(Cli::try_parse_from(["fab", "classify", "--notation", "roman", "4"]).is_err());
}

#[test]
fn global_log_level_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["fab", "count", "12", "--log-level", "debug"]).expect("parse");
    assert_eq!(cli.log_level, "debug");
    assert!(matches!(cli.command, Command::Count(_)));
}
