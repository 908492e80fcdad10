//! `fab classify`: list every abelian group of one order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use fab_core::{ErrorInfo, FabError, GroupOrder};
use fab_group::render::{headline, render_line, tex_document};
use fab_group::serde_io::report_to_json;
use fab_group::{build_report, Decomposition, GroupCatalog, Notation};
use tracing::{debug, info};

use super::write_error;
use crate::config::{load_config, OutputConfig, OutputFormat};

/// Arguments for `fab classify`.
#[derive(Args, Debug, Clone, Default)]
pub struct ClassifyArgs {
    /// Group order N (a positive integer).
    #[arg(allow_hyphen_values = true)]
    pub order: String,
    /// Show the primary decomposition (the default).
    #[arg(short = 'p', long)]
    pub primary: bool,
    /// Show the invariant-factor decomposition. Combined with -p, show both.
    #[arg(short = 'i', long)]
    pub invariant: bool,
    /// Emit a standalone LaTeX document.
    #[arg(short = 't', long)]
    pub tex: bool,
    /// Symbols used for cyclic groups and products.
    #[arg(long)]
    pub notation: Option<Notation>,
    /// Output shape: lines, document or json.
    #[arg(long)]
    pub format: Option<OutputFormat>,
    /// Emit the JSON catalog report.
    #[arg(long)]
    pub json: bool,
    /// Suppress the headline sentence.
    #[arg(long)]
    pub no_headline: bool,
    /// YAML file providing default output settings.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Combines the optional config file with command line flags.
pub fn resolve(args: &ClassifyArgs) -> Result<OutputConfig, FabError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => OutputConfig::default(),
    };

    match (args.primary, args.invariant) {
        (true, true) => config.decomposition = Decomposition::Both,
        (true, false) => config.decomposition = Decomposition::Primary,
        (false, true) => config.decomposition = Decomposition::Invariant,
        (false, false) => {}
    }

    let requested = [
        args.tex.then_some(OutputFormat::Document),
        args.json.then_some(OutputFormat::Json),
        args.format,
    ];
    let mut chosen: Option<OutputFormat> = None;
    for format in requested.into_iter().flatten() {
        match chosen {
            Some(previous) if previous != format => {
                return Err(FabError::Config(
                    ErrorInfo::new("flag-conflict", "conflicting output formats requested")
                        .with_context("first", previous.to_string())
                        .with_context("second", format.to_string()),
                ));
            }
            _ => chosen = Some(format),
        }
    }
    if let Some(format) = chosen {
        config.format = format;
    }
    if config.format == OutputFormat::Document {
        // rows of a LaTeX document are always typeset with TeX symbols
        if let Some(notation) = args.notation.filter(|n| *n != Notation::Tex) {
            return Err(FabError::Config(
                ErrorInfo::new("flag-conflict", "document output only supports tex notation")
                    .with_context("notation", notation.to_string())
                    .with_context("format", OutputFormat::Document.to_string()),
            ));
        }
        config.notation = Notation::Tex;
    } else if let Some(notation) = args.notation {
        config.notation = notation;
    }
    if args.no_headline {
        config.headline = false;
    }
    Ok(config)
}

/// Runs the subcommand, writing to `--out` or stdout.
pub fn run(args: &ClassifyArgs) -> Result<(), FabError> {
    let order: GroupOrder = args.order.parse()?;
    let config = resolve(args)?;
    debug!(?config, "resolved output configuration");

    match &args.out {
        Some(path) => {
            let file = File::create(path).map_err(|err| write_error(Some(path), err))?;
            let mut writer = BufWriter::new(file);
            write_catalog(order, &config, &mut writer)?;
            writer.flush().map_err(|err| write_error(Some(path), err))?;
            info!(path = %path.display(), "wrote catalog");
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_catalog(order, &config, &mut writer)
        }
    }
}

/// Renders every group of `order` according to `config`.
///
/// Line output is streamed group by group; the document and JSON shapes need
/// the whole catalog first.
pub fn write_catalog<W: Write>(
    order: GroupOrder,
    config: &OutputConfig,
    out: &mut W,
) -> Result<(), FabError> {
    let catalog = GroupCatalog::new(order)?;
    let io_err = |err: io::Error| write_error(None, err);

    match config.format {
        OutputFormat::Lines => {
            if config.headline {
                if let Some(count) = catalog.count() {
                    writeln!(out, "{}", headline(count, order)).map_err(io_err)?;
                }
            }
            for group in catalog.iter() {
                writeln!(
                    out,
                    "{}",
                    render_line(&group, config.decomposition, config.notation)
                )
                .map_err(io_err)?;
            }
        }
        OutputFormat::Document => {
            let rows: Vec<String> = catalog
                .iter()
                .map(|group| render_line(&group, config.decomposition, Notation::Tex))
                .collect();
            let document = tex_document(order, rows.len() as u64, &rows, config.headline);
            out.write_all(document.as_bytes()).map_err(io_err)?;
        }
        OutputFormat::Json => {
            let report = build_report(&catalog)?;
            writeln!(out, "{}", report_to_json(&report)?).map_err(io_err)?;
        }
    }
    Ok(())
}
