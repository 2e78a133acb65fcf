/// IoSleuth CLI — argument handling, config resolution, and rendering.
///
/// The binary parses [`Cli`], installs the stderr subscriber at
/// [`Cli::log_level`], and calls [`run`]. Nothing is written to the output
/// until the whole trace has been analysed, so a fatal trace error leaves
/// no partial report behind.
pub mod args;
pub mod render;

pub use args::{Cli, Format};

use anyhow::{anyhow, Context, Result};
use iosleuth_core::model::CategoryKind;
use iosleuth_core::report::Report;
use iosleuth_core::{analyse_summary, analyse_trace, AnalysisConfig};
use std::fs::File;
use std::io::{BufReader, Write};
use tracing::{debug, info};

/// Settings from `--config` (or defaults) with command-line overrides
/// applied on top.
pub fn resolve_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if !cli.ignore.is_empty() {
        config.ignore_substrings = cli.ignore.clone();
    }
    if cli.no_sentinel {
        config.session_end_marker = None;
    }
    if cli.no_paging_io {
        config.count_paging_io = false;
    }
    debug!("Analysis config: {:?}", config);
    Ok(config)
}

/// Resolve `--list-files` to a category.
fn list_category(cli: &Cli) -> Result<Option<CategoryKind>> {
    cli.list_files
        .as_deref()
        .map(|label| {
            CategoryKind::from_label(label).ok_or_else(|| {
                let known: Vec<&str> = CategoryKind::ALL.iter().map(|k| k.label()).collect();
                anyhow!("Unknown category \"{}\" (expected one of: {})", label, known.join(", "))
            })
        })
        .transpose()
}

fn open(path: &std::path::Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Analyse the trace named by `cli` and write the report to `out`.
pub fn run<W: Write>(cli: &Cli, mut out: W) -> Result<()> {
    let config = resolve_config(cli)?;
    let list = list_category(cli)?;

    info!("Analysing {}", cli.trace.display());
    let trace = open(&cli.trace)?;
    let analysis = match &cli.summary {
        Some(summary) => analyse_summary(open(summary)?, trace, &config),
        None => analyse_trace(trace, &config),
    }
    .with_context(|| format!("Failed to analyse {}", cli.trace.display()))?;

    let report = Report::build(&analysis, list);
    match cli.format {
        Format::Text => render::write_text(&report, &mut out)?,
        Format::Csv => render::write_csv(&report, &mut out)?,
        Format::Json => render::write_json(&report, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
