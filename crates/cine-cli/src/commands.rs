use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cine_aggregate::{RANKING_SIZE, rank_names};
use cine_core::{Catalog, PipelineOptions, load_catalog};
use cine_ingest::{read_raw_source, write_csv_table};
use cine_model::RowSchema;
use cine_transform::{CLEANED_COLUMNS, clean_rows};

use crate::types::{CleanResult, ExportDocument};

/// Suffix added to the input file stem by `cine clean`.
pub const CLEAN_SUFFIX: &str = "_clean";

pub fn run_load(path: &Path, options: PipelineOptions) -> Result<Catalog> {
    load_catalog(path, options).with_context(|| format!("load catalog {}", path.display()))
}

pub fn export_document(catalog: &Catalog) -> ExportDocument<'_> {
    ExportDocument {
        records: catalog.records(),
        views: catalog.views(),
        report: catalog.report(),
    }
}

/// Write the export document as pretty JSON to `output`, or stdout.
pub fn run_export(catalog: &Catalog, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&export_document(catalog))
        .context("serialize catalog export")?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), records = catalog.records().len(), "export written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("write export to stdout")?;
        }
    }
    Ok(())
}

/// `n_movies.csv` becomes `n_movies_clean.csv` next to it.
pub fn default_clean_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());
    input.with_file_name(format!("{stem}{CLEAN_SUFFIX}.csv"))
}

/// Convert a legacy catalog into the pre-cleaned layout.
pub fn run_clean(input: &Path, output: Option<&Path>, max_file_size: u64) -> Result<CleanResult> {
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();

    let source = read_raw_source(input, max_file_size, Some(RowSchema::Legacy))
        .with_context(|| format!("read {}", input.display()))?;
    let (entries, summary) = clean_rows(&source.legacy_rows());

    let output = output.map_or_else(|| default_clean_output(input), Path::to_path_buf);
    write_csv_table(&output, &CLEANED_COLUMNS, entries.iter().map(|entry| entry.to_fields()))
        .with_context(|| format!("write {}", output.display()))?;

    let primary_genres = rank_names(
        entries.iter().map(|entry| entry.primary_genre()),
        RANKING_SIZE,
    );
    info!(output = %output.display(), rows = summary.output_rows, "clean catalog written");
    Ok(CleanResult {
        input: input.to_path_buf(),
        output,
        summary,
        primary_genres,
    })
}
