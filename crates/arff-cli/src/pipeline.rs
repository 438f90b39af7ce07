//! Dataset preparation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Dedupe**: Discover raw ARFF files and stage corrected copies
//! 2. **Load + Encode**: Parse each staged file and integer-code its label column
//! 3. **Output**: Write one Parquet file per dataset
//!
//! Processing is strictly sequential; the first failure aborts the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use arff_ingest::{RenamedAttribute, dedupe_arff_file, list_arff_files, load_arff};
use arff_report::{ParquetOutputOptions, write_parquet_outputs};
use arff_transform::{DatasetFrame, DatasetFrameMeta, LabelEncoding, encode_labels};

// ============================================================================
// Stage 1: Dedupe
// ============================================================================

/// One input file staged with a corrected copy.
#[derive(Debug, Clone)]
pub struct StagedFile {
    /// The raw input file.
    pub source: PathBuf,
    /// The corrected copy in the staging directory.
    pub staged: PathBuf,
    /// Attribute renames applied while staging.
    pub renamed: Vec<RenamedAttribute>,
}

/// Result of the dedupe stage.
#[derive(Debug)]
pub struct DedupeResult {
    /// Staged files in input order (sorted by filename).
    pub files: Vec<StagedFile>,
}

/// Discover raw ARFF files and write corrected copies to the staging dir.
pub fn dedupe(input_dir: &Path, staging_dir: &Path) -> Result<DedupeResult> {
    let dedupe_span = info_span!("dedupe", input_dir = %input_dir.display());
    let _dedupe_guard = dedupe_span.enter();
    let dedupe_start = Instant::now();

    let sources = list_arff_files(input_dir).context("list arff files")?;

    let mut files = Vec::with_capacity(sources.len());
    for source in sources {
        let staged = dedupe_arff_file(&source, staging_dir)
            .with_context(|| format!("stage {}", source.display()))?;
        debug!(
            source_file = %source.display(),
            staged_file = %staged.path.display(),
            renamed = staged.renamed.len(),
            "file staged"
        );
        files.push(StagedFile {
            source,
            staged: staged.path,
            renamed: staged.renamed,
        });
    }

    let renamed_total: usize = files.iter().map(|file| file.renamed.len()).sum();
    info!(
        file_count = files.len(),
        renamed_count = renamed_total,
        duration_ms = dedupe_start.elapsed().as_millis(),
        "dedupe complete"
    );
    Ok(DedupeResult { files })
}

// ============================================================================
// Stage 2: Load + Encode
// ============================================================================

/// Parse one staged file and integer-code its label column.
pub fn load_and_encode(staged: &StagedFile) -> Result<(DatasetFrame, LabelEncoding)> {
    let name = dataset_name(&staged.source);
    let load_span = info_span!("load_file", dataset = %name);
    let _load_guard = load_span.enter();
    let load_start = Instant::now();

    let (header, data) =
        load_arff(&staged.staged).with_context(|| format!("load {}", staged.staged.display()))?;

    let meta = DatasetFrameMeta::new()
        .with_source_file(staged.source.clone())
        .with_staged_file(staged.staged.clone())
        .with_renamed_attributes(staged.renamed.len())
        .with_relation(header.relation.clone());
    let mut frame = DatasetFrame::with_meta(name.clone(), data, meta);

    let encoding =
        encode_labels(&mut frame).with_context(|| format!("encode labels for {name}"))?;

    debug!(
        dataset = %name,
        rows = frame.record_count(),
        columns = frame.column_count(),
        classes = encoding.class_count(),
        duration_ms = load_start.elapsed().as_millis(),
        "file loaded"
    );
    Ok((frame, encoding))
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Output configuration.
pub struct OutputConfig<'a> {
    pub output_dir: &'a Path,
    pub options: ParquetOutputOptions,
    pub dry_run: bool,
}

/// Write Parquet output for every frame. Returns written paths in frame order.
pub fn output(frames: &mut [DatasetFrame], config: &OutputConfig<'_>) -> Result<Vec<PathBuf>> {
    let output_span = info_span!("output", output_dir = %config.output_dir.display());
    let _output_guard = output_span.enter();
    let output_start = Instant::now();

    if config.dry_run {
        info!(
            dataset_count = frames.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(Vec::new());
    }

    let written = write_parquet_outputs(config.output_dir, frames, &config.options)
        .context("write parquet outputs")?;

    info!(
        dataset_count = written.len(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    Ok(written)
}

// ============================================================================
// Helper functions
// ============================================================================

/// Dataset name for a source file: the basename without extension.
pub fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset")
        .to_string()
}
