use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use arff_ingest::{list_arff_files, rename_duplicate_attributes};
use arff_model::{is_attribute_line, split_declaration};
use arff_report::{CompressionChoice, ParquetOutputOptions};
use arff_transform::DatasetFrame;

use crate::cli::{CompressionArg, InspectArgs, RunArgs};
use crate::pipeline::{OutputConfig, dedupe, load_and_encode, output};
use crate::summary::apply_table_style;
use crate::types::{FileSummary, RunResult};

pub fn run_prepare(args: &RunArgs) -> Result<RunResult> {
    let input_dir = &args.input_dir;
    let staging_dir = args
        .staging_dir
        .clone()
        .unwrap_or_else(|| input_dir.join("pre-processed"));
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| input_dir.join("processed"));
    let run_span = info_span!("run", input_dir = %input_dir.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let options = ParquetOutputOptions::default().with_compression(match args.compression {
        CompressionArg::Snappy => CompressionChoice::Snappy,
        CompressionArg::Zstd => CompressionChoice::Zstd,
        CompressionArg::Uncompressed => CompressionChoice::Uncompressed,
    });

    // =========================================================================
    // Stage 1: Dedupe - stage corrected copies of every input file
    // =========================================================================
    let deduped = dedupe(input_dir, &staging_dir)?;

    // =========================================================================
    // Stage 2: Load + Encode - parse staged files, integer-code label columns
    // =========================================================================
    let mut frames: Vec<DatasetFrame> = Vec::with_capacity(deduped.files.len());
    let mut summaries: Vec<FileSummary> = Vec::with_capacity(deduped.files.len());
    for staged in &deduped.files {
        let (frame, encoding) = load_and_encode(staged)
            .with_context(|| format!("process {}", staged.source.display()))?;
        summaries.push(FileSummary {
            name: frame.name.clone(),
            rows: frame.record_count(),
            columns: frame.column_count(),
            renamed: staged.renamed.len(),
            classes: encoding.class_count(),
            label_mapping: encoding.preview(),
            parquet: None,
        });
        frames.push(frame);
    }

    // =========================================================================
    // Stage 3: Output - one Parquet file per dataset
    // =========================================================================
    let written = output(
        &mut frames,
        &OutputConfig {
            output_dir: &output_dir,
            options,
            dry_run: args.dry_run,
        },
    )?;
    for (summary, path) in summaries.iter_mut().zip(written) {
        summary.parquet = Some(path);
    }

    info!(
        file_count = summaries.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input_dir: input_dir.clone(),
        staging_dir,
        output_dir,
        dry_run: args.dry_run,
        files: summaries,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let files = list_arff_files(&args.input_dir).context("list arff files")?;

    let mut table = Table::new();
    table.set_header(vec!["File", "Attributes", "Duplicates", "Renames"]);
    apply_table_style(&mut table);

    for path in &files {
        let text =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let attribute_count = text
            .lines()
            .filter(|line| is_attribute_line(line) && split_declaration(line).is_some())
            .count();
        let outcome = rename_duplicate_attributes(&text);
        let renames = if outcome.renamed.is_empty() {
            "-".to_string()
        } else {
            outcome
                .renamed
                .iter()
                .map(|rename| format!("{} -> {}", rename.original, rename.replacement))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown");
        table.add_row(vec![
            file_name.to_string(),
            attribute_count.to_string(),
            outcome.renamed.len().to_string(),
            renames,
        ]);
    }

    println!("{table}");
    Ok(())
}
