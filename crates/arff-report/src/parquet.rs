//! Parquet output generation.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, ParquetCompression, ParquetWriter};
use tracing::debug;

use arff_transform::DatasetFrame;

use crate::common::{ensure_output_dir, output_path};

/// Compression codec for written Parquet files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompressionChoice {
    /// Matches what the original pyarrow-based exports produced.
    #[default]
    Snappy,
    Zstd,
    Uncompressed,
}

/// Options for Parquet output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParquetOutputOptions {
    pub compression: CompressionChoice,
}

impl ParquetOutputOptions {
    pub fn with_compression(mut self, compression: CompressionChoice) -> Self {
        self.compression = compression;
        self
    }

    fn codec(self) -> ParquetCompression {
        match self.compression {
            CompressionChoice::Snappy => ParquetCompression::Snappy,
            CompressionChoice::Zstd => ParquetCompression::Zstd(None),
            CompressionChoice::Uncompressed => ParquetCompression::Uncompressed,
        }
    }
}

/// Write a single DataFrame to a Parquet file.
pub fn write_parquet(
    path: &Path,
    data: &mut DataFrame,
    options: &ParquetOutputOptions,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    ParquetWriter::new(file)
        .with_compression(options.codec())
        .finish(data)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Write one Parquet file per frame into `output_dir`.
///
/// Filenames reuse each frame's name (the source basename) with a
/// `.parquet` extension. Returns the written paths in frame order.
pub fn write_parquet_outputs(
    output_dir: &Path,
    frames: &mut [DatasetFrame],
    options: &ParquetOutputOptions,
) -> Result<Vec<PathBuf>> {
    ensure_output_dir(output_dir)?;

    let mut outputs = Vec::with_capacity(frames.len());
    for frame in frames {
        let path = output_path(output_dir, &frame.name, "parquet");
        write_parquet(&path, &mut frame.data, options)
            .with_context(|| format!("dataset {}", frame.name))?;
        debug!(
            dataset = %frame.name,
            path = %path.display(),
            rows = frame.record_count(),
            columns = frame.column_count(),
            "parquet written"
        );
        outputs.push(path);
    }
    Ok(outputs)
}
