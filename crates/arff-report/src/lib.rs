//! Prepared-dataset output generation.
//!
//! One Parquet file per dataset frame, same basename as the source file,
//! written into a configured output directory.

mod common;
mod parquet;

pub use common::ensure_output_dir;
pub use parquet::{CompressionChoice, ParquetOutputOptions, write_parquet, write_parquet_outputs};
