//! ARFF dataset ingestion.
//!
//! This crate covers the input half of the preparation pipeline:
//!
//! - [`dedupe`]: repair duplicate attribute declarations before parsing
//! - [`discovery`]: locate ARFF files in an input directory
//! - [`arff_table`]: parse a corrected ARFF file into a raw table
//! - [`frame_builder`]: build a typed polars `DataFrame` from a raw table
//! - [`polars_utils`]: `AnyValue` conversion helpers shared downstream

pub mod arff_table;
pub mod dedupe;
pub mod discovery;
pub mod error;
pub mod frame_builder;
pub mod polars_utils;

pub use arff_table::{ArffTable, read_arff_table};
pub use dedupe::{DedupeOutcome, DedupedFile, RenamedAttribute, dedupe_arff_file,
    rename_duplicate_attributes};
pub use discovery::list_arff_files;
pub use error::{IngestError, Result};
pub use frame_builder::{build_dataset_frame, load_arff};
pub use polars_utils::{any_to_f64, any_to_string, format_numeric, parse_f64};
