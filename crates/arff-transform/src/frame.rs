use std::path::PathBuf;

use polars::prelude::DataFrame;

/// Metadata about a dataset frame's provenance.
///
/// Tracks where the frame came from: the raw source file, the corrected
/// copy it was parsed from, and how many attribute declarations had to be
/// renamed along the way.
#[derive(Debug, Clone, Default)]
pub struct DatasetFrameMeta {
    /// The raw input file, before duplicate repair.
    pub source_file: Option<PathBuf>,

    /// The corrected copy in the staging directory.
    pub staged_file: Option<PathBuf>,

    /// Number of attribute declarations renamed during staging.
    pub renamed_attributes: usize,

    /// The relation name declared in the ARFF header.
    pub relation: Option<String>,
}

impl DatasetFrameMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_file(mut self, path: PathBuf) -> Self {
        self.source_file = Some(path);
        self
    }

    pub fn with_staged_file(mut self, path: PathBuf) -> Self {
        self.staged_file = Some(path);
        self
    }

    pub fn with_renamed_attributes(mut self, count: usize) -> Self {
        self.renamed_attributes = count;
        self
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }
}

/// A named tabular dataset with optional provenance metadata.
///
/// The name is the input file's basename without extension and becomes the
/// output file stem.
#[derive(Debug, Clone)]
pub struct DatasetFrame {
    pub name: String,
    pub data: DataFrame,
    pub meta: Option<DatasetFrameMeta>,
}

impl DatasetFrame {
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
            meta: None,
        }
    }

    pub fn with_meta(name: impl Into<String>, data: DataFrame, meta: DatasetFrameMeta) -> Self {
        Self {
            name: name.into(),
            data,
            meta: Some(meta),
        }
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_count(&self) -> usize {
        self.data.width()
    }

    /// The last column's name, if the frame has any columns.
    pub fn label_column(&self) -> Option<String> {
        self.data
            .get_column_names()
            .last()
            .map(|name| name.to_string())
    }

    pub fn source_file(&self) -> Option<&PathBuf> {
        self.meta.as_ref().and_then(|meta| meta.source_file.as_ref())
    }

    pub fn renamed_attributes(&self) -> usize {
        self.meta
            .as_ref()
            .map(|meta| meta.renamed_attributes)
            .unwrap_or(0)
    }
}
