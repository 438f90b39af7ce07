//! Label column integer encoding.
//!
//! The last column of a dataset frame is the class label. Encoding replaces
//! every label value with its zero-based rank among the distinct values of
//! the column, so downstream consumers see a dense integer coding in
//! `[0, K-1]`.
//!
//! Ordering rule: string labels rank lexically by byte order, numeric labels
//! rank ascending under `f64::total_cmp`. Missing labels (null cells, NaN)
//! encode to `-1`, the usual categorical-code convention.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use polars::prelude::{AnyValue, DataType, NamedFrom, Series};
use tracing::debug;

use arff_ingest::{any_to_f64, any_to_string, format_numeric};

use crate::frame::DatasetFrame;

/// The mapping applied to a label column.
#[derive(Debug, Clone)]
pub struct LabelEncoding {
    /// Name of the encoded column.
    pub column: String,
    /// Distinct label values (rendered as text) with their assigned codes,
    /// in code order.
    pub mapping: Vec<(String, i32)>,
}

impl LabelEncoding {
    /// Number of distinct classes observed.
    pub fn class_count(&self) -> usize {
        self.mapping.len()
    }

    /// Compact `value=code` rendering for logs and summaries.
    pub fn preview(&self) -> String {
        let mut out = String::new();
        for (idx, (value, code)) in self.mapping.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(value);
            out.push('=');
            out.push_str(&code.to_string());
        }
        out
    }
}

/// Replace the frame's last column with its integer-coded form.
///
/// The column must hold a single comparable type (text or numeric); any
/// other dtype is fatal. The frame is mutated in place and the applied
/// mapping is returned.
pub fn encode_labels(frame: &mut DatasetFrame) -> Result<LabelEncoding> {
    let Some(column_name) = frame.label_column() else {
        bail!("dataset {} has no columns to encode", frame.name);
    };
    let column = frame
        .data
        .column(&column_name)
        .with_context(|| format!("label column {column_name}"))?;
    let height = frame.data.height();

    let (codes, mapping) = match column.dtype() {
        DataType::String => encode_text_column(column, height),
        DataType::Float64 | DataType::Float32 | DataType::Int32 | DataType::Int64 => {
            encode_numeric_column(column, height)
        }
        other => bail!(
            "label column {column_name} of dataset {} has unsupported type {other}",
            frame.name
        ),
    };

    let series = Series::new(column_name.as_str().into(), codes);
    frame
        .data
        .with_column(series)
        .with_context(|| format!("replace label column {column_name}"))?;

    let encoding = LabelEncoding {
        column: column_name,
        mapping,
    };
    debug!(
        dataset = %frame.name,
        column = %encoding.column,
        classes = encoding.class_count(),
        "label column encoded"
    );
    Ok(encoding)
}

fn encode_text_column(
    column: &polars::prelude::Column,
    height: usize,
) -> (Vec<i32>, Vec<(String, i32)>) {
    let mut values: Vec<Option<String>> = Vec::with_capacity(height);
    for idx in 0..height {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(match value {
            AnyValue::Null => None,
            other => Some(any_to_string(other)),
        });
    }

    let distinct: Vec<String> = values
        .iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let codes: Vec<i32> = values
        .iter()
        .map(|value| match value {
            None => -1,
            Some(text) => distinct
                .binary_search(text)
                .map(|pos| pos as i32)
                .unwrap_or(-1),
        })
        .collect();

    let mapping = distinct
        .into_iter()
        .enumerate()
        .map(|(code, value)| (value, code as i32))
        .collect();
    (codes, mapping)
}

fn encode_numeric_column(
    column: &polars::prelude::Column,
    height: usize,
) -> (Vec<i32>, Vec<(String, i32)>) {
    let values: Vec<Option<f64>> = (0..height)
        .map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect();

    let mut distinct: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|value| !value.is_nan())
        .collect();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();

    let codes: Vec<i32> = values
        .iter()
        .map(|value| match value {
            Some(v) if !v.is_nan() => distinct
                .binary_search_by(|probe| probe.total_cmp(v))
                .map(|pos| pos as i32)
                .unwrap_or(-1),
            _ => -1,
        })
        .collect();

    let mapping = distinct
        .into_iter()
        .enumerate()
        .map(|(code, value)| (format_numeric(value), code as i32))
        .collect();
    (codes, mapping)
}
