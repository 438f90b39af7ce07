//! DataFrame construction from parsed ARFF tables.
//!
//! One column per declared attribute, in declaration order. Numeric
//! attributes become `Float64` columns; nominal, string, and date
//! attributes become plain `String` columns. Missing cells become nulls.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use arff_model::{ArffHeader, AttributeType};

use crate::arff_table::{ArffTable, read_arff_table};

/// Build a typed `DataFrame` from a raw table.
pub fn build_dataset_frame(table: &ArffTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.width());
    for (col_idx, attribute) in table.header.attributes.iter().enumerate() {
        match attribute.ty {
            AttributeType::Numeric => {
                let mut values: Vec<Option<f64>> = Vec::with_capacity(table.height());
                for (row_idx, row) in table.rows.iter().enumerate() {
                    match row[col_idx].as_deref() {
                        None => values.push(None),
                        Some(raw) => {
                            let parsed = raw.trim().parse::<f64>().with_context(|| {
                                format!(
                                    "data row {}, attribute {}: invalid numeric value {raw:?}",
                                    row_idx + 1,
                                    attribute.name
                                )
                            })?;
                            values.push(Some(parsed));
                        }
                    }
                }
                columns.push(Series::new(attribute.name.as_str().into(), values).into_column());
            }
            AttributeType::Nominal(_) | AttributeType::String | AttributeType::Date(_) => {
                let values: Vec<Option<String>> = table
                    .rows
                    .iter()
                    .map(|row| row[col_idx].clone())
                    .collect();
                columns.push(Series::new(attribute.name.as_str().into(), values).into_column());
            }
        }
    }
    DataFrame::new(columns).context("build dataframe from arff table")
}

/// Parse an ARFF file and build its `DataFrame` in one call.
pub fn load_arff(path: &Path) -> Result<(ArffHeader, DataFrame)> {
    let table = read_arff_table(path)?;
    let data = build_dataset_frame(&table)
        .with_context(|| format!("build frame for {}", path.display()))?;
    Ok((table.header, data))
}
