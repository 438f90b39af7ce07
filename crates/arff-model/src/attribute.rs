//! Attribute declarations and their type specifications.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// The type specification of an ARFF attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    /// `numeric`, `real`, or `integer`. Loaded as a float column.
    Numeric,
    /// `{value, value, ...}`. Loaded as a text column.
    Nominal(Vec<String>),
    /// `string`. Loaded as a text column.
    String,
    /// `date` with an optional format pattern. Loaded as a text column;
    /// no datetime semantics are applied.
    Date(Option<String>),
}

impl AttributeType {
    /// Parse a type specification token as it appears after the attribute
    /// name, e.g. `numeric`, `{a, b}`, `string`, `date yyyy-MM-dd`.
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(SchemaError::MissingTypeSpec);
        }
        if let Some(body) = trimmed.strip_prefix('{') {
            let body = body.strip_suffix('}').unwrap_or(body);
            let values: Vec<String> = body
                .split(',')
                .map(|value| unquote(value.trim()).to_string())
                .filter(|value| !value.is_empty())
                .collect();
            if values.is_empty() {
                return Err(SchemaError::EmptyNominal);
            }
            return Ok(AttributeType::Nominal(values));
        }
        let (head, rest) = match trimmed.find(char::is_whitespace) {
            Some(idx) => (&trimmed[..idx], trimmed[idx..].trim()),
            None => (trimmed, ""),
        };
        match head.to_ascii_lowercase().as_str() {
            "numeric" | "real" | "integer" => Ok(AttributeType::Numeric),
            "string" => Ok(AttributeType::String),
            "date" => {
                let format = if rest.is_empty() {
                    None
                } else {
                    Some(unquote(rest).to_string())
                };
                Ok(AttributeType::Date(format))
            }
            _ => Err(SchemaError::UnsupportedType(trimmed.to_string())),
        }
    }

    /// True for types whose cells are loaded as text.
    pub fn is_textual(&self) -> bool {
        !matches!(self, AttributeType::Numeric)
    }
}

/// Strip one pair of surrounding single or double quotes, if present.
pub fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// A single attribute declaration: name plus parsed type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub ty: AttributeType,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: AttributeType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// The parsed header of an ARFF file: relation name and ordered attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArffHeader {
    pub relation: String,
    pub attributes: Vec<Attribute>,
}

impl ArffHeader {
    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .map(|attribute| attribute.name.as_str())
            .collect()
    }

    /// Number of declared attributes.
    pub fn width(&self) -> usize {
        self.attributes.len()
    }
}
