//! Duplicate attribute declaration repair.
//!
//! ARFF files exported from some tools declare the same attribute name more
//! than once, which collides once the file becomes a table with named
//! columns. This module rewrites repeated declarations with an `_N` suffix
//! (second occurrence gets `_2`) and writes the corrected copy to a staging
//! directory, leaving every other line untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use arff_model::{ATTRIBUTE_KEYWORD, is_attribute_line, split_declaration};

use crate::error::{IngestError, Result};

/// One attribute rename applied while scanning a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedAttribute {
    pub original: String,
    pub replacement: String,
}

/// Result of scanning one file's text.
#[derive(Debug, Clone)]
pub struct DedupeOutcome {
    /// The corrected file content, line order preserved.
    pub text: String,
    /// Renames applied, in the order they were encountered.
    pub renamed: Vec<RenamedAttribute>,
}

/// A corrected file written to the staging directory.
#[derive(Debug, Clone)]
pub struct DedupedFile {
    /// Path of the corrected copy (same basename as the input).
    pub path: PathBuf,
    /// Renames applied while scanning the input.
    pub renamed: Vec<RenamedAttribute>,
}

/// Rewrite repeated attribute declarations with `_N` suffixes.
///
/// Lines are scanned in order, terminators included. A declaration line is
/// split on its first two whitespace runs into keyword, name, and type
/// specification; the specification is kept verbatim. Declarations with
/// fewer than three tokens pass through unmodified, as does every
/// non-declaration line. Rebuilt declarations use the canonical lowercase
/// keyword and single spaces between tokens.
///
/// A name that already looks like an applied suffix (a literal `foo_2`
/// declared before a second `foo`) is not detected; the registry only
/// tracks names as they appear.
pub fn rename_duplicate_attributes(input: &str) -> DedupeOutcome {
    let mut seen: BTreeMap<String, u32> = BTreeMap::new();
    let mut text = String::with_capacity(input.len());
    let mut renamed = Vec::new();

    for line in input.split_inclusive('\n') {
        if !is_attribute_line(line) {
            text.push_str(line);
            continue;
        }
        let Some(decl) = split_declaration(line) else {
            text.push_str(line);
            continue;
        };
        let count = seen
            .entry(decl.name.to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);
        let name = if *count > 1 {
            let replacement = format!("{}_{}", decl.name, count);
            renamed.push(RenamedAttribute {
                original: decl.name.to_string(),
                replacement: replacement.clone(),
            });
            replacement
        } else {
            decl.name.to_string()
        };
        text.push_str(ATTRIBUTE_KEYWORD);
        text.push(' ');
        text.push_str(&name);
        text.push(' ');
        text.push_str(decl.spec);
        text.push('\n');
    }

    DedupeOutcome { text, renamed }
}

/// Read an ARFF file, repair duplicate declarations, and write the corrected
/// copy into `staging_dir` under the same basename.
pub fn dedupe_arff_file(input: &Path, staging_dir: &Path) -> Result<DedupedFile> {
    let bytes = fs::read(input).map_err(|source| IngestError::FileRead {
        path: input.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::Decode {
        path: input.to_path_buf(),
    })?;

    let outcome = rename_duplicate_attributes(&text);

    fs::create_dir_all(staging_dir).map_err(|source| IngestError::DirectoryCreate {
        path: staging_dir.to_path_buf(),
        source,
    })?;
    let file_name = input.file_name().ok_or_else(|| IngestError::NotAFile {
        path: input.to_path_buf(),
    })?;
    let staged = staging_dir.join(file_name);
    fs::write(&staged, &outcome.text).map_err(|source| IngestError::FileWrite {
        path: staged.clone(),
        source,
    })?;

    debug!(
        source_file = %input.display(),
        staged_file = %staged.display(),
        renamed = outcome.renamed.len(),
        "staged corrected file"
    );

    Ok(DedupedFile {
        path: staged,
        renamed: outcome.renamed,
    })
}
