//! Line-level classification and tokenization of ARFF header lines.

/// Keyword opening an attribute declaration line.
pub const ATTRIBUTE_KEYWORD: &str = "@attribute";

/// Keyword opening the relation name line.
pub const RELATION_KEYWORD: &str = "@relation";

/// Keyword separating the header from the data section.
pub const DATA_KEYWORD: &str = "@data";

/// The three-token split of an attribute declaration line.
///
/// The line is split on the first two whitespace runs only; `spec` keeps the
/// remainder verbatim, embedded whitespace included (nominal specifications
/// like `{low, high}` and date formats both contain spaces).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub keyword: &'a str,
    pub name: &'a str,
    pub spec: &'a str,
}

/// Returns true when the raw line starts with `@attribute`, case-insensitively.
///
/// Matches on the raw line start: a declaration indented with whitespace is
/// not recognized, which is the behavior data files in the wild rely on.
pub fn is_attribute_line(line: &str) -> bool {
    starts_with_keyword(line, ATTRIBUTE_KEYWORD)
}

/// Returns true when the raw line starts with `@relation`, case-insensitively.
pub fn is_relation_line(line: &str) -> bool {
    starts_with_keyword(line, RELATION_KEYWORD)
}

/// Returns true when the raw line starts with `@data`, case-insensitively.
pub fn is_data_line(line: &str) -> bool {
    starts_with_keyword(line, DATA_KEYWORD)
}

/// Returns true for `%` comment lines (leading whitespace allowed).
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with('%')
}

fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= keyword.len() && bytes[..keyword.len()].eq_ignore_ascii_case(keyword.as_bytes())
}

/// Split a declaration line into keyword, name, and type specification.
///
/// The trimmed line is split on the first two whitespace runs; everything
/// after the second run is the specification and is never split further.
/// Returns `None` when fewer than three tokens are present (a malformed
/// declaration, which callers tolerate by passing the line through).
pub fn split_declaration(line: &str) -> Option<Declaration<'_>> {
    let trimmed = line.trim();
    let after_keyword = trimmed.find(char::is_whitespace)?;
    let keyword = &trimmed[..after_keyword];
    let rest = trimmed[after_keyword..].trim_start();
    let after_name = rest.find(char::is_whitespace)?;
    let name = &rest[..after_name];
    let spec = rest[after_name..].trim_start();
    if spec.is_empty() {
        return None;
    }
    Some(Declaration {
        keyword,
        name,
        spec,
    })
}
