//! File-driven tests for duplicate attribute repair.

use std::fs;

use proptest::prelude::{ProptestConfig, prop, prop_assert_eq, proptest};
use tempfile::TempDir;

use arff_ingest::{dedupe_arff_file, rename_duplicate_attributes};
use arff_model::{is_attribute_line, split_declaration};

#[test]
fn corrected_copy_lands_in_staging_under_same_basename() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dupes.arff");
    fs::write(
        &input,
        "@relation dupes\n\
         @attribute foo numeric\n\
         @attribute bar {a,b}\n\
         @attribute foo string\n\
         @data\n\
         1,a,x\n",
    )
    .unwrap();
    let staging = dir.path().join("pre-processed");

    let staged = dedupe_arff_file(&input, &staging).unwrap();

    assert_eq!(staged.path, staging.join("dupes.arff"));
    assert_eq!(staged.renamed.len(), 1);
    assert_eq!(staged.renamed[0].original, "foo");
    assert_eq!(staged.renamed[0].replacement, "foo_2");

    let text = fs::read_to_string(&staged.path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    insta::assert_snapshot!(lines[1], @"@attribute foo numeric");
    insta::assert_snapshot!(lines[2], @"@attribute bar {a,b}");
    insta::assert_snapshot!(lines[3], @"@attribute foo_2 string");
    // Pass-through lines survive byte-for-byte.
    assert_eq!(lines[0], "@relation dupes");
    assert_eq!(lines[5], "1,a,x");
}

#[test]
fn file_that_is_not_utf8_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("binary.arff");
    fs::write(&input, [0x40, 0xff, 0xfe, 0x0a]).unwrap();

    let error = dedupe_arff_file(&input, &dir.path().join("staged")).unwrap_err();
    assert!(error.to_string().contains("not valid UTF-8"));
}

fn declared_names(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| is_attribute_line(line))
        .filter_map(|line| split_declaration(line).map(|decl| decl.name.to_string()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Names are drawn from a digit-free alphabet so no input can collide
    // with a synthetic `_N` rename; under that restriction the output
    // names must be unique and the line count preserved.
    #[test]
    fn output_names_are_unique_and_order_is_preserved(
        names in prop::collection::vec("[a-z]{1,3}", 1..24),
        with_header in prop::bool::ANY,
    ) {
        let mut input = String::new();
        if with_header {
            input.push_str("% generated\n@relation generated\n");
        }
        for name in &names {
            input.push_str(&format!("@attribute {name} numeric\n"));
        }
        input.push_str("@data\n");

        let outcome = rename_duplicate_attributes(&input);

        prop_assert_eq!(outcome.text.lines().count(), input.lines().count());

        let output_names = declared_names(&outcome.text);
        prop_assert_eq!(output_names.len(), names.len());
        let mut sorted = output_names.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), output_names.len());

        // First occurrences keep their original names, in position.
        let mut seen = std::collections::BTreeSet::new();
        for (idx, name) in names.iter().enumerate() {
            if seen.insert(name.clone()) {
                prop_assert_eq!(&output_names[idx], name);
            }
        }
    }

    #[test]
    fn scanning_is_idempotent_when_no_duplicates_exist(
        names in prop::collection::vec("[a-z]{2,4}", 1..12),
    ) {
        let mut unique: Vec<String> = names;
        unique.sort();
        unique.dedup();
        let mut input = String::new();
        for name in &unique {
            input.push_str(&format!("@attribute {name} numeric\n"));
        }
        let once = rename_duplicate_attributes(&input);
        prop_assert_eq!(&once.text, &input);
        prop_assert_eq!(once.renamed.len(), 0);
    }
}
