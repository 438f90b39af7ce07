//! End-to-end tests for the preparation pipeline.

use std::fs;
use std::path::Path;

use polars::prelude::{AnyValue, DataType, ParquetReader, SerReader};
use tempfile::TempDir;

use arff_cli::cli::{CompressionArg, RunArgs};
use arff_cli::commands::run_prepare;
use arff_cli::pipeline::dataset_name;

fn write_inputs(dir: &Path) {
    fs::write(
        dir.join("pets.arff"),
        "@relation pets\n\
         @attribute weight numeric\n\
         @attribute weight numeric\n\
         @attribute species {cat, dog, bird}\n\
         @data\n\
         4.2,4.0,cat\n\
         12.5,12.0,dog\n\
         0.3,?,bird\n\
         3.9,3.5,cat\n",
    )
    .unwrap();
    fs::write(
        dir.join("scores.arff"),
        "@relation scores\n\
         @attribute points numeric\n\
         @attribute grade numeric\n\
         @data\n\
         1,10\n\
         2,5\n\
         3,10\n\
         4,5\n\
         5,8\n",
    )
    .unwrap();
}

fn run_args(input_dir: &Path) -> RunArgs {
    RunArgs {
        input_dir: input_dir.to_path_buf(),
        staging_dir: None,
        output_dir: None,
        compression: CompressionArg::Snappy,
        dry_run: false,
    }
}

#[test]
fn full_run_stages_encodes_and_writes_parquet() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());

    let result = run_prepare(&run_args(dir.path())).unwrap();

    assert_eq!(result.files.len(), 2);
    assert_eq!(result.staging_dir, dir.path().join("pre-processed"));
    assert_eq!(result.output_dir, dir.path().join("processed"));

    // Files are processed in filename order.
    let pets = &result.files[0];
    assert_eq!(pets.name, "pets");
    assert_eq!(pets.rows, 4);
    assert_eq!(pets.columns, 3);
    assert_eq!(pets.renamed, 1);
    assert_eq!(pets.classes, 3);
    insta::assert_snapshot!(pets.label_mapping, @"bird=0, cat=1, dog=2");

    let scores = &result.files[1];
    assert_eq!(scores.name, "scores");
    assert_eq!(scores.renamed, 0);
    assert_eq!(scores.classes, 3);
    insta::assert_snapshot!(scores.label_mapping, @"5=0, 8=1, 10=2");

    // Staged copy disambiguated the duplicate declaration.
    let staged = fs::read_to_string(result.staging_dir.join("pets.arff")).unwrap();
    assert!(staged.contains("@attribute weight_2 numeric"));

    // Parquet output re-reads with the encoded label column.
    let file = fs::File::open(result.output_dir.join("scores.parquet")).unwrap();
    let df = ParquetReader::new(file).finish().unwrap();
    assert_eq!(df.shape(), (5, 2));
    let grade = df.column("grade").unwrap();
    assert_eq!(grade.dtype(), &DataType::Int32);
    let codes: Vec<i32> = (0..5)
        .map(|idx| match grade.get(idx).unwrap() {
            AnyValue::Int32(v) => v,
            other => panic!("unexpected value {other:?}"),
        })
        .collect();
    assert_eq!(codes, vec![2, 0, 2, 0, 1]);
}

#[test]
fn dry_run_stages_but_writes_no_parquet() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());

    let mut args = run_args(dir.path());
    args.dry_run = true;
    let result = run_prepare(&args).unwrap();

    assert!(result.files.iter().all(|file| file.parquet.is_none()));
    assert!(result.staging_dir.join("pets.arff").is_file());
    assert!(!result.output_dir.exists());
}

#[test]
fn first_failing_file_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    // Sorts before the valid files and fails to parse.
    fs::write(dir.path().join("broken.arff"), "@relation broken\nno data\n").unwrap();
    write_inputs(dir.path());

    let error = run_prepare(&run_args(dir.path())).unwrap_err();
    assert!(format!("{error:#}").contains("broken.arff"));

    // The run stopped before any Parquet output was written.
    assert!(!dir.path().join("processed").exists());
}

#[test]
fn dataset_name_is_the_file_stem() {
    assert_eq!(dataset_name(Path::new("/data/in/iris.arff")), "iris");
    assert_eq!(dataset_name(Path::new("vote.ARFF")), "vote");
}
