use polars::prelude::{
    Column, DataFrame, DataType, IntoColumn, NamedFrom, ParquetReader, SerReader, Series,
};
use tempfile::TempDir;

use arff_report::{ParquetOutputOptions, write_parquet_outputs};
use arff_transform::DatasetFrame;

fn sample_frame(name: &str) -> DatasetFrame {
    let columns: Vec<Column> = vec![
        Series::new("width".into(), vec![1.5f64, 2.0, 3.25]).into_column(),
        Series::new("class".into(), vec![0i32, 1, 0]).into_column(),
    ];
    DatasetFrame::new(name, DataFrame::new(columns).unwrap())
}

#[test]
fn writes_one_file_per_frame_with_basename_preserved() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("processed");
    let mut frames = vec![sample_frame("iris"), sample_frame("vote")];

    let written =
        write_parquet_outputs(&output_dir, &mut frames, &ParquetOutputOptions::default()).unwrap();

    assert_eq!(
        written,
        vec![
            output_dir.join("iris.parquet"),
            output_dir.join("vote.parquet"),
        ]
    );
    for path in &written {
        assert!(path.is_file());
    }
}

#[test]
fn written_file_round_trips_with_same_shape_and_types() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().to_path_buf();
    let mut frames = vec![sample_frame("round-trip")];

    let written =
        write_parquet_outputs(&output_dir, &mut frames, &ParquetOutputOptions::default()).unwrap();

    let file = std::fs::File::open(&written[0]).unwrap();
    let df = ParquetReader::new(file).finish().unwrap();
    assert_eq!(df.shape(), (3, 2));
    assert_eq!(df.column("class").unwrap().dtype(), &DataType::Int32);
}
