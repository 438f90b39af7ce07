//! File-driven loader tests.

use std::fs;

use tempfile::TempDir;

use arff_ingest::{dedupe_arff_file, load_arff};
use polars::prelude::DataType;

#[test]
fn shape_matches_declarations_and_data_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("iris-ish.arff");
    fs::write(
        &path,
        "@relation iris-ish\n\
         @attribute sepal_length numeric\n\
         @attribute sepal_width numeric\n\
         @attribute petal_length numeric\n\
         @attribute class {setosa, versicolor}\n\
         @data\n\
         5.1,3.5,1.4,setosa\n\
         7.0,3.2,4.7,versicolor\n\
         6.4,3.2,4.5,versicolor\n",
    )
    .unwrap();

    let (header, df) = load_arff(&path).unwrap();

    // D declarations, R data rows -> D columns, R rows.
    assert_eq!(header.width(), 4);
    assert_eq!(df.shape(), (3, 4));
    assert_eq!(
        df.get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>(),
        vec!["sepal_length", "sepal_width", "petal_length", "class"]
    );
    assert_eq!(df.column("class").unwrap().dtype(), &DataType::String);
}

#[test]
fn staged_file_loads_with_disambiguated_columns() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("dupes.arff");
    fs::write(
        &raw,
        "@relation dupes\n\
         @attribute measure numeric\n\
         @attribute measure numeric\n\
         @attribute class {a,b}\n\
         @data\n\
         1,2,a\n\
         3,4,b\n",
    )
    .unwrap();

    let staged = dedupe_arff_file(&raw, &dir.path().join("staged")).unwrap();
    let (header, df) = load_arff(&staged.path).unwrap();

    assert_eq!(header.column_names(), vec!["measure", "measure_2", "class"]);
    assert_eq!(df.shape(), (2, 3));
}

#[test]
fn comments_and_blank_lines_do_not_count_as_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sparse-comments.arff");
    fs::write(
        &path,
        "% header comment\n\
         @relation r\n\
         \n\
         @attribute a numeric\n\
         @attribute class {x,y}\n\
         @data\n\
         % inline comment\n\
         1,x\n\
         \n\
         2,y\n",
    )
    .unwrap();

    let (_, df) = load_arff(&path).unwrap();
    assert_eq!(df.shape(), (2, 2));
}
