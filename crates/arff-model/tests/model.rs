use arff_model::{ArffHeader, Attribute, AttributeType, split_declaration};

#[test]
fn header_reports_names_in_declaration_order() {
    let header = ArffHeader {
        relation: "weather".to_string(),
        attributes: vec![
            Attribute::new("outlook", AttributeType::String),
            Attribute::new("temperature", AttributeType::Numeric),
            Attribute::new(
                "play",
                AttributeType::Nominal(vec!["yes".to_string(), "no".to_string()]),
            ),
        ],
    };
    assert_eq!(header.width(), 3);
    assert_eq!(header.column_names(), vec!["outlook", "temperature", "play"]);
}

#[test]
fn declaration_tokenizer_feeds_type_parser() {
    let decl = split_declaration("@attribute humidity  {low, high}").unwrap();
    let ty = AttributeType::parse(decl.spec).unwrap();
    assert_eq!(
        ty,
        AttributeType::Nominal(vec!["low".to_string(), "high".to_string()])
    );
}

#[test]
fn attribute_round_trips_through_serde() {
    let attribute = Attribute::new(
        "class",
        AttributeType::Nominal(vec!["cat".to_string(), "dog".to_string()]),
    );
    let json = serde_json::to_string(&attribute).unwrap();
    let back: Attribute = serde_json::from_str(&json).unwrap();
    assert_eq!(back, attribute);
}
