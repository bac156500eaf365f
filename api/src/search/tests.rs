use super::*;
use serde_json::json;

fn all_fields() -> FilterRequest {
    FilterRequest {
        brand: Some("Ford".to_string()),
        model: Some("Fiesta".to_string()),
        min_year: Some(2015),
        max_year: Some(2020),
        fuel_type: Some("Gasoline".to_string()),
        color: Some("Blue".to_string()),
        min_price: Some(20000.0),
        max_price: Some(40000.0),
        transmission: Some("Manual".to_string()),
        min_doors: Some(2),
        max_doors: Some(5),
        min_mileage: Some(10000),
        max_mileage: Some(50000),
    }
}

fn from_json(value: serde_json::Value) -> Result<FilterRequest, serde_json::Error> {
    match value {
        serde_json::Value::Object(map) => FilterRequest::from_json_map(map),
        other => panic!("expected object, got {}", other),
    }
}

#[test]
fn test_empty_request_builds_no_predicates() {
    let request = FilterRequest::default();
    assert!(request.is_empty());
    assert!(build_predicates(&request).is_empty());
}

#[test]
fn test_single_text_field() {
    let request = FilterRequest {
        color: Some("red".to_string()),
        ..Default::default()
    };
    let predicates = build_predicates(&request);
    assert_eq!(
        predicates,
        vec![Predicate::new(
            Column::Color,
            Comparison::Contains,
            PredicateValue::Text("red".to_string())
        )]
    );
}

#[test]
fn test_empty_text_field_is_skipped() {
    let request = FilterRequest {
        brand: Some(String::new()),
        ..Default::default()
    };
    assert!(build_predicates(&request).is_empty());
}

#[test]
fn test_both_bounds_of_one_dimension() {
    let request = FilterRequest {
        min_price: Some(10000.0),
        max_price: Some(20000.0),
        ..Default::default()
    };
    let predicates = build_predicates(&request);
    assert_eq!(predicates.len(), 2);
    assert_eq!(predicates[0].comparison, Comparison::AtLeast);
    assert_eq!(predicates[0].value, PredicateValue::Float(10000.0));
    assert_eq!(predicates[1].comparison, Comparison::AtMost);
    assert_eq!(predicates[1].value, PredicateValue::Float(20000.0));
}

#[test]
fn test_zero_bound_is_a_constraint() {
    let request = FilterRequest {
        min_mileage: Some(0),
        ..Default::default()
    };
    let predicates = build_predicates(&request);
    assert_eq!(predicates.len(), 1);
    assert_eq!(predicates[0].column, Column::Mileage);
    assert_eq!(predicates[0].value, PredicateValue::Integer(0));
}

#[test]
fn test_inverted_bounds_pass_through() {
    let request = FilterRequest {
        min_year: Some(2022),
        max_year: Some(2010),
        ..Default::default()
    };
    assert_eq!(build_predicates(&request).len(), 2);
}

#[test]
fn test_partial_fields() {
    let request = FilterRequest {
        brand: Some("Ford".to_string()),
        min_price: Some(10000.0),
        ..Default::default()
    };
    assert_eq!(build_predicates(&request).len(), 2);
}

#[test]
fn test_all_fields_in_fixed_order() {
    let predicates = build_predicates(&all_fields());
    assert_eq!(predicates.len(), 13);

    let order: Vec<_> = predicates
        .iter()
        .map(|p| (p.column, p.comparison))
        .collect();
    assert_eq!(
        order,
        vec![
            (Column::Brand, Comparison::Contains),
            (Column::Model, Comparison::Contains),
            (Column::Year, Comparison::AtLeast),
            (Column::Year, Comparison::AtMost),
            (Column::FuelType, Comparison::Contains),
            (Column::Color, Comparison::Contains),
            (Column::Price, Comparison::AtLeast),
            (Column::Price, Comparison::AtMost),
            (Column::Transmission, Comparison::Contains),
            (Column::Doors, Comparison::AtLeast),
            (Column::Doors, Comparison::AtMost),
            (Column::Mileage, Comparison::AtLeast),
            (Column::Mileage, Comparison::AtMost),
        ]
    );
}

#[test]
fn test_rule_table_covers_every_field_once() {
    let fields: Vec<_> = FIELD_RULES.iter().map(|r| r.field).collect();
    assert_eq!(
        fields,
        vec![
            "brand",
            "model",
            "min_year",
            "max_year",
            "fuel_type",
            "color",
            "min_price",
            "max_price",
            "transmission",
            "min_doors",
            "max_doors",
            "min_mileage",
            "max_mileage",
        ]
    );
}

#[test]
fn test_build_sql_empty() {
    let (sql, values) = build_sql(&[]);
    assert_eq!(sql, "");
    assert!(values.is_empty());
}

#[test]
fn test_build_sql_contains_and_bounds() {
    let request = FilterRequest {
        brand: Some("Ford".to_string()),
        min_year: Some(2015),
        max_price: Some(40000.0),
        ..Default::default()
    };
    let (sql, values) = build_sql(&build_predicates(&request));
    assert_eq!(
        sql,
        "LOWER(brand) LIKE LOWER(?) ESCAPE '\\' AND year >= ? AND price <= ?"
    );
    assert_eq!(
        values,
        vec![
            SqlValue::String("%Ford%".to_string()),
            SqlValue::Integer(2015),
            SqlValue::Float(40000.0),
        ]
    );
}

#[test]
fn test_build_sql_escapes_like_wildcards() {
    let request = FilterRequest {
        model: Some("100%_x\\".to_string()),
        ..Default::default()
    };
    let (_, values) = build_sql(&build_predicates(&request));
    assert_eq!(
        values,
        vec![SqlValue::String("%100\\%\\_x\\\\%".to_string())]
    );
}

#[test]
fn test_from_json_map_ignores_unknown_keys() {
    let request = from_json(json!({"brand": "Ford", "sunroof": true})).unwrap();
    assert_eq!(request.brand.as_deref(), Some("Ford"));
    assert_eq!(
        request,
        FilterRequest {
            brand: Some("Ford".to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn test_from_json_map_nulls_are_absent() {
    let request = from_json(json!({
        "brand": null,
        "model": null,
        "min_year": null,
        "max_price": null
    }))
    .unwrap();
    assert!(request.is_empty());
}

#[test]
fn test_from_json_map_empty_is_all_absent() {
    let request = FilterRequest::from_json_map(serde_json::Map::new()).unwrap();
    assert!(request.is_empty());
}

#[test]
fn test_from_json_map_float_accepts_integer() {
    let request = from_json(json!({"max_price": 50000})).unwrap();
    assert_eq!(request.max_price, Some(50000.0));
}

#[test]
fn test_from_json_map_type_mismatch_fails() {
    assert!(from_json(json!({"min_year": "twenty"})).is_err());
    assert!(from_json(json!({"brand": 42})).is_err());
    assert!(from_json(json!({"min_doors": 2.5})).is_err());
}

#[test]
fn test_from_json_map_integer_accepts_integral_float() {
    let request = from_json(json!({"min_year": 2015.0, "max_doors": 4.0})).unwrap();
    assert_eq!(request.min_year, Some(2015));
    assert_eq!(request.max_doors, Some(4));
}

#[test]
fn test_from_json_map_numeric_strings() {
    let request = from_json(json!({
        "max_price": "50000",
        "min_price": " 12500.5 ",
        "min_year": "2018",
        "max_mileage": "60000.0"
    }))
    .unwrap();
    assert_eq!(request.max_price, Some(50000.0));
    assert_eq!(request.min_price, Some(12500.5));
    assert_eq!(request.min_year, Some(2018));
    assert_eq!(request.max_mileage, Some(60000));
}

#[test]
fn test_from_json_map_rejects_non_numeric_values() {
    assert!(from_json(json!({"min_year": "2018.5"})).is_err());
    assert!(from_json(json!({"max_price": "cheap"})).is_err());
    assert!(from_json(json!({"max_price": "inf"})).is_err());
    assert!(from_json(json!({"max_price": true})).is_err());
    assert!(from_json(json!({"min_mileage": [1000]})).is_err());
    assert!(from_json(json!({"max_mileage": 1e30})).is_err());
}
