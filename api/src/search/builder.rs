use super::types::{Column, Comparison, FilterRequest, Predicate, PredicateValue};

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Maps one `FilterRequest` field to the predicate it produces
pub struct FieldRule {
    pub field: &'static str,
    pub column: Column,
    pub comparison: Comparison,
    extract: fn(&FilterRequest) -> Option<PredicateValue>,
}

impl FieldRule {
    pub fn apply(&self, request: &FilterRequest) -> Option<Predicate> {
        (self.extract)(request).map(|value| Predicate::new(self.column, self.comparison, value))
    }
}

fn text(value: &Option<String>) -> Option<PredicateValue> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| PredicateValue::Text(s.to_string()))
}

fn int(value: Option<i64>) -> Option<PredicateValue> {
    value.map(PredicateValue::Integer)
}

fn float(value: Option<f64>) -> Option<PredicateValue> {
    value.map(PredicateValue::Float)
}

/// Predicate rules in emission order. The order is part of the contract.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: "brand",
        column: Column::Brand,
        comparison: Comparison::Contains,
        extract: |r| text(&r.brand),
    },
    FieldRule {
        field: "model",
        column: Column::Model,
        comparison: Comparison::Contains,
        extract: |r| text(&r.model),
    },
    FieldRule {
        field: "min_year",
        column: Column::Year,
        comparison: Comparison::AtLeast,
        extract: |r| int(r.min_year),
    },
    FieldRule {
        field: "max_year",
        column: Column::Year,
        comparison: Comparison::AtMost,
        extract: |r| int(r.max_year),
    },
    FieldRule {
        field: "fuel_type",
        column: Column::FuelType,
        comparison: Comparison::Contains,
        extract: |r| text(&r.fuel_type),
    },
    FieldRule {
        field: "color",
        column: Column::Color,
        comparison: Comparison::Contains,
        extract: |r| text(&r.color),
    },
    FieldRule {
        field: "min_price",
        column: Column::Price,
        comparison: Comparison::AtLeast,
        extract: |r| float(r.min_price),
    },
    FieldRule {
        field: "max_price",
        column: Column::Price,
        comparison: Comparison::AtMost,
        extract: |r| float(r.max_price),
    },
    FieldRule {
        field: "transmission",
        column: Column::Transmission,
        comparison: Comparison::Contains,
        extract: |r| text(&r.transmission),
    },
    FieldRule {
        field: "min_doors",
        column: Column::Doors,
        comparison: Comparison::AtLeast,
        extract: |r| int(r.min_doors),
    },
    FieldRule {
        field: "max_doors",
        column: Column::Doors,
        comparison: Comparison::AtMost,
        extract: |r| int(r.max_doors),
    },
    FieldRule {
        field: "min_mileage",
        column: Column::Mileage,
        comparison: Comparison::AtLeast,
        extract: |r| int(r.min_mileage),
    },
    FieldRule {
        field: "max_mileage",
        column: Column::Mileage,
        comparison: Comparison::AtMost,
        extract: |r| int(r.max_mileage),
    },
];

/// Translates a filter request into predicates, following `FIELD_RULES` order
pub fn build_predicates(request: &FilterRequest) -> Vec<Predicate> {
    FIELD_RULES
        .iter()
        .filter_map(|rule| rule.apply(request))
        .collect()
}

/// Builds an SQL WHERE clause and bind values from predicates.
/// Uses SQLite positional placeholders (`?`); clauses are joined with AND.
pub fn build_sql(predicates: &[Predicate]) -> (String, Vec<SqlValue>) {
    let mut sql_parts = Vec::with_capacity(predicates.len());
    let mut bind_values = Vec::with_capacity(predicates.len());

    for predicate in predicates {
        let column = predicate.column.as_str();
        let (sql, value) = match predicate.comparison {
            Comparison::Contains => (
                format!("LOWER({}) LIKE LOWER(?) ESCAPE '\\'", column),
                SqlValue::String(format!("%{}%", escape_like(&render_value(&predicate.value)))),
            ),
            Comparison::AtLeast => (format!("{} >= ?", column), to_sql_value(&predicate.value)),
            Comparison::AtMost => (format!("{} <= ?", column), to_sql_value(&predicate.value)),
        };
        sql_parts.push(sql);
        bind_values.push(value);
    }

    (sql_parts.join(" AND "), bind_values)
}

/// Escapes LIKE wildcards so the user's text matches literally
fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn render_value(value: &PredicateValue) -> String {
    match value {
        PredicateValue::Text(s) => s.clone(),
        PredicateValue::Integer(i) => i.to_string(),
        PredicateValue::Float(f) => f.to_string(),
    }
}

fn to_sql_value(value: &PredicateValue) -> SqlValue {
    match value {
        PredicateValue::Text(s) => SqlValue::String(s.clone()),
        PredicateValue::Integer(i) => SqlValue::Integer(*i),
        PredicateValue::Float(f) => SqlValue::Float(*f),
    }
}
