/// Filter and predicate types for car search

use serde::{Deserialize, Serialize};

/// Structured search intent extracted from a free-text query.
///
/// Every field is optional; an absent field imposes no constraint. Bounds are
/// inclusive and applied independently, so `min_year > max_year` is passed
/// through as-is and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub min_year: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub max_year: Option<i64>,
    pub fuel_type: Option<String>,
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient::float")]
    pub min_price: Option<f64>,
    #[serde(deserialize_with = "lenient::float")]
    pub max_price: Option<f64>,
    pub transmission: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub min_doors: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub max_doors: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub min_mileage: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub max_mileage: Option<i64>,
}

impl FilterRequest {
    /// Builds a request from a decoded JSON object.
    /// Unknown keys are ignored and missing or null keys stay absent. Numeric
    /// fields also take numeric strings, and integer fields take integral
    /// floats such as `2015.0`. Anything else of the wrong type fails.
    pub fn from_json_map(
        map: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(map))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Number decoding that tolerates the shapes models actually emit
mod lenient {
    use serde::{de, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => as_integer(&value)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("expected an integer, got {}", value))),
        }
    }

    pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => as_float(&value)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("expected a number, got {}", value))),
        }
    }

    fn as_integer(value: &Value) -> Option<i64> {
        if let Some(n) = value.as_i64() {
            return Some(n);
        }
        let n = match value {
            Value::String(s) => {
                let s = s.trim();
                if let Ok(n) = s.parse::<i64>() {
                    return Some(n);
                }
                s.parse::<f64>().ok()?
            }
            other => other.as_f64()?,
        };
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
        (n.is_finite() && n.fract() == 0.0 && in_range).then_some(n as i64)
    }

    fn as_float(value: &Value) -> Option<f64> {
        let n = match value {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }
}

/// Catalog attributes a predicate can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Brand,
    Model,
    Year,
    FuelType,
    Color,
    Price,
    Transmission,
    Doors,
    Mileage,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Brand => "brand",
            Column::Model => "model",
            Column::Year => "year",
            Column::FuelType => "fuel_type",
            Column::Color => "color",
            Column::Price => "price",
            Column::Transmission => "transmission",
            Column::Doors => "doors",
            Column::Mileage => "mileage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Contains, // case-insensitive substring
    AtLeast,  // >=
    AtMost,   // <=
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredicateValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// A single condition over one catalog attribute
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: Column,
    pub comparison: Comparison,
    pub value: PredicateValue,
}

impl Predicate {
    pub fn new(column: Column, comparison: Comparison, value: PredicateValue) -> Self {
        Self {
            column,
            comparison,
            value,
        }
    }
}
