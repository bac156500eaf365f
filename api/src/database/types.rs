use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: SqlitePool,
}

/// A row of the `cars` catalog
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct CarRecord {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub engine: String,
    pub fuel_type: String,
    pub color: String,
    pub mileage: i64,
    pub doors: i64,
    pub transmission: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Car data for insertion; the id is assigned by the database
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub engine: String,
    pub fuel_type: String,
    pub color: String,
    pub mileage: i64,
    pub doors: i64,
    pub transmission: String,
    pub price: f64,
    pub description: Option<String>,
}
