/// Shared test helpers for database tests
use super::{Database, NewCar};
use sqlx::sqlite::SqlitePoolOptions;

/// Set up an in-memory test database with all migrations applied.
/// A single long-lived connection keeps the in-memory database alive for the pool's lifetime.
pub async fn setup_test_db() -> Database {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite database");

    Database::from_pool(pool)
        .await
        .expect("Failed to run migrations")
}

/// A Ford Fiesta; override fields with struct update syntax
pub fn make_car() -> NewCar {
    NewCar {
        brand: "Ford".to_string(),
        model: "Fiesta".to_string(),
        year: 2018,
        engine: "1.6".to_string(),
        fuel_type: "Gasoline".to_string(),
        color: "Blue".to_string(),
        mileage: 30000,
        doors: 4,
        transmission: "Manual".to_string(),
        price: 35000.0,
        description: Some("Compact car.".to_string()),
    }
}

pub async fn insert_cars(db: &Database, cars: &[NewCar]) {
    for car in cars {
        db.insert_car(car).await.expect("Failed to insert test car");
    }
}
