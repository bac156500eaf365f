use super::types::{CarRecord, Database, NewCar};
use crate::search::{build_sql, Predicate, SqlValue};
use anyhow::{Context, Result};
use async_trait::async_trait;

const CAR_COLUMNS: &str = "id, brand, model, year, engine, fuel_type, color, mileage, doors, transmission, price, description";

/// Read access to the car catalog used by the search service.
#[async_trait]
pub trait CarCatalog: Send + Sync {
    /// Cars satisfying every predicate, cheapest first, at most `limit` rows.
    async fn find_cars(&self, predicates: &[Predicate], limit: i64) -> Result<Vec<CarRecord>>;
}

#[async_trait]
impl CarCatalog for Database {
    async fn find_cars(&self, predicates: &[Predicate], limit: i64) -> Result<Vec<CarRecord>> {
        let (where_clause, bind_values) = build_sql(predicates);

        let mut query = format!("SELECT {} FROM cars", CAR_COLUMNS);
        if !where_clause.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&where_clause);
        }
        query.push_str(" ORDER BY price ASC LIMIT ?");

        let mut query_builder = sqlx::query_as::<_, CarRecord>(&query);
        for value in bind_values {
            query_builder = match value {
                SqlValue::String(s) => query_builder.bind(s),
                SqlValue::Integer(i) => query_builder.bind(i),
                SqlValue::Float(f) => query_builder.bind(f),
            };
        }

        // One pooled connection per search, returned to the pool when dropped
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire database connection")?;

        let cars = query_builder
            .bind(limit)
            .fetch_all(&mut *conn)
            .await
            .context("Failed to query cars")?;

        tracing::debug!("Catalog query returned {} cars", cars.len());
        Ok(cars)
    }
}

impl Database {
    pub async fn insert_car(&self, car: &NewCar) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO cars (brand, model, year, engine, fuel_type, color, mileage, doors, transmission, price, description) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.engine)
        .bind(&car.fuel_type)
        .bind(&car.color)
        .bind(car.mileage)
        .bind(car.doors)
        .bind(&car.transmission)
        .bind(car.price)
        .bind(&car.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Replaces the whole catalog in one transaction
    pub async fn replace_cars(&self, cars: &[NewCar]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cars").execute(&mut *tx).await?;

        for car in cars {
            sqlx::query(
                "INSERT INTO cars (brand, model, year, engine, fuel_type, color, mileage, doors, transmission, price, description) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&car.brand)
            .bind(&car.model)
            .bind(car.year)
            .bind(&car.engine)
            .bind(&car.fuel_type)
            .bind(&car.color)
            .bind(car.mileage)
            .bind(car.doors)
            .bind(&car.transmission)
            .bind(car.price)
            .bind(&car.description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn clear_cars(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM cars").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn count_cars(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
