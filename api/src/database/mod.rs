/// Default database URL for local development
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./cars.db?mode=rwc";

pub mod cars;
pub mod core;
pub mod seed;
pub mod types;

pub use cars::CarCatalog;
pub use seed::{random_car, DEFAULT_SEED_COUNT};
pub use types::{CarRecord, Database, NewCar};

#[cfg(test)]
pub mod test_helpers;
