//! Random catalog data for local development and demos.

use super::types::{Database, NewCar};
use anyhow::Result;
use rand::Rng;

const BRANDS_MODELS: &[(&str, &[&str])] = &[
    ("Toyota", &["Corolla", "Camry", "Yaris", "Hilux"]),
    ("Ford", &["Fiesta", "Focus", "Ranger", "Fusion"]),
    ("Honda", &["Civic", "Fit", "HR-V", "City"]),
    ("Chevrolet", &["Onix", "Prisma", "Cruze", "S10"]),
    ("Volkswagen", &["Golf", "Polo", "Tiguan", "Jetta"]),
    ("Hyundai", &["HB20", "Creta", "Tucson", "Elantra"]),
];
const FUEL_TYPES: &[&str] = &["Gasoline", "Ethanol", "Diesel", "Flex", "Hybrid", "Electric"];
const COLORS: &[&str] = &["Black", "White", "Silver", "Red", "Blue", "Gray", "Green"];
const TRANSMISSIONS: &[&str] = &["Manual", "Automatic", "CVT"];
const ENGINES: &[&str] = &["1.0", "1.2", "1.4", "1.6", "2.0", "2.2 Turbo", "Electric"];
const DOORS: &[i64] = &[2, 4];

const DESCRIPTION_WORDS: &[&str] = &[
    "clean", "reliable", "owner", "single", "garage", "kept", "service", "history", "full",
    "new", "tires", "recently", "serviced", "low", "consumption", "spacious", "interior",
    "comfortable", "family", "city", "highway", "ready", "warranty", "remaining", "great",
    "condition", "well", "maintained", "original", "paint", "smooth", "ride",
];
const DESCRIPTION_WORD_COUNT: usize = 10;

pub const DEFAULT_SEED_COUNT: usize = 100;

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

fn random_description<R: Rng + ?Sized>(rng: &mut R) -> String {
    let words: Vec<&str> = (0..DESCRIPTION_WORD_COUNT)
        .map(|_| pick(rng, DESCRIPTION_WORDS))
        .collect();
    let sentence = words.join(" ");
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Generates one random car
pub fn random_car<R: Rng + ?Sized>(rng: &mut R) -> NewCar {
    let (brand, models) = pick(rng, BRANDS_MODELS);
    let model = pick(rng, models);
    let price: f64 = rng.random_range(5000.0..200000.0);

    NewCar {
        brand: brand.to_string(),
        model: model.to_string(),
        year: rng.random_range(2005..=2024),
        engine: pick(rng, ENGINES).to_string(),
        fuel_type: pick(rng, FUEL_TYPES).to_string(),
        color: pick(rng, COLORS).to_string(),
        mileage: rng.random_range(0..=250_000),
        doors: pick(rng, DOORS),
        transmission: pick(rng, TRANSMISSIONS).to_string(),
        price: (price * 100.0).round() / 100.0,
        description: Some(random_description(rng)),
    }
}

impl Database {
    /// Clears the catalog and fills it with `count` random cars
    pub async fn seed_random<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<()> {
        let cars: Vec<NewCar> = (0..count).map(|_| random_car(rng)).collect();
        self.replace_cars(&cars).await?;
        tracing::info!("Database populated with {} fake cars.", count);
        Ok(())
    }
}
