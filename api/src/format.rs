//! Plain-text rendering of search results.

use crate::database::CarRecord;

pub const NO_CARS_FOUND_MESSAGE: &str = "No cars found.";

pub const RESULTS_HEADER: &str =
    "Brand Model | Year | Engine | Fuel Type | Color | Mileage | Doors | Transmission | Price | Description";

pub fn format_car(car: &CarRecord) -> String {
    format!(
        "{} {} | {} | {} | {} | {} | {} km | {} doors | {} | ${} | {}",
        car.brand,
        car.model,
        car.year,
        car.engine,
        car.fuel_type,
        car.color,
        group_thousands(&car.mileage.to_string()),
        car.doors,
        car.transmission,
        format_price(car.price),
        car.description.as_deref().unwrap_or("")
    )
}

/// Header line plus one line per car, or the fixed "no cars" message
pub fn format_cars(cars: &[CarRecord]) -> String {
    if cars.is_empty() {
        return NO_CARS_FOUND_MESSAGE.to_string();
    }
    let mut lines = Vec::with_capacity(cars.len() + 1);
    lines.push(RESULTS_HEADER.to_string());
    lines.extend(cars.iter().map(format_car));
    lines.join("\n")
}

/// `35000.0` -> `35,000.00`
fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price);
    match fixed.split_once('.') {
        Some((whole, cents)) => format!("{}.{}", group_thousands(whole), cents),
        None => group_thousands(&fixed),
    }
}

/// Inserts `,` every three digits of an integer string, keeping a leading sign
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
