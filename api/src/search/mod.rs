mod builder;
mod types;

pub use builder::{build_predicates, build_sql, FieldRule, SqlValue, FIELD_RULES};
pub use types::{Column, Comparison, FilterRequest, Predicate, PredicateValue};

#[cfg(test)]
mod tests;
