/// Grams in one kilogram.
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Magnitude assumed when the leading token of a unit string is not a number.
pub const DEFAULT_MAGNITUDE: f64 = 1.0;

/// Unit size returned when the unit token is missing or unrecognised.
pub const FALLBACK_GRAMS_PER_UNIT: f64 = 1.0;

/// Currency marker stripped from catalog prices.
pub const CURRENCY_MARKER: &str = "$";

/// Unit tokens scaled by 1000 (substring match on the lowercased token).
pub const KILO_TOKENS: &[&str] = &["kg"];

/// Unit tokens taken as grams. Milliliters count 1:1 as grams.
pub const GRAM_TOKENS: &[&str] = &["gr", "g", "ml"];
