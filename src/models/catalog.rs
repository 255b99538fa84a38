use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A raw catalog entry: the purchasable unit and its price, both as free text.
///
/// Examples: `{"unit": "1 kg", "price": "$2000"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "unidad")]
    pub unit: String,

    #[serde(alias = "precio")]
    pub price: String,
}

impl CatalogEntry {
    pub fn new(unit: &str, price: &str) -> Self {
        Self {
            unit: unit.to_string(),
            price: price.to_string(),
        }
    }
}

/// Catalog entry with its unit size and price parsed into numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedUnit {
    /// Gram-equivalent size of one purchasable unit.
    pub grams_per_unit: f64,

    /// Price of one purchasable unit.
    pub unit_price: f64,
}

/// Read-only reference data keyed by exact food name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Look up an entry. Matching is exact and case-sensitive.
    pub fn get(&self, food: &str) -> Option<&CatalogEntry> {
        self.entries.get(food)
    }

    /// All food names in the catalog, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
