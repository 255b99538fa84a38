use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// The seven fixed day labels a weekly input set must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Lowercase label, e.g. `"monday"`.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Expected input file name, e.g. `"monday.json"`.
    pub fn file_name(self) -> String {
        format!("{}.json", self.label())
    }

    /// Match a day file name (case-insensitive). Directory components are ignored.
    pub fn from_file_name(name: &str) -> Option<Weekday> {
        let base = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name)
            .to_lowercase();

        Weekday::ALL.into_iter().find(|day| day.file_name() == base)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One weekday's food -> grams mapping, as loaded from its file.
#[derive(Debug, Clone)]
pub struct DayDataset {
    pub day: Weekday,

    /// Name of the input this dataset came from (used in error messages).
    pub source: String,

    pub grams: BTreeMap<String, f64>,
}

/// Grams per food summed over a whole week.
///
/// Keys are the union of every food seen on any day. Iteration is sorted by
/// food name, so output order is stable regardless of input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyTotals {
    grams: BTreeMap<String, f64>,
}

impl WeeklyTotals {
    /// Add grams for a food, treating an unseen food as 0.
    pub fn add(&mut self, food: &str, grams: f64) {
        *self.grams.entry(food.to_string()).or_insert(0.0) += grams;
    }

    pub fn get(&self, food: &str) -> Option<f64> {
        self.grams.get(food).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.grams.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of grams over every food.
    pub fn total_grams(&self) -> f64 {
        self.grams.values().sum()
    }

    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }
}
