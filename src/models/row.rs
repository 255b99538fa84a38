use std::fmt;

/// Stable identifier of a result row, unique within one `RowStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Presentation state of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowState {
    /// Read-only; offers Edit and Delete.
    #[default]
    Display,

    /// Food and grams are editable; offers Save only.
    Editing,
}

/// One food's weekly grams plus derived purchase units and cost.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub id: RowId,
    pub food: String,
    pub grams: f64,

    /// Whole purchase units; always integral and non-negative.
    pub units: f64,
    pub cost: f64,
    pub state: RowState,
}

/// Componentwise sum over the current result rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TotalsRow {
    pub grams: f64,
    pub units: f64,
    pub cost: f64,
}

impl TotalsRow {
    /// Re-derive totals from rows. Non-finite cells contribute 0.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ResultRow>,
    {
        rows.into_iter().fold(Self::default(), |acc, row| Self {
            grams: acc.grams + finite_or_zero(row.grams),
            units: acc.units + finite_or_zero(row.units),
            cost: acc.cost + finite_or_zero(row.cost),
        })
    }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
