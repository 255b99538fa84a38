mod catalog;
mod day;
mod row;

pub use catalog::{Catalog, CatalogEntry, ResolvedUnit};
pub use day::{DayDataset, WeeklyTotals, Weekday};
pub use row::{ResultRow, RowId, RowState, TotalsRow};
