pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pipeline;
pub mod pricing;
pub mod state;
pub mod weekly;

pub use error::{Result, ShopError};
pub use models::{Catalog, CatalogEntry, ResultRow, RowId, RowState, TotalsRow, WeeklyTotals};
pub use pipeline::{build_result_set, run_week};
pub use state::RowStore;
