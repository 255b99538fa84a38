use std::path::Path;

use crate::error::Result;
use crate::models::Catalog;
use crate::state::{load_catalog, read_day_files, CatalogSource, RowStore};
use crate::weekly::{aggregate_inputs, DayInput};

/// Validate and aggregate seven day inputs, then price them into a result table.
pub fn build_result_set(inputs: &[DayInput], catalog: Catalog) -> Result<RowStore> {
    let weekly = aggregate_inputs(inputs)?;
    Ok(RowStore::from_totals(&weekly, catalog))
}

/// Full run from disk: read the day files, aggregate, then load the catalog.
///
/// Any failure aborts the run before a table exists.
pub fn run_week<P: AsRef<Path>>(day_files: &[P], catalog: &CatalogSource) -> Result<RowStore> {
    let inputs = read_day_files(day_files)?;
    let weekly = aggregate_inputs(&inputs)?;
    let catalog = load_catalog(catalog)?;
    Ok(RowStore::from_totals(&weekly, catalog))
}
