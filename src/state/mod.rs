mod sources;
mod store;

pub use sources::{find_day_files, load_catalog, parse_catalog, read_day_files, CatalogSource};
pub use store::RowStore;
