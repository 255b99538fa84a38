pub mod prompts;
pub mod render;

pub use prompts::{parse_grams_input, run_edit_session, suggest_catalog_names};
pub use render::{display_table, render_row, render_totals, write_csv, RowAction, RowView};
