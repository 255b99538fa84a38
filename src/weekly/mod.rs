pub mod aggregate;
pub mod validate;

pub use aggregate::{aggregate, aggregate_inputs, parse_day, DayInput};
pub use validate::{validate_day_labels, DAYS_PER_WEEK};
