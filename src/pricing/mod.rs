pub mod calculations;
pub mod constants;
pub mod units;

pub use calculations::{price_food, price_resolved, units_needed, Pricing};
pub use constants::*;
pub use units::{parse_leading_float, parse_price, parse_unit, resolve_entry};
