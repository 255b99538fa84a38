use tracing::{debug, warn};

use crate::models::{Catalog, ResolvedUnit};
use crate::pricing::units::resolve_entry;

/// Purchase units and cost computed for one food.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pricing {
    pub units: f64,
    pub cost: f64,
}

impl Pricing {
    /// Zero units, zero cost.
    pub const UNPRICED: Pricing = Pricing {
        units: 0.0,
        cost: 0.0,
    };
}

/// Whole purchase units needed to cover `grams`, rounding up.
///
/// The count is an integral `f64` so that huge totals stay exact in
/// magnitude instead of saturating an integer type.
///
/// Returns 0 for a non-positive unit size, and for zero, negative or
/// non-finite grams.
pub fn units_needed(grams: f64, grams_per_unit: f64) -> f64 {
    if grams_per_unit <= 0.0 || !grams.is_finite() || grams <= 0.0 {
        return 0.0;
    }
    (grams / grams_per_unit).ceil()
}

/// Units and cost for `grams` of a food with a resolved catalog unit.
pub fn price_resolved(grams: f64, unit: ResolvedUnit) -> Pricing {
    if unit.grams_per_unit <= 0.0 {
        return Pricing::UNPRICED;
    }
    let units = units_needed(grams, unit.grams_per_unit);
    Pricing {
        units,
        cost: units * unit.unit_price,
    }
}

/// Look up `food` in the catalog (exact match) and price `grams` of it.
///
/// Foods missing from the catalog, or whose unit size is not positive, are
/// unpriced.
pub fn price_food(catalog: &Catalog, food: &str, grams: f64) -> Pricing {
    let Some(entry) = catalog.get(food) else {
        warn!(food, "not in catalog; leaving unpriced");
        return Pricing::UNPRICED;
    };

    let unit = resolve_entry(entry);
    if unit.grams_per_unit <= 0.0 {
        warn!(
            food,
            unit = %entry.unit,
            grams_per_unit = unit.grams_per_unit,
            "non-positive unit size; leaving unpriced"
        );
        return Pricing::UNPRICED;
    }

    let pricing = price_resolved(grams, unit);
    debug!(
        food,
        grams,
        grams_per_unit = unit.grams_per_unit,
        units = pricing.units,
        cost = pricing.cost,
        "priced"
    );
    pricing
}
