use std::collections::HashSet;

use crate::error::{Result, ShopError};
use crate::models::Weekday;

/// Number of day inputs a week must have.
pub const DAYS_PER_WEEK: usize = 7;

/// Check that `labels` name each weekday file exactly once.
///
/// Returns the weekday of each label, in input order. Fails before any
/// content is looked at: first on a wrong count, then on the first label
/// that is not a weekday file or repeats an earlier one.
pub fn validate_day_labels<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Weekday>> {
    if labels.len() != DAYS_PER_WEEK {
        return Err(ShopError::WrongFileCount {
            expected: DAYS_PER_WEEK,
            found: labels.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut days = Vec::with_capacity(DAYS_PER_WEEK);

    for label in labels {
        let label = label.as_ref();
        let day = Weekday::from_file_name(label)
            .ok_or_else(|| ShopError::UnknownDayFile(label.to_string()))?;

        if !seen.insert(day) {
            return Err(ShopError::DuplicateDayFile(label.to_string()));
        }
        days.push(day);
    }

    Ok(days)
}
