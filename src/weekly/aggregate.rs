use std::collections::BTreeMap;

use tracing::info;

use crate::error::{Result, ShopError};
use crate::models::{DayDataset, WeeklyTotals, Weekday};
use crate::weekly::validate::validate_day_labels;

/// One labeled, unparsed day input (typically a file name and its contents).
#[derive(Debug, Clone)]
pub struct DayInput {
    pub name: String,
    pub content: String,
}

impl DayInput {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Parse one day's content as a flat `food -> grams` JSON object.
pub fn parse_day(day: Weekday, input: &DayInput) -> Result<DayDataset> {
    let grams: BTreeMap<String, f64> =
        serde_json::from_str(&input.content).map_err(|source| ShopError::DayParse {
            file: input.name.clone(),
            source,
        })?;

    if let Some((food, &value)) = grams.iter().find(|(_, g)| !g.is_finite() || **g < 0.0) {
        return Err(ShopError::NegativeGrams {
            file: input.name.clone(),
            food: food.clone(),
            grams: value,
        });
    }

    info!(day = %day, file = %input.name, foods = grams.len(), "loaded day");

    Ok(DayDataset {
        day,
        source: input.name.clone(),
        grams,
    })
}

/// Sum grams per food across datasets. A food absent on a day counts as 0.
pub fn aggregate(datasets: &[DayDataset]) -> WeeklyTotals {
    let mut totals = WeeklyTotals::default();
    for dataset in datasets {
        for (food, grams) in &dataset.grams {
            totals.add(food, *grams);
        }
    }
    totals
}

/// Validate labels, parse every input, then merge into weekly totals.
///
/// Nothing is summed unless all seven inputs parse.
pub fn aggregate_inputs(inputs: &[DayInput]) -> Result<WeeklyTotals> {
    let names: Vec<&str> = inputs.iter().map(|i| i.name.as_str()).collect();
    let days = validate_day_labels(&names)?;

    let datasets = days
        .into_iter()
        .zip(inputs)
        .map(|(day, input)| parse_day(day, input))
        .collect::<Result<Vec<_>>>()?;

    let totals = aggregate(&datasets);
    info!(
        foods = totals.len(),
        grams = totals.total_grams(),
        "aggregated week"
    );
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(contents: &[&str; 7]) -> Vec<DayInput> {
        Weekday::ALL
            .iter()
            .zip(contents)
            .map(|(day, content)| DayInput::new(day.file_name(), *content))
            .collect()
    }

    #[test]
    fn test_aggregate_sums_per_food() {
        let inputs = week(&[
            r#"{"Rice": 200, "Milk": 250}"#,
            r#"{"Rice": 300}"#,
            r#"{}"#,
            r#"{"Apple": 150.5}"#,
            r#"{"Rice": 100, "Apple": 49.5}"#,
            r#"{}"#,
            r#"{"Milk": 250}"#,
        ]);

        let totals = aggregate_inputs(&inputs).unwrap();
        assert_eq!(totals.len(), 3);
        assert_eq!(totals.get("Rice"), Some(600.0));
        assert_eq!(totals.get("Milk"), Some(500.0));
        assert_eq!(totals.get("Apple"), Some(200.0));
    }

    #[test]
    fn test_parse_error_names_file() {
        let inputs = week(&["{}", "{}", "{not json", "{}", "{}", "{}", "{}"]);
        match aggregate_inputs(&inputs) {
            Err(ShopError::DayParse { file, .. }) => assert_eq!(file, "wednesday.json"),
            other => panic!("expected DayParse, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_grams_is_parse_error() {
        let inputs = week(&[r#"{"Rice": "200"}"#, "{}", "{}", "{}", "{}", "{}", "{}"]);
        assert!(matches!(
            aggregate_inputs(&inputs),
            Err(ShopError::DayParse { .. })
        ));
    }

    #[test]
    fn test_negative_grams_rejected() {
        let inputs = week(&["{}", "{}", "{}", "{}", "{}", r#"{"Rice": -5}"#, "{}"]);
        match aggregate_inputs(&inputs) {
            Err(ShopError::NegativeGrams { file, food, .. }) => {
                assert_eq!(file, "saturday.json");
                assert_eq!(food, "Rice");
            }
            other => panic!("expected NegativeGrams, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_runs_before_parsing() {
        let mut inputs = week(&["{bad", "{}", "{}", "{}", "{}", "{}", "{}"]);
        inputs.pop();
        assert!(matches!(
            aggregate_inputs(&inputs),
            Err(ShopError::WrongFileCount { .. })
        ));
    }
}
