use dialoguer::{Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, ShopError};
use crate::interface::render::{display_table, render_row, RowAction};
use crate::models::{Catalog, RowId};
use crate::pricing::parse_leading_float;
use crate::state::RowStore;

/// Minimum similarity for a catalog name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of catalog suggestions offered.
const MAX_SUGGESTIONS: usize = 3;

/// Parse a typed grams value by its leading number. Non-numeric input becomes 0.
pub fn parse_grams_input(input: &str) -> f64 {
    parse_leading_float(input).unwrap_or(0.0)
}

/// Catalog names similar to `name`, best match first.
///
/// Returns nothing when `name` is itself in the catalog.
pub fn suggest_catalog_names(catalog: &Catalog, name: &str) -> Vec<String> {
    if catalog.get(name).is_some() {
        return Vec::new();
    }

    let needle = name.to_lowercase();
    let mut candidates: Vec<(&str, f64)> = catalog
        .names()
        .into_iter()
        .map(|n| (n, jaro_winkler(&n.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(n, _)| n.to_string())
        .collect()
}

/// Interactive editing loop: pick a row, then Edit or Delete it.
///
/// The table (with refreshed totals) is printed after every change.
pub fn run_edit_session(store: &mut RowStore) -> Result<()> {
    loop {
        display_table(store);

        if store.is_empty() {
            return Ok(());
        }

        let mut items: Vec<String> = store
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| format!("{:>3}. {}", i + 1, row.food))
            .collect();
        items.push("Done".to_string());

        let selection = Select::new()
            .with_prompt("Select a row")
            .items(&items)
            .default(0)
            .interact()?;

        if selection >= store.len() {
            return Ok(());
        }

        let id = store.rows()[selection].id;
        let actions = render_row(&store.rows()[selection]).actions;
        let mut labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        labels.push("Back");

        let choice = Select::new()
            .with_prompt(format!("Action for '{}'", store.rows()[selection].food))
            .items(&labels)
            .default(0)
            .interact()?;

        match actions.get(choice) {
            Some(RowAction::Edit) => edit_row(store, id)?,
            Some(RowAction::Delete) => {
                let removed = store.delete(id)?;
                println!("Deleted '{}'.", removed.food);
            }
            Some(RowAction::Save) | None => {}
        }
    }
}

/// Edit one row: prompt for food and grams, then Save.
fn edit_row(store: &mut RowStore, id: RowId) -> Result<()> {
    edit_row_with(store, id, prompt_row_values)
}

/// Put the row into Editing, ask `prompt` for its new values, then Save.
///
/// If `prompt` fails the row goes back to Display unchanged.
fn edit_row_with<F>(store: &mut RowStore, id: RowId, prompt: F) -> Result<()>
where
    F: FnOnce(&RowStore, RowId) -> Result<(String, f64)>,
{
    store.edit(id)?;

    let (food, grams) = match prompt(&*store, id) {
        Ok(values) => values,
        Err(e) => {
            store.cancel_edit(id)?;
            return Err(e);
        }
    };

    let row = store.save(id, &food, grams)?;
    println!(
        "Saved '{}': {} grams -> {} units, $ {}",
        row.food, row.grams, row.units, row.cost
    );
    Ok(())
}

fn prompt_row_values(store: &RowStore, id: RowId) -> Result<(String, f64)> {
    display_table(store);

    let row = store.get(id).ok_or(ShopError::RowNotFound(id))?;

    let typed: String = Input::new()
        .with_prompt("Food")
        .default(row.food.clone())
        .interact_text()?;
    let food = resolve_food_name(store.catalog(), typed.trim())?;

    let grams_text: String = Input::new()
        .with_prompt("Grams")
        .default(row.grams.to_string())
        .interact_text()?;

    Ok((food, parse_grams_input(&grams_text)))
}

/// Offer close catalog matches for a name that is not in the catalog.
fn resolve_food_name(catalog: &Catalog, typed: &str) -> Result<String> {
    let suggestions = suggest_catalog_names(catalog, typed);
    if suggestions.is_empty() {
        if catalog.get(typed).is_none() {
            println!("'{}' is not in the catalog; it will be left unpriced.", typed);
        }
        return Ok(typed.to_string());
    }

    let mut options = suggestions.clone();
    options.push(format!("Keep '{}'", typed));

    let selection = Select::new()
        .with_prompt(format!("'{}' is not in the catalog. Did you mean", typed))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(suggestions
        .get(selection)
        .cloned()
        .unwrap_or_else(|| typed.to_string()))
}
