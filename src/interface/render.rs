use std::io::Write;

use crate::error::Result;
use crate::models::{ResultRow, RowState, TotalsRow};
use crate::state::RowStore;

/// Actions a row offers in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    Save,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::Save => "Save",
        }
    }
}

/// Text cells and available actions for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub food: String,
    pub grams: String,
    pub units: String,
    pub cost: String,
    pub actions: &'static [RowAction],
}

/// Map a row's state to its presentation. Editing rows show food and grams as
/// input fields and offer Save only.
pub fn render_row(row: &ResultRow) -> RowView {
    match row.state {
        RowState::Display => RowView {
            food: row.food.clone(),
            grams: row.grams.to_string(),
            units: row.units.to_string(),
            cost: row.cost.to_string(),
            actions: &[RowAction::Edit, RowAction::Delete],
        },
        RowState::Editing => RowView {
            food: format!("[{}]", row.food),
            grams: format!("[{}]", row.grams),
            units: row.units.to_string(),
            cost: row.cost.to_string(),
            actions: &[RowAction::Save],
        },
    }
}

/// Totals footer cells: `"N grs"`, `"N un"`, `"$ N"`.
pub fn render_totals(totals: &TotalsRow) -> [String; 3] {
    [
        format!("{} grs", totals.grams),
        format!("{} un", totals.units),
        format!("$ {}", totals.cost),
    ]
}

/// Print the result table with its totals footer.
pub fn display_table(store: &RowStore) {
    if store.is_empty() {
        println!("No foods in the table.");
    }

    let views: Vec<RowView> = store.rows().iter().map(render_row).collect();
    let footer = render_totals(&store.totals());

    // Column widths fit the header, every row and the footer
    let food_w = column_width(views.iter().map(|v| v.food.as_str()), 6);
    let grams_w = column_width(
        views.iter().map(|v| v.grams.as_str()).chain([footer[0].as_str()]),
        5,
    );
    let units_w = column_width(
        views.iter().map(|v| v.units.as_str()).chain([footer[1].as_str()]),
        5,
    );
    let cost_w = column_width(
        views.iter().map(|v| v.cost.as_str()).chain([footer[2].as_str()]),
        5,
    );

    println!();
    println!(
        "{:>3}  {:<food_w$}  {:>grams_w$}  {:>units_w$}  {:>cost_w$}",
        "#", "Food", "Grams", "Units", "Price"
    );
    println!(
        "{}",
        "-".repeat(3 + 2 + food_w + 2 + grams_w + 2 + units_w + 2 + cost_w)
    );

    for (i, view) in views.iter().enumerate() {
        let actions: Vec<&str> = view.actions.iter().map(|a| a.label()).collect();
        println!(
            "{:>3}. {:<food_w$}  {:>grams_w$}  {:>units_w$}  {:>cost_w$}  [{}]",
            i + 1,
            view.food,
            view.grams,
            view.units,
            view.cost,
            actions.join(" | ")
        );
    }

    println!(
        "{}",
        "-".repeat(3 + 2 + food_w + 2 + grams_w + 2 + units_w + 2 + cost_w)
    );
    println!(
        "{:>3}  {:<food_w$}  {:>grams_w$}  {:>units_w$}  {:>cost_w$}",
        "", "Totals", footer[0], footer[1], footer[2]
    );
    println!();
}

/// Widest cell in characters, at least `min`. Format padding counts chars, not bytes.
fn column_width<'a>(cells: impl IntoIterator<Item = &'a str>, min: usize) -> usize {
    cells
        .into_iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .max(min)
}

/// Write the table as CSV (`food,grams,units,cost`) followed by a `TOTAL` row.
pub fn write_csv<W: Write>(store: &RowStore, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["food", "grams", "units", "cost"])?;
    for row in store.rows() {
        wtr.write_record([
            row.food.clone(),
            row.grams.to_string(),
            row.units.to_string(),
            row.cost.to_string(),
        ])?;
    }

    let totals = store.totals();
    wtr.write_record([
        "TOTAL".to_string(),
        totals.grams.to_string(),
        totals.units.to_string(),
        totals.cost.to_string(),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, CatalogEntry, RowId, WeeklyTotals};

    fn row(state: RowState) -> ResultRow {
        ResultRow {
            id: RowId(1),
            food: "Rice".to_string(),
            grams: 1200.0,
            units: 2.0,
            cost: 4000.0,
            state,
        }
    }

    #[test]
    fn test_render_display_row() {
        let view = render_row(&row(RowState::Display));
        assert_eq!(view.food, "Rice");
        assert_eq!(view.grams, "1200");
        assert_eq!(view.cost, "4000");
        assert_eq!(view.actions, &[RowAction::Edit, RowAction::Delete]);
    }

    #[test]
    fn test_render_editing_row() {
        let view = render_row(&row(RowState::Editing));
        assert_eq!(view.food, "[Rice]");
        assert_eq!(view.grams, "[1200]");
        assert_eq!(view.actions, &[RowAction::Save]);
    }

    #[test]
    fn test_column_width_counts_chars() {
        assert_eq!(column_width(["Plátano", "Rice"], 6), 7);
        assert_eq!(column_width(["Piña"], 6), 6);
        assert_eq!(column_width(Vec::<&str>::new(), 5), 5);
    }

    #[test]
    fn test_render_totals() {
        let totals = TotalsRow {
            grams: 1500.5,
            units: 3.0,
            cost: 4500.0,
        };
        assert_eq!(render_totals(&totals), ["1500.5 grs", "3 un", "$ 4500"]);
    }

    #[test]
    fn test_write_csv() {
        let catalog: Catalog = [("Rice".to_string(), CatalogEntry::new("1 kg", "$2000"))]
            .into_iter()
            .collect();
        let mut weekly = WeeklyTotals::default();
        weekly.add("Rice", 1200.0);
        weekly.add("Salt", 30.0);
        let store = RowStore::from_totals(&weekly, catalog);

        let mut out = Vec::new();
        write_csv(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "food,grams,units,cost\nRice,1200,2,4000\nSalt,30,0,0\nTOTAL,1230,2,4000\n"
        );
    }
}
