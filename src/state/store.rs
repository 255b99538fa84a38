use tracing::{debug, info};

use crate::error::{Result, ShopError};
use crate::models::{Catalog, ResultRow, RowId, RowState, TotalsRow, WeeklyTotals};
use crate::pricing::price_food;

/// The live, editable result table and its totals row.
///
/// Every mutation re-derives the totals from the surviving rows rather than
/// adjusting a running sum.
#[derive(Debug)]
pub struct RowStore {
    catalog: Catalog,
    rows: Vec<ResultRow>,
    totals: TotalsRow,
    next_id: u64,
}

impl RowStore {
    /// Build one priced row per food in `weekly`, in its iteration order.
    pub fn from_totals(weekly: &WeeklyTotals, catalog: Catalog) -> Self {
        let mut store = Self {
            catalog,
            rows: Vec::with_capacity(weekly.len()),
            totals: TotalsRow::default(),
            next_id: 1,
        };

        for (food, grams) in weekly.iter() {
            let pricing = price_food(&store.catalog, food, grams);
            let id = store.allocate_id();
            store.rows.push(ResultRow {
                id,
                food: food.to_string(),
                grams,
                units: pricing.units,
                cost: pricing.cost,
                state: RowState::Display,
            });
        }

        store.recompute_totals();
        info!(rows = store.rows.len(), cost = store.totals.cost, "built result table");
        store
    }

    /// Current rows in display order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn totals(&self) -> TotalsRow {
        self.totals
    }

    pub fn get(&self, id: RowId) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Put a row into the Editing state.
    pub fn edit(&mut self, id: RowId) -> Result<()> {
        let row = self.row_mut(id)?;
        if row.state != RowState::Display {
            return Err(ShopError::InvalidTransition {
                row: id,
                action: "edit",
                state: row.state,
            });
        }
        row.state = RowState::Editing;
        debug!(row = %id, "editing");
        Ok(())
    }

    /// Replace an editing row's food and grams, re-price it and return it to Display.
    pub fn save(&mut self, id: RowId, food: &str, grams: f64) -> Result<&ResultRow> {
        let index = self.index_of(id)?;
        let state = self.rows[index].state;
        if state != RowState::Editing {
            return Err(ShopError::InvalidTransition {
                row: id,
                action: "save",
                state,
            });
        }

        let pricing = price_food(&self.catalog, food, grams);
        let row = &mut self.rows[index];
        row.food = food.to_string();
        row.grams = grams;
        row.units = pricing.units;
        row.cost = pricing.cost;
        row.state = RowState::Display;
        debug!(row = %id, food, grams, units = pricing.units, "saved");

        self.recompute_totals();
        Ok(&self.rows[index])
    }

    /// Leave the Editing state without changing the row.
    pub fn cancel_edit(&mut self, id: RowId) -> Result<()> {
        let row = self.row_mut(id)?;
        if row.state != RowState::Editing {
            return Err(ShopError::InvalidTransition {
                row: id,
                action: "cancel",
                state: row.state,
            });
        }
        row.state = RowState::Display;
        debug!(row = %id, "edit cancelled");
        Ok(())
    }

    /// Remove a displayed row. No confirmation, no undo.
    pub fn delete(&mut self, id: RowId) -> Result<ResultRow> {
        let index = self.index_of(id)?;
        let state = self.rows[index].state;
        if state != RowState::Display {
            return Err(ShopError::InvalidTransition {
                row: id,
                action: "delete",
                state,
            });
        }

        let removed = self.rows.remove(index);
        debug!(row = %id, food = %removed.food, "deleted");

        self.recompute_totals();
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn recompute_totals(&mut self) {
        self.totals = TotalsRow::from_rows(&self.rows);
    }

    fn allocate_id(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: RowId) -> Result<usize> {
        self.rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(ShopError::RowNotFound(id))
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut ResultRow> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ShopError::RowNotFound(id))
    }
}
