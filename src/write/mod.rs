//! # Write Path
//!
//! Writes an ordered sequence of tables back into a grid target, one sheet
//! per table. Sheets missing at a table's position are created first; each
//! table lands as a header row plus one bulk block assignment, followed by
//! the cosmetic pass (center alignment, column auto-fit). The write path is
//! strictly sequential.

use crate::error::GridTableError;
use crate::grid::range::RangeRef;
use crate::grid::{GridSource, SheetGrid};
use crate::table::Table;
use log::debug;

/// Writes tables into consecutive sheets of a grid target.
#[derive(Copy, Clone, Debug, Default)]
pub struct Writer;

impl Writer {
    /// Creates a writer.
    pub fn new() -> Self {
        Writer
    }

    /// Writes each table into the sheet at the same 1-based position,
    /// creating sheets named `sheet{position}` as needed. Sheets are written
    /// strictly in table order; any failure aborts the call.
    pub fn write_all<S: GridSource>(&self, target: &mut S, tables: &[Table]) -> Result<(), GridTableError> {
        for (index, table) in tables.iter().enumerate() {
            let position = index + 1;
            if target.sheet_count() < position {
                let count = target.sheet_count();
                target.add_sheet(count, &format!("sheet{}", position))?;
            }
            let sheet = target.sheet_at_mut(position)?;
            write_table(sheet, table)?;
        }
        Ok(())
    }
}

/// Writes one table into a sheet: header row, bulk data block, cosmetics.
fn write_table<G: SheetGrid>(sheet: &mut G, table: &Table) -> Result<(), GridTableError> {
    // Pad to at least 1x1 so a zero-size table still addresses a valid range.
    let row_count = table.row_count().max(1);
    let col_count = table.column_count().max(1);
    debug!(
        "writing table '{}' into sheet '{}': {} x {} block",
        table.name,
        sheet.name(),
        row_count,
        col_count
    );

    for (index, column) in table.columns.iter().enumerate() {
        sheet.set_cell_text(1, index + 1, &column.name)?;
    }
    sheet.center_align(RangeRef::new(1, 1, 1, col_count))?;

    // The data block sits below the header row so that re-extracting the
    // sheet recovers the same table.
    let mut block = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let mut record = Vec::with_capacity(col_count);
        for col in 0..col_count {
            let value = table
                .rows
                .get(row)
                .and_then(|values| values.get(col))
                .cloned()
                .unwrap_or_default();
            record.push(value);
        }
        block.push(record);
    }
    sheet.set_range_text(2, 1, &block)?;
    sheet.center_align(RangeRef::new(2, 1, row_count + 1, col_count))?;
    sheet.auto_fit_columns()?;
    Ok(())
}
