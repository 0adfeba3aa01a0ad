//! In-memory grid source.
//!
//! `MemoryGrid` is a complete `GridSource` implementation backed by sparse
//! per-sheet cell maps. It serves as the reference collaborator for tests and
//! round-trips: cell writes behave like a real grid (empty text clears the
//! cell, so the used range only covers actual content), while the cosmetic
//! operations of the write path are recorded rather than rendered.

use crate::grid::range::RangeRef;
use crate::grid::{GridError, GridSource, SheetGrid};
use std::collections::HashMap;

/// An in-memory sheet with sparse cell storage.
#[derive(Clone, Debug, Default)]
pub struct MemorySheet {
    /// Sheet name
    name: String,
    /// Non-empty cell values keyed by 1-based (row, column)
    cells: HashMap<(usize, usize), String>,
    /// Ranges passed to center_align, in call order
    aligned: Vec<RangeRef>,
    /// Number of auto_fit_columns calls
    auto_fit_count: usize,
}

impl MemorySheet {
    /// Creates an empty sheet with the given name.
    pub fn new(name: &str) -> Self {
        MemorySheet {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    /// Creates a sheet from row-major text values anchored at A1.
    /// Empty strings are skipped, leaving those cells unset.
    pub fn from_rows(name: &str, rows: &[&[&str]]) -> Self {
        let mut sheet = Self::new(name);
        for (row, record) in rows.iter().enumerate() {
            for (col, value) in record.iter().enumerate() {
                if !value.is_empty() {
                    sheet.cells.insert((row + 1, col + 1), (*value).to_owned());
                }
            }
        }
        sheet
    }

    /// Ranges that were center-aligned, in call order.
    pub fn aligned_ranges(&self) -> &[RangeRef] {
        &self.aligned
    }

    /// How many times column widths were auto-fitted.
    pub fn auto_fit_count(&self) -> usize {
        self.auto_fit_count
    }

    fn check_position(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row == 0 || col == 0 {
            Err(GridError::out_of_range(row, col))
        } else {
            Ok(())
        }
    }
}

impl SheetGrid for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn used_row_count(&self) -> usize {
        self.cells.keys().map(|(row, _)| *row).max().unwrap_or(0)
    }

    fn used_column_count(&self) -> usize {
        self.cells.keys().map(|(_, col)| *col).max().unwrap_or(0)
    }

    fn cell_text(&self, row: usize, col: usize) -> Result<String, GridError> {
        self.check_position(row, col)?;
        Ok(self.cells.get(&(row, col)).cloned().unwrap_or_default())
    }

    fn cell_is_empty(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_position(row, col)?;
        Ok(!self.cells.contains_key(&(row, col)))
    }

    fn set_cell_text(&mut self, row: usize, col: usize, value: &str) -> Result<(), GridError> {
        self.check_position(row, col)?;
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value.to_owned());
        }
        Ok(())
    }

    fn set_range_text(&mut self, top_row: usize, top_col: usize, block: &[Vec<String>]) -> Result<(), GridError> {
        for (row, record) in block.iter().enumerate() {
            for (col, value) in record.iter().enumerate() {
                self.set_cell_text(top_row + row, top_col + col, value)?;
            }
        }
        Ok(())
    }

    fn auto_fit_columns(&mut self) -> Result<(), GridError> {
        self.auto_fit_count += 1;
        Ok(())
    }

    fn center_align(&mut self, range: RangeRef) -> Result<(), GridError> {
        self.aligned.push(range);
        Ok(())
    }
}

/// An in-memory grid source holding an ordered sequence of sheets.
#[derive(Clone, Debug, Default)]
pub struct MemoryGrid {
    sheets: Vec<MemorySheet>,
}

impl MemoryGrid {
    /// Creates a grid with no sheets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from an ordered sequence of sheets.
    pub fn with_sheets(sheets: Vec<MemorySheet>) -> Self {
        MemoryGrid { sheets }
    }

    /// Appends a sheet after the current last sheet.
    pub fn push_sheet(&mut self, sheet: MemorySheet) {
        self.sheets.push(sheet);
    }
}

impl GridSource for MemoryGrid {
    type Sheet = MemorySheet;

    fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn sheet_at(&self, position: usize) -> Result<&Self::Sheet, GridError> {
        if position >= 1 && position <= self.sheets.len() {
            Ok(&self.sheets[position - 1])
        } else {
            Err(GridError::SheetPosition {
                position,
                count: self.sheets.len(),
            })
        }
    }

    fn sheet_named(&self, name: &str) -> Result<&Self::Sheet, GridError> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| GridError::SheetName { name: name.to_owned() })
    }

    fn sheet_at_mut(&mut self, position: usize) -> Result<&mut Self::Sheet, GridError> {
        let count = self.sheets.len();
        if position >= 1 && position <= count {
            Ok(&mut self.sheets[position - 1])
        } else {
            Err(GridError::SheetPosition { position, count })
        }
    }

    fn add_sheet(&mut self, after: usize, name: &str) -> Result<usize, GridError> {
        let index = after.min(self.sheets.len());
        self.sheets.insert(index, MemorySheet::new(name));
        Ok(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_range_tracks_content() {
        let sheet = MemorySheet::from_rows("data", &[&["a", "b", "c"], &["1", "", "3"]]);
        assert_eq!(sheet.used_row_count(), 2);
        assert_eq!(sheet.used_column_count(), 3);
        assert_eq!(sheet.cell_text(1, 2).unwrap(), "b");
        assert_eq!(sheet.cell_text(2, 2).unwrap(), "");
        assert!(sheet.cell_is_empty(2, 2).unwrap());
        assert!(!sheet.cell_is_empty(2, 3).unwrap());
    }

    #[test]
    fn empty_sheet_has_no_used_range() {
        let sheet = MemorySheet::new("blank");
        assert_eq!(sheet.used_row_count(), 0);
        assert_eq!(sheet.used_column_count(), 0);
        assert!(sheet.cell_is_empty(10, 10).unwrap());
    }

    #[test]
    fn writing_empty_text_clears_the_cell() {
        let mut sheet = MemorySheet::new("data");
        sheet.set_cell_text(3, 2, "x").unwrap();
        assert_eq!(sheet.used_row_count(), 3);
        sheet.set_cell_text(3, 2, "").unwrap();
        assert_eq!(sheet.used_row_count(), 0);
        assert_eq!(sheet.used_column_count(), 0);
    }

    #[test]
    fn range_write_is_anchored_at_top_left() {
        let mut sheet = MemorySheet::new("data");
        let block = vec![
            vec!["a".to_owned(), "b".to_owned()],
            vec!["c".to_owned(), "d".to_owned()],
        ];
        sheet.set_range_text(2, 3, &block).unwrap();
        assert_eq!(sheet.cell_text(2, 3).unwrap(), "a");
        assert_eq!(sheet.cell_text(3, 4).unwrap(), "d");
        assert_eq!(sheet.used_row_count(), 3);
        assert_eq!(sheet.used_column_count(), 4);
    }

    #[test]
    fn zero_coordinates_are_rejected() {
        let mut sheet = MemorySheet::new("data");
        assert!(matches!(sheet.cell_text(0, 1), Err(GridError::CellOutOfRange { .. })));
        assert!(matches!(sheet.set_cell_text(1, 0, "x"), Err(GridError::CellOutOfRange { .. })));
    }

    #[test]
    fn cosmetics_are_recorded() {
        let mut sheet = MemorySheet::new("data");
        sheet.center_align(RangeRef::new(1, 1, 1, 3)).unwrap();
        sheet.auto_fit_columns().unwrap();
        assert_eq!(sheet.aligned_ranges(), &[RangeRef::new(1, 1, 1, 3)]);
        assert_eq!(sheet.auto_fit_count(), 1);
    }

    #[test]
    fn sheets_are_addressed_by_position_and_name() {
        let mut grid = MemoryGrid::with_sheets(vec![MemorySheet::new("alpha"), MemorySheet::new("beta")]);
        assert_eq!(grid.sheet_count(), 2);
        assert_eq!(grid.sheet_at(1).unwrap().name(), "alpha");
        assert_eq!(grid.sheet_named("beta").unwrap().name(), "beta");
        assert!(matches!(grid.sheet_at(0), Err(GridError::SheetPosition { .. })));
        assert!(matches!(grid.sheet_at(3), Err(GridError::SheetPosition { .. })));
        assert!(matches!(grid.sheet_named("gamma"), Err(GridError::SheetName { .. })));
        assert_eq!(grid.sheet_at_mut(2).unwrap().name(), "beta");
    }

    #[test]
    fn add_sheet_inserts_after_position() {
        let mut grid = MemoryGrid::new();
        assert_eq!(grid.add_sheet(0, "first").unwrap(), 1);
        assert_eq!(grid.add_sheet(1, "third").unwrap(), 2);
        assert_eq!(grid.add_sheet(1, "second").unwrap(), 2);
        let names: Vec<&str> = (1..=3).map(|position| grid.sheet_at(position).unwrap().name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
