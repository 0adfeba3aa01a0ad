use crate::grid::reference::{cell_reference, letters_to_index};
use regex::Regex;
use std::fmt;
use std::fmt::Display;
use thiserror::Error;

/// Errors related to Excel-style range parsing.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Invalid range format '{0}'")]
    FormatError(String),
}

/// Represents a rectangular cell range with 1-based inclusive bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeRef {
    /// Lower row bound (1-based, inclusive)
    pub row_lower_bound: usize,
    /// Upper row bound (1-based, inclusive)
    pub row_upper_bound: usize,
    /// Lower column bound (1-based, inclusive)
    pub col_lower_bound: usize,
    /// Upper column bound (1-based, inclusive)
    pub col_upper_bound: usize,
}

impl RangeRef {
    /// Creates a range from two corner coordinates, normalizing corner order.
    pub fn new(top_row: usize, top_col: usize, bottom_row: usize, bottom_col: usize) -> Self {
        RangeRef {
            row_lower_bound: top_row.min(bottom_row),
            row_upper_bound: top_row.max(bottom_row),
            col_lower_bound: top_col.min(bottom_col),
            col_upper_bound: top_col.max(bottom_col),
        }
    }

    /// Creates a single-cell range.
    pub fn cell(row: usize, col: usize) -> Self {
        Self::new(row, col, row, col)
    }

    /// Number of rows covered by the range.
    pub fn row_count(&self) -> usize {
        self.row_upper_bound - self.row_lower_bound + 1
    }

    /// Number of columns covered by the range.
    pub fn col_count(&self) -> usize {
        self.col_upper_bound - self.col_lower_bound + 1
    }
}

impl TryFrom<&str> for RangeRef {
    type Error = RangeError;

    /// Parses an Excel-style range string (e.g., "A1", "B2:C5").
    /// Both corners must be full cell references; rows start at 1.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let pattern = Regex::new(r"^([A-Z]+)(\d+)(:([A-Z]+)(\d+))?$").expect("Hardcode regex pattern");
        let value = value.to_ascii_uppercase();
        let captures = pattern
            .captures(value.as_str())
            .ok_or_else(|| RangeError::FormatError(value.to_owned()))?;
        let corner = |letters: usize, digits: usize| -> Result<(usize, usize), RangeError> {
            let col = captures
                .get(letters)
                .and_then(|matcher| letters_to_index(matcher.as_str()))
                .ok_or_else(|| RangeError::FormatError(value.to_owned()))?;
            let row = captures
                .get(digits)
                .and_then(|matcher| matcher.as_str().parse::<usize>().ok())
                .filter(|row| *row >= 1)
                .ok_or_else(|| RangeError::FormatError(value.to_owned()))?;
            Ok((row, col))
        };
        let (top_row, top_col) = corner(1, 2)?;
        let (bottom_row, bottom_col) = if captures.get(3).is_some() {
            corner(4, 5)?
        } else {
            (top_row, top_col)
        };
        Ok(RangeRef::new(top_row, top_col, bottom_row, bottom_col))
    }
}

impl Display for RangeRef {
    /// Formats the range in Excel notation, collapsing single cells to one reference.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = cell_reference(self.row_lower_bound, self.col_lower_bound);
        if self.row_lower_bound == self.row_upper_bound && self.col_lower_bound == self.col_upper_bound {
            write!(f, "{}", start)
        } else {
            let end = cell_reference(self.row_upper_bound, self.col_upper_bound);
            write!(f, "{}:{}", start, end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_cell() {
        let range = RangeRef::try_from("B12").unwrap();
        assert_eq!(range, RangeRef::cell(12, 2));
        assert_eq!(range.row_count(), 1);
        assert_eq!(range.col_count(), 1);
    }

    #[test]
    fn parse_rectangle() {
        let range = RangeRef::try_from("A1:C5").unwrap();
        assert_eq!(range, RangeRef::new(1, 1, 5, 3));
        assert_eq!(range.row_count(), 5);
        assert_eq!(range.col_count(), 3);
    }

    #[test]
    fn parse_lower_case_and_swapped_corners() {
        let range = RangeRef::try_from("c5:a1").unwrap();
        assert_eq!(range, RangeRef::new(1, 1, 5, 3));
    }

    #[test]
    fn parse_rejects_partial_references() {
        assert!(RangeRef::try_from("A").is_err());
        assert!(RangeRef::try_from("1:10").is_err());
        assert!(RangeRef::try_from("A0").is_err());
        assert!(RangeRef::try_from("A1:C").is_err());
        assert!(RangeRef::try_from("").is_err());
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(RangeRef::new(1, 1, 5, 3).to_string(), "A1:C5");
        assert_eq!(RangeRef::cell(12, 2).to_string(), "B12");
        let range = RangeRef::try_from("A1:AA500").unwrap();
        assert_eq!(RangeRef::try_from(range.to_string().as_str()).unwrap(), range);
    }
}
