//! # Gridtable
//!
//! A library for moving tabular data in and out of grid-shaped sources: a
//! multi-sheet collection of text cells is extracted into ordered, named
//! tables, and tables are written back into sheets. The grid itself is an
//! injected collaborator behind the [`GridSource`] trait; this crate supplies
//! the extraction and write engines plus an in-memory grid implementation.
//!
//! ## Features
//!
//! - **Abstract grid collaborator**: extraction and writing run against the
//!   [`GridSource`]/[`SheetGrid`] traits, never a concrete host application
//! - **Chunked concurrent extraction**: sheets above a configurable row
//!   threshold are partitioned into contiguous spans read by worker threads
//!   while the calling thread reads the remainder
//! - **Order guarantee**: output row order always equals source row order,
//!   independent of worker completion timing
//! - **Deduplicated column names**: blank headers take a placeholder and
//!   duplicates take a numbered suffix, deterministically
//! - **Atomic failure**: one cell access fault aborts the whole extraction,
//!   never returning a partially read grid
//! - **Write-back**: tables land as a header row plus one bulk block
//!   assignment, with center alignment and column auto-fit
//! - **In-memory grid**: [`MemoryGrid`] backs tests and round-trips without
//!   any external collaborator

mod error;
mod extract;
mod grid;
mod table;
mod write;

pub use crate::error::GridTableError;
pub use crate::extract::{ExtractOptions, Extractor};
pub use crate::grid::memory::{MemoryGrid, MemorySheet};
pub use crate::grid::range::{RangeError, RangeRef};
pub use crate::grid::{GridError, GridSource, SheetGrid};
pub use crate::table::column::{Column, ColumnType};
pub use crate::table::Table;
pub use crate::write::Writer;
