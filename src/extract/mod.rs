//! # Extraction
//!
//! Reads every sheet of a grid source into an ordered sequence of tables.
//! Small sheets are read in one sequential pass; sheets above a configurable
//! row threshold are partitioned into contiguous spans read concurrently by
//! worker threads while the calling thread reads the remainder. Reassembly
//! is by ascending span start, so output row order always equals source row
//! order regardless of worker completion timing.

mod header;
mod partition;

use crate::error::{GridTableError, ResultMessage};
use crate::extract::header::HeaderNamer;
use crate::extract::partition::{plan, RowSpan};
use crate::grid::{GridError, GridSource, SheetGrid};
use crate::table::column::Column;
use crate::table::Table;
use log::debug;
use std::thread;

/// Options controlling the extraction strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Worker threads spawned for the chunked path; clamped to at least 1
    pub max_workers: usize,
    /// Largest data-row count still read in a single sequential pass
    pub chunk_threshold: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            max_workers: 4,
            chunk_threshold: 500,
        }
    }
}

/// Reads grid sources into tables.
#[derive(Clone, Debug, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Creates an extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with the given options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Extractor { options }
    }

    /// Reads all sheets of a grid source into tables, in sheet order.
    ///
    /// The call is atomic: any cell access failure or worker panic aborts the
    /// whole extraction and no tables are returned. Workers only ever read
    /// from the source, which is why `S::Sheet` must be `Sync`.
    pub fn extract_all<S>(&self, source: &S) -> Result<Vec<Table>, GridTableError>
    where
        S: GridSource,
        S::Sheet: Sync,
    {
        let mut tables = Vec::with_capacity(source.sheet_count());
        for position in 1..=source.sheet_count() {
            let sheet = source.sheet_at(position)?;
            tables.push(self.extract_sheet(sheet).with_prefix(sheet.name())?);
        }
        Ok(tables)
    }

    /// Reads one sheet into a table.
    fn extract_sheet<G>(&self, sheet: &G) -> Result<Table, GridTableError>
    where
        G: SheetGrid + Sync,
    {
        let row_count = sheet.used_row_count();
        let col_count = sheet.used_column_count();
        let plan = plan(row_count, self.options.max_workers, self.options.chunk_threshold);
        debug!(
            "extracting sheet '{}': {} rows x {} columns, {} worker spans",
            sheet.name(),
            row_count,
            col_count,
            plan.worker_spans.len()
        );

        let mut table = Table::new(sheet.name(), read_header(sheet, col_count)?);
        if plan.worker_spans.is_empty() {
            if let Some(span) = plan.tail_span {
                table.rows = read_span(sheet, col_count, span)?;
            }
            return Ok(table);
        }

        // Worker spans run on spawned threads while the calling thread reads
        // the tail span. The scope is the join barrier: no worker outlives the
        // call, and a failure surfaces only after every worker has finished.
        let parts = thread::scope(|scope| {
            let handles: Vec<_> = plan
                .worker_spans
                .iter()
                .map(|span| scope.spawn(move || read_span(sheet, col_count, *span)))
                .collect();
            let tail = plan.tail_span.map(|span| read_span(sheet, col_count, span));
            let mut parts = Vec::with_capacity(handles.len() + 1);
            for handle in handles {
                parts.push(handle.join().map_err(|_| GridTableError::WorkerPanicError {
                    sheet: sheet.name().to_owned(),
                })?);
            }
            parts.extend(tail);
            Ok::<_, GridTableError>(parts)
        })?;

        // Reassemble by ascending span start: worker spans in plan order, then
        // the tail span.
        for part in parts {
            table.rows.append(&mut part?);
        }
        Ok(table)
    }
}

/// Header pass: reads row 1 sequentially and assigns deduplicated names.
fn read_header<G: SheetGrid>(sheet: &G, col_count: usize) -> Result<Vec<Column>, GridError> {
    let mut namer = HeaderNamer::new();
    let mut columns = Vec::with_capacity(col_count);
    for col in 1..=col_count {
        let text = if sheet.cell_is_empty(1, col)? {
            String::new()
        } else {
            sheet.cell_text(1, col)?
        };
        columns.push(Column::varchar(namer.assign(&text)));
    }
    Ok(columns)
}

/// Reads one contiguous span of data rows, in row order.
fn read_span<G: SheetGrid>(sheet: &G, col_count: usize, span: RowSpan) -> Result<Vec<Vec<String>>, GridError> {
    let mut rows = Vec::with_capacity(span.row_upper_bound - span.row_lower_bound + 1);
    for row in span.row_lower_bound..=span.row_upper_bound {
        let mut record = Vec::with_capacity(col_count);
        for col in 1..=col_count {
            if sheet.cell_is_empty(row, col)? {
                record.push(String::new());
            } else {
                record.push(sheet.cell_text(row, col)?);
            }
        }
        rows.push(record);
    }
    Ok(rows)
}
