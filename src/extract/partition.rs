//! Row-span partition planning for the chunked extraction path.

/// A contiguous range of data rows with 1-based inclusive bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct RowSpan {
    /// First data row of the span
    pub(crate) row_lower_bound: usize,
    /// Last data row of the span
    pub(crate) row_upper_bound: usize,
}

/// A partition of a sheet's data rows into worker spans plus a span read by
/// the calling thread.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ExtractPlan {
    /// Spans read by spawned workers, ascending by starting row
    pub(crate) worker_spans: Vec<RowSpan>,
    /// Tail span read by the calling thread; None when the sheet has no data rows
    pub(crate) tail_span: Option<RowSpan>,
}

/// Plans the row spans for a sheet with `row_count` used rows, of which row 1
/// is the header. Sheets at or below `chunk_threshold` data rows produce a
/// single caller-read span; larger sheets get `max_workers` equal worker
/// spans of `data_rows / (max_workers + 1)` rows each, with the remainder
/// read by the caller. The plan collapses to the sequential shape whenever
/// the computed span size would be zero.
pub(crate) fn plan(row_count: usize, max_workers: usize, chunk_threshold: usize) -> ExtractPlan {
    let data_rows = row_count.saturating_sub(1);
    if data_rows == 0 {
        return ExtractPlan {
            worker_spans: Vec::new(),
            tail_span: None,
        };
    }
    let max_workers = max_workers.max(1);
    let span_size = data_rows / (max_workers + 1);
    if data_rows <= chunk_threshold || span_size == 0 {
        return ExtractPlan {
            worker_spans: Vec::new(),
            tail_span: Some(RowSpan {
                row_lower_bound: 2,
                row_upper_bound: row_count,
            }),
        };
    }
    let mut worker_spans = Vec::with_capacity(max_workers);
    let mut row_lower_bound = 2;
    for _ in 0..max_workers {
        let row_upper_bound = row_lower_bound + span_size - 1;
        worker_spans.push(RowSpan {
            row_lower_bound,
            row_upper_bound,
        });
        row_lower_bound = row_upper_bound + 1;
    }
    ExtractPlan {
        worker_spans,
        tail_span: Some(RowSpan {
            row_lower_bound,
            row_upper_bound: row_count,
        }),
    }
}
