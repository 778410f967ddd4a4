use crate::config::ColumnLayout;
use crate::core::aggregator::LedgerBuilder;
use crate::core::normalizer::normalize_row;
use crate::models::{Aggregation, RawRow};

/// Row counts of one run, reported by the CLI.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub rows_read: usize,
    pub rows_dropped: usize,
}

pub struct Core;

impl Core {
    /// Raw rows → normalized records → employee / business ledgers.
    pub fn process(rows: &[RawRow], columns: &ColumnLayout) -> Aggregation {
        Self::process_with_stats(rows, columns).0
    }

    pub fn process_with_stats(
        rows: &[RawRow],
        columns: &ColumnLayout,
    ) -> (Aggregation, PipelineStats) {
        let mut builder = LedgerBuilder::new();
        let mut stats = PipelineStats {
            rows_read: rows.len(),
            rows_dropped: 0,
        };

        for row in rows {
            match normalize_row(row, columns) {
                Some(record) => builder.push(record),
                None => stats.rows_dropped += 1,
            }
        }

        (builder.finish(), stats)
    }
}
