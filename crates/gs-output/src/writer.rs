//! The `ResultWriter` trait implemented by table backends.

use crate::{OutputResult, ResultRecord};

/// Sink for result records.
pub trait ResultWriter {
    /// Append a batch of records, in order.
    fn write_records(&mut self, rows: &[ResultRecord]) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
