// src/progress.rs
/// Lightweight progress reporting for the long-running enrichment loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of rows that will be visited.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one book row has been enriched (skipped rows don't count).
    fn item_done(&mut self, _row: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
