// src/progress.rs
/// Progress reporting for the page fetcher.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages that will be fetched.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page fetched.
    fn item_done(&mut self, _url: &str) {}

    /// One page failed; the batch carries on.
    fn item_failed(&mut self, _url: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
