// src/solver/progress.rs

/// Observer for solver progress.
///
/// Purely advisory: implementations receive the total number of
/// `(period, state)` cells up front, one signal per finished cell, and a
/// completion signal. Nothing an implementation does can influence the
/// solve. `Send + Sync` because the state sweep notifies from worker
/// threads.
pub trait ProgressSink: Send + Sync {
    /// Announces the total number of work units before the solve starts.
    fn begin(&self, total: u64);

    /// Reports one finished `(period, state)` cell.
    fn advance(&self);

    /// Reports the end of the solve.
    fn finish(&self);
}

/// Default observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn begin(&self, _total: u64) {}

    fn advance(&self) {}

    fn finish(&self) {}
}
