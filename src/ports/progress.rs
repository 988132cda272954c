/// Port for transient progress feedback around slow catalog queries.
pub trait ProgressReporter {
    /// Show `message` as in-progress work.
    fn start(&self, message: &str);

    /// Mark the current work as done with `message`.
    fn succeed(&self, message: &str);

    /// Mark the current work as failed with `message`.
    fn fail(&self, message: &str);

    /// Remove the indicator without a final message.
    fn clear(&self);
}

/// Reporter that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _message: &str) {}

    fn succeed(&self, _message: &str) {}

    fn fail(&self, _message: &str) {}

    fn clear(&self) {}
}
