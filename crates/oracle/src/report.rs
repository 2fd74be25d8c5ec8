/// Indicates how an oracle run ended without a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every configured trial passed.
    Completed,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an oracle run in which no violation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// How the run ended.
    pub status: Status,

    /// Number of trials that ran and passed.
    pub trials: usize,

    /// Seed that reproduces the generated markets, when the generator has one.
    pub seed: Option<u64>,
}
