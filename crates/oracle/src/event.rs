use stable_oracle_checks::Violation;
use stable_oracle_core::{Hire, Market, Offer};

/// Events emitted by the oracle, one per trial.
///
/// Observers receive [`Event::Passed`] after each trial that passes and may
/// return [`Action::StopEarly`](crate::Action::StopEarly). On the first
/// violation they receive [`Event::Violated`]; the run ends with an error
/// whatever the observer returns.
#[derive(Debug)]
pub enum Event<'a> {
    /// The matcher's output passed every check.
    Passed {
        /// Zero-based trial number.
        trial: usize,

        /// The generated market.
        market: &'a Market,

        /// The matching the matcher returned.
        matching: &'a [Hire],

        /// The trace the matcher returned, for traced matchers.
        trace: Option<&'a [Offer]>,
    },

    /// The matcher's output was rejected.
    Violated {
        /// Zero-based trial number.
        trial: usize,

        /// The generated market.
        market: &'a Market,

        /// Why the output was rejected.
        violation: &'a Violation,
    },
}

impl Event<'_> {
    /// Returns the trial number.
    #[must_use]
    pub fn trial(&self) -> usize {
        match self {
            Self::Passed { trial, .. } | Self::Violated { trial, .. } => *trial,
        }
    }

    /// Returns the generated market for this trial.
    #[must_use]
    pub fn market(&self) -> &Market {
        match self {
            Self::Passed { market, .. } | Self::Violated { market, .. } => market,
        }
    }
}
