//! Checkers for stable matching implementations.
//!
//! Each checker is a pure function over a [`Market`] and an implementation's
//! claimed output, returning the first [`Violation`] it finds:
//!
//! - [`check_structure`]: the matching is a bijection between companies and
//!   candidates
//! - [`check_stability`]: the matching has no blocking pair
//! - [`check_trace_consistency`]: a proposal trace replays to the claimed
//!   matching, and every agent proposes in preference order
//!
//! [`replay`] is the reference deferred-acceptance replay used by the trace
//! checker, exposed for callers that want the per-agent state directly.
//!
//! [`Market`]: stable_oracle_core::Market

mod consistency;
mod replay;
mod stability;
mod structure;
mod violation;

#[cfg(test)]
mod test_utils;

pub use consistency::check_trace_consistency;
pub use replay::{AgentState, Replay, replay};
pub use stability::check_stability;
pub use structure::check_structure;
pub use violation::{Violation, ViolationKind};
