use thiserror::Error;

use stable_oracle_core::Side;

/// A reason to reject a matcher's output.
///
/// Every variant is terminal: the first violation found ends the check and
/// carries the indices needed to reproduce it by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("matching has {actual} hires but there are {expected} {side}s")]
    SizeMismatch {
        side: Side,
        expected: usize,
        actual: usize,
    },

    #[error("{side} {agent} is assigned more than once")]
    DuplicateAssignment { side: Side, agent: usize },

    #[error("{side} index {agent} is outside 0..{size}")]
    OutOfRangeIndex {
        side: Side,
        agent: usize,
        size: usize,
    },

    #[error(
        "unstable matching: company {company} (hired candidate {candidate}) and \
         candidate {preferred_candidate} (hired by company {rival_company}) prefer each other"
    )]
    BlockingPairFound {
        company: usize,
        candidate: usize,
        preferred_candidate: usize,
        rival_company: usize,
    },

    #[error(
        "trace does not produce hire ({company}, {candidate}): replay leaves company \
         {company} with {company_partner:?} and candidate {candidate} with {candidate_partner:?}"
    )]
    TraceMismatch {
        company: usize,
        candidate: usize,
        company_partner: Option<usize>,
        candidate_partner: Option<usize>,
    },

    #[error(
        "{side} {agent} makes {proposals} proposals but ranks only {ranked} agents, \
         so some proposal is repeated"
    )]
    TraceLengthViolation {
        side: Side,
        agent: usize,
        proposals: usize,
        ranked: usize,
    },

    #[error("{side} {agent} proposes to {target} more than once")]
    TraceDuplicateProposal {
        side: Side,
        agent: usize,
        target: usize,
    },

    #[error(
        "{side} {agent} makes proposal {position} to {actual}, but its preference \
         order requires {expected}"
    )]
    TraceOrderViolation {
        side: Side,
        agent: usize,
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("offer {position} in the trace names {side} {agent}, outside 0..{size}")]
    TraceOutOfRange {
        position: usize,
        side: Side,
        agent: usize,
        size: usize,
    },
}

/// The kind of a [`Violation`], without its indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    SizeMismatch,
    DuplicateAssignment,
    OutOfRangeIndex,
    BlockingPairFound,
    TraceMismatch,
    TraceLengthViolation,
    TraceDuplicateProposal,
    TraceOrderViolation,
    TraceOutOfRange,
}

impl Violation {
    /// Returns the kind of this violation.
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::SizeMismatch { .. } => ViolationKind::SizeMismatch,
            Self::DuplicateAssignment { .. } => ViolationKind::DuplicateAssignment,
            Self::OutOfRangeIndex { .. } => ViolationKind::OutOfRangeIndex,
            Self::BlockingPairFound { .. } => ViolationKind::BlockingPairFound,
            Self::TraceMismatch { .. } => ViolationKind::TraceMismatch,
            Self::TraceLengthViolation { .. } => ViolationKind::TraceLengthViolation,
            Self::TraceDuplicateProposal { .. } => ViolationKind::TraceDuplicateProposal,
            Self::TraceOrderViolation { .. } => ViolationKind::TraceOrderViolation,
            Self::TraceOutOfRange { .. } => ViolationKind::TraceOutOfRange,
        }
    }
}
