//! Reference replay of a deferred-acceptance proposal trace.
//!
//! # Semantics
//!
//! Every agent starts unmatched. Offers are delivered strictly in trace order,
//! and for each offer:
//!
//! 1. The target is appended to the proposer's history, before any decision,
//!    so a rejected offer still counts as made.
//! 2. The recipient decides. An unmatched recipient accepts. A matched
//!    recipient accepts only a proposer it ranks strictly above its current
//!    partner, and that displaced partner becomes unmatched.
//! 3. On acceptance the proposer is set to match the recipient,
//!    unconditionally. Its previous partner, if any, is not told.
//!
//! Step 3 is the receiving side deciding for both: the proposer has no say,
//! and it may be displaced later by a better offer to the same recipient.
//!
//! The replay stops after the last offer. It never proposes on its own, so
//! an incomplete trace yields an incomplete matching instead of a repaired one.

mod agent;

pub use agent::AgentState;

use stable_oracle_core::{Market, Offer, Side};
use tracing::trace;

use crate::Violation;

use agent::{Response, receive};

/// Final per-agent state after replaying a trace.
///
/// Each side is an arena indexed by agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    companies: Vec<AgentState>,
    candidates: Vec<AgentState>,
}

impl Replay {
    fn new(size: usize) -> Self {
        Self {
            companies: vec![AgentState::default(); size],
            candidates: vec![AgentState::default(); size],
        }
    }

    /// Returns the states of every agent on `side`.
    #[must_use]
    pub fn agents(&self, side: Side) -> &[AgentState] {
        match side {
            Side::Company => &self.companies,
            Side::Candidate => &self.candidates,
        }
    }

    /// Returns the replayed partner of `agent`, or `None` if it ended unmatched
    /// or does not exist.
    #[must_use]
    pub fn partner(&self, side: Side, agent: usize) -> Option<usize> {
        self.agents(side).get(agent)?.partner
    }

    /// Returns the targets `agent` proposed to, in trace order.
    #[must_use]
    pub fn history(&self, side: Side, agent: usize) -> &[usize] {
        self.agents(side)
            .get(agent)
            .map_or(&[], |state| state.proposals.as_slice())
    }

    /// Splits the arenas into (proposing side, receiving side).
    fn split_mut(&mut self, proposer: Side) -> (&mut [AgentState], &mut [AgentState]) {
        match proposer {
            Side::Company => (
                self.companies.as_mut_slice(),
                self.candidates.as_mut_slice(),
            ),
            Side::Candidate => (
                self.candidates.as_mut_slice(),
                self.companies.as_mut_slice(),
            ),
        }
    }

    fn deliver(&mut self, market: &Market, offer: Offer) -> Response {
        let side = offer.proposer_side();
        let (proposers, recipients) = self.split_mut(side);

        proposers[offer.from].proposals.push(offer.to);

        let response = receive(
            &mut recipients[offer.to],
            market.side(side.opposite()),
            offer.to,
            offer.from,
        );

        if let Response::Accepted { displaced } = response {
            if let Some(previous) = displaced {
                proposers[previous].partner = None;
            }
            proposers[offer.from].partner = Some(offer.to);
        }

        response
    }
}

/// Replays `trace` against `market`, returning every agent's final state.
///
/// # Errors
///
/// Returns [`Violation::TraceOutOfRange`] if an offer names an agent outside
/// `0..N`. Offers before it have no observable effect, since no partial
/// replay is returned.
pub fn replay(market: &Market, trace: &[Offer]) -> Result<Replay, Violation> {
    let size = market.size();
    let mut state = Replay::new(size);

    for (position, &offer) in trace.iter().enumerate() {
        let side = offer.proposer_side();
        for (side, agent) in [(side, offer.from), (side.opposite(), offer.to)] {
            if agent >= size {
                return Err(Violation::TraceOutOfRange {
                    position,
                    side,
                    agent,
                    size,
                });
            }
        }

        let response = state.deliver(market, offer);
        trace!(
            position,
            proposer = %side,
            from = offer.from,
            to = offer.to,
            accepted = matches!(response, Response::Accepted { .. }),
            "replayed offer"
        );
    }

    Ok(state)
}
