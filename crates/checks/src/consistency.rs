//! Trace consistency: does a claimed proposal trace explain the claimed
//! matching, and does it look like deferred acceptance?


use std::collections::HashSet;

use stable_oracle_core::{Hire, Market, Offer, Side};

use crate::{Violation, replay::replay, structure::check_structure};

/// Checks `trace` against `matching` for `market`.
///
/// # Procedure
///
/// 1. Structural checks on `matching` (see [`check_structure`]).
/// 2. Replay `trace` (see [`replay`]).
/// 3. Every hire `(c, d)` must be mutual in the replayed state: company `c`
///    ends matched to `d` and candidate `d` ends matched to `c`.
/// 4. Every agent, companies first, must have proposed in exactly its
///    preference order starting from the top: no more proposals than
///    ranked agents, no repeated target, and proposal `i` is rank `i`.
///
/// # Errors
///
/// Returns the first violation found, in the order above.
pub fn check_trace_consistency(
    market: &Market,
    matching: &[Hire],
    trace: &[Offer],
) -> Result<(), Violation> {
    check_structure(market, matching)?;

    let replayed = replay(market, trace)?;

    for &Hire { company, candidate } in matching {
        let company_partner = replayed.partner(Side::Company, company);
        let candidate_partner = replayed.partner(Side::Candidate, candidate);
        if company_partner != Some(candidate) || candidate_partner != Some(company) {
            return Err(Violation::TraceMismatch {
                company,
                candidate,
                company_partner,
                candidate_partner,
            });
        }
    }

    for side in [Side::Company, Side::Candidate] {
        let prefs = market.side(side);
        for (agent, state) in replayed.agents(side).iter().enumerate() {
            check_proposal_order(side, agent, &state.proposals, prefs.list(agent))?;
        }
    }

    Ok(())
}

/// Checks that `history` is exactly the first `history.len()` entries of `prefs`.
fn check_proposal_order(
    side: Side,
    agent: usize,
    history: &[usize],
    prefs: &[usize],
) -> Result<(), Violation> {
    if history.len() > prefs.len() {
        return Err(Violation::TraceLengthViolation {
            side,
            agent,
            proposals: history.len(),
            ranked: prefs.len(),
        });
    }

    let mut seen = HashSet::with_capacity(history.len());
    if let Some(&target) = history.iter().find(|&&target| !seen.insert(target)) {
        return Err(Violation::TraceDuplicateProposal {
            side,
            agent,
            target,
        });
    }

    let mismatch = history
        .iter()
        .zip(prefs)
        .enumerate()
        .find(|(_, (actual, expected))| actual != expected);
    if let Some((position, (&actual, &expected))) = mismatch {
        return Err(Violation::TraceOrderViolation {
            side,
            agent,
            position,
            expected,
            actual,
        });
    }

    Ok(())
}
