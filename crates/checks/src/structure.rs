//! Structural validation of a claimed matching.
//!
//! These checks are independent of stability: a matching must be a bijection
//! between the `N` companies and the `N` candidates before it is worth asking
//! whether it is stable.

use std::collections::HashSet;

use stable_oracle_core::{Hire, Market, Side};

use crate::Violation;

/// Checks that `matching` pairs every company with exactly one candidate.
///
/// The checks run in a fixed order, and the first failure is returned:
///
/// 1. The matching has `N` hires, compared against each side in turn.
/// 2. No candidate, then no company, appears more than once.
/// 3. Every candidate index, then every company index, lies in `0..N`.
///
/// Every hire is inspected, including the last.
///
/// # Errors
///
/// Returns [`Violation::SizeMismatch`], [`Violation::DuplicateAssignment`],
/// or [`Violation::OutOfRangeIndex`].
pub fn check_structure(market: &Market, matching: &[Hire]) -> Result<(), Violation> {
    for side in [Side::Company, Side::Candidate] {
        let expected = market.side(side).len();
        if matching.len() != expected {
            return Err(Violation::SizeMismatch {
                side,
                expected,
                actual: matching.len(),
            });
        }
    }

    for side in [Side::Candidate, Side::Company] {
        check_unique(matching, side)?;
    }

    for side in [Side::Candidate, Side::Company] {
        check_in_range(matching, side, market.size())?;
    }

    Ok(())
}

fn check_unique(matching: &[Hire], side: Side) -> Result<(), Violation> {
    let mut seen = HashSet::with_capacity(matching.len());
    for hire in matching {
        let agent = hire.agent(side);
        if !seen.insert(agent) {
            return Err(Violation::DuplicateAssignment { side, agent });
        }
    }
    Ok(())
}

fn check_in_range(matching: &[Hire], side: Side, size: usize) -> Result<(), Violation> {
    match matching.iter().map(|hire| hire.agent(side)).find(|&agent| agent >= size) {
        Some(agent) => Err(Violation::OutOfRangeIndex { side, agent, size }),
        None => Ok(()),
    }
}

/// Maps each agent on `side` to its partner in an already validated matching.
///
/// Slot `i` holds the partner of agent `i`. Callers must run
/// [`check_structure`] first; out-of-range agents are skipped.
pub(crate) fn partners(matching: &[Hire], side: Side, size: usize) -> Vec<Option<usize>> {
    let mut partners = vec![None; size];
    for hire in matching {
        if let Some(slot) = partners.get_mut(hire.agent(side)) {
            *slot = Some(hire.agent(side.opposite()));
        }
    }
    partners
}
