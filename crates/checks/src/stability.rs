//! Blocking-pair detection for a finished matching.

use stable_oracle_core::{Hire, Market, Side};

use crate::{Violation, structure};

/// Checks that `matching` is a valid, stable matching for `market`.
///
/// Structural checks run first (see [`check_structure`]). Then, for each
/// hire `(c, d)` in order, every candidate `d'` that company `c` ranks above
/// `d` is examined: if `d'` in turn ranks `c` above its own employer `c'`,
/// then `(c, d')` is a blocking pair.
///
/// Cost is `O(N²)` rank comparisons per check.
///
/// # Errors
///
/// Returns the first structural violation, or
/// [`Violation::BlockingPairFound`] for the first blocking pair.
///
/// [`check_structure`]: crate::check_structure
pub fn check_stability(market: &Market, matching: &[Hire]) -> Result<(), Violation> {
    structure::check_structure(market, matching)?;

    let employer_of = structure::partners(matching, Side::Candidate, market.size());

    for &Hire { company, candidate } in matching {
        for &preferred_candidate in preferred_over(market.companies().list(company), candidate) {
            let Some(rival_company) = employer_of[preferred_candidate] else {
                continue;
            };

            let rivals_ahead =
                preferred_over(market.candidates().list(preferred_candidate), rival_company);
            if rivals_ahead.contains(&company) {
                return Err(Violation::BlockingPairFound {
                    company,
                    candidate,
                    preferred_candidate,
                    rival_company,
                });
            }
        }
    }

    Ok(())
}

/// Returns the prefix of `list` ranked strictly above `partner`.
fn preferred_over(list: &[usize], partner: usize) -> &[usize] {
    let end = list
        .iter()
        .position(|&ranked| ranked == partner)
        .unwrap_or(list.len());
    &list[..end]
}
