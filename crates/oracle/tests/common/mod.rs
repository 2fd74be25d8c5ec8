//! Reference and deliberately flawed matchers used as oracle fixtures.

#![allow(dead_code)]

use std::collections::VecDeque;

use stable_oracle::{Hire, Offer, PreferenceGenerator, Preferences, Run};

/// Installs a test-friendly subscriber so oracle logs show up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Deferred acceptance where `proposers` propose and `receivers` decide.
///
/// Proposers walk `proposers` front to back, so passing reversed lists
/// yields a run that proposes out of preference order.
fn deferred_acceptance(
    proposers: &[Vec<usize>],
    receivers: &Preferences,
    from_company: bool,
) -> (Vec<Offer>, Vec<Option<usize>>) {
    let n = proposers.len();
    let mut next_choice = vec![0; n];
    let mut held: Vec<Option<usize>> = vec![None; n];
    let mut free: Vec<usize> = (0..n).rev().collect();
    let mut trace = Vec::new();

    while let Some(proposer) = free.pop() {
        let target = proposers[proposer][next_choice[proposer]];
        next_choice[proposer] += 1;
        trace.push(Offer {
            from: proposer,
            to: target,
            from_company,
        });

        match held[target] {
            None => held[target] = Some(proposer),
            Some(current) if receivers.prefers(target, proposer, current) => {
                held[target] = Some(proposer);
                free.push(current);
            }
            Some(_) => free.push(proposer),
        }
    }

    (trace, held)
}

/// Correct company-proposing deferred acceptance.
pub fn company_proposing(companies: &Preferences, candidates: &Preferences) -> Run {
    let lists = companies.clone().into_inner();
    let (trace, employer) = deferred_acceptance(&lists, candidates, true);
    let out = employer
        .iter()
        .enumerate()
        .filter_map(|(candidate, company)| company.map(|company| Hire::new(company, candidate)))
        .collect();
    Run::new(trace, out)
}

/// Correct candidate-proposing deferred acceptance.
pub fn candidate_proposing(companies: &Preferences, candidates: &Preferences) -> Run {
    let lists = candidates.clone().into_inner();
    let (trace, hired) = deferred_acceptance(&lists, companies, false);
    let out = hired
        .iter()
        .enumerate()
        .filter_map(|(company, candidate)| candidate.map(|candidate| Hire::new(company, candidate)))
        .collect();
    Run::new(trace, out)
}

/// Correct stable matcher: the company-optimal stable matching.
pub fn stable_matching(companies: &Preferences, candidates: &Preferences) -> Vec<Hire> {
    company_proposing(companies, candidates).out
}

/// Pairs company `i` with candidate `i`, ignoring preferences.
pub fn identity_matching(companies: &Preferences, _candidates: &Preferences) -> Vec<Hire> {
    (0..companies.len()).map(|i| Hire::new(i, i)).collect()
}

/// Gives every company its first choice, hiring some candidates twice.
pub fn first_choices(companies: &Preferences, _candidates: &Preferences) -> Vec<Hire> {
    companies
        .iter()
        .enumerate()
        .map(|(company, list)| Hire::new(company, list[0]))
        .collect()
}

/// Returns a stable matching with its last hire missing.
pub fn drops_last_hire(companies: &Preferences, candidates: &Preferences) -> Vec<Hire> {
    let mut out = stable_matching(companies, candidates);
    out.pop();
    out
}

/// Returns a stable matching whose last hire names a nonexistent candidate.
pub fn last_hire_out_of_range(companies: &Preferences, candidates: &Preferences) -> Vec<Hire> {
    let mut out = stable_matching(companies, candidates);
    if let Some(last) = out.last_mut() {
        last.candidate = companies.len();
    }
    out
}

/// Deferred acceptance with companies walking their lists bottom-up.
pub fn reversed_proposals(companies: &Preferences, candidates: &Preferences) -> Run {
    let lists: Vec<Vec<usize>> = companies
        .iter()
        .map(|list| list.iter().rev().copied().collect())
        .collect();
    let (trace, employer) = deferred_acceptance(&lists, candidates, true);
    let out = employer
        .iter()
        .enumerate()
        .filter_map(|(candidate, company)| company.map(|company| Hire::new(company, candidate)))
        .collect();
    Run::new(trace, out)
}

/// A correct trace reported alongside a matching with two candidates swapped.
pub fn misreported_out(companies: &Preferences, candidates: &Preferences) -> Run {
    let mut run = company_proposing(companies, candidates);
    let first = run.out[0].candidate;
    run.out[0].candidate = run.out[1].candidate;
    run.out[1].candidate = first;
    run
}

/// A correct matching reported with the final offer left out of the trace.
pub fn truncated_trace(companies: &Preferences, candidates: &Preferences) -> Run {
    let mut run = company_proposing(companies, candidates);
    run.trace.pop();
    run
}

/// A correct run whose first offer is repeated immediately.
pub fn repeats_first_offer(companies: &Preferences, candidates: &Preferences) -> Run {
    let mut run = company_proposing(companies, candidates);
    let first = run.trace[0];
    run.trace.insert(0, first);
    run
}

/// Serves preference lists from a fixed queue, companies then candidates.
pub struct Scripted {
    lists: VecDeque<Vec<Vec<usize>>>,
}

impl Scripted {
    pub fn new(markets: Vec<(Vec<Vec<usize>>, Vec<Vec<usize>>)>) -> Self {
        let lists = markets
            .into_iter()
            .flat_map(|(companies, candidates)| [companies, candidates])
            .collect();
        Self { lists }
    }
}

impl PreferenceGenerator for Scripted {
    fn generate(&mut self, _n: usize) -> Vec<Vec<usize>> {
        self.lists.pop_front().unwrap_or_default()
    }
}

/// Companies `[[0,1,2],[1,0,2],[0,1,2]]`, every candidate ranks `[0,1,2]`.
pub fn three_agent_lists() -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    (
        vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 1, 2]],
        vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 1, 2]],
    )
}
