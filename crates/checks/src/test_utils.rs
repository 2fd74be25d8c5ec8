use stable_oracle_core::{Hire, Market, Offer, Run};

/// Company-proposing deferred acceptance that records every offer.
pub(crate) fn deferred_acceptance(market: &Market) -> Run {
    let n = market.size();
    let mut next_choice = vec![0; n];
    let mut employer: Vec<Option<usize>> = vec![None; n];
    let mut free: Vec<usize> = (0..n).rev().collect();
    let mut trace = Vec::new();

    while let Some(company) = free.pop() {
        let candidate = market.companies().list(company)[next_choice[company]];
        next_choice[company] += 1;
        trace.push(Offer::company(company, candidate));

        match employer[candidate] {
            None => employer[candidate] = Some(company),
            Some(current) if market.candidates().prefers(candidate, company, current) => {
                employer[candidate] = Some(company);
                free.push(current);
            }
            Some(_) => free.push(company),
        }
    }

    let out = employer
        .iter()
        .enumerate()
        .filter_map(|(candidate, company)| company.map(|company| Hire::new(company, candidate)))
        .collect();

    Run::new(trace, out)
}
