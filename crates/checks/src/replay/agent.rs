use stable_oracle_core::Preferences;

/// Replay state for a single agent.
///
/// `partner` is `None` while the agent is unmatched. `proposals` lists every
/// agent this one has proposed to, in trace order, whether or not the offer
/// was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentState {
    pub partner: Option<usize>,
    pub proposals: Vec<usize>,
}

impl AgentState {
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.partner.is_some()
    }
}

/// How a recipient answered an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Response {
    /// The offer was accepted, displacing the recipient's previous partner if any.
    Accepted { displaced: Option<usize> },
    Rejected,
}

/// Delivers an offer from `proposer` to the agent `recipient`, whose state is
/// `state` and whose ranking lives in `prefs`.
///
/// An unmatched recipient always accepts. A matched recipient accepts only a
/// proposer it ranks strictly above its current partner.
pub(super) fn receive(
    state: &mut AgentState,
    prefs: &Preferences,
    recipient: usize,
    proposer: usize,
) -> Response {
    match state.partner {
        None => {
            state.partner = Some(proposer);
            Response::Accepted { displaced: None }
        }
        Some(current) if prefs.prefers(recipient, proposer, current) => {
            state.partner = Some(proposer);
            Response::Accepted {
                displaced: Some(current),
            }
        }
        Some(_) => Response::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences {
        Preferences::new(vec![vec![2, 0, 1], vec![0, 1, 2], vec![0, 1, 2]]).expect("valid lists")
    }

    #[test]
    fn unmatched_recipient_accepts() {
        let mut state = AgentState::default();
        let response = receive(&mut state, &prefs(), 0, 1);

        assert_eq!(response, Response::Accepted { displaced: None });
        assert_eq!(state.partner, Some(1));
    }

    #[test]
    fn better_proposer_displaces_partner() {
        let mut state = AgentState {
            partner: Some(0),
            proposals: Vec::new(),
        };
        let response = receive(&mut state, &prefs(), 0, 2);

        assert_eq!(response, Response::Accepted { displaced: Some(0) });
        assert_eq!(state.partner, Some(2));
    }

    #[test]
    fn worse_proposer_is_rejected() {
        let mut state = AgentState {
            partner: Some(0),
            proposals: Vec::new(),
        };
        let response = receive(&mut state, &prefs(), 0, 1);

        assert_eq!(response, Response::Rejected);
        assert_eq!(state.partner, Some(0));
    }

    #[test]
    fn repeat_proposal_from_partner_is_rejected() {
        let mut state = AgentState {
            partner: Some(1),
            proposals: Vec::new(),
        };
        assert_eq!(receive(&mut state, &prefs(), 1, 1), Response::Rejected);
        assert!(state.is_matched());
    }
}
