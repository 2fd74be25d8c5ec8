use thiserror::Error;

/// Errors that can occur when validating preference lists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreferencesError {
    #[error("expected {expected} preference lists, got {len}")]
    Count { len: usize, expected: usize },

    #[error("agent {agent} ranks {len} agents, expected {expected}")]
    Length {
        agent: usize,
        len: usize,
        expected: usize,
    },

    #[error("agent {agent} ranks agent {target}, which is outside 0..{size}")]
    OutOfRange {
        agent: usize,
        target: usize,
        size: usize,
    },

    #[error("agent {agent} ranks agent {target} more than once")]
    Repeated { agent: usize, target: usize },

    #[error("companies rank {companies} agents but candidates rank {candidates}")]
    SizeMismatch { companies: usize, candidates: usize },
}

/// The preference lists of every agent on one side of a market.
///
/// List `i` belongs to agent `i` and ranks every agent on the opposite side,
/// most preferred first. Construction guarantees that each list is a
/// permutation of `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    lists: Vec<Vec<usize>>,
}

impl Preferences {
    /// Creates validated preferences from raw lists.
    ///
    /// # Errors
    ///
    /// Returns an error if any list has the wrong length or is not a
    /// permutation of `0..lists.len()`.
    pub fn new(lists: Vec<Vec<usize>>) -> Result<Self, PreferencesError> {
        let size = lists.len();

        for (agent, list) in lists.iter().enumerate() {
            if list.len() != size {
                return Err(PreferencesError::Length {
                    agent,
                    len: list.len(),
                    expected: size,
                });
            }

            let mut seen = vec![false; size];
            for &target in list {
                let slot = seen
                    .get_mut(target)
                    .ok_or(PreferencesError::OutOfRange {
                        agent,
                        target,
                        size,
                    })?;
                if *slot {
                    return Err(PreferencesError::Repeated { agent, target });
                }
                *slot = true;
            }
        }

        Ok(Self { lists })
    }

    /// Returns the number of agents on this side.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if there are no agents on this side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the preference list of `agent`.
    ///
    /// # Panics
    ///
    /// Panics if `agent >= self.len()`.
    #[must_use]
    pub fn list(&self, agent: usize) -> &[usize] {
        &self.lists[agent]
    }

    /// Returns the position of `target` in `agent`'s list (0 is most preferred).
    ///
    /// Returns `None` if either index is out of range.
    #[must_use]
    pub fn rank_of(&self, agent: usize, target: usize) -> Option<usize> {
        self.lists
            .get(agent)?
            .iter()
            .position(|&ranked| ranked == target)
    }

    /// Returns true if `agent` strictly prefers `a` over `b`.
    ///
    /// Unranked targets lose to ranked ones.
    #[must_use]
    pub fn prefers(&self, agent: usize, a: usize, b: usize) -> bool {
        match (self.rank_of(agent, a), self.rank_of(agent, b)) {
            (Some(rank_a), Some(rank_b)) => rank_a < rank_b,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Iterates over the lists in agent order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lists.iter().map(Vec::as_slice)
    }

    /// Consumes the preferences, returning the raw lists.
    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.lists
    }
}

impl TryFrom<Vec<Vec<usize>>> for Preferences {
    type Error = PreferencesError;

    fn try_from(lists: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        Self::new(lists)
    }
}

impl AsRef<[Vec<usize>]> for Preferences {
    fn as_ref(&self) -> &[Vec<usize>] {
        &self.lists
    }
}
