use std::fmt;

use crate::{Preferences, PreferencesError};

/// One side of a two-sided market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Company,
    Candidate,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Company => Self::Candidate,
            Self::Candidate => Self::Company,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Company => f.write_str("company"),
            Self::Candidate => f.write_str("candidate"),
        }
    }
}

/// A problem instance: the preferences of both sides, each of size `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    companies: Preferences,
    candidates: Preferences,
}

impl Market {
    /// Creates a market from both sides' preferences.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::SizeMismatch`] if the sides differ in size.
    pub fn new(companies: Preferences, candidates: Preferences) -> Result<Self, PreferencesError> {
        if companies.len() != candidates.len() {
            return Err(PreferencesError::SizeMismatch {
                companies: companies.len(),
                candidates: candidates.len(),
            });
        }

        Ok(Self {
            companies,
            candidates,
        })
    }

    /// Creates a market from raw lists, validating both sides.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is not a valid set of permutations or
    /// the sides differ in size.
    pub fn from_lists(
        companies: Vec<Vec<usize>>,
        candidates: Vec<Vec<usize>>,
    ) -> Result<Self, PreferencesError> {
        Self::new(Preferences::new(companies)?, Preferences::new(candidates)?)
    }

    /// Returns `N`, the number of agents on each side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn companies(&self) -> &Preferences {
        &self.companies
    }

    #[must_use]
    pub fn candidates(&self) -> &Preferences {
        &self.candidates
    }

    /// Returns the preferences held by agents on `side`.
    #[must_use]
    pub fn side(&self, side: Side) -> &Preferences {
        match side {
            Side::Company => &self.companies,
            Side::Candidate => &self.candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unequal_sides() {
        let err = Market::from_lists(vec![vec![0, 1], vec![1, 0]], vec![vec![0]]).unwrap_err();
        assert_eq!(
            err,
            PreferencesError::SizeMismatch {
                companies: 2,
                candidates: 1
            }
        );
    }

    #[test]
    fn side_selects_preferences() {
        let market =
            Market::from_lists(vec![vec![0, 1], vec![1, 0]], vec![vec![1, 0], vec![1, 0]])
                .expect("valid market");

        assert_eq!(market.size(), 2);
        assert_eq!(market.side(Side::Company).list(1), &[1, 0]);
        assert_eq!(market.side(Side::Candidate).list(0), &[1, 0]);
        assert_eq!(Side::Company.opposite(), Side::Candidate);
    }
}
