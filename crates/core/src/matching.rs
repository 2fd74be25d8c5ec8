use crate::Side;

/// A pairing of one company with one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hire {
    pub company: usize,
    pub candidate: usize,
}

impl Hire {
    /// Creates a new hire.
    #[must_use]
    pub fn new(company: usize, candidate: usize) -> Self {
        Self { company, candidate }
    }

    /// Returns the agent of this hire on `side`.
    #[must_use]
    pub fn agent(&self, side: Side) -> usize {
        match side {
            Side::Company => self.company,
            Side::Candidate => self.candidate,
        }
    }
}

impl From<(usize, usize)> for Hire {
    fn from((company, candidate): (usize, usize)) -> Self {
        Self::new(company, candidate)
    }
}

/// A single proposal event in a trace.
///
/// `from` and `to` are indices on opposite sides; `from_company` tells which
/// side made the offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offer {
    pub from: usize,
    pub to: usize,
    pub from_company: bool,
}

impl Offer {
    /// An offer made by company `from` to candidate `to`.
    #[must_use]
    pub fn company(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            from_company: true,
        }
    }

    /// An offer made by candidate `from` to company `to`.
    #[must_use]
    pub fn candidate(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            from_company: false,
        }
    }

    /// Returns the side that made the offer.
    #[must_use]
    pub fn proposer_side(&self) -> Side {
        if self.from_company {
            Side::Company
        } else {
            Side::Candidate
        }
    }
}

/// The output of a traced matcher: the claimed proposal trace and the
/// resulting matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub trace: Vec<Offer>,
    pub out: Vec<Hire>,
}

impl Run {
    #[must_use]
    pub fn new(trace: Vec<Offer>, out: Vec<Hire>) -> Self {
        Self { trace, out }
    }
}
