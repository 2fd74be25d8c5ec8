use std::convert::Infallible;

use crate::{Hire, Preferences, Run};

/// A stable matching implementation under test.
///
/// Given company and candidate preferences, a matcher returns the hires it
/// claims form a stable matching. Nothing is assumed about the result: the
/// oracle exists to find out whether it is valid.
///
/// Closures of the form `Fn(&Preferences, &Preferences) -> Vec<Hire>`
/// implement this trait with an [`Infallible`] error.
pub trait StableMatcher {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes a matching for the given preferences.
    ///
    /// # Errors
    ///
    /// Each matcher defines its own `Error` type for failures it can report.
    fn call(
        &self,
        companies: &Preferences,
        candidates: &Preferences,
    ) -> Result<Vec<Hire>, Self::Error>;
}

/// A stable matching implementation that also reports its proposal trace.
///
/// Closures of the form `Fn(&Preferences, &Preferences) -> Run` implement
/// this trait with an [`Infallible`] error.
pub trait TracedMatcher {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes a matching and the ordered offers that produced it.
    ///
    /// # Errors
    ///
    /// Each matcher defines its own `Error` type for failures it can report.
    fn call(&self, companies: &Preferences, candidates: &Preferences) -> Result<Run, Self::Error>;
}

impl<F> StableMatcher for F
where
    F: Fn(&Preferences, &Preferences) -> Vec<Hire>,
{
    type Error = Infallible;

    fn call(
        &self,
        companies: &Preferences,
        candidates: &Preferences,
    ) -> Result<Vec<Hire>, Self::Error> {
        Ok(self(companies, candidates))
    }
}

impl<F> TracedMatcher for F
where
    F: Fn(&Preferences, &Preferences) -> Run,
{
    type Error = Infallible;

    fn call(&self, companies: &Preferences, candidates: &Preferences) -> Result<Run, Self::Error> {
        Ok(self(companies, candidates))
    }
}
