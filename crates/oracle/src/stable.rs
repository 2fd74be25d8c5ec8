//! Part A: does the matcher return a valid, stable matching?

use stable_oracle_checks::check_stability;
use stable_oracle_core::{Observer, StableMatcher};
use tracing::debug;

use crate::{
    Action, Config, Error, Event, Report,
    generate::{PreferenceGenerator, UniformGenerator},
    run::{Outcome, run},
};

/// Checks `matcher` against `config.trials()` generated markets.
///
/// For each trial, a market of size `config.size()` is drawn from
/// `generator`, the matcher is called on it, and its output must pass
/// [`check_stability`]. The observer receives an [`Event`] per trial.
///
/// # Errors
///
/// Returns [`Error::Violation`] for the first rejected output,
/// [`Error::Matcher`] if the matcher itself fails, or
/// [`Error::Preferences`] if the generator produces invalid lists.
pub fn check_stable_matcher<M, G, Obs>(
    matcher: &M,
    generator: &mut G,
    config: &Config,
    observer: Obs,
) -> Result<Report, Error>
where
    M: StableMatcher + ?Sized,
    G: PreferenceGenerator + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    run(generator, config, observer, |trial, market| {
        let matching = matcher
            .call(market.companies(), market.candidates())
            .map_err(|err| Error::matcher(trial, err))?;
        debug!(trial, pairings = ?matching, "matcher returned");

        let verdict = check_stability(market, &matching);
        Ok(Outcome {
            matching,
            trace: None,
            verdict,
        })
    })
}

/// Checks `matcher` without observer support.
///
/// Markets come from a [`UniformGenerator`] seeded with `config.seed()`, or
/// from a fresh seed if none is set; the seed used is in the [`Report`].
///
/// # Errors
///
/// See [`check_stable_matcher`].
pub fn check_stable_matcher_unobserved<M>(matcher: &M, config: &Config) -> Result<Report, Error>
where
    M: StableMatcher + ?Sized,
{
    let mut generator = UniformGenerator::for_config(config);
    check_stable_matcher(matcher, &mut generator, config, ())
}
