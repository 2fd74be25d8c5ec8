//! Part B: does the matcher's proposal trace follow deferred acceptance and
//! explain the matching it returns?

use stable_oracle_checks::check_trace_consistency;
use stable_oracle_core::{Observer, Run, TracedMatcher};
use tracing::debug;

use crate::{
    Action, Config, Error, Event, Report,
    generate::{PreferenceGenerator, UniformGenerator},
    run::{Outcome, run},
};

/// Checks `matcher` and its traces against `config.trials()` generated markets.
///
/// For each trial the matcher returns a trace and a matching, and the pair
/// must pass [`check_trace_consistency`]: the matching is structurally valid,
/// replaying the trace produces exactly that matching, and every agent
/// proposes in its preference order.
///
/// # Errors
///
/// Returns [`Error::Violation`] for the first rejected output,
/// [`Error::Matcher`] if the matcher itself fails, or
/// [`Error::Preferences`] if the generator produces invalid lists.
pub fn check_traced_matcher<M, G, Obs>(
    matcher: &M,
    generator: &mut G,
    config: &Config,
    observer: Obs,
) -> Result<Report, Error>
where
    M: TracedMatcher + ?Sized,
    G: PreferenceGenerator + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    run(generator, config, observer, |trial, market| {
        let Run { trace, out } = matcher
            .call(market.companies(), market.candidates())
            .map_err(|err| Error::matcher(trial, err))?;
        debug!(trial, ?trace, pairings = ?out, "matcher returned");

        let verdict = check_trace_consistency(market, &out, &trace);
        Ok(Outcome {
            matching: out,
            trace: Some(trace),
            verdict,
        })
    })
}

/// Checks `matcher` and its traces without observer support.
///
/// Markets come from a [`UniformGenerator`] seeded with `config.seed()`, or
/// from a fresh seed if none is set; the seed used is in the [`Report`].
///
/// # Errors
///
/// See [`check_traced_matcher`].
pub fn check_traced_matcher_unobserved<M>(matcher: &M, config: &Config) -> Result<Report, Error>
where
    M: TracedMatcher + ?Sized,
{
    let mut generator = UniformGenerator::for_config(config);
    check_traced_matcher(matcher, &mut generator, config, ())
}
