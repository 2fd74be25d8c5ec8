use stable_oracle_checks::Violation;
use stable_oracle_core::{Hire, Market, Observer, Offer};
use tracing::{debug, info, warn};

use crate::{
    Action, Config, Counterexample, Error, Event, Report, Status,
    generate::{PreferenceGenerator, generate_market},
};

/// What one trial produced: the matcher's output and the checker's verdict.
pub(crate) struct Outcome {
    pub(crate) matching: Vec<Hire>,
    pub(crate) trace: Option<Vec<Offer>>,
    pub(crate) verdict: Result<(), Violation>,
}

/// Core trial loop shared by both oracles.
///
/// Each trial generates a fresh market and hands it to `trial`, which calls
/// the matcher and runs the appropriate checker. The loop stops at the first
/// violation, at the first matcher or generator error, or when the observer
/// asks it to.
pub(crate) fn run<G, Obs, F>(
    generator: &mut G,
    config: &Config,
    mut observer: Obs,
    mut trial: F,
) -> Result<Report, Error>
where
    G: PreferenceGenerator + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
    F: FnMut(usize, &Market) -> Result<Outcome, Error>,
{
    let seed = generator.seed();
    info!(
        trials = config.trials(),
        size = config.size(),
        ?seed,
        "starting oracle run"
    );

    for index in 0..config.trials() {
        let market = generate_market(generator, config.size())?;
        debug!(
            trial = index,
            companies = ?market.companies().as_ref(),
            candidates = ?market.candidates().as_ref(),
            "generated market"
        );

        let Outcome {
            matching,
            trace,
            verdict,
        } = trial(index, &market)?;

        match verdict {
            Ok(()) => {
                let event = Event::Passed {
                    trial: index,
                    market: &market,
                    matching: &matching,
                    trace: trace.as_deref(),
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    info!(trials = index + 1, "oracle run stopped by observer");
                    return Ok(Report {
                        status: Status::StoppedByObserver,
                        trials: index + 1,
                        seed,
                    });
                }
            }
            Err(violation) => {
                warn!(trial = index, ?seed, %violation, "matcher output rejected");
                observer.observe(&Event::Violated {
                    trial: index,
                    market: &market,
                    violation: &violation,
                });
                return Err(Error::Violation {
                    trial: index,
                    violation,
                    counterexample: Box::new(Counterexample {
                        market,
                        matching,
                        trace,
                    }),
                });
            }
        }
    }

    info!(trials = config.trials(), "oracle run passed");
    Ok(Report {
        status: Status::Completed,
        trials: config.trials(),
        seed,
    })
}
