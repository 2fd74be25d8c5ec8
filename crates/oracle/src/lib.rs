//! A randomized correctness oracle for stable matching implementations.
//!
//! The oracle never computes a stable matching itself. It generates random
//! markets, hands them to the implementation under test, and checks what
//! comes back, stopping at the first counterexample.
//!
//! # Oracles
//!
//! - [`check_stable_matcher`] (Part A): the returned matching must be a
//!   valid bijection with no blocking pair.
//! - [`check_traced_matcher`] (Part B): the returned proposal trace must
//!   replay to the returned matching, and every agent must propose in its
//!   preference order, as deferred acceptance does.
//!
//! Both take a [`PreferenceGenerator`] and an [`Observer`]; the
//! `_unobserved` variants use a [`UniformGenerator`] built from the
//! [`Config`] seed and a no-op observer.
//!
//! # Example
//!
//! ```ignore
//! use stable_oracle::{Config, check_stable_matcher_unobserved};
//!
//! let config = Config::new(200, 8)?.with_seed(1);
//! let report = check_stable_matcher_unobserved(&my_matcher, &config)?;
//! assert_eq!(report.trials, 200);
//! ```

mod action;
mod config;
mod error;
mod event;
mod generate;
mod report;
mod run;
mod stable;
mod traced;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Counterexample, Error};
pub use event::Event;
pub use generate::{PreferenceGenerator, UniformGenerator, generate_market};
pub use report::{Report, Status};
pub use stable::{check_stable_matcher, check_stable_matcher_unobserved};
pub use traced::{check_traced_matcher, check_traced_matcher_unobserved};

pub use stable_oracle_checks::{Violation, ViolationKind};
pub use stable_oracle_core::{
    Hire, Market, Observer, Offer, Preferences, PreferencesError, Run, Side, StableMatcher,
    TracedMatcher,
};
