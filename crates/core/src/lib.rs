//! Core types for checking stable matching implementations.
//!
//! This crate defines the shared vocabulary that the checkers and the oracle
//! build on:
//!
//! - [`Preferences`] and [`Market`]: validated preference lists for both sides
//! - [`Hire`], [`Offer`], [`Run`]: matchings and proposal traces as reported
//!   by an implementation under test
//! - [`StableMatcher`], [`TracedMatcher`]: the implementations under test
//! - [`Observer`]: receives oracle events and optionally returns control actions

mod market;
mod matcher;
mod matching;
mod observer;
mod preferences;

pub use market::{Market, Side};
pub use matcher::{StableMatcher, TracedMatcher};
pub use matching::{Hire, Offer, Run};
pub use observer::Observer;
pub use preferences::{Preferences, PreferencesError};
