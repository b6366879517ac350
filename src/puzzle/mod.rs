//! Daily puzzle delivery.
//!
//! The puzzle for a date lives in the store under `puzzle-<date>`. As with
//! shares, a missing store is a supported degraded mode: a built-in demo
//! puzzle is served so the game stays playable in development environments.

mod service;

pub use service::{PuzzleData, PuzzleError, PuzzleService};
