//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by the deck builder, the session state machine and
//! the custom game flow.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BoardSize, CreatorConfig};
pub use error::{DeckError, GameError};
pub use rng::GameRng;
