//! The memory game itself.
//!
//! `GameSession` owns one deck and applies the flip/match rules. Callers
//! flip cards and then poll the session's queries to redraw.

mod session;

pub use session::{FlipOutcome, GameSession, Selection, SessionStatus};
