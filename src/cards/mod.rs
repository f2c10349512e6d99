//! Card system: cards, the built-in icon set, and decks.
//!
//! ## Key Types
//!
//! - `CardKey`: Match key shared by the two cards of a pair
//! - `ImageRef`: Reference to a custom image
//! - `Card`: One face of the board with its face-up / matched flags
//! - `Deck`: Fixed, position-addressed card sequence
//! - `DeckBuilder`: Deals shuffled decks from icons or custom images

pub mod card;
pub mod deck;
pub mod icons;

pub use card::{Card, CardKey, ImageRef};
pub use deck::{Deck, DeckBuilder};
pub use icons::{icon_for, BuiltinIcon, DEFAULT_ICONS};
