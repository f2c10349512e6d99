//! # memory-pairs
//!
//! A card-pairs memory game engine.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: A `GameSession` owns its deck. Cards are only
//!    mutated through `flip_card`.
//!
//! 2. **Results, not observers**: Every flip returns a `FlipOutcome`. Callers
//!    poll `status()` and the per-card queries to redraw.
//!
//! 3. **Injectable randomness**: Deals take a `GameRng`, so tests fix the
//!    shuffle with a seed.
//!
//! ## Modules
//!
//! - `core`: RNG, board sizes, configuration, errors
//! - `cards`: Cards, the built-in icon set, decks and the deck builder
//! - `game`: The flip/match session state machine
//! - `images`: Image service collaborator, custom game creation and loading
//!
//! ```
//! use memory_pairs::{BoardSize, GameRng, GameSession};
//!
//! let mut rng = GameRng::new(42);
//! let mut game = GameSession::new(BoardSize::Easy, None, &mut rng).unwrap();
//!
//! game.flip_card(0).unwrap();
//! assert!(game.is_card_face_up(0).unwrap());
//! assert_eq!(game.num_moves(), 0);
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod images;

// Re-export commonly used types
pub use crate::core::{BoardSize, CreatorConfig, DeckError, GameError, GameRng};

pub use crate::cards::{icon_for, BuiltinIcon, Card, CardKey, Deck, DeckBuilder, ImageRef, DEFAULT_ICONS};

pub use crate::game::{FlipOutcome, GameSession, Selection, SessionStatus};

pub use crate::images::{
    load_custom_game, CreateError, CustomGame, CustomGameDraft, ImageService, ImageServiceError,
    InMemoryImageService, LoadError,
};
