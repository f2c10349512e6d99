//! Custom image decks: the image service collaborator and the
//! create / load flows built on it.
//!
//! The session never talks to the service. Images are resolved to
//! `ImageRef`s first, then handed to the deck builder.

pub mod creator;
pub mod errors;
pub mod service;

pub use creator::{load_custom_game, CustomGame, CustomGameDraft};
pub use errors::{CreateError, ImageServiceError, LoadError};
pub use service::{ImageService, InMemoryImageService};
