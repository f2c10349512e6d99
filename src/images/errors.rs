//! Custom game error types.

use thiserror::Error;

use crate::core::DeckError;

/// Image service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageServiceError {
    /// No game stored under this name
    #[error("Game '{0}' not found")]
    NotFound(String),

    /// A game already exists under this name
    #[error("A game already exists with the name '{0}'")]
    NameTaken(String),

    /// Upload with no images
    #[error("No images to upload for '{0}'")]
    EmptyUpload(String),

    /// Image at this index has no bytes
    #[error("Image {0} is empty")]
    EmptyImage(usize),

    /// Storage backend failure
    #[error("Image service failure: {0}")]
    Backend(String),
}

/// Errors saving a custom game draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    /// Not exactly as many images as the board has pairs
    #[error("Choose {required} images, {chosen} chosen")]
    WrongImageCount { required: usize, chosen: usize },

    /// Name is blank, too short, or too long
    #[error("Game name must be {min} to {max} characters, got {len}")]
    InvalidName { len: usize, min: usize, max: usize },

    /// Upload or lookup failed
    #[error(transparent)]
    Service(#[from] ImageServiceError),
}

/// Errors loading a custom game by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Download failed
    #[error(transparent)]
    Service(#[from] ImageServiceError),

    /// Stored image count matches no board size
    #[error("No board size holds {0} cards")]
    UnsupportedCardCount(usize),

    /// Stored images could not form a deck
    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl CreateError {
    /// Can the user fix this by editing the draft?
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            CreateError::WrongImageCount { .. }
                | CreateError::InvalidName { .. }
                | CreateError::Service(ImageServiceError::NameTaken(_))
        )
    }
}
