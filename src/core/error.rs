//! Engine error types.

use thiserror::Error;

/// Errors from flipping or querying cards in a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Position is outside the deck.
    #[error("Position {position} is out of range for a deck of {len} cards")]
    PositionOutOfRange { position: usize, len: usize },

    /// Card is already showing (selected, part of a losing pair, or matched).
    #[error("Card at position {0} is already face up")]
    CardFaceUp(usize),
}

/// Errors from building a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Built-in icon set is too small for the board.
    #[error("Need {required} distinct icons but only {available} are available")]
    NotEnoughIcons { required: usize, available: usize },

    /// Custom image list does not match the board's pair count.
    #[error("Expected {expected} custom images, got {got}")]
    ImageCountMismatch { expected: usize, got: usize },

    /// Same image reference supplied twice.
    #[error("Image '{0}' appears more than once")]
    DuplicateImage(String),

    /// Card sequence where some key does not appear exactly twice.
    #[error("Card key {0} does not appear exactly twice")]
    UnpairedDeck(u32),

    /// Card sequence with no cards.
    #[error("Deck has no cards")]
    EmptyDeck,

    /// Card sequence containing cards already flipped or matched.
    #[error("Card at position {0} is not face down and unmatched")]
    CardNotFresh(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::PositionOutOfRange { position: 8, len: 8 };
        assert_eq!(err.to_string(), "Position 8 is out of range for a deck of 8 cards");

        let err = DeckError::ImageCountMismatch { expected: 4, got: 3 };
        assert_eq!(err.to_string(), "Expected 4 custom images, got 3");
    }
}
