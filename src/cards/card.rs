//! Cards: one face of the board.
//!
//! A `Card` carries a `CardKey` shared with exactly one other card in its
//! deck, plus an optional `ImageRef` for custom decks. Face-up and matched
//! flags are only changed by the session state machine.

use serde::{Deserialize, Serialize};

/// Match key shared by the two cards of a pair.
///
/// Built-in decks use the icon id; custom decks use the index of the
/// image in the uploaded list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey(pub u32);

impl CardKey {
    /// Create a new card key.
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key({})", self.0)
    }
}

/// Reference to a remotely stored image (usually a download URL).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Create a new image reference.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ImageRef {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    key: CardKey,
    image: Option<ImageRef>,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card without an image.
    #[must_use]
    pub fn new(key: CardKey) -> Self {
        Self {
            key,
            image: None,
            face_up: false,
            matched: false,
        }
    }

    /// Create a face-down, unmatched card showing a custom image.
    #[must_use]
    pub fn with_image(key: CardKey, image: ImageRef) -> Self {
        Self {
            image: Some(image),
            ..Self::new(key)
        }
    }

    /// Match key.
    #[must_use]
    pub fn key(&self) -> CardKey {
        self.key
    }

    /// Custom image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Is the card showing its face?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has the card been paired? Never reset once set.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn toggle(&mut self) {
        self.face_up = !self.face_up;
    }

    pub(crate) fn turn_down(&mut self) {
        self.face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(CardKey::new(3));

        assert_eq!(card.key(), CardKey::new(3));
        assert!(card.image().is_none());
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_card_with_image() {
        let card = Card::with_image(CardKey::new(0), ImageRef::new("https://img/0.jpg"));

        assert_eq!(card.image().map(ImageRef::as_str), Some("https://img/0.jpg"));
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_toggle_and_turn_down() {
        let mut card = Card::new(CardKey::new(1));

        card.toggle();
        assert!(card.is_face_up());
        card.toggle();
        assert!(!card.is_face_up());

        card.toggle();
        card.turn_down();
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(format!("{}", CardKey::new(7)), "Key(7)");
    }

    #[test]
    fn test_card_serialization() {
        let mut card = Card::with_image(CardKey::new(2), "mem://a.jpg".into());
        card.toggle();
        card.mark_matched();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
