//! Decks and deck construction.
//!
//! A `Deck` is a fixed sequence of `2 * pair_count` cards. Positions in the
//! sequence address cards for the lifetime of the deck.
//!
//! `DeckBuilder` deals a shuffled deck either from the built-in icon set or
//! from a list of custom image references:
//!
//! ```
//! use memory_pairs::cards::DeckBuilder;
//! use memory_pairs::core::{BoardSize, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let deck = DeckBuilder::new().build(BoardSize::Easy, None, &mut rng).unwrap();
//! assert_eq!(deck.len(), 8);
//! assert_eq!(deck.pair_count(), 4);
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::card::{Card, CardKey, ImageRef};
use super::icons::{BuiltinIcon, DEFAULT_ICONS};
use crate::core::{BoardSize, DeckError, GameRng};

/// Ordered, fixed-length sequence of cards.
///
/// Deserializing runs the same checks as `Deck::from_cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckRecord")]
pub struct Deck {
    cards: Vec<Card>,
}

/// Unchecked wire form of a `Deck`.
#[derive(Deserialize)]
struct DeckRecord {
    cards: Vec<Card>,
}

impl TryFrom<DeckRecord> for Deck {
    type Error = DeckError;

    fn try_from(record: DeckRecord) -> Result<Self, Self::Error> {
        Deck::from_cards(record.cards)
    }
}

impl Deck {
    /// Wrap a caller-arranged card sequence without shuffling.
    ///
    /// Every key must appear exactly twice and every card must be face
    /// down and unmatched.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        if let Some(position) = cards.iter().position(|c| c.is_face_up() || c.is_matched()) {
            return Err(DeckError::CardNotFresh(position));
        }

        let mut counts: FxHashMap<CardKey, usize> = FxHashMap::default();
        for card in &cards {
            *counts.entry(card.key()).or_insert(0) += 1;
        }
        let mut unpaired: Vec<CardKey> = counts
            .into_iter()
            .filter(|&(_, count)| count != 2)
            .map(|(key, _)| key)
            .collect();
        unpaired.sort();
        if let Some(key) = unpaired.first() {
            return Err(DeckError::UnpairedDeck(key.raw()));
        }

        Ok(Self { cards })
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A deck built through `from_cards` or `DeckBuilder` is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Card at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// All cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate cards in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Card> {
        self.cards.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Deals shuffled decks.
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    icons: Vec<BuiltinIcon>,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self {
            icons: DEFAULT_ICONS.to_vec(),
        }
    }
}

impl DeckBuilder {
    /// Builder using the default icon set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the built-in icon set.
    #[must_use]
    pub fn with_icons(mut self, icons: Vec<BuiltinIcon>) -> Self {
        self.icons = icons;
        self
    }

    /// Build a shuffled deck for `board_size`.
    ///
    /// With `custom_images`, the list length must equal the board's pair
    /// count and the references must be distinct. Without, `pair_count`
    /// icons are sampled from the built-in set.
    pub fn build(
        &self,
        board_size: BoardSize,
        custom_images: Option<&[ImageRef]>,
        rng: &mut GameRng,
    ) -> Result<Deck, DeckError> {
        let pair_count = board_size.pair_count();
        let deck = match custom_images {
            None => self.build_from_icons(pair_count, rng)?,
            Some(images) => Self::build_from_images(pair_count, images, rng)?,
        };
        log::debug!(
            "Dealt {} deck of {} cards (seed {})",
            board_size,
            deck.len(),
            rng.seed()
        );
        Ok(deck)
    }

    fn build_from_icons(&self, pair_count: usize, rng: &mut GameRng) -> Result<Deck, DeckError> {
        let mut seen = FxHashSet::default();
        let distinct: Vec<BuiltinIcon> = self
            .icons
            .iter()
            .copied()
            .filter(|icon| seen.insert(icon.key()))
            .collect();
        if distinct.len() < pair_count {
            return Err(DeckError::NotEnoughIcons {
                required: pair_count,
                available: distinct.len(),
            });
        }

        let chosen = rng.sample(&distinct, pair_count);
        let mut cards: Vec<Card> = chosen
            .iter()
            .chain(chosen.iter())
            .map(|icon| Card::new(icon.key()))
            .collect();
        rng.shuffle(&mut cards);

        Ok(Deck { cards })
    }

    fn build_from_images(
        pair_count: usize,
        images: &[ImageRef],
        rng: &mut GameRng,
    ) -> Result<Deck, DeckError> {
        if images.len() != pair_count {
            return Err(DeckError::ImageCountMismatch {
                expected: pair_count,
                got: images.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for image in images {
            if !seen.insert(image) {
                return Err(DeckError::DuplicateImage(image.to_string()));
            }
        }

        // Pair index is the key, so distinct images can never collide.
        let mut cards: Vec<Card> = images
            .iter()
            .enumerate()
            .flat_map(|(index, image)| {
                let key = CardKey::new(index as u32);
                [
                    Card::with_image(key, image.clone()),
                    Card::with_image(key, image.clone()),
                ]
            })
            .collect();
        rng.shuffle(&mut cards);

        Ok(Deck { cards })
    }
}
