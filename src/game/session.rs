//! Game session: the flip/match state machine for one deck.
//!
//! ## Selection
//!
//! At most one unmatched card waits for its partner:
//! - `Selection::None`: the next flip first turns every unmatched card face
//!   down (hiding the previous losing pair), then selects the flipped card.
//! - `Selection::One(first)`: the next flip is compared with `first`. Equal
//!   keys mark both cards matched. Either way the selection clears and both
//!   cards stay face up until the following flip.
//!
//! ## Moves
//!
//! Every accepted flip is counted. A move is two flips, so `num_moves`
//! only advances on the second card of a pair.
//!
//! ## Face-up cards
//!
//! Flipping a card that is already face up (selected, part of the last
//! losing pair, or matched) is rejected without touching any state.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, DeckBuilder, ImageRef};
use crate::core::{BoardSize, DeckError, GameError, GameRng};

/// Pending single selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No card is waiting for a partner.
    #[default]
    None,
    /// The card at this position is face up and waiting.
    One(usize),
}

/// Result of a single accepted flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair turned over.
    Selected,
    /// Second card matched the first.
    Match,
    /// Second card did not match the first.
    Mismatch,
}

impl FlipOutcome {
    /// Did this flip complete a pair?
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, FlipOutcome::Match)
    }
}

/// Snapshot of the derived counters, polled by the UI after each flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub moves: u32,
    pub pairs_found: usize,
    pub pair_count: usize,
    pub won: bool,
}

impl SessionStatus {
    /// Moves label, e.g. `Moves: 3`.
    #[must_use]
    pub fn moves_label(&self) -> String {
        format!("Moves: {}", self.moves)
    }

    /// Pairs label, e.g. `Pairs: 2 / 4`.
    #[must_use]
    pub fn pairs_label(&self) -> String {
        format!("Pairs: {} / {}", self.pairs_found, self.pair_count)
    }
}

/// State of one play-through.
///
/// Replaced wholesale on restart, new board size, or new custom game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSession {
    deck: Deck,
    board_size: Option<BoardSize>,
    card_flips: u32,
    pairs_found: usize,
    selection: Selection,
}

impl GameSession {
    /// Deal a new session with the default icon set or `custom_images`.
    pub fn new(
        board_size: BoardSize,
        custom_images: Option<&[ImageRef]>,
        rng: &mut GameRng,
    ) -> Result<Self, DeckError> {
        Self::with_builder(&DeckBuilder::new(), board_size, custom_images, rng)
    }

    /// Deal a new session through a configured builder.
    pub fn with_builder(
        builder: &DeckBuilder,
        board_size: BoardSize,
        custom_images: Option<&[ImageRef]>,
        rng: &mut GameRng,
    ) -> Result<Self, DeckError> {
        let deck = builder.build(board_size, custom_images, rng)?;
        log::info!(
            "New {} session ({} images)",
            board_size,
            if custom_images.is_some() { "custom" } else { "built-in" }
        );
        Ok(Self {
            board_size: Some(board_size),
            ..Self::from_deck(deck)
        })
    }

    /// Start a session on an already arranged deck, without shuffling.
    #[must_use]
    pub fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            board_size: None,
            card_flips: 0,
            pairs_found: 0,
            selection: Selection::None,
        }
    }

    /// Flip the card at `position`.
    pub fn flip_card(&mut self, position: usize) -> Result<FlipOutcome, GameError> {
        if self.card(position)?.is_face_up() {
            log::warn!("Rejected flip of face-up card {}", position);
            return Err(GameError::CardFaceUp(position));
        }

        self.card_flips = self.card_flips.saturating_add(1);

        let outcome = match self.selection {
            Selection::None => {
                self.restore_cards();
                self.selection = Selection::One(position);
                FlipOutcome::Selected
            }
            Selection::One(first) => {
                self.selection = Selection::None;
                if self.check_for_match(first, position) {
                    FlipOutcome::Match
                } else {
                    FlipOutcome::Mismatch
                }
            }
        };

        self.card_mut(position)?.toggle();
        log::debug!(
            "Flip {} -> {:?} (flips {}, pairs {}/{})",
            position,
            outcome,
            self.card_flips,
            self.pairs_found,
            self.pair_count()
        );
        if self.have_won_game() {
            log::info!("Game won in {} moves", self.num_moves());
        }

        Ok(outcome)
    }

    /// Turn every unmatched card face down.
    fn restore_cards(&mut self) {
        for card in self.deck.iter_mut().filter(|c| !c.is_matched()) {
            card.turn_down();
        }
    }

    fn check_for_match(&mut self, first: usize, second: usize) -> bool {
        let keys = (self.deck.get(first).map(Card::key), self.deck.get(second).map(Card::key));
        let (Some(a), Some(b)) = keys else {
            return false;
        };
        if a != b {
            return false;
        }

        for position in [first, second] {
            if let Some(card) = self.deck.get_mut(position) {
                card.mark_matched();
            }
        }
        self.pairs_found += 1;
        log::info!("Found a match! Pairs found: {}", self.pairs_found);
        true
    }

    /// Card at `position`.
    pub fn card(&self, position: usize) -> Result<&Card, GameError> {
        let len = self.deck.len();
        self.deck
            .get(position)
            .ok_or(GameError::PositionOutOfRange { position, len })
    }

    fn card_mut(&mut self, position: usize) -> Result<&mut Card, GameError> {
        let len = self.deck.len();
        self.deck
            .get_mut(position)
            .ok_or(GameError::PositionOutOfRange { position, len })
    }

    /// Is the card at `position` face up?
    pub fn is_card_face_up(&self, position: usize) -> Result<bool, GameError> {
        Ok(self.card(position)?.is_face_up())
    }

    /// True once every pair has been found. Never reverts.
    #[must_use]
    pub fn have_won_game(&self) -> bool {
        self.pairs_found == self.pair_count()
    }

    /// Completed pairs of flips.
    #[must_use]
    pub fn num_moves(&self) -> u32 {
        self.card_flips / 2
    }

    /// Every accepted flip so far.
    #[must_use]
    pub fn card_flips(&self) -> u32 {
        self.card_flips
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    /// Pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    /// Fraction of pairs found, from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.pairs_found as f32 / self.pair_count() as f32
    }

    /// Moves were made and the game is not won yet.
    ///
    /// Restarting such a session should be confirmed first.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.num_moves() > 0 && !self.have_won_game()
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Board preset, or `None` for sessions started with `from_deck`.
    #[must_use]
    pub fn board_size(&self) -> Option<BoardSize> {
        self.board_size
    }

    /// The deck being played.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// All cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// Derived counters.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            moves: self.num_moves(),
            pairs_found: self.pairs_found,
            pair_count: self.pair_count(),
            won: self.have_won_game(),
        }
    }
}
