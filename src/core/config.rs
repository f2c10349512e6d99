//! Game configuration types.
//!
//! - `BoardSize`: Closed set of grid presets (width, height, pair count)
//! - `CreatorConfig`: Limits applied when naming a custom game
//!
//! A board size is fixed for a session. Changing it means starting a new one.

use serde::{Deserialize, Serialize};

/// Grid preset selecting the deck length and layout.
///
/// Width is the number of columns the grid is laid out with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 2 columns, 4 rows, 4 pairs.
    Easy,
    /// 3 columns, 6 rows, 9 pairs.
    Medium,
    /// 4 columns, 6 rows, 12 pairs.
    Hard,
}

impl BoardSize {
    /// Every supported preset, smallest first.
    pub const ALL: [BoardSize; 3] = [BoardSize::Easy, BoardSize::Medium, BoardSize::Hard];

    /// Total number of cards on the board.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            BoardSize::Easy => 8,
            BoardSize::Medium => 18,
            BoardSize::Hard => 24,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            BoardSize::Easy => 2,
            BoardSize::Medium => 3,
            BoardSize::Hard => 4,
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.card_count() / self.width()
    }

    /// Number of distinct pairs in the deck.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Find the preset with exactly `card_count` cards.
    ///
    /// Used when a downloaded image list decides the board size.
    #[must_use]
    pub fn from_card_count(card_count: usize) -> Option<BoardSize> {
        Self::ALL.into_iter().find(|size| size.card_count() == card_count)
    }

    /// Display name of the preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BoardSize::Easy => "Easy",
            BoardSize::Medium => "Medium",
            BoardSize::Hard => "Hard",
        }
    }

    /// Header label shown before the first move, e.g. `Easy: 4 x 2`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}: {} x {}", self.name(), self.height(), self.width())
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Limits for custom game creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorConfig {
    /// Shortest accepted game name (after trimming).
    pub min_name_len: usize,

    /// Longest accepted game name (after trimming).
    pub max_name_len: usize,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            min_name_len: 3,
            max_name_len: 14,
        }
    }
}

impl CreatorConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum name length.
    #[must_use]
    pub fn with_min_name_len(mut self, len: usize) -> Self {
        self.min_name_len = len;
        self
    }

    /// Set the maximum name length.
    #[must_use]
    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    /// Check whether a (trimmed) name length is accepted.
    #[must_use]
    pub fn accepts_name_len(&self, len: usize) -> bool {
        (self.min_name_len..=self.max_name_len).contains(&len)
    }
}
