//! Custom game creation and loading.
//!
//! ## Creating
//!
//! A `CustomGameDraft` collects exactly `pair_count` images and a name,
//! then uploads them through an `ImageService`:
//!
//! ```
//! use memory_pairs::core::{BoardSize, CreatorConfig, GameRng};
//! use memory_pairs::images::{load_custom_game, CustomGameDraft, InMemoryImageService};
//!
//! let mut service = InMemoryImageService::new();
//! let mut draft = CustomGameDraft::new(BoardSize::Easy, CreatorConfig::default());
//! draft.add_images((1..=4u8).map(|i| vec![i; 16]));
//! draft.set_name("pets");
//! let name = draft.save(&mut service).unwrap();
//!
//! let game = load_custom_game(&service, &name, &mut GameRng::new(1)).unwrap();
//! assert_eq!(game.board_size, BoardSize::Easy);
//! ```
//!
//! ## Loading
//!
//! `load_custom_game` downloads the references and infers the board size
//! from how many there are.

use super::errors::{CreateError, ImageServiceError, LoadError};
use super::service::ImageService;
use crate::core::{BoardSize, CreatorConfig, GameRng};
use crate::game::GameSession;

/// Images and name being assembled for a new custom game.
#[derive(Clone, Debug)]
pub struct CustomGameDraft {
    board_size: BoardSize,
    config: CreatorConfig,
    images: Vec<Vec<u8>>,
    name: String,
}

impl CustomGameDraft {
    /// Start an empty draft for `board_size`.
    pub fn new(board_size: BoardSize, config: CreatorConfig) -> Self {
        Self {
            board_size,
            config,
            images: Vec::new(),
            name: String::new(),
        }
    }

    /// Board this draft is for.
    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// How many images the board needs.
    #[must_use]
    pub fn images_required(&self) -> usize {
        self.board_size.pair_count()
    }

    /// How many images have been chosen.
    #[must_use]
    pub fn images_chosen(&self) -> usize {
        self.images.len()
    }

    /// Picker title, e.g. `Choose images (2 / 4)`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Choose images ({} / {})", self.images_chosen(), self.images_required())
    }

    /// Add images until the board is full. Returns how many were accepted.
    pub fn add_images<I>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let room = self.images_required() - self.images.len();
        let before = self.images.len();
        self.images.extend(images.into_iter().take(room));
        let accepted = self.images.len() - before;
        log::debug!("Accepted {} images, {}", accepted, self.progress_label());
        accepted
    }

    /// Set the game name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Name as it will be stored.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.trim()
    }

    fn validate(&self) -> Result<(), CreateError> {
        if self.images.len() != self.images_required() {
            return Err(CreateError::WrongImageCount {
                required: self.images_required(),
                chosen: self.images.len(),
            });
        }
        let len = self.name().chars().count();
        if !self.config.accepts_name_len(len) {
            return Err(CreateError::InvalidName {
                len,
                min: self.config.min_name_len,
                max: self.config.max_name_len,
            });
        }
        Ok(())
    }

    /// Ready to upload?
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }

    /// Upload the images and return the stored game name.
    ///
    /// Fails without uploading if the name is already taken.
    pub fn save<S: ImageService>(&self, service: &mut S) -> Result<String, CreateError> {
        self.validate()?;

        let name = self.name().to_string();
        if service.exists(&name)? {
            log::warn!("Game name '{}' already taken", name);
            return Err(ImageServiceError::NameTaken(name).into());
        }

        let refs = service.upload(&name, self.images.clone())?;
        log::info!("Created custom game '{}' with {} images", name, refs.len());
        Ok(name)
    }
}

/// A downloaded custom game ready to play.
#[derive(Clone, Debug)]
pub struct CustomGame {
    pub name: String,
    pub board_size: BoardSize,
    pub session: GameSession,
}

/// Download `name` and deal a session from its images.
pub fn load_custom_game<S: ImageService>(
    service: &S,
    name: &str,
    rng: &mut GameRng,
) -> Result<CustomGame, LoadError> {
    let name = name.trim();
    let images = service.download(name).inspect_err(|err| {
        log::warn!("Could not load game '{}': {}", name, err);
    })?;

    let card_count = images.len() * 2;
    let board_size = BoardSize::from_card_count(card_count).ok_or(LoadError::UnsupportedCardCount(card_count))?;
    let session = GameSession::new(board_size, Some(&images), rng)?;
    log::info!("Now playing '{}' ({})", name, board_size);

    Ok(CustomGame {
        name: name.to_string(),
        board_size,
        session,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::InMemoryImageService;

    fn blobs(n: usize) -> Vec<Vec<u8>> {
        (0..n).map(|i| vec![i as u8 + 1; 8]).collect()
    }

    fn ready_draft(name: &str) -> CustomGameDraft {
        let mut draft = CustomGameDraft::new(BoardSize::Easy, CreatorConfig::default());
        draft.add_images(blobs(4));
        draft.set_name(name);
        draft
    }

    #[test]
    fn test_add_images_caps_at_required() {
        let mut draft = CustomGameDraft::new(BoardSize::Easy, CreatorConfig::default());

        assert_eq!(draft.add_images(blobs(3)), 3);
        assert_eq!(draft.progress_label(), "Choose images (3 / 4)");
        assert_eq!(draft.add_images(blobs(3)), 1);
        assert_eq!(draft.add_images(blobs(1)), 0);
        assert_eq!(draft.images_chosen(), 4);
    }

    #[test]
    fn test_can_save_requires_images_and_name() {
        let mut draft = CustomGameDraft::new(BoardSize::Easy, CreatorConfig::default());
        draft.set_name("pets");
        assert!(!draft.can_save());

        draft.add_images(blobs(4));
        assert!(draft.can_save());

        draft.set_name("  ab  ");
        assert!(!draft.can_save());

        draft.set_name("   ");
        assert!(!draft.can_save());

        draft.set_name("a-very-long-game-name");
        assert!(!draft.can_save());
    }

    #[test]
    fn test_save_trims_name() {
        let mut service = InMemoryImageService::new();

        let name = ready_draft("  pets ").save(&mut service).unwrap();
        assert_eq!(name, "pets");
        assert_eq!(service.download("pets").unwrap().len(), 4);
    }

    #[test]
    fn test_save_invalid_draft() {
        let mut service = InMemoryImageService::new();
        let mut draft = CustomGameDraft::new(BoardSize::Medium, CreatorConfig::default());
        draft.add_images(blobs(2));
        draft.set_name("pets");

        assert_eq!(
            draft.save(&mut service),
            Err(CreateError::WrongImageCount { required: 9, chosen: 2 })
        );
        assert_eq!(service.game_count(), 0);
    }

    #[test]
    fn test_save_name_taken() {
        let mut service = InMemoryImageService::new();
        ready_draft("pets").save(&mut service).unwrap();

        let err = ready_draft("pets").save(&mut service).unwrap_err();
        assert_eq!(err, CreateError::Service(ImageServiceError::NameTaken("pets".to_string())));
    }

    #[test]
    fn test_load_infers_board_size() {
        let mut service = InMemoryImageService::new();
        let mut draft = CustomGameDraft::new(BoardSize::Medium, CreatorConfig::default());
        draft.add_images(blobs(9));
        draft.set_name("garden");
        draft.save(&mut service).unwrap();

        let game = load_custom_game(&service, " garden ", &mut GameRng::new(2)).unwrap();
        assert_eq!(game.name, "garden");
        assert_eq!(game.board_size, BoardSize::Medium);
        assert_eq!(game.session.cards().len(), 18);
        assert!(game.session.cards().iter().all(|c| c.image().is_some()));
    }

    #[test]
    fn test_load_missing_game() {
        let service = InMemoryImageService::new();

        let err = load_custom_game(&service, "nope", &mut GameRng::new(2)).unwrap_err();
        assert_eq!(err, LoadError::Service(ImageServiceError::NotFound("nope".to_string())));
    }

    #[test]
    fn test_load_unsupported_count() {
        let mut service = InMemoryImageService::new();
        service.upload("odd", blobs(5)).unwrap();

        let err = load_custom_game(&service, "odd", &mut GameRng::new(2)).unwrap_err();
        assert_eq!(err, LoadError::UnsupportedCardCount(10));
    }
}
