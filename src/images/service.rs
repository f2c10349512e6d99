//! Image service collaborator.
//!
//! Custom games are stored remotely as a name plus an ordered list of
//! image references. The engine only ever sees the resolved references;
//! the service is consulted when a game is created or loaded.

use rustc_hash::FxHashMap;

use super::errors::ImageServiceError;
use crate::cards::ImageRef;

/// Remote store for custom game images.
pub trait ImageService {
    /// Is a game already stored under `game_name`?
    fn exists(&self, game_name: &str) -> Result<bool, ImageServiceError>;

    /// Store `images` under `game_name` and return one stable reference per image, in order.
    fn upload(&mut self, game_name: &str, images: Vec<Vec<u8>>) -> Result<Vec<ImageRef>, ImageServiceError>;

    /// Fetch the references stored under `game_name`.
    fn download(&self, game_name: &str) -> Result<Vec<ImageRef>, ImageServiceError>;
}

/// Process-local `ImageService`.
///
/// References look like `mem://images/<game>/<index>.jpg`.
#[derive(Clone, Debug, Default)]
pub struct InMemoryImageService {
    games: FxHashMap<String, Vec<ImageRef>>,
    blobs: FxHashMap<ImageRef, Vec<u8>>,
}

impl InMemoryImageService {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Bytes stored behind a reference.
    #[must_use]
    pub fn image_bytes(&self, image: &ImageRef) -> Option<&[u8]> {
        self.blobs.get(image).map(Vec::as_slice)
    }
}

impl ImageService for InMemoryImageService {
    fn exists(&self, game_name: &str) -> Result<bool, ImageServiceError> {
        Ok(self.games.contains_key(game_name))
    }

    fn upload(&mut self, game_name: &str, images: Vec<Vec<u8>>) -> Result<Vec<ImageRef>, ImageServiceError> {
        if self.games.contains_key(game_name) {
            return Err(ImageServiceError::NameTaken(game_name.to_string()));
        }
        if images.is_empty() {
            return Err(ImageServiceError::EmptyUpload(game_name.to_string()));
        }
        if let Some(index) = images.iter().position(Vec::is_empty) {
            return Err(ImageServiceError::EmptyImage(index));
        }

        let mut refs = Vec::with_capacity(images.len());
        for (index, bytes) in images.into_iter().enumerate() {
            let image = ImageRef::new(format!("mem://images/{game_name}/{index}.jpg"));
            log::debug!("Uploaded {} bytes to {}", bytes.len(), image);
            self.blobs.insert(image.clone(), bytes);
            refs.push(image);
        }
        self.games.insert(game_name.to_string(), refs.clone());
        log::info!("Stored game '{}' with {} images", game_name, refs.len());

        Ok(refs)
    }

    fn download(&self, game_name: &str) -> Result<Vec<ImageRef>, ImageServiceError> {
        self.games
            .get(game_name)
            .cloned()
            .ok_or_else(|| ImageServiceError::NotFound(game_name.to_string()))
    }
}
