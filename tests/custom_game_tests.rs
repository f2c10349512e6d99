//! Custom game integration tests.
//!
//! These tests cover the full custom deck path:
//! - Creating a draft and uploading it
//! - Loading it back by name
//! - Playing the loaded session to a win

use memory_pairs::{
    load_custom_game, BoardSize, CreateError, CreatorConfig, CustomGameDraft, GameRng,
    ImageService, ImageServiceError, InMemoryImageService, LoadError,
};

fn photos(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|i| format!("photo-{i}").into_bytes()).collect()
}

/// Upload a Hard board, load it and play it to completion.
#[test]
fn test_create_load_and_win() {
    let mut service = InMemoryImageService::new();

    let mut draft = CustomGameDraft::new(BoardSize::Hard, CreatorConfig::default());
    assert_eq!(draft.add_images(photos(20)), 12);
    draft.set_name("holiday");
    assert!(draft.can_save());
    let name = draft.save(&mut service).unwrap();

    let mut game = load_custom_game(&service, &name, &mut GameRng::new(11)).unwrap();
    assert_eq!(game.board_size, BoardSize::Hard);

    let session = &mut game.session;
    let len = session.cards().len();
    for i in 0..len {
        if session.cards()[i].is_matched() {
            continue;
        }
        let partner = (i + 1..len)
            .find(|&j| session.cards()[j].image() == session.cards()[i].image())
            .expect("every image appears twice");
        session.flip_card(i).unwrap();
        assert!(session.flip_card(partner).unwrap().is_match());
    }

    assert!(session.have_won_game());
    assert_eq!(session.num_moves(), 12);
}

/// Every uploaded image ends up on exactly two cards.
#[test]
fn test_loaded_deck_uses_every_upload() {
    let mut service = InMemoryImageService::new();
    let mut draft = CustomGameDraft::new(BoardSize::Easy, CreatorConfig::default());
    draft.add_images(photos(4));
    draft.set_name("pets");
    draft.save(&mut service).unwrap();

    let stored = service.download("pets").unwrap();
    let game = load_custom_game(&service, "pets", &mut GameRng::new(3)).unwrap();

    for image in &stored {
        let copies = game
            .session
            .cards()
            .iter()
            .filter(|c| c.image() == Some(image))
            .count();
        assert_eq!(copies, 2);
        assert!(service.image_bytes(image).is_some());
    }
}

/// Custom name limits come from the config.
#[test]
fn test_custom_name_limits() {
    let config = CreatorConfig::new().with_min_name_len(5).with_max_name_len(6);
    let mut draft = CustomGameDraft::new(BoardSize::Easy, config);
    draft.add_images(photos(4));

    draft.set_name("pets");
    assert_eq!(
        draft.save(&mut InMemoryImageService::new()),
        Err(CreateError::InvalidName { len: 4, min: 5, max: 6 })
    );

    draft.set_name("kitten");
    assert!(draft.can_save());
}

/// A second upload under the same name is refused and leaves the first intact.
#[test]
fn test_duplicate_name_keeps_original() {
    let mut service = InMemoryImageService::new();

    let mut first = CustomGameDraft::new(BoardSize::Easy, CreatorConfig::default());
    first.add_images(photos(4));
    first.set_name("pets");
    first.save(&mut service).unwrap();

    let mut second = CustomGameDraft::new(BoardSize::Medium, CreatorConfig::default());
    second.add_images(photos(9));
    second.set_name("pets");
    let err = second.save(&mut service).unwrap_err();
    assert!(err.is_user_fixable());

    assert_eq!(service.download("pets").unwrap().len(), 4);
}

/// Unknown names surface as not-found.
#[test]
fn test_load_unknown_name() {
    let service = InMemoryImageService::new();

    let result = load_custom_game(&service, "  ghost ", &mut GameRng::new(1));
    assert!(matches!(
        result,
        Err(LoadError::Service(ImageServiceError::NotFound(ref name))) if name == "ghost"
    ));
}
