use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use narrative::{Deck, DeckError, NavigatorConfig, NavigatorError, SlideNavigator};

fn touch(dir: &TempDir, name: &str) {
    fs::write(dir.path().join(name), b"not really an image").unwrap();
}

#[test]
fn image_folder_is_sorted_and_themed_by_name() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "02-ocean.png");
    touch(&dir, "01-ember.jpg");
    touch(&dir, "03.gif");
    touch(&dir, "notes.txt");

    let deck = Deck::load(dir.path()).unwrap();
    let themes: Vec<&str> = deck.slides().iter().map(|s| s.theme()).collect();
    assert_eq!(themes, vec!["ember", "ocean", "default"]);
    assert_eq!(
        deck.slides()[0].image(),
        Some(dir.path().join("01-ember.jpg").as_path())
    );
    assert_eq!(deck.debounce_ms(), None);
    assert_eq!(deck.navigator_config(None), NavigatorConfig::default());
}

#[test]
fn manifest_lists_slides_and_lock() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "cover.png");
    fs::write(
        dir.path().join("deck.toml"),
        r#"
debounce_ms = 250

[[slide]]
theme = "paper"
title = "Where it started"
image = "cover.png"

[[slide]]
theme = "ember"
"#,
    )
    .unwrap();

    let deck = Deck::load(dir.path()).unwrap();
    assert_eq!(deck.slides().len(), 2);
    assert_eq!(deck.slides()[0].title(), Some("Where it started"));
    assert_eq!(deck.slides()[1].image(), None);
    assert_eq!(
        deck.navigator_config(None).debounce,
        Some(Duration::from_millis(250))
    );
    // The command line wins over the manifest
    assert_eq!(deck.navigator_config(Some(0)), NavigatorConfig::immediate());
}

#[test]
fn manifest_with_missing_image_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("deck.toml"),
        "[[slide]]\ntheme = \"a\"\nimage = \"gone.png\"\n",
    )
    .unwrap();

    match Deck::load(dir.path()) {
        Err(DeckError::MissingImage { index, .. }) => assert_eq!(index, 0),
        other => panic!("expected MissingImage, got {:?}", other),
    }
}

#[test]
fn malformed_manifest_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("deck.toml"), "[[slide]]\ncolour = \"red\"\n").unwrap();
    assert!(matches!(Deck::load(dir.path()), Err(DeckError::Manifest { .. })));
}

#[test]
fn empty_folder_has_no_slides() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "readme.md");
    assert!(matches!(Deck::load(dir.path()), Err(DeckError::NoSlides(_))));
}

#[test]
fn missing_folder_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(Deck::load(&missing), Err(DeckError::Io { .. })));
}

#[test]
fn loaded_deck_drives_a_navigator() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "1-dawn.png");
    touch(&dir, "2-dusk.png");

    let deck = Deck::load(dir.path()).unwrap();
    let config = deck.navigator_config(Some(0));
    let mut nav = SlideNavigator::new(deck.into_slides(), config, ()).unwrap();
    assert_eq!(nav.frame().theme, "dawn");
    nav.next();
    assert_eq!(nav.frame().theme, "dusk");
    assert_eq!(nav.frame().progress_percent(), 100);
}

#[test]
fn empty_slide_list_cannot_build_a_navigator() {
    assert!(matches!(
        SlideNavigator::new(Vec::new(), NavigatorConfig::immediate(), ()),
        Err(NavigatorError::EmptyDeck)
    ));
}
