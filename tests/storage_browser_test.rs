//! Exercises the real browser storage backend. Runs only under
//! `wasm-pack test --headless --chrome` (or firefox); native `cargo test`
//! compiles this file to nothing.
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use rewards_miniapp::models::review::Review;
use rewards_miniapp::state::Theme;
use rewards_miniapp::storage::{
    load_theme, save_theme, BrowserStorage, KeyValueStore, ReviewStore, REVIEWS_KEY, THEME_KEY,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear(key: &str) {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("local storage in test browser")
        .remove_item(key)
        .unwrap();
}

#[wasm_bindgen_test]
fn browser_store_round_trips_values() {
    clear("test-key");
    let store = BrowserStorage::new().unwrap();
    assert_eq!(store.get("test-key").unwrap(), None);

    store.set("test-key", "значение").unwrap();
    assert_eq!(store.get("test-key").unwrap(), Some("значение".to_string()));
    clear("test-key");
}

#[wasm_bindgen_test]
fn reviews_seed_and_survive_a_new_store_handle() {
    clear(REVIEWS_KEY);
    let reviews = ReviewStore::new(Rc::new(BrowserStorage::new().unwrap()));

    let seeded = reviews.list().unwrap();
    assert_eq!(seeded.len(), 4);

    reviews
        .add(Review::new("Тест".into(), 5, "Отзыв из браузерного теста".into()))
        .unwrap();

    // A second handle simulates a page reload over the same storage.
    let reloaded = ReviewStore::new(Rc::new(BrowserStorage::new().unwrap()));
    let listed = reloaded.list().unwrap();
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0].user, "Тест");
    clear(REVIEWS_KEY);
}

#[wasm_bindgen_test]
fn malformed_reviews_value_is_reseeded() {
    let store = BrowserStorage::new().unwrap();
    store.set(REVIEWS_KEY, "definitely not json").unwrap();

    let reviews = ReviewStore::new(Rc::new(BrowserStorage::new().unwrap()));
    assert_eq!(reviews.list().unwrap().len(), 4);
    clear(REVIEWS_KEY);
}

#[wasm_bindgen_test]
fn theme_persists_across_handles() {
    clear(THEME_KEY);
    let store = BrowserStorage::new().unwrap();
    save_theme(&store, Theme::Dark);

    let reloaded = BrowserStorage::new().unwrap();
    assert_eq!(load_theme(&reloaded), Some(Theme::Dark));
    clear(THEME_KEY);
}
