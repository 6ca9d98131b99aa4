//! Key-value persistence over the browser's local storage, behind a trait so
//! the review store can run against an in-memory fake in tests.
//!
//! The store is shared across tabs with no locking: every mutation is a
//! read-modify-write of the whole collection and the last writer wins. That
//! matches what the host storage gives us and is not papered over here.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging::log;
use thiserror::Error;

use crate::data::default_reviews;
use crate::models::review::Review;
use crate::state::{ReviewSort, Theme};

pub const THEME_KEY: &str = "theme";
pub const REVIEWS_KEY: &str = "reviews";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    WriteFailed(String),
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key-value surface. Implemented by the real browser storage
/// and by [`MemoryStore`] for tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// window.localStorage. The handle is grabbed once at construction; a host
/// without local storage (storage disabled, sandboxed iframe) yields an error
/// and callers fall back to in-memory defaults.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn new() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed(format!("{e:?}")))
    }
}

/// In-memory stand-in used by unit tests and as last resort when the browser
/// store is unavailable.
#[derive(Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the persisted theme, if any.
pub fn load_theme(store: &dyn KeyValueStore) -> Option<Theme> {
    match store.get(THEME_KEY) {
        Ok(value) => value.map(|v| Theme::parse(&v)),
        Err(err) => {
            log!("[STORAGE] theme read failed: {err}");
            None
        }
    }
}

pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) {
    if let Err(err) = store.set(THEME_KEY, theme.as_str()) {
        log!("[STORAGE] theme write failed: {err}");
    }
}

/// Review collection persisted under one key as a JSON array. Every operation
/// loads the whole array, mutates it and writes it back.
#[derive(Clone)]
pub struct ReviewStore {
    store: Rc<dyn KeyValueStore>,
}

impl ReviewStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All reviews, newest submission first. An empty, missing or malformed
    /// array is replaced by the four default reviews, which are persisted so
    /// the next read sees them.
    pub fn list(&self) -> Result<Vec<Review>, StoreError> {
        let reviews = match self.store.get(REVIEWS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Review>>(&raw) {
                Ok(reviews) => reviews,
                Err(err) => {
                    // Corrupted storage content reads as empty.
                    log!("[STORAGE] malformed reviews array, reseeding: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        if reviews.is_empty() {
            let seeded = default_reviews();
            self.persist(&seeded)?;
            return Ok(seeded);
        }
        Ok(reviews)
    }

    /// Prepends a review and persists the whole collection.
    pub fn add(&self, review: Review) -> Result<(), StoreError> {
        let mut reviews = self.list()?;
        reviews.insert(0, review);
        self.persist(&reviews)
    }

    /// Bumps the like counter of the review with the given id. Unknown ids
    /// are a no-op; on a duplicate id the first match wins.
    pub fn increment_like(&self, id: i64) -> Result<(), StoreError> {
        self.increment(id, |review| review.likes += 1)
    }

    pub fn increment_dislike(&self, id: i64) -> Result<(), StoreError> {
        self.increment(id, |review| review.dislikes += 1)
    }

    fn increment(&self, id: i64, bump: impl FnOnce(&mut Review)) -> Result<(), StoreError> {
        let mut reviews = self.list()?;
        if let Some(review) = reviews.iter_mut().find(|r| r.id == id) {
            bump(review);
            self.persist(&reviews)?;
        }
        Ok(())
    }

    fn persist(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(reviews)?;
        self.store.set(REVIEWS_KEY, &raw)
    }
}

/// Client-side sort, re-run on every render of the reviews list. `sort_by`
/// is stable, so equal-rating reviews keep their stored relative order.
pub fn sorted(mut reviews: Vec<Review>, order: ReviewSort) -> Vec<Review> {
    match order {
        ReviewSort::Newest => reviews.sort_by(|a, b| b.id.cmp(&a.id)),
        ReviewSort::Highest => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ReviewSort::Lowest => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
    }
    reviews
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ReviewStore {
        ReviewStore::new(Rc::new(MemoryStore::new()))
    }

    fn review(id: i64, rating: u8) -> Review {
        Review {
            id,
            user: "Тест".to_string(),
            rating,
            text: "Достаточно длинный текст отзыва".to_string(),
            date: "01.01.2024".to_string(),
            likes: 0,
            dislikes: 0,
        }
    }

    #[test]
    fn first_read_seeds_defaults_and_persists_them() {
        let kv = Rc::new(MemoryStore::new());
        let reviews = ReviewStore::new(kv.clone());

        let seeded = reviews.list().unwrap();
        assert_eq!(seeded.len(), 4);

        // Seeding wrote through to the underlying store.
        let raw = kv.get(REVIEWS_KEY).unwrap().unwrap();
        let decoded: Vec<Review> = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, seeded);
    }

    #[test]
    fn malformed_array_reads_as_empty_and_reseeds() {
        let kv = Rc::new(MemoryStore::new());
        kv.set(REVIEWS_KEY, "{not json").unwrap();

        let reviews = ReviewStore::new(kv).list().unwrap();
        assert_eq!(reviews.len(), 4);
    }

    #[test]
    fn add_prepends_and_round_trips() {
        let reviews = store();
        reviews.list().unwrap(); // seed
        reviews.add(review(99, 5)).unwrap();

        let listed = reviews.list().unwrap();
        assert_eq!(listed.len(), 5);
        assert_eq!(listed[0].id, 99);

        // A fresh store over the same backing map sees the same content.
        let kv = Rc::new(MemoryStore::new());
        let first = ReviewStore::new(kv.clone());
        first.add(review(7, 3)).unwrap();
        let second = ReviewStore::new(kv);
        assert_eq!(second.list().unwrap()[0].id, 7);
    }

    #[test]
    fn like_touches_only_its_own_review_and_persists() {
        let kv = Rc::new(MemoryStore::new());
        let reviews = ReviewStore::new(kv.clone());
        let before = reviews.list().unwrap();

        let target = before[1].id;
        reviews.increment_like(target).unwrap();
        reviews.increment_dislike(before[2].id).unwrap();

        let after = ReviewStore::new(kv).list().unwrap();
        assert_eq!(after[1].likes, before[1].likes + 1);
        assert_eq!(after[1].dislikes, before[1].dislikes);
        assert_eq!(after[2].dislikes, before[2].dislikes + 1);
        assert_eq!(after[0].likes, before[0].likes);
    }

    #[test]
    fn increment_with_unknown_id_changes_nothing() {
        let reviews = store();
        let before = reviews.list().unwrap();
        reviews.increment_like(-1).unwrap();
        assert_eq!(reviews.list().unwrap(), before);
    }

    #[test]
    fn newest_orders_by_id_descending() {
        let out = sorted(vec![review(1, 3), review(3, 1), review(2, 5)], ReviewSort::Newest);
        let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn rating_sorts_are_strict_and_stable_on_ties() {
        let input = vec![review(1, 4), review(2, 5), review(3, 4), review(4, 2)];

        let highest = sorted(input.clone(), ReviewSort::Highest);
        let ids: Vec<i64> = highest.iter().map(|r| r.id).collect();
        // The two rating-4 reviews keep their prior relative order.
        assert_eq!(ids, vec![2, 1, 3, 4]);

        let lowest = sorted(input, ReviewSort::Lowest);
        let ids: Vec<i64> = lowest.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 1, 3, 2]);
    }

    #[test]
    fn theme_round_trips_through_the_store() {
        let kv = MemoryStore::new();
        assert_eq!(load_theme(&kv), None);

        save_theme(&kv, Theme::Dark);
        assert_eq!(load_theme(&kv), Some(Theme::Dark));

        save_theme(&kv, Theme::Dark.toggled());
        assert_eq!(load_theme(&kv), Some(Theme::Light));
    }
}
