use chrono::Local;
use serde::{Deserialize, Serialize};

/// A user review, persisted as part of the JSON array under the `reviews`
/// local-storage key. Counters are unsigned so they can never go negative.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,      // Millisecond timestamp at creation time
    pub user: String, // First name of the author
    pub rating: u8,   // 1-5 stars
    pub text: String,
    pub date: String, // Display date, dd.mm.yyyy
    pub likes: u32,
    pub dislikes: u32,
}

impl Review {
    /// Builds a fresh review dated now. The id is the creation timestamp in
    /// milliseconds; two submissions within the same millisecond get the
    /// same id. Deliberately unguarded.
    pub fn new(user: String, rating: u8, text: String) -> Self {
        let now = Local::now();
        Self {
            id: now.timestamp_millis(),
            user,
            rating,
            text,
            date: now.format("%d.%m.%Y").to_string(),
            likes: 0,
            dislikes: 0,
        }
    }
}
