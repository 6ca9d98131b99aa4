use serde::{Deserialize, Serialize};

/// User record provided by the host through `initDataUnsafe.user`.
/// Unsigned data: the host does not vouch for it, and we never mutate it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TelegramUser {
    pub id: i64,                  // Telegram user id
    pub first_name: String,       // Display name shown in the header
    pub username: Option<String>, // @handle, not always present
}

impl TelegramUser {
    /// Fallback identity used when the app runs outside Telegram
    /// or the host did not supply a user object.
    pub fn guest() -> Self {
        Self {
            id: 123456789,
            first_name: "Гость".to_string(),
            username: Some("guest".to_string()),
        }
    }
}
