use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Offer {
    pub title: String,          // Offer name
    pub reward: u32,            // Payout in rubles
    pub description: String,    // Short pitch shown on the card
    pub completed_count: u32,   // How many users finished it
    pub estimated_time: String, // Human-readable duration, e.g. "15-30 мин"
}
