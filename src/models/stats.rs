use serde::{Deserialize, Serialize};

/// Account figures shown on the home and balance pages. Static mock data;
/// in production this would come from an API call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct UserStats {
    pub balance: u32,          // Available for withdrawal
    pub total_earnings: u32,   // Lifetime earnings
    pub referrals: u32,        // Invited users
    pub completed_offers: u32,
    pub active_days: u32,
    pub hold_balance: u32,     // Earned but not yet released
}
