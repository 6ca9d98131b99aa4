pub mod offer;
pub mod review;
pub mod stats;
pub mod transaction;
pub mod user;
