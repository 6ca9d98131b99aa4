pub mod app;
pub mod components;
pub mod data;
pub mod models;
pub mod state;
pub mod storage;
pub mod telegram;
pub mod utils;
