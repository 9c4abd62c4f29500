pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod inference;
pub mod state;
