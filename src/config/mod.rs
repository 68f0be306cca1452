//! Configuration module for Cashpulse
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashpulsePaths;
pub use settings::Settings;
