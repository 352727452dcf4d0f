// Rubble-Search: search results you can drop, stack, and wreck
// A 2D rigid-body board kept in lock-step with a DOM-like surface

pub mod utils;
pub mod config;
pub mod world;
pub mod dom;
pub mod search;
pub mod board;
pub mod app;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::BoardSettings;
pub use search::{ResultItem, ResultPage, SearchBackend};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
