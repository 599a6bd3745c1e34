//! Rate extraction, recommendation and the abstractions around them

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod history;
pub mod log;
pub mod observation;

// Re-export main types for cleaner imports
pub use engine::recommend;
pub use error::CoreError;
pub use extract::extract;
pub use history::{FetchError, HistoryProvider, TrailingWindow};
pub use observation::{Observation, Recommendation};
