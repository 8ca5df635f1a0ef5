// Answer caching module

pub mod models;
pub mod store;

pub use models::{CacheConfig, CacheStats};
pub use store::{cache_key, AnswerCache};
