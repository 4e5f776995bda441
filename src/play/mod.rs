// Play session admission: per (content, user) counters with a fixed ceiling

pub mod limiter;
pub mod store;

pub use limiter::{Decision, PlayAttempt, PlaySessionLimiter};
pub use store::{InMemoryPlayCounterStore, PlayCounterStore, PlayKey};
