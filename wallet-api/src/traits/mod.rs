pub mod priority;

pub use priority::{PriorityResolver, StaticPriorities, SENTINEL_PRIORITY};
