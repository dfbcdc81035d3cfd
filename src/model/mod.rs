pub mod entry;
pub mod recency;
