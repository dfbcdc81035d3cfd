pub mod classify;
pub mod launcher;
pub mod manifest;
pub mod rank;
pub mod recency;
pub mod store;
