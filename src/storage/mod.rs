//! Persistence layer: the snapshot codec and its backends.

pub mod json;
pub mod traits;

pub use json::JsonSnapshotRepository;
pub use traits::SnapshotStorage;
