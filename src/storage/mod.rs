//! Resource loading and index persistence

pub mod corpus;
pub mod slang;
pub mod snapshot;
pub mod vectors;

pub use snapshot::Snapshot;
pub use vectors::VectorFile;
