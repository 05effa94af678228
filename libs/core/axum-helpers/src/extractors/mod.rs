//! Custom extractors for common request parsing needs.

pub mod uuid_path;

pub use uuid_path::UuidPath;
