//! Optimized collection types for sideslip.
//!
//! Re-exports AHash-backed hash collections used across the workspace.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
