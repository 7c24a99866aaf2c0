//! Typed pipeline document schema
//!
//! These are the configuration objects the tree constructors consume:
//! container, build, plugin and filter descriptors, plus the top-level
//! document grouping them into ordered sections.

pub mod container;
pub mod filter;
pub mod pipeline;
pub mod types;

pub use container::*;
pub use filter::*;
pub use pipeline::*;
pub use types::*;
