//! gantry - translates declarative build-pipeline documents into an executable node tree

pub mod schema;
pub mod tree;

// Re-export commonly used types
pub use schema::{AuthConfig, Build, Container, Filter, Pipeline, Plugin, SchemaError, StringSeq};
pub use tree::{assemble, DockerNode, FilterNode, ListNode, Node, NodeKind, RunContext, RunStatus};
