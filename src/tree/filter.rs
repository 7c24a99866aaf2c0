//! Condition gate nodes

use crate::schema::Filter;
use crate::tree::kind::NodeKind;
use crate::tree::node::Node;
use std::collections::HashMap;

/// A gate wrapping exactly one child node.
///
/// The executor consults [`FilterNode::matches`] before recursing into
/// the child; a non-matching gate means the child is skipped, not failed.
#[derive(Debug, Clone)]
pub struct FilterNode {
    pub repo: String,
    pub branch: Vec<String>,
    pub event: Vec<String>,
    pub success: String,
    pub failure: String,
    pub change: String,
    pub matrix: HashMap<String, String>,
    pub environment: Vec<String>,

    /// The guarded node
    pub node: Box<Node>,
}

impl FilterNode {
    /// Build a gate from its descriptor and the node it guards.
    ///
    /// The child is required up front; a gate with nothing to guard is
    /// not representable.
    pub fn new(filter: &Filter, node: Node) -> Self {
        Self {
            repo: filter.repo.clone(),
            branch: filter.branch.to_vec(),
            event: filter.event.to_vec(),
            success: filter.success.clone(),
            failure: filter.failure.clone(),
            change: filter.change.clone(),
            matrix: filter.matrix.clone(),
            environment: filter.environment.to_vec(),
            node: Box::new(node),
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Filter
    }

    /// True when every non-empty condition holds for the given run.
    /// Empty conditions are vacuously satisfied, so an unconstrained gate
    /// matches any run.
    pub fn matches(&self, ctx: &RunContext) -> bool {
        if !self.repo.is_empty() && self.repo != ctx.repo {
            return false;
        }
        if !self.branch.is_empty() && !self.branch.contains(&ctx.branch) {
            return false;
        }
        if !self.event.is_empty() && !self.event.contains(&ctx.event) {
            return false;
        }
        if !self.environment.is_empty() && !self.environment.contains(&ctx.environment) {
            return false;
        }
        for (axis, value) in &self.matrix {
            if ctx.matrix.get(axis) != Some(value) {
                return false;
            }
        }
        if !self.success.is_empty()
            && gate_enabled(&self.success) != (ctx.status == RunStatus::Success)
        {
            return false;
        }
        if !self.failure.is_empty()
            && gate_enabled(&self.failure) != (ctx.status == RunStatus::Failure)
        {
            return false;
        }
        if !self.change.is_empty() && gate_enabled(&self.change) != ctx.changed {
            return false;
        }
        true
    }
}

fn gate_enabled(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Disposition of the run so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Success,
    Failure,
}

/// Everything about the current run a gate may constrain
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Full repository name
    pub repo: String,

    /// Branch the run was triggered for
    pub branch: String,

    /// Triggering event, e.g. `push`, `tag`, `pull_request`
    pub event: String,

    /// Deployment environment of the run, if any
    pub environment: String,

    /// Matrix axis values of this run
    pub matrix: HashMap<String, String>,

    /// Whether the run has succeeded or failed so far
    pub status: RunStatus,

    /// Whether the status differs from the previous run
    pub changed: bool,
}
