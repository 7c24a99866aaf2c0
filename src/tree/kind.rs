//! Node category tags

/// Identifies the category of a tree node.
///
/// Every node carries exactly one kind. Container-backed steps are tagged
/// with their specific category, not a generic container kind, so the
/// executor can treat (say) a cache step differently from a deploy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    List,
    Filter,
    Build,
    Cache,
    Clone,
    Deploy,
    Compose,
    Notify,
    Publish,
}

/// The seven kinds whose execution is "run a container".
pub const CONTAINER_KINDS: [NodeKind; 7] = [
    NodeKind::Build,
    NodeKind::Cache,
    NodeKind::Clone,
    NodeKind::Deploy,
    NodeKind::Compose,
    NodeKind::Notify,
    NodeKind::Publish,
];

impl NodeKind {
    /// Set-membership test, e.g.
    /// `kind.in_set(&[NodeKind::Deploy, NodeKind::Publish, NodeKind::Notify])`
    pub fn in_set(self, set: &[NodeKind]) -> bool {
        set.contains(&self)
    }

    /// True for any container-backed step kind
    pub fn is_container(self) -> bool {
        !matches!(self, NodeKind::List | NodeKind::Filter)
    }
}
