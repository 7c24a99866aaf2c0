//! Tree structure: the node sum type and ordered lists

use crate::tree::docker::DockerNode;
use crate::tree::filter::FilterNode;
use crate::tree::kind::NodeKind;

/// Any element of the pipeline tree.
///
/// The executor dispatches on [`Node::kind`]; it never needs to know
/// every concrete step category, only the three structural shapes.
#[derive(Debug, Clone)]
pub enum Node {
    /// An ordered stage of child nodes
    List(ListNode),
    /// A container invocation
    Docker(DockerNode),
    /// A condition gate around one child
    Filter(FilterNode),
}

impl Node {
    /// The category tag of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::List(list) => list.kind(),
            Node::Docker(docker) => docker.kind,
            Node::Filter(filter) => filter.kind(),
        }
    }
}

impl From<ListNode> for Node {
    fn from(list: ListNode) -> Self {
        Node::List(list)
    }
}

impl From<DockerNode> for Node {
    fn from(docker: DockerNode) -> Self {
        Node::Docker(docker)
    }
}

impl From<FilterNode> for Node {
    fn from(filter: FilterNode) -> Self {
        Node::Filter(filter)
    }
}

/// An ordered stage of the pipeline.
///
/// Children run in append order. Append is the only mutator; nodes are
/// never removed or reordered once added. Appended nodes are moved in and
/// owned exclusively by the list.
#[derive(Debug, Clone, Default)]
pub struct ListNode {
    nodes: Vec<Node>,
}

impl ListNode {
    /// Create an empty list
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::List
    }

    /// Append nodes, preserving the order given
    pub fn append<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.nodes.extend(nodes);
    }

    /// Children in execution order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Container;

    fn docker(image: &str) -> Node {
        let container = Container {
            image: image.to_string(),
            ..Container::default()
        };
        Node::Docker(DockerNode::from_container(NodeKind::Build, &container))
    }

    fn images(list: &ListNode) -> Vec<String> {
        list.nodes()
            .iter()
            .map(|node| match node {
                Node::Docker(docker) => docker.image.clone(),
                other => panic!("expected docker node, got {:?}", other.kind()),
            })
            .collect()
    }

    #[test]
    fn test_new_list_is_empty_and_tagged_list() {
        let list = ListNode::new();
        assert!(list.is_empty());
        assert_eq!(list.kind(), NodeKind::List);
        assert_eq!(Node::List(list).kind(), NodeKind::List);
    }

    #[test]
    fn test_append_preserves_call_order() {
        let mut list = ListNode::new();
        list.append([docker("a"), docker("b")]);
        list.append([docker("c")]);

        assert_eq!(images(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_nothing_changes_nothing() {
        let mut list = ListNode::new();
        list.append([docker("a")]);
        list.append(std::iter::empty());

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_lists_nest() {
        let mut inner = ListNode::new();
        inner.append([docker("a")]);

        let mut outer = ListNode::new();
        outer.append([Node::List(inner), docker("b")]);

        assert_eq!(outer.len(), 2);
        assert_eq!(outer.nodes()[0].kind(), NodeKind::List);
        match &outer.nodes()[0] {
            Node::List(nested) => assert_eq!(nested.len(), 1),
            other => panic!("expected nested list, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_node_kind_matches_variant() {
        assert_eq!(docker("a").kind(), NodeKind::Build);
        assert_eq!(Node::List(ListNode::new()).kind(), NodeKind::List);
    }
}
