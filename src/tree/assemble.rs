//! Document-to-tree assembly

use crate::schema::{Pipeline, Plugin};
use crate::tree::docker::DockerNode;
use crate::tree::filter::FilterNode;
use crate::tree::kind::NodeKind;
use crate::tree::node::{ListNode, Node};
use tracing::debug;

/// Translate a typed pipeline document into its executable tree.
///
/// The root is a list whose children run in order: cache restore, clone,
/// compose services, build, publish, deploy, notify, cache rebuild. The
/// cache step appears twice on purpose, once on each side of the pipeline
/// body. Steps carrying a `when` block are wrapped in a filter node.
pub fn assemble(pipeline: &Pipeline) -> Node {
    let mut root = ListNode::new();

    if let Some(cache) = &pipeline.cache {
        debug!(image = %cache.container.image, "cache restore step");
        root.append([plugin_node(NodeKind::Cache, cache)]);
    }
    if let Some(clone) = &pipeline.clone {
        debug!(image = %clone.container.image, "clone step");
        root.append([plugin_node(NodeKind::Clone, clone)]);
    }
    for (name, service) in pipeline.compose.iter() {
        debug!(service = %name, image = %service.image, "compose service");
        root.append([Node::Docker(DockerNode::from_container(
            NodeKind::Compose,
            service,
        ))]);
    }
    if let Some(build) = &pipeline.build {
        debug!(image = %build.container.image, "build step");
        root.append([Node::Docker(DockerNode::from_build(NodeKind::Build, build))]);
    }
    for (name, step) in pipeline.publish.iter() {
        debug!(step = %name, "publish step");
        root.append([plugin_node(NodeKind::Publish, step)]);
    }
    for (name, step) in pipeline.deploy.iter() {
        debug!(step = %name, "deploy step");
        root.append([plugin_node(NodeKind::Deploy, step)]);
    }
    for (name, step) in pipeline.notify.iter() {
        debug!(step = %name, "notify step");
        root.append([plugin_node(NodeKind::Notify, step)]);
    }
    if let Some(cache) = &pipeline.cache {
        debug!(image = %cache.container.image, "cache rebuild step");
        root.append([plugin_node(NodeKind::Cache, cache)]);
    }

    Node::List(root)
}

/// Build a plugin-backed node, wrapped in its gate when one is declared.
fn plugin_node(kind: NodeKind, plugin: &Plugin) -> Node {
    let node = Node::Docker(DockerNode::from_plugin(kind, plugin));
    match &plugin.when {
        Some(filter) => Node::Filter(FilterNode::new(filter, node)),
        None => node,
    }
}
