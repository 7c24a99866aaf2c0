//! Container invocation nodes

use crate::schema::{AuthConfig, Build, Container, Plugin};
use crate::tree::kind::NodeKind;
use serde_yaml::Value;
use std::collections::HashMap;

/// One container invocation in the tree.
///
/// Every container-backed step category shares this shape; the `kind` tag
/// and the two specialization fields tell them apart. `commands` is
/// populated only by [`DockerNode::from_build`], `vargs` only by
/// [`DockerNode::from_plugin`] - a constructor convention, not a
/// structural guarantee.
#[derive(Debug, Clone)]
pub struct DockerNode {
    /// Step category, always one of the container kinds
    pub kind: NodeKind,

    pub image: String,
    pub pull: bool,
    pub privileged: bool,
    pub environment: Vec<String>,
    pub entrypoint: Vec<String>,
    pub command: Vec<String>,

    /// Shell commands run inside the container, build steps only
    pub commands: Vec<String>,

    pub volumes: Vec<String>,
    pub devices: Vec<String>,
    pub extra_hosts: Vec<String>,
    pub network: String,
    pub pid: String,
    pub dns: Vec<String>,
    pub auth_config: Option<AuthConfig>,
    pub memory: i64,
    pub cpuset: String,
    pub oom_kill_disable: bool,

    /// Plugin arguments, plugin-derived steps only
    pub vargs: HashMap<String, Value>,
}

impl DockerNode {
    /// Build a node from a generic container descriptor.
    ///
    /// Flexible scalar-or-list fields normalize to plain vectors and the
    /// specialization fields stay empty. Every value is copied; nothing
    /// aliases the descriptor after construction.
    pub fn from_container(kind: NodeKind, container: &Container) -> Self {
        Self {
            kind,
            image: container.image.clone(),
            pull: container.pull,
            privileged: container.privileged,
            environment: container.environment.to_vec(),
            entrypoint: container.entrypoint.to_vec(),
            command: container.command.to_vec(),
            commands: Vec::new(),
            volumes: container.volumes.clone(),
            devices: container.devices.clone(),
            extra_hosts: container.extra_hosts.clone(),
            network: container.network.clone(),
            pid: container.pid.clone(),
            dns: container.dns.to_vec(),
            auth_config: container.auth_config.clone(),
            memory: container.memory,
            cpuset: container.cpuset.clone(),
            oom_kill_disable: container.oom_kill_disable,
            vargs: HashMap::new(),
        }
    }

    /// Build a plugin-derived node. The only path that populates `vargs`.
    pub fn from_plugin(kind: NodeKind, plugin: &Plugin) -> Self {
        let mut node = Self::from_container(kind, &plugin.container);
        node.vargs = plugin.vargs.clone();
        node
    }

    /// Build a build-step node. The only path that populates `commands`.
    pub fn from_build(kind: NodeKind, build: &Build) -> Self {
        let mut node = Self::from_container(kind, &build.container);
        node.commands = build.commands.to_vec();
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::StringSeq;

    #[test]
    fn test_from_build_scenario() {
        let build = Build {
            container: Container {
                image: "golang:1.9".to_string(),
                ..Container::default()
            },
            commands: StringSeq::new(vec!["go build".to_string(), "go test".to_string()]),
        };

        let node = DockerNode::from_build(NodeKind::Build, &build);
        assert_eq!(node.kind, NodeKind::Build);
        assert_eq!(node.image, "golang:1.9");
        assert_eq!(node.commands, vec!["go build", "go test"]);
        assert!(node.vargs.is_empty());
    }

    #[test]
    fn test_from_plugin_populates_vargs_only() {
        let yaml = r#"
image: plugins/s3
bucket: releases
region: us-east-1
"#;
        let plugin: Plugin = serde_yaml::from_str(yaml).unwrap();

        let node = DockerNode::from_plugin(NodeKind::Publish, &plugin);
        assert_eq!(node.kind, NodeKind::Publish);
        assert_eq!(node.vargs.len(), 2);
        assert_eq!(
            node.vargs.get("bucket"),
            Some(&Value::String("releases".to_string()))
        );
        assert!(node.commands.is_empty());
    }

    #[test]
    fn test_from_container_leaves_both_specializations_empty() {
        let container = Container {
            image: "postgres:9.6".to_string(),
            ..Container::default()
        };

        let node = DockerNode::from_container(NodeKind::Compose, &container);
        assert_eq!(node.kind, NodeKind::Compose);
        assert!(node.commands.is_empty());
        assert!(node.vargs.is_empty());
    }

    #[test]
    fn test_scalar_fields_round_trip() {
        let container = Container {
            image: "redis:3.2".to_string(),
            pull: true,
            privileged: true,
            network: "host".to_string(),
            pid: "host".to_string(),
            memory: 536870912,
            cpuset: "0-3".to_string(),
            oom_kill_disable: true,
            auth_config: Some(AuthConfig {
                username: "octocat".to_string(),
                password: "secret".to_string(),
                email: String::new(),
            }),
            ..Container::default()
        };

        let node = DockerNode::from_container(NodeKind::Cache, &container);
        assert_eq!(node.image, container.image);
        assert_eq!(node.pull, container.pull);
        assert_eq!(node.privileged, container.privileged);
        assert_eq!(node.network, container.network);
        assert_eq!(node.pid, container.pid);
        assert_eq!(node.memory, container.memory);
        assert_eq!(node.cpuset, container.cpuset);
        assert_eq!(node.oom_kill_disable, container.oom_kill_disable);
        assert_eq!(node.auth_config, container.auth_config);
    }

    #[test]
    fn test_construction_is_pure() {
        let yaml = r#"
image: plugins/docker
environment: DOCKER_LAUNCH_DEBUG=true
repo: octocat/hello-world
"#;
        let plugin: Plugin = serde_yaml::from_str(yaml).unwrap();

        let first = DockerNode::from_plugin(NodeKind::Deploy, &plugin);
        let second = DockerNode::from_plugin(NodeKind::Deploy, &plugin);
        assert_eq!(first.kind, second.kind);
        assert_eq!(first.image, second.image);
        assert_eq!(first.environment, second.environment);
        assert_eq!(first.vargs, second.vargs);
    }
}
