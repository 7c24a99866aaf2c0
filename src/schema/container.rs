//! Container-backed step descriptors

use crate::schema::filter::Filter;
use crate::schema::types::StringSeq;
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::HashMap;

/// Registry credentials for pulling a private image.
///
/// Carried as data only; nothing in this crate interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// The generic container descriptor shared by every container-backed step
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Container {
    /// Image reference, e.g. `golang:1.9`
    pub image: String,

    /// Always pull the image before running
    pub pull: bool,

    /// Run the container in privileged mode
    pub privileged: bool,

    /// Environment variables in `KEY=value` form
    pub environment: StringSeq,

    /// Entrypoint override
    pub entrypoint: StringSeq,

    /// Command override (distinct from build `commands`)
    pub command: StringSeq,

    /// Host volume mounts
    pub volumes: Vec<String>,

    /// Device mappings
    pub devices: Vec<String>,

    /// Extra `host:ip` name mappings
    pub extra_hosts: Vec<String>,

    /// Network mode, e.g. `bridge` or `host`
    pub network: String,

    /// Process namespace mode
    pub pid: String,

    /// DNS servers
    pub dns: StringSeq,

    /// Registry credentials for private images
    pub auth_config: Option<AuthConfig>,

    /// Memory limit in bytes, 0 for unlimited
    pub memory: i64,

    /// CPU set the container is pinned to, e.g. `0,1`
    pub cpuset: String,

    /// Disable the kernel OOM killer for this container
    pub oom_kill_disable: bool,
}

/// Build step descriptor: a container plus the shell commands run inside it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Build {
    #[serde(flatten)]
    pub container: Container,

    /// Shell commands executed in the build container, in order
    pub commands: StringSeq,
}

/// Plugin step descriptor: a container plus arbitrary plugin arguments
/// and an optional condition gate.
///
/// Keys that are not container fields are collected into `vargs`
/// untouched, so a plugin defines its own argument surface.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Plugin {
    #[serde(flatten)]
    pub container: Container,

    /// Conditions restricting when this step runs
    pub when: Option<Filter>,

    /// Plugin-specific arguments, passed through verbatim
    #[serde(flatten)]
    pub vargs: HashMap<String, Value>,
}
