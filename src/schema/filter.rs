//! Condition gate descriptor

use crate::schema::types::{bool_or_string, StringSeq};
use serde::Deserialize;
use std::collections::HashMap;

/// Conditions restricting when a step runs.
///
/// Every field is optional; a field left empty places no constraint.
/// The gating fields accept bare booleans in the document and normalize
/// them to `"true"` / `"false"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Filter {
    /// Full repository name, e.g. `octocat/hello-world`
    pub repo: String,

    /// Branches the step runs for
    pub branch: StringSeq,

    /// Events the step runs for, e.g. `push`, `tag`, `pull_request`
    pub event: StringSeq,

    /// Gate on the run having succeeded so far
    #[serde(deserialize_with = "bool_or_string")]
    pub success: String,

    /// Gate on the run having failed
    #[serde(deserialize_with = "bool_or_string")]
    pub failure: String,

    /// Gate on the run status differing from the previous run
    #[serde(deserialize_with = "bool_or_string")]
    pub change: String,

    /// Required matrix axis values, axis name to exact value
    pub matrix: HashMap<String, String>,

    /// Deployment environments the step runs for
    pub environment: StringSeq,
}
