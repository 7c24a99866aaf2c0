//! Top-level pipeline document

use crate::schema::container::{Build, Container, Plugin};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

/// Error raised while loading a pipeline document
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid pipeline document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// An ordered collection of named steps.
///
/// Document order is execution order, so section entries are kept as a
/// list of name/step pairs rather than a map.
#[derive(Debug, Clone)]
pub struct Steps<T>(Vec<(String, T)>);

impl<T> Steps<T> {
    /// Entries in document order
    pub fn iter(&self) -> std::slice::Iter<'_, (String, T)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Steps<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Vec<(String, T)>> for Steps<T> {
    fn from(entries: Vec<(String, T)>) -> Self {
        Self(entries)
    }
}

impl<'de, T> Deserialize<'de> for Steps<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StepsVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for StepsVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = Steps<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of step name to step")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((name, step)) = map.next_entry::<String, T>()? {
                    entries.push((name, step));
                }
                Ok(Steps(entries))
            }
        }

        deserializer.deserialize_map(StepsVisitor(PhantomData))
    }
}

/// A full pipeline document.
///
/// Sections appear in the tree in the order the executor runs them, not
/// the order they appear in the document; entries within a section keep
/// document order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pipeline {
    /// Workspace cache step, run before and after the pipeline body
    pub cache: Option<Plugin>,

    /// Source checkout step
    pub clone: Option<Plugin>,

    /// The build step
    pub build: Option<Build>,

    /// Service containers started alongside the build
    pub compose: Steps<Container>,

    /// Artifact publication steps
    pub publish: Steps<Plugin>,

    /// Deployment steps
    pub deploy: Steps<Plugin>,

    /// Notification steps
    pub notify: Steps<Plugin>,
}

impl Pipeline {
    /// Parse a pipeline document from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
