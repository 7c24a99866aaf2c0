//! Flexible scalar-or-list fields

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// A string field that may be authored as a single value or as a list.
///
/// Both forms normalize to the same ordered sequence: `master` and
/// `[master]` are indistinguishable once deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSeq(Vec<String>);

impl StringSeq {
    /// Create a sequence from the given values
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    /// The normalized values, in authored order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Copy the normalized values into a plain vector
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    /// True when the field was left unspecified
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for StringSeq {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<Vec<String>> for StringSeq {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<'de> Deserialize<'de> for StringSeq {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringSeqVisitor;

        impl<'de> Visitor<'de> for StringSeqVisitor {
            type Value = StringSeq;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or a sequence of strings")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(StringSeq(vec![value.to_string()]))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = Vec::new();
                while let Some(value) = seq.next_element::<String>()? {
                    values.push(value);
                }
                Ok(StringSeq(values))
            }
        }

        deserializer.deserialize_any(StringSeqVisitor)
    }
}

/// Deserialize a gating field authored as either a bare boolean or a
/// string. Booleans normalize to `"true"` / `"false"`.
pub(crate) fn bool_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct GateVisitor;

    impl<'de> Visitor<'de> for GateVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean or a string")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(GateVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_single_list_normalize_identically() {
        let scalar: StringSeq = serde_yaml::from_str("master").unwrap();
        let list: StringSeq = serde_yaml::from_str("- master").unwrap();

        assert_eq!(scalar, list);
        assert_eq!(scalar.as_slice(), ["master".to_string()]);
    }

    #[test]
    fn test_list_preserves_order() {
        let seq: StringSeq = serde_yaml::from_str("- a\n- b\n- c").unwrap();
        assert_eq!(seq.to_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_is_empty() {
        let seq = StringSeq::default();
        assert!(seq.is_empty());
        assert!(seq.as_slice().is_empty());
    }

    #[test]
    fn test_from_str_wraps_single_value() {
        let seq = StringSeq::from("push");
        assert_eq!(seq.to_vec(), vec!["push"]);
    }
}
