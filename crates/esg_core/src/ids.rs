//! crates/esg_core/src/ids.rs
//! Topic identifiers. ASCII-only, strict shape; no I/O.

use core::fmt;
use core::str::FromStr;
use std::borrow::Borrow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const TOPIC_MAX_LEN: usize = 32;

/// Token for topic identifiers: ^[a-z0-9_-]{1,32}$
#[inline]
pub fn is_valid_topic_token(s: &str) -> bool {
    let bs = s.as_bytes();
    if bs.is_empty() || bs.len() > TOPIC_MAX_LEN {
        return false;
    }
    bs.iter()
        .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

/// Identifier selecting one content bundle (e.g. `climate`, `energy`).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TopicId(String);

impl TopicId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TopicId {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_topic_token(s) {
            return Err(CoreError::InvalidTopicId(s.to_string()));
        }
        Ok(TopicId(s.to_string()))
    }
}

impl TryFrom<&str> for TopicId {
    type Error = CoreError;
    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for TopicId {
    type Error = CoreError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_valid_topic_token(&value) {
            return Err(CoreError::InvalidTopicId(value));
        }
        Ok(TopicId(value))
    }
}

impl From<TopicId> for String {
    #[inline]
    fn from(id: TopicId) -> Self {
        id.0
    }
}

// Lets the catalog maps be queried with a raw relay value (`&str`).
impl Borrow<str> for TopicId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_tokens() {
        for ok in ["climate", "energy", "governance", "supply-chain", "t_2"] {
            assert_eq!(ok.parse::<TopicId>().unwrap().as_str(), ok);
        }
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!("".parse::<TopicId>().is_err());
        assert!("Climate".parse::<TopicId>().is_err());
        assert!("energy ".parse::<TopicId>().is_err());
        assert!("é".parse::<TopicId>().is_err());
        assert!("x".repeat(33).parse::<TopicId>().is_err());
        assert!(TopicId::try_from(String::from("a/b")).is_err());
    }

    #[test]
    fn borrows_as_str_for_map_lookups() {
        let mut m = std::collections::BTreeMap::new();
        m.insert("energy".parse::<TopicId>().unwrap(), 6u8);
        assert_eq!(m.get("energy"), Some(&6));
        assert_eq!(m.get("water"), None);
    }
}
