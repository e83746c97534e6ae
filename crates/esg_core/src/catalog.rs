//! crates/esg_core/src/catalog.rs
//! The three read-only lookup tables keyed by topic identifier.
//!
//! Profiles, titles and trends are deliberately separate stores: a topic may
//! exist in one and be missing from another, and readers must tolerate that.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::TopicId;
use crate::profile::{TitleEntry, TopicProfile, TrendRow};

macro_rules! topic_table {
    ($(#[$m:meta])* $name:ident, $value:ty) => {
        $(#[$m])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(BTreeMap<TopicId, $value>);

        impl $name {
            pub fn new() -> Self {
                Self(BTreeMap::new())
            }

            #[inline]
            pub fn get(&self, topic: &str) -> Option<&$value> {
                self.0.get(topic)
            }

            #[inline]
            pub fn contains(&self, topic: &str) -> bool {
                self.0.contains_key(topic)
            }

            pub fn insert(&mut self, topic: TopicId, value: $value) -> Option<$value> {
                self.0.insert(topic, value)
            }

            /// Topic identifiers in ascending order.
            pub fn topics(&self) -> impl Iterator<Item = &TopicId> {
                self.0.keys()
            }

            pub fn iter(&self) -> impl Iterator<Item = (&TopicId, &$value)> {
                self.0.iter()
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl FromIterator<(TopicId, $value)> for $name {
            fn from_iter<I: IntoIterator<Item = (TopicId, $value)>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }
    };
}

topic_table!(
    /// Topic identifier → full content bundle.
    ProfileStore,
    TopicProfile
);
topic_table!(
    /// Topic identifier → report title/subtitle.
    TitleTable,
    TitleEntry
);
topic_table!(
    /// Topic identifier → trend sidebar rows (stored order is display order).
    TrendTable,
    Vec<TrendRow>
);

/// All static content, loaded once and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    pub profiles: ProfileStore,
    pub titles: TitleTable,
    pub trends: TrendTable,
}

impl Catalog {
    /// Every profile must validate and have a title entry. Trend rows are
    /// optional per topic, but scores stay within 0..=100.
    pub fn check(&self) -> Result<(), CoreError> {
        for (id, profile) in self.profiles.iter() {
            profile.validate(id.as_str())?;
            if !self.titles.contains(id.as_str()) {
                return Err(CoreError::MissingTitle(id.to_string()));
            }
        }
        for (_, rows) in self.trends.iter() {
            if rows.iter().any(|r| r.score > 100) {
                return Err(CoreError::DomainOutOfRange("trend score"));
            }
        }
        Ok(())
    }

    /// Topics present in the profile store but absent from an auxiliary table.
    pub fn coverage_gaps(&self) -> Vec<(TopicId, &'static str)> {
        let mut gaps = Vec::new();
        for id in self.profiles.topics() {
            if !self.titles.contains(id.as_str()) {
                gaps.push((id.clone(), "titles"));
            }
            if !self.trends.contains(id.as_str()) {
                gaps.push((id.clone(), "trends"));
            }
        }
        gaps
    }
}
