//! crates/esg_core/src/profile.rs
//! Topic profile content: metrics, narrative, frameworks, integrity score.
//! Pure data + display mappings; the literal text lives in the catalog asset.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// ESG pillar of a metric. Serialized as its single letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pillar {
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    Environmental,
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Social,
    #[cfg_attr(feature = "serde", serde(rename = "G"))]
    Governance,
}

impl Pillar {
    pub const ALL: [Pillar; 3] = [Pillar::Environmental, Pillar::Social, Pillar::Governance];

    pub fn full_name(self) -> &'static str {
        match self {
            Pillar::Environmental => "Environmental",
            Pillar::Social => "Social",
            Pillar::Governance => "Governance",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Direction of a metric's change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Up, Direction::Down, Direction::Flat];

    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Flat => "—",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Flat => "flat",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metric {
    pub pillar: Pillar,
    pub value: String,
    pub unit: String,
    pub label: String,
    pub change: String,
    pub direction: Direction,
}

/// One content bundle per topic identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopicProfile {
    pub topic: String,
    pub icon: String,
    pub style_class: String,
    pub frameworks: Vec<String>,
    pub key_metrics: Vec<Metric>,
    pub pull_quote: String,
    pub paragraphs: Vec<String>,
    pub integrity_score: u8,
    pub audience: String,
}

impl TopicProfile {
    /// `icon` and `topic` joined the way badges and header tags show them.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.icon, self.topic)
    }

    /// Domain checks the schema cannot express on its own.
    pub fn validate(&self, topic_id: &str) -> Result<(), CoreError> {
        if self.integrity_score > 100 {
            return Err(CoreError::DomainOutOfRange("integrity_score"));
        }
        if self.topic.trim().is_empty() {
            return Err(CoreError::EmptyField { topic: topic_id.to_string(), field: "topic" });
        }
        if self.style_class.trim().is_empty() {
            return Err(CoreError::EmptyField { topic: topic_id.to_string(), field: "style_class" });
        }
        Ok(())
    }
}

/// Title/subtitle shown in the report hero. Kept apart from the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TitleEntry {
    pub title: String,
    pub subtitle: String,
}

/// One row of the trend sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrendRow {
    pub name: String,
    pub score: u8,
}
