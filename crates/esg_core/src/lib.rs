//! esg_core — Core types for the ESG report engine.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! workspace (`esg_io`, `esg_report`, `esg_session`, `esg_cli`).
//!
//! - Topic identifiers: `TopicId`
//! - Profile content: `TopicProfile`, `Metric`, `Pillar`, `Direction`
//! - Auxiliary tables keyed by topic: titles, trends
//! - Framework alignment by position (`ready` / `partial` / `pending`)
//! - The cross-surface selection relay (`SelectionRelay`)
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain validation & parsing.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidTopicId(String),
        DomainOutOfRange(&'static str),
        MissingTitle(String),
        EmptyField { topic: String, field: &'static str },
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidTopicId(s) => write!(f, "invalid topic id: {s:?}"),
                CoreError::DomainOutOfRange(k) => write!(f, "domain out of range: {k}"),
                CoreError::MissingTitle(t) => write!(f, "topic {t} has no title entry"),
                CoreError::EmptyField { topic, field } => {
                    write!(f, "topic {topic}: field `{field}` must not be empty")
                }
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod alignment;
pub mod catalog;
pub mod ids;
pub mod profile;
pub mod relay;

pub use alignment::{alignment_for, FrameworkStatus};
pub use catalog::{Catalog, ProfileStore, TitleTable, TrendTable};
pub use errors::CoreError;
pub use ids::TopicId;
pub use profile::{Direction, Metric, Pillar, TitleEntry, TopicProfile, TrendRow};
pub use relay::{MemoryRelay, SelectionRelay, SELECTION_KEY};

/// Identifier of the topic shown when no selection has been made.
pub const DEFAULT_TOPIC: &str = "climate";
