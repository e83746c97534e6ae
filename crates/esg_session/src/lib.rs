//! esg_session — controllers driving the two surfaces.
//!
//! landing: activation → validate → relay write → navigation request
//! report:  relay read → resolve (default on absence) → render tree
//!
//! Both controllers take the selection relay by reference; nothing here owns
//! process-wide state. Rendering to bytes is left to `esg_report`.

#![forbid(unsafe_code)]

use std::time::Duration;

use esg_core::TopicId;

pub mod landing;
pub mod report;

pub use landing::{Activation, LandingController, Overlay, Trigger};
pub use report::ReportRenderer;

/// Default delay between activation and navigation.
pub const NAV_DELAY: Duration = Duration::from_millis(1100);

/// Which document a navigation targets. Only the landing page navigates, and
/// only ever to a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Report,
}

/// Request to open another surface after `delay`. The topic travels with the
/// request as well as through the relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub target: Surface,
    pub topic: TopicId,
    pub delay: Duration,
    pub href: String,
}
