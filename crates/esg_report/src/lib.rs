//! esg_report — view models and renderers for the landing and report surfaces.
//!
//!   • View building is pure (`view`); renderers never look at the catalog
//!   • Renderers are feature-gated: `render_html`, `render_json`
//!   • A page only fills the regions its `Layout` provides
//!   • Dates and the clock come from the `now` carried in `RenderContext`

#![forbid(unsafe_code)]

pub mod dates;
pub mod layout;
pub mod view;

#[cfg(feature = "render_html")]
pub mod render_html;

#[cfg(feature = "render_json")]
pub mod render_json;

pub use layout::{Layout, Region};
pub use view::{
    build_landing_view, build_report_view, report_href, report_view_for, LandingView,
    NarrativeBlock, RenderContext, ReportView,
};

#[cfg(feature = "render_html")]
pub use render_html::{render_landing_html, render_report_html};

#[cfg(feature = "render_json")]
pub use render_json::render_report_json;

/// Landing page file name in a built site.
pub const LANDING_FILE: &str = "index.html";

/// Report file written when the topic is resolved from the session.
pub const DEFAULT_REPORT_FILE: &str = "report.html";
