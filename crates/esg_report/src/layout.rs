//! crates/esg_report/src/layout.rs
//! Output regions a page template provides. Renderers populate a region only
//! when the layout has it; a missing region never blocks the others.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    TopicBadge,
    ReportDate,
    Header,
    Title,
    MetricsGrid,
    Narrative,
    FrameworkTags,
    IntegrityBar,
    Audience,
    Trends,
    FrameworkAlignment,
    ExportControl,
    LiveClock,
    LoadingOverlay,
}

impl Region {
    pub const ALL: [Region; 14] = [
        Region::TopicBadge,
        Region::ReportDate,
        Region::Header,
        Region::Title,
        Region::MetricsGrid,
        Region::Narrative,
        Region::FrameworkTags,
        Region::IntegrityBar,
        Region::Audience,
        Region::Trends,
        Region::FrameworkAlignment,
        Region::ExportControl,
        Region::LiveClock,
        Region::LoadingOverlay,
    ];

    /// Element id in the rendered document.
    pub fn id(self) -> &'static str {
        match self {
            Region::TopicBadge => "topic-badge",
            Region::ReportDate => "report-date",
            Region::Header => "report-header",
            Region::Title => "report-title",
            Region::MetricsGrid => "metrics-grid",
            Region::Narrative => "narrative",
            Region::FrameworkTags => "framework-tags",
            Region::IntegrityBar => "integrity-bar",
            Region::Audience => "audience",
            Region::Trends => "trend-list",
            Region::FrameworkAlignment => "framework-alignment",
            Region::ExportControl => "export-pdf",
            Region::LiveClock => "live-clock",
            Region::LoadingOverlay => "loading-overlay",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Region {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| format!("unknown region: {s}"))
    }
}

/// Set of regions present on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    regions: BTreeSet<Region>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::full()
    }
}

impl Layout {
    pub fn full() -> Self {
        Self { regions: Region::ALL.into_iter().collect() }
    }

    pub fn without<I: IntoIterator<Item = Region>>(mut self, omitted: I) -> Self {
        for r in omitted {
            self.regions.remove(&r);
        }
        self
    }

    /// Full layout minus the named region ids.
    pub fn omitting_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self, String> {
        let omitted = ids
            .iter()
            .map(|s| s.as_ref().parse::<Region>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::full().without(omitted))
    }

    #[inline]
    pub fn has(&self, r: Region) -> bool {
        self.regions.contains(&r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_are_unique() {
        let ids: BTreeSet<_> = Region::ALL.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), Region::ALL.len());
        assert_eq!("metrics-grid".parse::<Region>(), Ok(Region::MetricsGrid));
        assert!("sidebar".parse::<Region>().is_err());
    }

    #[test]
    fn omitting_ids_removes_only_named_regions() {
        let l = Layout::omitting_ids(&["trend-list", "export-pdf"]).unwrap();
        assert!(!l.has(Region::Trends));
        assert!(!l.has(Region::ExportControl));
        assert!(l.has(Region::MetricsGrid));
        assert!(Layout::omitting_ids(&["nope"]).is_err());
    }
}
