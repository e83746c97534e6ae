//! crates/esg_session/src/report.rs
//! Report controller: read the selection, fall back to the default topic when
//! nothing was selected, and build the render tree. An unknown selection
//! renders nothing.

use esg_core::{Catalog, SelectionRelay, TopicId};
use esg_report::{report_view_for, RenderContext, ReportView};
use tracing::debug;

pub struct ReportRenderer<'a> {
    catalog: &'a Catalog,
    default_topic: TopicId,
    ctx: RenderContext,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(catalog: &'a Catalog, default_topic: TopicId, ctx: RenderContext) -> Self {
        Self { catalog, default_topic, ctx }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Active topic identifier: the relay value, or the default when the value
    /// is absent or empty. Not checked against the catalog.
    pub fn resolve_topic<R: SelectionRelay + ?Sized>(&self, relay: &R) -> String {
        match relay.selection() {
            Some(v) if !v.is_empty() => v,
            _ => {
                debug!(default = %self.default_topic, "no selection; using default topic");
                self.default_topic.to_string()
            }
        }
    }

    /// Render tree for the active topic; `None` when its profile is missing.
    pub fn render<R: SelectionRelay + ?Sized>(&self, relay: &R) -> Option<ReportView> {
        let topic = self.resolve_topic(relay);
        self.render_topic(&topic)
    }

    /// Render tree for an explicit topic.
    pub fn render_topic(&self, topic: &str) -> Option<ReportView> {
        let view = report_view_for(self.catalog, topic, &self.ctx);
        if view.is_none() {
            debug!(topic, "no profile for selection; report left unrendered");
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esg_core::{MemoryRelay, TitleEntry, TopicProfile};

    fn profile(name: &str) -> TopicProfile {
        TopicProfile {
            topic: name.into(),
            icon: "🌍".into(),
            style_class: "topic-x".into(),
            frameworks: vec![],
            key_metrics: vec![],
            pull_quote: "q".into(),
            paragraphs: vec![],
            integrity_score: 50,
            audience: "a".into(),
        }
    }

    fn catalog() -> Catalog {
        let mut c = Catalog::default();
        for (id, name) in [("climate", "Climate"), ("water", "Water")] {
            c.profiles.insert(id.parse().unwrap(), profile(name));
        }
        c.titles.insert(
            "climate".parse().unwrap(),
            TitleEntry { title: "T".into(), subtitle: "S".into() },
        );
        c
    }

    fn renderer(c: &Catalog) -> ReportRenderer<'_> {
        let now = chrono::DateTime::from_timestamp(0, 0).unwrap();
        ReportRenderer::new(c, "climate".parse().unwrap(), RenderContext::new(now))
    }

    #[test]
    fn absent_or_empty_selection_uses_default() {
        let c = catalog();
        let r = renderer(&c);
        assert_eq!(r.resolve_topic(&MemoryRelay::new()), "climate");
        assert_eq!(r.resolve_topic(&MemoryRelay::with_selection("")), "climate");
        assert_eq!(r.render(&MemoryRelay::new()).unwrap().topic_id, "climate");
    }

    #[test]
    fn stored_selection_wins() {
        let c = catalog();
        let v = renderer(&c).render(&MemoryRelay::with_selection("water")).unwrap();
        assert_eq!(v.badge.text, "🌍 Water");
        assert!(v.title.is_none());
    }

    #[test]
    fn unknown_or_malformed_selection_renders_nothing() {
        let c = catalog();
        let r = renderer(&c);
        assert!(r.render(&MemoryRelay::with_selection("energy")).is_none());
        assert!(r.render(&MemoryRelay::with_selection("../etc")).is_none());
    }
}
