//! crates/esg_report/src/view.rs
//! Pure render trees for the two surfaces.
//!
//! `build_report_view` maps one `TopicProfile` (plus its title entry and trend
//! rows, looked up separately) onto the report regions. No I/O, no DOM: the
//! HTML/JSON renderers consume these structs.

use chrono::{DateTime, Utc};
use esg_core::{Catalog, FrameworkStatus, TitleEntry, TopicProfile, TrendRow};

#[cfg(feature = "render_json")]
use serde::Serialize;

use crate::dates::{long_date, utc_clock};

/// The pull quote follows the paragraph at this index.
pub const PULL_QUOTE_AFTER: usize = 1;

/// File the landing page links to for `topic`.
pub fn report_href(topic: &str) -> String {
    format!("report-{topic}.html")
}

/// Inputs that are not part of the catalog.
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub product_name: String,
    pub header_suffix: String,
    pub lang: String,
    pub bar_delay_ms: u64,
    pub nav_delay_ms: u64,
    pub now: DateTime<Utc>,
    pub catalog_sha256: Option<String>,
}

impl RenderContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            product_name: "ESG Narrative Intelligence".to_string(),
            header_suffix: "ESG Intelligence Brief".to_string(),
            lang: "en-GB".to_string(),
            bar_delay_ms: 300,
            nav_delay_ms: 1100,
            now,
            catalog_sha256: None,
        }
    }
}

// ------------------------- report tree -------------------------

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub style_class: String,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderBlock {
    pub style_class: String,
    pub tag: String,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleBlock {
    pub title: String,
    pub subtitle: String,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCard {
    pub pillar: String,
    pub value: String,
    pub unit: String,
    pub label: String,
    pub change: String,
    pub direction: String,
    pub glyph: String,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[cfg_attr(feature = "render_json", serde(tag = "kind", content = "text", rename_all = "snake_case"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NarrativeBlock {
    Paragraph(String),
    PullQuote(String),
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameworkTag {
    pub name: String,
    pub status: String,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrityBar {
    pub label: String,
    pub percent: u8,
    pub delay_ms: u64,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendLine {
    pub name: String,
    pub score: u8,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentRow {
    pub framework: String,
    pub status: String,
    pub label: String,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportView {
    pub topic_id: String,
    pub lang: String,
    pub page_title: String,
    pub badge: Badge,
    pub report_date: String,
    pub clock: String,
    pub header: HeaderBlock,
    pub title: Option<TitleBlock>,
    pub metrics: Vec<MetricCard>,
    pub narrative: Vec<NarrativeBlock>,
    pub framework_tags: Vec<FrameworkTag>,
    pub integrity: IntegrityBar,
    pub audience: String,
    pub trends: Option<Vec<TrendLine>>,
    pub alignment: Vec<AlignmentRow>,
    pub catalog_sha256: Option<String>,
}

/// Paragraphs in order with the pull quote after index [`PULL_QUOTE_AFTER`].
/// With fewer paragraphs than that, the quote goes last.
pub fn narrative_blocks(paragraphs: &[String], pull_quote: &str) -> Vec<NarrativeBlock> {
    let mut out = Vec::with_capacity(paragraphs.len() + 1);
    for (i, p) in paragraphs.iter().enumerate() {
        out.push(NarrativeBlock::Paragraph(p.clone()));
        if i == PULL_QUOTE_AFTER {
            out.push(NarrativeBlock::PullQuote(pull_quote.to_string()));
        }
    }
    if paragraphs.len() <= PULL_QUOTE_AFTER {
        out.push(NarrativeBlock::PullQuote(pull_quote.to_string()));
    }
    out
}

pub fn integrity_label(score: u8) -> String {
    format!("Narrative Integrity: {score}%")
}

fn metric_cards(profile: &TopicProfile) -> Vec<MetricCard> {
    profile
        .key_metrics
        .iter()
        .map(|m| MetricCard {
            pillar: m.pillar.full_name().to_string(),
            value: m.value.clone(),
            unit: m.unit.clone(),
            label: m.label.clone(),
            change: m.change.clone(),
            direction: m.direction.as_str().to_string(),
            glyph: m.direction.glyph().to_string(),
        })
        .collect()
}

/// Map one profile onto the report regions.
pub fn build_report_view(
    topic_id: &str,
    profile: &TopicProfile,
    title: Option<&TitleEntry>,
    trends: Option<&[TrendRow]>,
    ctx: &RenderContext,
) -> ReportView {
    let display = profile.display_name();

    let framework_tags = profile
        .frameworks
        .iter()
        .enumerate()
        .map(|(i, f)| FrameworkTag {
            name: f.clone(),
            status: FrameworkStatus::for_index(i).as_str().to_string(),
        })
        .collect();

    let alignment = esg_core::alignment_for(&profile.frameworks)
        .into_iter()
        .map(|(name, status)| AlignmentRow {
            framework: name.to_string(),
            status: status.as_str().to_string(),
            label: status.label(),
        })
        .collect();

    ReportView {
        topic_id: topic_id.to_string(),
        lang: ctx.lang.clone(),
        page_title: format!("{} — {}", profile.topic, ctx.product_name),
        badge: Badge { text: display.clone(), style_class: profile.style_class.clone() },
        report_date: long_date(&ctx.now),
        clock: utc_clock(&ctx.now),
        header: HeaderBlock {
            style_class: profile.style_class.clone(),
            tag: format!("{display} · {}", ctx.header_suffix),
        },
        title: title.map(|t| TitleBlock { title: t.title.clone(), subtitle: t.subtitle.clone() }),
        metrics: metric_cards(profile),
        narrative: narrative_blocks(&profile.paragraphs, &profile.pull_quote),
        framework_tags,
        integrity: IntegrityBar {
            label: integrity_label(profile.integrity_score),
            percent: profile.integrity_score,
            delay_ms: ctx.bar_delay_ms,
        },
        audience: profile.audience.clone(),
        trends: trends.map(|rows| {
            rows.iter().map(|r| TrendLine { name: r.name.clone(), score: r.score }).collect()
        }),
        alignment,
        catalog_sha256: ctx.catalog_sha256.clone(),
    }
}

/// Catalog lookup + [`build_report_view`]. `None` when the profile is absent;
/// missing title or trend entries only drop those regions.
pub fn report_view_for(catalog: &Catalog, topic_id: &str, ctx: &RenderContext) -> Option<ReportView> {
    let profile = catalog.profiles.get(topic_id)?;
    Some(build_report_view(
        topic_id,
        profile,
        catalog.titles.get(topic_id),
        catalog.trends.get(topic_id).map(Vec::as_slice),
        ctx,
    ))
}

// ------------------------- landing tree -------------------------

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCard {
    pub topic_id: String,
    pub icon: String,
    pub name: String,
    pub style_class: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub href: String,
}

#[cfg_attr(feature = "render_json", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingView {
    pub lang: String,
    pub page_title: String,
    pub clock: String,
    pub nav_delay_ms: u64,
    pub cards: Vec<TopicCard>,
}

/// One card per profile, in identifier order.
pub fn build_landing_view(catalog: &Catalog, ctx: &RenderContext) -> LandingView {
    let cards = catalog
        .profiles
        .iter()
        .map(|(id, p)| {
            let title = catalog.titles.get(id.as_str());
            TopicCard {
                topic_id: id.to_string(),
                icon: p.icon.clone(),
                name: p.topic.clone(),
                style_class: p.style_class.clone(),
                title: title.map(|t| t.title.clone()),
                subtitle: title.map(|t| t.subtitle.clone()),
                href: report_href(id.as_str()),
            }
        })
        .collect();

    LandingView {
        lang: ctx.lang.clone(),
        page_title: ctx.product_name.clone(),
        clock: utc_clock(&ctx.now),
        nav_delay_ms: ctx.nav_delay_ms,
        cards,
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use super::NarrativeBlock::{Paragraph as P, PullQuote as Q};

    fn paras(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn pull_quote_follows_second_paragraph() {
        assert_eq!(
            narrative_blocks(&paras(4), "q"),
            vec![P("P0".into()), P("P1".into()), Q("q".into()), P("P2".into()), P("P3".into())]
        );
        assert_eq!(
            narrative_blocks(&paras(2), "q"),
            vec![P("P0".into()), P("P1".into()), Q("q".into())]
        );
    }

    #[test]
    fn pull_quote_goes_last_with_short_narrative() {
        assert_eq!(narrative_blocks(&paras(1), "q"), vec![P("P0".into()), Q("q".into())]);
        assert_eq!(narrative_blocks(&[], "q"), vec![Q("q".into())]);
    }

    #[test]
    fn pull_quote_appears_exactly_once() {
        for n in 0..6 {
            let quotes = narrative_blocks(&paras(n), "q")
                .into_iter()
                .filter(|b| matches!(b, Q(_)))
                .count();
            assert_eq!(quotes, 1, "paragraphs={n}");
        }
    }

    #[test]
    fn metrics_keep_order_and_map_pillar_and_direction() {
        let v = build_report_view("energy", &profile(3, 5), None, None, &ctx());
        let labels: Vec<_> = v.metrics.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
        let pillars: Vec<_> = v.metrics.iter().map(|m| m.pillar.as_str()).collect();
        assert_eq!(pillars, vec!["Environmental", "Social", "Governance"]);
        let glyphs: Vec<_> = v.metrics.iter().map(|m| m.glyph.as_str()).collect();
        assert_eq!(glyphs, vec!["▲", "▼", "—"]);
    }

    #[test]
    fn header_badge_and_titles() {
        let v = build_report_view("energy", &profile(3, 5), None, None, &ctx());
        assert_eq!(v.page_title, "Energy & Efficiency — ESG Narrative Intelligence");
        assert_eq!(v.badge.text, "⚡ Energy & Efficiency");
        assert_eq!(v.badge.style_class, "topic-energy");
        assert_eq!(v.header.tag, "⚡ Energy & Efficiency · ESG Intelligence Brief");
        assert_eq!(v.report_date, "15 October 2026");
        assert_eq!(v.clock, "2026-10-15 08:30:00 UTC");
        assert!(v.title.is_none());
    }

    #[test]
    fn integrity_label_shows_score_unmodified() {
        for score in [0u8, 7, 98, 100] {
            let mut p = profile(1, 0);
            p.integrity_score = score;
            let v = build_report_view("energy", &p, None, None, &ctx());
            assert_eq!(v.integrity.label, format!("Narrative Integrity: {score}%"));
            assert_eq!(v.integrity.percent, score);
            assert_eq!(v.integrity.delay_ms, 300);
        }
    }

    #[test]
    fn tags_and_alignment_follow_position() {
        let v = build_report_view("energy", &profile(3, 5), None, None, &ctx());
        let st: Vec<_> = v.framework_tags.iter().map(|t| t.status.as_str()).collect();
        assert_eq!(st, vec!["ready", "ready", "ready", "partial", "pending"]);
        let labels: Vec<_> = v.alignment.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["✓ Ready", "✓ Ready", "✓ Ready", "◐ Partial", "○ Pending"]);
    }

    #[test]
    fn catalog_lookup_is_soft() {
        let c = catalog();
        let v = report_view_for(&c, "energy", &ctx()).unwrap();
        assert_eq!(v.title.unwrap().title, "Energy Transition Intelligence");
        let trends = v.trends.unwrap();
        assert_eq!(trends[0].name, "Renewables");
        assert_eq!(trends[1].score, 67);
        assert!(report_view_for(&c, "water", &ctx()).is_none());
    }

    #[test]
    fn landing_cards_link_to_topic_reports() {
        let l = build_landing_view(&catalog(), &ctx());
        assert_eq!(l.cards.len(), 1);
        assert_eq!(l.cards[0].href, "report-energy.html");
        assert_eq!(l.cards[0].title.as_deref(), Some("Energy Transition Intelligence"));
        assert_eq!(l.nav_delay_ms, 1100);
    }
}
