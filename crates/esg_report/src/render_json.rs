//! crates/esg_report/src/render_json.rs
//! Report JSON renderer (meta → header → metrics → narrative → frameworks →
//! integrity → audience → trends → alignment).
//!
//! Key order follows region order on the page; this crate enables
//! `serde_json`'s `preserve_order` so insertion order is kept.

use serde_json::{Map as JsonMap, Value};

use crate::layout::{Layout, Region};
use crate::view::{NarrativeBlock, ReportView};

/// Build the report object. Regions absent from `layout` are left out.
pub fn render_report_json(v: &ReportView, layout: &Layout) -> Value {
    let mut root = obj();

    root.insert("meta".into(), meta_json(v));

    if layout.has(Region::Header) {
        let mut h = obj();
        h.insert("tag".into(), v.header.tag.clone().into());
        h.insert("style_class".into(), v.header.style_class.clone().into());
        root.insert("header".into(), Value::Object(h));
    }
    if layout.has(Region::TopicBadge) {
        root.insert("badge".into(), v.badge.text.clone().into());
    }
    if layout.has(Region::ReportDate) {
        root.insert("report_date".into(), v.report_date.clone().into());
    }
    if let (true, Some(t)) = (layout.has(Region::Title), &v.title) {
        let mut o = obj();
        o.insert("title".into(), t.title.clone().into());
        o.insert("subtitle".into(), t.subtitle.clone().into());
        root.insert("title".into(), Value::Object(o));
    }
    if layout.has(Region::MetricsGrid) {
        root.insert("metrics".into(), to_value(&v.metrics));
    }
    if layout.has(Region::Narrative) {
        root.insert("narrative".into(), narrative_json(&v.narrative));
    }
    if layout.has(Region::FrameworkTags) {
        root.insert("framework_tags".into(), to_value(&v.framework_tags));
    }
    if layout.has(Region::IntegrityBar) {
        let mut o = obj();
        o.insert("label".into(), v.integrity.label.clone().into());
        o.insert("percent".into(), v.integrity.percent.into());
        root.insert("integrity".into(), Value::Object(o));
    }
    if layout.has(Region::Audience) {
        root.insert("audience".into(), v.audience.clone().into());
    }
    if let (true, Some(rows)) = (layout.has(Region::Trends), &v.trends) {
        root.insert("trends".into(), to_value(rows));
    }
    if layout.has(Region::FrameworkAlignment) {
        root.insert("alignment".into(), to_value(&v.alignment));
    }

    Value::Object(root)
}

/* ----------------------- sections ----------------------- */

fn meta_json(v: &ReportView) -> Value {
    let mut o = obj();
    o.insert("topic".into(), v.topic_id.clone().into());
    o.insert("page_title".into(), v.page_title.clone().into());
    o.insert("lang".into(), v.lang.clone().into());
    o.insert("generated_at".into(), v.clock.clone().into());
    if let Some(d) = &v.catalog_sha256 {
        o.insert("catalog_sha256".into(), d.clone().into());
    }
    Value::Object(o)
}

fn narrative_json(blocks: &[NarrativeBlock]) -> Value {
    Value::Array(
        blocks
            .iter()
            .map(|b| {
                let (kind, text) = match b {
                    NarrativeBlock::Paragraph(t) => ("paragraph", t),
                    NarrativeBlock::PullQuote(t) => ("pull_quote", t),
                };
                let mut o = obj();
                o.insert("kind".into(), kind.into());
                o.insert("text".into(), text.clone().into());
                Value::Object(o)
            })
            .collect(),
    )
}

/* ----------------------- helpers ----------------------- */

#[inline]
fn obj() -> JsonMap<String, Value> {
    JsonMap::new()
}

fn to_value<T: serde::Serialize>(v: &T) -> Value {
    // View structs hold only strings and integers.
    serde_json::to_value(v).unwrap_or(Value::Null)
}
