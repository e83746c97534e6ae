// crates/esg_report/src/render_html.rs
//
// Deterministic, offline HTML renderer for the landing and report surfaces.
//
// • Single self-contained document per surface (inline style, no external assets).
// • Every text field HTML-escaped; narrative paragraphs keep a small inline
//   whitelist (<strong>, <em>, <b>, <i>).
// • Each report region is written only if the layout provides it.
// • Page behavior (navigation delay, integrity bar fill, live clock, print) is
//   emitted as short inline scripts driven by data carried in the view.

use std::fmt::Write as _;

use crate::layout::{Layout, Region};
use crate::view::{LandingView, NarrativeBlock, ReportView};

// ------------------------- formatting helpers -------------------------

/// Escape text for HTML (minimal, deterministic).
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

const RICH_TAGS: &[&str] = &["strong", "em", "b", "i"];

/// Escape, then re-enable bare whitelisted inline tags.
pub fn esc_rich(s: &str) -> String {
    let mut out = esc(s);
    for tag in RICH_TAGS {
        out = out
            .replace(&format!("&lt;{tag}&gt;"), &format!("<{tag}>"))
            .replace(&format!("&lt;/{tag}&gt;"), &format!("</{tag}>"));
    }
    out
}

// ------------------------- inline behavior -------------------------

const CLOCK_SCRIPT: &str = "(function(){var c=document.getElementById('live-clock');if(!c)return;\
function p(n){return String(n).padStart(2,'0');}\
function tick(){var d=new Date();c.textContent=d.getUTCFullYear()+'-'+p(d.getUTCMonth()+1)+'-'+p(d.getUTCDate())\
+' '+p(d.getUTCHours())+':'+p(d.getUTCMinutes())+':'+p(d.getUTCSeconds())+' UTC';}\
tick();setInterval(tick,1000);})();";

const INTEGRITY_SCRIPT: &str = "(function(){var f=document.getElementById('integrity-fill');if(!f)return;\
requestAnimationFrame(function(){setTimeout(function(){f.style.width=f.getAttribute('data-target')+'%';},__DELAY__);});})();";

const LANDING_SCRIPT: &str = "(function(){var d=__DELAY__;\
document.querySelectorAll('[data-topic]').forEach(function(el){\
function go(e){e.preventDefault();var o=document.getElementById('loading-overlay');if(o){o.classList.add('active');}\
setTimeout(function(){window.location.href=el.getAttribute('href');},d);}\
el.addEventListener('click',go);\
el.addEventListener('keydown',function(e){if(e.key==='Enter'||e.key===' '){go(e);}});});})();";

const STYLE: &str = "body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Arial,sans-serif;margin:24px;color:#1d2a30}\
h1,h2,h3{margin:0.2em 0}\
.muted{opacity:0.8}\
.grid{display:grid;grid-template-columns:repeat(3,minmax(0,1fr));gap:8px}\
.card{padding:12px;border:1px solid #ddd;border-radius:8px}\
.pill{display:inline-block;padding:.2em .6em;border-radius:9999px;background:#eee}\
.tag-ready{background:#d7f5df}.tag-partial{background:#fff1c2}.tag-pending{background:#eee}\
blockquote{font-style:italic;border-left:4px solid #2f855a;margin:1em 0;padding-left:1em}\
.bar{height:10px;background:#eee;border-radius:5px;overflow:hidden}\
#integrity-fill{height:100%;background:#2f855a;transition:width 1.2s ease}\
.overlay{display:none;position:fixed;inset:0;background:rgba(255,255,255,.9);align-items:center;justify-content:center}\
.overlay.active{display:flex}\
.topic-card{display:block;padding:16px;border:1px solid #ddd;border-radius:8px;text-decoration:none;color:inherit;margin:8px 0}\
@media print{#export-pdf,#live-clock{display:none}}";

// ------------------------- HTML builder -------------------------

pub struct HtmlBuilder<'a> {
    lang: &'a str,
    buf: String,
    scripts: Vec<String>,
}

impl<'a> HtmlBuilder<'a> {
    pub fn new(lang: &'a str) -> Self {
        Self {
            lang,
            buf: String::with_capacity(32 * 1024),
            scripts: Vec::new(),
        }
    }

    /// Start document with minimal head. `page` becomes `<body data-page>`.
    pub fn start(&mut self, title: &str, page: &str, digest: Option<&str>) {
        let _ = write!(
            self.buf,
            "<!doctype html><html lang=\"{}\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
             <meta name=\"generator\" content=\"esg {}\">",
            esc(self.lang),
            env!("CARGO_PKG_VERSION"),
        );
        if let Some(d) = digest {
            let _ = write!(self.buf, "<meta name=\"esg-catalog-sha256\" content=\"{}\">", esc(d));
        }
        let _ = write!(
            self.buf,
            "<title>{}</title><style>{}</style></head><body data-page=\"{}\">",
            esc(title),
            STYLE,
            esc(page)
        );
    }

    /// Queue an inline script, emitted before `</body>`.
    pub fn script(&mut self, js: String) {
        self.scripts.push(js);
    }

    /// Close document.
    pub fn finish(mut self) -> String {
        for js in &self.scripts {
            let _ = write!(self.buf, "<script>{js}</script>");
        }
        self.buf.push_str("</body></html>");
        self.buf
    }

    // --- report regions ---

    pub fn section_header(&mut self, style_class: &str, tag: &str) {
        let _ = write!(
            self.buf,
            "<header id=\"{}\" class=\"report-header {}\"><span class=\"header-tag\">{}</span></header>",
            Region::Header.id(),
            esc(style_class),
            esc(tag)
        );
    }

    pub fn live_clock(&mut self, initial: &str) {
        let _ = write!(
            self.buf,
            "<p class=\"muted\"><span id=\"{}\">{}</span></p>",
            Region::LiveClock.id(),
            esc(initial)
        );
        self.script(CLOCK_SCRIPT.to_string());
    }

    pub fn section_badge(&mut self, text: &str, style_class: &str) {
        let _ = write!(
            self.buf,
            "<div id=\"{}\" class=\"pill {}\">{}</div>",
            Region::TopicBadge.id(),
            esc(style_class),
            esc(text)
        );
    }

    pub fn section_date(&mut self, date: &str) {
        let _ = write!(
            self.buf,
            "<p id=\"{}\" class=\"muted\">{}</p>",
            Region::ReportDate.id(),
            esc(date)
        );
    }

    pub fn section_title(&mut self, title: &str, subtitle: &str) {
        let _ = write!(
            self.buf,
            "<section id=\"{}\"><h1>{}</h1><p class=\"muted\">{}</p></section>",
            Region::Title.id(),
            esc(title),
            esc(subtitle)
        );
    }

    pub fn section_metrics(&mut self, view: &ReportView) {
        let _ = write!(self.buf, "<section id=\"{}\" class=\"grid\">", Region::MetricsGrid.id());
        for m in &view.metrics {
            let _ = write!(
                self.buf,
                "<div class=\"card metric\" data-direction=\"{}\">\
                 <div class=\"pill\">{}</div>\
                 <div><b>{}</b> {}</div>\
                 <div>{}</div>\
                 <div class=\"muted\">{} {}</div></div>",
                esc(&m.direction),
                esc(&m.pillar),
                esc(&m.value),
                esc(&m.unit),
                esc(&m.label),
                esc(&m.glyph),
                esc(&m.change),
            );
        }
        self.buf.push_str("</section>");
    }

    pub fn section_narrative(&mut self, blocks: &[NarrativeBlock]) {
        let _ = write!(self.buf, "<article id=\"{}\">", Region::Narrative.id());
        for b in blocks {
            match b {
                NarrativeBlock::Paragraph(p) => {
                    let _ = write!(self.buf, "<p>{}</p>", esc_rich(p));
                }
                NarrativeBlock::PullQuote(q) => {
                    let _ = write!(self.buf, "<blockquote class=\"pull-quote\">{}</blockquote>", esc(q));
                }
            }
        }
        self.buf.push_str("</article>");
    }

    pub fn section_framework_tags(&mut self, view: &ReportView) {
        let _ = write!(self.buf, "<ul id=\"{}\" class=\"tags\">", Region::FrameworkTags.id());
        for t in &view.framework_tags {
            let _ = write!(
                self.buf,
                "<li class=\"pill tag tag-{}\" data-status=\"{}\">{}</li>",
                esc(&t.status),
                esc(&t.status),
                esc(&t.name)
            );
        }
        self.buf.push_str("</ul>");
    }

    /// Label + bar at 0%; the fill is applied by page behavior after a paint.
    pub fn section_integrity(&mut self, label: &str, percent: u8, delay_ms: u64) {
        let _ = write!(
            self.buf,
            "<div id=\"{}\"><span id=\"integrity-label\">{}</span>\
             <div class=\"bar\"><div id=\"integrity-fill\" style=\"width:0%\" data-target=\"{}\"></div></div></div>",
            Region::IntegrityBar.id(),
            esc(label),
            percent
        );
        self.script(INTEGRITY_SCRIPT.replace("__DELAY__", &delay_ms.to_string()));
    }

    pub fn section_audience(&mut self, audience: &str) {
        let _ = write!(
            self.buf,
            "<p id=\"{}\"><b>Audience:</b> {}</p>",
            Region::Audience.id(),
            esc(audience)
        );
    }

    pub fn section_trends(&mut self, view: &ReportView) {
        let Some(rows) = &view.trends else {
            return;
        };
        let _ = write!(self.buf, "<aside id=\"{}\"><h3>Trends</h3><table><tbody>", Region::Trends.id());
        for r in rows {
            let _ = write!(
                self.buf,
                "<tr class=\"trend-row\"><td>{}</td><td>{}</td></tr>",
                esc(&r.name),
                r.score
            );
        }
        self.buf.push_str("</tbody></table></aside>");
    }

    pub fn section_alignment(&mut self, view: &ReportView) {
        let _ = write!(
            self.buf,
            "<aside id=\"{}\"><h3>Framework Alignment</h3><ul>",
            Region::FrameworkAlignment.id()
        );
        for a in &view.alignment {
            let _ = write!(
                self.buf,
                "<li class=\"alignment-{}\"><span>{}</span> <span class=\"status\">{}</span></li>",
                esc(&a.status),
                esc(&a.framework),
                esc(&a.label)
            );
        }
        self.buf.push_str("</ul></aside>");
    }

    /// Hands off to the host's native print dialog.
    pub fn export_control(&mut self) {
        let _ = write!(
            self.buf,
            "<button id=\"{}\" type=\"button\" onclick=\"window.print()\">Export PDF</button>",
            Region::ExportControl.id()
        );
    }

    // --- landing regions ---

    pub fn topic_cards(&mut self, view: &LandingView) {
        self.buf.push_str("<main class=\"topics\">");
        for c in &view.cards {
            let _ = write!(
                self.buf,
                "<a class=\"topic-card {}\" href=\"{}\" data-topic=\"{}\" role=\"button\" tabindex=\"0\">\
                 <span class=\"icon\">{}</span><h2>{}</h2>",
                esc(&c.style_class),
                esc(&c.href),
                esc(&c.topic_id),
                esc(&c.icon),
                esc(&c.name)
            );
            if let Some(t) = &c.title {
                let _ = write!(self.buf, "<p>{}</p>", esc(t));
            }
            if let Some(s) = &c.subtitle {
                let _ = write!(self.buf, "<p class=\"muted\">{}</p>", esc(s));
            }
            self.buf.push_str("</a>");
        }
        self.buf.push_str("</main>");
    }

    pub fn loading_overlay(&mut self) {
        let _ = write!(
            self.buf,
            "<div id=\"{}\" class=\"overlay\" aria-hidden=\"true\"><p>Preparing your report…</p></div>",
            Region::LoadingOverlay.id()
        );
    }
}

// ------------------------- top-level entries -------------------------

/// Render the report surface. Regions absent from `layout` are skipped.
pub fn render_report_html(view: &ReportView, layout: &Layout) -> String {
    let mut h = HtmlBuilder::new(&view.lang);
    h.start(&view.page_title, "report", view.catalog_sha256.as_deref());

    if layout.has(Region::Header) {
        h.section_header(&view.header.style_class, &view.header.tag);
    }
    if layout.has(Region::LiveClock) {
        h.live_clock(&view.clock);
    }
    if layout.has(Region::TopicBadge) {
        h.section_badge(&view.badge.text, &view.badge.style_class);
    }
    if layout.has(Region::ReportDate) {
        h.section_date(&view.report_date);
    }
    if let (true, Some(t)) = (layout.has(Region::Title), &view.title) {
        h.section_title(&t.title, &t.subtitle);
    }
    if layout.has(Region::MetricsGrid) {
        h.section_metrics(view);
    }
    if layout.has(Region::Narrative) {
        h.section_narrative(&view.narrative);
    }
    if layout.has(Region::FrameworkTags) {
        h.section_framework_tags(view);
    }
    if layout.has(Region::IntegrityBar) {
        h.section_integrity(&view.integrity.label, view.integrity.percent, view.integrity.delay_ms);
    }
    if layout.has(Region::Audience) {
        h.section_audience(&view.audience);
    }
    if layout.has(Region::Trends) {
        h.section_trends(view);
    }
    if layout.has(Region::FrameworkAlignment) {
        h.section_alignment(view);
    }
    if layout.has(Region::ExportControl) {
        h.export_control();
    }

    h.finish()
}

/// Render the landing surface: one activatable card per topic.
pub fn render_landing_html(view: &LandingView, layout: &Layout) -> String {
    let mut h = HtmlBuilder::new(&view.lang);
    h.start(&view.page_title, "home", None);

    let _ = write!(h.buf, "<header><h1>{}</h1></header>", esc(&view.page_title));
    if layout.has(Region::LiveClock) {
        h.live_clock(&view.clock);
    }
    h.topic_cards(view);
    if layout.has(Region::LoadingOverlay) {
        h.loading_overlay();
    }
    h.script(LANDING_SCRIPT.replace("__DELAY__", &view.nav_delay_ms.to_string()));

    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures::{catalog, ctx};
    use crate::view::{build_landing_view, report_view_for};

    fn energy_html(layout: &Layout) -> String {
        let view = report_view_for(&catalog(), "energy", &ctx()).unwrap();
        render_report_html(&view, layout)
    }

    #[test]
    fn escapes_and_keeps_whitelisted_inline_tags() {
        assert_eq!(esc("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&#x27;");
        assert_eq!(
            esc_rich("<strong>4th</strong> <script>x</script>"),
            "<strong>4th</strong> &lt;script&gt;x&lt;/script&gt;"
        );
    }

    #[test]
    fn report_page_carries_all_regions() {
        let html = energy_html(&Layout::full());
        assert!(html.starts_with("<!doctype html><html lang=\"en-GB\">"));
        assert!(html.contains("<body data-page=\"report\">"));
        assert!(html.contains("<title>Energy &amp; Efficiency — ESG Narrative Intelligence</title>"));
        assert!(html.contains("Energy Transition Intelligence"));
        assert!(html.contains(">⚡ Energy &amp; Efficiency</div>"));
        assert_eq!(html.matches("class=\"card metric\"").count(), 3);
        assert_eq!(html.matches("class=\"pill tag tag-").count(), 5);
        assert_eq!(html.matches("tag-ready\"").count(), 3);
        assert_eq!(html.matches("class=\"pull-quote\"").count(), 1);
        assert!(html.contains("<span id=\"integrity-label\">Narrative Integrity: 94%</span>"));
        assert!(html.contains("data-target=\"94\""));
        assert!(html.contains("},300);"));
        assert!(html.contains("onclick=\"window.print()\""));
        assert!(html.contains("<span id=\"live-clock\">2026-10-15 08:30:00 UTC</span>"));
        assert!(html.contains("<p id=\"report-date\" class=\"muted\">15 October 2026</p>"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn pull_quote_sits_after_second_paragraph() {
        let html = energy_html(&Layout::full());
        let p1 = html.find("<p>P1</p>").unwrap();
        let q = html.find("class=\"pull-quote\"").unwrap();
        let p2 = html.find("<p>P2</p>").unwrap();
        assert!(p1 < q && q < p2);
    }

    #[test]
    fn omitted_regions_do_not_block_others() {
        let layout = Layout::full().without([Region::MetricsGrid, Region::Trends, Region::IntegrityBar]);
        let html = energy_html(&layout);
        assert!(!html.contains("id=\"metrics-grid\""));
        assert!(!html.contains("id=\"trend-list\""));
        assert!(!html.contains("id=\"integrity-fill\""));
        assert!(html.contains("id=\"narrative\""));
        assert!(html.contains("id=\"framework-alignment\""));
        assert!(html.contains("id=\"audience\""));
    }

    #[test]
    fn missing_title_entry_drops_only_title_region() {
        let mut c = catalog();
        c.titles = Default::default();
        let view = report_view_for(&c, "energy", &ctx()).unwrap();
        let html = render_report_html(&view, &Layout::full());
        assert!(!html.contains("id=\"report-title\""));
        assert!(html.contains("id=\"topic-badge\""));
    }

    #[test]
    fn landing_page_lists_activatable_cards() {
        let view = build_landing_view(&catalog(), &ctx());
        let html = render_landing_html(&view, &Layout::full());
        assert!(html.contains("<body data-page=\"home\">"));
        assert!(html.contains("href=\"report-energy.html\" data-topic=\"energy\" role=\"button\" tabindex=\"0\""));
        assert!(html.contains("id=\"loading-overlay\""));
        assert!(html.contains("var d=1100;"));
        assert!(html.contains("e.key==='Enter'||e.key===' '"));

        let bare = render_landing_html(&view, &Layout::full().without([Region::LoadingOverlay]));
        assert!(!bare.contains("id=\"loading-overlay\""));
    }
}
