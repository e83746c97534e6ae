// crates/esg_cli/src/main.rs
//
// Exit codes, typed error mapping, logging setup, and the subcommands:
// build → landing + per-topic reports, select → landing activation then report,
// report → report from the stored selection, topics, validate, clock.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
    pub const RENDER: i32 = 5;
}

use std::io::Write as _;
use std::path::Path;
use std::process::ExitCode;
use std::thread;

use chrono::Utc;
use esg_core::TopicId;
use esg_io::hasher::short_digest;
use esg_io::prelude::*;
use esg_report::dates::{ClockTicks, CLOCK_INTERVAL};
use esg_report::{report_view_for, Layout, Region, RenderContext, ReportView};
use esg_session::{Activation, LandingController, ReportRenderer};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use args::{parse_and_validate as parse_cli, renderers, Args, Command, Render};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Schema / JSON shape / domain checks
    Validation(String),
    /// Filesystem reads and writes
    Io(String),
    /// Renderer unavailable in this build
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("esg: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_tracing(&args);

    let rc = match run(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("esg: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// stderr subscriber. `--quiet` wins, then `ESG_LOG`, then `-v` count.
fn init_tracing(args: &Args) {
    let filter = if args.quiet {
        EnvFilter::new("off")
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_env("ESG_LOG").unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
        MainError::Render(_) => RENDER,
    }
}

fn map_io_err(e: IoError) -> MainError {
    match e {
        IoError::Path(m) => MainError::Io(m),
        IoError::Schema { pointer, msg } => MainError::Validation(format!("schema {pointer}: {msg}")),
        IoError::Json { pointer, msg } => MainError::Validation(format!("json {pointer}: {msg}")),
        IoError::Invalid(m) => MainError::Validation(m),
    }
}

// ------------------------- site context -------------------------

/// Everything a command needs after loading.
struct Site {
    loaded: LoadedCatalog,
    config: SiteConfig,
    default_topic: TopicId,
    layout: Layout,
}

impl Site {
    fn load(args: &Args) -> Result<Self, MainError> {
        let config = load_config(args.config.as_deref()).map_err(map_io_err)?;
        let default_topic = config.default_topic_id().map_err(map_io_err)?;
        let layout = Layout::omitting_ids(&config.omit_regions).map_err(MainError::Validation)?;
        let loaded = load_catalog(args.catalog.as_deref()).map_err(map_io_err)?;
        debug!(
            topics = loaded.catalog.profiles.len(),
            sha256 = short_digest(&loaded.sha256),
            "catalog loaded"
        );
        Ok(Self { loaded, config, default_topic, layout })
    }

    fn render_ctx(&self) -> RenderContext {
        let c = &self.config;
        let mut ctx = RenderContext::new(Utc::now());
        ctx.product_name = c.product_name.clone();
        ctx.header_suffix = c.header_suffix.clone();
        ctx.lang = c.lang.clone();
        ctx.nav_delay_ms = c.nav_delay_ms;
        ctx.bar_delay_ms = c.bar_delay_ms;
        ctx.catalog_sha256 = Some(self.loaded.sha256.clone());
        ctx
    }

    fn report_renderer(&self) -> ReportRenderer<'_> {
        ReportRenderer::new(&self.loaded.catalog, self.default_topic.clone(), self.render_ctx())
    }
}

fn run(args: &Args) -> Result<(), MainError> {
    if let Command::Clock { ticks } = &args.command {
        return cmd_clock(*ticks);
    }
    let site = Site::load(args)?;
    match &args.command {
        Command::Build { out, render } => cmd_build(&site, out, &renderers(render)),
        Command::Select { topic, session, out, no_wait } => {
            cmd_select(&site, topic, session, out, *no_wait)
        }
        Command::Report { session, out, render } => {
            cmd_report(&site, session, out, &renderers(render))
        }
        Command::Topics => cmd_topics(&site),
        Command::Validate => cmd_validate(&site),
        Command::Clock { .. } => Ok(()),
    }
}

// ------------------------- commands -------------------------

fn cmd_build(site: &Site, out: &Path, formats: &[Render]) -> Result<(), MainError> {
    let ctx = site.render_ctx();
    let catalog = &site.loaded.catalog;

    if formats.contains(&Render::Html) {
        write_landing(site, &ctx, out)?;
    }
    for id in catalog.profiles.topics() {
        if let Some(view) = report_view_for(catalog, id.as_str(), &ctx) {
            write_report(&view, &site.layout, out, &format!("report-{id}"), formats)?;
        }
    }
    match report_view_for(catalog, site.default_topic.as_str(), &ctx) {
        Some(view) => write_report(&view, &site.layout, out, "report", formats)?,
        None => warn!(topic = %site.default_topic, "default topic not in catalog; report.html not written"),
    }
    info!(out = %out.display(), "site built");
    Ok(())
}

fn cmd_select(site: &Site, topic: &str, session: &Path, out: &Path, no_wait: bool) -> Result<(), MainError> {
    let profiles = &site.loaded.catalog.profiles;
    let mut landing = LandingController::new(profiles, FileRelay::new(session))
        .with_delay(std::time::Duration::from_millis(site.config.nav_delay_ms));
    if !site.layout.has(Region::LoadingOverlay) {
        landing = landing.without_overlay();
    }

    let Some(nav) = landing.activate(&Activation::click(topic)) else {
        if !profiles.contains(topic) {
            debug!(topic, "no card for topic; nothing selected");
        }
        return Ok(());
    };

    if !no_wait {
        thread::sleep(nav.delay);
    }
    info!(topic = %nav.topic, href = %nav.href, "navigating");

    let relay = landing.into_relay();
    match site.report_renderer().render(&relay) {
        Some(view) => {
            let stem = nav.href.trim_end_matches(".html");
            write_report(&view, &site.layout, out, stem, &[Render::Html])
        }
        None => Ok(()),
    }
}

fn cmd_report(site: &Site, session: &Path, out: &Path, formats: &[Render]) -> Result<(), MainError> {
    let relay = FileRelay::new(session);
    let Some(view) = site.report_renderer().render(&relay) else {
        info!("no report for the stored selection; nothing written");
        return Ok(());
    };
    write_report(&view, &site.layout, out, "report", formats)
}

fn cmd_topics(site: &Site) -> Result<(), MainError> {
    let catalog = &site.loaded.catalog;
    let mut stdout = std::io::stdout().lock();
    for (id, p) in catalog.profiles.iter() {
        let title = catalog.titles.get(id.as_str()).map(|t| t.title.as_str()).unwrap_or("");
        writeln!(stdout, "{id}\t{}\t{title}", p.display_name()).map_err(|e| MainError::Io(e.to_string()))?;
    }
    Ok(())
}

fn cmd_validate(site: &Site) -> Result<(), MainError> {
    let catalog = &site.loaded.catalog;
    if !catalog.profiles.contains(site.default_topic.as_str()) {
        return Err(MainError::Validation(format!(
            "default topic {} is not in the catalog",
            site.default_topic
        )));
    }
    for (id, table) in catalog.coverage_gaps() {
        warn!(topic = %id, table, "no entry; region will be omitted");
    }
    println!(
        "catalog OK: {} topics, sha256 {}",
        catalog.profiles.len(),
        short_digest(&site.loaded.sha256)
    );
    Ok(())
}

fn cmd_clock(ticks: Option<u64>) -> Result<(), MainError> {
    let mut stdout = std::io::stdout().lock();
    for (n, line) in ClockTicks::starting_at(Utc::now()).enumerate() {
        writeln!(stdout, "{line}").map_err(|e| MainError::Io(e.to_string()))?;
        stdout.flush().map_err(|e| MainError::Io(e.to_string()))?;
        if ticks.is_some_and(|t| n as u64 + 1 >= t) {
            break;
        }
        thread::sleep(CLOCK_INTERVAL);
    }
    Ok(())
}

// ------------------------- writers -------------------------

fn write_landing(site: &Site, ctx: &RenderContext, out: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-html")]
    {
        let view = esg_report::build_landing_view(&site.loaded.catalog, ctx);
        let html = esg_report::render_landing_html(&view, &site.layout);
        let path = out.join(esg_report::LANDING_FILE);
        write_atomic(&path, html.as_bytes())
            .map_err(|e| MainError::Io(format!("write {}: {e}", path.display())))?;
        info!(path = %path.display(), "wrote landing page");
        Ok(())
    }
    #[cfg(not(feature = "report-html"))]
    {
        let _ = (site, ctx, out);
        Err(MainError::Render("html renderer not enabled (build with feature `report-html`)".into()))
    }
}

/// Write `{stem}.html` and/or `{stem}.json` under `out`.
fn write_report(
    view: &ReportView,
    layout: &Layout,
    out: &Path,
    stem: &str,
    formats: &[Render],
) -> Result<(), MainError> {
    for f in formats {
        match f {
            Render::Html => write_report_html(view, layout, &out.join(format!("{stem}.html")))?,
            Render::Json => write_report_json(view, layout, &out.join(format!("{stem}.json")))?,
        }
    }
    Ok(())
}

fn write_report_html(view: &ReportView, layout: &Layout, path: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-html")]
    {
        let html = esg_report::render_report_html(view, layout);
        write_atomic(path, html.as_bytes())
            .map_err(|e| MainError::Io(format!("write {}: {e}", path.display())))?;
        info!(path = %path.display(), topic = %view.topic_id, "wrote report");
        Ok(())
    }
    #[cfg(not(feature = "report-html"))]
    {
        let _ = (view, layout, path);
        Err(MainError::Render("html renderer not enabled (build with feature `report-html`)".into()))
    }
}

fn write_report_json(view: &ReportView, layout: &Layout, path: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-json")]
    {
        // page order, not canonical: readers walk the regions top to bottom
        let value = esg_report::render_report_json(view, layout);
        let bytes = serde_json::to_vec(&value).map_err(|e| MainError::Render(e.to_string()))?;
        write_atomic(path, &bytes).map_err(|e| MainError::Io(format!("write {}: {e}", path.display())))?;
        info!(path = %path.display(), topic = %view.topic_id, "wrote report");
        Ok(())
    }
    #[cfg(not(feature = "report-json"))]
    {
        let _ = (view, layout, path);
        Err(MainError::Render("json renderer not enabled (build with feature `report-json`)".into()))
    }
}
