// crates/esg_cli/src/args.rs
//
// Offline CLI argument surface.
//
// - No networked paths (reject any scheme:// for --catalog/--config/--session/--out)
// - Subcommands: build | select | report | topics | validate | clock
// - Renderers: --render [html|json]*, html when omitted
// - Topic identifiers are passed through unchecked; the controllers decide

use clap::{ArgAction, Parser, Subcommand};
use esg_io::session_file::DEFAULT_SESSION_FILE;
use std::path::{Path, PathBuf};

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "esg",
    version,
    disable_help_subcommand = true,
    about = "Offline ESG narrative report generator"
)]
pub struct Args {
    /// Catalog JSON replacing the built-in topic data.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Site configuration JSON.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Silence all logs (command output on stdout is kept).
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More log detail on stderr (-v debug, -vv trace). `ESG_LOG` overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write the landing page, one report per topic, and the default report.
    Build {
        #[arg(long, default_value = "site")]
        out: PathBuf,
        #[arg(long, value_parser = ["json", "html"], num_args = 1..=2)]
        render: Vec<String>,
    },

    /// Activate a topic card: store the selection and open its report.
    Select {
        topic: String,
        #[arg(long, default_value = DEFAULT_SESSION_FILE)]
        session: PathBuf,
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Skip the navigation delay.
        #[arg(long)]
        no_wait: bool,
    },

    /// Render the report for the stored selection (default topic when none).
    Report {
        #[arg(long, default_value = DEFAULT_SESSION_FILE)]
        session: PathBuf,
        #[arg(long, default_value = ".")]
        out: PathBuf,
        #[arg(long, value_parser = ["json", "html"], num_args = 1..=2)]
        render: Vec<String>,
    },

    /// List topic identifiers with their titles.
    Topics,

    /// Load and check the catalog and configuration, write nothing.
    Validate,

    /// Print the live UTC clock once per second.
    Clock {
        /// Stop after this many lines (runs until interrupted when omitted).
        #[arg(long)]
        ticks: Option<u64>,
    },
}

/// Output format selected with `--render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Html,
    Json,
}

/// Requested formats; html when none given.
pub fn renderers(raw: &[String]) -> Vec<Render> {
    if raw.is_empty() {
        return vec![Render::Html];
    }
    let mut out = Vec::new();
    for r in raw {
        let r = if r == "json" { Render::Json } else { Render::Html };
        if !out.contains(&r) {
            out.push(r);
        }
    }
    out
}

/// Errors surfaced by argument validation.
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "path must be local (no scheme): {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if has_scheme(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    Ok(())
}

fn iter_all_paths(args: &Args) -> impl Iterator<Item = &Path> {
    let (a, b) = match &args.command {
        Command::Build { out, .. } => (Some(out.as_path()), None),
        Command::Select { session, out, .. } | Command::Report { session, out, .. } => {
            (Some(session.as_path()), Some(out.as_path()))
        }
        _ => (None, None),
    };
    [args.catalog.as_deref(), args.config.as_deref(), a, b].into_iter().flatten()
}

/// Local-path checks on already parsed arguments.
pub fn validate(args: Args) -> Result<Args, CliError> {
    for p in iter_all_paths(&args) {
        ensure_local_path(p)?;
    }
    Ok(args)
}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn select_defaults_and_global_flags() {
        let a = parse(&["esg", "select", "energy", "--no-wait", "-vv"]);
        assert_eq!(a.verbose, 2);
        match a.command {
            Command::Select { topic, session, out, no_wait } => {
                assert_eq!(topic, "energy");
                assert_eq!(session, PathBuf::from(".esg-session.json"));
                assert_eq!(out, PathBuf::from("."));
                assert!(no_wait);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn render_list_defaults_to_html_and_dedups() {
        assert_eq!(renderers(&[]), vec![Render::Html]);
        let raw = vec!["json".to_string(), "html".to_string(), "json".to_string()];
        assert_eq!(renderers(&raw), vec![Render::Json, Render::Html]);
        assert!(Args::try_parse_from(["esg", "build", "--render", "pdf"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["esg", "--quiet", "-v", "topics"]).is_err());
    }

    #[test]
    fn rejects_networked_paths() {
        let a = parse(&["esg", "--catalog", "https://example.org/c.json", "validate"]);
        assert!(matches!(validate(a), Err(CliError::NonLocalPath(_))));
        let a = parse(&["esg", "report", "--session", "file:///tmp/s.json"]);
        assert!(validate(a).is_err());
        let a = parse(&["esg", "build", "--out", "/tmp/site"]);
        assert!(validate(a).is_ok());
    }
}
