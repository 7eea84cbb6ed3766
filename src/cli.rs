// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::audit::Auditor;
use crate::config::consts::{DEFAULT_LOG_FILE, MAX_PAGES, REQUEST_TIMEOUT_SECS};
use crate::config::options::{AuditOptions, ExportFormat, FetchOptions};
use crate::log::{self, LogTarget};
use crate::progress::Progress;
use crate::report::AuditReport;
use crate::roi::BusinessInputs;

/// Audit a small-business website for AI search (AEO) readiness.
#[derive(Parser, Debug)]
#[command(name = "aeo_audit", version, about)]
pub struct Args {
    /// Site to audit, e.g. acme-plumbing.com.au
    pub site: String,

    /// Use generic wording instead of local-business examples
    #[arg(long)]
    pub generic: bool,

    /// Candidate pages to fetch
    #[arg(long, default_value_t = MAX_PAGES)]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Average sale value in dollars
    #[arg(long, default_value_t = 500.0)]
    pub avg_sale: f64,

    /// Current conversion rate in percent
    #[arg(long, default_value_t = 3.0)]
    pub conv_pct: f64,

    /// Website visitors per month
    #[arg(long, default_value_t = 300.0)]
    pub visitors: f64,

    /// json | csv | tsv | text
    #[arg(short, long, default_value = "text", value_parser = parse_format)]
    pub format: ExportFormat,

    /// Write to this file (extension follows --format) instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,

    /// Leave the header row out of csv/tsv output
    #[arg(long)]
    pub no_headers: bool,

    /// -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Send logs to a file instead of stderr
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
    pub log_file: Option<PathBuf>,
}

fn parse_format(text: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(text).ok_or_else(|| format!("unknown format {text:?} (json, csv, tsv, text)"))
}

impl Args {
    pub fn to_options(&self) -> AuditOptions {
        let mut opts = AuditOptions {
            site: self.site.clone(),
            local_mode: !self.generic,
            fetch: FetchOptions { max_pages: self.max_pages, timeout: Duration::from_secs(self.timeout) },
            inputs: BusinessInputs::new(self.avg_sale, self.conv_pct, self.visitors),
            ..Default::default()
        };
        opts.export.format = self.format;
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

/// Page-by-page status on stderr, so stdout stays clean for the report.
#[derive(Default)]
struct StderrProgress {
    total: usize,
    done: usize,
}

impl StderrProgress {
    fn tick(&mut self, status: &str, url: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {status:<6} {url}", self.done, self.total);
    }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, url: &str) {
        self.tick("ok", url);
    }

    fn item_failed(&mut self, url: &str, reason: &str) {
        self.tick("failed", &format!("{url} ({reason})"));
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let target = match &args.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stderr,
    };
    log::init(args.verbose, target).wrap_err("could not open log file")?;

    let opts = args.to_options();
    let mut progress = StderrProgress::default();
    progress.log(&format!("Auditing {} ...", opts.site));

    let run = Auditor::new(opts.fetch.clone()).run_http(&opts.site, opts.local_mode, &mut progress);
    let report = AuditReport::new(&run, &opts.inputs);

    if args.out.is_some() {
        let path = crate::file::write_report(&opts.export, &report).map_err(|e| eyre!("export failed: {e}"))?;
        println!("Wrote {}", path.display());
    } else {
        print!("{}", report.render(opts.export.format, opts.export.include_headers)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn options_from_args() {
        let args = Args::parse_from([
            "aeo_audit", "acme.com", "--generic", "--max-pages", "3", "-f", "csv", "-o", "reports/acme",
            "--visitors=-5",
        ]);
        let opts = args.to_options();
        assert!(!opts.local_mode);
        assert_eq!(opts.fetch.max_pages, 3);
        assert_eq!(opts.inputs.monthly_visitors, 0.0);
        assert_eq!(opts.export.out_path(), PathBuf::from("reports").join("acme.csv"));
    }

    #[test]
    fn bare_log_flag_uses_default_file() {
        let args = Args::parse_from(["aeo_audit", "acme.com", "--log-file"]);
        assert_eq!(args.log_file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["aeo_audit", "acme.com", "--format", "pdf"]).is_err());
    }
}
