// tests/export_e2e.rs
mod common;

use std::fs;

use aeo_audit::config::options::{AuditOptions, ExportFormat};
use aeo_audit::csv::parse_rows;
use aeo_audit::file::write_report;
use aeo_audit::progress::NullProgress;
use aeo_audit::report::{AuditReport, FINDINGS_HEADERS};

use common::{auditor, tmp_dir, FakeSite, ANSWER_READY_HOME};

fn live_report() -> AuditReport {
    let site = FakeSite::new().page("https://acme-autos.com.au/", ANSWER_READY_HOME);
    let run = auditor().run("acme-autos.com.au", true, &site, &mut NullProgress);
    AuditReport::new(&run, &AuditOptions::default().inputs)
}

#[test]
fn csv_export_creates_dirs_and_writes_findings() {
    let mut opts = AuditOptions::default();
    opts.export.format = ExportFormat::Csv;
    let dir = tmp_dir("csv").join("nested");
    opts.export.set_path(dir.join("acme.txt").to_str().unwrap());

    let path = write_report(&opts.export, &live_report()).unwrap();
    assert!(path.to_string_lossy().ends_with("acme.csv"));

    let rows = parse_rows(&fs::read_to_string(&path).unwrap(), ',');
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0], FINDINGS_HEADERS.map(String::from).to_vec());
    let faq = rows.iter().find(|r| r[0] == "FAQ Depth").unwrap();
    assert_eq!(faq[1], "GOOD");
}

#[test]
fn tsv_without_headers() {
    let mut opts = AuditOptions::default();
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.export.set_path(tmp_dir("tsv").join("acme").to_str().unwrap());

    let path = write_report(&opts.export, &live_report()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let rows = parse_rows(&text, '\t');
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r.len() == FINDINGS_HEADERS.len()));
}

#[test]
fn json_export_is_the_full_report() {
    let mut opts = AuditOptions::default();
    opts.export.set_path(tmp_dir("json").join("acme").to_str().unwrap());

    let report = live_report();
    let path = write_report(&opts.export, &report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(json["brand"], "Acme Autos");
    assert_eq!(json["live_pages"], 1);
    assert_eq!(json["scorecard"]["score"], report.score());
    assert_eq!(json["categories"].as_array().map(Vec::len), Some(12));
    assert_eq!(json["impact"].as_array().map(Vec::len), Some(report.impact.len()));
}

#[test]
fn text_export_lists_quick_wins() {
    let mut opts = AuditOptions::default();
    opts.export.format = ExportFormat::Text;
    opts.export.set_path(tmp_dir("text").join("acme").to_str().unwrap());

    let report = live_report();
    let path = write_report(&opts.export, &report).unwrap();
    assert!(path.to_string_lossy().ends_with("acme.txt"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Quick wins (next 7 days)"));
    for q in &report.summary.quick_wins {
        assert!(text.contains(q.as_str()));
    }
}
