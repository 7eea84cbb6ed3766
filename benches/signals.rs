// benches/signals.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use aeo_audit::core::Document;
use aeo_audit::signals::{readability, SiteSignals};

/// A few kilobytes of plausible small-business homepage.
fn sample_page() -> String {
    let mut html = String::from(
        r#"<html><head><meta name="viewport" content="width=device-width">
<script type="application/ld+json">{"@type":"LocalBusiness","aggregateRating":{"@type":"AggregateRating"}}</script>
</head><body><h1>Acme Autos</h1>"#,
    );
    for i in 0..40 {
        html.push_str(&format!(
            "<section><h2>Service {i}</h2><p>They fix brakes, clutches and gearboxes. \
             Prices start from $89 per hour. \"Friendly and fast every time\" says a local.</p>\
             <details><summary>Question {i}</summary>Their answer.</details></section>"
        ));
    }
    html.push_str("<table><tr><th>Acme vs Others</th></tr></table><a href=\"tel:0390000000\">Call</a></body></html>");
    html
}

fn bench_signals(c: &mut Criterion) {
    let html = sample_page();
    let doc = Document::parse(&html);

    c.bench_function("document_parse", |b| {
        b.iter(|| black_box(Document::parse(black_box(&html))).text().len())
    });

    c.bench_function("reading_grade", |b| {
        b.iter(|| readability::reading_grade(black_box(doc.text())))
    });

    c.bench_function("site_signals_8_pages", |b| {
        let docs: Vec<Document> = (0..8).map(|_| Document::parse(&html)).collect();
        b.iter(|| SiteSignals::from_documents(black_box(&docs)).map(|s| s.testimonial_hits))
    });
}

criterion_group!(benches, bench_signals);
criterion_main!(benches);
