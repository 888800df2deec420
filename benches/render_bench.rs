use criterion::{Criterion, criterion_group, criterion_main};
use remarkup_report::{Finding, RemarkupFormatter, Severity, SummaryBuilder};
use std::hint::black_box;

fn formatter() -> RemarkupFormatter {
    RemarkupFormatter::from_parts("http://sonar.example.com/", "bench")
}

fn generate_findings(count: usize) -> Vec<Finding> {
    let severities = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Info,
    ];
    (0..count)
        .map(|i| Finding {
            severity: severities[i % severities.len()],
            component_key: format!("bench:src/module_{}/file_{}.rs", i % 20, i),
            line: i + 1,
            message: format!("Finding number {i} with a reasonably long message body"),
            rule_key: format!("rust:S{}", 100 + i % 400),
        })
        .collect()
}

fn bench_render_single(c: &mut Criterion) {
    let f = formatter();
    let findings = generate_findings(1);
    c.bench_function("render_single", |b| {
        b.iter(|| black_box(f.render(&findings[0]).unwrap()))
    });
}

fn bench_render_batch(c: &mut Criterion) {
    let f = formatter();
    let findings = generate_findings(1_000);
    c.bench_function("render_batch_1000", |b| {
        b.iter(|| black_box(f.render_all(findings.iter())))
    });
}

fn bench_summarize(c: &mut Criterion) {
    let f = formatter();
    let findings = generate_findings(500);
    c.bench_function("summarize_500", |b| {
        b.iter(|| {
            let mut builder = SummaryBuilder::new(&f);
            for finding in &findings {
                builder.add(finding.clone());
            }
            black_box(builder.summarize())
        })
    });
}

criterion_group!(
    benches,
    bench_render_single,
    bench_render_batch,
    bench_summarize
);
criterion_main!(benches);
