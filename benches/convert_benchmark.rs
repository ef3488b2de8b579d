//! Benchmarks for docmark parsing and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic documents mixing headings, styled
//! paragraphs, nested lists, code blocks, and tables.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docmark::model::{List, TableRow, TextRun};
use docmark::{Document, FormatRegistry, Manifest, Paragraph, Table};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(sections: usize) -> Document {
    let mut doc = Document::new().with_title("Benchmark");
    doc.add_list("bullets", List::bulleted());
    doc.add_list("steps", List::numbered());

    for i in 0..sections {
        doc.add_paragraph(Paragraph::heading(format!("Section {}\n", i + 1), 2));
        doc.add_paragraph(
            Paragraph::with_text("Plain text with ")
                .with_run(TextRun::bold("bold"))
                .with_run(TextRun::new(", "))
                .with_run(TextRun::italic("italic [sic]"))
                .with_run(TextRun::new(" and a "))
                .with_run(TextRun::new("link").with_link("https://example.com/?q=1&r=2"))
                .with_run(TextRun::new(".\n")),
        );
        for depth in 0..3 {
            doc.add_paragraph(Paragraph::bullet("bullets", depth, "bullet item\n"));
            doc.add_paragraph(Paragraph::bullet("steps", depth, "numbered step\n"));
        }
        doc.add_paragraph(
            Paragraph::new().with_run(TextRun::in_font("fn main() {}\n", "Consolas")),
        );
        doc.add_table(
            Table::new()
                .with_row(TableRow::from_strings(["name", "value"]))
                .with_row(TableRow::from_strings(["a_b", "1 < 2"])),
        );
    }
    doc
}

/// Benchmark parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for sections in [1, 10, 100].iter() {
        let doc = create_test_document(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| docmark::parse(black_box(&doc)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark rendering one parsed tree in each built-in format.
fn bench_rendering(c: &mut Criterion) {
    let registry = FormatRegistry::global().unwrap();
    let tree = docmark::parse(&create_test_document(100)).unwrap();
    let manifest = Manifest::new();
    let mut group = c.benchmark_group("render");

    for format in registry.keys() {
        group.bench_function(format, |b| {
            b.iter(|| registry.render(format, black_box(&tree), &manifest).unwrap());
        });
    }

    group.finish();
}

/// Benchmark registry construction and validation.
fn bench_registry_creation(c: &mut Criterion) {
    c.bench_function("registry_with_defaults", |b| {
        b.iter(|| FormatRegistry::with_defaults().unwrap());
    });
}

criterion_group!(benches, bench_parsing, bench_rendering, bench_registry_creation);
criterion_main!(benches);
