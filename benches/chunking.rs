//! Benchmarks for section chunking and the full pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use syllabus_chunks::{Appendix, Chunker, Pipeline, Section, SectionChunker};

fn sample_text(size: usize) -> String {
    // Syllabus-like text: short paragraphs, headings, numbered items
    let paragraphs = [
        "Candidates should be able to identify common network services and their default ports. ",
        "Network Mapping\nUse of ICMP, TCP and UDP probes to enumerate live hosts. ",
        "1. Interpretation of scan results, including filtered and closed states. ",
        "• Banner grabbing and version fingerprinting of exposed services. ",
        "Windows domain enumeration covers users, groups, shares and password policy. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(paragraphs[i % paragraphs.len()]);
        text.push_str(if i % 3 == 2 { "\n\n" } else { "\n" });
        i += 1;
    }
    let mut end = size;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

fn bench_section_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_chunker");
    let chunker = SectionChunker::default();

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("section", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)))
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let appendices: Vec<Appendix> = ["A", "B", "C", "D"]
        .iter()
        .map(|letter| Appendix {
            letter: (*letter).to_string(),
            title: format!("Appendix {letter}"),
            sections: (0..20)
                .map(|i| Section {
                    id: format!("{letter}{i}"),
                    title: format!("Section {i}"),
                    content: sample_text(150 * (i + 1)),
                })
                .collect(),
        })
        .collect();
    let pipeline = Pipeline::default();

    group.bench_function("corpus", |b| b.iter(|| pipeline.run(black_box(&appendices))));

    group.finish();
}

criterion_group!(benches, bench_section_chunker, bench_pipeline);
criterion_main!(benches);
