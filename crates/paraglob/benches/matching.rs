// SPDX-License-Identifier: MIT

//! Matching benchmarks.
//!
//! Measures the payoff of the dual-trie candidate narrowing against a
//! naive scan that runs every pattern's regex on every needle.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use regex::Regex;

use paraglob::{Encoding, Paraglob};

/// Synthetic signature set: literal names, open prefixes, open suffixes
/// and bracketing patterns over a small alphabet.
fn signature_set(n: usize) -> Vec<String> {
    let mut patterns = Vec::with_capacity(n);
    for i in 0..n {
        let stem = format!("sig{:04x}", i);
        patterns.push(match i % 4 {
            0 => stem,
            1 => format!("{}*", stem),
            2 => format!("*{}", stem),
            _ => format!("{}*{}", &stem[..3], &stem[3..]),
        });
    }
    patterns
}

fn build_index(patterns: &[String]) -> Paraglob {
    let mut pg = Paraglob::new(Encoding::Ascii);
    for p in patterns {
        pg.insert(p, ()).unwrap();
    }
    pg
}

fn bench_insert(c: &mut Criterion) {
    let patterns = signature_set(1000);
    c.bench_function("insert_1000_patterns", |b| {
        b.iter(|| black_box(build_index(&patterns)))
    });
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("match");
    let patterns = signature_set(1000);
    let pg = build_index(&patterns);

    // Hits one literal signature plus its open-affix variants.
    group.bench_function("trie_hit", |b| {
        b.iter(|| black_box(pg.matches("sig0000")))
    });

    // Shares no signature affix: both walks prune within the first
    // byte or two and no regex runs.
    group.bench_function("trie_miss", |b| {
        b.iter(|| black_box(pg.matches("unrelated-needle")))
    });

    group.finish();
}

fn bench_naive_baseline(c: &mut Criterion) {
    // Every pattern compiled independently and run on every needle;
    // this is what the index exists to avoid.
    let regexes: Vec<Regex> = signature_set(1000)
        .iter()
        .map(|p| Regex::new(&p.replace('*', ".*")).unwrap())
        .collect();

    c.bench_function("naive_scan_1000", |b| {
        b.iter(|| {
            let hits: u64 = regexes
                .iter()
                .filter(|re| re.is_match(black_box("sig0000")))
                .count() as u64;
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_insert, bench_match, bench_naive_baseline);
criterion_main!(benches);
