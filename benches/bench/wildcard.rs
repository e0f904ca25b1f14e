// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::{GROUP, ND};

criterion_group!(benches, bench, bench_many_wildcards);

fn bench(c: &mut Criterion) {
    bench_with::<Keyglob>(c, "keyglob");
    bench_with::<wildmatch::WildMatch>(c, "wildmatch");
}

fn bench_with<Pattern: Wildcard>(c: &mut Criterion, title: &str) {
    let mut c = c.benchmark_group(format!("{GROUP}{ND}wildcard"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    const P1X: (&str, &str) = ("1x", "_*");
    const P27X: (&str, &str) = ("27x", "SOME_VERY_VERY_LONG_PREFIX_*");
    const PMID: (&str, &str) = ("mid", "*VERY*?NAME");

    let variants = [
        ("short", "_TEST", P1X, true),
        ("short", "TEST", P1X, false),
        ("long", "_TEST_SOME_VERY_VERY_LONG_NAME", P1X, true),
        ("long", "SOME_VERY_VERY_LONG_PREFIX_AND_SOMEWHAT", P27X, true),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAME", P27X, false),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAME", PMID, true),
    ];

    for (name, input, (pname, pattern), expected) in &variants {
        let function = format!("{}:{}", title, "matches");
        let param = format!(
            "{}:{}:{}:{}",
            name,
            pname,
            if *expected { "pos" } else { "neg" },
            input.len(),
        );
        let pattern = Pattern::new(pattern);
        let setup = || String::from(*input);
        let routine = |input: String| black_box(&pattern).matches(&input);

        assert_eq!(routine(setup()), *expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(function, param), |b| {
            b.iter_batched(setup, routine, BatchSize::SmallInput);
        });
    }
}

fn bench_many_wildcards(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{GROUP}{ND}many-wildcards"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    for n in [64, 256, 1024] {
        let subject = "a".repeat(n);
        let pattern = format!("{}b", "*a".repeat(16));
        assert!(!keyglob::matches(&subject, &pattern));

        c.throughput(Throughput::Bytes(n as u64));
        c.bench_function(BenchmarkId::new("keyglob:matches:neg", n), |b| {
            b.iter(|| keyglob::matches(black_box(&subject), black_box(&pattern)));
        });
    }
}

// ---

trait Wildcard {
    fn new(pattern: &'static str) -> Self;
    fn matches(&self, what: &str) -> bool;
}

struct Keyglob(&'static str);

impl Wildcard for Keyglob {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        keyglob::matches(what, self.0)
    }
}

impl Wildcard for wildmatch::WildMatch {
    #[inline(always)]
    fn new(pattern: &str) -> Self {
        Self::new(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}
