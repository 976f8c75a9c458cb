use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strscan::{Pattern, StringScanner};

const SCANNER_INPUT: &str = r#"
// A small program
fn main() {
    let a = 10;
    let b = 20;
    /* block comment
       over two lines */
    let c = a + b * 2;
    print(c);
}
"#;

static PATTERNS: &[&str] = &[
    r"\s+",                  // Whitespace
    r"//.*",                 // Line comment
    r"/\*([^*]|\*[^/])*\*/", // Block comment
    r"[a-zA-Z_]\w*",         // Identifier
    r"0|[1-9][0-9]*",        // Number
    r"[{}();=+*]",           // Punctuation
];

fn tokenize_with(scanner: &mut StringScanner, patterns: &[Pattern]) -> usize {
    let mut tokens = 0;
    while !scanner.is_eos() {
        let matched = patterns
            .iter()
            .any(|pattern| scanner.scan(pattern).ok().flatten().is_some());
        if !matched {
            scanner.get_char();
        }
        tokens += 1;
    }
    tokens
}

fn precompiled_benchmark(c: &mut Criterion) {
    let patterns: Vec<Pattern> = PATTERNS.iter().map(|p| Pattern::new(p).unwrap()).collect();
    c.bench_function("precompiled_benchmark", |b| {
        b.iter(|| {
            let mut scanner = StringScanner::new(black_box(SCANNER_INPUT));
            black_box(tokenize_with(&mut scanner, &patterns));
        });
    });
}

fn cached_source_benchmark(c: &mut Criterion) {
    c.bench_function("cached_source_benchmark", |b| {
        b.iter(|| {
            let mut scanner = StringScanner::new(black_box(SCANNER_INPUT));
            let mut tokens = 0;
            while !scanner.is_eos() {
                let matched = PATTERNS
                    .iter()
                    .any(|pattern| scanner.scan(*pattern).ok().flatten().is_some());
                if !matched {
                    scanner.get_char();
                }
                tokens += 1;
            }
            black_box(tokens);
        });
    });
}

fn scan_until_benchmark(c: &mut Criterion) {
    c.bench_function("scan_until_benchmark", |b| {
        b.iter(|| {
            let mut scanner = StringScanner::new(black_box(SCANNER_INPUT));
            let mut count = 0;
            while let Ok(Some(_)) = scanner.scan_until(r"let\s+(\w+)") {
                count += 1;
            }
            black_box(count);
        });
    });
}

criterion_group!(
    benches,
    precompiled_benchmark,
    cached_source_benchmark,
    scan_until_benchmark
);
criterion_main!(benches);
