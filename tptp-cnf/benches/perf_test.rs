use criterion::{criterion_group, criterion_main, Criterion};
use std::{fs, path::Path};
use tptp_cnf::{document::Resolver, printer::Printer, syntax::SymbolTable, tree::Tree};

const MOCK_TPTP: &str = "resources/TPTP-mock";

fn problems() -> Vec<String> {
    let mut result = Vec::new();
    for entry in fs::read_dir(Path::new(MOCK_TPTP).join("Problems/TST")).unwrap() {
        result.push(fs::read_to_string(entry.unwrap().path()).unwrap());
    }
    result
}

fn grammar_benchmark(c: &mut Criterion) {
    let problems = problems();
    c.bench_function("grammar", |b| {
        b.iter(|| {
            for text in &problems {
                text.parse::<Tree>().unwrap();
            }
        })
    });
}

fn resolve_benchmark(c: &mut Criterion) {
    let problems = problems();
    let resolver = Resolver::new(MOCK_TPTP);
    c.bench_function("resolve", |b| {
        b.iter(|| {
            let mut symbols = SymbolTable::new(true);
            for text in &problems {
                resolver.parse(text, &mut symbols).unwrap();
            }
        })
    });
}

fn print_benchmark(c: &mut Criterion) {
    let problems = problems();
    let resolver = Resolver::new(MOCK_TPTP);
    let mut symbols = SymbolTable::new(true);
    let clauses: Vec<_> = problems
        .iter()
        .flat_map(|text| resolver.parse(text, &mut symbols).unwrap())
        .collect();
    c.bench_function("print", |b| {
        b.iter(|| Printer::new(&symbols).print_all(&clauses).unwrap())
    });
}

criterion_group!(benches, grammar_benchmark, resolve_benchmark, print_benchmark);
criterion_main!(benches);
