use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use slirc_commands::alias::AliasTable;
use slirc_commands::input;

// Alias expansion and tokenizing run on every line typed, so these are the
// baseline costs of the interpreter without any handler work.

fn alias_expansion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias");
    group.throughput(Throughput::Elements(1));

    let mut table = AliasTable::with_defaults('/');
    table.set("a", "/b $1+").unwrap();
    table.set("b", "/c $1+").unwrap();
    table.set("c", "/msg $channel $1+").unwrap();

    group.bench_function("expand_passthrough", |b| {
        b.iter(|| table.expand("/privmsg #rust hello world", "#rust"))
    });

    group.bench_function("expand_single", |b| {
        b.iter(|| table.expand("/j #rust,#tokio", "#rust"))
    });

    group.bench_function("expand_chain", |b| {
        b.iter(|| table.expand("/a hello there world", "#rust"))
    });

    group.finish();
}

fn tokenize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let line = "/kick spammer you have been warned three times already";
    group.throughput(Throughput::Bytes(line.len() as u64));

    group.bench_function("parse_command", |b| b.iter(|| input::parse(line, '/')));

    group.finish();
}

criterion_group!(benches, alias_expansion_benchmark, tokenize_benchmark);
criterion_main!(benches);
