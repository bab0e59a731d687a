// Benchmarks for registry config resolution
// Measures address parsing, inference, and parameter map publishing

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use taro_registry::{AddressParts, RegistryConfig};

fn bench_parse_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_address");
    for address in [
        "justahost",
        "zookeeper://127.0.0.1:2181",
        "zookeeper://10.0.0.1:2181?backup=10.0.0.2:2182,10.0.0.3:2183",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(address), address, |b, a| {
            b.iter(|| AddressParts::parse(black_box(a)))
        });
    }
    group.finish();
}

fn bench_with_address(c: &mut Criterion) {
    c.bench_function("with_address", |b| {
        b.iter(|| RegistryConfig::with_address(black_box("nacos://10.0.0.1:8848")))
    });
}

fn bench_to_parameters(c: &mut Criterion) {
    let mut config = RegistryConfig::with_address("zookeeper://127.0.0.1:2181");
    config.set_group("dev");
    config.set_timeout(5000);
    config.set_simplified(true);
    config.set_extra_keys("side,weight");

    c.bench_function("to_parameters", |b| b.iter(|| black_box(&config).to_parameters()));
}

criterion_group!(
    benches,
    bench_parse_address,
    bench_with_address,
    bench_to_parameters
);
criterion_main!(benches);
