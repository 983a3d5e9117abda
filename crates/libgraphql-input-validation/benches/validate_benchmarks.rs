mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_input_validation::operation::ExecutableDocument;
use libgraphql_input_validation::schema::Schema;
use libgraphql_input_validation::schema::SchemaBuilder;
use libgraphql_input_validation::InputValidationRule;
use libgraphql_input_validation::InputValidator;

fn build_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, fixtures::SCHEMA)
        .unwrap()
        .build()
        .unwrap()
}

fn validator() -> InputValidator {
    InputValidator::new([
        ("items", InputValidationRule::Items),
        ("length", InputValidationRule::Length),
        ("range", InputValidationRule::Range),
    ])
}

// ─── Group 1: Setup ───────────────────────────────────────

fn setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("setup");

    group.bench_function("schema_build", |b| {
        b.iter(|| black_box(build_schema()))
    });

    group.bench_function("document_parse", |b| {
        b.iter(|| {
            black_box(ExecutableDocument::parse_str(fixtures::CREATE_ORDERS_MUTATION))
        })
    });

    group.finish();
}

// ─── Group 2: Scalar Arguments ────────────────────────────

fn scalar_arguments(c: &mut Criterion) {
    let schema = build_schema();
    let validator = validator();
    let document = ExecutableDocument::parse_str(fixtures::SEARCH_QUERY).unwrap();
    let mut group = c.benchmark_group("scalar_arguments");

    for (label, variables) in [
        ("valid", serde_json::json!({"term": "shoes", "first": 20})),
        ("invalid", serde_json::json!({"term": "", "first": 500})),
    ] {
        group.bench_with_input(
            BenchmarkId::new("search", label),
            &variables,
            |b, variables| {
                b.iter(|| {
                    black_box(validator.validate(&schema, &document, variables.as_object()))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 3: Input Object Lists ──────────────────────────

fn input_object_lists(c: &mut Criterion) {
    let schema = build_schema();
    let validator = validator();
    let document = ExecutableDocument::parse_str(fixtures::CREATE_ORDERS_MUTATION).unwrap();
    let mut group = c.benchmark_group("input_object_lists");

    for count in [10, 1_000, 10_000] {
        let variables = fixtures::orders_variables(count, 10);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("create_orders", count),
            &variables,
            |b, variables| {
                b.iter(|| {
                    black_box(validator.validate(&schema, &document, variables.as_object()))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    setup,
    scalar_arguments,
    input_object_lists,
);
criterion_main!(benches);
