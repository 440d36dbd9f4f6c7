use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

fn bench_keyword_is_valid(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let compiled = jsonschema::validator_for(schema).expect("Valid schema");
    c.bench_with_input(
        BenchmarkId::new(format!("keyword/{name}"), "is_valid"),
        instance,
        |b, instance| {
            b.iter(|| compiled.is_valid(instance));
        },
    );
}

fn run_benchmarks(c: &mut Criterion) {
    let cases: &[(&str, Value, Value)] = &[
        (
            "pattern",
            json!({"type": "string", "pattern": "^[a-z]+[0-9]*$"}),
            json!("abc123"),
        ),
        (
            "unevaluated_properties",
            json!({
                "allOf": [{"properties": {"a": {}}}],
                "unevaluatedProperties": false
            }),
            json!({"a": 1}),
        ),
        (
            "contains",
            json!({"type": "array", "contains": {"type": "integer"}, "minContains": 2}),
            json!([1, "a", 3]),
        ),
    ];
    for (name, schema, instance) in cases {
        bench_keyword_is_valid(c, name, schema, instance);
    }
}

criterion_group!(keywords, run_benchmarks);
criterion_main!(keywords);
