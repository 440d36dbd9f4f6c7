use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

fn bench_compile(c: &mut Criterion, name: &str, schema: &Value) {
    c.bench_function(&format!("{name}/compile"), |b| {
        b.iter(|| jsonschema::validator_for(schema).expect("Valid schema"))
    });
}

fn bench_is_valid(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let compiled = jsonschema::validator_for(schema).expect("Valid schema");
    c.bench_with_input(
        BenchmarkId::new(name, "is_valid"),
        instance,
        |b, instance| {
            b.iter(|| compiled.is_valid(instance));
        },
    );
}

fn bench_validate(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let compiled = jsonschema::validator_for(schema).expect("Valid schema");
    c.bench_with_input(
        BenchmarkId::new(name, "validate"),
        instance,
        |b, instance| {
            b.iter(|| compiled.validate(instance));
        },
    );
}

fn run_benchmarks(c: &mut Criterion) {
    let cases: &[(&str, Value, Value)] = &[
        (
            "flat_object",
            json!({
                "type": "object",
                "properties": {
                    "a": {"type": "string"},
                    "b": {"type": "integer"},
                    "c": {"type": "boolean"}
                },
                "required": ["a", "b"]
            }),
            json!({"a": "hello", "b": 1, "c": true}),
        ),
        (
            "nested_array",
            json!({
                "type": "array",
                "items": {"type": "object", "properties": {"id": {"type": "integer"}}}
            }),
            json!([{"id": 1}, {"id": 2}, {"id": 3}]),
        ),
    ];
    for (name, schema, instance) in cases {
        bench_compile(c, name, schema);
        bench_is_valid(c, name, schema, instance);
        bench_validate(c, name, schema, instance);
    }
}

criterion_group!(jsonschema, run_benchmarks);
criterion_main!(jsonschema);
