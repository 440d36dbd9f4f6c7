use jsonschema::Draft;
use serde_json::{json, Value};
use test_case::test_case;

fn pretty_json(v: &Value) -> String {
    serde_json::to_string_pretty(v).expect("Failed to format JSON")
}

#[test_case(Draft::Draft6, &json!({"type": "integer", "minimum": 3}), &json!(5), true; "draft6 type and minimum valid")]
#[test_case(Draft::Draft6, &json!({"type": "integer", "minimum": 3}), &json!(2), false; "draft6 type and minimum invalid")]
#[test_case(Draft::Draft7, &json!({"type": "integer"}), &json!(1.0), true; "draft7 integer accepts zero fraction")]
#[test_case(Draft::Draft7, &json!({"type": "integer"}), &json!(1.5), false; "draft7 integer rejects fraction")]
#[test_case(Draft::Draft201909, &json!({"allOf": [{"properties": {"a": {}}}], "unevaluatedProperties": false}), &json!({"a": 1, "b": 2}), false; "draft201909 unevaluated properties catches extra")]
#[test_case(Draft::Draft201909, &json!({"allOf": [{"properties": {"a": {}}}], "unevaluatedProperties": false}), &json!({"a": 1}), true; "draft201909 unevaluated properties allows covered")]
#[test_case(Draft::Draft202012, &json!({"type": "array", "contains": {"type": "integer"}, "minContains": 2}), &json!([1, "a", 3]), true; "draft202012 contains with minContains satisfied")]
#[test_case(Draft::Draft202012, &json!({"type": "array", "contains": {"type": "integer"}, "minContains": 2}), &json!([1, "a", "b"]), false; "draft202012 contains with minContains unsatisfied")]
#[test_case(Draft::Draft202012, &json!({"if": {"type": "string"}, "then": {"minLength": 1}, "else": {"type": "number"}}), &json!(""), false; "draft202012 if then branch fails")]
#[test_case(Draft::Draft202012, &json!({"if": {"type": "string"}, "then": {"minLength": 1}, "else": {"type": "number"}}), &json!(42), true; "draft202012 if then branch passes when if fails")]
#[test_case(Draft::Draft202012, &json!({"if": {"type": "string"}, "then": {"minLength": 1}, "else": {"type": "number"}}), &json!([]), false; "draft202012 else branch fails")]
#[test_case(Draft::DraftNext, &json!({"type": "array", "contains": {"type": "string"}, "minContains": 1}), &json!(["a", 1]), true; "draftnext contains over array still works")]
fn test_suite(draft: Draft, schema: &Value, instance: &Value, expected_valid: bool) {
    let mut options = jsonschema::options();
    options.with_draft(draft);
    let validator = options.build(schema).expect("Failed to build a schema");

    assert_eq!(
        validator.is_valid(instance),
        expected_valid,
        "Schema: {}\nInstance: {}",
        pretty_json(schema),
        pretty_json(instance),
    );

    let output = validator.apply(instance).basic();
    assert_eq!(output.is_valid(), expected_valid);
}

#[test]
fn unique_items_structural_equality() {
    let schema = json!({"uniqueItems": true});
    let instance = json!([{"a": 1, "b": 2}, {"b": 2, "a": 1}]);
    let validator = jsonschema::compile(&schema).expect("Valid schema");
    assert!(!validator.is_valid(&instance));
}

#[test]
fn not_double_negation() {
    let schema = json!({"not": {"not": {"type": "string"}}});
    let validator = jsonschema::compile(&schema).expect("Valid schema");
    assert!(validator.is_valid(&json!("hello")));
    assert!(!validator.is_valid(&json!(1)));
}

#[test]
fn flag_and_hierarchical_agree_on_validity() {
    let schema = json!({
        "allOf": [{"type": "string"}, {"maxLength": 3}]
    });
    let validator = jsonschema::compile(&schema).expect("Valid schema");
    let instance = json!("abcd");
    let flag_valid = validator.is_valid(&instance);
    let basic_valid = validator.apply(&instance).basic().is_valid();
    let hierarchical = validator.apply(&instance).hierarchical();
    assert_eq!(flag_valid, basic_valid);
    assert_eq!(flag_valid, hierarchical.is_valid());
    assert!(!flag_valid);
    // The `allOf` branch that failed (`maxLength`) is reachable as a nested node.
    assert!(hierarchical
        .nested()
        .iter()
        .any(|child| child.keyword_location().to_string().starts_with("/allOf")));
}

#[test]
fn hierarchical_output_nests_by_keyword_location() {
    let schema = json!({
        "allOf": [{"properties": {"a": {"type": "string"}}}],
        "unevaluatedProperties": false
    });
    let validator = jsonschema::options()
        .with_draft(Draft::Draft201909)
        .build(&schema)
        .expect("Valid schema");
    let valid_instance = json!({"a": "x"});
    let invalid_instance = json!({"a": 1, "b": 2});

    let valid_output = validator.apply(&valid_instance).hierarchical();
    assert!(valid_output.is_valid());

    let invalid_output = validator.apply(&invalid_instance).hierarchical();
    assert!(!invalid_output.is_valid());
    assert!(!invalid_output.nested().is_empty());
}
