use jsonschema::Draft;
use serde_json::json;
use test_case::test_case;

#[test_case(
    &json!({"format": "email"}),
    &json!("not-an-email"),
    Draft::Draft202012,
    true;
    "2020-12 format is annotation-only without format-assertion vocabulary"
)]
#[test_case(
    &json!({
        "$vocabulary": {
            "https://json-schema.org/draft/2020-12/vocab/core": true,
            "https://json-schema.org/draft/2020-12/vocab/format-assertion": true
        },
        "format": "email"
    }),
    &json!("not-an-email"),
    Draft::Draft202012,
    false;
    "2020-12 format asserts once format-assertion vocabulary is active"
)]
#[test_case(
    &json!({"type": "integer"}),
    &json!(1.0),
    Draft::Draft4,
    false;
    "draft 4 does not coerce a zero-fraction float into an integer"
)]
#[test_case(
    &json!({"type": "integer"}),
    &json!(1.0),
    Draft::Draft6,
    true;
    "draft 6 coerces a zero-fraction float into an integer"
)]
#[test_case(
    &json!({"maximum": 10, "exclusiveMaximum": true}),
    &json!(10),
    Draft::Draft4,
    false;
    "draft 4 exclusiveMaximum is a boolean modifier on maximum"
)]
#[test_case(
    &json!({"maximum": 10, "exclusiveMaximum": true}),
    &json!(10),
    Draft::Draft7,
    true;
    "draft 7 exclusiveMaximum is its own numeric keyword, a bare boolean is inapplicable"
)]
#[test_case(
    &json!({
        "properties": {"a": {"$ref": "#/definitions/pos"}, "maximum": 100},
        "definitions": {"pos": {"minimum": 0}}
    }),
    &json!({"a": 150}),
    Draft::Draft4,
    true;
    "a ref replaces its siblings in draft 4"
)]
#[test_case(
    &json!({"prefixItems": [{"type": "integer"}], "items": {"type": "string"}}),
    &json!([1, "a", "b"]),
    Draft::Draft202012,
    true;
    "items applies to every index past prefixItems"
)]
#[test_case(
    &json!({"properties": {"a": {"type": "string"}}, "unevaluatedProperties": false}),
    &json!({"a": "x", "b": 1}),
    Draft::Draft202012,
    false;
    "unevaluatedProperties rejects a property no sibling claimed"
)]
fn scenario(schema: &serde_json::Value, instance: &serde_json::Value, draft: Draft, valid: bool) {
    let mut options = jsonschema::options();
    options.with_draft(draft);
    options.with_format_assertions(false);
    let validator = options.build(schema).expect("schema should compile");
    assert_eq!(validator.is_valid(instance), valid);
}

#[test]
fn bool_true_schema_accepts_anything() {
    for instance in [json!(null), json!(1), json!("s"), json!([1, 2]), json!({"a": 1})] {
        assert!(jsonschema::is_valid(&json!(true), &instance));
    }
}

#[test]
fn bool_false_schema_rejects_anything() {
    for instance in [json!(null), json!(1), json!("s"), json!([1, 2]), json!({"a": 1})] {
        assert!(!jsonschema::is_valid(&json!(false), &instance));
    }
}

#[test]
fn empty_schema_accepts_anything() {
    for instance in [json!(null), json!(1), json!("s"), json!([1, 2]), json!({"a": 1})] {
        assert!(jsonschema::is_valid(&json!({}), &instance));
    }
}

#[test]
fn empty_object_and_empty_array_stay_distinct() {
    assert!(jsonschema::is_valid(&json!({"type": "object"}), &json!({})));
    assert!(!jsonschema::is_valid(&json!({"type": "array"}), &json!({})));
    assert!(jsonschema::is_valid(&json!({"type": "array"}), &json!([])));
    assert!(!jsonschema::is_valid(&json!({"type": "object"}), &json!([])));
}

#[test]
fn one_of_rejects_when_more_than_one_branch_matches() {
    let schema = json!({"oneOf": [{"type": "string"}, {"maxLength": 40}]});
    assert!(!jsonschema::is_valid(&schema, &json!("some string")));
}

#[test]
fn enum_passes_iff_deep_equal_to_a_listed_value() {
    let schema = json!({"enum": [1, "two", [3], {"four": 4}]});
    assert!(jsonschema::is_valid(&schema, &json!(1)));
    assert!(jsonschema::is_valid(&schema, &json!([3])));
    assert!(jsonschema::is_valid(&schema, &json!({"four": 4})));
    assert!(!jsonschema::is_valid(&schema, &json!(2)));
}

#[test]
fn ref_cycle_within_max_depth_terminates() {
    let schema = json!({
        "$defs": {"node": {"properties": {"next": {"$ref": "#/$defs/node"}}}},
        "$ref": "#/$defs/node"
    });
    let validator = jsonschema::options()
        .with_max_depth(50)
        .build(&schema)
        .expect("schema should compile");
    assert!(validator.is_valid(&json!({"next": {"next": {}}})));
}

#[test]
fn ref_cycle_beyond_max_depth_is_reported_as_an_instance_error() {
    let schema = json!({
        "$defs": {"node": {"properties": {"next": {"$ref": "#/$defs/node"}}}},
        "$ref": "#/$defs/node"
    });
    let mut instance = json!({});
    for _ in 0..20 {
        instance = json!({"next": instance});
    }
    let validator = jsonschema::options()
        .with_max_depth(10)
        .build(&schema)
        .expect("schema should compile");
    assert!(!validator.is_valid(&instance));
}

#[test]
fn draft_07_asserts_format_only_once_opted_in() {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "format": "email"
    });
    let instance = json!("not-an-email");

    let off = jsonschema::options().build(&schema).expect("schema should compile");
    assert!(off.is_valid(&instance), "draft 04/06/07 format is annotation-only by default");

    let on = jsonschema::options()
        .with_format_assertions(true)
        .build(&schema)
        .expect("schema should compile");
    assert!(!on.is_valid(&instance), "format_assertion(true) makes draft-07 format an assertion");
}

#[test]
fn format_assertion_off_always_passes_regardless_of_string_content() {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "format": "uuid"
    });
    let validator = jsonschema::options()
        .with_format_assertions(false)
        .build(&schema)
        .expect("schema should compile");
    for instance in [json!("not-a-uuid"), json!(""), json!("550e8400-e29b-41d4-a716-446655440000")] {
        assert!(validator.is_valid(&instance));
    }
}

#[test]
fn enum_deep_equality_treats_an_integer_and_an_equal_float_as_the_same_value() {
    let schema = json!({"enum": [1]});
    assert!(jsonschema::is_valid(&schema, &json!(1.0)));
}

#[test]
fn const_deep_equality_treats_an_integer_and_an_equal_float_as_the_same_value() {
    let schema = json!({"const": 1.0});
    assert!(jsonschema::is_valid(&schema, &json!(1)));
}

#[test]
fn unique_items_rejects_an_integer_alongside_its_equal_float() {
    let schema = json!({"uniqueItems": true});
    assert!(!jsonschema::is_valid(&schema, &json!([1, 1.0])));
    assert!(jsonschema::is_valid(&schema, &json!([1, 2.0])));
}

#[test]
fn dependencies_is_ignored_under_2019_09_and_later() {
    // `dependencies` was split into `dependentRequired`/`dependentSchemas` in 2019-09; a
    // schema that still uses the old keyword there must not have it enforced.
    let schema = json!({"dependencies": {"a": ["b"]}});
    let validator = jsonschema::options()
        .with_draft(Draft::Draft201909)
        .build(&schema)
        .expect("schema should compile");
    assert!(validator.is_valid(&json!({"a": 1})));

    let validator = jsonschema::options()
        .with_draft(Draft::Draft7)
        .build(&schema)
        .expect("schema should compile");
    assert!(!validator.is_valid(&json!({"a": 1})));
}

#[test]
fn unresolved_ref_aborts_as_a_schema_error_not_an_instance_error() {
    let schema = json!({"$ref": "#/$defs/missing"});
    let validator = jsonschema::validator_for(&schema).expect("schema should compile");

    let errors: Vec<_> = validator.iter_errors(&json!(1)).collect();
    assert_eq!(errors.len(), 1, "the abort must be surfaced alone, not alongside other errors");
    assert!(matches!(errors[0].kind, jsonschema::ValidationErrorKind::Referencing(_)));
}

#[test]
fn nested_id_rebases_the_base_uri_for_its_own_relative_refs() {
    // "sub" declares its own `$id`, so its `"$ref": "#/$defs/inner"` must resolve against
    // `sub`'s own document, not the root's — even though the evaluator reaches `sub` by
    // following the root's `$ref` to a plain JSON Pointer fragment.
    let schema = json!({
        "$id": "https://example.com/root.json",
        "$ref": "#/$defs/sub",
        "$defs": {
            "sub": {
                "$id": "https://example.com/sub.json",
                "$ref": "#/$defs/inner",
                "$defs": {"inner": {"type": "integer"}}
            }
        }
    });
    let validator = jsonschema::validator_for(&schema).expect("schema should compile");
    assert!(validator.is_valid(&json!(5)));
    assert!(!validator.is_valid(&json!("not an integer")));
}
