use jsonschema::output;
use serde_json::json;

#[test]
fn flag_output_only_carries_validity() {
    let schema = json!({"type": "integer"});
    let validator = jsonschema::validator_for(&schema).expect("valid schema");

    let ok: Vec<_> = validator.iter_errors(&json!(1)).collect();
    assert!(output::flag(&ok).valid);

    let bad: Vec<_> = validator.iter_errors(&json!("x")).collect();
    assert!(!output::flag(&bad).valid);
}

#[test]
fn basic_output_locates_every_failure() {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "age": {"type": "integer", "minimum": 0}
        }
    });
    let validator = jsonschema::validator_for(&schema).expect("valid schema");
    let instance = json!({"name": 1, "age": -5});
    let errors: Vec<_> = validator.iter_errors(&instance).collect();

    let report = output::basic(&errors);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 2);
    assert!(report
        .errors
        .iter()
        .any(|unit| unit.instance_location == "#/name" && unit.keyword.as_deref() == Some("type")));
    assert!(report
        .errors
        .iter()
        .any(|unit| unit.instance_location == "#/age" && unit.keyword.as_deref() == Some("minimum")));
}

#[test]
fn basic_output_is_empty_for_a_valid_instance() {
    let schema = json!({"type": "string"});
    let validator = jsonschema::validator_for(&schema).expect("valid schema");
    let errors: Vec<_> = validator.iter_errors(&json!("ok")).collect();

    let report = output::basic(&errors);
    assert!(report.valid);
    assert!(report.errors.is_empty());
}

#[test]
fn detailed_output_groups_failures_by_instance_location() {
    let schema = json!({
        "type": "array",
        "items": {"type": "integer", "minimum": 0}
    });
    let validator = jsonschema::validator_for(&schema).expect("valid schema");
    let instance = json!([1, -1, -2]);
    let errors: Vec<_> = validator.iter_errors(&instance).collect();

    let report = output::detailed(&errors);
    assert!(!report.valid);
    assert_eq!(report.details.len(), 2);
    let at_index_2 = report
        .details
        .iter()
        .find(|node| node.instance_location == "#/2")
        .expect("index 2 should have failures");
    assert_eq!(at_index_2.errors.len(), 1);
}

#[test]
fn verbose_output_mirrors_basic_without_the_keyword_field() {
    let schema = json!({"maxLength": 3});
    let validator = jsonschema::validator_for(&schema).expect("valid schema");
    let errors: Vec<_> = validator.iter_errors(&json!("too long")).collect();

    let report = output::verbose(&errors);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].absolute_keyword_location.is_none());
}
