//! A JSON Schema validator covering drafts 4, 6, 7, 2019-09, and 2020-12.
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "integer", "minimum": 0});
//! let instance = json!(42);
//!
//! assert!(jsonschema::is_valid(&schema, &instance));
//! ```
//!
//! For more control over the draft, resource resolution, and formats, build a
//! [`Validator`] via [`options`]:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let validator = jsonschema::options().build(&schema).expect("valid schema");
//! assert!(validator.is_valid(&json!("hi")));
//! assert!(!validator.is_valid(&json!(1)));
//! ```
mod error;
mod format;
mod keywords;
mod options;
pub mod output;
pub mod paths;
mod primitive_type;
mod retriever;
mod validator;

pub use error::{ErrorIterator, SchemaError, ValidationError, ValidationErrorKind};
pub use options::ValidationOptions;
pub use primitive_type::PrimitiveType;
pub use referencing::{Draft, Resource, Retrieve};
pub use retriever::DefaultRetriever;
pub use validator::Validator;

use serde_json::Value;

/// A fresh, default-configured [`ValidationOptions`] builder.
#[must_use]
pub fn options() -> ValidationOptions {
    ValidationOptions::default()
}

/// Builds a [`Validator`] for `schema` using default options (draft autodetected from
/// `$schema`, falling back to 2020-12).
///
/// # Errors
///
/// Returns a [`SchemaError`] if `schema` is structurally invalid or references a resource
/// that cannot be resolved.
pub fn validator_for(schema: &Value) -> Result<Validator, SchemaError> {
    options().build(schema)
}

/// Whether `instance` satisfies `schema`, under default options.
///
/// Returns `false` (rather than propagating a [`SchemaError`]) if `schema` itself fails to
/// compile.
#[must_use]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    match validator_for(schema) {
        Ok(validator) => validator.is_valid(instance),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn validates_a_simple_schema() {
        let schema = json!({"type": "integer", "minimum": 0});
        assert!(super::is_valid(&schema, &json!(5)));
        assert!(!super::is_valid(&schema, &json!(-5)));
        assert!(!super::is_valid(&schema, &json!("nope")));
    }

    #[test]
    fn reports_every_accumulated_error_by_default() {
        let schema = json!({
            "type": "object",
            "properties": {"name": {"type": "string"}},
            "required": ["name", "age"],
        });
        let validator = super::validator_for(&schema).expect("valid schema");
        let instance = json!({"name": 1});
        let errors: Vec<_> = validator.iter_errors(&instance).collect();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn rejects_a_malformed_schema() {
        let schema = json!("not a schema");
        assert!(super::validator_for(&schema).is_err());
    }
}
