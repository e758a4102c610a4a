//! Error types.
use crate::{
    paths::JSONPointer,
    primitive_type::{PrimitiveType, PrimitiveTypesBitMap},
};
use serde_json::{Map, Number, Value};
use std::{
    borrow::Cow,
    error,
    fmt::{self, Formatter},
    io,
    iter::{empty, once},
    str::Utf8Error,
    string::FromUtf8Error,
};

/// An error that occurred while validating an instance against a schema.
#[derive(Debug)]
pub struct ValidationError<'a> {
    /// Value of the instance that failed validation.
    pub instance: Cow<'a, Value>,
    /// The kind of validation failure.
    pub kind: ValidationErrorKind,
    /// Path to the value that failed validation, within the instance.
    pub instance_path: JSONPointer,
    /// Path to the keyword that failed validation, within the schema.
    pub schema_path: JSONPointer,
}

/// An iterator over the [`ValidationError`]s produced by validating a single instance.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo and bar");
/// if let Ok(validator) = jsonschema::validator_for(&schema) {
///     if let Err(errors) = validator.validate(&instance) {
///         for error in errors {
///             println!("Validation error: {error}");
///         }
///     }
/// }
/// ```
pub type ErrorIterator<'a> = Box<dyn Iterator<Item = ValidationError<'a>> + Sync + Send + 'a>;

pub(crate) fn no_error<'a>() -> ErrorIterator<'a> {
    Box::new(empty())
}

pub(crate) fn error(err: ValidationError) -> ErrorIterator {
    Box::new(once(err))
}

/// The specific reason a [`ValidationError`] was raised, one variant per keyword family.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum ValidationErrorKind {
    AdditionalItems { limit: usize },
    AdditionalProperties { unexpected: Vec<String> },
    AnyOf,
    BacktrackLimitExceeded { error: fancy_regex::Error },
    Constant { expected_value: Value },
    Contains,
    ContentEncoding { content_encoding: String },
    ContentMediaType { content_media_type: String },
    Custom { message: String },
    DependentRequired { property: Value },
    Enum { options: Value },
    ExclusiveMaximum { limit: Value },
    ExclusiveMinimum { limit: Value },
    FalseSchema,
    FileNotFound { error: io::Error },
    Format { format: String },
    FromUtf8 { error: FromUtf8Error },
    Utf8 { error: Utf8Error },
    JSONParse { error: serde_json::Error },
    InvalidReference { reference: String },
    InvalidURL { error: url::ParseError },
    MaxContains { limit: usize },
    MaxItems { limit: u64 },
    Maximum { limit: Value },
    MaxLength { limit: u64 },
    MaxProperties { limit: u64 },
    MinContains { limit: usize },
    MinItems { limit: u64 },
    Minimum { limit: Value },
    MinLength { limit: u64 },
    MinProperties { limit: u64 },
    MultipleOf { multiple_of: f64 },
    Not { schema: Value },
    OneOfMultipleValid,
    OneOfNotValid,
    Pattern { pattern: String },
    PropertyNames { error: Box<ValidationError<'static>> },
    Required { property: Value },
    Schema,
    Type { kind: TypeKind },
    UnevaluatedItems { unexpected: Vec<usize> },
    UnevaluatedProperties { unexpected: Vec<String> },
    UniqueItems,
    Referencing(referencing::Error),
}

#[derive(Debug)]
#[allow(missing_docs)]
pub enum TypeKind {
    Single(PrimitiveType),
    Multiple(PrimitiveTypesBitMap),
}

/// Errors that can occur while compiling a schema, before any instance is validated.
#[derive(Debug)]
pub enum SchemaError {
    /// The schema document did not decode to a boolean or an object.
    InvalidSchema,
    /// A keyword that is semantically required in context was absent (e.g. a `then`-less
    /// `if` is legal, but a custom keyword family may demand one).
    MissingKeyword { keyword: &'static str },
    /// The schema's `$schema` or caller-specified draft hint did not match a known draft.
    UnsupportedDraft { uri: String },
    /// `$ref`/`$dynamicRef`/`$recursiveRef` resolution failed while compiling the schema.
    Referencing(referencing::Error),
    /// The maximum allowed resolution/recursion depth was exceeded while compiling or
    /// validating.
    DepthExceeded { limit: usize },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::InvalidSchema => {
                write!(f, "a schema must be a boolean or an object")
            }
            SchemaError::MissingKeyword { keyword } => {
                write!(f, "missing required keyword: {keyword}")
            }
            SchemaError::UnsupportedDraft { uri } => {
                write!(f, "unsupported or undetectable JSON Schema draft: {uri}")
            }
            SchemaError::Referencing(err) => err.fmt(f),
            SchemaError::DepthExceeded { limit } => {
                write!(f, "exceeded the maximum resolution depth of {limit}")
            }
        }
    }
}

impl error::Error for SchemaError {}

impl From<referencing::Error> for SchemaError {
    fn from(err: referencing::Error) -> Self {
        SchemaError::Referencing(err)
    }
}

impl<'a> ValidationError<'a> {
    #[must_use]
    pub(crate) fn into_owned(self) -> ValidationError<'static> {
        ValidationError {
            instance_path: self.instance_path.clone(),
            instance: Cow::Owned(self.instance.into_owned()),
            kind: self.kind,
            schema_path: self.schema_path,
        }
    }

    pub(crate) fn additional_items(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: usize,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AdditionalItems { limit },
            schema_path,
        }
    }
    pub(crate) fn additional_properties(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        unexpected: Vec<String>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AdditionalProperties { unexpected },
            schema_path,
        }
    }
    pub(crate) fn any_of(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AnyOf,
            schema_path,
        }
    }
    pub(crate) fn backtrack_limit(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        error: fancy_regex::Error,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::BacktrackLimitExceeded { error },
            schema_path,
        }
    }
    pub(crate) fn constant(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        expected_value: &Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Constant { expected_value: expected_value.clone() },
            schema_path,
        }
    }
    pub(crate) fn contains(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Contains,
            schema_path,
        }
    }
    pub(crate) fn min_contains(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: usize,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MinContains { limit },
            schema_path,
        }
    }
    pub(crate) fn max_contains(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: usize,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MaxContains { limit },
            schema_path,
        }
    }
    pub(crate) fn content_encoding(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        encoding: &str,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::ContentEncoding { content_encoding: encoding.to_string() },
            schema_path,
        }
    }
    pub(crate) fn content_media_type(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        media_type: &str,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::ContentMediaType { content_media_type: media_type.to_string() },
            schema_path,
        }
    }
    pub(crate) fn dependent_required(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        property: &str,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::DependentRequired { property: Value::String(property.to_string()) },
            schema_path,
        }
    }
    pub(crate) fn enumeration(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        options: &Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Enum { options: options.clone() },
            schema_path,
        }
    }
    pub(crate) fn exclusive_maximum(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::ExclusiveMaximum { limit },
            schema_path,
        }
    }
    pub(crate) fn exclusive_minimum(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::ExclusiveMinimum { limit },
            schema_path,
        }
    }
    pub(crate) fn false_schema(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::FalseSchema,
            schema_path,
        }
    }
    pub(crate) fn format(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        format: impl Into<String>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Format { format: format.into() },
            schema_path,
        }
    }
    pub(crate) fn max_items(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MaxItems { limit },
            schema_path,
        }
    }
    pub(crate) fn maximum(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Maximum { limit },
            schema_path,
        }
    }
    pub(crate) fn max_length(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MaxLength { limit },
            schema_path,
        }
    }
    pub(crate) fn max_properties(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MaxProperties { limit },
            schema_path,
        }
    }
    pub(crate) fn min_items(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MinItems { limit },
            schema_path,
        }
    }
    pub(crate) fn minimum(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Minimum { limit },
            schema_path,
        }
    }
    pub(crate) fn min_length(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MinLength { limit },
            schema_path,
        }
    }
    pub(crate) fn min_properties(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MinProperties { limit },
            schema_path,
        }
    }
    pub(crate) fn multiple_of(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        multiple_of: f64,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MultipleOf { multiple_of },
            schema_path,
        }
    }
    pub(crate) fn not(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        schema: Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Not { schema },
            schema_path,
        }
    }
    pub(crate) fn one_of_multiple_valid(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::OneOfMultipleValid,
            schema_path,
        }
    }
    pub(crate) fn one_of_not_valid(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::OneOfNotValid,
            schema_path,
        }
    }
    pub(crate) fn pattern(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        pattern: String,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Pattern { pattern },
            schema_path,
        }
    }
    pub(crate) fn property_names(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        error: ValidationError<'a>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::PropertyNames { error: Box::new(error.into_owned()) },
            schema_path,
        }
    }
    pub(crate) fn required(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        property: Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Required { property },
            schema_path,
        }
    }
    pub(crate) fn single_type_error(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        type_name: PrimitiveType,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Type { kind: TypeKind::Single(type_name) },
            schema_path,
        }
    }
    pub(crate) fn multiple_type_error(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        types: PrimitiveTypesBitMap,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Type { kind: TypeKind::Multiple(types) },
            schema_path,
        }
    }
    pub(crate) fn unevaluated_items(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        unexpected: Vec<usize>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::UnevaluatedItems { unexpected },
            schema_path,
        }
    }
    pub(crate) fn unevaluated_properties(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        unexpected: Vec<String>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::UnevaluatedProperties { unexpected },
            schema_path,
        }
    }
    pub(crate) fn unique_items(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::UniqueItems,
            schema_path,
        }
    }
    /// Build a custom validation error, e.g. from a user-defined keyword.
    #[must_use]
    pub fn custom(
        schema_path: JSONPointer,
        instance_path: JSONPointer,
        instance: &'a Value,
        message: impl Into<String>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance_path,
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Custom { message: message.into() },
            schema_path,
        }
    }
}

impl error::Error for ValidationError<'_> {}

impl From<referencing::Error> for ValidationError<'_> {
    fn from(err: referencing::Error) -> Self {
        ValidationError {
            instance_path: JSONPointer::default(),
            instance: Cow::Owned(Value::Null),
            kind: ValidationErrorKind::Referencing(err),
            schema_path: JSONPointer::default(),
        }
    }
}

impl fmt::Display for ValidationError<'_> {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::Schema => f.write_str("Schema error"),
            ValidationErrorKind::JSONParse { error } => error.fmt(f),
            ValidationErrorKind::Referencing(error) => error.fmt(f),
            ValidationErrorKind::FileNotFound { error } => error.fmt(f),
            ValidationErrorKind::InvalidURL { error } => error.fmt(f),
            ValidationErrorKind::BacktrackLimitExceeded { error } => error.fmt(f),
            ValidationErrorKind::Format { format } => {
                write!(f, r#"{} is not a "{}""#, self.instance, format)
            }
            ValidationErrorKind::AdditionalItems { limit } => {
                let extras: Vec<&Value> = self
                    .instance
                    .as_array()
                    .expect("AdditionalItems is only reported for arrays")
                    .iter()
                    .skip(*limit)
                    .collect();
                let verb = if extras.len() == 1 { "was" } else { "were" };
                write!(
                    f,
                    "Additional items are not allowed ({} {verb} unexpected)",
                    extras.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
                )
            }
            ValidationErrorKind::AdditionalProperties { unexpected } => {
                let verb = if unexpected.len() == 1 { "was" } else { "were" };
                write!(
                    f,
                    "Additional properties are not allowed ({} {verb} unexpected)",
                    unexpected.iter().map(|x| format!("'{x}'")).collect::<Vec<_>>().join(", ")
                )
            }
            ValidationErrorKind::AnyOf => write!(
                f,
                "{} is not valid under any of the schemas listed in the 'anyOf' keyword",
                self.instance
            ),
            ValidationErrorKind::OneOfNotValid => write!(
                f,
                "{} is not valid under any of the schemas listed in the 'oneOf' keyword",
                self.instance
            ),
            ValidationErrorKind::Contains => {
                write!(f, "None of {} are valid under the given schema", self.instance)
            }
            ValidationErrorKind::MinContains { limit } => write!(
                f,
                "{} does not contain at least {limit} item(s) valid under the given schema",
                self.instance
            ),
            ValidationErrorKind::MaxContains { limit } => write!(
                f,
                "{} contains more than {limit} item(s) valid under the given schema",
                self.instance
            ),
            ValidationErrorKind::Constant { expected_value } => {
                write!(f, "{expected_value} was expected")
            }
            ValidationErrorKind::ContentEncoding { content_encoding } => write!(
                f,
                r#"{} is not compliant with "{content_encoding}" content encoding"#,
                self.instance
            ),
            ValidationErrorKind::ContentMediaType { content_media_type } => write!(
                f,
                r#"{} is not compliant with "{content_media_type}" media type"#,
                self.instance
            ),
            ValidationErrorKind::DependentRequired { property } => {
                write!(f, "{property} is required by the present properties")
            }
            ValidationErrorKind::FromUtf8 { error } => error.fmt(f),
            ValidationErrorKind::Utf8 { error } => error.fmt(f),
            ValidationErrorKind::Enum { options } => {
                write!(f, "{} is not one of {options}", self.instance)
            }
            ValidationErrorKind::ExclusiveMaximum { limit } => write!(
                f,
                "{} is greater than or equal to the maximum of {limit}",
                self.instance
            ),
            ValidationErrorKind::ExclusiveMinimum { limit } => write!(
                f,
                "{} is less than or equal to the minimum of {limit}",
                self.instance
            ),
            ValidationErrorKind::FalseSchema => {
                write!(f, "False schema does not allow {}", self.instance)
            }
            ValidationErrorKind::InvalidReference { reference } => {
                write!(f, "Invalid reference: {reference}")
            }
            ValidationErrorKind::Maximum { limit } => {
                write!(f, "{} is greater than the maximum of {limit}", self.instance)
            }
            ValidationErrorKind::Minimum { limit } => {
                write!(f, "{} is less than the minimum of {limit}", self.instance)
            }
            ValidationErrorKind::MaxLength { limit } => write!(
                f,
                "{} is longer than {limit} character{}",
                self.instance,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MinLength { limit } => write!(
                f,
                "{} is shorter than {limit} character{}",
                self.instance,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MaxItems { limit } => write!(
                f,
                "{} has more than {limit} item{}",
                self.instance,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MinItems { limit } => write!(
                f,
                "{} has less than {limit} item{}",
                self.instance,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MaxProperties { limit } => write!(
                f,
                "{} has more than {limit} propert{}",
                self.instance,
                if *limit == 1 { "y" } else { "ies" }
            ),
            ValidationErrorKind::MinProperties { limit } => write!(
                f,
                "{} has less than {limit} propert{}",
                self.instance,
                if *limit == 1 { "y" } else { "ies" }
            ),
            ValidationErrorKind::Not { schema } => {
                write!(f, "{schema} is not allowed for {}", self.instance)
            }
            ValidationErrorKind::OneOfMultipleValid => write!(
                f,
                "{} is valid under more than one of the schemas listed in the 'oneOf' keyword",
                self.instance
            ),
            ValidationErrorKind::Pattern { pattern } => {
                write!(f, r#"{} does not match "{pattern}""#, self.instance)
            }
            ValidationErrorKind::PropertyNames { error } => error.fmt(f),
            ValidationErrorKind::Required { property } => {
                write!(f, "{property} is a required property")
            }
            ValidationErrorKind::MultipleOf { multiple_of } => {
                write!(f, "{} is not a multiple of {multiple_of}", self.instance)
            }
            ValidationErrorKind::UnevaluatedItems { unexpected } => write!(
                f,
                "Unevaluated items are not allowed (indexes {} were unexpected)",
                unexpected.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
            ),
            ValidationErrorKind::UnevaluatedProperties { unexpected } => {
                let verb = if unexpected.len() == 1 { "was" } else { "were" };
                write!(
                    f,
                    "Unevaluated properties are not allowed ({} {verb} unexpected)",
                    unexpected.iter().map(|x| format!("'{x}'")).collect::<Vec<_>>().join(", ")
                )
            }
            ValidationErrorKind::UniqueItems => {
                write!(f, "{} has non-unique elements", self.instance)
            }
            ValidationErrorKind::Type { kind: TypeKind::Single(type_) } => {
                write!(f, r#"{} is not of type "{type_}""#, self.instance)
            }
            ValidationErrorKind::Type { kind: TypeKind::Multiple(types) } => write!(
                f,
                "{} is not of types {}",
                self.instance,
                types.into_iter().map(|t| format!(r#""{t}""#)).collect::<Vec<_>>().join(", ")
            ),
            ValidationErrorKind::Custom { message } => f.write_str(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_type_error() {
        let instance = json!(42);
        let err = ValidationError::single_type_error(
            JSONPointer::default(),
            JSONPointer::default(),
            &instance,
            PrimitiveType::String,
        );
        assert_eq!(err.to_string(), r#"42 is not of type "string""#);
    }

    #[test]
    fn multiple_types_error() {
        let instance = json!(42);
        let err = ValidationError::multiple_type_error(
            JSONPointer::default(),
            JSONPointer::default(),
            &instance,
            vec![PrimitiveType::String, PrimitiveType::Number].into(),
        );
        assert_eq!(err.to_string(), r#"42 is not of types "number", "string""#);
    }
}
