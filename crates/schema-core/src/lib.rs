//! A high-performance JSON Schema validator for Rust.
//!
//! - Support for JSON Schema Draft 4 through the rolling next draft
//! - Custom keywords and format validators
//! - Remote reference fetching (network/file)
//! - `Flag`, `List` (basic) and `Hierarchical` output styles
//!
//! # Validation
//!
//! The `jsonschema` crate offers two main approaches to validation: one-off validation and reusable validators.
//!
//! ## One-off Validation
//!
//! For simple use cases where you need to validate an instance against a schema once, use the `is_valid` function:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let instance = json!("Hello, world!");
//!
//! assert!(jsonschema::is_valid(&schema, &instance));
//! ```
//!
//! ## Reusable Validators
//!
//! For better performance, especially when validating multiple instances against the same schema, build a validator once and reuse it:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let validator = jsonschema::validator_for(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!("Hello, world!")));
//! assert!(!validator.is_valid(&json!(42)));
//!
//! // Iterate over all errors
//! let instance = json!(42);
//! let result = validator.validate(&instance);
//! if let Err(errors) = result {
//!     for error in errors {
//!         eprintln!("Error: {}", error);
//!         eprintln!("Location: {}", error.instance_path);
//!     }
//! }
//! ```
//!
//! # Configuration
//!
//! `jsonschema` provides a builder for configuration options via [`options`].
//!
//! Here is how you can explicitly set the JSON Schema draft version:
//!
//! ```rust
//! use jsonschema::Draft;
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let validator = jsonschema::options()
//!     .with_draft(Draft::Draft7)
//!     .build(&schema)
//!     .expect("Invalid schema");
//! ```
//!
//! For a complete list of configuration options and their usage, please refer to the [`ValidationOptions`] struct.
//!
//! # Reference Resolving
//!
//! By default, `jsonschema` resolves HTTP references using `reqwest` and file references from the local file system.
//!
//! You can disable the default behavior using crate features:
//!
//! - Disable HTTP resolving: `default-features = false, features = ["resolve-file"]`
//! - Disable file resolving: `default-features = false, features = ["resolve-http"]`
//! - Disable both: `default-features = false`
//!
//! You can implement a custom retriever to handle external references. Here's an example that uses a
//! static map of schemas:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsonschema::Resource;
//! use serde_json::json;
//!
//! let extra = Resource::from_contents(json!({
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string" },
//!         "age": { "type": "integer" }
//!     },
//!     "required": ["name", "age"]
//! }))?;
//!
//! let schema = json!({
//!     "$ref": "https://example.com/person.json"
//! });
//!
//! let validator = jsonschema::options()
//!     .with_resource("https://example.com/person.json", extra)
//!     .build(&schema)?;
//!
//! assert!(validator.is_valid(&json!({
//!     "name": "Alice",
//!     "age": 30
//! })));
//!
//! assert!(!validator.is_valid(&json!({
//!     "name": "Bob"
//! })));
//! #    Ok(())
//! # }
//! ```
//!
//! # Output Styles
//!
//! `jsonschema` supports the `Flag`, `List` (basic) and `Hierarchical` output styles.
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsonschema::BasicOutput;
//! use serde_json::json;
//!
//! let schema_json = json!({
//!     "title": "string value",
//!     "type": "string"
//! });
//! let instance = json!("some string");
//! let schema = jsonschema::validator_for(&schema_json)
//!     .expect("Invalid schema");
//!
//! let output: BasicOutput = schema.apply(&instance).basic();
//! let output_json = serde_json::to_value(output)?;
//!
//! assert_eq!(
//!     output_json,
//!     json!({
//!         "valid": true,
//!         "annotations": [
//!             {
//!                 "keywordLocation": "",
//!                 "instanceLocation": "",
//!                 "annotations": {
//!                     "title": "string value"
//!                 }
//!             }
//!         ]
//!     })
//! );
//! #    Ok(())
//! # }
//! ```
//!
//! The `Hierarchical` style keeps the nesting of the schema instead of flattening it into a
//! list, which is convenient for tooling that wants to walk the result the same way it would
//! walk the schema:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema_json = json!({"allOf": [{"type": "string"}, {"maxLength": 3}]});
//! let instance = json!("abcd");
//! let schema = jsonschema::validator_for(&schema_json)
//!     .expect("Invalid schema");
//!
//! let output = schema.apply(&instance).hierarchical();
//! assert!(!output.is_valid());
//! assert!(!output.nested().is_empty());
//! ```
//!
//! # Custom Keywords
//!
//! `jsonschema` allows you to extend its functionality by implementing custom validation logic through custom keywords.
//! This feature is particularly useful when you need to validate against domain-specific rules that aren't covered by the standard JSON Schema keywords.
//!
//! To implement a custom keyword, you need to:
//! 1. Create a struct that implements the [`Keyword`] trait
//! 2. Create a factory function or closure that produces instances of your custom keyword
//! 3. Register the custom keyword with [`ValidationOptions`] using the `with_keyword` method
//!
//! Here's a complete example:
//!
//! ```rust
//! use jsonschema::{
//!     paths::{JSONPointer, JsonPointerNode},
//!     ErrorIterator, Keyword, ValidationError,
//! };
//! use serde_json::{json, Map, Value};
//! use std::iter::once;
//!
//! // Step 1: Implement the Keyword trait
//! struct EvenNumberValidator;
//!
//! impl Keyword for EvenNumberValidator {
//!     fn validate<'instance>(
//!         &self,
//!         instance: &'instance Value,
//!         instance_path: &JsonPointerNode,
//!     ) -> ErrorIterator<'instance> {
//!         if let Value::Number(n) = instance {
//!             if n.as_u64().map_or(false, |n| n % 2 == 0) {
//!                 Box::new(None.into_iter())
//!             } else {
//!                 let error = ValidationError::custom(
//!                     JSONPointer::default(),
//!                     instance_path.into(),
//!                     instance,
//!                     "Number must be even",
//!                 );
//!                 Box::new(once(error))
//!             }
//!         } else {
//!             let error = ValidationError::custom(
//!                 JSONPointer::default(),
//!                 instance_path.into(),
//!                 instance,
//!                 "Value must be a number",
//!             );
//!             Box::new(once(error))
//!         }
//!     }
//!
//!     fn is_valid(&self, instance: &Value) -> bool {
//!         instance.as_u64().map_or(false, |n| n % 2 == 0)
//!     }
//! }
//!
//! // Step 2: Create a factory function
//! fn even_number_validator_factory<'a>(
//!     _parent: &'a Map<String, Value>,
//!     value: &'a Value,
//!     _path: JSONPointer,
//! ) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
//!     // You can use the `value` parameter to configure your validator if needed
//!     if value.as_bool() == Some(true) {
//!         Ok(Box::new(EvenNumberValidator))
//!     } else {
//!         Err(ValidationError::custom(
//!             JSONPointer::default(),
//!             JSONPointer::default(),
//!             value,
//!             "The 'even-number' keyword must be set to true",
//!         ))
//!     }
//! }
//!
//! // Step 3: Use the custom keyword
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schema = json!({"even-number": true, "type": "integer"});
//!     let validator = jsonschema::options()
//!         .with_keyword("even-number", even_number_validator_factory)
//!         .build(&schema)
//!         .expect("Invalid schema");
//!
//!     assert!(validator.is_valid(&json!(2)));
//!     assert!(!validator.is_valid(&json!(3)));
//!     assert!(!validator.is_valid(&json!("not a number")));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Formats
//!
//! JSON Schema allows for format validation through the `format` keyword. While `jsonschema`
//! provides built-in validators for standard formats, you can also define custom format validators
//! for domain-specific string formats.
//!
//! ```rust
//! use serde_json::json;
//!
//! fn ends_with_42(s: &str) -> bool {
//!     s.ends_with("42!")
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = json!({
//!     "type": "string",
//!     "format": "ends-with-42"
//! });
//!
//! let validator = jsonschema::options()
//!     .with_format("ends-with-42", ends_with_42)
//!     .build(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!("Hello42!")));
//! assert!(!validator.is_valid(&json!("Hello43!")));
//! assert!(!validator.is_valid(&json!(42))); // Not a string
//! #    Ok(())
//! # }
//! ```
//!
//! ### Notes on Custom Format Validators
//!
//! - Custom format validators are only called for string instances.
//! - Format validation can be disabled globally or per-draft using [`ValidationOptions`].
//!   Ensure format validation is enabled if you're using custom formats.
mod compiler;
mod content_encoding;
mod content_media_type;
mod ecma;
pub mod error;
mod keywords;
mod node;
mod options;
pub mod output;
pub mod paths;
pub mod primitive_type;
pub(crate) mod properties;
mod retriever;
mod validator;

pub use error::{ErrorIterator, ValidationError};
pub use keywords::custom::Keyword;
pub use options::ValidationOptions;
pub use output::{BasicOutput, HierarchicalOutput};
pub use retriever::{SchemaResolver, SchemaResolverError};
pub use schema_registry::{Draft, Resource, Retrieve};
pub use validator::Validator;

use serde_json::Value;

/// A shortcut for validating `instance` against `schema`. Draft version is detected automatically.
/// ```rust
/// use jsonschema::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed.
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let validator = Validator::new(schema).expect("Invalid schema");
    validator.is_valid(instance)
}

/// Create a default [`ValidationOptions`] for configuring JSON Schema validation.
#[must_use]
#[inline]
pub fn options() -> ValidationOptions {
    Validator::options()
}

/// Build a validator from `schema`, detecting the draft automatically unless configured otherwise.
#[inline]
pub fn validator_for(schema: &Value) -> Result<Validator, ValidationError<'static>> {
    Validator::new(schema)
}

/// Compile `schema` into a reusable [`Validator`]. An alias for [`validator_for`].
#[inline]
pub fn compile(schema: &Value) -> Result<Validator, ValidationError<'static>> {
    Validator::new(schema)
}


#[cfg(test)]
mod tests {
    use super::{is_valid, Draft, Validator};
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        let valid = json!("foobar");
        let invalid = json!("foo");
        assert!(is_valid(&schema, &valid));
        assert!(!is_valid(&schema, &invalid));
    }

    #[test_case(Draft::Draft4)]
    #[test_case(Draft::Draft6)]
    #[test_case(Draft::Draft7)]
    fn meta_schemas(draft: Draft) {
        for schema in [json!({"enum": [0, 0.0]}), json!({"enum": []})] {
            assert!(Validator::options().with_draft(draft).build(&schema).is_ok())
        }
    }

    #[test]
    fn incomplete_escape_in_pattern() {
        let schema = json!({"pattern": "\\u"});
        assert!(Validator::new(&schema).is_err())
    }
}
