use crate::{
    compiler,
    error::{error, no_error, ErrorIterator, ValidationError},
    keywords::CompilationResult,
    paths::{JsonPointer, JsonPointerNode},
    primitive_type::{PrimitiveType, PrimitiveTypesBitMap},
};
use serde_json::{json, Map, Number, Value};
use std::convert::TryFrom;

use crate::validator::Validate;

pub(crate) struct MultipleTypesValidator {
    types: PrimitiveTypesBitMap,
    location: JsonPointer,
}

impl MultipleTypesValidator {
    #[inline]
    pub(crate) fn compile<'a>(
        items: &[Value],
        location: JsonPointer,
    ) -> CompilationResult<'a> {
        let mut types = PrimitiveTypesBitMap::new();
        for item in items {
            match item {
                Value::String(string) => {
                    if let Ok(primitive_type) = PrimitiveType::try_from(string.as_str()) {
                        types |= primitive_type;
                    } else {
                        return Err(ValidationError::enumeration(
                            JsonPointer::default(),
                            location,
                            item,
                            &json!([
                                "array", "boolean", "integer", "null", "number", "object", "string"
                            ]),
                        ));
                    }
                }
                _ => {
                    return Err(ValidationError::single_type_error(
                        location,
                        JsonPointer::default(),
                        item,
                        PrimitiveType::String,
                    ))
                }
            }
        }
        Ok(Box::new(MultipleTypesValidator { types, location }))
    }
}

impl Validate for MultipleTypesValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Array(_) => self.types.contains_type(PrimitiveType::Array),
            Value::Bool(_) => self.types.contains_type(PrimitiveType::Boolean),
            Value::Null => self.types.contains_type(PrimitiveType::Null),
            Value::Number(num) => {
                self.types.contains_type(PrimitiveType::Number)
                    || (self.types.contains_type(PrimitiveType::Integer) && is_integer(num))
            }
            Value::Object(_) => self.types.contains_type(PrimitiveType::Object),
            Value::String(_) => self.types.contains_type(PrimitiveType::String),
        }
    }
    fn validate<'i>(&self, instance: &'i Value, location: &JsonPointerNode) -> ErrorIterator<'i> {
        if self.is_valid(instance) {
            no_error()
        } else {
            error(ValidationError::multiple_type_error(
                self.location.clone(),
                location.into(),
                instance,
                self.types,
            ))
        }
    }
}

macro_rules! single_type_validator {
    ($name:ident, $check:ident, $kind:ident, $doc:expr) => {
        #[doc = $doc]
        pub(crate) struct $name {
            location: JsonPointer,
        }

        impl $name {
            #[inline]
            pub(crate) fn compile<'a>(location: JsonPointer) -> CompilationResult<'a> {
                Ok(Box::new($name { location }))
            }
        }

        impl Validate for $name {
            fn is_valid(&self, instance: &Value) -> bool {
                instance.$check()
            }
            fn validate<'i>(
                &self,
                instance: &'i Value,
                location: &JsonPointerNode,
            ) -> ErrorIterator<'i> {
                if self.is_valid(instance) {
                    no_error()
                } else {
                    error(ValidationError::single_type_error(
                        self.location.clone(),
                        location.into(),
                        instance,
                        PrimitiveType::$kind,
                    ))
                }
            }
        }
    };
}

single_type_validator!(NullTypeValidator, is_null, Null, "`type: null`");
single_type_validator!(BooleanTypeValidator, is_boolean, Boolean, "`type: boolean`");
single_type_validator!(StringTypeValidator, is_string, String, "`type: string`");
single_type_validator!(ArrayTypeValidator, is_array, Array, "`type: array`");
single_type_validator!(ObjectTypeValidator, is_object, Object, "`type: object`");
single_type_validator!(NumberTypeValidator, is_number, Number, "`type: number`");

pub(crate) struct IntegerTypeValidator {
    location: JsonPointer,
}

impl IntegerTypeValidator {
    #[inline]
    pub(crate) fn compile<'a>(location: JsonPointer) -> CompilationResult<'a> {
        Ok(Box::new(IntegerTypeValidator { location }))
    }
}

impl Validate for IntegerTypeValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        if let Value::Number(num) = instance {
            is_integer(num)
        } else {
            false
        }
    }
    fn validate<'i>(&self, instance: &'i Value, location: &JsonPointerNode) -> ErrorIterator<'i> {
        if self.is_valid(instance) {
            no_error()
        } else {
            error(ValidationError::single_type_error(
                self.location.clone(),
                location.into(),
                instance,
                PrimitiveType::Integer,
            ))
        }
    }
}

fn is_integer(num: &Number) -> bool {
    num.is_u64() || num.is_i64() || num.as_f64().expect("Always valid").fract() == 0.
}

#[inline]
pub(crate) fn compile<'a>(
    ctx: &compiler::Context,
    _: &'a Map<String, Value>,
    schema: &'a Value,
) -> Option<CompilationResult<'a>> {
    let location = ctx.as_pointer_with("type");
    match schema {
        Value::String(item) => compile_single_type(item.as_str(), location),
        Value::Array(items) => {
            if items.len() == 1 {
                let item = &items[0];
                if let Value::String(item) = item {
                    compile_single_type(item.as_str(), location)
                } else {
                    Some(Err(ValidationError::single_type_error(
                        JsonPointer::default(),
                        location,
                        item,
                        PrimitiveType::String,
                    )))
                }
            } else {
                Some(MultipleTypesValidator::compile(items, location))
            }
        }
        _ => Some(Err(ValidationError::multiple_type_error(
            JsonPointer::default(),
            ctx.clone().into_pointer(),
            schema,
            PrimitiveTypesBitMap::new()
                .add_type(PrimitiveType::String)
                .add_type(PrimitiveType::Array),
        ))),
    }
}

fn compile_single_type<'a>(item: &str, location: JsonPointer) -> Option<CompilationResult<'a>> {
    match PrimitiveType::try_from(item) {
        Ok(PrimitiveType::Array) => Some(ArrayTypeValidator::compile(location)),
        Ok(PrimitiveType::Boolean) => Some(BooleanTypeValidator::compile(location)),
        Ok(PrimitiveType::Integer) => Some(IntegerTypeValidator::compile(location)),
        Ok(PrimitiveType::Null) => Some(NullTypeValidator::compile(location)),
        Ok(PrimitiveType::Number) => Some(NumberTypeValidator::compile(location)),
        Ok(PrimitiveType::Object) => Some(ObjectTypeValidator::compile(location)),
        Ok(PrimitiveType::String) => Some(StringTypeValidator::compile(location)),
        Err(()) => Some(Err(ValidationError::null_schema())),
    }
}
