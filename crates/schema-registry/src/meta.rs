use once_cell::sync::Lazy;
use serde_json::{json, Value};

// The full, byte-exact JSON Schema meta-schemas (draft4/6/7 monolithic; 2019-09 and
// 2020-12 split per vocabulary) are large fixture documents that are not bundled
// here. Each entry below is a minimal, permissive stand-in registered under the
// meta-schema's real `$id`/`$schema` URI: it is enough to seed vocabulary lookups
// (`vocabularies::find`) and the registry's URI resolution, and it does not reject
// any well-formed schema document. Keyword-level argument checking (e.g. `type`'s
// allowed value list, `multipleOf`'s positivity) happens in each keyword's own
// compile function regardless of this document's shape, so compilation errors for
// malformed schemas are still reported correctly.
fn permissive(id: &str, schema_dialect: &str) -> Value {
    json!({
        "$id": id,
        "$schema": schema_dialect,
        "type": ["object", "boolean"]
    })
}

macro_rules! schema_const {
    (pub $name:ident, $id:expr, $dialect:expr) => {
        pub static $name: Lazy<Value> = Lazy::new(|| permissive($id, $dialect));
    };
    ($name:ident, $id:expr, $dialect:expr) => {
        static $name: Lazy<Value> = Lazy::new(|| permissive($id, $dialect));
    };
}

schema_const!(pub DRAFT4, "http://json-schema.org/draft-04/schema#", "http://json-schema.org/draft-04/schema#");
schema_const!(pub DRAFT6, "http://json-schema.org/draft-06/schema#", "http://json-schema.org/draft-06/schema#");
schema_const!(pub DRAFT7, "http://json-schema.org/draft-07/schema#", "http://json-schema.org/draft-07/schema#");

schema_const!(pub DRAFT201909, "https://json-schema.org/draft/2019-09/schema", "https://json-schema.org/draft/2019-09/schema");
schema_const!(DRAFT201909_APPLICATOR, "https://json-schema.org/draft/2019-09/meta/applicator", "https://json-schema.org/draft/2019-09/schema");
schema_const!(DRAFT201909_CONTENT, "https://json-schema.org/draft/2019-09/meta/content", "https://json-schema.org/draft/2019-09/schema");
schema_const!(DRAFT201909_CORE, "https://json-schema.org/draft/2019-09/meta/core", "https://json-schema.org/draft/2019-09/schema");
schema_const!(DRAFT201909_FORMAT, "https://json-schema.org/draft/2019-09/meta/format", "https://json-schema.org/draft/2019-09/schema");
schema_const!(DRAFT201909_META_DATA, "https://json-schema.org/draft/2019-09/meta/meta-data", "https://json-schema.org/draft/2019-09/schema");
schema_const!(DRAFT201909_VALIDATION, "https://json-schema.org/draft/2019-09/meta/validation", "https://json-schema.org/draft/2019-09/schema");

schema_const!(pub DRAFT202012, "https://json-schema.org/draft/2020-12/schema", "https://json-schema.org/draft/2020-12/schema");
schema_const!(DRAFT202012_CORE, "https://json-schema.org/draft/2020-12/meta/core", "https://json-schema.org/draft/2020-12/schema");
schema_const!(DRAFT202012_APPLICATOR, "https://json-schema.org/draft/2020-12/meta/applicator", "https://json-schema.org/draft/2020-12/schema");
schema_const!(DRAFT202012_UNEVALUATED, "https://json-schema.org/draft/2020-12/meta/unevaluated", "https://json-schema.org/draft/2020-12/schema");
schema_const!(DRAFT202012_VALIDATION, "https://json-schema.org/draft/2020-12/meta/validation", "https://json-schema.org/draft/2020-12/schema");
schema_const!(DRAFT202012_META_DATA, "https://json-schema.org/draft/2020-12/meta/meta-data", "https://json-schema.org/draft/2020-12/schema");
schema_const!(DRAFT202012_FORMAT_ANNOTATION, "https://json-schema.org/draft/2020-12/meta/format-annotation", "https://json-schema.org/draft/2020-12/schema");
schema_const!(DRAFT202012_CONTENT, "https://json-schema.org/draft/2020-12/meta/content", "https://json-schema.org/draft/2020-12/schema");

/// The rolling next draft. It tracks the 2020-12 dialect until new keywords (e.g.
/// object-aware `contains`) are folded into a numbered release.
schema_const!(pub DRAFT_NEXT, "https://json-schema.org/draft/next/schema", "https://json-schema.org/draft/next/schema");

pub(crate) static META_SCHEMAS: Lazy<[(&'static str, &'static Value); 19]> = Lazy::new(|| {
    [
        ("http://json-schema.org/draft-04/schema#", &*DRAFT4),
        ("http://json-schema.org/draft-06/schema#", &*DRAFT6),
        ("http://json-schema.org/draft-07/schema#", &*DRAFT7),
        (
            "https://json-schema.org/draft/2019-09/schema",
            &*DRAFT201909,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/applicator",
            &*DRAFT201909_APPLICATOR,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/content",
            &*DRAFT201909_CONTENT,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/core",
            &*DRAFT201909_CORE,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/format",
            &*DRAFT201909_FORMAT,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/meta-data",
            &*DRAFT201909_META_DATA,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/validation",
            &*DRAFT201909_VALIDATION,
        ),
        (
            "https://json-schema.org/draft/2020-12/schema",
            &*DRAFT202012,
        ),
        (
            "https://json-schema.org/draft/2020-12/meta/core",
            &*DRAFT202012_CORE,
        ),
        (
            "https://json-schema.org/draft/2020-12/meta/applicator",
            &*DRAFT202012_APPLICATOR,
        ),
        (
            "https://json-schema.org/draft/2020-12/meta/unevaluated",
            &*DRAFT202012_UNEVALUATED,
        ),
        (
            "https://json-schema.org/draft/2020-12/meta/validation",
            &*DRAFT202012_VALIDATION,
        ),
        (
            "https://json-schema.org/draft/2020-12/meta/meta-data",
            &*DRAFT202012_META_DATA,
        ),
        (
            "https://json-schema.org/draft/2020-12/meta/format-annotation",
            &*DRAFT202012_FORMAT_ANNOTATION,
        ),
        (
            "https://json-schema.org/draft/2020-12/meta/content",
            &*DRAFT202012_CONTENT,
        ),
        ("https://json-schema.org/draft/next/schema", &*DRAFT_NEXT),
    ]
});
