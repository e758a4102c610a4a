//! Minimal bundled metaschemas: enough for `$vocabulary`-driven keyword gating and for the
//! schema loader (component D) to answer `http(s)://json-schema.org/...` lookups without
//! network access. These are not full copies of the official metaschemas — they carry only
//! `$schema`, `$id`, and (for 2019-09/2020-12) `$vocabulary`, which is all the validation
//! engine consults them for.
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::vocabularies::uris;

/// `(canonical $id, bundled document)` pairs for every draft this crate understands, keyed
/// the way the loader URI patterns in the public API expect.
pub static META_SCHEMAS: Lazy<[(&'static str, Value); 5]> = Lazy::new(|| {
    [
        (
            "http://json-schema.org/draft-04/schema#",
            json!({"$schema": "http://json-schema.org/draft-04/schema#", "id": "http://json-schema.org/draft-04/schema#"}),
        ),
        (
            "http://json-schema.org/draft-06/schema#",
            json!({"$schema": "http://json-schema.org/draft-06/schema#", "$id": "http://json-schema.org/draft-06/schema#"}),
        ),
        (
            "http://json-schema.org/draft-07/schema#",
            json!({"$schema": "http://json-schema.org/draft-07/schema#", "$id": "http://json-schema.org/draft-07/schema#"}),
        ),
        (
            "https://json-schema.org/draft/2019-09/schema",
            json!({
                "$schema": "https://json-schema.org/draft/2019-09/schema",
                "$id": "https://json-schema.org/draft/2019-09/schema",
                "$vocabulary": {
                    (uris::CORE_2019): true,
                    (uris::APPLICATOR_2019): true,
                    (uris::VALIDATION_2019): true,
                    (uris::META_DATA_2019): true,
                    (uris::FORMAT_2019): false,
                    (uris::CONTENT_2019): true,
                },
            }),
        ),
        (
            "https://json-schema.org/draft/2020-12/schema",
            json!({
                "$schema": "https://json-schema.org/draft/2020-12/schema",
                "$id": "https://json-schema.org/draft/2020-12/schema",
                "$vocabulary": {
                    (uris::CORE_2020): true,
                    (uris::APPLICATOR_2020): true,
                    (uris::VALIDATION_2020): true,
                    (uris::META_DATA_2020): true,
                    (uris::FORMAT_ANNOTATION_2020): true,
                    (uris::CONTENT_2020): true,
                    (uris::UNEVALUATED_2020): true,
                },
            }),
        ),
    ]
});
