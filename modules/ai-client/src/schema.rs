use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Trait for types that can be used as a Gemini response schema.
///
/// Automatically implemented for any type that implements
/// `JsonSchema + DeserializeOwned`.
pub trait ResponseSchema: JsonSchema + DeserializeOwned {
    /// Generate a Gemini-compatible JSON schema for this type.
    ///
    /// Gemini accepts an OpenAPI-style subset:
    /// 1. No `$ref` references — everything must be inlined
    /// 2. No `additionalProperties`
    /// 3. No `format` annotations on strings
    fn gemini_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        let definitions = value.get("definitions").cloned();
        sanitize(&mut value, definitions.as_ref());

        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
            map.remove("title");
        }

        value
    }

    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> ResponseSchema for T {}

/// Recursively inline `$ref`s, unwrap singleton `allOf` wrappers, and drop
/// keys the Gemini schema validator rejects.
fn sanitize(value: &mut serde_json::Value, definitions: Option<&serde_json::Value>) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(name) = ref_path.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.and_then(|d| d.get(name)) {
                        *value = def.clone();
                        sanitize(value, definitions);
                        return;
                    }
                }
            }

            if let Some(serde_json::Value::Array(all_of)) = map.get("allOf").cloned() {
                if all_of.len() == 1 {
                    *value = all_of.into_iter().next().unwrap();
                    sanitize(value, definitions);
                    return;
                }
            }

            map.remove("additionalProperties");
            map.remove("format");

            for (_, v) in map.iter_mut() {
                sanitize(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                sanitize(item, definitions);
            }
        }
        _ => {}
    }
}
