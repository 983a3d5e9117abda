
use crate::validation::DirectiveArgs;
use serde_json::Value;

/// Build a [`DirectiveArgs`] map from a JSON object literal.
fn args(value: Value) -> DirectiveArgs {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        other => panic!("expected an object, got {other}"),
    }
}
