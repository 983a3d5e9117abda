use crate::rules::bounds::check_size;
use crate::rules::range::MAX_SAFE_INTEGER;
use crate::validation::DirectiveArgs;
use serde_json::Value;

/// Default upper bound for `length` when a message template leaves `max`
/// unset.
pub const MAX_STRING_LENGTH: i64 = MAX_SAFE_INTEGER;

/// Checks the length of a string, counted in Unicode scalar values, against
/// the directive's `min`/`max` bounds. Non-string values pass.
pub fn length(value: &Value, args: &DirectiveArgs) -> Option<String> {
    let Value::String(s) = value else {
        return None;
    };
    check_size(s.chars().count(), args, MAX_STRING_LENGTH, "characters")
}
