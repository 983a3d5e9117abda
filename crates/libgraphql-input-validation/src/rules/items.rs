use crate::rules::bounds::check_size;
use crate::validation::DirectiveArgs;
use serde_json::Value;

/// Default upper bound for `items` when a message template leaves `max`
/// unset.
pub const MAX_ARRAY_ITEMS: i64 = (1 << 32) - 1;

/// Checks the number of items in a list against the directive's `min`/`max`
/// bounds. Non-list values pass.
pub fn items(value: &Value, args: &DirectiveArgs) -> Option<String> {
    let Value::Array(items) = value else {
        return None;
    };
    check_size(items.len(), args, MAX_ARRAY_ITEMS, "items")
}
