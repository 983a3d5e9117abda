use crate::rules::bounds::message_arg;
use crate::rules::bounds::Bounds;
use crate::validation::DirectiveArgs;
use serde_json::Value;

/// The largest integer a double can represent exactly (`2^53 - 1`); the
/// default bound magnitude when a `range` message template leaves a bound
/// unset.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Checks that a number lies within the directive's inclusive `min`/`max`
/// bounds. Non-numeric values pass.
///
/// ```graphql
/// type Query {
///   page(size: Int @range(min: 1, max: 100)): [Item]
/// }
/// ```
pub fn range(value: &Value, args: &DirectiveArgs) -> Option<String> {
    let number = value.as_f64()?;
    let bounds = Bounds::from_args(args);

    if let Some(template) = message_arg(args) {
        return bounds.check_with_template(
            number,
            template,
            -MAX_SAFE_INTEGER,
            MAX_SAFE_INTEGER,
        );
    }

    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) =>
            (number < min.value() || number > max.value()).then(|| format!(
                "The value must fall within the range {} - {}.",
                min.display(),
                max.display(),
            )),

        (Some(min), None) =>
            (number < min.value()).then(|| format!(
                "Required to be greater or equal to {}.",
                min.display(),
            )),

        (None, Some(max)) =>
            (number > max.value()).then(|| format!(
                "Exceeds maximum allowed value of {}.",
                max.display(),
            )),

        (None, None) => None,
    }
}
