use crate::validation::DirectiveArgs;
use serde_json::Value;

/// One numeric bound read from a directive's `min`/`max` argument.
///
/// Messages render whole-valued bounds without a fractional part, so a
/// `Float` argument written as `10.0` reads as `10`.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Bound {
    display: String,
    value: f64,
}
impl Bound {
    pub(super) fn from_arg(args: &DirectiveArgs, name: &str) -> Option<Self> {
        let Some(Value::Number(num)) = args.get(name) else {
            return None;
        };
        let value = num.as_f64()?;
        let display =
            if num.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 {
                format!("{value:.0}")
            } else {
                num.to_string()
            };
        Some(Self {
            display,
            value,
        })
    }

    pub(super) fn from_int(value: i64) -> Self {
        Self {
            display: value.to_string(),
            value: value as f64,
        }
    }

    pub(super) fn display(&self) -> &str {
        self.display.as_str()
    }

    pub(super) fn value(&self) -> f64 {
        self.value
    }
}

/// Both optional bounds of a `min`/`max` directive.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Bounds {
    pub(super) max: Option<Bound>,
    pub(super) min: Option<Bound>,
}
impl Bounds {
    pub(super) fn from_args(args: &DirectiveArgs) -> Self {
        Self {
            max: Bound::from_arg(args, "max"),
            min: Bound::from_arg(args, "min"),
        }
    }

    /// Check `measure` against these bounds with unset bounds replaced by the
    /// given defaults, rendering `template` on failure.
    pub(super) fn check_with_template(
        self,
        measure: f64,
        template: &str,
        default_min: i64,
        default_max: i64,
    ) -> Option<String> {
        let min = self.min.unwrap_or_else(|| Bound::from_int(default_min));
        let max = self.max.unwrap_or_else(|| Bound::from_int(default_max));
        if measure >= min.value() && measure <= max.value() {
            return None;
        }
        Some(render_template(template, min.display(), max.display()))
    }
}

/// The `message` argument of a directive annotation, if one was given.
pub(super) fn message_arg(args: &DirectiveArgs) -> Option<&str> {
    args.get("message").and_then(Value::as_str)
}

/// Substitute every `{min}` and `{max}` placeholder in `template`.
pub(super) fn render_template(template: &str, min: &str, max: &str) -> String {
    template.replace("{min}", min).replace("{max}", max)
}

/// Shared implementation of the size rules (`length` and `items`), which
/// differ only in how they measure a value and the noun in their messages.
pub(super) fn check_size(
    size: usize,
    args: &DirectiveArgs,
    default_max: i64,
    noun: &str,
) -> Option<String> {
    let size = size as f64;
    let bounds = Bounds::from_args(args);
    if let Some(template) = message_arg(args) {
        return bounds.check_with_template(size, template, 0, default_max);
    }

    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) if min.value() == max.value() =>
            (size != max.value()).then(|| format!(
                "The length must be exactly {} {noun}.",
                max.display(),
            )),

        (Some(min), Some(max)) =>
            (size < min.value() || size > max.value()).then(|| format!(
                "Required to be between {} and {} {noun} in length.",
                min.display(),
                max.display(),
            )),

        (Some(min), None) =>
            (size < min.value()).then(|| format!(
                "Required to be a minimum of {} {noun} in length.",
                min.display(),
            )),

        (None, Some(max)) =>
            (size > max.value()).then(|| format!(
                "Exceeds maximum length of {} {noun}.",
                max.display(),
            )),

        (None, None) => None,
    }
}
