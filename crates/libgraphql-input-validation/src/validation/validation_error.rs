use crate::loc;
use crate::validation::DirectiveArgs;
use serde::Deserialize;
use serde::Serialize;

/// The `extensions.code` carried by every [`ValidationError`].
pub const INVALID_INPUT_ERROR_CODE: &str = "EINVAL";

/// An input value that broke the rule bound to one of its directives.
///
/// Serializes to the GraphQL error shape
/// `{message, locations, path, extensions: {code, directive, args}}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ValidationError {
    pub(crate) message: String,
    pub(crate) locations: Vec<ErrorLocation>,
    pub(crate) path: Vec<String>,
    pub(crate) extensions: ValidationErrorExtensions,
}
impl ValidationError {
    pub fn extensions(&self) -> &ValidationErrorExtensions {
        &self.extensions
    }

    /// Where the offending input value is defined in the schema.
    pub fn locations(&self) -> &Vec<ErrorLocation> {
        &self.locations
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Field names, argument/input-field names and list indices leading from
    /// the operation's root to the offending value.
    pub fn path(&self) -> &Vec<String> {
        &self.path
    }

    pub(crate) fn new(
        message: String,
        location: &loc::FilePosition,
        path: Vec<String>,
        directive: &str,
        args: &DirectiveArgs,
    ) -> Self {
        let args =
            args.iter()
                .filter(|(name, _)| name.as_str() != "message")
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect();

        Self {
            message,
            locations: vec![ErrorLocation::from(location)],
            path,
            extensions: ValidationErrorExtensions {
                code: INVALID_INPUT_ERROR_CODE.to_string(),
                directive: directive.to_string(),
                args,
            },
        }
    }
}
impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at {})", self.message, self.path.join("."))
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<&loc::FilePosition> for ErrorLocation {
    fn from(value: &loc::FilePosition) -> Self {
        Self {
            line: value.line,
            column: value.col,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ValidationErrorExtensions {
    pub code: String,
    /// Name of the directive whose rule failed (without the leading `@`).
    pub directive: String,
    /// The directive's coerced arguments, minus any `message` template.
    pub args: DirectiveArgs,
}
