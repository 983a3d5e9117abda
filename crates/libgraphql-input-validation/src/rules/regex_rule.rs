use crate::rules::bounds::message_arg;
use crate::validation::DirectiveArgs;
use regex::Regex;
use serde_json::Value;

pub const DEFAULT_REGEX_MESSAGE: &str = "Required to match validation pattern.";

/// A rule that requires string values to match a regular expression
/// somewhere within them (anchor the pattern to require a full match).
///
/// A `message` argument on the directive annotation overrides the rule's own
/// failure message.
#[derive(Clone, Debug)]
pub struct RegexRule {
    pub(crate) default_message: String,
    pub(crate) pattern: Regex,
}
impl RegexRule {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    pub fn from_regex(pattern: Regex) -> Self {
        Self {
            default_message: DEFAULT_REGEX_MESSAGE.to_string(),
            pattern,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = message.into();
        self
    }

    pub fn check(&self, value: &Value, args: &DirectiveArgs) -> Option<String> {
        let Value::String(s) = value else {
            return None;
        };
        if self.pattern.is_match(s) {
            return None;
        }
        Some(message_arg(args).unwrap_or(self.default_message.as_str()).to_string())
    }

    pub fn default_message(&self) -> &str {
        self.default_message.as_str()
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}
