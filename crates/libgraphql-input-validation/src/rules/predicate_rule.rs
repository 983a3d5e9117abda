use crate::rules::bounds::message_arg;
use crate::validation::DirectiveArgs;
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_PREDICATE_MESSAGE: &str =
    "Required to satisfy validation predicate condition.";

type Condition = dyn Fn(&Value, Option<&serde_json::Map<String, Value>>) -> bool
    + Send
    + Sync;

/// A rule backed by an arbitrary condition over the value and, for input
/// object fields, the object that contains it.
///
/// A `message` argument on the directive annotation overrides the rule's own
/// failure message.
#[derive(Clone)]
pub struct PredicateRule {
    pub(crate) condition: Arc<Condition>,
    pub(crate) default_message: String,
}
impl PredicateRule {
    pub fn new<F>(condition: F) -> Self
    where
        F: Fn(&Value, Option<&serde_json::Map<String, Value>>) -> bool
            + Send
            + Sync
            + 'static,
    {
        Self {
            condition: Arc::new(condition),
            default_message: DEFAULT_PREDICATE_MESSAGE.to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = message.into();
        self
    }

    pub fn check(
        &self,
        value: &Value,
        args: &DirectiveArgs,
        object: Option<&serde_json::Map<String, Value>>,
    ) -> Option<String> {
        if (self.condition)(value, object) {
            return None;
        }
        Some(message_arg(args).unwrap_or(self.default_message.as_str()).to_string())
    }

    pub fn default_message(&self) -> &str {
        self.default_message.as_str()
    }
}
impl std::fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateRule")
            .field("default_message", &self.default_message)
            .finish_non_exhaustive()
    }
}
