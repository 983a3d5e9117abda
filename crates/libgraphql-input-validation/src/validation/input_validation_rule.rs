use crate::rules;
use crate::rules::PredicateRule;
use crate::rules::RegexRule;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// The arguments of a directive annotation after coercion against the
/// directive's definition, keyed by parameter name in declaration order.
pub type DirectiveArgs = IndexMap<String, Value>;

/// Signature of a user-supplied rule callable.
pub type CustomRuleFn = dyn Fn(&Value, &DirectiveArgs, Option<&serde_json::Map<String, Value>>) -> Option<String>
    + Send
    + Sync;

/// A rule that can be bound to a directive name in a
/// [`RuleRegistry`](crate::validation::RuleRegistry).
///
/// Every variant passes absent values (see [`InputValidationRule::check()`]);
/// the variants themselves only ever see concrete values.
#[derive(Clone)]
pub enum InputValidationRule {
    Custom(Arc<CustomRuleFn>),
    Items,
    Length,
    Predicate(PredicateRule),
    Range,
    Regex(RegexRule),
}
impl InputValidationRule {
    /// Wrap an arbitrary closure as a rule.
    pub fn custom<F>(rule: F) -> Self
    where
        F: Fn(&Value, &DirectiveArgs, Option<&serde_json::Map<String, Value>>) -> Option<String>
            + Send
            + Sync
            + 'static,
    {
        Self::Custom(Arc::new(rule))
    }

    /// Run this rule.
    ///
    /// `value` is `None` when the input was not supplied at all, in which case
    /// the rule passes. `object` is the input object that contains `value`
    /// when it is an input-object field.
    ///
    /// Returns `None` on success and the failure message otherwise.
    pub fn check(
        &self,
        value: Option<&Value>,
        args: &DirectiveArgs,
        object: Option<&serde_json::Map<String, Value>>,
    ) -> Option<String> {
        let value = value?;
        match self {
            Self::Custom(rule) => rule(value, args, object),
            Self::Items => rules::items(value, args),
            Self::Length => rules::length(value, args),
            Self::Predicate(rule) => rule.check(value, args, object),
            Self::Range => rules::range(value, args),
            Self::Regex(rule) => rule.check(value, args),
        }
    }
}
impl std::fmt::Debug for InputValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Items => f.write_str("Items"),
            Self::Length => f.write_str("Length"),
            Self::Predicate(rule) => f.debug_tuple("Predicate").field(rule).finish(),
            Self::Range => f.write_str("Range"),
            Self::Regex(rule) => f.debug_tuple("Regex").field(rule).finish(),
        }
    }
}
impl std::convert::From<PredicateRule> for InputValidationRule {
    fn from(value: PredicateRule) -> Self {
        Self::Predicate(value)
    }
}
impl std::convert::From<RegexRule> for InputValidationRule {
    fn from(value: RegexRule) -> Self {
        Self::Regex(value)
    }
}
