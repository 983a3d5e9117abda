//! The built-in rule callables that ship with the engine.
//!
//! Each rule looks only at the value it is given plus the arguments of the
//! directive annotation that triggered it, and returns `Some(message)` when
//! the value breaks the rule. Values of a type a rule does not understand
//! (e.g. a string handed to [`range()`]) always pass.

mod bounds;
mod items;
mod length;
mod predicate_rule;
mod range;
mod regex_rule;

pub use items::items;
pub use items::MAX_ARRAY_ITEMS;
pub use length::length;
pub use length::MAX_STRING_LENGTH;
pub use predicate_rule::PredicateRule;
pub use predicate_rule::DEFAULT_PREDICATE_MESSAGE;
pub use range::range;
pub use range::MAX_SAFE_INTEGER;
pub use regex_rule::RegexRule;
pub use regex_rule::DEFAULT_REGEX_MESSAGE;

#[cfg(test)]
mod tests;
