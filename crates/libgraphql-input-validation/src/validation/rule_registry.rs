use crate::validation::InputValidationRule;
use std::collections::HashMap;

/// Maps directive names to the [`InputValidationRule`] each one triggers.
///
/// Built once from an ordered list of `(name, rule)` entries and read-only
/// afterwards. When a name is registered more than once, the last entry
/// wins.
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, InputValidationRule>,
}
impl RuleRegistry {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, InputValidationRule)>,
        S: Into<String>,
    {
        let mut rules = HashMap::new();
        for (name, rule) in entries {
            let name = name.into();
            if rules.insert(name.clone(), rule).is_some() {
                tracing::debug!(directive = %name, "replacing previously registered rule");
            }
        }
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// The names of all directives with a registered rule, in no particular
    /// order.
    pub fn directive_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|name| name.as_str())
    }

    /// Look up the rule bound to `directive_name` (without the leading `@`).
    pub fn resolve(&self, directive_name: &str) -> Option<&InputValidationRule> {
        self.rules.get(directive_name)
    }
}
