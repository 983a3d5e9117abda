use crate::validation::InputValidationRule;
use crate::validation::RuleRegistry;
use serde_json::json;

#[test]
fn empty_registry() {
    let registry = RuleRegistry::default();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.resolve("range").is_none());
}

#[test]
fn resolves_registered_names() {
    let registry = RuleRegistry::new([
        ("items", InputValidationRule::Items),
        ("range", InputValidationRule::Range),
    ]);

    assert_eq!(registry.len(), 2);
    assert!(matches!(registry.resolve("range"), Some(InputValidationRule::Range)));
    assert!(matches!(registry.resolve("items"), Some(InputValidationRule::Items)));
    assert!(registry.resolve("@range").is_none());
    assert!(registry.resolve("length").is_none());

    let mut names = registry.directive_names().collect::<Vec<_>>();
    names.sort();
    assert_eq!(names, vec!["items", "range"]);
}

#[test]
fn last_registration_wins() {
    let registry = RuleRegistry::new([
        ("limit", InputValidationRule::Range),
        ("limit", InputValidationRule::Length),
    ]);

    assert_eq!(registry.len(), 1);
    let rule = registry.resolve("limit").unwrap();
    assert!(matches!(rule, InputValidationRule::Length));

    let args = [("max".to_string(), json!(1))].into_iter().collect();
    assert!(rule.check(Some(&json!("ab")), &args, None).is_some());
}
