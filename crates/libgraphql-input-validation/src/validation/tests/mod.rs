mod input_validator_tests;
mod rule_registry_tests;
