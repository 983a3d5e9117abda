mod error_collector;
mod input_validation_rule;
mod input_validator;
mod rule_registry;
mod validation_error;
mod validation_halt;
mod visitor;

pub use error_collector::ErrorCollector;
pub use input_validation_rule::CustomRuleFn;
pub use input_validation_rule::DirectiveArgs;
pub use input_validation_rule::InputValidationRule;
pub use input_validator::InputValidator;
pub use input_validator::ValidationReport;
pub use rule_registry::RuleRegistry;
pub use validation_error::ErrorLocation;
pub use validation_error::ValidationError;
pub use validation_error::ValidationErrorExtensions;
pub use validation_error::INVALID_INPUT_ERROR_CODE;
pub use validation_halt::ValidationHalt;

#[cfg(test)]
mod tests;
