//! Directive-driven validation of the input values flowing into a GraphQL
//! operation.
//!
//! A [`Schema`](schema::Schema) annotates arguments and input fields with
//! directives such as `@range(max: 10)`. An
//! [`InputValidator`](validation::InputValidator) maps directive names to
//! [`InputValidationRule`](validation::InputValidationRule)s and, given an
//! [`ExecutableDocument`](operation::ExecutableDocument) plus the request's
//! variables, reports every value that breaks one of those rules as a
//! positioned [`ValidationError`](validation::ValidationError).

pub mod ast;
mod file_reader;
pub mod loc;
pub mod operation;
pub mod rules;
pub mod schema;
pub mod types;
pub mod validation;
pub mod value;

pub use file_reader::ReadContentError;
pub use validation::InputValidationRule;
pub use validation::InputValidator;
pub use validation::ValidationError;
pub use validation::ValidationReport;
pub use value::VariableValues;
