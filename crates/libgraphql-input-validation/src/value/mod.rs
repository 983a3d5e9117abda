//! Resolution of the concrete input values an operation supplies: the
//! request's variables and the literals written inline in the document.

mod coerce_variable_values;
mod value_from_ast;

pub use coerce_variable_values::coerce_variable_values;
pub use coerce_variable_values::VariableCoercionError;
pub use value_from_ast::value_from_ast;
pub use value_from_ast::value_from_ast_untyped;

/// Raw (or coerced) variable bindings for a single request.
pub type VariableValues = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests;
