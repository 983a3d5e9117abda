use crate::ast;
use crate::operation::OperationKind;
use crate::value::VariableCoercionError;
use thiserror::Error;

/// A structural problem that ends a validation pass early.
///
/// Any [`ValidationError`](crate::validation::ValidationError)s reported
/// before the halt remain valid.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationHalt {
    #[error(
        "Argument `{argument_name}` is not defined on field \
        `{parent_type_name}.{field_name}`"
    )]
    UndefinedArgument {
        argument_name: String,
        field_name: String,
        parent_type_name: String,
        position: ast::Pos,
    },

    #[error("Field `{field_name}` is not defined on type `{parent_type_name}`")]
    UndefinedField {
        field_name: String,
        parent_type_name: String,
        position: ast::Pos,
    },

    #[error("The schema defines no root operation type for {operation_kind} operations")]
    UndefinedRootOperationType {
        operation_kind: OperationKind,
        position: ast::Pos,
    },

    #[error("The operation's variables could not be coerced: {}", format_coercion_errors(.errors))]
    VariableCoercion {
        errors: Vec<VariableCoercionError>,
        operation_name: Option<String>,
    },
}

fn format_coercion_errors(errors: &[VariableCoercionError]) -> String {
    errors.iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
