use crate::ast;
use crate::loc;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputValue>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Look up one of this field's parameters (the arguments an operation may
    /// pass to it) by name.
    pub fn parameter(&self, name: &str) -> Option<&InputValue> {
        self.parameters.get(name)
    }

    /// The parameters defined on this field, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, InputValue> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn map_from_ast(
        file_path: Option<&Path>,
        fields: &[ast::schema::Field],
    ) -> IndexMap<String, Self> {
        fields.iter().map(|field| {
            let def_location = loc::FilePosition::from_pos(file_path, field.position);
            (field.name.to_string(), Self {
                name: field.name.to_string(),
                parameters: InputValue::map_from_ast(file_path, &field.arguments),
                type_annotation: TypeAnnotation::from_ast_type(
                    &def_location,
                    &field.field_type,
                ),
                def_location,
            })
        }).collect()
    }
}
