use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [input value definition](https://spec.graphql.org/October2021/#InputValueDefinition):
/// a field parameter, an input object field, or a directive parameter.
///
/// Input values are the schema nodes that carry the directive annotations
/// consulted during input validation.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) default_value: Option<ast::query::Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputValue {
    /// The [`FilePosition`](loc::FilePosition) indicating where this
    /// [`InputValue`] was defined within the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// The literal default value declared for this [`InputValue`] (if any).
    pub fn default_value(&self) -> Option<&ast::query::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`InputValue`].
    ///
    /// This list is guaranteed to be ordered the same as the order of
    /// annotations specified on the definition in the schema.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        input_value: &ast::schema::InputValue,
    ) -> Self {
        let def_location =
            loc::FilePosition::from_pos(file_path, input_value.position);

        Self {
            default_value: input_value.default_value.clone(),
            description: input_value.description.clone(),
            directives: DirectiveAnnotation::from_ast(
                file_path,
                &input_value.directives,
            ),
            name: input_value.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &input_value.value_type,
            ),
            def_location,
        }
    }

    pub(crate) fn map_from_ast(
        file_path: Option<&Path>,
        input_values: &[ast::schema::InputValue],
    ) -> IndexMap<String, Self> {
        input_values.iter().map(|input_value| (
            input_value.name.to_string(),
            Self::from_ast(file_path, input_value),
        )).collect()
    }
}
