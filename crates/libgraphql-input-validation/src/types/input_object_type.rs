use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::InputValue;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, InputValue>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// A map from FieldName -> [`InputValue`] for all fields defined on this
    /// [`InputObjectType`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields defined in the schema. Fields
    /// added from type extensions are appended in the order the extensions
    /// were loaded.
    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::InputObjectType,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            fields: InputValue::map_from_ast(file_path, &def.fields),
            name: def.name.to_string(),
        }
    }
}
