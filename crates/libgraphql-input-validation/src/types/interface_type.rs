use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.0.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.0.directives
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`] in the schema.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interfaces.iter().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::InterfaceType,
    ) -> Self {
        Self(ObjectOrInterfaceTypeData::from_ast_parts(
            file_path,
            def.position,
            &def.name,
            &def.implements_interfaces,
            &def.directives,
            &def.fields,
        ))
    }
}
