use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);
impl ObjectType {
    /// The [`FilePosition`](loc::FilePosition) indicating where this
    /// [`ObjectType`] was defined in the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.0.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.0.directives
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`] in the schema.
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields defined on the [`ObjectType`] in
    /// the schema.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    /// The names of all interfaces implemented by this [`ObjectType`].
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interfaces.iter().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::ObjectType,
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
