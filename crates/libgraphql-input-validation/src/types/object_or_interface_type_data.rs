use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use indexmap::IndexMap;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn from_ast_parts(
        file_path: Option<&Path>,
        position: graphql_parser::Pos,
        name: &str,
        interfaces: &[String],
        directives: &[crate::ast::query::Directive],
        fields: &[crate::ast::schema::Field],
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, position),
            directives: DirectiveAnnotation::from_ast(file_path, directives),
            fields: Field::map_from_ast(file_path, fields),
            interfaces: interfaces.to_vec(),
            name: name.to_string(),
        }
    }
}
