use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use std::path::Path;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// Built-in scalars are represented by dedicated
/// [`GraphQLType`](crate::types::GraphQLType) variants instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::ScalarType,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            name: def.name.to_string(),
        }
    }
}
