use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use std::path::Path;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::UnionType,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            members: def.types.iter().map(|name| name.to_string()).collect(),
            name: def.name.to_string(),
        }
    }
}
