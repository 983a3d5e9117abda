use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use std::path::Path;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) values: Vec<EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn has_value(&self, name: &str) -> bool {
        self.values.iter().any(|value| value.name == name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &Vec<EnumValue> {
        &self.values
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::EnumType,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            name: def.name.to_string(),
            values: EnumValue::vec_from_ast(file_path, &def.values),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn vec_from_ast(
        file_path: Option<&Path>,
        values: &[graphql_parser::schema::EnumValue<'static, String>],
    ) -> Vec<Self> {
        values.iter().map(|value| Self {
            def_location: loc::FilePosition::from_pos(file_path, value.position),
            name: value.name.to_string(),
        }).collect()
    }
}
