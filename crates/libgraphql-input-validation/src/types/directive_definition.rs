use crate::ast;
use crate::loc;
use crate::types::InputValue;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a
/// [directive definition](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
/// declared within (or built into) some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputValue>,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SchemaDefLocation::GraphQLBuiltIn
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The parameters declared by this directive, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, InputValue> {
        &self.parameters
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::DirectiveDefinition,
        def_location: loc::SchemaDefLocation,
    ) -> Self {
        Self {
            def_location,
            name: def.name.to_string(),
            parameters: InputValue::map_from_ast(file_path, &def.arguments),
            repeatable: def.repeatable,
        }
    }
}
