use crate::ast;
use crate::loc;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on some schema element, such as an argument or input field
/// definition.
///
/// A [`DirectiveAnnotation`] can be thought of as a "pointer" to some
/// [`DirectiveDefinition`](crate::types::DirectiveDefinition) paired with the
/// literal arguments written at the annotation site.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, ast::query::Value>,
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    /// A map from ParameterName -> literal value for all arguments passed to
    /// this [`DirectiveAnnotation`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of arguments passed to this directive
    /// annotation.
    pub fn arguments(&self) -> &IndexMap<String, ast::query::Value> {
        &self.arguments
    }

    /// Where this annotation was written in the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// The name of the directive this annotation refers to (without the
    /// leading `@`).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_annots: &[ast::query::Directive],
    ) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| {
            let arguments =
                ast_annot.arguments
                    .iter()
                    .map(|(arg_name, arg_val)| (arg_name.to_string(), arg_val.clone()))
                    .collect();

            DirectiveAnnotation {
                arguments,
                def_location: loc::FilePosition::from_pos(
                    file_path,
                    ast_annot.position,
                ),
                name: ast_annot.name.to_string(),
            }
        }).collect()
    }
}
