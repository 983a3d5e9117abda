use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ListTypeAnnotation;
use crate::types::TypeAnnotation;

/// The structural shape of an input position once its non-null wrapper has
/// been peeled away.
///
/// Every place that needs to know "what kind of value lives here" (argument
/// dispatch, input-field recursion, list item dispatch, value coercion)
/// resolves it through [`InputShape::resolve()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputShape<'a> {
    InputObject(&'a InputObjectType),
    /// A scalar (built-in or custom) or enum.
    Leaf(&'a GraphQLType),
    List(&'a ListTypeAnnotation),
}
impl<'a> InputShape<'a> {
    /// Returns `None` when the annotation names a type that is missing from
    /// the [`Schema`] or that is not an input type.
    pub fn resolve(
        schema: &'a Schema,
        type_annot: &'a TypeAnnotation,
    ) -> Option<Self> {
        match type_annot {
            TypeAnnotation::List(list_annot) =>
                Some(Self::List(list_annot)),

            TypeAnnotation::Named(named_annot) =>
                match named_annot.graphql_type(schema)? {
                    GraphQLType::InputObject(input_obj_type) =>
                        Some(Self::InputObject(input_obj_type)),
                    leaf_type if leaf_type.is_leaf() =>
                        Some(Self::Leaf(leaf_type)),
                    _ => None,
                },
        }
    }
}
