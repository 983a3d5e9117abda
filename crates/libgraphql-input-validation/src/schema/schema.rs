use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use std::collections::HashMap;

/// Represents a fully loaded and immutable GraphQL schema.
///
/// A [`Schema`] is built once (see [`SchemaBuilder`]) and then shared by
/// reference across any number of concurrent validation passes.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: HashMap<String, DirectiveDefinition>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, DirectiveDefinition>`] containing all
    /// directives defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &HashMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// This factors in any `schema { mutation: ... }` override, so prefer it
    /// over looking up a type named `"Mutation"`.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type
            .as_deref()
            .and_then(|name| self.types.get(name))
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// This factors in any `schema { query: ... }` override, so prefer it over
    /// looking up a type named `"Query"`.
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.types.get(self.query_type.as_str())
    }

    /// Returns the root operation type for the given kind of operation.
    pub fn root_operation_type(
        &self,
        kind: OperationKind,
    ) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => self.query_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type
            .as_deref()
            .and_then(|name| self.types.get(name))
    }
}
