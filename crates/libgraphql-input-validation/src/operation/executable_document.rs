use crate::ast;
use crate::file_reader;
use crate::operation::OperationKind;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Represents a parsed GraphQL
/// ["executable document"](https://spec.graphql.org/October2021/#ExecutableDocument):
/// the operations (and fragments) a client submits in a single request.
///
/// Fragment definitions are retained in the underlying AST but are never
/// visited during input validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableDocument {
    pub(crate) ast: ast::query::Document,
    pub(crate) file_path: Option<PathBuf>,
}
impl ExecutableDocument {
    pub fn ast(&self) -> &ast::query::Document {
        &self.ast
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn load_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| DocumentBuildError::DocumentFileReadError(
                Box::new(err),
            ))?;
        let mut doc = Self::parse_str(content.as_str())?;
        doc.file_path = Some(file_path.to_path_buf());
        Ok(doc)
    }

    /// All operation definitions in this document, in document order.
    ///
    /// A shorthand selection set (`{ ... }`) is reported as a
    /// [`OperationKind::Query`].
    pub fn operations(&self) -> Vec<OperationDefinitionRef<'_>> {
        use graphql_parser::query::OperationDefinition as OpDef;

        self.ast.definitions.iter().filter_map(|def| {
            let ast::query::Definition::Operation(op_def) = def else {
                return None;
            };

            Some(match op_def {
                OpDef::Mutation(op) => OperationDefinitionRef {
                    kind: OperationKind::Mutation,
                    name: op.name.as_deref(),
                    position: op.position,
                    selection_set: &op.selection_set,
                    variable_definitions: &op.variable_definitions,
                },
                OpDef::Query(op) => OperationDefinitionRef {
                    kind: OperationKind::Query,
                    name: op.name.as_deref(),
                    position: op.position,
                    selection_set: &op.selection_set,
                    variable_definitions: &op.variable_definitions,
                },
                OpDef::SelectionSet(selection_set) => OperationDefinitionRef {
                    kind: OperationKind::Query,
                    name: None,
                    position: selection_set.span.0,
                    selection_set,
                    variable_definitions: &[],
                },
                OpDef::Subscription(op) => OperationDefinitionRef {
                    kind: OperationKind::Subscription,
                    name: op.name.as_deref(),
                    position: op.position,
                    selection_set: &op.selection_set,
                    variable_definitions: &op.variable_definitions,
                },
            })
        }).collect()
    }

    pub fn parse_str(content: impl AsRef<str>) -> Result<Self> {
        let ast = graphql_parser::query::parse_query::<String>(content.as_ref())?
            .into_static();
        Ok(Self {
            ast,
            file_path: None,
        })
    }
}

/// A borrowed view of one operation definition within an
/// [`ExecutableDocument`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperationDefinitionRef<'doc> {
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<&'doc str>,
    pub(crate) position: ast::Pos,
    pub(crate) selection_set: &'doc ast::query::SelectionSet,
    pub(crate) variable_definitions: &'doc [ast::query::VariableDefinition],
}
impl<'doc> OperationDefinitionRef<'doc> {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&'doc str> {
        self.name
    }

    pub fn position(&self) -> ast::Pos {
        self.position
    }

    pub fn selection_set(&self) -> &'doc ast::query::SelectionSet {
        self.selection_set
    }

    pub fn variable_definitions(&self) -> &'doc [ast::query::VariableDefinition] {
        self.variable_definitions
    }
}

#[derive(Debug, Error)]
pub enum DocumentBuildError {
    #[error("Failure while trying to read an executable document file from disk: {0}")]
    DocumentFileReadError(Box<file_reader::ReadContentError>),

    #[error("Error parsing executable document: {0}")]
    ParseError(Arc<ast::query::ParseError>),
}
impl std::convert::From<ast::query::ParseError> for DocumentBuildError {
    fn from(value: ast::query::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
