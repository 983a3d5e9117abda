use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::DirectiveAnnotation;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVES_SDL: &str = r#"
directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @deprecated(
  reason: String = "No longer supported"
) on FIELD_DEFINITION | ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION | ENUM_VALUE
directive @specifiedBy(url: String!) on SCALAR
"#;

const BUILTIN_TYPE_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

#[derive(Clone, Debug, PartialEq)]
struct NamedTypeDefLocation {
    def_location: loc::FilePosition,
    type_name: String,
}

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// Type extensions are collected while loading and applied during
/// [`SchemaBuilder::build()`], so an `extend` may appear before (or in a
/// different file than) the definition it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: HashMap<String, DirectiveDefinition>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    schema_def_location: Option<loc::FilePosition>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(file_path.as_path(), ext)?;
        }
        self.inject_missing_builtin_directives()?;

        let query_type = Self::resolve_root_type(
            &self.types,
            OperationKind::Query,
            self.query_type.take(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = Self::resolve_root_type(
            &self.types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;
        let subscription_type = Self::resolve_root_type(
            &self.types,
            OperationKind::Subscription,
            self.subscription_type.take(),
        )?;

        tracing::debug!(
            num_types = self.types.len(),
            num_directives = self.directive_defs.len(),
            "built schema",
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        let types =
            BUILTIN_TYPE_NAMES
                .iter()
                .filter_map(|name| {
                    GraphQLType::builtin(name).map(|type_| (name.to_string(), type_))
                })
                .collect();

        Self {
            directive_defs: HashMap::new(),
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            schema_def_location: None,
            str_load_counter: 0,
            subscription_type: None,
            types,
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let mut ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();
        relocate_described_input_values(&mut ast_doc, content);

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use graphql_parser::schema::TypeExtension;

        let file_path = Some(file_path);
        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Object(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Union(ext) => (ext.name.as_str(), ext.position),
        };
        let location = loc::FilePosition::from_pos(file_path, position);
        let type_name = type_name.to_string();

        let Some(type_) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                location,
                type_name,
            });
        };

        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                enum_type.directives.extend(
                    DirectiveAnnotation::from_ast(file_path, &ext.directives),
                );
                enum_type.values.extend(
                    EnumValue::vec_from_ast(file_path, &ext.values),
                );
            },

            (GraphQLType::InputObject(input_obj_type), TypeExtension::InputObject(ext)) => {
                input_obj_type.directives.extend(
                    DirectiveAnnotation::from_ast(file_path, &ext.directives),
                );
                extend_unique(
                    &mut input_obj_type.fields,
                    InputValue::map_from_ast(file_path, &ext.fields),
                    &type_name,
                )?;
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                iface_type.0.directives.extend(
                    DirectiveAnnotation::from_ast(file_path, &ext.directives),
                );
                extend_unique(
                    &mut iface_type.0.fields,
                    Field::map_from_ast(file_path, &ext.fields),
                    &type_name,
                )?;
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                obj_type.0.directives.extend(
                    DirectiveAnnotation::from_ast(file_path, &ext.directives),
                );
                obj_type.0.interfaces.extend(ext.implements_interfaces);
                extend_unique(
                    &mut obj_type.0.fields,
                    Field::map_from_ast(file_path, &ext.fields),
                    &type_name,
                )?;
            },

            (GraphQLType::Scalar(scalar_type), TypeExtension::Scalar(ext)) => {
                scalar_type.directives.extend(
                    DirectiveAnnotation::from_ast(file_path, &ext.directives),
                );
            },

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                union_type.directives.extend(
                    DirectiveAnnotation::from_ast(file_path, &ext.directives),
                );
                union_type.members.extend(ext.types);
            },

            (type_, _) => return Err(SchemaBuildError::InvalidExtensionType {
                location,
                schema_type_name: type_.name().to_string(),
            }),
        }

        Ok(())
    }

    fn inject_missing_builtin_directives(&mut self) -> Result<()> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(BUILTIN_DIRECTIVES_SDL)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: PathBuf::from("builtin://directives"),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            if let ast::schema::Definition::DirectiveDefinition(def) = def
                && !self.directive_defs.contains_key(def.name.as_str()) {
                self.directive_defs.insert(
                    def.name.to_string(),
                    DirectiveDefinition::from_ast(
                        None,
                        &def,
                        loc::SchemaDefLocation::GraphQLBuiltIn,
                    ),
                );
            }
        }

        Ok(())
    }

    fn resolve_root_type(
        types: &HashMap<String, GraphQLType>,
        kind: OperationKind,
        explicit: Option<NamedTypeDefLocation>,
    ) -> Result<Option<String>> {
        let Some(explicit) = explicit else {
            let default_name = kind.default_root_type_name();
            return Ok(match types.get(default_name) {
                Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                _ => None,
            });
        };

        match types.get(explicit.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(explicit.type_name)),
            Some(_) => Err(SchemaBuildError::NonObjectRootOperationType {
                location: explicit.def_location,
                operation: kind,
                type_name: explicit.type_name,
            }),
            None => Err(SchemaBuildError::UndefinedRootOperationType {
                location: explicit.def_location,
                operation: kind,
                type_name: explicit.type_name,
            }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            Some(file_path),
            def.position,
        );

        if let Some(existing_def) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_string(),
                def1: existing_def.def_location().clone(),
                def2: file_position,
            });
        }

        if is_builtin_directive_name(def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name.to_string(),
                location: file_position,
            });
        }

        self.directive_defs.insert(
            def.name.to_string(),
            DirectiveDefinition::from_ast(
                Some(file_path),
                &def,
                file_position.into(),
            ),
        );

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(
            Some(file_path),
            schema_def.position,
        );

        if let Some(existing_location) = &self.schema_def_location {
            return Err(SchemaBuildError::DuplicateSchemaDefinition {
                def1: existing_location.clone(),
                def2: def_location,
            });
        }

        let root_type = |type_name: Option<String>| {
            type_name.map(|type_name| NamedTypeDefLocation {
                def_location: def_location.clone(),
                type_name,
            })
        };
        self.query_type = root_type(schema_def.query);
        self.mutation_type = root_type(schema_def.mutation);
        self.subscription_type = root_type(schema_def.subscription);
        self.schema_def_location = Some(def_location);

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use graphql_parser::schema::TypeDefinition;

        let file_path = Some(file_path);
        let type_ = match &type_def {
            TypeDefinition::Enum(def) =>
                GraphQLType::Enum(EnumType::from_ast(file_path, def)),
            TypeDefinition::InputObject(def) =>
                GraphQLType::InputObject(InputObjectType::from_ast(file_path, def)),
            TypeDefinition::Interface(def) =>
                GraphQLType::Interface(InterfaceType::from_ast(file_path, def)),
            TypeDefinition::Object(def) =>
                GraphQLType::Object(ObjectType::from_ast(file_path, def)),
            TypeDefinition::Scalar(def) =>
                GraphQLType::Scalar(ScalarType::from_ast(file_path, def)),
            TypeDefinition::Union(def) =>
                GraphQLType::Union(UnionType::from_ast(file_path, def)),
        };
        let type_name = type_.name().to_string();

        if BUILTIN_TYPE_NAMES.contains(&type_name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinType {
                location: type_.def_location(),
                type_name,
            });
        }

        if let Some(existing_type) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: existing_type.def_location(),
                def2: type_.def_location(),
            });
        }

        self.types.insert(type_name, type_);
        Ok(())
    }
}
/// `graphql_parser` positions a described input value at its description.
/// Move those positions onto the input value's name.
fn relocate_described_input_values(ast_doc: &mut ast::schema::Document, source: &str) {
    use graphql_parser::schema::Definition;
    use graphql_parser::schema::TypeDefinition;
    use graphql_parser::schema::TypeExtension;

    fn relocate(source: &str, input_values: &mut [ast::schema::InputValue]) {
        for input_value in input_values {
            if input_value.description.is_some() {
                input_value.position = loc::skip_description(source, input_value.position);
            }
        }
    }

    for def in &mut ast_doc.definitions {
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                relocate(source, &mut directive_def.arguments),

            Definition::TypeDefinition(TypeDefinition::InputObject(input_obj)) =>
                relocate(source, &mut input_obj.fields),

            Definition::TypeDefinition(TypeDefinition::Interface(iface)) =>
                for field in &mut iface.fields {
                    relocate(source, &mut field.arguments);
                },

            Definition::TypeDefinition(TypeDefinition::Object(obj)) =>
                for field in &mut obj.fields {
                    relocate(source, &mut field.arguments);
                },

            Definition::TypeExtension(TypeExtension::InputObject(ext)) =>
                relocate(source, &mut ext.fields),

            Definition::TypeExtension(TypeExtension::Interface(ext)) =>
                for field in &mut ext.fields {
                    relocate(source, &mut field.arguments);
                },

            Definition::TypeExtension(TypeExtension::Object(ext)) =>
                for field in &mut ext.fields {
                    relocate(source, &mut field.arguments);
                },

            _ => (),
        }
    }
}

impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extend_unique<T: HasDefLocation>(
    existing: &mut IndexMap<String, T>,
    additions: IndexMap<String, T>,
    type_name: &str,
) -> Result<()> {
    for (field_name, field) in additions {
        if let Some(existing_field) = existing.get(field_name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name,
                field_def1: existing_field.field_def_location().clone(),
                field_def2: field.field_def_location().clone(),
            });
        }
        existing.insert(field_name, field);
    }
    Ok(())
}

fn is_builtin_directive_name(name: &str) -> bool {
    matches!(name, "deprecated" | "include" | "skip" | "specifiedBy")
}

trait HasDefLocation {
    fn field_def_location(&self) -> &loc::FilePosition;
}
impl HasDefLocation for Field {
    fn field_def_location(&self) -> &loc::FilePosition {
        self.def_location()
    }
}
impl HasDefLocation for InputValue {
    fn field_def_location(&self) -> &loc::FilePosition {
        self.def_location()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::FilePosition,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::FilePosition,
        field_def2: loc::FilePosition,
    },

    #[error("Multiple `schema` definitions were found ({def1} and {def2})")]
    DuplicateSchemaDefinition {
        def1: loc::FilePosition,
        def2: loc::FilePosition,
    },

    #[error("Multiple GraphQL types with the same name were defined: `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend a type that is not defined elsewhere: `{type_name}`")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: loc::FilePosition,
    },

    #[error("Attempted to extend `{schema_type_name}` with an extension of a different kind of type")]
    InvalidExtensionType {
        schema_type_name: String,
        location: loc::FilePosition,
    },

    #[error("No query type was defined in the schema")]
    NoQueryOperationTypeDefined,

    #[error("The {operation:?} root operation type `{type_name}` is not an object type")]
    NonObjectRootOperationType {
        location: loc::FilePosition,
        operation: OperationKind,
        type_name: String,
    },

    #[error("Error parsing schema string: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine a builtin directive: `@{directive_name}`")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::FilePosition,
    },

    #[error("Attempted to redefine a builtin type: `{type_name}`")]
    RedefinitionOfBuiltinType {
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Error loading schema file: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("The {operation:?} root operation type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        location: loc::FilePosition,
        operation: OperationKind,
        type_name: String,
    },
}
