use crate::ast;
use crate::operation::OperationDefinitionRef;
use crate::schema::Schema;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputShape;
use crate::types::InputValue;
use crate::types::ListTypeAnnotation;
use crate::validation::DirectiveArgs;
use crate::validation::ErrorCollector;
use crate::validation::RuleRegistry;
use crate::validation::ValidationError;
use crate::validation::ValidationHalt;
use crate::value;
use crate::value::VariableValues;
use serde_json::Value;

type Result<T> = std::result::Result<T, ValidationHalt>;

/// Per-pass traversal state.
///
/// `path` mirrors the position of the value currently being checked. Every
/// function that pushes onto it pops before returning, on success and on a
/// halt alike.
pub(crate) struct TraversalContext<'a> {
    collector: &'a mut dyn ErrorCollector,
    path: Vec<String>,
    registry: &'a RuleRegistry,
    schema: &'a Schema,
    variables: VariableValues,
}
impl<'a> TraversalContext<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        registry: &'a RuleRegistry,
        collector: &'a mut dyn ErrorCollector,
    ) -> Self {
        Self {
            collector,
            path: vec![],
            registry,
            schema,
            variables: VariableValues::new(),
        }
    }

    pub(crate) fn visit_operation(
        &mut self,
        operation: &OperationDefinitionRef<'_>,
        raw_variables: &VariableValues,
    ) -> Result<()> {
        let root_type =
            self.schema
                .root_operation_type(operation.kind())
                .ok_or(ValidationHalt::UndefinedRootOperationType {
                    operation_kind: operation.kind(),
                    position: operation.position(),
                })?;

        self.variables = value::coerce_variable_values(
            self.schema,
            operation.variable_definitions(),
            raw_variables,
        ).map_err(|errors| ValidationHalt::VariableCoercion {
            errors,
            operation_name: operation.name().map(str::to_string),
        })?;

        tracing::trace!(
            operation_kind = %operation.kind(),
            operation_name = operation.name(),
            "visiting operation",
        );
        self.path.clear();
        self.visit_selection_set(root_type, operation.selection_set())
    }

    fn visit_selection_set(
        &mut self,
        parent_type: &'a GraphQLType,
        selection_set: &ast::query::SelectionSet,
    ) -> Result<()> {
        for selection in &selection_set.items {
            match selection {
                ast::query::Selection::Field(field) =>
                    self.visit_field(parent_type, field)?,

                ast::query::Selection::FragmentSpread(spread) =>
                    tracing::debug!(
                        fragment_name = spread.fragment_name.as_str(),
                        "skipping fragment spread",
                    ),

                ast::query::Selection::InlineFragment(_) =>
                    tracing::debug!("skipping inline fragment"),
            }
        }
        Ok(())
    }

    fn visit_field(
        &mut self,
        parent_type: &'a GraphQLType,
        field: &ast::query::Field,
    ) -> Result<()> {
        if field.name.starts_with("__") {
            return Ok(());
        }

        let field_def =
            parent_type.fields()
                .and_then(|fields| fields.get(field.name.as_str()))
                .ok_or_else(|| ValidationHalt::UndefinedField {
                    field_name: field.name.to_string(),
                    parent_type_name: parent_type.name().to_string(),
                    position: field.position,
                })?;

        self.path.push(field.name.to_string());
        let result = self.visit_field_contents(parent_type, field_def, field);
        self.path.pop();
        result
    }

    fn visit_field_contents(
        &mut self,
        parent_type: &'a GraphQLType,
        field_def: &'a Field,
        field: &ast::query::Field,
    ) -> Result<()> {
        for (arg_name, arg_value) in &field.arguments {
            let param =
                field_def.parameter(arg_name.as_str())
                    .ok_or_else(|| ValidationHalt::UndefinedArgument {
                        argument_name: arg_name.to_string(),
                        field_name: field.name.to_string(),
                        parent_type_name: parent_type.name().to_string(),
                        position: field.position,
                    })?;
            self.visit_argument(param, arg_value);
        }

        if field.selection_set.items.is_empty() {
            return Ok(());
        }

        let named_annot = field_def.type_annotation().innermost_named_type_annotation();
        let Some(field_type) = named_annot.graphql_type(self.schema) else {
            tracing::debug!(
                type_name = named_annot.graphql_type_name(),
                "skipping selections on a type missing from the schema",
            );
            return Ok(());
        };
        self.visit_selection_set(field_type, &field.selection_set)
    }

    fn visit_argument(&mut self, param: &'a InputValue, value_ast: &ast::query::Value) {
        let value = value::value_from_ast(
            self.schema,
            value_ast,
            param.type_annotation(),
            &self.variables,
        );
        let Some(value) = value else {
            return;
        };
        self.check_value(param, Some(&value), None);
    }

    /// Check a single input value against the rules of its directives,
    /// descending into it when it is an input object or a list.
    fn check_value(
        &mut self,
        node: &'a InputValue,
        value: Option<&Value>,
        object: Option<&serde_json::Map<String, Value>>,
    ) {
        let Some(value) = value else {
            return;
        };

        match InputShape::resolve(self.schema, node.type_annotation()) {
            None => (),

            Some(InputShape::InputObject(input_obj_type)) => {
                self.path.push(node.name().to_string());
                self.check_input_object(input_obj_type, value);
                self.path.pop();
            },

            Some(InputShape::List(list_annot)) =>
                self.check_list(list_annot, node, value),

            Some(InputShape::Leaf(_)) => {
                for annot in node.directives() {
                    let Some(rule) = self.registry.resolve(annot.name()) else {
                        continue;
                    };
                    let args = self.directive_args(annot);
                    if let Some(message) = rule.check(Some(value), &args, object) {
                        let path = self.path_with(&[node.name()]);
                        self.report(node, annot, &args, message, path);
                        break;
                    }
                }
            },
        }
    }

    fn check_input_object(&mut self, input_obj_type: &'a InputObjectType, value: &Value) {
        let Value::Object(object) = value else {
            return;
        };
        for (field_name, field_def) in input_obj_type.fields() {
            self.check_value(field_def, object.get(field_name.as_str()), Some(object));
        }
    }

    fn check_list(&mut self, list_annot: &'a ListTypeAnnotation, node: &'a InputValue, value: &Value) {
        let Value::Array(items) = value else {
            return;
        };

        match InputShape::resolve(self.schema, list_annot.inner_type_annotation()) {
            Some(InputShape::Leaf(_)) =>
                self.check_list_of_leaves(node, value, items),

            Some(InputShape::InputObject(input_obj_type)) =>
                self.check_list_of_input_objects(input_obj_type, node, value, items),

            Some(InputShape::List(_)) => tracing::debug!(
                input_value = node.name(),
                "skipping nested list",
            ),

            None => (),
        }
    }

    fn check_list_of_leaves(&mut self, node: &'a InputValue, list: &Value, items: &[Value]) {
        for annot in node.directives() {
            let Some(rule) = self.registry.resolve(annot.name()) else {
                continue;
            };
            let args = self.directive_args(annot);

            if let Some(message) = rule.check(Some(list), &args, None) {
                let path = self.path_with(&[node.name()]);
                self.report(node, annot, &args, message, path);
                return;
            }

            for (idx, item) in items.iter().enumerate() {
                if let Some(message) = rule.check(Some(item), &args, None) {
                    let path = self.path_with(&[node.name(), idx.to_string().as_str()]);
                    self.report(node, annot, &args, message, path);
                    break;
                }
            }
        }
    }

    fn check_list_of_input_objects(
        &mut self,
        input_obj_type: &'a InputObjectType,
        node: &'a InputValue,
        list: &Value,
        items: &[Value],
    ) {
        self.path.push(node.name().to_string());

        let mut list_failed = false;
        for annot in node.directives() {
            let Some(rule) = self.registry.resolve(annot.name()) else {
                continue;
            };
            let args = self.directive_args(annot);
            if let Some(message) = rule.check(Some(list), &args, None) {
                let path = self.path.clone();
                self.report(node, annot, &args, message, path);
                list_failed = true;
                break;
            }
        }

        if !list_failed {
            for (idx, item) in items.iter().enumerate() {
                self.path.push(idx.to_string());
                self.check_input_object(input_obj_type, item);
                self.path.pop();
            }
        }

        self.path.pop();
    }

    /// Coerce an annotation's literal arguments through its directive's
    /// definition, filling in declared defaults. Arguments of a directive the
    /// schema does not define are converted as-is.
    fn directive_args(&self, annot: &DirectiveAnnotation) -> DirectiveArgs {
        let no_variables = VariableValues::new();
        let Some(directive_def) = self.schema.directive(annot.name()) else {
            return annot.arguments()
                .iter()
                .filter_map(|(name, literal)| {
                    value::value_from_ast_untyped(literal, &no_variables)
                        .map(|value| (name.to_string(), value))
                })
                .collect();
        };

        let mut args = DirectiveArgs::new();
        for (param_name, param) in directive_def.parameters() {
            let literal =
                annot.arguments()
                    .get(param_name.as_str())
                    .or(param.default_value());
            let Some(literal) = literal else {
                continue;
            };
            let coerced = value::value_from_ast(
                self.schema,
                literal,
                param.type_annotation(),
                &no_variables,
            );
            if let Some(coerced) = coerced {
                args.insert(param_name.to_string(), coerced);
            }
        }
        args
    }

    fn path_with(&self, segments: &[&str]) -> Vec<String> {
        let mut path = self.path.clone();
        path.extend(segments.iter().map(|segment| segment.to_string()));
        path
    }

    fn report(
        &mut self,
        node: &InputValue,
        annot: &DirectiveAnnotation,
        args: &DirectiveArgs,
        message: String,
        path: Vec<String>,
    ) {
        tracing::trace!(
            directive = annot.name(),
            path = ?path,
            message = message.as_str(),
            "input validation failed",
        );
        self.collector.report_error(ValidationError::new(
            message,
            node.def_location(),
            path,
            annot.name(),
            args,
        ));
    }
}
