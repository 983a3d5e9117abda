use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputShape;
use crate::types::TypeAnnotation;
use crate::value::value_from_ast;
use crate::value::VariableValues;
use serde_json::Value;
use thiserror::Error;

/// Coerce the raw variable bindings supplied with a request against an
/// operation's variable definitions, following GraphQL's
/// [CoerceVariableValues()](https://spec.graphql.org/October2021/#CoerceVariableValues()).
///
/// Only variables declared by the operation end up in the returned map.
/// Declared defaults are applied for variables that were not supplied.
pub fn coerce_variable_values(
    schema: &Schema,
    variable_definitions: &[ast::query::VariableDefinition],
    raw_values: &VariableValues,
) -> Result<VariableValues, Vec<VariableCoercionError>> {
    let mut coerced = VariableValues::new();
    let mut errors = vec![];

    for var_def in variable_definitions {
        let var_name = var_def.name.as_str();
        let ref_location = loc::FilePosition::from_pos(
            None::<&std::path::Path>,
            var_def.position,
        );
        let type_annot = TypeAnnotation::from_ast_type(&ref_location, &var_def.var_type);

        let is_input_type =
            type_annot.innermost_named_type_annotation()
                .graphql_type(schema)
                .is_some_and(|type_| type_.is_input_type());
        if !is_input_type {
            errors.push(VariableCoercionError::NonInputType {
                position: var_def.position,
                type_annotation: type_annot.to_string(),
                variable_name: var_name.to_string(),
            });
            continue;
        }

        let Some(raw_value) = raw_values.get(var_name) else {
            if let Some(default_value) = &var_def.default_value {
                let default_value = value_from_ast(
                    schema,
                    default_value,
                    &type_annot,
                    &VariableValues::new(),
                );
                if let Some(default_value) = default_value {
                    coerced.insert(var_name.to_string(), default_value);
                }
            } else if !type_annot.nullable() {
                errors.push(VariableCoercionError::MissingNonNullVariable {
                    position: var_def.position,
                    type_annotation: type_annot.to_string(),
                    variable_name: var_name.to_string(),
                });
            }
            continue;
        };

        let mut coercer = InputCoercer {
            errors: vec![],
            path: vec![],
            position: var_def.position,
            schema,
            variable_name: var_name,
        };
        let coerced_value = coercer.coerce(raw_value, &type_annot);
        if coercer.errors.is_empty() {
            coerced.insert(var_name.to_string(), coerced_value);
        } else {
            errors.append(&mut coercer.errors);
        }
    }

    if errors.is_empty() {
        tracing::trace!(num_variables = coerced.len(), "coerced variables");
        Ok(coerced)
    } else {
        tracing::debug!(num_errors = errors.len(), "variable coercion failed");
        Err(errors)
    }
}

struct InputCoercer<'a> {
    errors: Vec<VariableCoercionError>,
    path: Vec<String>,
    position: ast::Pos,
    schema: &'a Schema,
    variable_name: &'a str,
}
impl<'a> InputCoercer<'a> {
    fn coerce(&mut self, value: &Value, type_annot: &TypeAnnotation) -> Value {
        if value.is_null() {
            if !type_annot.nullable() {
                self.report(value, type_annot, "non-null value expected".to_string());
            }
            return Value::Null;
        }

        let Some(shape) = InputShape::resolve(self.schema, type_annot) else {
            self.report(value, type_annot, "not an input type".to_string());
            return Value::Null;
        };

        match shape {
            InputShape::List(list_annot) => {
                let item_annot = list_annot.inner_type_annotation();
                let Value::Array(items) = value else {
                    return Value::Array(vec![self.coerce(value, item_annot)]);
                };

                let mut coerced_items = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    self.path.push(idx.to_string());
                    coerced_items.push(self.coerce(item, item_annot));
                    self.path.pop();
                }
                Value::Array(coerced_items)
            },

            InputShape::InputObject(input_obj_type) =>
                self.coerce_input_object(value, type_annot, input_obj_type),

            InputShape::Leaf(leaf_type) =>
                match coerce_leaf(leaf_type, value) {
                    Ok(coerced) => coerced,
                    Err(reason) => {
                        self.report(value, type_annot, reason);
                        Value::Null
                    },
                },
        }
    }

    fn coerce_input_object(
        &mut self,
        value: &Value,
        type_annot: &TypeAnnotation,
        input_obj_type: &InputObjectType,
    ) -> Value {
        let Value::Object(fields) = value else {
            self.report(value, type_annot, format!(
                "expected an object for input type `{}`",
                input_obj_type.name(),
            ));
            return Value::Null;
        };

        for field_name in fields.keys() {
            if !input_obj_type.fields().contains_key(field_name.as_str()) {
                self.report(value, type_annot, format!(
                    "field `{field_name}` is not defined by input type `{}`",
                    input_obj_type.name(),
                ));
            }
        }

        let mut coerced_fields = serde_json::Map::new();
        for (field_name, field_def) in input_obj_type.fields() {
            let field_annot = field_def.type_annotation();
            let Some(field_value) = fields.get(field_name.as_str()) else {
                let default_value = field_def.default_value().and_then(|default_value| {
                    value_from_ast(
                        self.schema,
                        default_value,
                        field_annot,
                        &VariableValues::new(),
                    )
                });
                if let Some(default_value) = default_value {
                    coerced_fields.insert(field_name.to_string(), default_value);
                } else if !field_annot.nullable() {
                    self.report(value, type_annot, format!(
                        "field `{field_name}` of required type `{field_annot}` was not provided",
                    ));
                }
                continue;
            };

            self.path.push(field_name.to_string());
            let coerced = self.coerce(field_value, field_annot);
            self.path.pop();
            coerced_fields.insert(field_name.to_string(), coerced);
        }
        Value::Object(coerced_fields)
    }

    fn report(&mut self, value: &Value, type_annot: &TypeAnnotation, reason: String) {
        self.errors.push(VariableCoercionError::InvalidValue {
            path: self.path.clone(),
            position: self.position,
            reason,
            type_annotation: type_annot.to_string(),
            value: value.clone(),
            variable_name: self.variable_name.to_string(),
        });
    }
}

fn coerce_leaf(leaf_type: &GraphQLType, value: &Value) -> Result<Value, String> {
    match leaf_type {
        GraphQLType::Bool => value.as_bool()
            .map(Value::Bool)
            .ok_or_else(|| "Boolean cannot represent a non-boolean value".to_string()),

        GraphQLType::Enum(enum_type) => match value.as_str() {
            Some(name) if enum_type.has_value(name) => Ok(value.clone()),
            _ => Err(format!(
                "value is not a member of enum `{}`",
                enum_type.name(),
            )),
        },

        GraphQLType::Float => match value {
            Value::Number(_) => Ok(value.clone()),
            _ => Err("Float cannot represent a non-numeric value".to_string()),
        },

        GraphQLType::ID => match value {
            Value::String(_) => Ok(value.clone()),
            Value::Number(num) if num.is_i64() || num.is_u64() =>
                Ok(Value::String(num.to_string())),
            _ => Err("ID cannot represent a value that is not a string or integer".to_string()),
        },

        GraphQLType::Int => coerce_int(value)
            .ok_or_else(|| "Int cannot represent a non 32-bit signed integer value".to_string()),

        GraphQLType::Scalar(_) => Ok(value.clone()),

        GraphQLType::String => match value {
            Value::String(_) => Ok(value.clone()),
            _ => Err("String cannot represent a non-string value".to_string()),
        },

        GraphQLType::InputObject(_)
            | GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) =>
            Err(format!("`{}` is not a leaf type", leaf_type.name())),
    }
}

fn coerce_int(value: &Value) -> Option<Value> {
    let Value::Number(num) = value else {
        return None;
    };

    let int = match num.as_i64() {
        Some(int) => int,
        None => {
            let float = num.as_f64()?;
            if float.fract() != 0.0 {
                return None;
            }
            float as i64
        },
    };

    i32::try_from(int).ok().map(Value::from)
}

/// A variable binding that could not be coerced to its declared type.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariableCoercionError {
    #[error(
        "Variable `${variable_name}` got invalid value `{value}` at {path:?} for \
        type `{type_annotation}`: {reason}"
    )]
    InvalidValue {
        path: Vec<String>,
        position: ast::Pos,
        reason: String,
        type_annotation: String,
        value: Value,
        variable_name: String,
    },

    #[error("Variable `${variable_name}` of required type `{type_annotation}` was not provided")]
    MissingNonNullVariable {
        position: ast::Pos,
        type_annotation: String,
        variable_name: String,
    },

    #[error("Variable `${variable_name}` cannot be of non-input type `{type_annotation}`")]
    NonInputType {
        position: ast::Pos,
        type_annotation: String,
        variable_name: String,
    },
}
impl VariableCoercionError {
    pub fn variable_name(&self) -> &str {
        match self {
            Self::InvalidValue { variable_name, .. }
                | Self::MissingNonNullVariable { variable_name, .. }
                | Self::NonInputType { variable_name, .. } =>
                variable_name.as_str(),
        }
    }
}
