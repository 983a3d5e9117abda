use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputShape;
use crate::types::TypeAnnotation;
use crate::value::VariableValues;
use serde_json::Value;

/// Produce the concrete JSON value an input literal (or variable reference)
/// denotes for the given input type, following GraphQL's
/// [`valueFromAST`](https://github.com/graphql/graphql-js/blob/v15.8.0/src/utilities/valueFromAST.js)
/// semantics.
///
/// `variables` must already be coerced (see
/// [`coerce_variable_values()`](crate::value::coerce_variable_values)).
///
/// Returns `None` when the value is absent (e.g. a reference to an unbound
/// variable) or cannot be represented by `type_annot`.
pub fn value_from_ast(
    schema: &Schema,
    value_ast: &ast::query::Value,
    type_annot: &TypeAnnotation,
    variables: &VariableValues,
) -> Option<Value> {
    if let ast::query::Value::Variable(var_name) = value_ast {
        let value = variables.get(var_name.as_str())?;
        if value.is_null() && !type_annot.nullable() {
            return None;
        }
        return Some(value.clone());
    }

    if let ast::query::Value::Null = value_ast {
        return type_annot.nullable().then_some(Value::Null);
    }

    match InputShape::resolve(schema, type_annot)? {
        InputShape::List(list_annot) => {
            let item_annot = list_annot.inner_type_annotation();
            let ast::query::Value::List(items) = value_ast else {
                return value_from_ast(schema, value_ast, item_annot, variables)
                    .map(|item| Value::Array(vec![item]));
            };

            let mut coerced_items = Vec::with_capacity(items.len());
            for item in items {
                if is_unbound_variable(item, variables) {
                    if !item_annot.nullable() {
                        return None;
                    }
                    coerced_items.push(Value::Null);
                    continue;
                }
                coerced_items.push(value_from_ast(schema, item, item_annot, variables)?);
            }
            Some(Value::Array(coerced_items))
        },

        InputShape::InputObject(input_obj_type) => {
            let ast::query::Value::Object(fields_ast) = value_ast else {
                return None;
            };

            let mut coerced_fields = serde_json::Map::new();
            for (field_name, field_def) in input_obj_type.fields() {
                let field_annot = field_def.type_annotation();
                let field_ast =
                    fields_ast
                        .get(field_name.as_str())
                        .filter(|field_ast| !is_unbound_variable(field_ast, variables));

                let Some(field_ast) = field_ast else {
                    if let Some(default_value) = field_def.default_value() {
                        let default_value = value_from_ast(
                            schema,
                            default_value,
                            field_annot,
                            &VariableValues::new(),
                        )?;
                        coerced_fields.insert(field_name.to_string(), default_value);
                    } else if !field_annot.nullable() {
                        return None;
                    }
                    continue;
                };

                let field_value =
                    value_from_ast(schema, field_ast, field_annot, variables)?;
                coerced_fields.insert(field_name.to_string(), field_value);
            }
            Some(Value::Object(coerced_fields))
        },

        InputShape::Leaf(leaf_type) =>
            leaf_from_ast(leaf_type, value_ast, variables),
    }
}

/// Convert an input literal to JSON without consulting any type, as is done
/// for custom scalars and for arguments of undeclared directives.
pub fn value_from_ast_untyped(
    value_ast: &ast::query::Value,
    variables: &VariableValues,
) -> Option<Value> {
    use ast::query::Value as AstValue;
    Some(match value_ast {
        AstValue::Boolean(b) => Value::Bool(*b),
        AstValue::Enum(name) => Value::String(name.to_string()),
        AstValue::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number)?,
        AstValue::Int(num) => Value::from(num.as_i64()?),
        AstValue::List(items) =>
            Value::Array(
                items.iter()
                    .map(|item| value_from_ast_untyped(item, variables).unwrap_or(Value::Null))
                    .collect()
            ),
        AstValue::Null => Value::Null,
        AstValue::Object(fields) =>
            Value::Object(
                fields.iter()
                    .filter_map(|(name, field_ast)| {
                        value_from_ast_untyped(field_ast, variables)
                            .map(|value| (name.to_string(), value))
                    })
                    .collect()
            ),
        AstValue::String(s) => Value::String(s.to_string()),
        AstValue::Variable(var_name) => variables.get(var_name.as_str())?.clone(),
    })
}

fn is_unbound_variable(value_ast: &ast::query::Value, variables: &VariableValues) -> bool {
    matches!(
        value_ast,
        ast::query::Value::Variable(var_name) if !variables.contains_key(var_name.as_str()),
    )
}

fn leaf_from_ast(
    leaf_type: &GraphQLType,
    value_ast: &ast::query::Value,
    variables: &VariableValues,
) -> Option<Value> {
    use ast::query::Value as AstValue;
    match (leaf_type, value_ast) {
        (GraphQLType::Bool, AstValue::Boolean(b)) =>
            Some(Value::Bool(*b)),

        (GraphQLType::Enum(enum_type), AstValue::Enum(name))
            if enum_type.has_value(name.as_str()) =>
            Some(Value::String(name.to_string())),

        (GraphQLType::Float, AstValue::Float(f)) =>
            serde_json::Number::from_f64(*f).map(Value::Number),

        (GraphQLType::Float, AstValue::Int(num)) =>
            num.as_i64().map(Value::from),

        (GraphQLType::ID, AstValue::Int(num)) =>
            num.as_i64().map(|i| Value::String(i.to_string())),

        (GraphQLType::ID, AstValue::String(s)) =>
            Some(Value::String(s.to_string())),

        (GraphQLType::Int, AstValue::Int(num)) =>
            num.as_i64()
                .filter(|i| i32::try_from(*i).is_ok())
                .map(Value::from),

        (GraphQLType::Scalar(_), value_ast) =>
            value_from_ast_untyped(value_ast, variables),

        (GraphQLType::String, AstValue::String(s)) =>
            Some(Value::String(s.to_string())),

        _ => None,
    }
}
