use crate::types::TypeAnnotation;
use crate::value::tests::test_utils;
use crate::value::value_from_ast;
use crate::value::value_from_ast_untyped;
use crate::value::VariableValues;
use serde_json::json;

fn param_type<'a>(schema: &'a crate::schema::Schema, name: &str) -> &'a TypeAnnotation {
    schema.query_type().unwrap()
        .fields().unwrap()
        .get("f").unwrap()
        .parameter(name).unwrap()
        .type_annotation()
}

#[test]
fn literal_scalars() {
    let schema = test_utils::schema();
    let vars = VariableValues::new();

    let cases = [
        ("{ f(int: 3) }", "int", Some(json!(3))),
        ("{ f(int: 3.5) }", "int", None),
        ("{ f(flt: 3) }", "flt", Some(json!(3))),
        ("{ f(s: \"x\") }", "s", Some(json!("x"))),
        ("{ f(s: 1) }", "s", None),
        ("{ f(id: 9) }", "id", Some(json!("9"))),
        ("{ f(b: false) }", "b", Some(json!(false))),
        ("{ f(c: RED) }", "c", Some(json!("RED"))),
        ("{ f(c: BLUE) }", "c", None),
        ("{ f(int: null) }", "int", Some(json!(null))),
        ("{ f(req: null) }", "req", None),
        ("{ f(json: {a: [1, \"b\"]}) }", "json", Some(json!({"a": [1, "b"]}))),
    ];

    for (query, param, expected) in cases {
        let literal = test_utils::first_argument(query);
        let value = value_from_ast(&schema, &literal, param_type(&schema, param), &vars);
        assert_eq!(value, expected, "{query}");
    }
}

#[test]
fn variables_are_resolved() {
    let schema = test_utils::schema();
    let mut vars = VariableValues::new();
    vars.insert("v".to_string(), json!(100));

    let literal = test_utils::first_argument("query($v: Int) { f(int: $v) }");
    assert_eq!(
        value_from_ast(&schema, &literal, param_type(&schema, "int"), &vars),
        Some(json!(100)),
    );

    let literal = test_utils::first_argument("query($w: Int) { f(int: $w) }");
    assert_eq!(
        value_from_ast(&schema, &literal, param_type(&schema, "int"), &vars),
        None,
    );
}

#[test]
fn lists() {
    let schema = test_utils::schema();
    let mut vars = VariableValues::new();
    vars.insert("v".to_string(), json!(2));

    let literal = test_utils::first_argument("query($v: Int) { f(ints: [1, $v, 3]) }");
    assert_eq!(
        value_from_ast(&schema, &literal, param_type(&schema, "ints"), &vars),
        Some(json!([1, 2, 3])),
    );

    let literal = test_utils::first_argument("{ f(ints: 4) }");
    assert_eq!(
        value_from_ast(&schema, &literal, param_type(&schema, "ints"), &vars),
        Some(json!([4])),
    );

    let literal = test_utils::first_argument("query($x: Int) { f(ints: [1, $x]) }");
    assert_eq!(
        value_from_ast(&schema, &literal, param_type(&schema, "ints"), &vars),
        None,
    );
}

#[test]
fn input_objects() {
    let schema = test_utils::schema();
    let vars = VariableValues::new();

    let literal = test_utils::first_argument("{ f(filter: {name: \"n\", inner: {value: 5}}) }");
    assert_eq!(
        value_from_ast(&schema, &literal, param_type(&schema, "filter"), &vars),
        Some(json!({"name": "n", "limit": 10, "inner": {"value": 5}})),
    );

    let literal = test_utils::first_argument("{ f(filter: {inner: {}}) }");
    assert_eq!(
        value_from_ast(&schema, &literal, param_type(&schema, "filter"), &vars),
        None,
    );

    let literal = test_utils::first_argument("{ f(filter: 3) }");
    assert_eq!(
        value_from_ast(&schema, &literal, param_type(&schema, "filter"), &vars),
        None,
    );
}

#[test]
fn untyped_conversion() {
    let mut vars = VariableValues::new();
    vars.insert("v".to_string(), json!("bound"));

    let literal = test_utils::first_argument(
        "query($v: String) { f(x: {a: 1, b: [true, null, ENUM], c: $v, d: 1.5}) }",
    );
    assert_eq!(
        value_from_ast_untyped(&literal, &vars),
        Some(json!({"a": 1, "b": [true, null, "ENUM"], "c": "bound", "d": 1.5})),
    );
}
