use crate::operation::OperationKind;
use crate::rules::PredicateRule;
use crate::rules::RegexRule;
use crate::validation::tests::test_utils;
use crate::validation::InputValidationRule;
use crate::validation::InputValidator;
use crate::validation::ValidationError;
use crate::validation::ValidationHalt;
use proptest::prelude::*;
use serde_json::json;

fn scalar_schema(type_str: &str) -> String {
    format!(
        "directive @range(max: Int) on ARGUMENT_DEFINITION\n\
        type Query {{\n  test(input: {type_str} @range(max: 10)): Int\n}}\n"
    )
}

fn scalar_query(type_str: &str) -> String {
    format!("query ($input: {type_str}) {{ test(input: $input) }}")
}

mod scalar_arguments {
    use super::*;

    #[test]
    fn no_directive() {
        for t in ["Int", "Int!"] {
            let schema = format!("type Query {{ test(input: {t}): Int }}");
            let report = test_utils::prepare(&schema, &scalar_query(t), Some(json!({"input": 100})));
            assert!(report.is_valid(), "{t}: {report:?}");
        }
    }

    #[test]
    fn unknown_directive() {
        for t in ["Int", "Int!"] {
            let schema = format!(
                "directive @x on ARGUMENT_DEFINITION\ntype Query {{ test(input: {t} @x): Int }}"
            );
            let report = test_utils::prepare(&schema, &scalar_query(t), Some(json!({"input": 100})));
            assert!(report.is_valid(), "{t}: {report:?}");
        }
    }

    #[test]
    fn unknown_directive_does_not_stop_later_directives() {
        let schema = concat!(
            "directive @x on ARGUMENT_DEFINITION\n",
            "directive @range(max: Int) on ARGUMENT_DEFINITION\n",
            "type Query { test(input: Int @x @range(max: 10)): Int }\n",
        );
        let report = test_utils::prepare(schema, "{ test(input: 100) }", Some(json!({})));

        assert_eq!(test_utils::messages(&report), vec!["Exceeds maximum allowed value of 10."]);
        assert_eq!(report.errors[0].extensions().directive, "range");
    }

    #[test]
    fn described_argument_error_points_at_its_name() {
        let schema = concat!(
            "directive @range(max: Int) on ARGUMENT_DEFINITION\n",
            "type Query {\n",
            "  test(\n",
            "    \"doc\"\n",
            "    input: Int @range(max: 10)\n",
            "  ): Int\n",
            "}\n",
        );
        let report = test_utils::prepare(schema, "{ test(input: 100) }", Some(json!({})));

        assert_eq!(report.errors[0].locations()[0].line, 5);
        assert_eq!(report.errors[0].locations()[0].column, 5);
    }

    #[test]
    fn pass() {
        for t in ["Int", "Int!"] {
            let report = test_utils::prepare(
                &scalar_schema(t),
                &scalar_query(t),
                Some(json!({"input": 10})),
            );
            assert!(report.is_valid(), "{t}: {report:?}");
        }
    }

    #[test]
    fn nullable_value_absent() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            &scalar_query("Int"),
            Some(json!({})),
        );
        assert!(report.is_valid(), "{report:?}");
    }

    #[test]
    fn non_null_value_absent_halts_without_errors() {
        let report = test_utils::prepare(
            &scalar_schema("Int!"),
            &scalar_query("Int!"),
            Some(json!({})),
        );
        assert!(report.errors.is_empty());
        assert!(matches!(report.halt, Some(ValidationHalt::VariableCoercion { .. })));
    }

    #[test]
    fn fail() {
        for t in ["Int", "Int!"] {
            let report = test_utils::prepare(
                &scalar_schema(t),
                &scalar_query(t),
                Some(json!({"input": 100})),
            );

            assert!(report.halt.is_none());
            assert_eq!(serde_json::to_value(&report.errors).unwrap(), json!([{
                "message": "Exceeds maximum allowed value of 10.",
                "locations": [{"line": 3, "column": 8}],
                "path": ["test", "input"],
                "extensions": {
                    "code": "EINVAL",
                    "directive": "range",
                    "args": {"max": 10},
                },
            }]), "{t}");
        }
    }

    #[test]
    fn inline_literal() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            "{ test(input: 100) }",
            Some(json!({})),
        );
        assert_eq!(test_utils::paths(&report), vec![vec!["test", "input"]]);
    }
}

mod input_objects {
    use super::*;

    #[test]
    fn object_without_directives() {
        for t in ["Object", "Object!"] {
            let schema = format!(
                "type Query {{ test(input: {t}): Int }}\ninput Object {{ value: Int! }}"
            );
            let query = format!("query ($input: {t}) {{ test(input: $input) }}");

            let report = test_utils::prepare(&schema, &query, Some(json!({"input": {"value": 100}})));
            assert!(report.is_valid(), "{t}: {report:?}");

            let report = test_utils::prepare(&schema, &query, Some(json!({})));
            assert!(report.errors.is_empty(), "{t}: {report:?}");
        }
    }

    #[test]
    fn nested_object_without_directives() {
        let schema = concat!(
            "type Query { test(input: Object!): Int }\n",
            "input Object { nested: Nested! }\n",
            "input Nested { value: Int! }\n",
        );
        let report = test_utils::prepare(
            schema,
            "query ($input: Object!) { test(input: $input) }",
            Some(json!({"input": {"nested": {"value": 100}}})),
        );
        assert!(report.is_valid(), "{report:?}");
    }

    #[test]
    fn nested_object_field_failure_path() {
        let schema = concat!(
            "directive @range(max: Int) on INPUT_FIELD_DEFINITION\n",
            "type Query { test(input: Object!): Int }\n",
            "input Object { nested: Nested! other: Int @range(max: 1) }\n",
            "input Nested { value: Int! @range(max: 10) }\n",
        );
        let report = test_utils::prepare(
            schema,
            "query ($input: Object!) { test(input: $input) }",
            Some(json!({"input": {"nested": {"value": 100}, "other": 2}})),
        );

        assert_eq!(test_utils::paths(&report), vec![
            vec!["test", "input", "nested", "value"],
            vec!["test", "input", "other"],
        ]);
        assert_eq!(report.errors[0].locations()[0].line, 4);
        assert_eq!(report.errors[0].locations()[0].column, 16);
    }

    #[test]
    fn absent_object_field_is_skipped() {
        let schema = concat!(
            "directive @range(max: Int) on INPUT_FIELD_DEFINITION\n",
            "type Query { test(input: Object): Int }\n",
            "input Object { a: Int @range(max: 1) b: Int @range(max: 1) }\n",
        );
        let report = test_utils::prepare(
            schema,
            "query ($input: Object) { test(input: $input) }",
            Some(json!({"input": {"b": 5}})),
        );
        assert_eq!(test_utils::paths(&report), vec![vec!["test", "input", "b"]]);
    }

    #[test]
    fn predicate_sees_enclosing_object() {
        let schema = concat!(
            "directive @matchesPassword on INPUT_FIELD_DEFINITION\n",
            "type Mutation { signUp(input: SignUp!): Int }\n",
            "type Query { a: Int }\n",
            "input SignUp { password: String! confirm: String! @matchesPassword }\n",
        );
        let validator = InputValidator::new([(
            "matchesPassword",
            InputValidationRule::from(
                PredicateRule::new(|value, object| {
                    object.and_then(|object| object.get("password")) == Some(value)
                }).with_message("Passwords do not match."),
            ),
        )]);
        let query = "mutation ($input: SignUp!) { signUp(input: $input) }";

        let report = test_utils::prepare_with(
            &validator,
            schema,
            query,
            Some(json!({"input": {"password": "a", "confirm": "a"}})),
        );
        assert!(report.is_valid(), "{report:?}");

        let report = test_utils::prepare_with(
            &validator,
            schema,
            query,
            Some(json!({"input": {"password": "a", "confirm": "b"}})),
        );
        assert_eq!(test_utils::messages(&report), vec!["Passwords do not match."]);
        assert_eq!(test_utils::paths(&report), vec![vec!["signUp", "input", "confirm"]]);
    }
}

mod fields {
    use super::*;

    const SCHEMA: &str = concat!(
        "directive @range(max: Int) on ARGUMENT_DEFINITION\n",
        "type Query {\n",
        "  a(input: Int! @range(max: 10)): Int\n",
        "  b(input: Int! @range(max: 5)): Int\n",
        "}\n",
    );
    const QUERY: &str = "query ($input: Int!) { a(input: $input) b(input: $input) }";

    #[test]
    fn pass() {
        let report = test_utils::prepare(SCHEMA, QUERY, Some(json!({"input": 0})));
        assert!(report.is_valid(), "{report:?}");
    }

    #[test]
    fn fail_some() {
        let report = test_utils::prepare(SCHEMA, QUERY, Some(json!({"input": 7})));
        assert_eq!(report.errors, vec![ValidationError::new(
            "Exceeds maximum allowed value of 5.".to_string(),
            &crate::loc::FilePosition {
                col: 5,
                file: Some("str://0".into()),
                line: 4,
            },
            vec!["b".to_string(), "input".to_string()],
            "range",
            &[("max".to_string(), json!(5))].into_iter().collect(),
        )]);
    }

    #[test]
    fn fail_all() {
        let report = test_utils::prepare(SCHEMA, QUERY, Some(json!({"input": 20})));
        assert_eq!(test_utils::paths(&report), vec![
            vec!["a", "input"],
            vec!["b", "input"],
        ]);
        assert_eq!(test_utils::messages(&report), vec![
            "Exceeds maximum allowed value of 10.",
            "Exceeds maximum allowed value of 5.",
        ]);
    }

    #[test]
    fn object_field_alongside_argument_field() {
        let schema = concat!(
            "directive @range(max: Int) on ARGUMENT_DEFINITION\n",
            "type Query {\n",
            "  a: Object\n",
            "  b(input: Int! @range(max: 5)): Int\n",
            "}\n",
            "type Object { value: Int }\n",
        );
        let query = "query ($input: Int!) { a { value } b(input: $input) }";

        let report = test_utils::prepare(schema, query, Some(json!({"input": 0})));
        assert!(report.is_valid(), "{report:?}");

        let report = test_utils::prepare(schema, query, Some(json!({"input": 10})));
        assert_eq!(test_utils::paths(&report), vec![vec!["b", "input"]]);
    }

    #[test]
    fn nested_selection_path() {
        let schema = concat!(
            "directive @range(max: Int) on ARGUMENT_DEFINITION\n",
            "type Query { outer: Outer }\n",
            "interface Node { inner(input: Int @range(max: 10)): Int }\n",
            "type Outer { node: Node }\n",
        );
        let report = test_utils::prepare(
            schema,
            "{ outer { node { inner(input: 100) } } }",
            Some(json!({})),
        );
        assert_eq!(test_utils::paths(&report), vec![vec!["outer", "node", "inner", "input"]]);
    }

    #[test]
    fn introspection_fields_are_skipped() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            "{ __typename test(input: 100) }",
            Some(json!({})),
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.halt.is_none());
    }

    #[test]
    fn fragments_are_skipped() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            "query { ...F ... on Query { test(input: 100) } }\nfragment F on Query { test(input: 100) }",
            Some(json!({})),
        );
        assert!(report.is_valid(), "{report:?}");
    }
}

mod operations {
    use super::*;

    #[test]
    fn mutation_input() {
        let schema = "type Query { a: Int }\ntype Mutation { test(input: Int): Int }";
        let report = test_utils::prepare(
            schema,
            "mutation ($input: Int) { test(input: $input) }",
            Some(json!({"input": 10})),
        );
        assert!(report.is_valid(), "{report:?}");
    }

    #[test]
    fn subscription_input() {
        let schema = concat!(
            "directive @range(max: Int) on ARGUMENT_DEFINITION\n",
            "type Query { a: Int }\n",
            "type Subscription { test(input: Int @range(max: 1)): Int }\n",
        );
        let report = test_utils::prepare(
            schema,
            "subscription ($input: Int) { test(input: $input) }",
            Some(json!({"input": 10})),
        );
        assert_eq!(test_utils::paths(&report), vec![vec!["test", "input"]]);
    }

    #[test]
    fn nested_fields_without_variables() {
        let schema = "type Query { test: Object }\ntype Object { value: Int }";
        let report = test_utils::prepare(schema, "{ test { value } }", Some(json!({})));
        assert!(report.is_valid(), "{report:?}");
    }

    #[test]
    fn every_operation_is_validated() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            "query A { test(input: 100) }\nquery B { test(input: 200) }",
            Some(json!({})),
        );
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn noop_without_variables() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            "{ test(input: 100) nope }",
            None,
        );
        assert_eq!(report, crate::validation::ValidationReport::default());
    }
}

mod halts {
    use super::*;

    #[test]
    fn undefined_field_keeps_earlier_errors() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            "{ test(input: 100) nope }",
            Some(json!({})),
        );
        assert_eq!(report.errors.len(), 1);
        assert!(matches!(
            report.halt,
            Some(ValidationHalt::UndefinedField { ref field_name, ref parent_type_name, .. })
                if field_name == "nope" && parent_type_name == "Query",
        ));
    }

    #[test]
    fn undefined_argument() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            "{ test(other: 1) }",
            Some(json!({})),
        );
        assert!(matches!(
            report.halt,
            Some(ValidationHalt::UndefinedArgument { ref argument_name, .. })
                if argument_name == "other",
        ));
    }

    #[test]
    fn undefined_root_operation_type() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            "mutation { test }",
            Some(json!({})),
        );
        assert!(matches!(
            report.halt,
            Some(ValidationHalt::UndefinedRootOperationType {
                operation_kind: OperationKind::Mutation,
                ..
            }),
        ));
    }

    #[test]
    fn variable_coercion_failure() {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            &scalar_query("Int"),
            Some(json!({"input": "abc"})),
        );
        let Some(ValidationHalt::VariableCoercion { errors, .. }) = &report.halt else {
            panic!("expected a coercion halt, got {:?}", report.halt);
        };
        assert_eq!(errors[0].variable_name(), "input");
        assert!(report.errors.is_empty());
    }

    #[test]
    fn validate_into_appends_to_collector() {
        let schema = test_utils::build_schema(&scalar_schema("Int"));
        let validator = test_utils::default_validator();
        let variables = serde_json::Map::new();

        let mut errors = vec![];
        let halted = crate::operation::ExecutableDocument::parse_str(
            "query A { test(input: 100) nope }",
        ).unwrap();
        let result = validator.validate_into(&schema, &halted, Some(&variables), &mut errors);
        assert!(result.is_err());
        assert_eq!(errors.len(), 1);

        let clean = crate::operation::ExecutableDocument::parse_str(
            "query B { test(input: 200) }",
        ).unwrap();
        validator.validate_into(&schema, &clean, Some(&variables), &mut errors).unwrap();
        assert_eq!(test_utils::messages(&crate::validation::ValidationReport {
            errors,
            halt: None,
        }), vec![
            "Exceeds maximum allowed value of 10.",
            "Exceeds maximum allowed value of 10.",
        ]);
    }
}

mod directive_arguments {
    use super::*;

    #[test]
    fn defaults_applied_and_message_removed() {
        let schema = concat!(
            "directive @range(min: Int, max: Int = 10, message: String) on ARGUMENT_DEFINITION\n",
            "type Query { test(input: Int @range(message: \"too big: {max}\")): Int }\n",
        );
        let report = test_utils::prepare(schema, "{ test(input: 11) }", Some(json!({})));

        assert_eq!(test_utils::messages(&report), vec!["too big: 10"]);
        assert_eq!(
            serde_json::to_value(&report.errors[0].extensions().args).unwrap(),
            json!({"max": 10}),
        );
    }

    #[test]
    fn whole_float_arguments_render_as_integers() {
        let schema = concat!(
            "directive @range(min: Float, max: Float) on ARGUMENT_DEFINITION\n",
            "type Query { test(input: Float @range(max: 10.0)): Int }\n",
        );
        let report = test_utils::prepare(schema, "{ test(input: 10.5) }", Some(json!({})));

        assert_eq!(test_utils::messages(&report), vec!["Exceeds maximum allowed value of 10."]);
    }

    #[test]
    fn undeclared_directive_arguments_are_used_as_written() {
        let schema = "type Query { test(input: Int @range(max: 3)): Int }";
        let report = test_utils::prepare(schema, "{ test(input: 4) }", Some(json!({})));

        assert_eq!(test_utils::messages(&report), vec!["Exceeds maximum allowed value of 3."]);
        assert_eq!(report.errors[0].extensions().directive, "range");
    }

    #[test]
    fn first_failing_directive_wins() {
        let schema = concat!(
            "directive @range(min: Int, max: Int) on ARGUMENT_DEFINITION\n",
            "directive @even on ARGUMENT_DEFINITION\n",
            "type Query { test(input: Int @range(max: 3) @even): Int }\n",
        );
        let validator = InputValidator::new([
            ("range", InputValidationRule::Range),
            ("even", InputValidationRule::custom(|value, _, _| {
                (value.as_i64()? % 2 != 0).then(|| "odd".to_string())
            })),
        ]);

        let report = test_utils::prepare_with(&validator, schema, "{ test(input: 5) }", Some(json!({})));
        assert_eq!(test_utils::messages(&report), vec!["Exceeds maximum allowed value of 3."]);

        let report = test_utils::prepare_with(&validator, schema, "{ test(input: 1) }", Some(json!({})));
        assert_eq!(test_utils::messages(&report), vec!["odd"]);
    }

    #[test]
    fn enums_and_regex_rules() {
        let schema = concat!(
            "directive @onlyRed on ARGUMENT_DEFINITION\n",
            "directive @slug(message: String) on ARGUMENT_DEFINITION\n",
            "enum Color { RED GREEN }\n",
            "type Query { test(color: Color @onlyRed, slug: String @slug): Int }\n",
        );
        let validator = InputValidator::new([
            ("onlyRed", InputValidationRule::custom(|value, _, _| {
                (value != "RED").then(|| "Only red allowed.".to_string())
            })),
            ("slug", RegexRule::new("^[a-z-]+$").unwrap().into()),
        ]);

        let report = test_utils::prepare_with(
            &validator,
            schema,
            "{ test(color: GREEN, slug: \"Not A Slug\") }",
            Some(json!({})),
        );
        assert_eq!(test_utils::messages(&report), vec![
            "Only red allowed.",
            "Required to match validation pattern.",
        ]);
    }
}

proptest! {
    #[test]
    fn absent_variables_never_report(input in any::<i32>()) {
        let query = format!("{{ test(input: {input}) }}");
        let report = test_utils::prepare(&scalar_schema("Int"), &query, None);
        prop_assert!(report.is_valid());
    }

    #[test]
    fn range_reports_iff_above_max(input in any::<i32>()) {
        let report = test_utils::prepare(
            &scalar_schema("Int"),
            &scalar_query("Int"),
            Some(json!({"input": input})),
        );
        prop_assert_eq!(report.errors.len(), usize::from(input > 10));
    }
}
