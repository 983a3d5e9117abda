use crate::operation::DocumentBuildError;
use crate::operation::ExecutableDocument;
use crate::operation::OperationKind;

type Result<T> = std::result::Result<T, DocumentBuildError>;

#[test]
fn shorthand_selection_set_is_a_query() -> Result<()> {
    let doc = ExecutableDocument::parse_str("{ a b }")?;
    let ops = doc.operations();

    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].kind(), OperationKind::Query);
    assert_eq!(ops[0].name(), None);
    assert!(ops[0].variable_definitions().is_empty());
    assert_eq!(ops[0].selection_set().items.len(), 2);

    Ok(())
}

#[test]
fn operations_are_listed_in_document_order() -> Result<()> {
    let doc = ExecutableDocument::parse_str(concat!(
        "subscription S { a }\n",
        "fragment F on Query { a }\n",
        "mutation M($x: Int) { a(x: $x) }\n",
        "query Q { a }\n",
    ))?;
    let ops = doc.operations();

    let kinds: Vec<_> = ops.iter().map(|op| op.kind()).collect();
    assert_eq!(kinds, vec![
        OperationKind::Subscription,
        OperationKind::Mutation,
        OperationKind::Query,
    ]);

    let names: Vec<_> = ops.iter().map(|op| op.name()).collect();
    assert_eq!(names, vec![Some("S"), Some("M"), Some("Q")]);

    assert_eq!(ops[1].variable_definitions().len(), 1);
    assert_eq!(ops[1].variable_definitions()[0].name, "x");
    assert_eq!(ops[1].position().line, 3);

    Ok(())
}

#[test]
fn parse_error_is_reported() {
    let result = ExecutableDocument::parse_str("query {");
    assert!(matches!(result, Err(DocumentBuildError::ParseError(_))));
}

#[test]
fn missing_file_is_reported() {
    let path = std::env::temp_dir().join("libgraphql-input-validation-missing.graphql");
    let result = ExecutableDocument::load_file(&path);
    assert!(matches!(result, Err(DocumentBuildError::DocumentFileReadError(_))));
}

#[test]
fn load_file_records_path() -> Result<()> {
    let path = std::env::temp_dir().join(format!(
        "libgraphql-input-validation-op-{}.graphql",
        std::process::id(),
    ));
    std::fs::write(&path, "query { a }").unwrap();

    let doc = ExecutableDocument::load_file(&path)?;
    std::fs::remove_file(&path).unwrap();

    assert_eq!(doc.file_path(), Some(path.as_path()));
    assert_eq!(doc.operations().len(), 1);

    Ok(())
}

#[test]
fn default_root_type_names() {
    assert_eq!(OperationKind::Query.default_root_type_name(), "Query");
    assert_eq!(OperationKind::Mutation.default_root_type_name(), "Mutation");
    assert_eq!(OperationKind::Subscription.default_root_type_name(), "Subscription");
    assert_eq!(OperationKind::Mutation.to_string(), "mutation");
}
