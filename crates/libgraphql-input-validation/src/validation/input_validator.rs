use crate::operation::ExecutableDocument;
use crate::schema::Schema;
use crate::validation::visitor::TraversalContext;
use crate::validation::ErrorCollector;
use crate::validation::InputValidationRule;
use crate::validation::RuleRegistry;
use crate::validation::ValidationError;
use crate::validation::ValidationHalt;
use crate::value::VariableValues;
use tracing::instrument;

/// Entry point for directive-driven input validation.
///
/// An [`InputValidator`] is configured once with the rules to enforce and is
/// then shared (it is `Send + Sync`) by every request that needs validating:
///
/// ```
/// use libgraphql_input_validation::operation::ExecutableDocument;
/// use libgraphql_input_validation::schema::SchemaBuilder;
/// use libgraphql_input_validation::InputValidationRule;
/// use libgraphql_input_validation::InputValidator;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, r#"
///         directive @range(min: Float, max: Float, message: String) on ARGUMENT_DEFINITION
///         type Query { page(size: Int @range(max: 100)): Int }
///     "#)
///     .unwrap()
///     .build()
///     .unwrap();
/// let document = ExecutableDocument::parse_str(
///     "query($size: Int) { page(size: $size) }",
/// ).unwrap();
/// let variables = serde_json::json!({"size": 500});
///
/// let validator = InputValidator::new([("range", InputValidationRule::Range)]);
/// let report = validator.validate(&schema, &document, variables.as_object());
///
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].message(), "Exceeds maximum allowed value of 100.");
/// ```
#[derive(Clone, Debug)]
pub struct InputValidator {
    max_errors: Option<usize>,
    registry: RuleRegistry,
}
impl InputValidator {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, InputValidationRule)>,
        S: Into<String>,
    {
        Self {
            max_errors: None,
            registry: RuleRegistry::new(entries),
        }
    }

    pub fn from_registry(registry: RuleRegistry) -> Self {
        Self {
            max_errors: None,
            registry,
        }
    }

    /// Record an upper bound on the number of errors a pass should report.
    ///
    /// The bound is stored for callers to inspect but is not yet enforced.
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors);
        self
    }

    pub fn max_errors(&self) -> Option<usize> {
        self.max_errors
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate every operation in `document` and collect the results.
    ///
    /// When `variables` is `None` the pass is a no-op: no checks run and the
    /// report is empty.
    pub fn validate(
        &self,
        schema: &Schema,
        document: &ExecutableDocument,
        variables: Option<&VariableValues>,
    ) -> ValidationReport {
        let mut errors = vec![];
        let halt = self.validate_into(schema, document, variables, &mut errors).err();
        ValidationReport {
            errors,
            halt,
        }
    }

    /// Like [`InputValidator::validate()`], but reports errors into a
    /// caller-provided [`ErrorCollector`].
    ///
    /// A structural problem ends the pass with `Err`; whatever was reported
    /// into `collector` before that point stays there.
    #[instrument(level = "trace", skip(self, schema, document, variables, collector))]
    pub fn validate_into(
        &self,
        schema: &Schema,
        document: &ExecutableDocument,
        variables: Option<&VariableValues>,
        collector: &mut dyn ErrorCollector,
    ) -> Result<(), ValidationHalt> {
        let Some(variables) = variables else {
            tracing::trace!("no variables bound, skipping input validation");
            return Ok(());
        };

        let mut ctx = TraversalContext::new(schema, &self.registry, collector);
        for operation in document.operations() {
            ctx.visit_operation(&operation, variables)?;
        }
        Ok(())
    }
}

/// The outcome of [`InputValidator::validate()`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    /// Every rule violation found, in traversal order.
    pub errors: Vec<ValidationError>,
    /// Set when the pass ended early on a structural problem.
    pub halt: Option<ValidationHalt>,
}
impl ValidationReport {
    /// `true` when no errors were reported and the pass ran to completion.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.halt.is_none()
    }
}
