use crate::commands::load_schema;
use crate::commands::SchemaArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_input_validation::operation::ExecutableDocument;
use libgraphql_input_validation::rules::RegexRule;
use libgraphql_input_validation::schema::Schema;
use libgraphql_input_validation::InputValidationRule;
use libgraphql_input_validation::InputValidator;
use libgraphql_input_validation::VariableValues;
use std::path::Path;
use std::path::PathBuf;

/// Validate the variables of an operation against the input-validation
/// directives of a schema.
///
/// The `items`, `length` and `range` rules are always bound to directives of
/// the same name. Errors are printed to stdout as a JSON array.
#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    schema_args: SchemaArgs,

    #[arg(
        help="Pretty-print the JSON error output.",
        long,
    )]
    pretty: bool,

    #[arg(
        help="Bind a directive to a regular-expression rule, as \
             `DIRECTIVE_NAME=PATTERN`. May be repeated.",
        long="regex",
        value_parser=parse_regex_binding,
    )]
    regex_rules: Vec<(String, String)>,

    #[arg(
        help="Path to a JSON file holding the operation's variable values. \
             Without it there is nothing to validate.",
        long,
    )]
    variables: Option<PathBuf>,

    #[arg(
        help="Path to a GraphQL file containing the operation(s) to validate.",
        long="operation",
    )]
    operation_file: PathBuf,
}
impl ValidateCmd {
    fn build_validator(&self) -> anyhow::Result<InputValidator> {
        let mut entries = vec![
            ("items".to_string(), InputValidationRule::Items),
            ("length".to_string(), InputValidationRule::Length),
            ("range".to_string(), InputValidationRule::Range),
        ];
        for (directive_name, pattern) in &self.regex_rules {
            let rule = RegexRule::new(pattern).with_context(|| {
                format!("Invalid pattern for `@{directive_name}`")
            })?;
            entries.push((directive_name.to_string(), rule.into()));
        }
        Ok(InputValidator::new(entries))
    }

    fn prepare(
        &self,
    ) -> anyhow::Result<(Schema, ExecutableDocument, Option<VariableValues>, InputValidator)> {
        let loaded = load_schema(&self.schema_args)?;
        let document =
            ExecutableDocument::load_file(&self.operation_file)
                .with_context(|| format!(
                    "Failed to load operation file {:?}",
                    self.operation_file,
                ))?;
        let variables = self.variables.as_deref().map(read_variables).transpose()?;
        Ok((loaded.schema, document, variables, self.build_validator()?))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (schema, document, variables, validator) = match self.prepare() {
            Ok(prepared) => prepared,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        if variables.is_none() {
            log::info!("No --variables given; skipping input validation.");
        }

        let report = validator.validate(&schema, &document, variables.as_ref());
        log::debug!("Found {} input validation errors.", report.errors.len());

        let errors_json =
            if self.pretty {
                serde_json::to_string_pretty(&report.errors)
            } else {
                serde_json::to_string(&report.errors)
            };
        let errors_json = match errors_json {
            Ok(json) => json,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to serialize errors: {e}",
                output_utils::RED_X,
            )),
        };

        let mut result = CommandResult::stdout(format_args!("{errors_json}"));
        if let Some(halt) = &report.halt {
            result.stderr = Some(format!(
                "{} Validation stopped early: {halt}",
                output_utils::RED_X,
            ));
        }
        if report.is_valid() {
            result
        } else {
            result.failed()
        }
    }
}

fn parse_regex_binding(arg: &str) -> Result<(String, String), String> {
    let (name, pattern) =
        arg.split_once('=')
            .ok_or_else(|| format!("expected `DIRECTIVE_NAME=PATTERN`, got `{arg}`"))?;
    let name = name.trim().trim_start_matches('@');
    if name.is_empty() {
        return Err(format!("missing directive name in `{arg}`"));
    }
    Ok((name.to_string(), pattern.to_string()))
}

fn read_variables(path: &Path) -> anyhow::Result<VariableValues> {
    let content =
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read variables file {path:?}"))?;
    match serde_json::from_str(&content) {
        Ok(serde_json::Value::Object(variables)) => Ok(variables),
        Ok(other) => anyhow::bail!("Variables file {path:?} must hold a JSON object, got `{other}`"),
        Err(e) => Err(anyhow::Error::new(e).context(format!("Failed to parse variables file {path:?}"))),
    }
}
