use crate::commands::load_schema;
use crate::commands::SchemaArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

/// Build a schema and report what it defines, without validating any
/// operation.
#[derive(Debug, clap::Args)]
pub(crate) struct CheckSchemaCmd {
    #[command(flatten)]
    schema_args: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for CheckSchemaCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let loaded = match load_schema(&self.schema_args) {
            Ok(loaded) => loaded,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let mut directive_names =
            loaded.schema
                .all_directives()
                .keys()
                .map(|name| format!("@{name}"))
                .collect::<Vec<_>>();
        directive_names.sort();

        CommandResult::stdout(format_args!(
            concat!(
                "{} Schema built successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} type definitions.\n",
                "  * Found {} directive definitions: {}.",
            ),
            output_utils::GREEN_CHECK,
            loaded.num_files,
            loaded.num_skipped,
            loaded.schema.all_types().len(),
            directive_names.len(),
            directive_names.join(", "),
        ))
    }
}
