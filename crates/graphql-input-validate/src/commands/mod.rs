mod check_schema;
mod validate;

use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use check_schema::CheckSchemaCmd;
use libgraphql_input_validation::schema::Schema;
use libgraphql_input_validation::schema::SchemaBuilder;
use std::path::PathBuf;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-input-validate")]
pub(crate) enum CommandEnum {
    CheckSchema(Box<CheckSchemaCmd>),
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::CheckSchema(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

/// Schema-loading arguments shared by every command.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,
}

/// A schema built from [`SchemaArgs`], along with stats about the files it
/// was built from.
pub(crate) struct LoadedSchema {
    pub num_files: usize,
    pub num_skipped: usize,
    pub schema: Schema,
}

pub(crate) fn load_schema(args: &SchemaArgs) -> anyhow::Result<LoadedSchema> {
    let found = output_utils::find_graphql_files(&args.schema, &args.graphql_file_exts);
    if let Some(err) = found.errors.into_iter().next() {
        return Err(anyhow::Error::new(err).context("Failed to scan schema paths"));
    }
    if found.file_paths.is_empty() {
        anyhow::bail!("No schema files found at {:?}", args.schema);
    }

    let schema =
        SchemaBuilder::new()
            .load_files(found.file_paths.clone())
            .and_then(SchemaBuilder::build)
            .map_err(|err| anyhow::anyhow!("Failed to build schema: {err}"))?;

    Ok(LoadedSchema {
        num_files: found.file_paths.len(),
        num_skipped: found.num_skipped,
        schema,
    })
}
