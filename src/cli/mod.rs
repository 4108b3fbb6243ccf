pub mod commands;

use clap::Parser;
use std::path::PathBuf;

/// Location of the workflow definition relative to the logic app project root.
pub const DEFAULT_WORKFLOW_PATH: &str = "UpsertEmployee/workflow.json";

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\n{all-args}\n";

#[derive(Parser, Debug)]
#[command(name = "workflow-flatten")]
#[command(version = crate::VERSION)]
#[command(about = "Flatten the UpsertEmployee workflow and switch it to the UpsertEmployee stored procedure")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "The file is rewritten in place. Run once against the pre-migration workflow; a second run fails because ValidateInput is gone.\n\nExample:\n    workflow-flatten UpsertEmployee/workflow.json --dry-run"
)]
pub struct Args {
    /// Workflow definition to rewrite in place
    #[arg(value_name = "PATH", default_value = DEFAULT_WORKFLOW_PATH)]
    pub path: PathBuf,

    /// Print the migrated workflow to stdout instead of overwriting the file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: Args) -> crate::Result<()> {
    commands::flatten(&args)
}
