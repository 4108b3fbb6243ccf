use clap::Parser;
use std::env;
use std::process::ExitCode;
use workflow_flatten::cli::{self, Args};
use workflow_flatten::core::{DefaultErrorReporter, ErrorReporter};
use workflow_flatten::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    let reporter = DefaultErrorReporter::new();

    let workspace_root = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            let err = anyhow::Error::new(err).context("cannot resolve working directory");
            reporter.report_failure(&err);
            return ExitCode::FAILURE;
        }
    };
    let guard = match logging::init(&workspace_root) {
        Ok(guard) => guard,
        Err(err) => {
            reporter.report_failure(&err);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(
        console = %guard.console_output(),
        log_file = ?guard.log_file_path(),
        "logging initialized"
    );

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "workflow migration failed");
            reporter.report_failure(&err);
            ExitCode::FAILURE
        }
    }
}
