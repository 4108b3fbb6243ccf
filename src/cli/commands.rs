use crate::{
    cli::Args,
    core::{
        summary,
        workflow::{apply_migration_pipeline, verify_run_after_targets, writer, WorkflowDocument},
    },
    Result,
};

/// Load, migrate and write back the workflow named by `args`.
///
/// Every stage runs against the in-memory document; the file is only opened for
/// writing once the full edit pipeline has succeeded.
pub fn flatten(args: &Args) -> Result<()> {
    let span = tracing::info_span!("flatten", path = %args.path.display());
    let _entered = span.enter();

    let doc = WorkflowDocument::load_from_file(&args.path)?;
    tracing::info!("loaded workflow");

    let doc = apply_migration_pipeline(doc)?;
    verify_run_after_targets(&doc)?;

    if args.dry_run {
        println!("{}", writer::to_json_string(&doc)?);
        tracing::info!("dry run, workflow left unchanged");
        return Ok(());
    }

    writer::write_to_file(&args.path, &doc)?;
    tracing::info!("workflow rewritten");
    summary::print_summary();
    Ok(())
}
