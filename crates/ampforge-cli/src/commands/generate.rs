use super::progress_handler;
use crate::cli::GenerateArgs;
use crate::config::builder::build_generate_config;
use crate::error::Result;
use crate::utils::io::{Format, write_collection};
use ampforge::engine::progress::ProgressReporter;
use ampforge::workflows;
use tracing::info;

pub fn run(args: GenerateArgs, quiet: bool) -> Result<()> {
    info!("Building generation configuration...");
    let app_config = build_generate_config(&args)?;

    let progress_handler = progress_handler(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core generation workflow...");
    let collection = workflows::generate::run(&app_config.core_config, &reporter)?;

    write_collection(&collection, app_config.output.as_deref(), Format::Fasta)?;
    if let Some(path) = &app_config.output {
        eprintln!(
            "✓ {} sequence(s) written to: {}",
            collection.len(),
            path.display()
        );
    }
    Ok(())
}
