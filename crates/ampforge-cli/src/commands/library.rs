use super::progress_handler;
use crate::cli::LibraryArgs;
use crate::config::builder::build_library_config;
use crate::error::Result;
use crate::utils::io::{Format, write_collection};
use ampforge::engine::progress::ProgressReporter;
use ampforge::workflows;
use tracing::{info, warn};

pub fn run(args: LibraryArgs, quiet: bool) -> Result<()> {
    info!("Building library configuration...");
    let app_config = build_library_config(&args)?;

    let progress_handler = progress_handler(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the mixed library workflow...");
    let library = workflows::library::run(&app_config.core_config, &reporter)?;

    if library.is_empty() {
        warn!("Library is empty after filtering.");
    }
    for (family, count) in library.family_counts() {
        info!(family = %family, count, "Library composition.");
    }

    write_collection(library.collection(), app_config.output.as_deref(), Format::Fasta)?;
    if let Some(path) = &app_config.output {
        eprintln!(
            "✓ Library of {} sequence(s) written to: {}",
            library.len(),
            path.display()
        );
    }
    Ok(())
}
