use super::progress_handler;
use crate::cli::DescribeArgs;
use crate::config::builder::build_describe_config;
use crate::error::{CliError, Result};
use crate::utils::io::{Format, read_collection, write_collection};
use ampforge::core::scales::registry::ScaleRegistry;
use ampforge::engine::progress::ProgressReporter;
use ampforge::workflows;
use std::path::Path;
use tracing::{info, warn};

/// Built-in scales plus those defined in `custom`, which may replace built-ins.
pub fn load_registry(custom: Option<&Path>) -> Result<ScaleRegistry> {
    let mut registry = ScaleRegistry::with_defaults();
    if let Some(path) = custom {
        let loaded = registry
            .load_custom(path, true)
            .map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        info!("Loaded {} custom scale(s) from {:?}", loaded.len(), path);
    }
    Ok(registry)
}

pub fn run(args: DescribeArgs, quiet: bool) -> Result<()> {
    info!("Building descriptor configuration...");
    let app_config = build_describe_config(&args)?;
    let registry = load_registry(app_config.scales.as_deref())?;

    let mut collection = read_collection(&app_config.input)?;
    if collection.is_empty() {
        warn!("Input {:?} contains no sequences.", app_config.input);
    }

    let progress_handler = progress_handler(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the descriptor workflow...");
    let report = workflows::describe::run(
        &mut collection,
        &registry,
        &app_config.core_config,
        &reporter,
    )?;
    for failure in &report.failures {
        warn!(name = %failure.name, "Descriptor undefined: {}", failure.error);
    }

    write_collection(&collection, app_config.output.as_deref(), Format::Table)?;
    if let Some(path) = &app_config.output {
        eprintln!(
            "✓ {} descriptor column(s) for {} sequence(s) written to: {}",
            report.columns.len(),
            collection.len(),
            path.display()
        );
    }
    Ok(())
}
