use crate::core::models::collection::SequenceCollection;
use crate::core::scales::registry::ScaleRegistry;
use crate::engine::config::{GlobalConfig, MomentConfig};
use crate::engine::descriptors::global::GlobalDescriptor;
use crate::engine::descriptors::{DescriptorEngine, DescriptorReport};
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use tracing::{info, instrument, warn};

/// One descriptor computation of a describe run.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorTask {
    Global {
        descriptors: Vec<GlobalDescriptor>,
        config: GlobalConfig,
    },
    Autocorrelation {
        scale: String,
        window: usize,
    },
    CrossCorrelation {
        first: String,
        second: String,
        window: usize,
    },
    Moment {
        scale: String,
        config: MomentConfig,
    },
}

impl DescriptorTask {
    fn phase_name(&self) -> &'static str {
        match self {
            DescriptorTask::Global { .. } => "Global descriptors",
            DescriptorTask::Autocorrelation { .. } => "Autocorrelation",
            DescriptorTask::CrossCorrelation { .. } => "Cross-correlation",
            DescriptorTask::Moment { .. } => "Hydrophobic moment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescribeConfig {
    /// Normalise sequences before computing; unknown symbols become the wildcard.
    pub clean: bool,
    /// Drop rows containing the wildcard after cleaning.
    pub natural_only: bool,
    pub tasks: Vec<DescriptorTask>,
}

/// Runs every task in order, appending columns to `collection`.
#[instrument(skip_all, name = "describe_workflow", fields(rows = collection.len(), tasks = config.tasks.len()))]
pub fn run(
    collection: &mut SequenceCollection,
    registry: &ScaleRegistry,
    config: &DescribeConfig,
    reporter: &ProgressReporter,
) -> Result<DescriptorReport, EngineError> {
    if config.clean {
        let issues = reporter.phase("Cleaning", || collection.clean());
        for issue in &issues {
            warn!(
                name = %issue.name,
                position = issue.position,
                symbol = %issue.symbol,
                "Replaced unrecognised residue."
            );
        }
    }
    if config.natural_only {
        let removed = collection.keep_natural_aa();
        if removed > 0 {
            info!(removed, "Dropped sequences with non-natural residues.");
        }
    }

    let engine = DescriptorEngine::new(registry).with_reporter(reporter);
    let mut report = DescriptorReport::default();
    for task in &config.tasks {
        let part = reporter.phase(task.phase_name(), || match task {
            DescriptorTask::Global {
                descriptors,
                config,
            } => engine.global(collection, descriptors, config),
            DescriptorTask::Autocorrelation { scale, window } => {
                engine.autocorrelation(collection, scale, *window)
            }
            DescriptorTask::CrossCorrelation {
                first,
                second,
                window,
            } => engine.cross_correlation(collection, first, second, *window),
            DescriptorTask::Moment { scale, config } => engine.moment(collection, scale, config),
        })?;
        report.merge(part);
    }

    info!(
        "Workflow complete. Computed {} column(s), {} row failure(s).",
        report.columns.len(),
        report.failures.len()
    );
    Ok(report)
}
