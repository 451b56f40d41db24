use crate::engine::error::EngineError;
use crate::engine::generators::library::{LibraryConfig, MixedLibrary, PruneCriteria};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibraryWorkflowConfig {
    pub library: LibraryConfig,
    /// Applied after generation when set.
    pub prune: Option<PruneCriteria>,
    /// Maximum library size after pruning.
    pub max_size: Option<usize>,
}

#[instrument(skip_all, name = "library_workflow", fields(count = config.library.count))]
pub fn run(
    config: &LibraryWorkflowConfig,
    reporter: &ProgressReporter,
) -> Result<MixedLibrary, EngineError> {
    let mut library = MixedLibrary::generate(&config.library, reporter)?;

    if let Some(criteria) = &config.prune {
        let removed = reporter.phase("Pruning", || library.prune_library(criteria));
        reporter.report(Progress::Message(format!("Pruned {removed} sequence(s)")));
        info!(removed, remaining = library.len(), "Pruned library.");
    }
    if let Some(max_size) = config.max_size {
        library.truncate(max_size);
    }

    info!(
        "Workflow complete. Library holds {} sequence(s) in {} families.",
        library.len(),
        library.family_counts().len()
    );
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_and_truncate_are_applied_in_order() {
        let config = LibraryWorkflowConfig {
            library: LibraryConfig::new(120, 3).unwrap(),
            prune: Some(PruneCriteria {
                length: Some((14, 28)),
                ..PruneCriteria::default()
            }),
            max_size: Some(30),
        };
        let library = run(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(library.len(), 30);
        assert!(
            library
                .collection()
                .sequences()
                .iter()
                .all(|s| s.len() >= 14)
        );
    }
}
