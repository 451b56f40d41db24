use thiserror::Error;

use super::config::ConfigError;
use super::utils::sampling::SamplingError;
use crate::core::io::ngrams::NgramLoadError;
use crate::core::models::collection::CollectionError;
use crate::core::scales::scale::ScaleError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Scale error: {source}")]
    Scale {
        #[from]
        source: ScaleError,
    },

    #[error("Collection error: {source}")]
    Collection {
        #[from]
        source: CollectionError,
    },

    #[error("Sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Failed to load n-gram table: {source}")]
    Ngrams {
        #[from]
        source: NgramLoadError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Whether the error stems from invalid caller input rather than a failure
    /// during computation.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EngineError::Config { .. }
                | EngineError::Scale {
                    source: ScaleError::UnknownScale(_) | ScaleError::ArityMismatch { .. }
                }
        )
    }
}
