use crate::cli::{FamilyArg, MassArg, ModalityArg, PkaArg, TerminusArg};
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileGenerateConfig {
    pub family: Option<FamilyArg>,
    pub count: Option<usize>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub seed: Option<u64>,
    pub alphabet: Option<String>,
    pub arcs: Option<Vec<f64>>,
    pub polar_arc: Option<f64>,
    pub kink_length: Option<usize>,
    pub ngrams: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileRatiosConfig {
    pub symmetric: Option<f64>,
    pub asymmetric: Option<f64>,
    pub helices: Option<f64>,
    pub kinked: Option<f64>,
    pub oblique: Option<f64>,
    pub random: Option<f64>,
    pub amp: Option<f64>,
    pub amp_no_cm: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilePruneConfig {
    pub min_charge: Option<f64>,
    pub max_charge: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileLibraryConfig {
    pub count: Option<usize>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub seed: Option<u64>,
    pub max_size: Option<usize>,
    pub ratios: Option<FileRatiosConfig>,
    pub prune: Option<FilePruneConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileDescribeConfig {
    pub global: Option<Vec<String>>,
    pub autocorrelation: Option<Vec<String>>,
    pub cross_correlation: Option<Vec<(String, String)>>,
    pub moment: Option<Vec<String>>,
    pub window: Option<usize>,
    pub moment_window: Option<usize>,
    pub modality: Option<ModalityArg>,
    pub angle: Option<f64>,
    pub ph: Option<f64>,
    pub pka: Option<PkaArg>,
    pub terminus: Option<TerminusArg>,
    pub mass: Option<MassArg>,
    pub scales: Option<PathBuf>,
    pub clean: Option<bool>,
    pub natural_only: Option<bool>,
}

/// Contents of a TOML config file; every section and key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub generate: Option<FileGenerateConfig>,
    pub library: Option<FileLibraryConfig>,
    pub describe: Option<FileDescribeConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `path` when given, otherwise an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}
