use super::scale::{Scale, ScaleError};
use super::tables;
use crate::core::models::residue::{AminoAcid, NATURAL_ALPHABET};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub const EISENBERG: &str = "eisenberg";
pub const KYTE_DOOLITTLE: &str = "kyte-doolittle";
pub const HOPP_WOODS: &str = "hopp-woods";
pub const BOMAN: &str = "boman";
pub const Z3: &str = "z3";
pub const INSTABILITY: &str = "instability";

#[derive(Debug, Error)]
pub enum ScaleLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid scale definition in '{path}': {source}")]
    Invalid { path: String, source: ScaleError },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScaleDefinition {
    Scalar {
        values: HashMap<String, f64>,
    },
    Vector {
        vectors: HashMap<String, Vec<f64>>,
    },
}

/// Named, read-only amino-acid scales.
///
/// A registry is an explicit value handed to the descriptor engine; there is no
/// process-wide default instance.
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    scales: HashMap<String, Scale>,
}

impl ScaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in scales.
    pub fn with_defaults() -> Self {
        let scales = HashMap::from([
            (EISENBERG.to_string(), Scale::Scalar(tables::EISENBERG)),
            (KYTE_DOOLITTLE.to_string(), Scale::Scalar(tables::KYTE_DOOLITTLE)),
            (HOPP_WOODS.to_string(), Scale::Scalar(tables::HOPP_WOODS)),
            (BOMAN.to_string(), Scale::Scalar(tables::BOMAN)),
            (Z3.to_string(), Scale::vector(&tables::Z3)),
            (INSTABILITY.to_string(), Scale::Pairwise(Box::new(tables::DIWV))),
        ]);
        Self { scales }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        scale: Scale,
        overwrite: bool,
    ) -> Result<(), ScaleError> {
        let name = name.into();
        if !overwrite && self.scales.contains_key(&name) {
            return Err(ScaleError::DuplicateScale(name));
        }
        debug!(scale = %name, shape = %scale.shape(), "Registered scale.");
        self.scales.insert(name, scale);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&Scale, ScaleError> {
        self.scales
            .get(name)
            .ok_or_else(|| ScaleError::UnknownScale(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scales.contains_key(name)
    }

    /// Registered scale names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scales.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Loads caller-supplied scales from a TOML file and registers them.
    ///
    /// Each table defines one scale, either `values = { A = 1.0, ... }` or
    /// `vectors = { A = [1.0, 2.0], ... }`. Every natural residue must be present.
    /// Returns the names of the loaded scales in sorted order.
    pub fn load_custom(&mut self, path: &Path, overwrite: bool) -> Result<Vec<String>, ScaleLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScaleLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        self.load_custom_str(&content, overwrite)
            .map_err(|e| match e {
                ScaleLoadError::Toml { source, .. } => ScaleLoadError::Toml {
                    path: path.to_string_lossy().to_string(),
                    source,
                },
                ScaleLoadError::Invalid { source, .. } => ScaleLoadError::Invalid {
                    path: path.to_string_lossy().to_string(),
                    source,
                },
                other => other,
            })
    }

    pub fn load_custom_str(&mut self, content: &str, overwrite: bool) -> Result<Vec<String>, ScaleLoadError> {
        let definitions: BTreeMap<String, ScaleDefinition> =
            toml::from_str(content).map_err(|e| ScaleLoadError::Toml {
                path: "<string>".to_string(),
                source: e,
            })?;

        let mut parsed = Vec::with_capacity(definitions.len());
        for (name, definition) in definitions {
            let scale = build_scale(&name, definition).map_err(|e| ScaleLoadError::Invalid {
                path: "<string>".to_string(),
                source: e,
            })?;
            parsed.push((name, scale));
        }

        let mut loaded = Vec::with_capacity(parsed.len());
        for (name, scale) in parsed {
            self.register(name.clone(), scale, overwrite)
                .map_err(|e| ScaleLoadError::Invalid {
                    path: "<string>".to_string(),
                    source: e,
                })?;
            loaded.push(name);
        }
        Ok(loaded)
    }
}

fn residue_key(scale: &str, key: &str) -> Result<AminoAcid, ScaleError> {
    key.parse::<AminoAcid>()
        .map_err(|_| ScaleError::UnknownResidue {
            scale: scale.to_string(),
            residue: key.to_string(),
        })
}

fn build_scale(name: &str, definition: ScaleDefinition) -> Result<Scale, ScaleError> {
    match definition {
        ScaleDefinition::Scalar { values } => {
            let mut table = [f64::NAN; 20];
            for (key, value) in &values {
                table[residue_key(name, key)?.index()] = *value;
            }
            if let Some(missing) = NATURAL_ALPHABET
                .chars()
                .zip(table.iter())
                .find(|(_, v)| v.is_nan())
            {
                return Err(ScaleError::MissingResidue {
                    scale: name.to_string(),
                    residue: missing.0,
                });
            }
            Ok(Scale::Scalar(table))
        }
        ScaleDefinition::Vector { vectors } => {
            let mut rows: Vec<Option<Vec<f64>>> = vec![None; 20];
            for (key, row) in vectors {
                let residue = residue_key(name, &key)?;
                rows[residue.index()] = Some(row);
            }

            let mut arity = None;
            let mut values = Vec::new();
            for (residue, row) in NATURAL_ALPHABET.chars().zip(rows) {
                let row = row.ok_or_else(|| ScaleError::MissingResidue {
                    scale: name.to_string(),
                    residue,
                })?;
                let expected = *arity.get_or_insert(row.len());
                if row.len() != expected || expected == 0 {
                    return Err(ScaleError::InconsistentArity {
                        scale: name.to_string(),
                        residue,
                        expected,
                        found: row.len(),
                    });
                }
                values.extend(row);
            }
            Ok(Scale::Vector {
                arity: arity.unwrap_or_default(),
                values,
            })
        }
    }
}
