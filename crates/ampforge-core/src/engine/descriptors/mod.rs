//! Descriptor computation over a [`SequenceCollection`].
//!
//! The [`DescriptorEngine`] resolves scales from an explicit [`ScaleRegistry`], evaluates
//! one row per sequence (in parallel with the `parallel` feature) and writes the
//! resulting columns back into the collection in row order.

pub mod global;
pub mod profile;

use crate::core::models::collection::SequenceCollection;
use crate::core::models::ids::SequenceId;
use crate::core::models::residue::AminoAcid;
use crate::core::scales::registry::{BOMAN, ScaleRegistry};
use crate::core::scales::scale::{Scale, ScaleError, ScaleShape};
use crate::engine::config::{GlobalConfig, MomentConfig, validate_window};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use global::GlobalDescriptor;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A row whose descriptors could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorFailure {
    pub id: SequenceId,
    pub name: String,
    pub error: ScaleError,
}

/// Outcome of one descriptor computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorReport {
    /// Columns written, in order.
    pub columns: Vec<String>,
    /// Rows whose values were set to undefined.
    pub failures: Vec<DescriptorFailure>,
}

impl DescriptorReport {
    pub fn merge(&mut self, other: DescriptorReport) {
        self.columns.extend(other.columns);
        self.failures.extend(other.failures);
    }
}

pub struct DescriptorEngine<'a> {
    registry: &'a ScaleRegistry,
    reporter: Option<&'a ProgressReporter<'a>>,
}

impl<'a> DescriptorEngine<'a> {
    pub fn new(registry: &'a ScaleRegistry) -> Self {
        Self {
            registry,
            reporter: None,
        }
    }

    pub fn with_reporter(mut self, reporter: &'a ProgressReporter<'a>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Computes the selected global descriptors, one column each.
    #[instrument(skip_all, name = "global_descriptors")]
    pub fn global(
        &self,
        collection: &mut SequenceCollection,
        descriptors: &[GlobalDescriptor],
        config: &GlobalConfig,
    ) -> Result<DescriptorReport, EngineError> {
        config.validate()?;
        let boman = self.registry.lookup(BOMAN)?;
        if boman.shape() != ScaleShape::Scalar {
            return Err(ScaleError::ShapeMismatch {
                scale: BOMAN.to_string(),
                expected: ScaleShape::Scalar,
                found: boman.shape(),
            }
            .into());
        }

        let columns: Vec<String> = descriptors
            .iter()
            .map(|d| d.column_name().to_string())
            .collect();

        self.compute(collection, columns, |sequence| {
            let residues = parse_natural(sequence, "global descriptors")?;
            Ok(descriptors
                .iter()
                .map(|&d| global::evaluate(d, &residues, config, boman))
                .collect())
        })
    }

    /// Centred autocorrelation of `scale` for lags `1..=window`.
    #[instrument(skip_all, name = "autocorrelation", fields(scale = scale_name, window = window))]
    pub fn autocorrelation(
        &self,
        collection: &mut SequenceCollection,
        scale_name: &str,
        window: usize,
    ) -> Result<DescriptorReport, EngineError> {
        validate_window("window", window)?;
        let scale = self.per_residue_scale(scale_name)?;
        let mean = scale.mean();
        let columns = profile::autocorrelation_columns(scale_name, window, scale.arity());

        self.compute(collection, columns, |sequence| {
            let encoded = scale.encode(scale_name, sequence)?;
            Ok(profile::autocorrelation(&encoded, &mean, window))
        })
    }

    /// Centred cross-correlation between two scales of equal arity.
    #[instrument(skip_all, name = "cross_correlation", fields(first = first, second = second, window = window))]
    pub fn cross_correlation(
        &self,
        collection: &mut SequenceCollection,
        first: &str,
        second: &str,
        window: usize,
    ) -> Result<DescriptorReport, EngineError> {
        validate_window("window", window)?;
        let first_scale = self.per_residue_scale(first)?;
        let second_scale = self.per_residue_scale(second)?;
        if first_scale.arity() != second_scale.arity() {
            return Err(ScaleError::ArityMismatch {
                first: first.to_string(),
                first_arity: first_scale.arity(),
                second: second.to_string(),
                second_arity: second_scale.arity(),
            }
            .into());
        }
        let first_mean = first_scale.mean();
        let second_mean = second_scale.mean();
        let columns =
            profile::cross_correlation_columns(first, second, window, first_scale.arity());

        self.compute(collection, columns, |sequence| {
            let a = first_scale.encode(first, sequence)?;
            let b = second_scale.encode(second, sequence)?;
            Ok(profile::cross_correlation(
                &a,
                &first_mean,
                &b,
                &second_mean,
                window,
            ))
        })
    }

    /// Hydrophobic moment of `scale`, one column per scale dimension.
    #[instrument(skip_all, name = "moment", fields(scale = scale_name))]
    pub fn moment(
        &self,
        collection: &mut SequenceCollection,
        scale_name: &str,
        config: &MomentConfig,
    ) -> Result<DescriptorReport, EngineError> {
        config.validate()?;
        let scale = self.per_residue_scale(scale_name)?;
        let arity = scale.arity();
        let columns = profile::moment_columns(scale_name, arity);

        self.compute(collection, columns, |sequence| {
            let encoded = scale.encode(scale_name, sequence)?;
            Ok(profile::moment(
                &encoded,
                arity,
                config.angle,
                config.window,
                config.modality,
            ))
        })
    }

    /// Sliding-window mean of a scalar scale for every sequence, in collection order.
    ///
    /// The profile is returned rather than stored. Sequences shorter than the window
    /// or containing residues without a scale value yield `None`.
    #[instrument(skip_all, name = "sliding_profile", fields(scale = scale_name, window = window))]
    pub fn sliding_profile(
        &self,
        collection: &SequenceCollection,
        scale_name: &str,
        window: usize,
    ) -> Result<Vec<Option<Vec<f64>>>, EngineError> {
        validate_window("window", window)?;
        let scale = self.registry.lookup(scale_name)?;
        if scale.shape() != ScaleShape::Scalar {
            return Err(ScaleError::ShapeMismatch {
                scale: scale_name.to_string(),
                expected: ScaleShape::Scalar,
                found: scale.shape(),
            }
            .into());
        }

        let sequences = collection.sequences();

        #[cfg(not(feature = "parallel"))]
        let iterator = sequences.iter();

        #[cfg(feature = "parallel")]
        let iterator = sequences.par_iter();

        Ok(iterator
            .map(|sequence| {
                let encoded = scale.encode(scale_name, sequence).ok()?;
                let values: Vec<f64> = encoded.iter().map(|v| v[0]).collect();
                profile::sliding_profile(&values, window)
            })
            .collect())
    }

    fn per_residue_scale(&self, name: &str) -> Result<&'a Scale, ScaleError> {
        let scale = self.registry.lookup(name)?;
        if scale.shape() == ScaleShape::Pairwise {
            return Err(ScaleError::ShapeMismatch {
                scale: name.to_string(),
                expected: ScaleShape::Vector,
                found: ScaleShape::Pairwise,
            });
        }
        Ok(scale)
    }

    /// Evaluates `row` for every sequence and writes `columns`.
    ///
    /// A row that fails gets undefined values and is recorded as a failure; the other
    /// rows are unaffected.
    fn compute<F>(
        &self,
        collection: &mut SequenceCollection,
        columns: Vec<String>,
        row: F,
    ) -> Result<DescriptorReport, EngineError>
    where
        F: Fn(&str) -> Result<Vec<Option<f64>>, ScaleError> + Sync,
    {
        let rows: Vec<(SequenceId, &str)> = collection
            .iter()
            .map(|(id, entry)| (id, entry.sequence.as_str()))
            .collect();

        self.report(Progress::TaskStart {
            total_steps: rows.len() as u64,
        });

        #[cfg(not(feature = "parallel"))]
        let iterator = rows.iter();

        #[cfg(feature = "parallel")]
        let iterator = rows.par_iter();

        let results: Vec<Result<Vec<Option<f64>>, ScaleError>> = iterator
            .map(|&(_, sequence)| {
                let result = row(sequence);
                self.report(Progress::TaskIncrement);
                result
            })
            .collect();

        self.report(Progress::TaskFinish);

        let width = columns.len();
        let mut failures = Vec::new();
        let values: Vec<Vec<Option<f64>>> = rows
            .iter()
            .zip(results)
            .map(|(&(id, _), result)| match result {
                Ok(values) => values,
                Err(error) => {
                    failures.push((id, error));
                    vec![None; width]
                }
            })
            .collect();

        collection.set_columns(&columns, values)?;

        let failures: Vec<DescriptorFailure> = failures
            .into_iter()
            .map(|(id, error)| DescriptorFailure {
                id,
                name: collection
                    .get(id)
                    .map(|e| e.name.clone())
                    .unwrap_or_default(),
                error,
            })
            .collect();

        if !failures.is_empty() {
            warn!(
                failed = failures.len(),
                "Some sequences contain residues without scale values; their descriptors are undefined."
            );
        }
        info!(
            columns = width,
            rows = collection.len(),
            "Descriptor columns written."
        );

        Ok(DescriptorReport { columns, failures })
    }

    fn report(&self, event: Progress) {
        if let Some(reporter) = self.reporter {
            reporter.report(event);
        }
    }
}

fn parse_natural(sequence: &str, table: &str) -> Result<Vec<AminoAcid>, ScaleError> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            AminoAcid::from_symbol(symbol).ok_or_else(|| ScaleError::InvalidResidue {
                scale: table.to_string(),
                residue: symbol,
                position,
            })
        })
        .collect()
}
