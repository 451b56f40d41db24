//! Mixed libraries combining several generator families in fixed proportions.

use std::collections::BTreeMap;

use tracing::{info, instrument, warn};

use super::SequenceGenerator;
use super::centrosymmetric::{
    BLOCK_LENGTH, CentrosymmetricConfig, CentrosymmetricGenerator, Symmetry,
};
use super::helical::{
    HelixConfig, HelixGenerator, KinkedConfig, KinkedGenerator, ObliqueConfig, ObliqueGenerator,
};
use super::random::{AminoAcidProfile, RandomComposition, RandomConfig, RandomGenerator};
use crate::core::models::collection::SequenceCollection;
use crate::core::models::residue::{AminoAcid, WILDCARD};
use crate::core::utils::random::derive_seed;
use crate::engine::config::{ConfigError, GenerationRequest, GlobalConfig, LengthRange};
use crate::engine::descriptors::global::net_charge;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Member {
    Symmetric,
    Asymmetric,
    Helices,
    Kinked,
    Oblique,
    Random,
    Amp,
    AmpNoCm,
}

impl Member {
    fn name(self) -> &'static str {
        match self {
            Member::Symmetric => "symmetric",
            Member::Asymmetric => "asymmetric",
            Member::Helices => "helices",
            Member::Kinked => "kinked",
            Member::Oblique => "oblique",
            Member::Random => "random",
            Member::Amp => "amp",
            Member::AmpNoCm => "amp-no-cm",
        }
    }

    fn generate(
        self,
        request: &GenerationRequest,
        reporter: &ProgressReporter,
    ) -> Result<SequenceCollection, EngineError> {
        let random = |profile| {
            RandomGenerator::configure(RandomConfig {
                composition: RandomComposition::Profile(profile),
            })
        };
        let centrosymmetric = |symmetry: Symmetry| -> Result<SequenceCollection, EngineError> {
            let block_request = GenerationRequest {
                lengths: block_lengths(request.lengths),
                ..*request
            };
            CentrosymmetricGenerator::configure(CentrosymmetricConfig { symmetry })?
                .generate_with_progress(&block_request, reporter)
        };

        match self {
            Member::Symmetric => centrosymmetric(Symmetry::Symmetric),
            Member::Asymmetric => centrosymmetric(Symmetry::Asymmetric),
            Member::Helices => HelixGenerator::configure(HelixConfig::default())?
                .generate_with_progress(request, reporter),
            Member::Kinked => KinkedGenerator::configure(KinkedConfig::default())?
                .generate_with_progress(request, reporter),
            Member::Oblique => ObliqueGenerator::configure(ObliqueConfig::default())?
                .generate_with_progress(request, reporter),
            Member::Random => {
                random(AminoAcidProfile::Uniform)?.generate_with_progress(request, reporter)
            }
            Member::Amp => random(AminoAcidProfile::Amp)?.generate_with_progress(request, reporter),
            Member::AmpNoCm => {
                random(AminoAcidProfile::AmpNoCm)?.generate_with_progress(request, reporter)
            }
        }
    }
}

/// Centrosymmetric library members are built from two or three blocks.
const LIBRARY_BLOCK_LENGTHS: (usize, usize) = (2 * BLOCK_LENGTH, 3 * BLOCK_LENGTH);

/// Narrows `lengths` to two or three blocks; a range that does not overlap them is
/// kept as is.
fn block_lengths(lengths: LengthRange) -> LengthRange {
    let (low, high) = LIBRARY_BLOCK_LENGTHS;
    LengthRange::new(lengths.min().max(low), lengths.max().min(high)).unwrap_or(lengths)
}

/// Relative share of every family in a mixed library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibraryRatios {
    pub symmetric: f64,
    pub asymmetric: f64,
    pub helices: f64,
    pub kinked: f64,
    pub oblique: f64,
    pub random: f64,
    pub amp: f64,
    pub amp_no_cm: f64,
}

impl Default for LibraryRatios {
    fn default() -> Self {
        Self {
            symmetric: 1.0,
            asymmetric: 1.0,
            helices: 1.0,
            kinked: 1.0,
            oblique: 1.0,
            random: 1.0,
            amp: 1.0,
            amp_no_cm: 1.0,
        }
    }
}

impl LibraryRatios {
    fn members(&self) -> [(Member, f64); 8] {
        [
            (Member::Symmetric, self.symmetric),
            (Member::Asymmetric, self.asymmetric),
            (Member::Helices, self.helices),
            (Member::Kinked, self.kinked),
            (Member::Oblique, self.oblique),
            (Member::Random, self.random),
            (Member::Amp, self.amp),
            (Member::AmpNoCm, self.amp_no_cm),
        ]
    }

    /// Rounded number of sequences per family for a library of `count`.
    fn counts(&self, count: usize) -> Result<Vec<(Member, usize)>, ConfigError> {
        let members = self.members();
        if members.iter().any(|(_, r)| !(r.is_finite() && *r >= 0.0)) {
            return Err(ConfigError::InvalidParameter {
                name: "ratios",
                reason: "every ratio must be finite and non-negative".to_string(),
            });
        }
        let total: f64 = members.iter().map(|(_, r)| r).sum();
        if total <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "ratios",
                reason: "at least one ratio must be positive".to_string(),
            });
        }
        Ok(members
            .iter()
            .map(|&(member, ratio)| (member, (count as f64 * ratio / total).round() as usize))
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibraryConfig {
    pub count: usize,
    pub lengths: LengthRange,
    pub seed: u64,
    pub ratios: LibraryRatios,
}

impl LibraryConfig {
    /// A library of `count` sequences of 7 to 28 residues with equal family shares.
    pub fn new(count: usize, seed: u64) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        Ok(Self {
            count,
            lengths: LengthRange::new(7, 28)?,
            seed,
            ratios: LibraryRatios::default(),
        })
    }
}

/// Bounds applied by [`MixedLibrary::prune_library`]. Bounds are inclusive; `None`
/// leaves that property unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PruneCriteria {
    pub charge: Option<(f64, f64)>,
    pub length: Option<(usize, usize)>,
    /// Conditions under which the net charge is evaluated.
    pub global: GlobalConfig,
}

#[derive(Debug, Clone, Default)]
pub struct MixedLibrary {
    collection: SequenceCollection,
}

impl MixedLibrary {
    /// Generates every family with a non-zero share, then drops duplicate sequences
    /// and sequences containing the wildcard residue.
    #[instrument(skip_all, name = "mixed_library", fields(count = config.count, seed = config.seed))]
    pub fn generate(
        config: &LibraryConfig,
        reporter: &ProgressReporter,
    ) -> Result<Self, EngineError> {
        let counts = config.ratios.counts(config.count)?;
        let mut collection = SequenceCollection::new();
        for (index, (member, count)) in counts.into_iter().enumerate() {
            if count == 0 {
                continue;
            }
            let request = GenerationRequest::new(
                count,
                config.lengths,
                derive_seed(config.seed, index as u64),
            )?;
            let part = reporter.phase(member.name(), || member.generate(&request, reporter))?;
            collection.extend(part);
        }

        let duplicates = collection.filter_duplicates();
        let wildcards = collection.filter_aa(&[WILDCARD]);
        if duplicates + wildcards > 0 {
            warn!(duplicates, wildcards, "Removed rows from generated library.");
        }
        info!(rows = collection.len(), "Generated mixed library.");
        Ok(Self { collection })
    }

    /// Removes rows whose net charge or length falls outside `criteria`. Returns the
    /// number of removed rows.
    pub fn prune_library(&mut self, criteria: &PruneCriteria) -> usize {
        let global = criteria.global;
        self.collection.retain(|entry| {
            if let Some((min, max)) = criteria.length {
                if !(min..=max).contains(&entry.sequence.len()) {
                    return false;
                }
            }
            if let Some((min, max)) = criteria.charge {
                let residues: Option<Vec<AminoAcid>> =
                    entry.sequence.chars().map(AminoAcid::from_symbol).collect();
                let Some(residues) = residues else {
                    return false;
                };
                let charge = net_charge(&residues, global.ph, global.pka, global.terminus);
                if !(min..=max).contains(&charge) {
                    return false;
                }
            }
            true
        })
    }

    /// Keeps the first `newsize` rows.
    pub fn truncate(&mut self, newsize: usize) {
        self.collection.truncate(newsize);
    }

    /// Number of rows per family tag, as currently present.
    pub fn family_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for name in self.collection.names() {
            let tag = name.rsplit_once('_').map_or(name, |(tag, _)| tag);
            *counts.entry(tag.to_string()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn collection(&self) -> &SequenceCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut SequenceCollection {
        &mut self.collection
    }

    pub fn into_collection(self) -> SequenceCollection {
        self.collection
    }
}
