//! Centrosymmetric peptides assembled from 7-residue blocks `[h,+,h,a,h,+,h]`.
//!
//! Within a block, positions mirrored around the central aromatic anchor carry the
//! same residue.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{GeneratorFamily, SequenceGenerator};
use crate::core::models::residue::{ANCHOR, AminoAcid, BASIC, HELIX_HYDROPHOBIC};
use crate::engine::config::{ConfigError, GenerationRequest, LengthRange};
use crate::engine::utils::sampling::WeightedPicker;

pub const BLOCK_LENGTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symmetry {
    /// One block repeated along the whole sequence.
    #[default]
    Symmetric,
    /// Every block drawn independently.
    Asymmetric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CentrosymmetricConfig {
    pub symmetry: Symmetry,
}

#[derive(Debug, Clone)]
pub struct CentrosymmetricGenerator {
    hydrophobic: WeightedPicker<AminoAcid>,
    basic: WeightedPicker<AminoAcid>,
    anchor: WeightedPicker<AminoAcid>,
    symmetry: Symmetry,
}

impl CentrosymmetricGenerator {
    fn block(&self, rng: &mut StdRng) -> [AminoAcid; BLOCK_LENGTH] {
        let outer = self.hydrophobic.pick(rng);
        let charged = self.basic.pick(rng);
        let inner = self.hydrophobic.pick(rng);
        let anchor = self.anchor.pick(rng);
        [outer, charged, inner, anchor, inner, charged, outer]
    }
}

/// Lengths within `lengths` made of whole blocks.
fn block_lengths(lengths: &LengthRange) -> Vec<usize> {
    (lengths.min()..=lengths.max())
        .filter(|length| length % BLOCK_LENGTH == 0)
        .collect()
}

impl SequenceGenerator for CentrosymmetricGenerator {
    type Config = CentrosymmetricConfig;

    fn configure(config: CentrosymmetricConfig) -> Result<Self, ConfigError> {
        let pool = |residues: &[AminoAcid]| {
            WeightedPicker::uniform(residues.to_vec())
                .map_err(|e| ConfigError::InvalidResidueSet(e.to_string()))
        };
        Ok(Self {
            hydrophobic: pool(HELIX_HYDROPHOBIC)?,
            basic: pool(BASIC)?,
            anchor: pool(ANCHOR)?,
            symmetry: config.symmetry,
        })
    }

    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Centrosymmetric
    }

    fn tag(&self) -> String {
        match self.symmetry {
            Symmetry::Symmetric => "sym",
            Symmetry::Asymmetric => "asy",
        }
        .to_string()
    }

    fn validate(&self, request: &GenerationRequest) -> Result<(), ConfigError> {
        if block_lengths(&request.lengths).is_empty() {
            return Err(ConfigError::NoBlockLength {
                min: request.lengths.min(),
                max: request.lengths.max(),
                block: BLOCK_LENGTH,
            });
        }
        Ok(())
    }

    fn draw_length(&self, lengths: &LengthRange, rng: &mut StdRng) -> usize {
        block_lengths(lengths)
            .choose(rng)
            .copied()
            .unwrap_or_else(|| lengths.max())
    }

    /// Lengths that are not a multiple of the block size get a truncated last block.
    fn sample(&self, length: usize, rng: &mut StdRng) -> String {
        let blocks = length.div_ceil(BLOCK_LENGTH);
        let mut residues = Vec::with_capacity(blocks * BLOCK_LENGTH);
        match self.symmetry {
            Symmetry::Symmetric => {
                let block = self.block(rng);
                for _ in 0..blocks {
                    residues.extend_from_slice(&block);
                }
            }
            Symmetry::Asymmetric => {
                for _ in 0..blocks {
                    residues.extend(self.block(rng));
                }
            }
        }
        residues.truncate(length);
        residues.iter().map(|aa| aa.symbol()).collect()
    }
}
