//! Amphipathic helix templates built on the helical wheel.

use rand::Rng;
use rand::rngs::StdRng;

use super::{GeneratorFamily, SequenceGenerator};
use crate::core::models::residue::{AminoAcid, BASIC, HELIX_HYDROPHOBIC};
use crate::core::utils::wheel::{HELIX_ANGLE_DEG, in_sector, wheel_angle};
use crate::engine::config::{ConfigError, GenerationRequest, validate_arc};
use crate::engine::utils::sampling::WeightedPicker;

/// Residue pools of the polar and apolar helix faces.
#[derive(Debug, Clone)]
struct HelixFaces {
    polar: WeightedPicker<AminoAcid>,
    apolar: WeightedPicker<AminoAcid>,
}

impl HelixFaces {
    fn new() -> Result<Self, ConfigError> {
        let pool = |residues: &[AminoAcid]| {
            WeightedPicker::uniform(residues.to_vec())
                .map_err(|e| ConfigError::InvalidResidueSet(e.to_string()))
        };
        Ok(Self {
            polar: pool(BASIC)?,
            apolar: pool(HELIX_HYDROPHOBIC)?,
        })
    }

    /// Fills `length` positions; `polar_arc(i)` gives the polar sector width at
    /// position `i`, anchored at a random phase.
    fn build(
        &self,
        length: usize,
        rng: &mut StdRng,
        polar_arc: impl Fn(usize) -> f64,
    ) -> Vec<AminoAcid> {
        let phase = rng.gen_range(0.0..360.0);
        (0..length)
            .map(|i| {
                let angle = wheel_angle(i, HELIX_ANGLE_DEG, phase);
                if in_sector(angle, 0.0, polar_arc(i)) {
                    self.polar.pick(rng)
                } else {
                    self.apolar.pick(rng)
                }
            })
            .collect()
    }
}

fn to_sequence(residues: &[AminoAcid]) -> String {
    residues.iter().map(|aa| aa.symbol()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixConfig {
    /// Width of the polar sector in degrees.
    pub polar_arc: f64,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self { polar_arc: 100.0 }
    }
}

/// Amphipathic helices: basic residues on a polar sector, small hydrophobics
/// elsewhere.
#[derive(Debug, Clone)]
pub struct HelixGenerator {
    faces: HelixFaces,
    polar_arc: f64,
}

impl SequenceGenerator for HelixGenerator {
    type Config = HelixConfig;

    fn configure(config: HelixConfig) -> Result<Self, ConfigError> {
        validate_arc(config.polar_arc)?;
        Ok(Self {
            faces: HelixFaces::new()?,
            polar_arc: config.polar_arc,
        })
    }

    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Helices
    }

    fn tag(&self) -> String {
        "hel".to_string()
    }

    fn sample(&self, length: usize, rng: &mut StdRng) -> String {
        to_sequence(&self.faces.build(length, rng, |_| self.polar_arc))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinkedConfig {
    pub helix: HelixConfig,
    /// Number of contiguous kink residues.
    pub kink_length: usize,
}

impl Default for KinkedConfig {
    fn default() -> Self {
        Self {
            helix: HelixConfig::default(),
            kink_length: 1,
        }
    }
}

/// Helices broken by an internal proline/glycine kink.
#[derive(Debug, Clone)]
pub struct KinkedGenerator {
    helix: HelixGenerator,
    kink: WeightedPicker<AminoAcid>,
    kink_length: usize,
}

impl KinkedGenerator {
    pub fn kink_length(&self) -> usize {
        self.kink_length
    }
}

impl SequenceGenerator for KinkedGenerator {
    type Config = KinkedConfig;

    fn configure(config: KinkedConfig) -> Result<Self, ConfigError> {
        if config.kink_length == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "kink_length",
                reason: "must be at least 1".to_string(),
            });
        }
        let kink = WeightedPicker::new(vec![AminoAcid::Proline, AminoAcid::Glycine], &[3.0, 1.0])
            .map_err(|e| ConfigError::InvalidResidueSet(e.to_string()))?;
        Ok(Self {
            helix: HelixGenerator::configure(config.helix)?,
            kink,
            kink_length: config.kink_length,
        })
    }

    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Kinked
    }

    fn tag(&self) -> String {
        "knk".to_string()
    }

    fn validate(&self, request: &GenerationRequest) -> Result<(), ConfigError> {
        let required = self.kink_length + 2;
        if request.lengths.min() < required {
            return Err(ConfigError::InvalidParameter {
                name: "min_length",
                reason: format!(
                    "must be at least {required} to fit a {}-residue kink with flanking helix",
                    self.kink_length
                ),
            });
        }
        Ok(())
    }

    fn sample(&self, length: usize, rng: &mut StdRng) -> String {
        let mut residues = self
            .helix
            .faces
            .build(length, rng, |_| self.helix.polar_arc);
        if length >= self.kink_length + 2 {
            let start = rng.gen_range(1..=length - self.kink_length - 1);
            for residue in &mut residues[start..start + self.kink_length] {
                *residue = self.kink.pick(rng);
            }
        }
        to_sequence(&residues)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueConfig {
    /// Polar sector width at the N-terminus, in degrees.
    pub start_arc: f64,
    /// Polar sector width at the C-terminus, in degrees.
    pub end_arc: f64,
}

impl Default for ObliqueConfig {
    fn default() -> Self {
        Self {
            start_arc: 100.0,
            end_arc: 0.0,
        }
    }
}

/// Oblique-oriented helices whose polar sector narrows along the chain, leaving a
/// hydrophobic C-terminal tail.
#[derive(Debug, Clone)]
pub struct ObliqueGenerator {
    faces: HelixFaces,
    start_arc: f64,
    end_arc: f64,
}

impl SequenceGenerator for ObliqueGenerator {
    type Config = ObliqueConfig;

    fn configure(config: ObliqueConfig) -> Result<Self, ConfigError> {
        for arc in [config.start_arc, config.end_arc] {
            if !(0.0..=360.0).contains(&arc) {
                return Err(ConfigError::InvalidArc(arc));
            }
        }
        Ok(Self {
            faces: HelixFaces::new()?,
            start_arc: config.start_arc,
            end_arc: config.end_arc,
        })
    }

    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Oblique
    }

    fn tag(&self) -> String {
        "obl".to_string()
    }

    fn sample(&self, length: usize, rng: &mut StdRng) -> String {
        let last = length.saturating_sub(1).max(1) as f64;
        let drift = self.end_arc - self.start_arc;
        let residues = self
            .faces
            .build(length, rng, |i| self.start_arc + drift * i as f64 / last);
        to_sequence(&residues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::LengthRange;
    use rand::SeedableRng;

    fn request(count: usize, min: usize, max: usize) -> GenerationRequest {
        GenerationRequest::new(count, LengthRange::new(min, max).unwrap(), 17).unwrap()
    }

    fn is_polar(c: char) -> bool {
        c == 'K' || c == 'R'
    }

    #[test]
    fn helices_use_face_residues_only() {
        let helices = HelixGenerator::configure(HelixConfig::default()).unwrap();
        let collection = helices.generate(&request(40, 7, 28)).unwrap();
        assert_eq!(collection.len(), 40);
        assert_eq!(collection.names()[3], "hel_3");
        for sequence in collection.sequences() {
            assert!(sequence.chars().all(|c| "KRGALIV".contains(c)), "{sequence}");
        }
    }

    #[test]
    fn polar_sector_covers_five_of_eighteen_positions() {
        let helices = HelixGenerator::configure(HelixConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let sequence = helices.sample(18, &mut rng);
            assert_eq!(sequence.chars().filter(|&c| is_polar(c)).count(), 5);
        }
    }

    #[test]
    fn helix_rejects_invalid_arc() {
        for polar_arc in [0.0, 400.0] {
            assert_eq!(
                HelixGenerator::configure(HelixConfig { polar_arc }).unwrap_err(),
                ConfigError::InvalidArc(polar_arc)
            );
        }
    }

    #[test]
    fn kink_is_internal() {
        let kinked = KinkedGenerator::configure(KinkedConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let sequence = kinked.sample(12, &mut rng);
            assert_eq!(sequence.len(), 12);
            assert!(sequence.matches('P').count() <= 1);
            assert!(!sequence.starts_with('P') && !sequence.ends_with('P'));
        }
    }

    #[test]
    fn kinked_requires_room_for_flanks() {
        let kinked = KinkedGenerator::configure(KinkedConfig {
            kink_length: 3,
            ..KinkedConfig::default()
        })
        .unwrap();
        assert!(matches!(
            kinked.generate(&request(5, 4, 10)),
            Err(crate::engine::error::EngineError::Config {
                source: ConfigError::InvalidParameter {
                    name: "min_length",
                    ..
                }
            })
        ));
        let collection = kinked.generate(&request(5, 5, 10)).unwrap();
        assert_eq!(collection.names()[0], "knk_0");
    }

    #[test]
    fn oblique_tail_is_hydrophobic() {
        let oblique = ObliqueGenerator::configure(ObliqueConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let (mut head, mut tail) = (0, 0);
        for _ in 0..200 {
            let sequence: Vec<char> = oblique.sample(20, &mut rng).chars().collect();
            head += sequence[..5].iter().filter(|&&c| is_polar(c)).count();
            tail += sequence[15..].iter().filter(|&&c| is_polar(c)).count();
        }
        assert!(head > tail, "head {head} vs tail {tail}");
    }

    #[test]
    fn oblique_rejects_negative_arc() {
        let result = ObliqueGenerator::configure(ObliqueConfig {
            start_arc: 100.0,
            end_arc: -1.0,
        });
        assert_eq!(result.unwrap_err(), ConfigError::InvalidArc(-1.0));
    }
}
