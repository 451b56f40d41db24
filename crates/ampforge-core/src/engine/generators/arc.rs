//! Amphipathic peptides with a hydrophobic arc of chosen size on the helical wheel.

use itertools::Itertools;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

use super::{GeneratorFamily, SequenceGenerator};
use crate::core::models::collection::SequenceCollection;
use crate::core::models::residue::{ARC_HYDROPHOBIC, AminoAcid, BASIC};
use crate::core::utils::random::derive_seed;
use crate::core::utils::wheel::{HELIX_ANGLE_DEG, in_sector, wheel_angle};
use crate::engine::config::{ConfigError, GenerationRequest, validate_arc};
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::utils::sampling::WeightedPicker;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcConfig {
    /// Hydrophobic arc size in degrees, within (0, 360].
    pub arc: f64,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self { arc: 180.0 }
    }
}

#[derive(Debug, Clone)]
pub struct ArcGenerator {
    hydrophobic: WeightedPicker<AminoAcid>,
    polar: WeightedPicker<AminoAcid>,
    arc: f64,
}

impl ArcGenerator {
    pub fn arc(&self) -> f64 {
        self.arc
    }
}

impl SequenceGenerator for ArcGenerator {
    type Config = ArcConfig;

    fn configure(config: ArcConfig) -> Result<Self, ConfigError> {
        validate_arc(config.arc)?;
        let pool = |residues: &[AminoAcid]| {
            WeightedPicker::uniform(residues.to_vec())
                .map_err(|e| ConfigError::InvalidResidueSet(e.to_string()))
        };
        Ok(Self {
            hydrophobic: pool(ARC_HYDROPHOBIC)?,
            polar: pool(BASIC)?,
            arc: config.arc,
        })
    }

    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::AmphipathicArc
    }

    fn tag(&self) -> String {
        format!("arc{}", self.arc)
    }

    fn sample(&self, length: usize, rng: &mut StdRng) -> String {
        let phase = rng.gen_range(0.0..360.0);
        (0..length)
            .map(|i| {
                let angle = wheel_angle(i, HELIX_ANGLE_DEG, phase);
                let residue = if in_sector(angle, 0.0, self.arc) {
                    self.hydrophobic.pick(rng)
                } else {
                    self.polar.pick(rng)
                };
                residue.symbol()
            })
            .collect()
    }
}

/// Generates one sub-population per arc size, splitting `request.count` as evenly as
/// possible (earlier arcs take the remainder). Repeated arc sizes are generated once,
/// in order of first appearance.
///
/// Rows are named `arc<deg>_<index>`, with indices restarting for every arc.
#[instrument(skip_all, name = "mixed_arcs", fields(count = request.count, arcs = arcs.len()))]
pub fn generate_mixed_arcs(
    request: &GenerationRequest,
    arcs: &[f64],
    reporter: &ProgressReporter,
) -> Result<SequenceCollection, EngineError> {
    if arcs.is_empty() {
        return Err(ConfigError::MissingParameter("arcs").into());
    }
    let mut unique: Vec<f64> = Vec::with_capacity(arcs.len());
    for &arc in arcs {
        if !unique.contains(&arc) {
            unique.push(arc);
        }
    }
    let arcs = unique.as_slice();
    let generators = arcs
        .iter()
        .map(|&arc| ArcGenerator::configure(ArcConfig { arc }))
        .collect::<Result<Vec<_>, _>>()?;

    let share = request.count / arcs.len();
    let remainder = request.count % arcs.len();
    let mut collection = SequenceCollection::new();
    for (i, generator) in generators.iter().enumerate() {
        let count = share + usize::from(i < remainder);
        if count == 0 {
            continue;
        }
        let sub_request = GenerationRequest {
            count,
            lengths: request.lengths,
            seed: derive_seed(request.seed, i as u64),
        };
        collection.extend(generator.generate_with_progress(&sub_request, reporter)?);
    }
    info!(rows = collection.len(), "Generated amphipathic-arc population.");
    Ok(collection)
}

/// The hydrophobic gradient spanned by `arcs`: `(arc, hydrophobic fraction)` pairs
/// sorted by arc size, duplicates removed.
pub fn make_h_gradient(arcs: &[f64]) -> Result<Vec<(f64, f64)>, ConfigError> {
    for &arc in arcs {
        validate_arc(arc)?;
    }
    Ok(arcs
        .iter()
        .copied()
        .sorted_by(f64::total_cmp)
        .dedup()
        .map(|arc| (arc, arc / 360.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scales::registry::{EISENBERG, ScaleRegistry};
    use crate::engine::config::{LengthRange, MomentConfig};
    use crate::engine::descriptors::DescriptorEngine;
    use rand::SeedableRng;

    fn request(count: usize, length: usize) -> GenerationRequest {
        GenerationRequest::new(count, LengthRange::fixed(length).unwrap(), 11).unwrap()
    }

    #[test]
    fn arc_outside_range_is_rejected() {
        for arc in [0.0, -10.0, 360.5] {
            assert_eq!(
                ArcGenerator::configure(ArcConfig { arc }).unwrap_err(),
                ConfigError::InvalidArc(arc)
            );
        }
    }

    #[test]
    fn full_arc_is_entirely_hydrophobic() {
        let generator = ArcGenerator::configure(ArcConfig { arc: 360.0 }).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let sequence = generator.sample(24, &mut rng);
        assert!(sequence.chars().all(|c| "AILVFW".contains(c)), "{sequence}");
    }

    #[test]
    fn mixed_arcs_split_count_and_name_rows() {
        let collection =
            generate_mixed_arcs(&request(10, 18), &[100.0, 180.0, 60.0], &ProgressReporter::new())
                .unwrap();
        assert_eq!(collection.len(), 10);
        let names = collection.names();
        assert_eq!(names.iter().filter(|n| n.starts_with("arc100_")).count(), 4);
        assert_eq!(names.iter().filter(|n| n.starts_with("arc180_")).count(), 3);
        assert_eq!(names.iter().filter(|n| n.starts_with("arc60_")).count(), 3);
        assert_eq!(names[0], "arc100_0");
    }

    #[test]
    fn repeated_arcs_are_generated_once() {
        let collection = generate_mixed_arcs(
            &request(10, 18),
            &[100.0, 180.0, 100.0],
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(collection.len(), 10);
        let names = collection.names();
        assert_eq!(names.iter().filter(|n| n.starts_with("arc100_")).count(), 5);
        assert_eq!(names.iter().filter(|n| n.starts_with("arc180_")).count(), 5);
        let unique: std::collections::HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn mixed_arcs_require_at_least_one_arc() {
        let result = generate_mixed_arcs(&request(10, 18), &[], &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(EngineError::Config {
                source: ConfigError::MissingParameter("arcs")
            })
        ));
    }

    #[test]
    fn larger_arcs_give_non_decreasing_mean_moment() {
        let arcs = [60.0, 100.0, 140.0, 180.0];
        let mut collection =
            generate_mixed_arcs(&request(800, 18), &arcs, &ProgressReporter::new()).unwrap();
        let registry = ScaleRegistry::with_defaults();
        DescriptorEngine::new(&registry)
            .moment(&mut collection, EISENBERG, &MomentConfig::default())
            .unwrap();

        let moments = collection.column("moment_eisenberg").unwrap();
        let names = collection.names();
        let means: Vec<f64> = arcs
            .iter()
            .map(|arc| {
                let prefix = format!("arc{arc}_");
                let values: Vec<f64> = names
                    .iter()
                    .zip(&moments)
                    .filter(|(name, _)| name.starts_with(&prefix))
                    .filter_map(|(_, value)| *value)
                    .collect();
                values.iter().sum::<f64>() / values.len() as f64
            })
            .collect();
        for pair in means.windows(2) {
            assert!(pair[0] <= pair[1], "mean moments {means:?}");
        }
    }

    #[test]
    fn gradient_is_sorted_and_deduplicated() {
        let gradient = make_h_gradient(&[180.0, 60.0, 180.0]).unwrap();
        assert_eq!(gradient, vec![(60.0, 60.0 / 360.0), (180.0, 0.5)]);
        assert!(make_h_gradient(&[0.0]).is_err());
    }
}
