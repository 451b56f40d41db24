use rand::rngs::StdRng;

use super::{GeneratorFamily, SequenceGenerator};
use crate::core::models::residue::AminoAcid;
use crate::engine::config::ConfigError;
use crate::engine::utils::sampling::WeightedPicker;

/// Residue frequencies from the Antimicrobial Peptide Database (APD3), in
/// [`AminoAcid::ALL`] order.
const AMP_FREQUENCIES: [f64; 20] = [
    0.0766, 0.071, 0.026, 0.0264, 0.0405, 0.1172, 0.021, 0.061, 0.0958, 0.0838, 0.0123,
    0.0386, 0.0463, 0.0251, 0.0545, 0.0613, 0.0455, 0.0572, 0.0155, 0.0244,
];

/// APD3 frequencies with C and M removed and their mass spread over the others.
const AMP_NO_CM_FREQUENCIES: [f64; 20] = [
    0.0812275, 0.0, 0.0306275, 0.0310275, 0.0451275, 0.1218275, 0.0256275, 0.0656275,
    0.1004275, 0.0884275, 0.0, 0.0432275, 0.0509275, 0.0297275, 0.0591275, 0.0659275,
    0.0501275, 0.0618275, 0.0201275, 0.0290275,
];

/// Residue probability profile of a random generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AminoAcidProfile {
    /// Every natural residue with probability 1/20.
    #[default]
    Uniform,
    /// APD3 antimicrobial peptide frequencies.
    Amp,
    /// APD3 frequencies without cysteine and methionine.
    AmpNoCm,
    /// Uniform over the 18 residues other than cysteine and methionine.
    UniformNoCm,
}

impl AminoAcidProfile {
    pub fn weights(self) -> [f64; 20] {
        match self {
            AminoAcidProfile::Uniform => [0.05; 20],
            AminoAcidProfile::Amp => AMP_FREQUENCIES,
            AminoAcidProfile::AmpNoCm => AMP_NO_CM_FREQUENCIES,
            AminoAcidProfile::UniformNoCm => {
                let mut weights = [1.0 / 18.0; 20];
                weights[AminoAcid::Cysteine.index()] = 0.0;
                weights[AminoAcid::Methionine.index()] = 0.0;
                weights
            }
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            AminoAcidProfile::Uniform => "ran",
            AminoAcidProfile::Amp => "AMP",
            AminoAcidProfile::AmpNoCm => "nCM",
            AminoAcidProfile::UniformNoCm => "rnc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomComposition {
    Profile(AminoAcidProfile),
    /// Uniform over a custom set of natural residues.
    Alphabet(String),
}

impl Default for RandomComposition {
    fn default() -> Self {
        RandomComposition::Profile(AminoAcidProfile::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomConfig {
    pub composition: RandomComposition,
}

/// Independent residues drawn from a fixed probability profile.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    picker: WeightedPicker<char>,
    tag: &'static str,
}

impl RandomGenerator {
    pub fn residues(&self) -> &[char] {
        self.picker.items()
    }
}

impl SequenceGenerator for RandomGenerator {
    type Config = RandomConfig;

    fn configure(config: RandomConfig) -> Result<Self, ConfigError> {
        let (picker, tag) = match config.composition {
            RandomComposition::Profile(profile) => {
                let symbols = AminoAcid::ALL.iter().map(|aa| aa.symbol()).collect();
                let picker = WeightedPicker::new(symbols, &profile.weights()).map_err(|e| {
                    ConfigError::InvalidResidueSet(format!("{profile:?} profile: {e}"))
                })?;
                (picker, profile.tag())
            }
            RandomComposition::Alphabet(alphabet) => {
                let mut symbols: Vec<char> = Vec::new();
                for symbol in alphabet.chars().map(|c| c.to_ascii_uppercase()) {
                    if AminoAcid::from_symbol(symbol).is_none() {
                        return Err(ConfigError::InvalidResidueSet(format!(
                            "'{symbol}' is not a natural amino acid"
                        )));
                    }
                    if !symbols.contains(&symbol) {
                        symbols.push(symbol);
                    }
                }
                let picker = WeightedPicker::uniform(symbols).map_err(|_| {
                    ConfigError::InvalidResidueSet("alphabet is empty".to_string())
                })?;
                (picker, "cus")
            }
        };
        Ok(Self { picker, tag })
    }

    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Random
    }

    fn tag(&self) -> String {
        self.tag.to_string()
    }

    fn sample(&self, length: usize, rng: &mut StdRng) -> String {
        (0..length).map(|_| self.picker.pick(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{GenerationRequest, LengthRange};

    fn generator(composition: RandomComposition) -> RandomGenerator {
        RandomGenerator::configure(RandomConfig { composition }).unwrap()
    }

    #[test]
    fn profiles_sum_to_one() {
        for profile in [
            AminoAcidProfile::Uniform,
            AminoAcidProfile::Amp,
            AminoAcidProfile::AmpNoCm,
            AminoAcidProfile::UniformNoCm,
        ] {
            let total: f64 = profile.weights().iter().sum();
            assert!((total - 1.0).abs() < 1e-3, "{profile:?} sums to {total}");
        }
    }

    #[test]
    fn generate_returns_requested_count_and_lengths() {
        let request = GenerationRequest::new(50, LengthRange::new(7, 28).unwrap(), 3).unwrap();
        let collection = generator(RandomComposition::Profile(AminoAcidProfile::Amp))
            .generate(&request)
            .unwrap();
        assert_eq!(collection.len(), 50);
        assert_eq!(collection.names()[0], "AMP_0");
        assert_eq!(collection.names()[49], "AMP_49");
        for sequence in collection.sequences() {
            assert!((7..=28).contains(&sequence.len()));
            assert!(!sequence.contains('X'));
        }
    }

    #[test]
    fn same_seed_reproduces_output() {
        let request = GenerationRequest::new(20, LengthRange::new(5, 30).unwrap(), 99).unwrap();
        let random = generator(RandomComposition::default());
        let first = random.generate(&request).unwrap();
        let second = random.generate(&request).unwrap();
        assert_eq!(first.sequences(), second.sequences());

        let other = GenerationRequest { seed: 100, ..request };
        assert_ne!(first.sequences(), random.generate(&other).unwrap().sequences());
    }

    #[test]
    fn hundred_fixed_length_sequences_are_identical_for_seed_42() {
        let request = GenerationRequest::new(100, LengthRange::new(10, 10).unwrap(), 42).unwrap();
        let first = generator(RandomComposition::default()).generate(&request).unwrap();
        let second = generator(RandomComposition::default()).generate(&request).unwrap();

        assert_eq!(first.len(), 100);
        assert!(first.sequences().iter().all(|s| s.len() == 10));
        assert_eq!(first.sequences(), second.sequences());
        assert_eq!(first.names(), second.names());

        let reseeded = GenerationRequest { seed: 43, ..request };
        let other = generator(RandomComposition::default()).generate(&reseeded).unwrap();
        assert_ne!(first.sequences(), other.sequences());
    }

    #[test]
    fn no_cm_profiles_never_emit_cysteine_or_methionine() {
        let request = GenerationRequest::new(100, LengthRange::fixed(30).unwrap(), 1).unwrap();
        for profile in [AminoAcidProfile::AmpNoCm, AminoAcidProfile::UniformNoCm] {
            let collection = generator(RandomComposition::Profile(profile))
                .generate(&request)
                .unwrap();
            for sequence in collection.sequences() {
                assert!(!sequence.contains(['C', 'M']), "{sequence}");
            }
        }
    }

    #[test]
    fn custom_alphabet_restricts_residues() {
        let random = generator(RandomComposition::Alphabet("klk".to_string()));
        assert_eq!(random.residues(), &['K', 'L']);
        let request = GenerationRequest::new(10, LengthRange::fixed(12).unwrap(), 0).unwrap();
        let collection = random.generate(&request).unwrap();
        assert_eq!(collection.names()[0], "cus_0");
        for sequence in collection.sequences() {
            assert!(sequence.chars().all(|c| c == 'K' || c == 'L'));
        }
    }

    #[test]
    fn custom_alphabet_rejects_empty_or_unnatural_sets() {
        for alphabet in ["", "KLB"] {
            let result = RandomGenerator::configure(RandomConfig {
                composition: RandomComposition::Alphabet(alphabet.to_string()),
            });
            assert!(matches!(result, Err(ConfigError::InvalidResidueSet(_))));
        }
    }
}
