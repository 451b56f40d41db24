//! Sequences assembled from frequent antimicrobial-peptide n-grams.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use itertools::Itertools;
use rand::rngs::StdRng;

use super::{GeneratorFamily, SequenceGenerator};
use crate::core::io::ngrams::NgramRecord;
use crate::core::utils::cleaning::is_natural_only;
use crate::engine::config::ConfigError;
use crate::engine::utils::sampling::weighted_permutation;

/// Reference antimicrobial peptides whose n-grams make up the built-in table.
///
/// Mature sequences of well-characterised natural and designed AMPs as listed in the
/// APD3 database (without post-translational modifications).
#[rustfmt::skip]
pub const REFERENCE_AMPS: &[(&str, &str)] = &[
    ("magainin-2", "GIGKFLHSAKKFGKAFVGEIMNS"),
    ("pexiganan", "GIGKFLKKAKKFGKAFVKILKK"),
    ("melittin", "GIGAVLKVLTTGLPALISWIKRKRQQ"),
    ("ll-37", "LLGDFFRKSKEKIGKEFKRIVQRIKDFLRNLVPRTES"),
    ("cecropin-a", "KWKLFKKIEKVGQNIRDGIIKAGPAVAVVGQATQIAK"),
    ("buforin-2", "TRSSRAGLQFPVGRVHRLLRK"),
    ("indolicidin", "ILPWKWPWWPWRR"),
    ("aurein-1.2", "GLFDIIKKIAEAF"),
    ("temporin-a", "FLPLIGRVLSGIL"),
    ("dermaseptin-s1", "ALWKTMLKKLGTMALHAGKAALGAAADTISQGTQ"),
    ("protegrin-1", "RGGRLCYCRRRFCVCVGR"),
    ("tachyplesin-1", "KWCFRVCYRGICYRRCR"),
    ("histatin-5", "DSHAKRHHGYKRKFHEKHHSHRGY"),
];

/// N-gram sizes counted for the built-in table.
const BUILTIN_SIZES: RangeInclusive<usize> = 2..=3;
/// N-grams seen fewer times than this in [`REFERENCE_AMPS`] are left out.
const BUILTIN_MIN_COUNT: usize = 2;

/// Counts every overlapping n-gram of the given sizes in `sequences`.
///
/// Windows containing non-natural residues are skipped. N-grams occurring fewer than
/// `min_count` times are dropped. Records are ordered by descending count, then
/// alphabetically.
pub fn count_ngrams<'a>(
    sequences: impl IntoIterator<Item = &'a str>,
    sizes: RangeInclusive<usize>,
    min_count: usize,
) -> Vec<NgramRecord> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for sequence in sequences {
        for size in sizes.clone().filter(|&n| n > 0 && n <= sequence.len()) {
            for start in 0..=sequence.len() - size {
                let Some(ngram) = sequence.get(start..start + size) else {
                    continue;
                };
                if is_natural_only(ngram) {
                    *counts.entry(ngram).or_insert(0) += 1;
                }
            }
        }
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count >= min_count.max(1))
        .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)))
        .map(|(ngram, count)| NgramRecord {
            ngram: ngram.to_string(),
            count: count as f64,
        })
        .collect()
}

/// The built-in table: di- and tri-grams seen at least twice in [`REFERENCE_AMPS`].
pub fn builtin_ngrams() -> Vec<NgramRecord> {
    count_ngrams(
        REFERENCE_AMPS.iter().map(|&(_, sequence)| sequence),
        BUILTIN_SIZES,
        BUILTIN_MIN_COUNT,
    )
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NgramSource {
    /// Counts from [`builtin_ngrams`].
    #[default]
    BuiltIn,
    /// A table read from `ngram,count` CSV.
    Records(Vec<NgramRecord>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NgramConfig {
    pub source: NgramSource,
}

/// Concatenates frequency-weighted n-grams until the requested length is reached.
///
/// Within one sequence n-grams are drawn without replacement; once the pool is used
/// up it is refilled. The last n-gram is cut to fit.
#[derive(Debug, Clone)]
pub struct NgramGenerator {
    ngrams: Vec<String>,
    weights: Vec<f64>,
}

impl NgramGenerator {
    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }
}

impl SequenceGenerator for NgramGenerator {
    type Config = NgramConfig;

    fn configure(config: NgramConfig) -> Result<Self, ConfigError> {
        let records = match config.source {
            NgramSource::BuiltIn => builtin_ngrams(),
            NgramSource::Records(records) => records,
        };
        let (ngrams, weights): (Vec<String>, Vec<f64>) = records
            .into_iter()
            .map(|record| (record.ngram.to_ascii_uppercase(), record.count))
            .unzip();

        if ngrams.is_empty() {
            return Err(ConfigError::MissingParameter("ngrams"));
        }
        for (ngram, &count) in ngrams.iter().zip(&weights) {
            if ngram.is_empty() || !is_natural_only(ngram) {
                return Err(ConfigError::InvalidResidueSet(format!(
                    "n-gram '{ngram}' must consist of natural residues"
                )));
            }
            if !(count.is_finite() && count > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name: "count",
                    reason: format!("n-gram '{ngram}' has non-positive count {count}"),
                });
            }
        }
        Ok(Self { ngrams, weights })
    }

    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Ngrams
    }

    fn tag(&self) -> String {
        "ngr".to_string()
    }

    fn sample(&self, length: usize, rng: &mut StdRng) -> String {
        let mut sequence = String::with_capacity(length + 4);
        'fill: while sequence.len() < length {
            for index in weighted_permutation(&self.weights, rng) {
                sequence.push_str(&self.ngrams[index]);
                if sequence.len() >= length {
                    break 'fill;
                }
            }
        }
        sequence.truncate(length);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::ngrams::read_ngrams;
    use crate::engine::config::{GenerationRequest, LengthRange};
    use rand::SeedableRng;

    #[test]
    fn builtin_table_generates_exact_lengths() {
        let generator = NgramGenerator::configure(NgramConfig::default()).unwrap();
        let request = GenerationRequest::new(25, LengthRange::new(7, 30).unwrap(), 6).unwrap();
        let collection = generator.generate(&request).unwrap();
        assert_eq!(collection.len(), 25);
        assert_eq!(collection.names()[0], "ngr_0");
        for sequence in collection.sequences() {
            assert!((7..=30).contains(&sequence.len()));
            assert!(is_natural_only(sequence));
        }
    }

    #[test]
    fn builtin_table_is_counted_from_reference_peptides() {
        let table = builtin_ngrams();
        assert_eq!(table.len(), 88);
        assert_eq!(
            table[0],
            NgramRecord {
                ngram: "KK".to_string(),
                count: 7.0
            }
        );
        let count_of = |ngram: &str| table.iter().find(|r| r.ngram == ngram).map(|r| r.count);
        assert_eq!(count_of("GIG"), Some(3.0));
        assert_eq!(count_of("KF"), Some(5.0));
        assert!(table.iter().all(|r| r.count >= 2.0 && (2..=3).contains(&r.ngram.len())));
        assert!(table.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn count_ngrams_skips_unnatural_windows_and_rare_ngrams() {
        let records = count_ngrams(["KKXKK", "KKA"], 2..=2, 1);
        assert_eq!(
            records,
            vec![
                NgramRecord {
                    ngram: "KK".to_string(),
                    count: 3.0
                },
                NgramRecord {
                    ngram: "KA".to_string(),
                    count: 1.0
                },
            ]
        );
        assert_eq!(count_ngrams(["KKXKK", "KKA"], 2..=2, 2).len(), 1);
        assert!(count_ngrams(["K"], 2..=3, 1).is_empty());
    }

    #[test]
    fn pool_is_refilled_when_exhausted() {
        let records = read_ngrams("ngram,count\nKL,1\nAG,2\n".as_bytes(), "inline").unwrap();
        let generator = NgramGenerator::configure(NgramConfig {
            source: NgramSource::Records(records),
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let sequence = generator.sample(9, &mut rng);
        assert_eq!(sequence.len(), 9);
        let pairs: Vec<&str> = (0..8).step_by(2).map(|i| &sequence[i..i + 2]).collect();
        assert_eq!(pairs.iter().filter(|&&p| p == "KL").count(), 2);
        assert_eq!(pairs.iter().filter(|&&p| p == "AG").count(), 2);
    }

    #[test]
    fn invalid_tables_are_rejected() {
        let empty = NgramGenerator::configure(NgramConfig {
            source: NgramSource::Records(Vec::new()),
        });
        assert_eq!(empty.unwrap_err(), ConfigError::MissingParameter("ngrams"));

        let unnatural = NgramGenerator::configure(NgramConfig {
            source: NgramSource::Records(vec![NgramRecord {
                ngram: "KXK".to_string(),
                count: 3.0,
            }]),
        });
        assert!(matches!(unnatural, Err(ConfigError::InvalidResidueSet(_))));
    }
}
