//! Rule-based generators of synthetic peptide sequences.
//!
//! Every family implements [`SequenceGenerator`]: a validated, family-specific
//! configuration plus a `sample` function that builds one sequence of a given length.
//! The shared [`SequenceGenerator::generate`] drives sampling for a whole
//! [`GenerationRequest`], giving every row its own seeded random stream so output is
//! identical with or without the `parallel` feature.

pub mod arc;
pub mod centrosymmetric;
pub mod helical;
pub mod library;
pub mod ngrams;
pub mod random;

use std::fmt;

use rand::rngs::StdRng;
use tracing::{debug, instrument};

use crate::core::models::collection::SequenceCollection;
use crate::core::utils::random::stream_rng;
use crate::engine::config::{ConfigError, GenerationRequest, LengthRange};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneratorFamily {
    Random,
    Helices,
    Kinked,
    Oblique,
    Centrosymmetric,
    AmphipathicArc,
    Ngrams,
}

impl GeneratorFamily {
    pub fn name(self) -> &'static str {
        match self {
            GeneratorFamily::Random => "random",
            GeneratorFamily::Helices => "helices",
            GeneratorFamily::Kinked => "kinked",
            GeneratorFamily::Oblique => "oblique",
            GeneratorFamily::Centrosymmetric => "centrosymmetric",
            GeneratorFamily::AmphipathicArc => "amphipathic-arc",
            GeneratorFamily::Ngrams => "ngrams",
        }
    }
}

impl fmt::Display for GeneratorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait SequenceGenerator: Sync {
    type Config;

    fn configure(config: Self::Config) -> Result<Self, ConfigError>
    where
        Self: Sized;

    fn family(&self) -> GeneratorFamily;

    /// Prefix of generated row names, `<tag>_<index>`.
    fn tag(&self) -> String;

    /// Builds one sequence of exactly `length` residues.
    fn sample(&self, length: usize, rng: &mut StdRng) -> String;

    /// Rejects requests this generator cannot satisfy.
    fn validate(&self, _request: &GenerationRequest) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Length of the next sequence, drawn uniformly from the range by default.
    fn draw_length(&self, lengths: &LengthRange, rng: &mut StdRng) -> usize {
        lengths.sample(rng)
    }

    fn generate(&self, request: &GenerationRequest) -> Result<SequenceCollection, EngineError> {
        self.generate_with_progress(request, &ProgressReporter::new())
    }

    #[instrument(skip_all, name = "generate", fields(family = %self.family(), count = request.count))]
    fn generate_with_progress(
        &self,
        request: &GenerationRequest,
        reporter: &ProgressReporter,
    ) -> Result<SequenceCollection, EngineError> {
        self.validate(request)?;

        reporter.report(Progress::TaskStart {
            total_steps: request.count as u64,
        });

        #[cfg(not(feature = "parallel"))]
        let indices = 0..request.count;

        #[cfg(feature = "parallel")]
        let indices = (0..request.count).into_par_iter();

        let sequences: Vec<String> = indices
            .map(|index| {
                let mut rng = stream_rng(request.seed, index);
                let length = self.draw_length(&request.lengths, &mut rng);
                let sequence = self.sample(length, &mut rng);
                reporter.report(Progress::TaskIncrement);
                sequence
            })
            .collect();

        reporter.report(Progress::TaskFinish);

        let tag = self.tag();
        let mut collection = SequenceCollection::new();
        for (index, sequence) in sequences.into_iter().enumerate() {
            collection.push(sequence, format!("{tag}_{index}"));
        }
        debug!(rows = collection.len(), "Generated sequences.");
        Ok(collection)
    }
}
