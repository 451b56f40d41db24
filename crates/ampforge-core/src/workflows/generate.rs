use crate::core::models::collection::SequenceCollection;
use crate::engine::config::GenerationRequest;
use crate::engine::error::EngineError;
use crate::engine::generators::SequenceGenerator;
use crate::engine::generators::arc::{ArcConfig, ArcGenerator, generate_mixed_arcs};
use crate::engine::generators::centrosymmetric::{
    CentrosymmetricConfig, CentrosymmetricGenerator,
};
use crate::engine::generators::helical::{
    HelixConfig, HelixGenerator, KinkedConfig, KinkedGenerator, ObliqueConfig, ObliqueGenerator,
};
use crate::engine::generators::ngrams::{NgramConfig, NgramGenerator};
use crate::engine::generators::random::{RandomConfig, RandomGenerator};
use crate::engine::progress::ProgressReporter;
use tracing::{info, instrument};

/// One generator family with its configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorSpec {
    Random(RandomConfig),
    Helices(HelixConfig),
    Kinked(KinkedConfig),
    Oblique(ObliqueConfig),
    Centrosymmetric(CentrosymmetricConfig),
    Arc(ArcConfig),
    /// One amphipathic-arc population per listed arc size.
    MixedArcs(Vec<f64>),
    Ngrams(NgramConfig),
}

impl GeneratorSpec {
    fn phase_name(&self) -> &'static str {
        match self {
            GeneratorSpec::Random(_) => "Random sequences",
            GeneratorSpec::Helices(_) => "Amphipathic helices",
            GeneratorSpec::Kinked(_) => "Kinked helices",
            GeneratorSpec::Oblique(_) => "Oblique helices",
            GeneratorSpec::Centrosymmetric(_) => "Centrosymmetric sequences",
            GeneratorSpec::Arc(_) | GeneratorSpec::MixedArcs(_) => "Amphipathic arcs",
            GeneratorSpec::Ngrams(_) => "N-gram sequences",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub request: GenerationRequest,
    pub generator: GeneratorSpec,
}

#[instrument(skip_all, name = "generate_workflow", fields(count = config.request.count, seed = config.request.seed))]
pub fn run(
    config: &GenerateConfig,
    reporter: &ProgressReporter,
) -> Result<SequenceCollection, EngineError> {
    let collection = reporter.phase(config.generator.phase_name(), || {
        generate(&config.generator, &config.request, reporter)
    })?;

    info!("Workflow complete. Generated {} sequence(s).", collection.len());
    Ok(collection)
}

fn generate(
    spec: &GeneratorSpec,
    request: &GenerationRequest,
    reporter: &ProgressReporter,
) -> Result<SequenceCollection, EngineError> {
    match spec {
        GeneratorSpec::Random(c) => {
            RandomGenerator::configure(c.clone())?.generate_with_progress(request, reporter)
        }
        GeneratorSpec::Helices(c) => {
            HelixGenerator::configure(*c)?.generate_with_progress(request, reporter)
        }
        GeneratorSpec::Kinked(c) => {
            KinkedGenerator::configure(*c)?.generate_with_progress(request, reporter)
        }
        GeneratorSpec::Oblique(c) => {
            ObliqueGenerator::configure(*c)?.generate_with_progress(request, reporter)
        }
        GeneratorSpec::Centrosymmetric(c) => {
            CentrosymmetricGenerator::configure(*c)?.generate_with_progress(request, reporter)
        }
        GeneratorSpec::Arc(c) => ArcGenerator::configure(*c)?.generate_with_progress(request, reporter),
        GeneratorSpec::MixedArcs(arcs) => generate_mixed_arcs(request, arcs, reporter),
        GeneratorSpec::Ngrams(c) => {
            NgramGenerator::configure(c.clone())?.generate_with_progress(request, reporter)
        }
    }
}
