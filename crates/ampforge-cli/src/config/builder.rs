use super::defaults::DefaultsConfig;
use super::file::{
    FileConfig, FileDescribeConfig, FileGenerateConfig, FileLibraryConfig, FilePruneConfig,
    FileRatiosConfig,
};
use super::models::{DescribeAppConfig, GenerateAppConfig, LibraryAppConfig};
use crate::cli::{DescribeArgs, FamilyArg, GenerateArgs, LibraryArgs};
use crate::error::{CliError, Result};
use ampforge::core::io::ngrams::load_ngrams;
use ampforge::engine::config::{self as core_config, GenerationRequestBuilder, LengthRange};
use ampforge::engine::descriptors::global::GlobalDescriptor;
use ampforge::engine::generators::arc::ArcConfig;
use ampforge::engine::generators::centrosymmetric::{CentrosymmetricConfig, Symmetry};
use ampforge::engine::generators::helical::{HelixConfig, KinkedConfig, ObliqueConfig};
use ampforge::engine::generators::library::{LibraryConfig, LibraryRatios, PruneCriteria};
use ampforge::engine::generators::ngrams::{NgramConfig, NgramSource};
use ampforge::engine::generators::random::{AminoAcidProfile, RandomComposition, RandomConfig};
use ampforge::workflows::describe::{DescribeConfig, DescriptorTask};
use ampforge::workflows::generate::{GenerateConfig, GeneratorSpec};
use ampforge::workflows::library::LibraryWorkflowConfig;
use clap::ValueEnum;
use std::path::Path;
use std::str::FromStr;

fn config_error(e: impl std::fmt::Display) -> CliError {
    CliError::Config(e.to_string())
}

pub fn build_generate_config(args: &GenerateArgs) -> Result<GenerateAppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = apply_set_values(FileConfig::load(args.config.as_deref())?, &args.set_values)?;
    let file = file_config.generate.unwrap_or_default();

    let family = args.family.or(file.family).unwrap_or(defaults.family);
    let request = GenerationRequestBuilder::new()
        .count(args.count.or(file.count).unwrap_or(defaults.count))
        .min_length(args.min_length.or(file.min_length).unwrap_or(defaults.min_length))
        .max_length(args.max_length.or(file.max_length).unwrap_or(defaults.max_length))
        .seed(args.seed.or(file.seed).unwrap_or(defaults.seed))
        .build()
        .map_err(config_error)?;

    let generator = build_generator_spec(family, args, &file, &defaults)?;

    Ok(GenerateAppConfig {
        output: args.output.clone(),
        core_config: GenerateConfig { request, generator },
    })
}

fn build_generator_spec(
    family: FamilyArg,
    args: &GenerateArgs,
    file: &FileGenerateConfig,
    defaults: &DefaultsConfig,
) -> Result<GeneratorSpec> {
    let alphabet = args.alphabet.clone().or_else(|| file.alphabet.clone());
    let arcs = if args.arcs.is_empty() {
        file.arcs.clone().unwrap_or_default()
    } else {
        args.arcs.clone()
    };
    let polar_arc = args.polar_arc.or(file.polar_arc);
    let helix = HelixConfig {
        polar_arc: polar_arc.unwrap_or(HelixConfig::default().polar_arc),
    };

    let random_profile = match family {
        FamilyArg::Random => Some(AminoAcidProfile::Uniform),
        FamilyArg::Amp => Some(AminoAcidProfile::Amp),
        FamilyArg::AmpNoCm => Some(AminoAcidProfile::AmpNoCm),
        FamilyArg::RandomNoCm => Some(AminoAcidProfile::UniformNoCm),
        _ => None,
    };
    if random_profile.is_none() && alphabet.is_some() {
        return Err(CliError::Argument(
            "--alphabet only applies to the random families".to_string(),
        ));
    }

    let spec = match family {
        FamilyArg::Random | FamilyArg::Amp | FamilyArg::AmpNoCm | FamilyArg::RandomNoCm => {
            let composition = match (alphabet, random_profile) {
                (Some(alphabet), _) => RandomComposition::Alphabet(alphabet),
                (None, Some(profile)) => RandomComposition::Profile(profile),
                (None, None) => RandomComposition::default(),
            };
            GeneratorSpec::Random(RandomConfig { composition })
        }
        FamilyArg::Helices => GeneratorSpec::Helices(helix),
        FamilyArg::Kinked => GeneratorSpec::Kinked(KinkedConfig {
            helix,
            kink_length: args
                .kink_length
                .or(file.kink_length)
                .unwrap_or(KinkedConfig::default().kink_length),
        }),
        FamilyArg::Oblique => GeneratorSpec::Oblique(ObliqueConfig {
            start_arc: polar_arc.unwrap_or(ObliqueConfig::default().start_arc),
            ..ObliqueConfig::default()
        }),
        FamilyArg::Symmetric => GeneratorSpec::Centrosymmetric(CentrosymmetricConfig {
            symmetry: Symmetry::Symmetric,
        }),
        FamilyArg::Asymmetric => GeneratorSpec::Centrosymmetric(CentrosymmetricConfig {
            symmetry: Symmetry::Asymmetric,
        }),
        FamilyArg::Arc => match arcs.as_slice() {
            [] => GeneratorSpec::Arc(ArcConfig { arc: defaults.arc }),
            [arc] => GeneratorSpec::Arc(ArcConfig { arc: *arc }),
            _ => {
                return Err(CliError::Argument(
                    "the 'arc' family takes one arc size; use 'mixed-arcs' for several".to_string(),
                ));
            }
        },
        FamilyArg::MixedArcs => GeneratorSpec::MixedArcs(if arcs.is_empty() {
            defaults.mixed_arcs.clone()
        } else {
            arcs
        }),
        FamilyArg::Ngrams => {
            let source = match args.ngrams.as_deref().or(file.ngrams.as_deref()) {
                Some(path) => NgramSource::Records(load_ngrams(path).map_err(|e| {
                    CliError::FileParsing {
                        path: path.to_path_buf(),
                        source: e.into(),
                    }
                })?),
                None => NgramSource::BuiltIn,
            };
            GeneratorSpec::Ngrams(NgramConfig { source })
        }
    };
    Ok(spec)
}

pub fn build_library_config(args: &LibraryArgs) -> Result<LibraryAppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = apply_set_values(FileConfig::load(args.config.as_deref())?, &args.set_values)?;
    let file = file_config.library.unwrap_or_default();

    let count = args.count.or(file.count).unwrap_or(defaults.library_count);
    let seed = args.seed.or(file.seed).unwrap_or(defaults.seed);
    let mut library = LibraryConfig::new(count, seed).map_err(config_error)?;
    library.lengths = LengthRange::new(
        args.min_length.or(file.min_length).unwrap_or(defaults.min_length),
        args.max_length.or(file.max_length).unwrap_or(defaults.max_length),
    )
    .map_err(config_error)?;
    library.ratios = merge_ratios(file.ratios.unwrap_or_default());

    let prune_file = file.prune.unwrap_or_default();
    let charge = match (
        args.min_charge.or(prune_file.min_charge),
        args.max_charge.or(prune_file.max_charge),
    ) {
        (None, None) => None,
        (min, max) => Some((min.unwrap_or(f64::NEG_INFINITY), max.unwrap_or(f64::INFINITY))),
    };
    let length = match (prune_file.min_length, prune_file.max_length) {
        (None, None) => None,
        (min, max) => Some((min.unwrap_or(0), max.unwrap_or(usize::MAX))),
    };
    let prune = (charge.is_some() || length.is_some()).then(|| PruneCriteria {
        charge,
        length,
        ..PruneCriteria::default()
    });

    Ok(LibraryAppConfig {
        output: args.output.clone(),
        core_config: LibraryWorkflowConfig {
            library,
            prune,
            max_size: args.max_size.or(file.max_size),
        },
    })
}

fn merge_ratios(file: FileRatiosConfig) -> LibraryRatios {
    let d = LibraryRatios::default();
    LibraryRatios {
        symmetric: file.symmetric.unwrap_or(d.symmetric),
        asymmetric: file.asymmetric.unwrap_or(d.asymmetric),
        helices: file.helices.unwrap_or(d.helices),
        kinked: file.kinked.unwrap_or(d.kinked),
        oblique: file.oblique.unwrap_or(d.oblique),
        random: file.random.unwrap_or(d.random),
        amp: file.amp.unwrap_or(d.amp),
        amp_no_cm: file.amp_no_cm.unwrap_or(d.amp_no_cm),
    }
}

pub fn build_describe_config(args: &DescribeArgs) -> Result<DescribeAppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = apply_set_values(FileConfig::load(args.config.as_deref())?, &args.set_values)?;
    let file = file_config.describe.unwrap_or_default();

    let or_file = |cli: &[String], file: &Option<Vec<String>>| -> Vec<String> {
        if cli.is_empty() {
            file.clone().unwrap_or_default()
        } else {
            cli.to_vec()
        }
    };

    let global_names = if args.global.is_empty() {
        file.global
            .clone()
            .unwrap_or_else(|| defaults.global_descriptors.clone())
    } else {
        args.global.clone()
    };
    let descriptors = parse_global_descriptors(&global_names)?;

    let cross_pairs = if args.cross_correlation.is_empty() {
        file.cross_correlation.clone().unwrap_or_default()
    } else {
        args.cross_correlation
            .iter()
            .map(|pair| {
                pair.split_once(':')
                    .map(|(a, b)| (a.trim().to_string(), b.trim().to_string()))
                    .ok_or_else(|| {
                        CliError::Argument(format!(
                            "Invalid cross-correlation pair '{pair}'. Expected FIRST:SECOND."
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let window = args.window.or(file.window).unwrap_or(defaults.window);
    let global = core_config::GlobalConfig {
        ph: args.ph.or(file.ph).unwrap_or(core_config::GlobalConfig::default().ph),
        pka: args.pka.or(file.pka).map(core_config::PkaSet::from).unwrap_or_default(),
        terminus: args.terminus.or(file.terminus).map(core_config::Terminus::from).unwrap_or_default(),
        mass: args.mass.or(file.mass).map(core_config::MassType::from).unwrap_or_default(),
    };
    let moment = core_config::MomentConfig {
        angle: args
            .angle
            .or(file.angle)
            .unwrap_or(core_config::MomentConfig::default().angle),
        window: args.moment_window.or(file.moment_window),
        modality: args.modality.or(file.modality).map(core_config::Modality::from).unwrap_or_default(),
    };

    let mut tasks = Vec::new();
    if !descriptors.is_empty() {
        tasks.push(DescriptorTask::Global {
            descriptors,
            config: global,
        });
    }
    for scale in or_file(&args.autocorrelation, &file.autocorrelation) {
        tasks.push(DescriptorTask::Autocorrelation { scale, window });
    }
    for (first, second) in cross_pairs {
        tasks.push(DescriptorTask::CrossCorrelation {
            first,
            second,
            window,
        });
    }
    for scale in or_file(&args.moment, &file.moment) {
        tasks.push(DescriptorTask::Moment {
            scale,
            config: moment,
        });
    }
    if tasks.is_empty() {
        return Err(CliError::Config("No descriptors selected.".to_string()));
    }

    Ok(DescribeAppConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        scales: args.scales.clone().or_else(|| file.scales.clone()),
        core_config: DescribeConfig {
            clean: !args.no_clean && file.clean.unwrap_or(true),
            natural_only: args.natural_only || file.natural_only.unwrap_or(false),
            tasks,
        },
    })
}

/// Resolves descriptor names; `all` selects every descriptor and `none` nothing.
fn parse_global_descriptors(names: &[String]) -> Result<Vec<GlobalDescriptor>> {
    let mut descriptors = Vec::new();
    for name in names {
        match name.trim() {
            "all" => descriptors.extend(GlobalDescriptor::ALL),
            "none" => {}
            other => descriptors
                .push(GlobalDescriptor::from_str(other).map_err(|e| CliError::Argument(e.to_string()))?),
        }
    }
    let mut seen = std::collections::HashSet::new();
    descriptors.retain(|d| seen.insert(*d));
    Ok(descriptors)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {key}: {value}")))
}

fn parse_enum<T: ValueEnum>(key: &str, value: &str) -> Result<T> {
    T::from_str(value.trim(), true)
        .map_err(|_| CliError::Config(format!("Invalid value for {key}: {value}")))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{kv_pair}'. Expected KEY=VALUE."
            ))
        })?;
        let key = key.trim();

        if let Some(field) = key.strip_prefix("generate.") {
            let generate = config.generate.get_or_insert_with(Default::default);
            set_generate(generate, key, field, value)?;
        } else if let Some(field) = key.strip_prefix("library.") {
            let library = config.library.get_or_insert_with(Default::default);
            set_library(library, key, field, value)?;
        } else if let Some(field) = key.strip_prefix("describe.") {
            let describe = config.describe.get_or_insert_with(Default::default);
            set_describe(describe, key, field, value)?;
        } else {
            return Err(unsupported_key(key));
        }
    }
    Ok(config)
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!("Unsupported configuration key for --set: '{key}'"))
}

fn set_generate(config: &mut FileGenerateConfig, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "family" => config.family = Some(parse_enum(key, value)?),
        "count" => config.count = Some(parse_value(key, value)?),
        "min-length" => config.min_length = Some(parse_value(key, value)?),
        "max-length" => config.max_length = Some(parse_value(key, value)?),
        "seed" => config.seed = Some(parse_value(key, value)?),
        "alphabet" => config.alphabet = Some(value.trim().to_string()),
        "polar-arc" => config.polar_arc = Some(parse_value(key, value)?),
        "kink-length" => config.kink_length = Some(parse_value(key, value)?),
        "ngrams" => config.ngrams = Some(Path::new(value.trim()).to_path_buf()),
        _ => return Err(unsupported_key(key)),
    }
    Ok(())
}

fn set_library(config: &mut FileLibraryConfig, key: &str, field: &str, value: &str) -> Result<()> {
    if let Some(ratio) = field.strip_prefix("ratios.") {
        let ratios = config.ratios.get_or_insert_with(Default::default);
        let slot = match ratio {
            "symmetric" => &mut ratios.symmetric,
            "asymmetric" => &mut ratios.asymmetric,
            "helices" => &mut ratios.helices,
            "kinked" => &mut ratios.kinked,
            "oblique" => &mut ratios.oblique,
            "random" => &mut ratios.random,
            "amp" => &mut ratios.amp,
            "amp-no-cm" => &mut ratios.amp_no_cm,
            _ => return Err(unsupported_key(key)),
        };
        *slot = Some(parse_value(key, value)?);
        return Ok(());
    }
    if let Some(bound) = field.strip_prefix("prune.") {
        let prune: &mut FilePruneConfig = config.prune.get_or_insert_with(Default::default);
        match bound {
            "min-charge" => prune.min_charge = Some(parse_value(key, value)?),
            "max-charge" => prune.max_charge = Some(parse_value(key, value)?),
            "min-length" => prune.min_length = Some(parse_value(key, value)?),
            "max-length" => prune.max_length = Some(parse_value(key, value)?),
            _ => return Err(unsupported_key(key)),
        }
        return Ok(());
    }
    match field {
        "count" => config.count = Some(parse_value(key, value)?),
        "min-length" => config.min_length = Some(parse_value(key, value)?),
        "max-length" => config.max_length = Some(parse_value(key, value)?),
        "seed" => config.seed = Some(parse_value(key, value)?),
        "max-size" => config.max_size = Some(parse_value(key, value)?),
        _ => return Err(unsupported_key(key)),
    }
    Ok(())
}

fn set_describe(config: &mut FileDescribeConfig, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "window" => config.window = Some(parse_value(key, value)?),
        "moment-window" => config.moment_window = Some(parse_value(key, value)?),
        "angle" => config.angle = Some(parse_value(key, value)?),
        "ph" => config.ph = Some(parse_value(key, value)?),
        "pka" => config.pka = Some(parse_enum(key, value)?),
        "terminus" => config.terminus = Some(parse_enum(key, value)?),
        "mass" => config.mass = Some(parse_enum(key, value)?),
        "modality" => config.modality = Some(parse_enum(key, value)?),
        "clean" => config.clean = Some(parse_value(key, value)?),
        "natural-only" => config.natural_only = Some(parse_value(key, value)?),
        _ => return Err(unsupported_key(key)),
    }
    Ok(())
}
