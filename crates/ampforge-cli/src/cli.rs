use ampforge::engine::config as core_config;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "AMPforge CLI - compute peptide descriptors and generate synthetic antimicrobial peptide libraries.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate sequences from one template family.
    Generate(GenerateArgs),
    /// Generate a mixed library combining all template families.
    Library(LibraryArgs),
    /// Compute descriptors for sequences read from FASTA or CSV.
    Describe(DescribeArgs),
    /// List the available amino-acid scales.
    Scales(ScalesArgs),
}

/// Template family for the `generate` subcommand.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyArg {
    /// Uniform residue probabilities.
    Random,
    /// APD3 antimicrobial peptide frequencies.
    Amp,
    /// APD3 frequencies without C and M.
    AmpNoCm,
    /// Uniform probabilities without C and M.
    RandomNoCm,
    Helices,
    Kinked,
    Oblique,
    Symmetric,
    Asymmetric,
    /// One amphipathic arc size.
    Arc,
    /// One population per arc size given with --arc.
    MixedArcs,
    Ngrams,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PkaArg {
    Emboss,
    Lehninger,
}

impl From<PkaArg> for core_config::PkaSet {
    fn from(value: PkaArg) -> Self {
        match value {
            PkaArg::Emboss => core_config::PkaSet::Emboss,
            PkaArg::Lehninger => core_config::PkaSet::Lehninger,
        }
    }
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TerminusArg {
    Free,
    Amidated,
    Acetylated,
    Capped,
}

impl From<TerminusArg> for core_config::Terminus {
    fn from(value: TerminusArg) -> Self {
        match value {
            TerminusArg::Free => core_config::Terminus::Free,
            TerminusArg::Amidated => core_config::Terminus::Amidated,
            TerminusArg::Acetylated => core_config::Terminus::Acetylated,
            TerminusArg::Capped => core_config::Terminus::Capped,
        }
    }
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MassArg {
    Average,
    Monoisotopic,
}

impl From<MassArg> for core_config::MassType {
    fn from(value: MassArg) -> Self {
        match value {
            MassArg::Average => core_config::MassType::Average,
            MassArg::Monoisotopic => core_config::MassType::Monoisotopic,
        }
    }
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ModalityArg {
    Max,
    Mean,
}

impl From<ModalityArg> for core_config::Modality {
    fn from(value: ModalityArg) -> Self {
        match value {
            ModalityArg::Max => core_config::Modality::Max,
            ModalityArg::Mean => core_config::Modality::Mean,
        }
    }
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Template family to sample from.
    #[arg(value_enum)]
    pub family: Option<FamilyArg>,

    /// Output file; `.csv` writes a table, anything else FASTA. Defaults to FASTA on stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of sequences to generate.
    #[arg(short = 'n', long, value_name = "INT")]
    pub count: Option<usize>,

    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,

    #[arg(long, value_name = "INT")]
    pub max_length: Option<usize>,

    /// Seed of the random streams; equal seeds reproduce equal output.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Residues for a uniform random generator, e.g. 'KLAG'. Overrides the family profile.
    #[arg(long, value_name = "RESIDUES")]
    pub alphabet: Option<String>,

    /// Hydrophobic arc size(s) in degrees for the arc families.
    #[arg(long = "arc", value_name = "DEG", value_delimiter = ',')]
    pub arcs: Vec<f64>,

    /// Width of the polar sector of helical templates, in degrees.
    #[arg(long, value_name = "DEG")]
    pub polar_arc: Option<f64>,

    /// Number of residues in the kink of kinked helices.
    #[arg(long, value_name = "INT")]
    pub kink_length: Option<usize>,

    /// CSV table with `ngram,count` columns replacing the built-in n-grams.
    #[arg(long, value_name = "PATH")]
    pub ngrams: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S generate.count=500
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `library` subcommand.
#[derive(Args, Debug, Default)]
pub struct LibraryArgs {
    /// Output file; `.csv` writes a table, anything else FASTA. Defaults to FASTA on stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of sequences before duplicate removal and pruning.
    #[arg(short = 'n', long, value_name = "INT")]
    pub count: Option<usize>,

    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,

    #[arg(long, value_name = "INT")]
    pub max_length: Option<usize>,

    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Drop sequences with a net charge below this value.
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub min_charge: Option<f64>,

    /// Drop sequences with a net charge above this value.
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub max_charge: Option<f64>,

    /// Keep at most this many sequences after pruning.
    #[arg(long, value_name = "INT")]
    pub max_size: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S library.ratios.helices=2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug, Default)]
pub struct DescribeArgs {
    /// Input sequences; `.csv` reads a descriptor table, anything else FASTA.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Output CSV table. Defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Custom scales in TOML format, added to the built-in ones.
    #[arg(long, value_name = "PATH")]
    pub scales: Option<PathBuf>,

    /// Global descriptors to compute, comma separated. Use 'all' for every descriptor.
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub global: Vec<String>,

    /// Scales for autocorrelation descriptors.
    #[arg(long, value_name = "SCALE", value_delimiter = ',')]
    pub autocorrelation: Vec<String>,

    /// Scale pairs for cross-correlation descriptors, written FIRST:SECOND.
    #[arg(long, value_name = "A:B", value_delimiter = ',')]
    pub cross_correlation: Vec<String>,

    /// Scales for hydrophobic moments.
    #[arg(long, value_name = "SCALE", value_delimiter = ',')]
    pub moment: Vec<String>,

    /// Largest lag of correlation descriptors.
    #[arg(short, long, value_name = "INT")]
    pub window: Option<usize>,

    /// Window of hydrophobic moments; the whole sequence when omitted.
    #[arg(long, value_name = "INT")]
    pub moment_window: Option<usize>,

    #[arg(long, value_enum)]
    pub modality: Option<ModalityArg>,

    /// Rotation per residue of hydrophobic moments, in degrees.
    #[arg(long, value_name = "DEG")]
    pub angle: Option<f64>,

    #[arg(long, value_name = "FLOAT")]
    pub ph: Option<f64>,

    #[arg(long, value_enum)]
    pub pka: Option<PkaArg>,

    #[arg(long, value_enum)]
    pub terminus: Option<TerminusArg>,

    #[arg(long, value_enum)]
    pub mass: Option<MassArg>,

    /// Keep sequences as read instead of normalising them first.
    #[arg(long)]
    pub no_clean: bool,

    /// Drop sequences containing non-natural residues.
    #[arg(long)]
    pub natural_only: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S describe.ph=7.4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `scales` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScalesArgs {
    /// Custom scales in TOML format, listed with the built-in ones.
    #[arg(long, value_name = "PATH")]
    pub scales: Option<PathBuf>,
}
