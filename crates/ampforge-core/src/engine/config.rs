use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid length range {min}..={max}: lengths must satisfy 0 < min <= max")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("Sequence count must be at least 1")]
    ZeroCount,

    #[error("Invalid arc size {0}°: must lie within (0, 360]")]
    InvalidArc(f64),

    #[error("Length range {min}..={max} contains no multiple of the {block}-residue block size")]
    NoBlockLength { min: usize, max: usize, block: usize },

    #[error("Invalid residue set: {0}")]
    InvalidResidueSet(String),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Inclusive range of sequence lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidLengthRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn fixed(length: usize) -> Result<Self, ConfigError> {
        Self::new(length, length)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    /// Draws a length uniformly from the range.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

/// How many sequences to generate, of which lengths, from which seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub count: usize,
    pub lengths: LengthRange,
    pub seed: u64,
}

impl GenerationRequest {
    pub fn new(count: usize, lengths: LengthRange, seed: u64) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        Ok(Self {
            count,
            lengths,
            seed,
        })
    }
}

#[derive(Default)]
pub struct GenerationRequestBuilder {
    count: Option<usize>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    seed: Option<u64>,
}

impl GenerationRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the request. The seed defaults to 0.
    pub fn build(self) -> Result<GenerationRequest, ConfigError> {
        let lengths = LengthRange::new(
            self.min_length
                .ok_or(ConfigError::MissingParameter("min_length"))?,
            self.max_length
                .ok_or(ConfigError::MissingParameter("max_length"))?,
        )?;
        GenerationRequest::new(
            self.count.ok_or(ConfigError::MissingParameter("count"))?,
            lengths,
            self.seed.unwrap_or_default(),
        )
    }
}

// --- Descriptor configuration ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PkaSet {
    #[default]
    Emboss,
    Lehninger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminus {
    #[default]
    Free,
    /// C-terminal amide: no C-terminal carboxylate charge.
    Amidated,
    /// N-terminal acetyl: no N-terminal amine charge.
    Acetylated,
    /// Both termini modified.
    Capped,
}

impl Terminus {
    pub fn amidated(self) -> bool {
        matches!(self, Terminus::Amidated | Terminus::Capped)
    }

    pub fn acetylated(self) -> bool {
        matches!(self, Terminus::Acetylated | Terminus::Capped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassType {
    #[default]
    Average,
    Monoisotopic,
}

/// Settings for the global descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    pub ph: f64,
    pub pka: PkaSet,
    pub terminus: Terminus,
    pub mass: MassType,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            ph: 7.0,
            pka: PkaSet::default(),
            terminus: Terminus::default(),
            mass: MassType::default(),
        }
    }
}

impl GlobalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(ConfigError::InvalidParameter {
                name: "ph",
                reason: format!("{} is outside [0, 14]", self.ph),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    #[default]
    Max,
    Mean,
}

/// Settings for hydrophobic-moment descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentConfig {
    /// Rotation per residue in degrees.
    pub angle: f64,
    /// Window length; `None` uses the whole sequence as a single window.
    pub window: Option<usize>,
    pub modality: Modality,
}

impl Default for MomentConfig {
    fn default() -> Self {
        Self {
            angle: crate::core::utils::wheel::HELIX_ANGLE_DEG,
            window: None,
            modality: Modality::default(),
        }
    }
}

impl MomentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.angle.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "angle",
                reason: "must be finite".to_string(),
            });
        }
        if self.window == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "window",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_window(name: &'static str, window: usize) -> Result<(), ConfigError> {
    if window == 0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_arc(arc: f64) -> Result<(), ConfigError> {
    if !(arc > 0.0 && arc <= 360.0) {
        return Err(ConfigError::InvalidArc(arc));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn length_range_rejects_inverted_and_zero_bounds() {
        assert_eq!(
            LengthRange::new(10, 5),
            Err(ConfigError::InvalidLengthRange { min: 10, max: 5 })
        );
        assert_eq!(
            LengthRange::new(0, 5),
            Err(ConfigError::InvalidLengthRange { min: 0, max: 5 })
        );
        assert!(LengthRange::new(5, 5).is_ok());
    }

    #[test]
    fn length_range_samples_within_bounds() {
        let range = LengthRange::new(7, 9).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn generation_request_rejects_zero_count() {
        let lengths = LengthRange::fixed(10).unwrap();
        assert_eq!(
            GenerationRequest::new(0, lengths, 1),
            Err(ConfigError::ZeroCount)
        );
    }

    #[test]
    fn builder_reports_missing_parameters() {
        let result = GenerationRequestBuilder::new().count(5).min_length(7).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("max_length")));
    }

    #[test]
    fn builder_defaults_seed_to_zero() {
        let request = GenerationRequestBuilder::new()
            .count(5)
            .min_length(7)
            .max_length(28)
            .build()
            .unwrap();
        assert_eq!(request.seed, 0);
        assert_eq!(request.lengths.max(), 28);
    }

    #[test]
    fn terminus_flags() {
        assert!(Terminus::Capped.amidated() && Terminus::Capped.acetylated());
        assert!(Terminus::Amidated.amidated() && !Terminus::Amidated.acetylated());
        assert!(!Terminus::Free.amidated() && !Terminus::Free.acetylated());
    }

    #[test]
    fn arc_validation_bounds() {
        assert!(validate_arc(360.0).is_ok());
        assert_eq!(validate_arc(0.0), Err(ConfigError::InvalidArc(0.0)));
        assert_eq!(validate_arc(361.0), Err(ConfigError::InvalidArc(361.0)));
    }

    #[test]
    fn global_config_rejects_ph_outside_scale() {
        let config = GlobalConfig {
            ph: 15.0,
            ..GlobalConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
