use crate::core::models::residue::AminoAcid;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleShape {
    Scalar,
    Vector,
    Pairwise,
}

impl std::fmt::Display for ScaleShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScaleShape::Scalar => "scalar",
            ScaleShape::Vector => "vector",
            ScaleShape::Pairwise => "pairwise",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Unknown scale: '{0}'")]
    UnknownScale(String),

    #[error("A scale named '{0}' is already registered")]
    DuplicateScale(String),

    #[error("Residue '{residue}' at position {position} has no value in scale '{scale}'")]
    InvalidResidue {
        scale: String,
        residue: char,
        position: usize,
    },

    #[error("Scale '{scale}' is {found}, but a {expected} scale is required")]
    ShapeMismatch {
        scale: String,
        expected: ScaleShape,
        found: ScaleShape,
    },

    #[error("Scales '{first}' ({first_arity}-D) and '{second}' ({second_arity}-D) differ in arity")]
    ArityMismatch {
        first: String,
        first_arity: usize,
        second: String,
        second_arity: usize,
    },

    #[error("Scale '{scale}' lacks a value for residue '{residue}'")]
    MissingResidue { scale: String, residue: char },

    #[error("Scale '{scale}' has a {found}-D vector for '{residue}', expected {expected}-D")]
    InconsistentArity {
        scale: String,
        residue: char,
        expected: usize,
        found: usize,
    },

    #[error("Scale '{scale}' has an entry for unknown residue '{residue}'")]
    UnknownResidue { scale: String, residue: String },
}

/// An amino-acid property scale.
///
/// Per-residue tables are laid out in [`AminoAcid::index`] order; a vector scale stores
/// its rows back to back, `arity` values per residue.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Scalar([f64; 20]),
    Vector { arity: usize, values: Vec<f64> },
    Pairwise(Box<[[f64; 20]; 20]>),
}

impl Scale {
    pub fn vector<const N: usize>(rows: &[[f64; N]; 20]) -> Self {
        Scale::Vector {
            arity: N,
            values: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn shape(&self) -> ScaleShape {
        match self {
            Scale::Scalar(_) => ScaleShape::Scalar,
            Scale::Vector { .. } => ScaleShape::Vector,
            Scale::Pairwise(_) => ScaleShape::Pairwise,
        }
    }

    /// Number of values per residue. Pairwise scales report 1.
    pub fn arity(&self) -> usize {
        match self {
            Scale::Vector { arity, .. } => *arity,
            _ => 1,
        }
    }

    /// Values of a single residue, or `None` for pairwise scales.
    pub fn values(&self, residue: AminoAcid) -> Option<&[f64]> {
        let i = residue.index();
        match self {
            Scale::Scalar(table) => Some(std::slice::from_ref(&table[i])),
            Scale::Vector { arity, values } => values.get(i * arity..(i + 1) * arity),
            Scale::Pairwise(_) => None,
        }
    }

    pub fn pair(&self, first: AminoAcid, second: AminoAcid) -> Option<f64> {
        match self {
            Scale::Pairwise(table) => Some(table[first.index()][second.index()]),
            _ => None,
        }
    }

    /// Per-dimension mean over the 20 natural residues.
    pub fn mean(&self) -> Vec<f64> {
        let arity = self.arity();
        let mut sums = vec![0.0; arity];
        for aa in AminoAcid::ALL {
            if let Some(values) = self.values(aa) {
                for (sum, v) in sums.iter_mut().zip(values) {
                    *sum += v;
                }
            }
        }
        sums.iter().map(|s| s / 20.0).collect()
    }

    /// Maps every residue of `sequence` to its scale values.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidResidue`] for the first symbol without a value,
    /// including the wildcard, and [`ScaleError::ShapeMismatch`] for pairwise scales.
    pub fn encode<'a>(&'a self, name: &str, sequence: &str) -> Result<Vec<&'a [f64]>, ScaleError> {
        if let Scale::Pairwise(_) = self {
            return Err(ScaleError::ShapeMismatch {
                scale: name.to_string(),
                expected: ScaleShape::Scalar,
                found: ScaleShape::Pairwise,
            });
        }
        sequence
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                AminoAcid::from_symbol(symbol)
                    .and_then(|aa| self.values(aa))
                    .ok_or_else(|| ScaleError::InvalidResidue {
                        scale: name.to_string(),
                        residue: symbol,
                        position,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scales::tables::{DIWV, EISENBERG, Z3};

    #[test]
    fn scalar_values_are_single_element_slices() {
        let scale = Scale::Scalar(EISENBERG);
        assert_eq!(scale.values(AminoAcid::Isoleucine), Some(&[1.38][..]));
        assert_eq!(scale.arity(), 1);
    }

    #[test]
    fn vector_rows_are_sliced_by_arity() {
        let scale = Scale::vector(&Z3);
        assert_eq!(scale.arity(), 3);
        assert_eq!(scale.values(AminoAcid::Glycine), Some(&[2.23, -5.36, 0.30][..]));
        assert_eq!(scale.values(AminoAcid::Tyrosine), Some(&[-1.39, 2.32, 0.01][..]));
    }

    #[test]
    fn pairwise_scale_has_no_per_residue_values() {
        let scale = Scale::Pairwise(Box::new(DIWV));
        assert_eq!(scale.values(AminoAcid::Alanine), None);
        assert_eq!(
            scale.pair(AminoAcid::Alanine, AminoAcid::Cysteine),
            Some(44.94)
        );
        assert_eq!(scale.shape(), ScaleShape::Pairwise);
    }

    #[test]
    fn mean_of_constant_scale_is_that_constant() {
        let scale = Scale::Scalar([2.5; 20]);
        assert_eq!(scale.mean(), vec![2.5]);
    }

    #[test]
    fn encode_reports_position_of_wildcard() {
        let scale = Scale::Scalar(EISENBERG);
        let err = scale.encode("eisenberg", "KLXA").unwrap_err();
        assert_eq!(
            err,
            ScaleError::InvalidResidue {
                scale: "eisenberg".to_string(),
                residue: 'X',
                position: 2
            }
        );
    }

    #[test]
    fn encode_rejects_pairwise_scales() {
        let scale = Scale::Pairwise(Box::new(DIWV));
        assert!(matches!(
            scale.encode("instability", "KLA"),
            Err(ScaleError::ShapeMismatch { .. })
        ));
    }
}
