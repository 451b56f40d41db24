use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Symbol used to mark any non-standard residue after cleaning.
pub const WILDCARD: char = 'X';

/// The 20 natural amino acids in one-letter alphabetical order.
pub const NATURAL_ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // A
    Glycine,    // G
    Isoleucine, // I
    Leucine,    // L
    Proline,    // P
    Valine,     // V

    // --- Aromatic ---
    Phenylalanine, // F
    Tryptophan,    // W
    Tyrosine,      // Y

    // --- Polar, Uncharged ---
    Asparagine, // N
    Cysteine,   // C
    Glutamine,  // Q
    Serine,     // S
    Threonine,  // T
    Methionine, // M

    // --- Positively Charged (Basic) ---
    Arginine,  // R
    Histidine, // H
    Lysine,    // K

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // D
    GlutamicAcid, // E
}

/// Basic residues placed on the polar face of generated helices.
pub const BASIC: &[AminoAcid] = &[AminoAcid::Lysine, AminoAcid::Arginine];

/// Small hydrophobic residues used to fill the apolar face of generated helices.
pub const HELIX_HYDROPHOBIC: &[AminoAcid] = &[
    AminoAcid::Glycine,
    AminoAcid::Alanine,
    AminoAcid::Leucine,
    AminoAcid::Isoleucine,
    AminoAcid::Valine,
];

/// Aromatic anchor residues at the centre of centrosymmetric blocks.
pub const ANCHOR: &[AminoAcid] = &[
    AminoAcid::Phenylalanine,
    AminoAcid::Tryptophan,
    AminoAcid::Tyrosine,
];

/// Residues drawn for the hydrophobic arc of amphipathic-arc peptides.
pub const ARC_HYDROPHOBIC: &[AminoAcid] = &[
    AminoAcid::Alanine,
    AminoAcid::Isoleucine,
    AminoAcid::Leucine,
    AminoAcid::Valine,
    AminoAcid::Phenylalanine,
    AminoAcid::Tryptophan,
];

/// Residues counted as hydrophobic by the hydrophobic ratio descriptor.
pub const HYDROPHOBIC_PARTITION: &[AminoAcid] = &[
    AminoAcid::Alanine,
    AminoAcid::Cysteine,
    AminoAcid::Phenylalanine,
    AminoAcid::Isoleucine,
    AminoAcid::Leucine,
    AminoAcid::Methionine,
    AminoAcid::Valine,
    AminoAcid::Tryptophan,
];

impl AminoAcid {
    /// All natural amino acids in the order of [`NATURAL_ALPHABET`].
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Cysteine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
        AminoAcid::Phenylalanine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Lysine,
        AminoAcid::Leucine,
        AminoAcid::Methionine,
        AminoAcid::Asparagine,
        AminoAcid::Proline,
        AminoAcid::Glutamine,
        AminoAcid::Arginine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Valine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
    ];

    pub fn symbol(self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Cysteine => 'C',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Lysine => 'K',
            AminoAcid::Leucine => 'L',
            AminoAcid::Methionine => 'M',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Proline => 'P',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Arginine => 'R',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Valine => 'V',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        let amino_acid = match symbol {
            'A' => AminoAcid::Alanine,
            'C' => AminoAcid::Cysteine,
            'D' => AminoAcid::AsparticAcid,
            'E' => AminoAcid::GlutamicAcid,
            'F' => AminoAcid::Phenylalanine,
            'G' => AminoAcid::Glycine,
            'H' => AminoAcid::Histidine,
            'I' => AminoAcid::Isoleucine,
            'K' => AminoAcid::Lysine,
            'L' => AminoAcid::Leucine,
            'M' => AminoAcid::Methionine,
            'N' => AminoAcid::Asparagine,
            'P' => AminoAcid::Proline,
            'Q' => AminoAcid::Glutamine,
            'R' => AminoAcid::Arginine,
            'S' => AminoAcid::Serine,
            'T' => AminoAcid::Threonine,
            'V' => AminoAcid::Valine,
            'W' => AminoAcid::Tryptophan,
            'Y' => AminoAcid::Tyrosine,
            _ => return None,
        };
        Some(amino_acid)
    }

    /// Position of this residue in [`AminoAcid::ALL`] (0..20).
    pub fn index(self) -> usize {
        NATURAL_ALPHABET
            .find(self.symbol())
            .unwrap_or_default()
    }
}

pub fn is_natural(symbol: char) -> bool {
    AminoAcid::from_symbol(symbol).is_some()
}

/// Returns `true` for symbols that may appear in a cleaned sequence.
pub fn is_recognized(symbol: char) -> bool {
    symbol == WILDCARD || is_natural(symbol)
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid amino acid symbol: '{0}'")]
pub struct ParseAminoAcidError(pub String);

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => AminoAcid::from_symbol(c.to_ascii_uppercase())
                .ok_or_else(|| ParseAminoAcidError(s.to_string())),
            _ => Err(ParseAminoAcidError(s.to_string())),
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_follows_natural_alphabet_order() {
        let joined: String = AminoAcid::ALL.iter().map(|aa| aa.symbol()).collect();
        assert_eq!(joined, NATURAL_ALPHABET);
    }

    #[test]
    fn symbol_round_trips_for_every_residue() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_symbol(aa.symbol()), Some(aa));
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, aa) in AminoAcid::ALL.iter().enumerate() {
            assert_eq!(aa.index(), i);
        }
    }

    #[test]
    fn from_str_accepts_lowercase_and_whitespace() {
        assert_eq!(" k ".parse::<AminoAcid>(), Ok(AminoAcid::Lysine));
        assert_eq!("w".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
    }

    #[test]
    fn from_str_rejects_unknown_and_multi_character_input() {
        assert!("B".parse::<AminoAcid>().is_err());
        assert!("KL".parse::<AminoAcid>().is_err());
        assert!("".parse::<AminoAcid>().is_err());
    }

    #[test]
    fn wildcard_is_recognized_but_not_natural() {
        assert!(is_recognized(WILDCARD));
        assert!(!is_natural(WILDCARD));
        assert!(!is_recognized('B'));
        assert!(is_natural('L'));
    }
}
