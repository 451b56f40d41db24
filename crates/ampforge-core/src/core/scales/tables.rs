//! Published reference tables shipped with the library.
//!
//! Per-residue arrays are indexed by [`AminoAcid::index`](crate::core::models::residue::AminoAcid::index),
//! i.e. in the order `ACDEFGHIKLMNPQRSTVWY`.

use phf::{Map, phf_map};

// ── Hydrophobicity scales ───────────────────────────────────────

/// Eisenberg (1984) consensus hydrophobicity.
pub const EISENBERG: [f64; 20] = [
    0.62,  // A
    0.29,  // C
    -0.90, // D
    -0.74, // E
    1.19,  // F
    0.48,  // G
    -0.40, // H
    1.38,  // I
    -1.50, // K
    1.06,  // L
    0.64,  // M
    -0.78, // N
    0.12,  // P
    -0.85, // Q
    -2.53, // R
    -0.18, // S
    -0.05, // T
    1.08,  // V
    0.81,  // W
    0.26,  // Y
];

/// Kyte-Doolittle (1982) hydropathy.
pub const KYTE_DOOLITTLE: [f64; 20] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

/// Hopp-Woods (1981) hydrophilicity.
pub const HOPP_WOODS: [f64; 20] = [
    -0.5, // A
    -1.0, // C
    3.0,  // D
    3.0,  // E
    -2.5, // F
    0.0,  // G
    -0.5, // H
    -1.8, // I
    3.0,  // K
    -1.8, // L
    -1.3, // M
    0.2,  // N
    0.0,  // P
    0.2,  // Q
    3.0,  // R
    0.3,  // S
    -0.4, // T
    -1.5, // V
    -3.4, // W
    -2.3, // Y
];

/// Boman (2003) solubility values; the Boman index is the negated mean.
pub const BOMAN: [f64; 20] = [
    1.81,   // A
    1.28,   // C
    -8.72,  // D
    -6.81,  // E
    2.98,   // F
    0.94,   // G
    -4.66,  // H
    4.92,   // I
    -5.55,  // K
    4.92,   // L
    2.35,   // M
    -6.64,  // N
    0.0,    // P
    -5.54,  // Q
    -14.92, // R
    -3.40,  // S
    -2.57,  // T
    4.04,   // V
    2.33,   // W
    -0.14,  // Y
];

/// Hellberg (1987) z-scales (z1 lipophilicity, z2 bulk, z3 electronic).
pub const Z3: [[f64; 3]; 20] = [
    [0.07, -1.73, 0.09],   // A
    [0.71, -0.97, 4.13],   // C
    [3.64, 1.13, 2.36],    // D
    [3.08, 0.39, -0.07],   // E
    [-4.92, 1.30, 0.45],   // F
    [2.23, -5.36, 0.30],   // G
    [2.41, 1.74, 1.11],    // H
    [-4.44, -1.68, -1.03], // I
    [2.84, 1.41, -3.14],   // K
    [-4.19, -1.03, -0.98], // L
    [-2.49, -0.27, -0.41], // M
    [3.22, 1.45, 0.84],    // N
    [-1.22, 0.88, 2.23],   // P
    [2.18, 0.53, -1.14],   // Q
    [2.88, 2.52, -3.44],   // R
    [1.96, -1.63, 0.57],   // S
    [0.92, -2.09, -1.40],  // T
    [-2.69, -2.53, -1.29], // V
    [-4.75, 3.65, 0.85],   // W
    [-1.39, 2.32, 0.01],   // Y
];

/// Guruprasad (1990) dipeptide instability weight values. Row is the first residue of
/// the dipeptide, column the second.
#[rustfmt::skip]
pub const DIWV: [[f64; 20]; 20] = [
    //  A       C       D       E       F       G       H       I       K       L       M       N       P       Q       R       S       T       V       W       Y
    [  1.0,  44.94,  -7.49,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0  ], // A
    [  1.0,   1.0,   20.26,   1.0,    1.0,    1.0,   33.60,   1.0,    1.0,   20.26,  33.60,   1.0,   20.26,  -6.54,   1.0,    1.0,   33.60,  -6.54,  24.68,   1.0  ], // C
    [  1.0,   1.0,    1.0,    1.0,   -6.54,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,   -6.54,  20.26, -14.03,   1.0,    1.0,    1.0  ], // D
    [  1.0,  44.94,  20.26,  33.60,   1.0,    1.0,   -6.54,  20.26,   1.0,    1.0,    1.0,    1.0,   20.26,  20.26,   1.0,   20.26,   1.0,    1.0,  -14.03,   1.0  ], // E
    [  1.0,   1.0,   13.34,   1.0,    1.0,    1.0,    1.0,    1.0,  -14.03,   1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   33.601], // F
    [ -7.49,  1.0,    1.0,   -6.54,   1.0,   13.34,   1.0,   -7.49,  -7.49,   1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,   13.34,  -7.49 ], // G
    [  1.0,   1.0,    1.0,    1.0,   -9.37,  -9.37,   1.0,   44.94,  24.68,   1.0,    1.0,   24.68,  -1.88,   1.0,    1.0,    1.0,   -6.54,   1.0,   -1.88,  44.94 ], // H
    [  1.0,   1.0,    1.0,   44.94,   1.0,    1.0,   13.34,   1.0,   -7.49,  20.26,   1.0,    1.0,   -1.88,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,    1.0  ], // I
    [  1.0,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,   -7.49,   1.0,   -7.49,  33.60,   1.0,   -6.54,  24.64,  33.60,   1.0,    1.0,   -7.49,   1.0,    1.0  ], // K
    [  1.0,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,   20.26,  33.60,  20.26,   1.0,    1.0,    1.0,   24.68,   1.0  ], // L
    [ 13.34,  1.0,    1.0,    1.0,    1.0,    1.0,   58.28,   1.0,    1.0,    1.0,   -1.88,   1.0,   44.94,  -6.54,  -6.54,  44.94,  -1.88,   1.0,    1.0,   24.68 ], // M
    [  1.0,  -1.88,   1.0,    1.0,  -14.03, -14.03,   1.0,   44.94,  24.68,   1.0,    1.0,    1.0,   -1.88,  -6.54,   1.0,    1.0,   -7.49,   1.0,   -9.37,   1.0  ], // N
    [ 20.26, -6.54,  -6.54,  18.38,  20.26,   1.0,    1.0,    1.0,    1.0,    1.0,   -6.54,   1.0,   20.26,  20.26,  -6.54,  20.26,   1.0,   20.26,  -1.88,   1.0  ], // P
    [  1.0,  -6.54,  20.26,  20.26,  -6.54,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   20.26,  20.26,   1.0,   44.94,   1.0,   -6.54,   1.0,   -6.54 ], // Q
    [  1.0,   1.0,    1.0,    1.0,    1.0,   -7.49,  20.26,   1.0,    1.0,    1.0,    1.0,   13.34,  20.26,  20.26,  58.28,  44.94,   1.0,    1.0,   58.28,  -6.54 ], // R
    [  1.0,  33.60,   1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   44.94,  20.26,  20.26,  20.26,   1.0,    1.0,    1.0,    1.0  ], // S
    [  1.0,   1.0,    1.0,   20.26,  13.34,  -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,  -14.03,   1.0,   -6.54,   1.0,    1.0,    1.0,    1.0,  -14.03,   1.0  ], // T
    [  1.0,   1.0,  -14.03,   1.0,    1.0,   -7.49,   1.0,    1.0,   -1.88,   1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,   -6.54 ], // V
    [-14.03,  1.0,    1.0,    1.0,    1.0,   -9.37,  24.68,   1.0,    1.0,   13.34,  24.68,  13.34,   1.0,    1.0,    1.0,    1.0,  -14.03,  -7.49,   1.0,    1.0  ], // W
    [ 24.68,  1.0,   24.68,  -6.54,   1.0,   -7.49,  13.34,   1.0,    1.0,    1.0,   44.94,   1.0,   13.34,   1.0,  -15.91,   1.0,   -7.49,   1.0,   -9.37,  13.34 ], // Y
];

// ── Masses ──────────────────────────────────────────────────────

/// Average residue masses (Da), i.e. amino acid mass minus water.
pub static AVERAGE_RESIDUE_MASS: Map<char, f64> = phf_map! {
    'A' => 71.0788,
    'C' => 103.1388,
    'D' => 115.0886,
    'E' => 129.1155,
    'F' => 147.1766,
    'G' => 57.0519,
    'H' => 137.1411,
    'I' => 113.1594,
    'K' => 128.1741,
    'L' => 113.1594,
    'M' => 131.1926,
    'N' => 114.1038,
    'P' => 97.1167,
    'Q' => 128.1307,
    'R' => 156.1875,
    'S' => 87.0782,
    'T' => 101.1051,
    'V' => 99.1326,
    'W' => 186.2132,
    'Y' => 163.1760,
};

pub static MONOISOTOPIC_RESIDUE_MASS: Map<char, f64> = phf_map! {
    'A' => 71.03711,
    'C' => 103.00919,
    'D' => 115.02694,
    'E' => 129.04259,
    'F' => 147.06841,
    'G' => 57.02146,
    'H' => 137.05891,
    'I' => 113.08406,
    'K' => 128.09496,
    'L' => 113.08406,
    'M' => 131.04049,
    'N' => 114.04293,
    'P' => 97.05276,
    'Q' => 128.05858,
    'R' => 156.10111,
    'S' => 87.03203,
    'T' => 101.04768,
    'V' => 99.06841,
    'W' => 186.07931,
    'Y' => 163.06333,
};

pub const WATER_AVERAGE: f64 = 18.01528;
pub const WATER_MONOISOTOPIC: f64 = 18.01056;

/// Mass change of a C-terminal amide (OH replaced by NH2).
pub const AMIDE_AVERAGE: f64 = -0.98476;
pub const AMIDE_MONOISOTOPIC: f64 = -0.98402;

/// Mass change of an N-terminal acetyl group.
pub const ACETYL_AVERAGE: f64 = 42.0367;
pub const ACETYL_MONOISOTOPIC: f64 = 42.01057;

// ── pKa sets ────────────────────────────────────────────────────

/// Side-chain and terminal pKa values. Terminal groups use the keys `'n'` and `'c'`.
pub static PKA_EMBOSS: Map<char, f64> = phf_map! {
    'n' => 8.6,
    'c' => 3.6,
    'K' => 10.8,
    'R' => 12.5,
    'H' => 6.5,
    'D' => 3.9,
    'E' => 4.1,
    'C' => 8.5,
    'Y' => 10.1,
};

pub static PKA_LEHNINGER: Map<char, f64> = phf_map! {
    'n' => 9.69,
    'c' => 2.34,
    'K' => 10.5,
    'R' => 12.4,
    'H' => 6.0,
    'D' => 3.86,
    'E' => 4.25,
    'C' => 8.33,
    'Y' => 10.0,
};

/// Residues carrying a positive charge when protonated.
pub const POSITIVE_GROUPS: &[char] = &['K', 'R', 'H'];
/// Residues carrying a negative charge when deprotonated.
pub const NEGATIVE_GROUPS: &[char] = &['D', 'E', 'C', 'Y'];
