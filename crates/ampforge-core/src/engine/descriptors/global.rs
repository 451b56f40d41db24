//! Global (whole-sequence) physicochemical descriptors.

use crate::core::models::residue::{AminoAcid, HYDROPHOBIC_PARTITION};
use crate::core::scales::scale::Scale;
use crate::core::scales::tables::{
    ACETYL_AVERAGE, ACETYL_MONOISOTOPIC, AMIDE_AVERAGE, AMIDE_MONOISOTOPIC, AVERAGE_RESIDUE_MASS,
    DIWV, MONOISOTOPIC_RESIDUE_MASS, NEGATIVE_GROUPS, PKA_EMBOSS, PKA_LEHNINGER,
    POSITIVE_GROUPS, WATER_AVERAGE, WATER_MONOISOTOPIC,
};
use crate::engine::config::{GlobalConfig, MassType, PkaSet, Terminus};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const PI_MAX_ITERATIONS: usize = 100;
const PI_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalDescriptor {
    Length,
    Charge,
    ChargeDensity,
    MolecularWeight,
    IsoelectricPoint,
    InstabilityIndex,
    AliphaticIndex,
    Aromaticity,
    BomanIndex,
    HydrophobicRatio,
}

impl GlobalDescriptor {
    pub const ALL: [GlobalDescriptor; 10] = [
        GlobalDescriptor::Length,
        GlobalDescriptor::Charge,
        GlobalDescriptor::ChargeDensity,
        GlobalDescriptor::MolecularWeight,
        GlobalDescriptor::IsoelectricPoint,
        GlobalDescriptor::InstabilityIndex,
        GlobalDescriptor::AliphaticIndex,
        GlobalDescriptor::Aromaticity,
        GlobalDescriptor::BomanIndex,
        GlobalDescriptor::HydrophobicRatio,
    ];

    pub fn column_name(self) -> &'static str {
        match self {
            GlobalDescriptor::Length => "length",
            GlobalDescriptor::Charge => "charge",
            GlobalDescriptor::ChargeDensity => "charge_density",
            GlobalDescriptor::MolecularWeight => "molecular_weight",
            GlobalDescriptor::IsoelectricPoint => "isoelectric_point",
            GlobalDescriptor::InstabilityIndex => "instability_index",
            GlobalDescriptor::AliphaticIndex => "aliphatic_index",
            GlobalDescriptor::Aromaticity => "aromaticity",
            GlobalDescriptor::BomanIndex => "boman_index",
            GlobalDescriptor::HydrophobicRatio => "hydrophobic_ratio",
        }
    }
}

impl fmt::Display for GlobalDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown global descriptor: '{0}'")]
pub struct ParseDescriptorError(pub String);

impl FromStr for GlobalDescriptor {
    type Err = ParseDescriptorError;

    /// Accepts column names with either `_` or `-` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        GlobalDescriptor::ALL
            .into_iter()
            .find(|d| d.column_name() == normalized)
            .ok_or_else(|| ParseDescriptorError(s.to_string()))
    }
}

/// Evaluates one global descriptor for an already validated residue sequence.
///
/// `boman` is the scale used for the Boman index. Returns `None` where the descriptor
/// is undefined, e.g. per-residue averages of an empty sequence.
pub fn evaluate(
    descriptor: GlobalDescriptor,
    residues: &[AminoAcid],
    config: &GlobalConfig,
    boman: &Scale,
) -> Option<f64> {
    match descriptor {
        GlobalDescriptor::Length => Some(residues.len() as f64),
        GlobalDescriptor::Charge => Some(net_charge(residues, config.ph, config.pka, config.terminus)),
        GlobalDescriptor::ChargeDensity => Some(
            net_charge(residues, config.ph, config.pka, config.terminus)
                / molecular_weight(residues, config.mass, config.terminus),
        ),
        GlobalDescriptor::MolecularWeight => {
            Some(molecular_weight(residues, config.mass, config.terminus))
        }
        GlobalDescriptor::IsoelectricPoint => {
            Some(isoelectric_point(residues, config.pka, config.terminus))
        }
        GlobalDescriptor::InstabilityIndex => instability_index(residues),
        GlobalDescriptor::AliphaticIndex => aliphatic_index(residues),
        GlobalDescriptor::Aromaticity => aromaticity(residues),
        GlobalDescriptor::BomanIndex => boman_index(residues, boman),
        GlobalDescriptor::HydrophobicRatio => hydrophobic_ratio(residues),
    }
}

fn pka(set: PkaSet, group: char) -> f64 {
    let table = match set {
        PkaSet::Emboss => &PKA_EMBOSS,
        PkaSet::Lehninger => &PKA_LEHNINGER,
    };
    table.get(&group).copied().unwrap_or_default()
}

/// Net charge at `ph` from the Henderson-Hasselbalch equation.
pub fn net_charge(residues: &[AminoAcid], ph: f64, set: PkaSet, terminus: Terminus) -> f64 {
    let positive_fraction = |pk: f64| 1.0 / (1.0 + 10f64.powf(ph - pk));
    let negative_fraction = |pk: f64| 1.0 / (1.0 + 10f64.powf(pk - ph));

    let mut charge = 0.0;
    if !terminus.acetylated() {
        charge += positive_fraction(pka(set, 'n'));
    }
    if !terminus.amidated() {
        charge -= negative_fraction(pka(set, 'c'));
    }
    for residue in residues {
        let symbol = residue.symbol();
        if POSITIVE_GROUPS.contains(&symbol) {
            charge += positive_fraction(pka(set, symbol));
        } else if NEGATIVE_GROUPS.contains(&symbol) {
            charge -= negative_fraction(pka(set, symbol));
        }
    }
    charge
}

/// Molecular weight in Da: residue masses plus one water and terminal modifications.
pub fn molecular_weight(residues: &[AminoAcid], mass: MassType, terminus: Terminus) -> f64 {
    let (table, water, amide, acetyl) = match mass {
        MassType::Average => (
            &AVERAGE_RESIDUE_MASS,
            WATER_AVERAGE,
            AMIDE_AVERAGE,
            ACETYL_AVERAGE,
        ),
        MassType::Monoisotopic => (
            &MONOISOTOPIC_RESIDUE_MASS,
            WATER_MONOISOTOPIC,
            AMIDE_MONOISOTOPIC,
            ACETYL_MONOISOTOPIC,
        ),
    };

    let mut weight: f64 = residues
        .iter()
        .map(|r| table.get(&r.symbol()).copied().unwrap_or_default())
        .sum::<f64>()
        + water;
    if terminus.amidated() {
        weight += amide;
    }
    if terminus.acetylated() {
        weight += acetyl;
    }
    weight
}

/// pH at which the net charge vanishes, found by bisection on `[0, 14]`.
pub fn isoelectric_point(residues: &[AminoAcid], set: PkaSet, terminus: Terminus) -> f64 {
    let (mut low, mut high) = (0.0_f64, 14.0_f64);
    if net_charge(residues, low, set, terminus) <= 0.0 {
        return low;
    }
    if net_charge(residues, high, set, terminus) >= 0.0 {
        return high;
    }

    let mut mid = (low + high) / 2.0;
    for _ in 0..PI_MAX_ITERATIONS {
        mid = (low + high) / 2.0;
        let charge = net_charge(residues, mid, set, terminus);
        if charge.abs() < PI_TOLERANCE {
            break;
        }
        if charge > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }
    mid
}

/// Guruprasad instability index: `10 / L * Σ DIWV(x_i, x_{i+1})`.
pub fn instability_index(residues: &[AminoAcid]) -> Option<f64> {
    if residues.is_empty() {
        return None;
    }
    let sum: f64 = residues
        .windows(2)
        .map(|pair| DIWV[pair[0].index()][pair[1].index()])
        .sum();
    Some(10.0 / residues.len() as f64 * sum)
}

/// Aliphatic index from mole percentages: `A + 2.9 V + 3.9 (I + L)`.
pub fn aliphatic_index(residues: &[AminoAcid]) -> Option<f64> {
    let percent = |aa: AminoAcid| mole_fraction(residues, &[aa]).map(|f| f * 100.0);
    Some(
        percent(AminoAcid::Alanine)?
            + 2.9 * percent(AminoAcid::Valine)?
            + 3.9 * (percent(AminoAcid::Isoleucine)? + percent(AminoAcid::Leucine)?),
    )
}

pub fn aromaticity(residues: &[AminoAcid]) -> Option<f64> {
    mole_fraction(
        residues,
        &[
            AminoAcid::Phenylalanine,
            AminoAcid::Tryptophan,
            AminoAcid::Tyrosine,
        ],
    )
}

/// Negated mean of the Boman solubility values.
pub fn boman_index(residues: &[AminoAcid], boman: &Scale) -> Option<f64> {
    if residues.is_empty() {
        return None;
    }
    let sum: f64 = residues
        .iter()
        .filter_map(|&r| boman.values(r).and_then(|v| v.first().copied()))
        .sum();
    Some(-sum / residues.len() as f64)
}

pub fn hydrophobic_ratio(residues: &[AminoAcid]) -> Option<f64> {
    mole_fraction(residues, HYDROPHOBIC_PARTITION)
}

fn mole_fraction(residues: &[AminoAcid], members: &[AminoAcid]) -> Option<f64> {
    if residues.is_empty() {
        return None;
    }
    let count = residues.iter().filter(|r| members.contains(r)).count();
    Some(count as f64 / residues.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scales::tables::BOMAN;

    fn residues(sequence: &str) -> Vec<AminoAcid> {
        sequence
            .chars()
            .map(|c| AminoAcid::from_symbol(c).unwrap())
            .collect()
    }

    const EPS: f64 = 1e-6;

    #[test]
    fn descriptor_names_parse_in_both_spellings() {
        assert_eq!(
            "isoelectric-point".parse::<GlobalDescriptor>(),
            Ok(GlobalDescriptor::IsoelectricPoint)
        );
        assert_eq!(
            "boman_index".parse::<GlobalDescriptor>(),
            Ok(GlobalDescriptor::BomanIndex)
        );
        assert!("gravy".parse::<GlobalDescriptor>().is_err());
    }

    #[test]
    fn molecular_weight_increases_strictly_with_glycine_count() {
        let mut previous = 0.0;
        for n in 1..=30 {
            let weight = molecular_weight(
                &vec![AminoAcid::Glycine; n],
                MassType::Average,
                Terminus::Free,
            );
            assert!(weight > previous);
            previous = weight;
        }
    }

    #[test]
    fn molecular_weight_of_single_glycine_is_free_amino_acid_mass() {
        let weight = molecular_weight(&[AminoAcid::Glycine], MassType::Average, Terminus::Free);
        assert!((weight - 75.06718).abs() < 1e-4);
        let mono = molecular_weight(&[AminoAcid::Glycine], MassType::Monoisotopic, Terminus::Free);
        assert!((mono - 75.03202).abs() < 1e-4);
    }

    #[test]
    fn terminal_modifications_shift_the_mass() {
        let seq = residues("KLAKLAK");
        let free = molecular_weight(&seq, MassType::Average, Terminus::Free);
        let capped = molecular_weight(&seq, MassType::Average, Terminus::Capped);
        assert!((capped - free - (AMIDE_AVERAGE + ACETYL_AVERAGE)).abs() < EPS);
    }

    #[test]
    fn charge_of_lysine_rich_peptide_is_positive() {
        let charge = net_charge(&residues("KLAKLAK"), 7.0, PkaSet::Emboss, Terminus::Free);
        assert!(charge > 2.5 && charge < 3.5, "charge was {charge}");
    }

    #[test]
    fn amidation_removes_the_c_terminal_charge() {
        let seq = residues("GLFDIVKKVVGALGSL");
        let free = net_charge(&seq, 7.0, PkaSet::Emboss, Terminus::Free);
        let amidated = net_charge(&seq, 7.0, PkaSet::Emboss, Terminus::Amidated);
        assert!(amidated > free + 0.9);
    }

    #[test]
    fn isoelectric_point_has_near_zero_charge() {
        for sequence in ["GLFDIVKKVVGALGSL", "DEEKRHCY", "GIGKFLHSAKKFGKAFVGEIMNS"] {
            let seq = residues(sequence);
            for set in [PkaSet::Emboss, PkaSet::Lehninger] {
                let pi = isoelectric_point(&seq, set, Terminus::Free);
                assert!((0.0..=14.0).contains(&pi));
                let charge = net_charge(&seq, pi, set, Terminus::Free);
                assert!(charge.abs() < 1e-3, "charge at pI of {sequence} was {charge}");
            }
        }
    }

    #[test]
    fn isoelectric_point_clamps_for_groups_of_one_sign() {
        let capped_basic = residues("KKK");
        let pi = isoelectric_point(&capped_basic, PkaSet::Emboss, Terminus::Capped);
        assert_eq!(pi, 14.0);
    }

    #[test]
    fn instability_index_uses_dipeptide_weights() {
        let value = instability_index(&residues("AC")).unwrap();
        assert!((value - 10.0 / 2.0 * 44.94).abs() < EPS);
        assert_eq!(instability_index(&[]), None);
        assert_eq!(instability_index(&residues("K")), Some(0.0));
    }

    #[test]
    fn aliphatic_index_of_pure_alanine_is_one_hundred() {
        assert!((aliphatic_index(&residues("AAAA")).unwrap() - 100.0).abs() < EPS);
        assert!((aliphatic_index(&residues("VL")).unwrap() - (145.0 + 195.0)).abs() < EPS);
    }

    #[test]
    fn fractions_are_undefined_for_empty_sequences() {
        assert_eq!(aromaticity(&[]), None);
        assert_eq!(hydrophobic_ratio(&[]), None);
        assert_eq!(aliphatic_index(&[]), None);
    }

    #[test]
    fn aromaticity_and_hydrophobic_ratio_count_members() {
        let seq = residues("FWYKAC");
        assert!((aromaticity(&seq).unwrap() - 0.5).abs() < EPS);
        assert!((hydrophobic_ratio(&seq).unwrap() - 4.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn boman_index_is_negated_mean() {
        let scale = Scale::Scalar(BOMAN);
        let value = boman_index(&residues("RL"), &scale).unwrap();
        assert!((value - (14.92 - 4.92) / 2.0).abs() < EPS);
    }

    #[test]
    fn evaluate_dispatches_every_descriptor() {
        let seq = residues("KLAKLAKKLAKLAK");
        let scale = Scale::Scalar(BOMAN);
        let config = GlobalConfig::default();
        for descriptor in GlobalDescriptor::ALL {
            assert!(evaluate(descriptor, &seq, &config, &scale).is_some());
        }
        assert_eq!(
            evaluate(GlobalDescriptor::Length, &seq, &config, &scale),
            Some(14.0)
        );
    }
}
