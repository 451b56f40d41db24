use crate::core::models::residue::{WILDCARD, is_natural, is_recognized};

/// A symbol that was replaced by the wildcard while cleaning a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningIssue {
    pub name: String,
    pub position: usize,
    pub symbol: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedSequence {
    pub sequence: String,
    /// `(position, original symbol)` for every symbol replaced by [`WILDCARD`].
    pub replaced: Vec<(usize, char)>,
}

/// Uppercases, strips whitespace and maps every symbol outside the recognized
/// alphabet to [`WILDCARD`].
pub fn clean_sequence(raw: &str) -> CleanedSequence {
    let mut sequence = String::with_capacity(raw.len());
    let mut replaced = Vec::new();

    for symbol in raw.chars().filter(|c| !c.is_whitespace()) {
        let upper = symbol.to_ascii_uppercase();
        if is_recognized(upper) {
            sequence.push(upper);
        } else {
            replaced.push((sequence.len(), symbol));
            sequence.push(WILDCARD);
        }
    }

    CleanedSequence { sequence, replaced }
}

/// Fraction of residues that are not one of the 20 natural amino acids.
///
/// An empty sequence has no unnatural residues and yields `0.0`.
pub fn unnatural_fraction(sequence: &str) -> f64 {
    let total = sequence.chars().count();
    if total == 0 {
        return 0.0;
    }
    let unnatural = sequence.chars().filter(|&c| !is_natural(c)).count();
    unnatural as f64 / total as f64
}

pub fn is_natural_only(sequence: &str) -> bool {
    sequence.chars().all(is_natural)
}

pub fn contains_any(sequence: &str, residues: &[char]) -> bool {
    sequence.chars().any(|c| residues.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_sequence_uppercases_and_strips_whitespace() {
        let cleaned = clean_sequence(" kla\tkLA \n");
        assert_eq!(cleaned.sequence, "KLAKLA");
        assert!(cleaned.replaced.is_empty());
    }

    #[test]
    fn clean_sequence_replaces_unknown_symbols_with_wildcard() {
        let cleaned = clean_sequence("AB1K");
        assert_eq!(cleaned.sequence, "AXXK");
        assert_eq!(cleaned.replaced, vec![(1, 'B'), (2, '1')]);
    }

    #[test]
    fn clean_sequence_keeps_existing_wildcards_without_reporting() {
        let cleaned = clean_sequence("AXK");
        assert_eq!(cleaned.sequence, "AXK");
        assert!(cleaned.replaced.is_empty());
    }

    #[test]
    fn unnatural_fraction_counts_wildcards() {
        assert_eq!(unnatural_fraction("AXKX"), 0.5);
        assert_eq!(unnatural_fraction("AAAA"), 0.0);
        assert_eq!(unnatural_fraction(""), 0.0);
    }

    #[test]
    fn contains_any_detects_listed_residues() {
        assert!(contains_any("GLFDIVK", &['C', 'K']));
        assert!(!contains_any("GLFDIVK", &['C', 'M']));
    }

    #[test]
    fn is_natural_only_rejects_wildcard() {
        assert!(is_natural_only("ACDEFGHIKLMNPQRSTVWY"));
        assert!(!is_natural_only("ACX"));
    }
}
