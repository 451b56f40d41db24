use super::ids::SequenceId;
use super::residue::AminoAcid;
use crate::core::utils::cleaning::{
    CleaningIssue, clean_sequence, contains_any, unnatural_fraction,
};
use crate::core::utils::random::stream_rng;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use slotmap::SlotMap;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum CollectionError {
    #[error("Got {names} names for {sequences} sequences")]
    NameCountMismatch { sequences: usize, names: usize },

    #[error("Column '{column}' has {values} values but the collection has {rows} rows")]
    ColumnLengthMismatch {
        column: String,
        values: usize,
        rows: usize,
    },

    #[error("Unknown descriptor column: '{0}'")]
    UnknownColumn(String),

    #[error("Cannot select {requested} sequences from a collection of {available}")]
    SelectionTooLarge { requested: usize, available: usize },

    #[error("Invalid probability {0}: must lie within [0, 1]")]
    InvalidProbability(f64),
}

/// Where `mutate_aa` may place substitutions within each sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationSites {
    /// Fixed zero-based positions; positions past the end of a sequence are ignored.
    Positions(Vec<usize>),
    /// This many distinct positions chosen at random per sequence.
    Random(usize),
}

/// One row of a [`SequenceCollection`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub sequence: String,
    pub name: String,
    values: Vec<Option<f64>>,
}

impl Entry {
    /// Descriptor values in the order of [`SequenceCollection::columns`].
    /// `None` marks an undefined value.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// An ordered batch of peptide sequences with per-row names and descriptor values.
///
/// Rows live in a slot map and are ordered by a separate index vector. Every mutating
/// operation inserts or removes whole rows, so sequences, names and descriptor rows can
/// never drift out of alignment.
#[derive(Debug, Clone, Default)]
pub struct SequenceCollection {
    entries: SlotMap<SequenceId, Entry>,
    order: Vec<SequenceId>,
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
    /// Rows ever inserted; numbers generated names so removals never lead to reuse.
    inserted: usize,
}

impl SequenceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from sequences and optional names.
    ///
    /// Missing names are generated as `Seq_<index>`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NameCountMismatch`] if `names` is given with a
    /// different length than `sequences`.
    pub fn from_sequences<S: Into<String>>(
        sequences: impl IntoIterator<Item = S>,
        names: Option<Vec<String>>,
    ) -> Result<Self, CollectionError> {
        let sequences: Vec<String> = sequences.into_iter().map(Into::into).collect();
        let mut collection = Self::new();

        match names {
            Some(names) => {
                if names.len() != sequences.len() {
                    return Err(CollectionError::NameCountMismatch {
                        sequences: sequences.len(),
                        names: names.len(),
                    });
                }
                for (sequence, name) in sequences.into_iter().zip(names) {
                    collection.push(sequence, name);
                }
            }
            None => {
                for sequence in sequences {
                    collection.push_unnamed(sequence);
                }
            }
        }
        Ok(collection)
    }

    /// Appends a row; its descriptor values start out undefined.
    pub fn push(&mut self, sequence: impl Into<String>, name: impl Into<String>) -> SequenceId {
        let id = self.entries.insert(Entry {
            sequence: sequence.into(),
            name: name.into(),
            values: vec![None; self.columns.len()],
        });
        self.order.push(id);
        self.inserted += 1;
        id
    }

    /// Appends a row named `Seq_<n>`, `n` counting every row inserted so far.
    pub fn push_unnamed(&mut self, sequence: impl Into<String>) -> SequenceId {
        let name = format!("Seq_{}", self.inserted);
        self.push(sequence, name)
    }

    /// Appends all rows of `other`, aligning descriptor columns by name.
    pub fn extend(&mut self, other: SequenceCollection) {
        for column in &other.columns {
            self.ensure_column(column);
        }
        let mapping: Vec<usize> = other
            .columns
            .iter()
            .map(|c| self.column_index[c])
            .collect();

        for id in other.order {
            let Some(entry) = other.entries.get(id) else {
                continue;
            };
            let mut values = vec![None; self.columns.len()];
            for (source, &target) in mapping.iter().enumerate() {
                values[target] = entry.values[source];
            }
            let new_id = self.entries.insert(Entry {
                sequence: entry.sequence.clone(),
                name: entry.name.clone(),
                values,
            });
            self.order.push(new_id);
            self.inserted += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: SequenceId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> &[SequenceId] {
        &self.order
    }

    /// Iterates rows in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (SequenceId, &Entry)> + '_ {
        self.order.iter().map(|&id| (id, &self.entries[id]))
    }

    pub fn sequences(&self) -> Vec<&str> {
        self.iter().map(|(_, e)| e.sequence.as_str()).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(_, e)| e.name.as_str()).collect()
    }

    /// Descriptor column names in insertion order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index.contains_key(column)
    }

    pub fn column(&self, column: &str) -> Result<Vec<Option<f64>>, CollectionError> {
        let index = self.column_position(column)?;
        Ok(self.iter().map(|(_, e)| e.values[index]).collect())
    }

    pub fn value(&self, id: SequenceId, column: &str) -> Option<f64> {
        let index = *self.column_index.get(column)?;
        self.entries.get(id)?.values[index]
    }

    /// Adds or replaces a single descriptor column.
    pub fn set_column(
        &mut self,
        column: &str,
        values: Vec<Option<f64>>,
    ) -> Result<(), CollectionError> {
        if values.len() != self.len() {
            return Err(CollectionError::ColumnLengthMismatch {
                column: column.to_string(),
                values: values.len(),
                rows: self.len(),
            });
        }
        let index = self.ensure_column(column);
        for (&id, value) in self.order.iter().zip(values) {
            self.entries[id].values[index] = value;
        }
        Ok(())
    }

    /// Adds or replaces several columns at once from row-major values.
    ///
    /// Each row must hold exactly one value per entry of `columns`.
    pub fn set_columns(
        &mut self,
        columns: &[String],
        rows: Vec<Vec<Option<f64>>>,
    ) -> Result<(), CollectionError> {
        if rows.len() != self.len() {
            return Err(CollectionError::ColumnLengthMismatch {
                column: columns.join(","),
                values: rows.len(),
                rows: self.len(),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != columns.len()) {
            return Err(CollectionError::ColumnLengthMismatch {
                column: columns.join(","),
                values: bad.len(),
                rows: columns.len(),
            });
        }

        let indices: Vec<usize> = columns.iter().map(|c| self.ensure_column(c)).collect();
        for (&id, row) in self.order.iter().zip(rows) {
            let entry = &mut self.entries[id];
            for (&index, value) in indices.iter().zip(row) {
                entry.values[index] = value;
            }
        }
        Ok(())
    }

    /// Keeps only rows for which `keep` returns `true`, removing each rejected row as a
    /// whole. Returns the number of removed rows.
    pub fn retain(&mut self, mut keep: impl FnMut(&Entry) -> bool) -> usize {
        let before = self.order.len();
        let entries = &mut self.entries;
        self.order.retain(|&id| {
            if keep(&entries[id]) {
                true
            } else {
                entries.remove(id);
                false
            }
        });
        before - self.order.len()
    }

    /// Keeps the first `n` rows.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.order.len() {
            return;
        }
        for id in self.order.drain(n..) {
            self.entries.remove(id);
        }
    }

    // --- Cleaning ---

    /// Uppercases every sequence, strips whitespace and replaces unrecognized symbols
    /// with the wildcard. Returns one issue per replaced symbol.
    pub fn clean(&mut self) -> Vec<CleaningIssue> {
        let mut issues = Vec::new();
        for &id in &self.order {
            let entry = &mut self.entries[id];
            let cleaned = clean_sequence(&entry.sequence);
            issues.extend(
                cleaned
                    .replaced
                    .iter()
                    .map(|&(position, symbol)| CleaningIssue {
                        name: entry.name.clone(),
                        position,
                        symbol,
                    }),
            );
            entry.sequence = cleaned.sequence;
        }
        if !issues.is_empty() {
            debug!(replaced = issues.len(), "Cleaning replaced unrecognized symbols.");
        }
        issues
    }

    /// Removes sequences whose fraction of non-natural residues exceeds
    /// `max_unnatural_fraction`.
    pub fn filter_unnatural(&mut self, max_unnatural_fraction: f64) -> usize {
        let removed = self.retain(|e| unnatural_fraction(&e.sequence) <= max_unnatural_fraction);
        debug!(removed, max_unnatural_fraction, "Filtered unnatural sequences.");
        removed
    }

    /// Removes every sequence containing a non-natural residue.
    pub fn keep_natural_aa(&mut self) -> usize {
        self.filter_unnatural(0.0)
    }

    /// Removes every sequence containing any of `residues`.
    pub fn filter_aa(&mut self, residues: &[char]) -> usize {
        self.retain(|e| !contains_any(&e.sequence, residues))
    }

    // --- Filtering and selection ---

    /// Removes sequences identical to an earlier one, keeping the first occurrence.
    pub fn filter_duplicates(&mut self) -> usize {
        let mut seen = HashSet::new();
        let removed = self.retain(|e| seen.insert(e.sequence.clone()));
        debug!(removed, "Removed duplicate sequences.");
        removed
    }

    /// Removes sequences that also appear in `other`.
    pub fn filter_sequences(&mut self, other: &SequenceCollection) -> usize {
        let known: HashSet<&str> = other.iter().map(|(_, e)| e.sequence.as_str()).collect();
        self.retain(|e| !known.contains(e.sequence.as_str()))
    }

    /// Removes rows whose value in `column` is undefined or outside `[min, max]`.
    pub fn filter_values(
        &mut self,
        column: &str,
        min: f64,
        max: f64,
    ) -> Result<usize, CollectionError> {
        let index = self.column_position(column)?;
        let removed = self.retain(|e| matches!(e.values[index], Some(v) if v >= min && v <= max));
        debug!(removed, column, min, max, "Filtered rows by descriptor value.");
        Ok(removed)
    }

    /// Returns the `n` rows with the smallest values of `column` (ascending) followed by
    /// the `n` largest of the remaining rows (descending).
    ///
    /// Ties keep collection order and no row is returned twice. Rows with undefined
    /// values are not considered.
    pub fn minmax_selection(&self, column: &str, n: usize) -> Result<Self, CollectionError> {
        let index = self.column_position(column)?;
        let mut ranked: Vec<(usize, SequenceId, f64)> = self
            .order
            .iter()
            .enumerate()
            .filter_map(|(pos, &id)| self.entries[id].values[index].map(|v| (pos, id, v)))
            .collect();
        ranked.sort_by(|a, b| a.2.total_cmp(&b.2));

        let mut chosen = Vec::with_capacity(2 * n);
        let mut taken = HashSet::new();
        for &(_, id, _) in ranked.iter().take(n) {
            if taken.insert(id) {
                chosen.push(id);
            }
        }

        let mut largest = ranked.clone();
        largest.sort_by(|a, b| b.2.total_cmp(&a.2).then(a.0.cmp(&b.0)));
        for &(_, id, _) in largest.iter().filter(|r| !taken.contains(&r.1)).take(n) {
            chosen.push(id);
        }

        Ok(self.subset(&chosen))
    }

    /// Selects `n` rows uniformly at random without replacement, in collection order.
    pub fn random_selection(&self, n: usize, seed: u64) -> Result<Self, CollectionError> {
        if n > self.len() {
            return Err(CollectionError::SelectionTooLarge {
                requested: n,
                available: self.len(),
            });
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut picked = (0..self.len()).choose_multiple(&mut rng, n);
        picked.sort_unstable();
        let ids: Vec<SequenceId> = picked.into_iter().map(|i| self.order[i]).collect();
        Ok(self.subset(&ids))
    }

    /// Mutates residues at `sites` of every sequence, each with `probability`.
    ///
    /// A mutated residue is replaced by a uniformly drawn natural amino acid different
    /// from the original. Descriptor values of mutated rows become undefined.
    /// Returns the total number of substituted residues.
    pub fn mutate_aa(
        &mut self,
        sites: &MutationSites,
        probability: f64,
        seed: u64,
    ) -> Result<usize, CollectionError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(CollectionError::InvalidProbability(probability));
        }

        let mut total = 0;
        for (row, &id) in self.order.iter().enumerate() {
            let mut rng = stream_rng(seed, row);
            let entry = &mut self.entries[id];
            let mut residues: Vec<char> = entry.sequence.chars().collect();

            let positions: Vec<usize> = match sites {
                MutationSites::Positions(positions) => positions
                    .iter()
                    .copied()
                    .filter(|&p| p < residues.len())
                    .collect(),
                MutationSites::Random(count) => {
                    let mut picked =
                        (0..residues.len()).choose_multiple(&mut rng, (*count).min(residues.len()));
                    picked.sort_unstable();
                    picked
                }
            };

            let mut mutated = 0;
            for position in positions {
                if !rng.gen_bool(probability) {
                    continue;
                }
                let original = residues[position];
                let candidates: Vec<char> = AminoAcid::ALL
                    .iter()
                    .map(|aa| aa.symbol())
                    .filter(|&c| c != original)
                    .collect();
                if let Some(&replacement) = candidates.choose(&mut rng) {
                    residues[position] = replacement;
                    mutated += 1;
                }
            }

            if mutated > 0 {
                entry.sequence = residues.into_iter().collect();
                entry.values.iter_mut().for_each(|v| *v = None);
                total += mutated;
            }
        }
        debug!(mutated = total, probability, "Mutated residues.");
        Ok(total)
    }

    fn subset(&self, ids: &[SequenceId]) -> Self {
        let mut subset = Self {
            columns: self.columns.clone(),
            column_index: self.column_index.clone(),
            inserted: self.inserted,
            ..Self::default()
        };
        for &id in ids {
            let new_id = subset.entries.insert(self.entries[id].clone());
            subset.order.push(new_id);
        }
        subset
    }

    fn column_position(&self, column: &str) -> Result<usize, CollectionError> {
        self.column_index
            .get(column)
            .copied()
            .ok_or_else(|| CollectionError::UnknownColumn(column.to_string()))
    }

    fn ensure_column(&mut self, column: &str) -> usize {
        if let Some(&index) = self.column_index.get(column) {
            return index;
        }
        let index = self.columns.len();
        self.columns.push(column.to_string());
        self.column_index.insert(column.to_string(), index);
        for entry in self.entries.values_mut() {
            entry.values.push(None);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::is_natural;

    fn collection(seqs: &[&str]) -> SequenceCollection {
        SequenceCollection::from_sequences(seqs.iter().copied(), None).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn generates_names_when_absent() {
            let c = collection(&["KLA", "GIG"]);
            assert_eq!(c.names(), vec!["Seq_0", "Seq_1"]);
        }

        #[test]
        fn generated_names_are_not_reused_after_removal() {
            let mut c = collection(&["KLA", "GIG", "KLA"]);
            c.filter_duplicates();
            c.push_unnamed("AAA");
            assert_eq!(c.names(), vec!["Seq_0", "Seq_1", "Seq_3"]);

            c.truncate(1);
            c.push_unnamed("LLL");
            assert_eq!(c.names(), vec!["Seq_0", "Seq_4"]);
        }

        #[test]
        fn rejects_mismatched_names() {
            let result = SequenceCollection::from_sequences(["KLA"], Some(vec![]));
            assert_eq!(
                result.unwrap_err(),
                CollectionError::NameCountMismatch {
                    sequences: 1,
                    names: 0
                }
            );
        }

        #[test]
        fn push_after_columns_fills_undefined_values() {
            let mut c = collection(&["KLA"]);
            c.set_column("length", vec![Some(3.0)]).unwrap();
            let id = c.push("GG", "new");
            assert_eq!(c.value(id, "length"), None);
            assert_eq!(c.get(id).unwrap().values().len(), 1);
        }

        #[test]
        fn extend_aligns_columns_by_name() {
            let mut a = collection(&["KLA"]);
            a.set_column("x", vec![Some(1.0)]).unwrap();
            let mut b = collection(&["GIG"]);
            b.set_column("y", vec![Some(2.0)]).unwrap();
            a.extend(b);
            assert_eq!(a.columns(), &["x".to_string(), "y".to_string()]);
            assert_eq!(a.column("x").unwrap(), vec![Some(1.0), None]);
            assert_eq!(a.column("y").unwrap(), vec![None, Some(2.0)]);
        }
    }

    mod columns {
        use super::*;

        #[test]
        fn set_column_rejects_wrong_length() {
            let mut c = collection(&["KLA", "GIG"]);
            let result = c.set_column("length", vec![Some(3.0)]);
            assert!(matches!(
                result,
                Err(CollectionError::ColumnLengthMismatch { .. })
            ));
        }

        #[test]
        fn set_columns_writes_row_major_values() {
            let mut c = collection(&["KLA", "GIG"]);
            let names = vec!["a".to_string(), "b".to_string()];
            c.set_columns(&names, vec![vec![Some(1.0), Some(2.0)], vec![None, Some(4.0)]])
                .unwrap();
            assert_eq!(c.column("a").unwrap(), vec![Some(1.0), None]);
            assert_eq!(c.column("b").unwrap(), vec![Some(2.0), Some(4.0)]);
        }

        #[test]
        fn unknown_column_is_an_error() {
            let c = collection(&["KLA"]);
            assert_eq!(
                c.column("charge").unwrap_err(),
                CollectionError::UnknownColumn("charge".to_string())
            );
        }
    }

    mod filtering {
        use super::*;

        #[test]
        fn filter_duplicates_keeps_first_occurrence_and_its_row() {
            let mut c = SequenceCollection::from_sequences(
                ["AAA", "KKK", "AAA", "GGG", "KKK"],
                Some(vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()]),
            )
            .unwrap();
            c.set_column("v", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)])
                .unwrap();

            assert_eq!(c.filter_duplicates(), 2);
            assert_eq!(c.sequences(), vec!["AAA", "KKK", "GGG"]);
            assert_eq!(c.names(), vec!["a", "b", "d"]);
            assert_eq!(c.column("v").unwrap(), vec![Some(1.0), Some(2.0), Some(4.0)]);
        }

        #[test]
        fn filter_duplicates_is_idempotent() {
            let mut c = collection(&["AAA", "KKK", "AAA", "GGG", "KKK", "GGG"]);
            c.filter_duplicates();
            let once: Vec<String> = c.sequences().iter().map(|s| s.to_string()).collect();
            assert_eq!(c.filter_duplicates(), 0);
            assert_eq!(c.sequences(), once);
        }

        #[test]
        fn filter_sequences_removes_known_members() {
            let mut c = collection(&["AAA", "KKK", "GGG"]);
            let known = collection(&["KKK", "WWW"]);
            assert_eq!(c.filter_sequences(&known), 1);
            assert_eq!(c.sequences(), vec!["AAA", "GGG"]);
        }

        #[test]
        fn filter_values_drops_out_of_range_and_undefined_rows() {
            let mut c = collection(&["A", "B", "C", "D"]);
            c.set_column("v", vec![Some(1.0), Some(5.0), None, Some(3.0)])
                .unwrap();
            assert_eq!(c.filter_values("v", 2.0, 5.0).unwrap(), 2);
            assert_eq!(c.sequences(), vec!["B", "D"]);
        }

        #[test]
        fn filtering_to_zero_rows_is_valid() {
            let mut c = collection(&["AAA", "KKK"]);
            c.set_column("v", vec![Some(1.0), Some(2.0)]).unwrap();
            c.filter_values("v", 10.0, 20.0).unwrap();
            assert!(c.is_empty());
            assert_eq!(c.column("v").unwrap(), Vec::<Option<f64>>::new());
        }

        #[test]
        fn truncate_keeps_leading_rows() {
            let mut c = collection(&["AAA", "KKK", "GGG"]);
            c.truncate(2);
            assert_eq!(c.sequences(), vec!["AAA", "KKK"]);
            c.truncate(10);
            assert_eq!(c.len(), 2);
        }
    }

    mod cleaning {
        use super::*;

        #[test]
        fn clean_then_keep_natural_leaves_only_natural_residues() {
            let mut c = collection(&["klak la", "KLBK", "GIG*", "", "ACDEFGHIKLMNPQRSTVWY"]);
            let issues = c.clean();
            assert_eq!(issues.len(), 2);
            c.keep_natural_aa();
            for seq in c.sequences() {
                assert!(seq.chars().all(is_natural));
            }
            assert_eq!(c.sequences(), vec!["KLAKLA", "", "ACDEFGHIKLMNPQRSTVWY"]);
        }

        #[test]
        fn filter_unnatural_respects_threshold() {
            let mut c = collection(&["AXAA", "AXXA", "AAAA"]);
            assert_eq!(c.filter_unnatural(0.25), 1);
            assert_eq!(c.sequences(), vec!["AXAA", "AAAA"]);
        }

        #[test]
        fn filter_aa_removes_sequences_with_listed_residues() {
            let mut c = collection(&["KLC", "KLM", "KLA"]);
            assert_eq!(c.filter_aa(&['C', 'M']), 2);
            assert_eq!(c.sequences(), vec!["KLA"]);
        }
    }

    mod selection {
        use super::*;

        fn valued() -> SequenceCollection {
            let mut c = collection(&["A", "B", "C", "D", "E"]);
            c.set_column("v", vec![Some(3.0), Some(1.0), Some(3.0), None, Some(9.0)])
                .unwrap();
            c
        }

        #[test]
        fn minmax_selection_returns_extremes_with_stable_ties() {
            let c = valued();
            let selected = c.minmax_selection("v", 2).unwrap();
            assert_eq!(selected.sequences(), vec!["B", "A", "E", "C"]);
            assert_eq!(
                selected.column("v").unwrap(),
                vec![Some(1.0), Some(3.0), Some(9.0), Some(3.0)]
            );
        }

        #[test]
        fn minmax_selection_never_repeats_rows() {
            let c = valued();
            let selected = c.minmax_selection("v", 10).unwrap();
            assert_eq!(selected.len(), 4);
        }

        #[test]
        fn random_selection_is_reproducible_and_without_replacement() {
            let c = collection(&["A", "B", "C", "D", "E", "F", "G", "H"]);
            let first = c.random_selection(4, 7).unwrap();
            let second = c.random_selection(4, 7).unwrap();
            assert_eq!(first.sequences(), second.sequences());
            let unique: HashSet<&str> = first.sequences().into_iter().collect();
            assert_eq!(unique.len(), 4);
        }

        #[test]
        fn random_selection_rejects_too_many() {
            let c = collection(&["A"]);
            assert_eq!(
                c.random_selection(2, 0).unwrap_err(),
                CollectionError::SelectionTooLarge {
                    requested: 2,
                    available: 1
                }
            );
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn certain_mutation_changes_every_listed_position() {
            let mut c = collection(&["AAAAAA", "GGGGGG"]);
            let n = c
                .mutate_aa(&MutationSites::Positions(vec![0, 3, 99]), 1.0, 11)
                .unwrap();
            assert_eq!(n, 4);
            for seq in c.sequences() {
                let chars: Vec<char> = seq.chars().collect();
                assert_ne!(chars[0], chars[1]);
                assert_ne!(chars[3], chars[2]);
                assert!(chars.iter().all(|&ch| is_natural(ch)));
            }
        }

        #[test]
        fn zero_probability_leaves_sequences_untouched() {
            let mut c = collection(&["KLAKLAK"]);
            c.set_column("v", vec![Some(1.0)]).unwrap();
            let n = c.mutate_aa(&MutationSites::Random(3), 0.0, 1).unwrap();
            assert_eq!(n, 0);
            assert_eq!(c.sequences(), vec!["KLAKLAK"]);
            assert_eq!(c.column("v").unwrap(), vec![Some(1.0)]);
        }

        #[test]
        fn mutation_invalidates_descriptor_values() {
            let mut c = collection(&["KLAKLAK"]);
            c.set_column("v", vec![Some(1.0)]).unwrap();
            c.mutate_aa(&MutationSites::Random(2), 1.0, 5).unwrap();
            assert_eq!(c.column("v").unwrap(), vec![None]);
        }

        #[test]
        fn invalid_probability_is_rejected() {
            let mut c = collection(&["KLAKLAK"]);
            let result = c.mutate_aa(&MutationSites::Random(1), 1.5, 0);
            assert_eq!(result.unwrap_err(), CollectionError::InvalidProbability(1.5));
            assert!(matches!(
                c.mutate_aa(&MutationSites::Random(1), f64::NAN, 0),
                Err(CollectionError::InvalidProbability(_))
            ));
            assert_eq!(c.sequences(), vec!["KLAKLAK"]);
        }
    }
}
