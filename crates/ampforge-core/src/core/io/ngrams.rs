use crate::core::utils::cleaning::is_natural_only;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NgramLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid n-gram '{ngram}' in '{path}': {reason}")]
    Invalid {
        path: String,
        ngram: String,
        reason: &'static str,
    },
    #[error("N-gram table '{path}' is empty")]
    Empty { path: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NgramRecord {
    pub ngram: String,
    pub count: f64,
}

/// Loads an n-gram frequency table from a CSV file with `ngram,count` columns.
pub fn load_ngrams(path: &Path) -> Result<Vec<NgramRecord>, NgramLoadError> {
    let path_str = path.to_string_lossy().to_string();
    let file = std::fs::File::open(path).map_err(|e| NgramLoadError::Io {
        path: path_str.clone(),
        source: e,
    })?;
    read_ngrams(file, &path_str)
}

/// Parses an `ngram,count` CSV table. `source` names the input in error messages.
///
/// N-grams are uppercased and must consist of natural residues only; counts must be
/// positive and finite.
pub fn read_ngrams(reader: impl Read, source: &str) -> Result<Vec<NgramRecord>, NgramLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize::<NgramRecord>() {
        let mut record = result.map_err(|e| NgramLoadError::Csv {
            path: source.to_string(),
            source: e,
        })?;
        record.ngram = record.ngram.to_ascii_uppercase();

        let invalid = |reason| NgramLoadError::Invalid {
            path: source.to_string(),
            ngram: record.ngram.clone(),
            reason,
        };
        if record.ngram.is_empty() {
            return Err(invalid("n-gram is empty"));
        }
        if !is_natural_only(&record.ngram) {
            return Err(invalid("contains residues outside the natural alphabet"));
        }
        if !(record.count.is_finite() && record.count > 0.0) {
            return Err(invalid("count must be positive"));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(NgramLoadError::Empty {
            path: source.to_string(),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn read_ngrams_parses_and_uppercases() {
        let data = "ngram,count\nkk,12\n LLK , 3.5\n";
        let records = read_ngrams(data.as_bytes(), "inline").unwrap();
        assert_eq!(
            records,
            vec![
                NgramRecord {
                    ngram: "KK".into(),
                    count: 12.0
                },
                NgramRecord {
                    ngram: "LLK".into(),
                    count: 3.5
                },
            ]
        );
    }

    #[test]
    fn read_ngrams_rejects_wildcards_and_bad_counts() {
        let wildcard = read_ngrams("ngram,count\nKXK,1\n".as_bytes(), "inline");
        assert!(matches!(wildcard, Err(NgramLoadError::Invalid { .. })));
        let zero = read_ngrams("ngram,count\nKK,0\n".as_bytes(), "inline");
        assert!(matches!(zero, Err(NgramLoadError::Invalid { .. })));
    }

    #[test]
    fn read_ngrams_rejects_empty_tables() {
        let err = read_ngrams("ngram,count\n".as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, NgramLoadError::Empty { .. }));
    }

    #[test]
    fn load_ngrams_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ngrams.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "ngram,count\nKLA,4\nGIG,2").unwrap();

        let records = load_ngrams(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].ngram, "GIG");
    }

    #[test]
    fn load_ngrams_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_ngrams(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, NgramLoadError::Io { .. }));
    }
}
