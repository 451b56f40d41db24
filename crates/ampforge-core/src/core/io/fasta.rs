use crate::core::io::traits::SequenceFile;
use crate::core::models::collection::SequenceCollection;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: sequence data before the first '>' header")]
    SequenceBeforeHeader { line: usize },
}

/// FASTA sequences: `>` header lines followed by one or more sequence lines.
///
/// Multi-line sequences are concatenated. The whole header after `>` becomes the row
/// name; an empty header gets a generated `Seq_<index>` name. Sequences are stored as
/// read and are not cleaned.
pub struct FastaFile;

impl SequenceFile for FastaFile {
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<SequenceCollection, Self::Error> {
        let mut collection = SequenceCollection::new();
        let mut current: Option<(String, String)> = None;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('>') {
                if let Some((name, sequence)) = current.take() {
                    push_record(&mut collection, name, sequence);
                }
                current = Some((header.trim().to_string(), String::new()));
            } else {
                match current.as_mut() {
                    Some((_, sequence)) => sequence.push_str(trimmed),
                    None => {
                        return Err(FastaError::SequenceBeforeHeader { line: line_num + 1 });
                    }
                }
            }
        }

        if let Some((name, sequence)) = current {
            push_record(&mut collection, name, sequence);
        }
        Ok(collection)
    }

    fn write_to(collection: &SequenceCollection, writer: &mut impl Write) -> Result<(), Self::Error> {
        for (_, entry) in collection.iter() {
            writeln!(writer, ">{}", entry.name)?;
            writeln!(writer, "{}", entry.sequence)?;
        }
        Ok(())
    }
}

fn push_record(collection: &mut SequenceCollection, name: String, sequence: String) {
    if name.is_empty() {
        collection.push_unnamed(sequence);
    } else {
        collection.push(sequence, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn read_from_concatenates_multi_line_sequences() {
        let data = ">pep1 magainin\nGIGKFLHSAK\nKFGKAFVGEIMNS\n\n>pep2\nKLAKLAK\n";
        let collection = FastaFile::read_from(&mut Cursor::new(data)).unwrap();
        assert_eq!(collection.names(), vec!["pep1 magainin", "pep2"]);
        assert_eq!(
            collection.sequences(),
            vec!["GIGKFLHSAKKFGKAFVGEIMNS", "KLAKLAK"]
        );
    }

    #[test]
    fn read_from_names_anonymous_records() {
        let data = ">\nKLA\n>\nGIG\n";
        let collection = FastaFile::read_from(&mut Cursor::new(data)).unwrap();
        assert_eq!(collection.names(), vec!["Seq_0", "Seq_1"]);
    }

    #[test]
    fn read_from_keeps_records_with_empty_sequences() {
        let data = ">empty\n>full\nKK\n";
        let collection = FastaFile::read_from(&mut Cursor::new(data)).unwrap();
        assert_eq!(collection.sequences(), vec!["", "KK"]);
    }

    #[test]
    fn read_from_rejects_sequence_before_header() {
        let data = "\nKLAKLAK\n>late\nGG\n";
        let err = FastaFile::read_from(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, FastaError::SequenceBeforeHeader { line: 2 }));
    }

    #[test]
    fn write_then_read_preserves_names_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.fasta");
        let original = SequenceCollection::from_sequences(
            ["KLAKLAK", "GIGAVLK"],
            Some(vec!["first".into(), "second".into()]),
        )
        .unwrap();

        FastaFile::write_to_path(&original, &path).unwrap();
        let restored = FastaFile::read_from_path(&path).unwrap();

        assert_eq!(restored.names(), original.names());
        assert_eq!(restored.sequences(), original.sequences());
    }
}
