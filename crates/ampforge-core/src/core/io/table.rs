use crate::core::io::traits::SequenceFile;
use crate::core::models::collection::{CollectionError, SequenceCollection};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Marker written for undefined descriptor values.
pub const MISSING_VALUE: &str = "NA";

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Descriptor table must start with 'name,sequence' columns")]
    MissingKeyColumns,
    #[error("Invalid value '{value}' in column '{column}' on row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("Inconsistent table: {0}")]
    Collection(#[from] CollectionError),
}

/// Comma-separated descriptor table.
///
/// The header is `name,sequence` followed by the descriptor columns in insertion
/// order. Undefined values are written as `NA`.
pub struct DescriptorTable;

impl SequenceFile for DescriptorTable {
    type Error = TableError;

    fn read_from(reader: &mut impl BufRead) -> Result<SequenceCollection, Self::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        if headers.get(0) != Some("name") || headers.get(1) != Some("sequence") {
            return Err(TableError::MissingKeyColumns);
        }
        let columns: Vec<String> = headers.iter().skip(2).map(str::to_string).collect();

        let mut collection = SequenceCollection::new();
        let mut rows = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            let name = record.get(0).unwrap_or_default();
            let sequence = record.get(1).unwrap_or_default();
            collection.push(sequence, name);

            let values = columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let raw = record.get(i + 2).unwrap_or(MISSING_VALUE).trim();
                    if raw == MISSING_VALUE || raw.is_empty() {
                        return Ok(None);
                    }
                    raw.parse::<f64>()
                        .map(Some)
                        .map_err(|_| TableError::InvalidValue {
                            row: row + 1,
                            column: column.clone(),
                            value: raw.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(values);
        }

        collection.set_columns(&columns, rows)?;
        Ok(collection)
    }

    fn write_to(collection: &SequenceCollection, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec!["name", "sequence"];
        header.extend(collection.columns().iter().map(String::as_str));
        csv_writer.write_record(&header)?;

        for (_, entry) in collection.iter() {
            let mut record = vec![entry.name.clone(), entry.sequence.clone()];
            record.extend(entry.values().iter().map(|value| match value {
                Some(v) => v.to_string(),
                None => MISSING_VALUE.to_string(),
            }));
            csv_writer.write_record(&record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> SequenceCollection {
        let mut collection = SequenceCollection::from_sequences(
            ["KLAKLAK", "GIG"],
            Some(vec!["a".into(), "b, quoted".into()]),
        )
        .unwrap();
        collection
            .set_column("charge", vec![Some(3.5), None])
            .unwrap();
        collection
            .set_column("length", vec![Some(7.0), Some(3.0)])
            .unwrap();
        collection
    }

    #[test]
    fn write_to_emits_header_and_na_markers() {
        let mut buffer = Vec::new();
        DescriptorTable::write_to(&sample(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "name,sequence,charge,length");
        assert_eq!(lines[1], "a,KLAKLAK,3.5,7");
        assert_eq!(lines[2], "\"b, quoted\",GIG,NA,3");
    }

    #[test]
    fn read_from_restores_columns_and_missing_values() {
        let mut buffer = Vec::new();
        DescriptorTable::write_to(&sample(), &mut buffer).unwrap();
        let restored = DescriptorTable::read_from(&mut Cursor::new(buffer)).unwrap();

        assert_eq!(restored.names(), vec!["a", "b, quoted"]);
        assert_eq!(restored.columns(), &["charge".to_string(), "length".to_string()]);
        assert_eq!(restored.column("charge").unwrap(), vec![Some(3.5), None]);
    }

    #[test]
    fn read_from_rejects_tables_without_key_columns() {
        let data = "id,seq\n1,KLA\n";
        let err = DescriptorTable::read_from(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, TableError::MissingKeyColumns));
    }

    #[test]
    fn read_from_reports_unparseable_values() {
        let data = "name,sequence,charge\nx,KLA,high\n";
        let err = DescriptorTable::read_from(&mut Cursor::new(data)).unwrap_err();
        match err {
            TableError::InvalidValue { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "charge");
                assert_eq!(value, "high");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
