use crate::core::models::collection::SequenceCollection;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing sequence file formats.
///
/// Implementors handle format-specific parsing and serialization of a
/// [`SequenceCollection`]; the path-based helpers wrap files in buffered streams.
pub trait SequenceFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a collection from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<SequenceCollection, Self::Error>;

    /// Writes a collection to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(collection: &SequenceCollection, writer: &mut impl Write) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<SequenceCollection, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(
        collection: &SequenceCollection,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(collection, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
