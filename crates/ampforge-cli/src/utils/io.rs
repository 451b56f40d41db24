use crate::error::{CliError, Result};
use ampforge::core::io::fasta::FastaFile;
use ampforge::core::io::table::DescriptorTable;
use ampforge::core::io::traits::SequenceFile;
use ampforge::core::models::collection::SequenceCollection;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// On-disk layout of a sequence collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Fasta,
    Table,
}

impl Format {
    /// `.csv` files are descriptor tables; anything else is treated as FASTA.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Format::Table,
            _ => Format::Fasta,
        }
    }
}

pub fn read_collection(path: &Path) -> Result<SequenceCollection> {
    info!("Reading sequences from {:?}", path);
    let parsed = match Format::from_path(path) {
        Format::Fasta => FastaFile::read_from_path(path).map_err(anyhow::Error::from),
        Format::Table => DescriptorTable::read_from_path(path).map_err(anyhow::Error::from),
    };
    parsed.map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `collection` to `path`, or to stdout in `default_format` when no path is given.
pub fn write_collection(
    collection: &SequenceCollection,
    path: Option<&Path>,
    default_format: Format,
) -> Result<()> {
    let Some(path) = path else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let written = match default_format {
            Format::Fasta => FastaFile::write_to(collection, &mut handle).map_err(anyhow::Error::from),
            Format::Table => {
                DescriptorTable::write_to(collection, &mut handle).map_err(anyhow::Error::from)
            }
        };
        written.map_err(CliError::Other)?;
        handle.flush()?;
        return Ok(());
    };

    info!("Writing {} sequence(s) to {:?}", collection.len(), path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let written = match Format::from_path(path) {
        Format::Fasta => FastaFile::write_to_path(collection, path).map_err(anyhow::Error::from),
        Format::Table => {
            DescriptorTable::write_to_path(collection, path).map_err(anyhow::Error::from)
        }
    };
    written.map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}
