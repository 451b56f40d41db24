//! Plain-text input and output for sequence collections.
//!
//! FASTA files and descriptor CSV tables share the [`traits::SequenceFile`] interface;
//! n-gram frequency tables have a dedicated loader.

pub mod fasta;
pub mod ngrams;
pub mod table;
pub mod traits;
