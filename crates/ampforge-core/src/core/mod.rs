//! # Core Module
//!
//! Fundamental building blocks shared by descriptor computation and sequence generation.
//!
//! - **Sequence Representation** ([`models`]) - Residues, the natural alphabet and the
//!   row-oriented `SequenceCollection`
//! - **Amino-Acid Scales** ([`scales`]) - Scale shapes, built-in reference tables and the
//!   name-keyed `ScaleRegistry`
//! - **File I/O** ([`io`]) - FASTA sequences, descriptor CSV tables and n-gram tables
//! - **Utilities** ([`utils`]) - Sequence cleaning and helical-wheel geometry

pub mod io;
pub mod models;
pub mod scales;
pub mod utils;
