//! # AMPforge Core Library
//!
//! A library for computing physicochemical descriptors of peptide sequences and for
//! generating synthetic peptide libraries from structural templates, with a focus on
//! antimicrobial peptides (AMPs).
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`SequenceCollection`, residues),
//!   amino-acid scales and their registry, cleaning utilities, helical-wheel geometry and
//!   plain-text I/O (FASTA, descriptor tables, custom scale files).
//!
//! - **[`engine`]: The Logic Core.** Validated configuration, the error taxonomy, the
//!   descriptor computations and the template-driven sequence generators. Work is spread
//!   over sequences with rayon when the `parallel` feature is enabled, with per-sequence
//!   random streams so results stay reproducible.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures (generate a family, build a
//!   mixed library, describe a collection) that tie `core` and `engine` together and report
//!   progress.

pub mod core;
pub mod engine;
pub mod workflows;
