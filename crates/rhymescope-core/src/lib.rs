//! Core library for rhymescope.
//!
//! This crate provides the rhyme-analysis engine used by the `rhymescope`
//! CLI and any downstream consumers: word normalization, phonetic
//! similarity, rhyme clustering with color assignment, syllable
//! highlighting, and composite quality scoring.
//!
//! # Modules
//!
//! - [`analysis`] - Full analysis pipeline and its report types
//! - [`clustering`] - Greedy rhyme grouping and the color palette
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`highlight`] - Syllable-level highlight spans
//! - [`phonetics`] - The [`PhoneticDictionary`] boundary plus the built-in
//!   and CMU-format implementations
//! - [`quality`] - Composite quality scoring
//! - [`similarity`] - Phonetic similarity and the sensitivity mapping
//! - [`text`] - Line splitting, tokenization, and word normalization
//!
//! # Quick Start
//!
//! ```
//! use rhymescope_core::{DEFAULT_SENSITIVITY, analyze};
//! use rhymescope_core::phonetics::builtin::BuiltinDictionary;
//!
//! let report = analyze("best test rest", DEFAULT_SENSITIVITY, &BuiltinDictionary);
//!
//! assert_eq!(report.groups.len(), 1);
//! println!("score: {:.1}", report.quality.overall_score);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod clustering;

pub mod config;

pub mod error;

pub mod highlight;

pub mod phonetics;

pub mod quality;

pub mod similarity;

pub mod text;

pub use analysis::{AnalysisReport, HighlightedWord, analyze};

pub use clustering::RhymeGroup;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};

pub use error::{ConfigError, ConfigResult, DictionaryError, DictionaryResult};

pub use highlight::SyllableSpan;

pub use phonetics::PhoneticDictionary;

pub use quality::{QualityScore, RhymeStats};

pub use similarity::{DEFAULT_SENSITIVITY, sensitivity_to_threshold, similarity};

pub use text::{WordToken, normalize_word};
