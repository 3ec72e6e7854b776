//! # narrative-analysis
//!
//! The narrative spread pipeline:
//! loader → matcher → time normalizer → {amplification, community} → insights.
//!
//! [`NarrativeAnalyzer`] is the query facade a presentation layer calls. Every
//! query is a pure function of (dataset, rules, window, narrative).

pub mod aggregation;
pub mod analyzer;
pub mod insights;
pub mod loader;
pub mod matcher;
pub mod temporal;

pub use analyzer::{NarrativeAnalyzer, NarrativeReport, SpreadReport};
pub use loader::{load_path, load_reader, LoadDiagnostics, LoadedDataset};
pub use matcher::{assign, Assignment, KeywordMatcher};
