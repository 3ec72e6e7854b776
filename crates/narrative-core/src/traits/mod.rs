//! Extension points of the pipeline.

pub mod matcher;

pub use matcher::Matcher;
