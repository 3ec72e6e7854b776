//! Record Loader: line-delimited JSON → ordered `Post` sequence.
//!
//! Malformed lines are skipped and counted; only an unreadable source or a
//! source with zero parseable records fails the load.

pub mod reader;
pub mod record;

pub use reader::{load_path, load_reader, LoadDiagnostics, LoadedDataset};
pub use record::{parse_line, RecordError};
