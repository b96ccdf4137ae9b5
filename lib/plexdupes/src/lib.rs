pub mod error;
pub mod plex;
pub mod ranking;
pub mod report;
pub mod scanner;
pub mod traits;

pub use error::{PlexError, Result};
pub use plex::{PlexClient, PlexClientBuilder};
pub use report::TableOptions;
pub use scanner::{DuplicateScanner, FailurePolicy, OutputFormat, ScanOptions};
pub use traits::MediaServer;
