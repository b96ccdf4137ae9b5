use crate::{
    error::Result,
    plex::decode::{decode_libraries, decode_media},
    ranking::rank_item,
    report::{render, render_library_heading, write_json, TableOptions},
    traits::MediaServer,
};
use shared::{
    library::{LibraryKind, LibrarySection, MediaItem},
    report::{DuplicateGroup, DuplicateReport, LibraryFailure},
};
use std::io::Write;
use tracing::{debug, info, warn};

/// What to do when fetching or decoding one library's duplicates fails.
///
/// A failure on the library listing itself always aborts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole scan at the first failing library
    #[default]
    Abort,
    /// Record the failure and move on to the next library
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One heading and table per duplicate item, written as libraries are scanned
    #[default]
    Table,
    /// A single JSON report written once the scan is complete
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub policy: FailurePolicy,
    /// Library keys to scan; empty means every movie and show library
    pub sections: Vec<String>,
    pub format: OutputFormat,
    pub table: TableOptions,
}

pub struct DuplicateScanner<S> {
    server: S,
    options: ScanOptions,
}

impl<S: MediaServer> DuplicateScanner<S> {
    pub fn new(server: S, options: ScanOptions) -> Self {
        Self { server, options }
    }

    pub async fn libraries(&self) -> Result<Vec<LibrarySection>> {
        let body = self.server.fetch_libraries().await?;
        decode_libraries(&body)
    }

    fn wanted(&self, library: &LibrarySection) -> bool {
        self.options.sections.is_empty() || self.options.sections.contains(&library.key)
    }

    /// Fetches, decodes and ranks the duplicates of one library.
    ///
    /// Returns `None` for library types that have no duplicate query.
    async fn scan_library(&self, library: &LibrarySection) -> Result<Option<Vec<MediaItem>>> {
        let body = match library.kind {
            LibraryKind::Movie => self.server.fetch_duplicate_movies(&library.key).await?,
            LibraryKind::Show => self.server.fetch_duplicate_episodes(&library.key).await?,
            LibraryKind::Other(_) => return Ok(None),
        };
        let items = decode_media(&body)?;
        Ok(Some(items.into_iter().map(rank_item).collect()))
    }

    /// Runs the full scan, writing the report to `out` in the configured format.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<DuplicateReport> {
        let libraries = self.libraries().await?;
        info!(
            "Found {} libraries on {}",
            libraries.len(),
            self.server.name()
        );

        let mut report = DuplicateReport::new();

        for library in libraries {
            if !self.wanted(&library) {
                debug!("Library {} ({}) not selected", library.title, library.key);
                continue;
            }

            let items = match self.scan_library(&library).await {
                Ok(Some(items)) => items,
                Ok(None) => {
                    debug!(
                        "Skipping library {} of type {}",
                        library.title, library.kind
                    );
                    continue;
                }
                Err(e) => match self.options.policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        warn!("Library {} ({}) failed: {}", library.title, library.key, e);
                        report.libraries_failed.push(LibraryFailure {
                            library,
                            error: e.to_string(),
                        });
                        continue;
                    }
                },
            };

            info!(
                "Library {} has {} duplicate items",
                library.title,
                items.len()
            );

            if self.options.format == OutputFormat::Table {
                render_library_heading(out, &library)?;
                for item in &items {
                    render(out, item, self.options.table)?;
                }
            }

            for item in items {
                report.push_group(DuplicateGroup {
                    library_key: library.key.clone(),
                    title: item.display_title(),
                    item,
                });
            }
            report.libraries_scanned.push(library);
        }

        if self.options.format == OutputFormat::Json {
            write_json(out, &report)?;
        }
        out.flush()?;

        Ok(report)
    }
}
