use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::library::{LibrarySection, MediaItem};

/// A duplicate media item with its variants already ranked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub library_key: String,
    pub title: String,
    pub item: MediaItem,
}

/// A library that could not be scanned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryFailure {
    pub library: LibrarySection,
    pub error: String,
}

/// Result of duplicate detection across all scanned libraries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub generated_at: DateTime<Utc>,
    pub libraries_scanned: Vec<LibrarySection>,
    pub libraries_failed: Vec<LibraryFailure>,
    pub duplicates: Vec<DuplicateGroup>,
    pub total_duplicate_files: usize,
}

impl DuplicateReport {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            libraries_scanned: Vec::new(),
            libraries_failed: Vec::new(),
            duplicates: Vec::new(),
            total_duplicate_files: 0,
        }
    }

    pub fn push_group(&mut self, group: DuplicateGroup) {
        self.total_duplicate_files += group.item.variants.len();
        self.duplicates.push(group);
    }
}

impl Default for DuplicateReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{LibraryKind, MediaKind};

    #[test]
    fn totals_follow_pushed_groups_and_serialize() {
        let mut report = DuplicateReport::new();
        report.libraries_scanned.push(LibrarySection {
            key: "1".to_string(),
            title: "Movies".to_string(),
            kind: LibraryKind::Movie,
        });
        report.push_group(DuplicateGroup {
            library_key: "1".to_string(),
            title: "Heat".to_string(),
            item: MediaItem {
                title: "Heat".to_string(),
                key: "/library/metadata/7".to_string(),
                rating_key: "7".to_string(),
                kind: MediaKind::Movie,
                year: "1995".to_string(),
                show_title: String::new(),
                season: String::new(),
                episode: String::new(),
                variants: vec![],
            },
        });

        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.total_duplicate_files, 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["libraries_scanned"][0]["kind"], "movie");
        assert_eq!(json["duplicates"][0]["item"]["year"], "1995");
    }
}
