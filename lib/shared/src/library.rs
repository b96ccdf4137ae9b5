use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of content a library section holds.
///
/// Only movie and show sections are searched for duplicates; anything else
/// keeps the raw type reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    Movie,
    Show,
    Other(String),
}

impl From<String> for LibraryKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "movie" => LibraryKind::Movie,
            "show" => LibraryKind::Show,
            _ => LibraryKind::Other(s),
        }
    }
}

impl LibraryKind {
    pub fn as_str(&self) -> &str {
        match self {
            LibraryKind::Movie => "movie",
            LibraryKind::Show => "show",
            LibraryKind::Other(raw) => raw,
        }
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A top-level content collection on the server ("Movies", "TV Shows", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySection {
    pub key: String,
    pub title: String,
    pub kind: LibraryKind,
}

/// What a returned video entry represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Episode,
    Other(String),
}

impl From<String> for MediaKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "movie" => MediaKind::Movie,
            "episode" => MediaKind::Episode,
            _ => MediaKind::Other(s),
        }
    }
}

/// One physical encoded file backing a duplicate media item.
///
/// Numeric attributes are kept as the text the server sent so reports show
/// exactly what the server reported; use [`Variant::size_bytes`] for
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub size: String,
    pub width: String,
    pub height: String,
    pub video_codec: String,
    pub video_resolution: String,
    pub bitrate: String,
    pub container: String,
    pub file: String,
}

impl Variant {
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.trim().parse().ok()
    }
}

/// A movie or episode the server reported as having several files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    pub key: String,
    pub rating_key: String,
    pub kind: MediaKind,
    pub year: String,
    /// Show title, only set for episodes
    pub show_title: String,
    pub season: String,
    pub episode: String,
    pub variants: Vec<Variant>,
}

impl MediaItem {
    /// Title used in reports.
    ///
    /// Episodes are prefixed with their show and `SxxEyy` position when the
    /// server provides them, since bare episode titles are rarely unique.
    pub fn display_title(&self) -> String {
        if self.show_title.is_empty() {
            return self.title.clone();
        }

        match (self.season.parse::<u32>(), self.episode.parse::<u32>()) {
            (Ok(season), Ok(episode)) => format!(
                "{} - S{season:02}E{episode:02} - {}",
                self.show_title, self.title
            ),
            _ => format!("{} - {}", self.show_title, self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> MediaItem {
        MediaItem {
            title: title.to_string(),
            key: "/library/metadata/10".to_string(),
            rating_key: "10".to_string(),
            kind: MediaKind::Movie,
            year: String::new(),
            show_title: String::new(),
            season: String::new(),
            episode: String::new(),
            variants: vec![],
        }
    }

    #[test]
    fn library_kind_from_raw_type() {
        assert_eq!(LibraryKind::from("movie".to_string()), LibraryKind::Movie);
        assert_eq!(LibraryKind::from("show".to_string()), LibraryKind::Show);
        assert_eq!(
            LibraryKind::from("artist".to_string()),
            LibraryKind::Other("artist".to_string())
        );
        assert_eq!(LibraryKind::Other("photo".to_string()).to_string(), "photo");
        assert_eq!(format!("{:<6}|", LibraryKind::Show), "show  |");
    }

    #[test]
    fn movie_title_is_used_as_is() {
        assert_eq!(item("Heat").display_title(), "Heat");
    }

    #[test]
    fn episode_title_includes_show_and_position() {
        let mut episode = item("Pilot");
        episode.kind = MediaKind::Episode;
        episode.show_title = "Lost".to_string();
        episode.season = "1".to_string();
        episode.episode = "2".to_string();
        assert_eq!(episode.display_title(), "Lost - S01E02 - Pilot");

        episode.episode = String::new();
        assert_eq!(episode.display_title(), "Lost - Pilot");
    }

    #[test]
    fn size_bytes_ignores_garbage() {
        let variant = Variant {
            id: "1".to_string(),
            size: "123".to_string(),
            width: String::new(),
            height: String::new(),
            video_codec: "h264".to_string(),
            video_resolution: String::new(),
            bitrate: String::new(),
            container: String::new(),
            file: String::new(),
        };
        assert_eq!(variant.size_bytes(), Some(123));

        let unknown = Variant {
            size: " n/a ".to_string(),
            ..variant
        };
        assert_eq!(unknown.size_bytes(), None);
    }
}
