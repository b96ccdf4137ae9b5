use serde::Deserialize;

// Internal structs mirroring the Plex XML responses. Only the attributes the
// report uses are listed; everything else in the document is ignored.

#[derive(Deserialize, Debug, Default)]
pub(crate) struct LibraryContainer {
    #[serde(rename = "Directory", default)]
    pub directories: Vec<RawDirectory>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawDirectory {
    #[serde(rename = "@key", default)]
    pub key: String,
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct MediaContainer {
    #[serde(rename = "Video", default)]
    pub videos: Vec<RawVideo>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawVideo {
    #[serde(rename = "@ratingKey", default)]
    pub rating_key: String,
    #[serde(rename = "@key", default)]
    pub key: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "@year", default)]
    pub year: String,
    #[serde(rename = "@grandparentTitle", default)]
    pub grandparent_title: String,
    #[serde(rename = "@parentIndex", default)]
    pub parent_index: String,
    #[serde(rename = "@index", default)]
    pub index: String,
    #[serde(rename = "Media", default)]
    pub media: Vec<RawMedia>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawMedia {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@width", default)]
    pub width: String,
    #[serde(rename = "@height", default)]
    pub height: String,
    #[serde(rename = "@bitrate", default)]
    pub bitrate: String,
    #[serde(rename = "@container", default)]
    pub container: String,
    #[serde(rename = "@videoCodec", default)]
    pub video_codec: String,
    #[serde(rename = "@videoResolution", default)]
    pub video_resolution: String,
    #[serde(rename = "Part", default)]
    pub parts: Vec<RawPart>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawPart {
    #[serde(rename = "@file", default)]
    pub file: String,
    #[serde(rename = "@size", default)]
    pub size: String,
}
