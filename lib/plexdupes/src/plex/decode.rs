use super::models::{LibraryContainer, MediaContainer, RawMedia, RawVideo};
use crate::error::{PlexError, Result};
use quick_xml::events::Event;
use quick_xml::{DeError, Reader};
use serde::de::DeserializeOwned;
use shared::library::{LibrarySection, MediaItem, Variant};
use tracing::debug;

const ROOT: &str = "MediaContainer";

fn decode<T: DeserializeOwned>(document: &'static str, bytes: &[u8]) -> Result<T> {
    expect_root(bytes).map_err(|source| PlexError::Decode { document, source })?;
    quick_xml::de::from_reader(bytes).map_err(|source| PlexError::Decode { document, source })
}

/// Checks that the first element is `<MediaContainer>`.
///
/// Any other well-formed document (a sign-in page, a proxy error page) would
/// otherwise deserialize into an empty container.
fn expect_root(bytes: &[u8]) -> std::result::Result<(), DeError> {
    let mut reader = Reader::from_reader(bytes);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let name = e.name();
                if name.as_ref() == ROOT.as_bytes() {
                    return Ok(());
                }
                return Err(DeError::Custom(format!(
                    "expected <{ROOT}> root element, found <{}>",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            Event::Eof => {
                return Err(DeError::Custom(format!("expected <{ROOT}> root element, found none")));
            }
            _ => {}
        }
    }
}

/// Decodes a `/library/sections/all` response, keeping document order.
pub fn decode_libraries(bytes: &[u8]) -> Result<Vec<LibrarySection>> {
    let container: LibraryContainer = decode("library listing", bytes)?;
    debug!("Decoded {} library sections", container.directories.len());

    Ok(container
        .directories
        .into_iter()
        .map(|dir| LibrarySection {
            key: dir.key,
            title: dir.title,
            kind: dir.kind.into(),
        })
        .collect())
}

/// Decodes a duplicate listing (movies or episodes) into media items.
pub fn decode_media(bytes: &[u8]) -> Result<Vec<MediaItem>> {
    let container: MediaContainer = decode("media listing", bytes)?;
    debug!("Decoded {} media items", container.videos.len());

    Ok(container.videos.into_iter().map(media_item).collect())
}

fn media_item(video: RawVideo) -> MediaItem {
    MediaItem {
        title: video.title,
        key: video.key,
        rating_key: video.rating_key,
        kind: video.kind.into(),
        year: video.year,
        show_title: video.grandparent_title,
        season: video.parent_index,
        episode: video.index,
        variants: video.media.into_iter().map(variant).collect(),
    }
}

fn variant(media: RawMedia) -> Variant {
    let size = part_size(&media);
    let file = media
        .parts
        .first()
        .map(|part| part.file.clone())
        .unwrap_or_default();

    Variant {
        id: media.id,
        size,
        width: media.width,
        height: media.height,
        video_codec: media.video_codec,
        video_resolution: media.video_resolution,
        bitrate: media.bitrate,
        container: media.container,
        file,
    }
}

/// Size of a media entry across all of its parts.
///
/// Falls back to the first part's raw text when any part size is not a number
/// or the total does not fit in a `u64`.
fn part_size(media: &RawMedia) -> String {
    match media.parts.as_slice() {
        [] => String::new(),
        [single] => single.size.clone(),
        [first, ..] => media
            .parts
            .iter()
            .try_fold(0u64, |total, part| total.checked_add(part.size.trim().parse().ok()?))
            .map(|total| total.to_string())
            .unwrap_or_else(|| first.size.clone()),
    }
}
