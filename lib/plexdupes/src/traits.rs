use async_trait::async_trait;

use crate::error::Result;

/// The three read-only queries the duplicate scan needs from a media server.
///
/// Every call returns the raw response body; decoding happens in
/// [`crate::plex::decode`].
#[async_trait]
pub trait MediaServer: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_libraries(&self) -> Result<Vec<u8>>;
    async fn fetch_duplicate_movies(&self, library_key: &str) -> Result<Vec<u8>>;
    async fn fetch_duplicate_episodes(&self, library_key: &str) -> Result<Vec<u8>>;
}
