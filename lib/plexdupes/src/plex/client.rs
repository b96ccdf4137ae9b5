use crate::{
    error::{PlexError, Result},
    traits::MediaServer,
};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Response};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const TOKEN_PARAM: &str = "X-Plex-Token";

/// Plex search type code for episodes
const EPISODE_SEARCH_TYPE: &str = "4";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The request shapes the scan issues against a Plex server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Libraries,
    DuplicateMovies(&'a str),
    DuplicateEpisodes(&'a str),
}

impl Endpoint<'_> {
    fn path(&self) -> String {
        match self {
            Endpoint::Libraries => "library/sections/all".to_string(),
            Endpoint::DuplicateMovies(key) => format!("library/sections/{key}/all"),
            Endpoint::DuplicateEpisodes(key) => format!("library/sections/{key}/search"),
        }
    }

    fn query(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Endpoint::Libraries => &[],
            Endpoint::DuplicateMovies(_) => &[("duplicate", "1")],
            Endpoint::DuplicateEpisodes(_) => &[("type", EPISODE_SEARCH_TYPE), ("duplicate", "1")],
        }
    }
}

/// Turns `host:port` or a full URL into the base every endpoint is joined to.
pub fn parse_server_address(server: &str) -> Result<Url> {
    let server = server.trim();
    if server.is_empty() {
        return Err(PlexError::NotConfigured("server address"));
    }

    let mut address = if server.contains("://") {
        server.to_string()
    } else {
        format!("http://{server}")
    };
    if !address.ends_with('/') {
        address.push('/');
    }

    Ok(Url::parse(&address)?)
}

/// Full request URL for `endpoint`, token last, as the server expects it.
pub fn endpoint_url(base: &Url, endpoint: Endpoint<'_>, token: &str) -> Result<Url> {
    let mut url = base.join(&endpoint.path())?;
    {
        let mut query = url.query_pairs_mut();
        for (name, value) in endpoint.query() {
            query.append_pair(name, value);
        }
        query.append_pair(TOKEN_PARAM, token);
    }
    Ok(url)
}

/// Copy of `url` safe to log.
pub fn redact_token(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            if name == TOKEN_PARAM {
                (name.into_owned(), "***".to_string())
            } else {
                (name.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

#[derive(Debug, Clone)]
pub struct PlexClient {
    base_url: Url,
    token: String,
    client: Client,
}

#[derive(Default)]
pub struct PlexClientBuilder {
    server: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl PlexClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn server(mut self, server: &str) -> Self {
        self.server = Some(server.to_string());
        self
    }

    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Per-request timeout. A zero duration waits forever.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<PlexClient> {
        let server = self.server.ok_or(PlexError::NotConfigured("server address"))?;
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(PlexError::NotConfigured("access token"))?;
        let base_url = parse_server_address(&server)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let mut client = Client::builder();
        if !timeout.is_zero() {
            client = client.timeout(timeout);
        }
        let client = client.build().map_err(PlexError::Transport)?;

        Ok(PlexClient {
            base_url,
            token,
            client,
        })
    }
}

impl PlexClient {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, endpoint: Endpoint<'_>) -> Result<Vec<u8>> {
        let url = endpoint_url(&self.base_url, endpoint, &self.token)?;
        debug!("Request: GET {}", redact_token(&url));

        // reqwest errors embed the URL, which carries the token
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/xml")
            .send()
            .await
            .map_err(|e| PlexError::Transport(e.without_url()))?;
        Self::handle_response(response).await
    }

    async fn handle_response(response: Response) -> Result<Vec<u8>> {
        let status = response.status();
        if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| PlexError::Read(e.without_url()))?;
            debug!("Response: {} ({} bytes)", status, body.len());
            Ok(body.to_vec())
        } else {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            Err(PlexError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[async_trait]
impl MediaServer for PlexClient {
    fn name(&self) -> &str {
        self.base_url.as_str()
    }

    async fn fetch_libraries(&self) -> Result<Vec<u8>> {
        info!("Fetching library sections from {}", self.base_url);
        self.get(Endpoint::Libraries).await
    }

    async fn fetch_duplicate_movies(&self, library_key: &str) -> Result<Vec<u8>> {
        info!("Fetching duplicate movies for library {library_key}");
        self.get(Endpoint::DuplicateMovies(library_key)).await
    }

    async fn fetch_duplicate_episodes(&self, library_key: &str) -> Result<Vec<u8>> {
        info!("Fetching duplicate episodes for library {library_key}");
        self.get(Endpoint::DuplicateEpisodes(library_key)).await
    }
}
