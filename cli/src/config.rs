//! Connection settings resolved from flags, the environment and `.env`.

use std::fmt;
use std::time::Duration;

use plexdupes::{PlexClient, PlexClientBuilder, PlexError, Result};

use crate::args::Cli;

#[derive(Clone)]
pub struct AppConfig {
    /// Plex server address (`--server` / PLEX_SERVER)
    pub server: String,
    /// Plex access token (`--token` / PLEX_TOKEN)
    pub token: String,
    /// Per-request timeout, zero for none (`--timeout` / PLEX_TIMEOUT)
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let server = non_empty(cli.server.as_deref())
            .ok_or(PlexError::NotConfigured("server address (--server or PLEX_SERVER)"))?;
        let token = non_empty(cli.token.as_deref())
            .ok_or(PlexError::NotConfigured("access token (--token or PLEX_TOKEN)"))?;

        Ok(Self {
            server,
            token,
            timeout: Duration::from_secs(cli.timeout),
        })
    }

    pub fn client(&self) -> Result<PlexClient> {
        PlexClientBuilder::new()
            .server(&self.server)
            .token(&self.token)
            .timeout(self.timeout)
            .build()
    }
}

/// The `.env` load error worth reporting, if any. A missing file is not one.
pub fn env_file_problem<T>(
    loaded: std::result::Result<T, dotenvy::Error>,
) -> Option<dotenvy::Error> {
    loaded.err().filter(|e| !e.not_found())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("server", &self.server)
            .field("token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Commands;

    fn cli(server: Option<&str>, token: Option<&str>) -> Cli {
        Cli {
            server: server.map(String::from),
            token: token.map(String::from),
            timeout: 10,
            verbose: 0,
            command: Commands::Libraries,
        }
    }

    #[test]
    fn resolves_settings() {
        let config = AppConfig::from_cli(&cli(Some(" plex:32400 "), Some("abc"))).unwrap();
        assert_eq!(config.server, "plex:32400");
        assert_eq!(config.token, "abc");
        assert_eq!(config.timeout, Duration::from_secs(10));

        let client = config.client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://plex:32400/");
    }

    #[test]
    fn missing_server_or_token() {
        let err = AppConfig::from_cli(&cli(None, Some("abc"))).unwrap_err();
        assert!(matches!(err, PlexError::NotConfigured(_)));
        assert_eq!(err.exit_code(), 2);

        let err = AppConfig::from_cli(&cli(Some("plex:32400"), Some("  "))).unwrap_err();
        assert!(err.to_string().contains("PLEX_TOKEN"));
    }

    #[test]
    fn missing_env_file_is_quiet() {
        let missing = std::env::temp_dir().join("plexdupes-no-such-dir/.env");
        assert!(env_file_problem(dotenvy::from_path(&missing)).is_none());
        assert!(env_file_problem(Ok(())).is_none());
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let path = std::env::temp_dir().join(format!("plexdupes-{}.env", std::process::id()));
        std::fs::write(&path, "PLEXDUPES_BROKEN LINE\n").unwrap();
        let problem = env_file_problem(dotenvy::from_path(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(problem, Some(dotenvy::Error::LineParse(..))));
    }

    #[test]
    fn debug_hides_token() {
        let config = AppConfig::from_cli(&cli(Some("plex:32400"), Some("abc"))).unwrap();
        assert!(!format!("{config:?}").contains("abc"));
    }
}
