use crate::models::{
    error::AppError,
    music::{Music, Playlist},
};

// CONSTANTS
const BASE_URL: &str = "https://liked-music-default-rtdb.firebaseio.com";
const DEFAULT_YEAR: u16 = 2023;

// API CONFIGURATION
/// Configuration for the liked-music API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    year: u16,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the year this client reads liked tracks for.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Constructs the full URL of the liked-music playlist.
    pub fn playlist_url(&self) -> String {
        format!("{}/liked/{}.json", self.base_url, self.year)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    year: Option<u16>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the year to read liked tracks for.
    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            year: self.year.unwrap_or(DEFAULT_YEAR),
        }
    }
}

// MUSIC CLIENT
/// HTTP client for the liked-music store.
pub struct MusicClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl MusicClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the liked-music playlist.
    pub async fn fetch_liked_music(&self) -> Result<Playlist, AppError> {
        let url = self.config.playlist_url();

        let tracks = self.fetch(&url).await?;
        Ok(Playlist::new(tracks))
    }

    /// Executes a single fetch attempt.
    async fn fetch(&self, url: &str) -> Result<Vec<Music>, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the liked-music playlist using default configuration.
pub async fn fetch_liked_music() -> Result<Playlist, AppError> {
    MusicClient::new()?.fetch_liked_music().await
}

/// Fetches the liked-music playlist for a specific year.
pub async fn fetch_liked_music_for_year(year: u16) -> Result<Playlist, AppError> {
    let config = ApiConfig::builder().year(year).build();
    MusicClient::with_config(config)?.fetch_liked_music().await
}
