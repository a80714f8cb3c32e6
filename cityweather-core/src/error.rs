use thiserror::Error;

/// Failures of a single provider request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// DNS, connection, TLS or body read failure.
    #[error("failed to make HTTP request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Input problems detected before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "OpenWeatherMap API key not found.\n\
         Please set the OPENWEATHER_API_KEY environment variable \
         in a .env file or directly in your shell.\n\
         Example .env entry: OPENWEATHER_API_KEY=\"YOUR_ACTUAL_API_KEY\""
    )]
    MissingApiKey,

    #[error(
        "Please provide a city name using the --city flag.\n\
         Usage: cityweather --city \"YourCity\" [--forecast]"
    )]
    MissingCity,
}
