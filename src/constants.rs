//! Application constants
//!
//! Centralized location for literals shared by the panel and the host.

/// Endpoint fetched when no configuration overrides it
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/some-endpoint";

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "FETCHPANE_ENDPOINT";

/// Static heading shown above the fetched payload
pub const HEADING: &str = "Data from API:";

/// Prefix of the diagnostic record emitted when a fetch fails
pub const FETCH_ERROR_PREFIX: &str = "Error fetching data";

/// Application name
pub const APP_NAME: &str = "fetchpane";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
