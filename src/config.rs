//! Configuration and constants.
//!
//! The only runtime configuration is the listen port, read once at startup
//! from the `PORT` environment variable. Everything else (route bodies, log
//! filter defaults) is fixed at compile time.

// =============================================================================
// Fixed Response Bodies
// =============================================================================

/// Body of `GET /`
pub const GREETING: &str = "Hello from Kubernetes Showcase App!";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `PORT` is unset or not a valid TCP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "showcase=info,tower_http=info";

/// Environment variable holding the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// Application configuration, resolved once at startup and immutable for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP listener binds to
    pub port: u16,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(std::env::var(PORT_ENV_VAR).ok()),
        }
    }
}

/// Resolve the listen port from the raw `PORT` value.
///
/// Valid ports are 1..=65535. Absent, non-numeric, out-of-range, or zero
/// values all fall back to [`DEFAULT_PORT`].
fn resolve_port(raw: Option<String>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => match value.trim().parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                tracing::warn!(
                    value = %value,
                    default = DEFAULT_PORT,
                    "Invalid PORT value, using default"
                );
                DEFAULT_PORT
            }
        },
    }
}
