//! Application state for the HTTP server.

use std::time::Instant;

/// Shared application state passed to all handlers.
///
/// The planning services are stateless, so the only shared piece is the
/// startup instant used by the health endpoint.
#[derive(Clone)]
pub struct AppState {
    /// Moment the server started, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Create a new application state anchored at the current instant.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
