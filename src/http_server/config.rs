//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 3000)
    pub port: u16,

    /// CORS allowed origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
