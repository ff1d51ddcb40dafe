use std::env;

/// Where the processing server lives. Everything else about the server is
/// opaque: five multipart POST endpoints under this base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    base_url: String,
}

impl ServerConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read `MENTOR_SERVER_URL`, falling back to the local default.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("MENTOR_SERVER_URL") {
            Ok(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::new(Self::DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
