use clap::Args;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SCORE_PATH: &str = "/score";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the scoring service lives and how long to wait for it.
#[derive(Args, Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the scoring service
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, global = true, default_value = DEFAULT_SCORE_PATH)]
    pub score_path: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            score_path: DEFAULT_SCORE_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Joins endpoint and path with exactly one slash between them.
    pub fn score_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.score_path.trim_start_matches('/')
        )
    }
}
