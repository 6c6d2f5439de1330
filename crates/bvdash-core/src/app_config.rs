/// Runtime configuration for the dashboard, loaded from environment
/// variables (see [`crate::config::load_app_config`]).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base address of the dashboard API serving both endpoints.
    pub api_base_url: String,
    /// `limit` query parameter for the `/videos` fetch. Sized to retrieve
    /// the full working set in one request; there is no pagination loop.
    pub video_fetch_limit: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    /// Number of rows in the top-videos ranking table.
    pub top_videos: usize,
}
