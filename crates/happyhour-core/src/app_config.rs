pub const DEFAULT_YELP_BASE_URL: &str = "https://api.yelp.com/v3/";
pub const DEFAULT_USER_AGENT: &str = "happyhour/0.1 (business-search)";

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub yelp_api_key: Option<String>,
    pub yelp_base_url: String,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "yelp_api_key",
                &self.yelp_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("yelp_base_url", &self.yelp_base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
