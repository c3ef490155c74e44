use std::env;

use tracing::info;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn load() -> Self {
        let base_url = env::var("PLANNER_API_URL").unwrap_or_else(|_| {
            info!("PLANNER_API_URL not set, using default: {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });

        Self { base_url }
    }
}
