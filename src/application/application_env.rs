use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub api_base_url: String,
    pub ws_base_url: String,

    pub seller_id: i64,
    pub auth_token: String,

    pub reconnect_base_delay: Duration,
    pub reconnect_max_attempts: u32,
    pub refresh_limit: u32,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("SELLER_CONSOLE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("SELLER_CONSOLE_LOG_FILENAME")?;
        let api_base_url = Self::env_var("SELLER_CONSOLE_API_BASE_URL")?;
        let ws_base_url = Self::env_var("SELLER_CONSOLE_WS_BASE_URL")?;
        let seller_id = Self::env_var("SELLER_CONSOLE_SELLER_ID")?.parse()?;
        let auth_token = Self::env_var("SELLER_CONSOLE_AUTH_TOKEN")?;
        let reconnect_base_delay =
            Self::env_var("SELLER_CONSOLE_RECONNECT_BASE_DELAY_SECONDS")?.parse()?;
        let reconnect_base_delay = Duration::from_secs(reconnect_base_delay);
        let reconnect_max_attempts =
            Self::env_var("SELLER_CONSOLE_RECONNECT_MAX_ATTEMPTS")?.parse()?;
        let refresh_limit = Self::env_var("SELLER_CONSOLE_REFRESH_LIMIT")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            api_base_url,
            ws_base_url,
            seller_id,
            auth_token,
            reconnect_base_delay,
            reconnect_max_attempts,
            refresh_limit,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
