use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub admin_token: String,
    pub rooms_backend: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub rooms_fetch_timeout_secs: u64,
    pub session_ttl_minutes: i64,
    pub hotel_config_path: Option<String>,
    pub phrasing_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "concierge.db".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            rooms_backend: env::var("ROOMS_BACKEND").unwrap_or_else(|_| "sqlite".to_string()),
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            supabase_anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
            rooms_fetch_timeout_secs: env::var("ROOMS_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            hotel_config_path: env::var("HOTEL_CONFIG_PATH").ok().filter(|p| !p.is_empty()),
            phrasing_seed: env::var("PHRASING_SEED").ok().and_then(|v| v.parse().ok()),
        }
    }

    pub fn supabase_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }
}
