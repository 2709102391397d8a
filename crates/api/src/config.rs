use std::env;
use std::path::PathBuf;

const DEFAULT_BIND: &str = "0.0.0.0:8000";
const DEFAULT_STATIC_DIR: &str = "frontend";
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub static_dir: PathBuf,
    pub allowed_origins: AllowedOrigins,
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            allowed_origins: AllowedOrigins::Any,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let bind = env::var("SUPERAGENT_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let static_dir = env::var("SUPERAGENT_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));
        let allowed_origins = parse_allowed_origins(env::var("SUPERAGENT_ALLOWED_ORIGINS").ok());
        let max_body_bytes = env::var("SUPERAGENT_MAX_BODY_BYTES")
            .ok()
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Self {
            bind,
            static_dir,
            allowed_origins,
            max_body_bytes,
        }
    }
}

fn parse_allowed_origins(raw: Option<String>) -> AllowedOrigins {
    let Some(raw) = raw else {
        return AllowedOrigins::Any;
    };

    let origins = raw
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect::<Vec<_>>();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}
