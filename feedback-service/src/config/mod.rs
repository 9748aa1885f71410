use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default model for recommendation generation.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub security: SecurityConfig,
    pub rate_limit: RateLimitConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for recommendation text (e.g., gemini-2.0-flash)
    pub text_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Origins allowed to call this service cross-origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Upper bound on one generation call; expiry surfaces as an upstream failure.
    pub timeout_seconds: u64,
}

impl FeedbackConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = common.is_prod();

        Ok(FeedbackConfig {
            common,
            google: GoogleConfig {
                // No default on purpose: a missing credential must abort startup.
                api_key: get_env("GOOGLE_API_KEY", None, is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
            },
            security: SecurityConfig {
                allowed_origins: get_env(
                    "ALLOWED_ORIGINS",
                    Some("http://localhost:5173"),
                    is_prod,
                )?
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            },
            rate_limit: RateLimitConfig {
                max_requests: get_env("RATE_LIMIT_MAX_REQUESTS", Some("20"), is_prod)?
                    .parse()
                    .unwrap_or(20),
                window_seconds: get_env("RATE_LIMIT_WINDOW_SECONDS", Some("60"), is_prod)?
                    .parse()
                    .unwrap_or(60),
            },
            upstream: UpstreamConfig {
                timeout_seconds: get_env("UPSTREAM_TIMEOUT_SECONDS", Some("30"), is_prod)?
                    .parse()
                    .unwrap_or(30),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
