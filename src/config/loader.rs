use crate::config::constants;
use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub port: u16,
    /// When set, uploads must be well-formed base64 `data:image/*` URIs.
    pub strict_payloads: bool,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        let port = match env::var("MEDIA_GATEWAY_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("MEDIA_GATEWAY_PORT", v))?,
            Err(_) => constants::DEFAULT_PORT,
        };

        Ok(Config {
            cloud_name: require_var("CLOUDINARY_CLOUD_NAME")?,
            api_key: require_var("CLOUDINARY_API_KEY")?,
            api_secret: require_var("CLOUDINARY_API_SECRET")?,
            port,
            strict_payloads: flag_var("MEDIA_GATEWAY_STRICT_PAYLOADS"),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn flag_var(name: &str) -> bool {
    matches!(
        env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("yes") | Ok("on")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-wide, so everything lives in one test
    // to keep the parallel test runner away from it.
    #[test]
    fn test_from_env() {
        env::remove_var("CLOUDINARY_CLOUD_NAME");
        env::remove_var("CLOUDINARY_API_KEY");
        env::remove_var("CLOUDINARY_API_SECRET");
        env::remove_var("MEDIA_GATEWAY_PORT");
        env::remove_var("MEDIA_GATEWAY_STRICT_PAYLOADS");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("CLOUDINARY_CLOUD_NAME"));

        env::set_var("CLOUDINARY_CLOUD_NAME", "demo");
        env::set_var("CLOUDINARY_API_KEY", "key");
        env::set_var("CLOUDINARY_API_SECRET", "secret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.cloud_name, "demo");
        assert_eq!(config.port, constants::DEFAULT_PORT);
        assert!(!config.strict_payloads);

        env::set_var("MEDIA_GATEWAY_PORT", "8080");
        env::set_var("MEDIA_GATEWAY_STRICT_PAYLOADS", "true");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.strict_payloads);

        env::set_var("MEDIA_GATEWAY_PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidVar("MEDIA_GATEWAY_PORT", _)
        ));

        env::remove_var("MEDIA_GATEWAY_PORT");
        env::remove_var("MEDIA_GATEWAY_STRICT_PAYLOADS");
    }
}
