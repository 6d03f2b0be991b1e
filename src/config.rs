use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Results are checked every two minutes. Not configurable.
pub const POLL_INTERVAL: Duration = Duration::from_secs(120);

const DEFAULT_RESULTS_URL: &str =
    "https://public.rts.iebc.or.ke/jsons/round1/results/Kenya_Elections_Presidential/1/info.json";
const DEFAULT_LAST_FETCH_FILE: &str = "lastfetched.dat";
const DEFAULT_TWITTER_POST_URL: &str = "https://api.twitter.com/2/tweets";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub results_url: String,
    pub last_fetch_file: PathBuf,
    pub twitter_post_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ConfigError::MissingEnv(key.to_string())),
            }
        };

        let credentials = Credentials {
            consumer_key: required("TWITTERCONSUMERKEY")?,
            consumer_secret: required("TWITTERCONSUMERSECRET")?,
            access_token: required("TWITTERACCESSTOKEN")?,
            access_secret: required("TWITTERACCESSSECRET")?,
        };

        Ok(Self {
            credentials,
            results_url: lookup("RESULTS_URL").unwrap_or_else(|| DEFAULT_RESULTS_URL.to_string()),
            last_fetch_file: lookup("LAST_FETCH_FILE")
                .unwrap_or_else(|| DEFAULT_LAST_FETCH_FILE.to_string())
                .into(),
            twitter_post_url: lookup("TWITTER_POST_URL")
                .unwrap_or_else(|| DEFAULT_TWITTER_POST_URL.to_string()),
        })
    }
}
