// Runtime configuration, read from the environment once at startup and
// injected through AppState. No per-request lookups.

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the upstream time entry API. Required.
    pub api_url: String,

    /// Access key, appended to the request URL as the `code` query parameter.
    /// Required.
    pub api_key: String,

    /// TCP address to bind (default `0.0.0.0:8080`).
    pub bind_address: String,

    /// Reject payloads containing a record whose end timestamp precedes its
    /// start timestamp. Off by default: the upstream feed contains such
    /// records and the original app summed them unchecked.
    pub reject_negative_durations: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api_url: required("TIME_TRACKER_API_URL")?,
            api_key: required("TIME_TRACKER_API_KEY")?,
            bind_address: env_or("TIME_TRACKER_BIND", "0.0.0.0:8080"),
            reject_negative_durations: flag("TIME_TRACKER_REJECT_NEGATIVE_DURATIONS"),
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    let value = std::env::var(key).with_context(|| format!("{key} must be set"))?;
    if value.is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    Ok(value)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn flag(key: &str) -> bool {
    std::env::var(key)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
