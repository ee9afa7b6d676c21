use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use email_address::EmailAddress;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Load the configuration from the given TOML files (later files override
/// earlier ones) and finally from `FOLIO_`-prefixed environment variables,
/// e.g. `FOLIO_EMAIL__API_KEY` for `email.api_key`.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix("FOLIO")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    /// Sender mailbox, e.g. `Portfolio Contact <onboarding@resend.dev>`.
    pub from: String,
    /// Provider credential. Optional at load time: its absence only fails a
    /// submission when one arrives, never startup.
    pub api_key: Option<String>,
    /// Override for the provider send endpoint (used by tests).
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Recipient of relayed contact form submissions.
    pub recipient: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    pub linkedin_url: Option<Url>,
    pub github_url: Option<Url>,
}
