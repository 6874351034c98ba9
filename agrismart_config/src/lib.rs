use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

mod duration;

pub use duration::Duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

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
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub relay: RelayConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Display window of a submission result before the automatic reset.
    pub status_ttl: Duration,
}

/// Credentials for the hosted email relay. All three identifiers are
/// opaque strings issued by the relay provider.
#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub send_endpoint_override: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(*config.contact.status_ttl, std::time::Duration::from_secs(5));
    }
}
