use crate::{backend::error::MyResult, frontend::api::API_URL};
use config::Config;
use doku::Document;
use serde::Deserialize;
use smart_default::SmartDefault;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct ConduitConfig {
    /// Address where the server listens for http requests
    #[default("127.0.0.1:3000")]
    #[doku(example = "127.0.0.1:3000")]
    pub bind: String,
    /// Base url of the RealWorld api which serves articles and comments
    #[default(API_URL.to_string())]
    #[doku(example = "https://api.realworld.io/api")]
    pub api_url: String,
}

impl ConduitConfig {
    pub fn read() -> MyResult<Self> {
        let config = Config::builder()
            .add_source(config::File::with_name("config.toml").required(false))
            // Cant use _ as separator due to https://github.com/mehcode/config-rs/issues/391
            .add_source(config::Environment::with_prefix("CONDUIT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_defaults() {
        let config = ConduitConfig::default();
        assert_eq!("127.0.0.1:3000", config.bind);
        assert_eq!(API_URL, config.api_url);
    }

    #[test]
    fn test_config_from_toml() -> MyResult<()> {
        let config = Config::builder()
            .add_source(File::from_str(
                "bind = \"0.0.0.0:8080\"",
                FileFormat::Toml,
            ))
            .build()?;
        let parsed: ConduitConfig = config.try_deserialize()?;
        assert_eq!("0.0.0.0:8080", parsed.bind);
        assert_eq!(API_URL, parsed.api_url);
        Ok(())
    }

    #[test]
    fn test_config_rejects_unknown_fields() -> MyResult<()> {
        let config = Config::builder()
            .add_source(File::from_str("port = 80", FileFormat::Toml))
            .build()?;
        assert!(config.try_deserialize::<ConduitConfig>().is_err());
        Ok(())
    }
}
