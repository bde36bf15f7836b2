//! Configuration for Products API

use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, dynamodb::DynamoConfig, env_or_default,
    server::ServerConfig,
};
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Backing store for products
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    #[default]
    DynamoDb,
    /// Process-local store, contents are lost on restart
    Memory,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub dynamodb: DynamoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreBackend,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let dynamodb = DynamoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let store = env_or_default("PRODUCTS_STORE", "dynamodb")
            .parse()
            .map_err(|e: strum::ParseError| ConfigError::ParseError {
                key: "PRODUCTS_STORE".to_string(),
                details: format!("{} (expected 'dynamodb' or 'memory')", e),
            })?;

        Ok(Self {
            app: app_info!(),
            dynamodb,
            server,
            environment,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("dynamodb".parse::<StoreBackend>().unwrap(), StoreBackend::DynamoDb);
        assert_eq!("DynamoDB".parse::<StoreBackend>().unwrap(), StoreBackend::DynamoDb);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("PRODUCTS_STORE", None::<&str>),
                ("PRODUCTS_TABLE", None),
                ("DYNAMODB_ENDPOINT_URL", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.store, StoreBackend::DynamoDb);
                assert_eq!(config.dynamodb.table_name, None);
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.app.name, "products_api");
            },
        );
    }

    #[test]
    fn test_config_rejects_unknown_store() {
        temp_env::with_var("PRODUCTS_STORE", Some("postgres"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PRODUCTS_STORE"));
        });
    }
}
