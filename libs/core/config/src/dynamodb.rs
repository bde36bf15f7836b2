use crate::{env_optional, ConfigError, FromEnv};

/// DynamoDB connection settings.
///
/// Credentials are not part of this struct; they come from the standard AWS
/// provider chain when the client is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamoConfig {
    /// Table override; `None` means the caller's default table
    pub table_name: Option<String>,
    pub region: Option<String>,
    /// Custom endpoint, e.g. `http://localhost:8000` for DynamoDB Local
    pub endpoint_url: Option<String>,
}

impl FromEnv for DynamoConfig {
    /// Reads optional variables:
    /// - PRODUCTS_TABLE
    /// - AWS_REGION
    /// - DYNAMODB_ENDPOINT_URL
    fn from_env() -> Result<Self, ConfigError> {
        let endpoint_url = env_optional("DYNAMODB_ENDPOINT_URL");

        if let Some(ref url) = endpoint_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ParseError {
                    key: "DYNAMODB_ENDPOINT_URL".to_string(),
                    details: format!("expected an http(s) URL, got '{}'", url),
                });
            }
        }

        Ok(Self {
            table_name: env_optional("PRODUCTS_TABLE"),
            region: env_optional("AWS_REGION"),
            endpoint_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamo_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("PRODUCTS_TABLE", None::<&str>),
                ("AWS_REGION", None::<&str>),
                ("DYNAMODB_ENDPOINT_URL", None::<&str>),
            ],
            || {
                let config = DynamoConfig::from_env().unwrap();
                assert_eq!(config, DynamoConfig::default());
            },
        );
    }

    #[test]
    fn test_dynamo_config_from_env_with_local_endpoint() {
        temp_env::with_vars(
            [
                ("PRODUCTS_TABLE", Some("ProductsTable-dev")),
                ("AWS_REGION", Some("eu-central-1")),
                ("DYNAMODB_ENDPOINT_URL", Some("http://localhost:8000")),
            ],
            || {
                let config = DynamoConfig::from_env().unwrap();
                assert_eq!(config.table_name.as_deref(), Some("ProductsTable-dev"));
                assert_eq!(config.region.as_deref(), Some("eu-central-1"));
                assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
            },
        );
    }

    #[test]
    fn test_dynamo_config_rejects_endpoint_without_scheme() {
        temp_env::with_var("DYNAMODB_ENDPOINT_URL", Some("localhost:8000"), || {
            let err = DynamoConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DYNAMODB_ENDPOINT_URL"));
        });
    }
}
