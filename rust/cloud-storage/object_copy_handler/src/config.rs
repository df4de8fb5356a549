use std::env::VarError;

use anyhow::Context;
pub use lambda_env::Environment;
use lambda_env::ENVIRONMENT_VAR;

/// The configuration parameters for the lambda.
///
/// The destination bucket is a compile time constant, see
/// [DESTINATION_BUCKET](crate::domain::models::DESTINATION_BUCKET).
/// AWS credentials and region are resolved by the aws sdk itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// The environment we are in, defaults to production when unset
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name))
    }

    fn from_vars<F>(read: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let environment = Environment::from_lookup(read(ENVIRONMENT_VAR))
            .context("ENVIRONMENT must be one of prod, dev or local")?;

        Ok(Config { environment })
    }
}
