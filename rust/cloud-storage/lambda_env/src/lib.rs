#![deny(missing_docs)]
//! Typed view of the `ENVIRONMENT` variable that selects how a lambda logs

use std::{env::VarError, fmt::Display, str::FromStr};
use thiserror::Error;


/// The name of the environment variable which holds the [Environment]
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Where the lambda is running. Written as `prod`, `dev` or `local`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on localhost, e.g. through `cargo lambda watch`
    Local,
}

/// Why the value of [ENVIRONMENT_VAR] could not be turned into an [Environment]
#[derive(Debug, Error)]
pub enum LambdaEnvErr {
    /// the variable is set but is not valid unicode
    #[error("ENVIRONMENT could not be read: {0}")]
    Unreadable(VarError),
    /// the variable holds an unrecognized name
    #[error(transparent)]
    InvalidValue(#[from] UnknownValue),
}

impl Environment {
    /// Resolve the environment from the result of looking up [ENVIRONMENT_VAR].
    /// An unset variable means [Environment::Production].
    pub fn from_lookup(lookup: Result<String, VarError>) -> Result<Self, LambdaEnvErr> {
        match lookup {
            Ok(value) => Ok(value.parse()?),
            Err(VarError::NotPresent) => Ok(Environment::Production),
            Err(err) => Err(LambdaEnvErr::Unreadable(err)),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Environment::Production => "prod",
            Environment::Develop => "dev",
            Environment::Local => "local",
        };
        f.write_str(name)
    }
}

/// A value which names no [Environment]
#[derive(Debug, Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}
