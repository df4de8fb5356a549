#![deny(missing_docs)]
//! This crate provides a standardized initialization process that should be used across lambda entrypoints.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use lambda_env::Environment;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// defines how a lambda binary is initialized for a given [Environment]
#[derive(Debug)]
pub struct LambdaEntrypoint {
    env: Environment,
    /// level used when `RUST_LOG` is not set
    default_level: LevelFilter,
}

/// sentinel struct which guarantees that we called [LambdaEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl LambdaEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            default_level: LevelFilter::INFO,
        }
    }

    /// change the level that is used when `RUST_LOG` is absent
    pub fn default_level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }

    /// the environment this entrypoint was configured for
    pub fn environment(&self) -> Environment {
        self.env
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.default_level.into())
            .from_env_lossy()
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let filter = self.env_filter();
        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(filter)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                // cloudwatch does not render ansi and lambda already prefixes a timestamp
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(filter)
                    .with_file(true)
                    .with_line_number(true)
                    .without_time()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::debug!(environment = %self.env, "initialized entrypoint");

        InitializedEntrypoint(())
    }
}
