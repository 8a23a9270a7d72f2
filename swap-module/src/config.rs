use std::path::Path;

use ::config::{Config as ConfigHelper, Environment, File, FileFormat};
use thiserror::Error;
use tokenswap_utils::{SwapError, SwapParams};

/// Prefix of environment variables that override file values,
/// e.g. `TOKENSWAP_NATIVE_DENOM`.
pub const ENV_PREFIX: &str = "TOKENSWAP";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] ::config::ConfigError),

    #[error("invalid swap params: {0}")]
    Invalid(#[from] SwapError),
}

/// Loads module params from a config file, then applies environment
/// overrides. Keys missing from both fall back to their defaults.
pub fn load_params(path: impl AsRef<Path>) -> Result<SwapParams, ConfigError> {
    load_params_with_env(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_params_with_env(
    path: impl AsRef<Path>,
    env: Environment,
) -> Result<SwapParams, ConfigError> {
    let params: SwapParams = ConfigHelper::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(env)
        .build()?
        .try_deserialize()?;

    params.validate()?;
    Ok(params)
}

/// Parses module params from a TOML document. No environment overrides.
pub fn params_from_toml(toml: &str) -> Result<SwapParams, ConfigError> {
    let params: SwapParams = ConfigHelper::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()?;

    params.validate()?;
    Ok(params)
}
