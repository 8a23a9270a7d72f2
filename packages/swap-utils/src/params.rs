use cosmwasm_schema::cw_serde;
use cosmwasm_std::ensure;

use crate::{PairKey, SwapError, SwapResult};

pub const DEFAULT_NATIVE_DENOM: &str = "OKT";
pub const DEFAULT_POOL_TOKEN_PREFIX: &str = "OIP3-";

/// Module wide parameters. Every pair key and pool token name is derived
/// from these and nowhere else.
#[cw_serde]
#[serde(default)]
pub struct SwapParams {
    /// Quote denomination every pool is paired against.
    pub native_denom: String,
    /// Prefix prepended to the base denom to name a pool share token.
    pub pool_token_prefix: String,
}

impl Default for SwapParams {
    fn default() -> Self {
        SwapParams {
            native_denom: DEFAULT_NATIVE_DENOM.to_string(),
            pool_token_prefix: DEFAULT_POOL_TOKEN_PREFIX.to_string(),
        }
    }
}

impl SwapParams {
    pub fn validate(&self) -> SwapResult<()> {
        ensure!(
            !self.native_denom.is_empty(),
            SwapError::InvalidMsg("native denom must not be empty".to_string())
        );
        ensure!(
            !self.pool_token_prefix.is_empty(),
            SwapError::InvalidMsg("pool token prefix must not be empty".to_string())
        );
        ensure!(
            !self.is_pool_token(&self.native_denom),
            SwapError::InvalidMsg(format!(
                "native denom {} collides with pool token prefix {}",
                self.native_denom, self.pool_token_prefix
            ))
        );
        Ok(())
    }

    pub fn pair_key(&self, base: &str) -> PairKey {
        PairKey::new(base, self.native_denom.as_str())
    }

    pub fn pool_token_name(&self, base: &str) -> String {
        format!("{}{}", self.pool_token_prefix, base)
    }

    pub fn is_pool_token(&self, denom: &str) -> bool {
        denom.starts_with(&self.pool_token_prefix)
    }
}
