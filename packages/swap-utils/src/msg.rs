use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, Addr, Decimal256, Timestamp};

use crate::{DecCoin, PairKey, SwapError, SwapParams, SwapResult};

/// Intents understood by the swap module.
#[cw_serde]
pub enum SwapMsg {
    CreateExchange(MsgCreateExchange),
    AddLiquidity(MsgAddLiquidity),
}

impl SwapMsg {
    pub fn route(&self) -> &'static str {
        match self {
            SwapMsg::CreateExchange(_) => "create_exchange",
            SwapMsg::AddLiquidity(_) => "add_liquidity",
        }
    }

    /// Stateless checks run before the message reaches its handler.
    pub fn validate_basic(&self, params: &SwapParams) -> SwapResult<()> {
        match self {
            SwapMsg::CreateExchange(msg) => msg.validate_basic(params),
            SwapMsg::AddLiquidity(msg) => msg.validate_basic(params),
        }
    }
}

/// Opens a pool pairing `token` with the native denom.
#[cw_serde]
pub struct MsgCreateExchange {
    pub token: String,
}

impl MsgCreateExchange {
    pub fn new(token: impl Into<String>) -> Self {
        MsgCreateExchange {
            token: token.into(),
        }
    }

    pub fn validate_basic(&self, params: &SwapParams) -> SwapResult<()> {
        ensure!(
            !self.token.is_empty(),
            SwapError::InvalidMsg("token must not be empty".to_string())
        );
        ensure!(
            self.token != params.native_denom,
            SwapError::InvalidMsg(format!(
                "cannot create an exchange for the native token {}",
                params.native_denom
            ))
        );
        ensure!(
            !params.is_pool_token(&self.token),
            SwapError::InvalidMsg(format!(
                "cannot create an exchange for pool token {}",
                self.token
            ))
        );
        Ok(())
    }
}

/// Deposits native tokens plus at most `max_base_tokens` into a pool in
/// exchange for at least `min_liquidity` pool share tokens.
#[cw_serde]
pub struct MsgAddLiquidity {
    pub min_liquidity: Decimal256,
    pub max_base_tokens: DecCoin,
    pub quote_tokens: DecCoin,
    /// The intent is rejected once block time reaches it.
    pub deadline: Timestamp,
    pub sender: Addr,
}

impl MsgAddLiquidity {
    /// Pool targeted by this deposit, derived from the base token denom.
    pub fn swap_token_pair(&self, params: &SwapParams) -> PairKey {
        params.pair_key(&self.max_base_tokens.denom)
    }

    pub fn validate_basic(&self, params: &SwapParams) -> SwapResult<()> {
        ensure!(
            !self.sender.as_str().is_empty(),
            SwapError::InvalidAddress("sender must not be empty".to_string())
        );
        ensure!(
            self.quote_tokens.denom == params.native_denom,
            SwapError::InvalidCoins(format!(
                "quote tokens must be {}, got {}",
                params.native_denom, self.quote_tokens.denom
            ))
        );
        ensure!(
            !self.max_base_tokens.denom.is_empty()
                && self.max_base_tokens.denom != params.native_denom,
            SwapError::InvalidCoins(format!(
                "invalid base token denom {:?}",
                self.max_base_tokens.denom
            ))
        );
        ensure!(
            self.quote_tokens.is_positive(),
            SwapError::InvalidCoins(format!("quote tokens must be positive: {}", self.quote_tokens))
        );
        ensure!(
            self.max_base_tokens.is_positive(),
            SwapError::InvalidCoins(format!(
                "max base tokens must be positive: {}",
                self.max_base_tokens
            ))
        );
        ensure!(
            self.deadline.nanos() != 0,
            SwapError::InvalidMsg("deadline must be set".to_string())
        );
        Ok(())
    }
}
