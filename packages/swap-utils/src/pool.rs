use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal256};

use crate::{DecCoin, SwapResult};

/// Funding state of a pool, derived from its two reserves.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum ReserveState {
    /// Both reserves are zero. The next deposit sets the price.
    Empty,
    /// Both reserves are strictly positive.
    Active,
    /// Exactly one reserve is positive. Never produced by a valid transition.
    Inconsistent,
}

/// Pool record stored per pair key.
#[cw_serde]
pub struct SwapTokenPair {
    pub base_pooled_coin: DecCoin,
    pub quote_pooled_coin: DecCoin,
    pub pool_token_name: String,
}

impl SwapTokenPair {
    /// A freshly created pool with zero reserves.
    pub fn empty(base_denom: &str, quote_denom: &str, pool_token_name: impl Into<String>) -> Self {
        SwapTokenPair {
            base_pooled_coin: DecCoin::zero(base_denom),
            quote_pooled_coin: DecCoin::zero(quote_denom),
            pool_token_name: pool_token_name.into(),
        }
    }

    pub fn reserve_state(&self) -> ReserveState {
        match (
            self.base_pooled_coin.is_zero(),
            self.quote_pooled_coin.is_zero(),
        ) {
            (true, true) => ReserveState::Empty,
            (false, false) => ReserveState::Active,
            _ => ReserveState::Inconsistent,
        }
    }

    /// Returns the record that results from depositing `quote` and `base`.
    /// The receiver is not modified.
    pub fn with_deposit(&self, quote: &DecCoin, base: &DecCoin) -> SwapResult<SwapTokenPair> {
        Ok(SwapTokenPair {
            base_pooled_coin: self.base_pooled_coin.checked_add(base)?,
            quote_pooled_coin: self.quote_pooled_coin.checked_add(quote)?,
            pool_token_name: self.pool_token_name.clone(),
        })
    }
}

impl fmt::Display for SwapTokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base: {}, quote: {}, pool token: {}",
            self.base_pooled_coin, self.quote_pooled_coin, self.pool_token_name
        )
    }
}

/// Pool share token record, provisioned outside the swap module.
#[cw_serde]
pub struct PoolTokenInfo {
    pub symbol: String,
    pub name: String,
    pub total_supply: Decimal256,
    pub owner: Addr,
}

impl PoolTokenInfo {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, owner: Addr) -> Self {
        PoolTokenInfo {
            symbol: symbol.into(),
            name: name.into(),
            total_supply: Decimal256::zero(),
            owner,
        }
    }
}

impl fmt::Display for PoolTokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "symbol: {}, name: {}, total supply: {}, owner: {}",
            self.symbol, self.name, self.total_supply, self.owner
        )
    }
}

/// A recognized on-chain asset.
#[cw_serde]
pub struct TokenInfo {
    pub symbol: String,
    pub name: String,
    pub total_supply: Decimal256,
}
