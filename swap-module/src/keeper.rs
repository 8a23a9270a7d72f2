use std::collections::BTreeMap;

use cosmwasm_std::{Addr, Decimal256, Order, Storage};
use tokenswap_utils::{
    module_account, DecCoin, PairKey, PoolTokenInfo, SwapError, SwapResult, SwapTokenPair,
    TokenInfo,
};

use crate::state::{BALANCES, POOL_TOKENS, SWAP_TOKEN_PAIRS, TOKENS};

/// Read/write access to the records owned by the swap module.
pub trait SwapKeeper {
    fn token_exists(&self, denom: &str) -> bool;

    fn get_swap_token_pair(&self, key: &PairKey) -> SwapResult<Option<SwapTokenPair>>;

    fn set_swap_token_pair(&mut self, key: &PairKey, pair: &SwapTokenPair) -> SwapResult<()>;

    fn get_pool_token_info(&self, name: &str) -> SwapResult<Option<PoolTokenInfo>>;
}

/// Token movements the swap module requests from the token subsystem.
pub trait TokenService {
    /// Moves `coins` from `from` into the module escrow. Either every coin
    /// moves or none does.
    fn send_coins_to_pool(&mut self, coins: &[DecCoin], from: &Addr) -> SwapResult<()>;

    /// Mints pool share tokens to `to`, growing their total supply.
    fn mint_pool_coins(&mut self, coins: &[DecCoin], to: &Addr) -> SwapResult<()>;
}

/// Keeper and token ledger backed by a single key-value store.
pub struct StoreKeeper<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> StoreKeeper<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        StoreKeeper { storage }
    }

    pub fn register_token(&mut self, token: &TokenInfo) -> SwapResult<()> {
        TOKENS.save(self.storage, &token.symbol, token)?;
        Ok(())
    }

    pub fn register_pool_token(&mut self, token: &PoolTokenInfo) -> SwapResult<()> {
        POOL_TOKENS.save(self.storage, &token.symbol, token)?;
        Ok(())
    }

    pub fn set_balance(&mut self, address: &Addr, coin: &DecCoin) -> SwapResult<()> {
        BALANCES.save(self.storage, (address, coin.denom.as_str()), &coin.amount)?;
        Ok(())
    }

    pub fn balance(&self, address: &Addr, denom: &str) -> SwapResult<Decimal256> {
        Ok(BALANCES
            .may_load(self.storage, (address, denom))?
            .unwrap_or_default())
    }

    pub fn all_swap_token_pairs(&self) -> SwapResult<Vec<(PairKey, SwapTokenPair)>> {
        SWAP_TOKEN_PAIRS
            .range(self.storage, None, None, Order::Ascending)
            .map(|item| -> SwapResult<(PairKey, SwapTokenPair)> {
                let ((base, quote), pair) = item?;
                Ok((PairKey::new(base, quote), pair))
            })
            .collect()
    }
}

impl SwapKeeper for StoreKeeper<'_> {
    fn token_exists(&self, denom: &str) -> bool {
        TOKENS.has(self.storage, denom)
    }

    fn get_swap_token_pair(&self, key: &PairKey) -> SwapResult<Option<SwapTokenPair>> {
        Ok(SWAP_TOKEN_PAIRS.may_load(self.storage, key.key())?)
    }

    fn set_swap_token_pair(&mut self, key: &PairKey, pair: &SwapTokenPair) -> SwapResult<()> {
        SWAP_TOKEN_PAIRS.save(self.storage, key.key(), pair)?;
        Ok(())
    }

    fn get_pool_token_info(&self, name: &str) -> SwapResult<Option<PoolTokenInfo>> {
        Ok(POOL_TOKENS.may_load(self.storage, name)?)
    }
}

impl TokenService for StoreKeeper<'_> {
    fn send_coins_to_pool(&mut self, coins: &[DecCoin], from: &Addr) -> SwapResult<()> {
        // Sum per denom so that repeated denoms are checked against the full amount
        let mut totals: BTreeMap<&str, Decimal256> = BTreeMap::new();
        for coin in coins {
            let total = totals.entry(coin.denom.as_str()).or_default();
            *total = total.checked_add(coin.amount)?;
        }

        let mut debits = Vec::with_capacity(totals.len());
        for (denom, amount) in totals {
            let available = self.balance(from, denom)?;
            if available < amount {
                return Err(SwapError::InsufficientCoins {
                    address: from.to_string(),
                    available: DecCoin::new(denom, available).to_string(),
                    required: DecCoin::new(denom, amount).to_string(),
                });
            }
            debits.push((denom, available - amount, amount));
        }

        let escrow = module_account();
        for (denom, remaining, amount) in debits {
            BALANCES.save(self.storage, (from, denom), &remaining)?;
            let escrowed = self.balance(&escrow, denom)?.checked_add(amount)?;
            BALANCES.save(self.storage, (&escrow, denom), &escrowed)?;
        }
        Ok(())
    }

    fn mint_pool_coins(&mut self, coins: &[DecCoin], to: &Addr) -> SwapResult<()> {
        for coin in coins {
            let mut pool_token = POOL_TOKENS
                .may_load(self.storage, &coin.denom)?
                .ok_or_else(|| {
                    SwapError::MintFailed(format!("{} is not a pool token", coin.denom))
                })?;
            pool_token.total_supply = pool_token.total_supply.checked_add(coin.amount)?;
            POOL_TOKENS.save(self.storage, &coin.denom, &pool_token)?;

            let balance = self.balance(to, &coin.denom)?.checked_add(coin.amount)?;
            BALANCES.save(self.storage, (to, coin.denom.as_str()), &balance)?;
        }
        Ok(())
    }
}
