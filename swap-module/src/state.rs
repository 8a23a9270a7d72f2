use cosmwasm_std::{Addr, Decimal256};
use cw_storage_plus::Map;
use tokenswap_utils::{PoolTokenInfo, SwapTokenPair, TokenInfo};

// Pool records keyed by (base denom, quote denom)
pub const SWAP_TOKEN_PAIRS: Map<(&str, &str), SwapTokenPair> = Map::new("swap_token_pairs");
// Pool share tokens keyed by symbol
pub const POOL_TOKENS: Map<&str, PoolTokenInfo> = Map::new("pool_tokens");
// Recognized assets keyed by denom
pub const TOKENS: Map<&str, TokenInfo> = Map::new("tokens");
pub const BALANCES: Map<(&Addr, &str), Decimal256> = Map::new("balances");
