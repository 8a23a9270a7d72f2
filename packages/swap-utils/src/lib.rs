use cosmwasm_std::Addr;

pub mod coin;
pub mod error;
pub mod events;
pub mod msg;
pub mod pair;
pub mod params;
pub mod pool;
pub mod result;

pub use coin::DecCoin;
pub use error::SwapError;
pub use pair::PairKey;
pub use params::SwapParams;
pub use pool::{PoolTokenInfo, ReserveState, SwapTokenPair, TokenInfo};
pub use result::{ResultCode, TxResult};

pub type SwapResult<T> = Result<T, SwapError>;

/// Name under which the module emits events and holds escrowed reserves.
pub const MODULE_NAME: &str = "swap";

/// Escrow account of the module. Every pool's reserves are held here.
pub fn module_account() -> Addr {
    Addr::unchecked("swap_module")
}
