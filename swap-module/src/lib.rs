//! State transitions of the swap module: pool creation and liquidity
//! provisioning over a key-value store, applied one intent at a time.

pub mod cache;
pub mod config;
pub mod handler;
pub mod keeper;
pub mod pipeline;
pub mod state;

#[cfg(test)]
mod testing;

pub use cache::CacheStorage;
pub use handler::{dispatch, handle_add_liquidity, handle_create_exchange};
pub use keeper::{StoreKeeper, SwapKeeper, TokenService};
pub use pipeline::SwapPipeline;
