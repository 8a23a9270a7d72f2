use cosmwasm_std::{from_json, BlockInfo, Storage};
use log::warn;
use tokenswap_utils::{msg::SwapMsg, SwapError, SwapParams, SwapResult, TxResult};

use crate::{cache::CacheStorage, handler, keeper::StoreKeeper};

/// Applies intents to a backing store one at a time.
///
/// Each intent runs against its own [`CacheStorage`]; its writes reach the
/// backing store only if the handler succeeds, so a rejected intent leaves
/// no trace however far its handler got.
pub struct SwapPipeline<S: Storage> {
    storage: S,
    params: SwapParams,
}

impl<S: Storage> SwapPipeline<S> {
    pub fn new(storage: S, params: SwapParams) -> SwapResult<Self> {
        params.validate()?;
        Ok(SwapPipeline { storage, params })
    }

    pub fn params(&self) -> &SwapParams {
        &self.params
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Direct access to the backing store, bypassing the per-intent cache.
    /// Used to provision tokens and balances.
    pub fn keeper(&mut self) -> StoreKeeper<'_> {
        StoreKeeper::new(&mut self.storage)
    }

    pub fn deliver_tx(&mut self, block: &BlockInfo, msg: SwapMsg) -> TxResult {
        let route = msg.route();
        let mut cache = CacheStorage::new(&mut self.storage);

        let result = {
            let mut keeper = StoreKeeper::new(&mut cache);
            handler::dispatch(block, &mut keeper, &self.params, msg)
        };

        match &result {
            Ok(_) => cache.commit(),
            Err(error) => warn!(
                "rejected {} at height {}: code {}: {}",
                route,
                block.height,
                error.code(),
                error
            ),
        }

        result.into()
    }

    /// Decodes a JSON encoded intent and delivers it. Undecodable input is
    /// reported as an unknown request.
    pub fn deliver_raw(&mut self, block: &BlockInfo, raw: &[u8]) -> TxResult {
        match from_json::<SwapMsg>(raw) {
            Ok(msg) => self.deliver_tx(block, msg),
            Err(error) => {
                let error = SwapError::UnknownRequest(error.to_string());
                warn!("rejected intent at height {}: {}", block.height, error);
                TxResult::from(Err(error))
            }
        }
    }

    /// Delivers a batch in order. Later intents observe the committed
    /// effects of earlier ones.
    pub fn deliver_block(&mut self, block: &BlockInfo, msgs: Vec<SwapMsg>) -> Vec<TxResult> {
        msgs.into_iter()
            .map(|msg| self.deliver_tx(block, msg))
            .collect()
    }
}
