use std::str::FromStr;

use cosmwasm_std::{
    testing::{mock_env, MockStorage},
    Addr, BlockInfo, Decimal256, Event, Storage, Timestamp,
};
use getset::{Getters, MutGetters};
use tokenswap_utils::{
    module_account,
    msg::{MsgAddLiquidity, MsgCreateExchange, SwapMsg},
    DecCoin, PoolTokenInfo, SwapParams, SwapTokenPair, TokenInfo, TxResult,
};

use crate::{
    keeper::SwapKeeper,
    state::{BALANCES, POOL_TOKENS, SWAP_TOKEN_PAIRS},
    SwapPipeline,
};

pub const ABC: &str = "ABC";
pub const XYZ: &str = "XYZ";
pub const OKT: &str = "OKT";
pub const POOL_ABC: &str = "OIP3-ABC";
pub const INITIAL_BALANCE: &str = "1000";

pub fn dec(value: &str) -> Decimal256 {
    Decimal256::from_str(value).unwrap()
}

/// Attribute value of the first event carrying `key`.
pub fn attribute<'a>(events: &'a [Event], key: &str) -> Option<&'a str> {
    events
        .iter()
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
}

#[derive(Getters, MutGetters)]
pub struct SwapTestSuite {
    #[getset(get = "pub", get_mut = "pub")]
    pipeline: SwapPipeline<MockStorage>,
    #[getset(get = "pub")]
    block: BlockInfo,
    #[getset(get = "pub")]
    sender: Addr,
}

impl Default for SwapTestSuite {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SwapTestSuite {
    /// A module with ABC and XYZ registered, a share token for ABC only,
    /// and a funded sender.
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut pipeline = SwapPipeline::new(MockStorage::new(), SwapParams::default()).unwrap();
        let sender = Addr::unchecked("alice");

        {
            let mut keeper = pipeline.keeper();
            for symbol in [ABC, XYZ] {
                keeper
                    .register_token(&TokenInfo {
                        symbol: symbol.to_string(),
                        name: format!("{symbol} token"),
                        total_supply: dec("1000000"),
                    })
                    .unwrap();
            }
            keeper
                .register_pool_token(&PoolTokenInfo::new(
                    POOL_ABC,
                    "ABC pool token",
                    module_account(),
                ))
                .unwrap();
        }

        let mut suite = SwapTestSuite {
            pipeline,
            block: mock_env().block,
            sender,
        };
        let sender = suite.sender.clone();
        suite.fund(&sender, OKT, INITIAL_BALANCE);
        suite.fund(&sender, ABC, INITIAL_BALANCE);
        suite
    }

    pub fn fund(&mut self, address: &Addr, denom: &str, amount: &str) {
        self.pipeline
            .keeper()
            .set_balance(address, &DecCoin::new(denom, dec(amount)))
            .unwrap();
    }

    /// Overwrites the ABC pool and its share supply, bypassing the handlers.
    pub fn set_pool_state(&mut self, base: &str, quote: &str, total_supply: &str) {
        let params = self.pipeline.params().clone();
        let pair = SwapTokenPair {
            base_pooled_coin: DecCoin::new(ABC, dec(base)),
            quote_pooled_coin: DecCoin::new(OKT, dec(quote)),
            pool_token_name: params.pool_token_name(ABC),
        };

        let mut keeper = self.pipeline.keeper();
        keeper
            .set_swap_token_pair(&params.pair_key(ABC), &pair)
            .unwrap();
        keeper
            .register_pool_token(&PoolTokenInfo {
                total_supply: dec(total_supply),
                ..PoolTokenInfo::new(POOL_ABC, "ABC pool token", module_account())
            })
            .unwrap();
    }

    pub fn advance_block(&mut self, seconds: u64) {
        self.block.height += 1;
        self.block.time = self.block.time.plus_seconds(seconds);
    }

    pub fn now(&self) -> Timestamp {
        self.block.time
    }

    pub fn deliver(&mut self, msg: SwapMsg) -> TxResult {
        let block = self.block.clone();
        self.pipeline.deliver_tx(&block, msg)
    }

    pub fn create_exchange(&mut self, token: &str) -> TxResult {
        self.deliver(SwapMsg::CreateExchange(MsgCreateExchange::new(token)))
    }

    pub fn add_liquidity_msg(
        &self,
        quote: &str,
        max_base: &str,
        min_liquidity: &str,
        deadline: Timestamp,
    ) -> MsgAddLiquidity {
        MsgAddLiquidity {
            min_liquidity: dec(min_liquidity),
            max_base_tokens: DecCoin::new(ABC, dec(max_base)),
            quote_tokens: DecCoin::new(OKT, dec(quote)),
            deadline,
            sender: self.sender.clone(),
        }
    }

    /// Deposits into the ABC pool with a deadline one minute out.
    pub fn add_liquidity(&mut self, quote: &str, max_base: &str, min_liquidity: &str) -> TxResult {
        let deadline = self.now().plus_seconds(60);
        let msg = self.add_liquidity_msg(quote, max_base, min_liquidity, deadline);
        self.deliver(SwapMsg::AddLiquidity(msg))
    }

    pub fn pool(&self, token: &str) -> Option<SwapTokenPair> {
        let key = self.pipeline.params().pair_key(token);
        SWAP_TOKEN_PAIRS
            .may_load(self.storage(), key.key())
            .unwrap()
    }

    pub fn pool_token(&self, name: &str) -> PoolTokenInfo {
        POOL_TOKENS.load(self.storage(), name).unwrap()
    }

    pub fn balance(&self, address: &Addr, denom: &str) -> Decimal256 {
        BALANCES
            .may_load(self.storage(), (address, denom))
            .unwrap()
            .unwrap_or_default()
    }

    pub fn sender_balance(&self, denom: &str) -> Decimal256 {
        self.balance(&self.sender, denom)
    }

    pub fn escrow_balance(&self, denom: &str) -> Decimal256 {
        self.balance(&module_account(), denom)
    }

    fn storage(&self) -> &dyn Storage {
        self.pipeline.storage()
    }
}
