use cosmwasm_std::{ensure, BlockInfo, Decimal256, Event, Response};
use log::{debug, info};
use tokenswap_utils::{
    events::{
        ATTRIBUTE_KEY_BASE_TOKENS, ATTRIBUTE_KEY_LIQUIDITY, ATTRIBUTE_KEY_MODULE,
        ATTRIBUTE_KEY_TOKEN_PAIR, EVENT_TYPE_MESSAGE,
    },
    msg::{MsgAddLiquidity, MsgCreateExchange, SwapMsg},
    DecCoin, PoolTokenInfo, ReserveState, SwapError, SwapParams, SwapResult, SwapTokenPair,
    MODULE_NAME,
};

use crate::keeper::{SwapKeeper, TokenService};

/// Validates `msg` and routes it to its handler.
pub fn dispatch<K>(
    block: &BlockInfo,
    keeper: &mut K,
    params: &SwapParams,
    msg: SwapMsg,
) -> SwapResult<Response>
where
    K: SwapKeeper + TokenService,
{
    msg.validate_basic(params)?;

    match msg {
        SwapMsg::CreateExchange(msg) => handle_create_exchange(keeper, params, msg),
        SwapMsg::AddLiquidity(msg) => handle_add_liquidity(block, keeper, params, msg),
    }
}

fn module_event() -> Event {
    Event::new(EVENT_TYPE_MESSAGE).add_attribute(ATTRIBUTE_KEY_MODULE, MODULE_NAME)
}

/// Opens an empty pool for `msg.token` against the native denom, bound to
/// its pre-provisioned pool share token.
pub fn handle_create_exchange<K: SwapKeeper>(
    keeper: &mut K,
    params: &SwapParams,
    msg: MsgCreateExchange,
) -> SwapResult<Response> {
    debug!("create exchange for {}", msg.token);

    ensure!(
        keeper.token_exists(&msg.token),
        SwapError::TokenNotExist(msg.token)
    );

    let pair_key = params.pair_key(&msg.token);
    if keeper.get_swap_token_pair(&pair_key)?.is_some() {
        return Err(SwapError::ExchangeAlreadyExists(pair_key.to_string()));
    }

    let pool_token_name = params.pool_token_name(&msg.token);
    if keeper.get_pool_token_info(&pool_token_name)?.is_none() {
        return Err(SwapError::PoolTokenNotExist(pool_token_name));
    }

    let pair = SwapTokenPair::empty(&msg.token, &params.native_denom, pool_token_name);
    keeper.set_swap_token_pair(&pair_key, &pair)?;

    info!("created exchange {} ({})", pair_key, pair.pool_token_name);

    Ok(Response::new()
        .add_event(module_event().add_attribute(ATTRIBUTE_KEY_TOKEN_PAIR, pair_key.to_string())))
}

/// Amounts a deposit consumes and issues, before any bound check.
#[derive(Clone, Debug, PartialEq)]
pub struct Deposit {
    pub base_tokens: DecCoin,
    pub liquidity: Decimal256,
}

/// Computes the base tokens required and the liquidity issued for a
/// deposit of `msg.quote_tokens` into `pair`.
pub fn calculate_deposit(
    pair: &SwapTokenPair,
    pool_token: &PoolTokenInfo,
    msg: &MsgAddLiquidity,
) -> SwapResult<Deposit> {
    // An empty deposit on either side would leave the pool half funded
    ensure!(
        msg.quote_tokens.is_positive() && msg.max_base_tokens.is_positive(),
        SwapError::InvalidCoins(format!(
            "deposit must be positive on both sides: {} + up to {}",
            msg.quote_tokens, msg.max_base_tokens
        ))
    );

    match pair.reserve_state() {
        // First depositor sets the price
        ReserveState::Empty => Ok(Deposit {
            base_tokens: msg.max_base_tokens.clone(),
            liquidity: Decimal256::one(),
        }),
        ReserveState::Active => {
            let base_amount = msg
                .quote_tokens
                .amount
                .checked_mul(pair.base_pooled_coin.amount)?
                .checked_div(pair.quote_pooled_coin.amount)?;

            ensure!(
                !pool_token.total_supply.is_zero(),
                SwapError::UnexpectedTotalSupply(pool_token.to_string())
            );

            let liquidity = msg
                .quote_tokens
                .amount
                .checked_div(pair.quote_pooled_coin.amount)?
                .checked_mul(pool_token.total_supply)?;

            Ok(Deposit {
                base_tokens: msg.max_base_tokens.with_amount(base_amount),
                liquidity,
            })
        }
        ReserveState::Inconsistent => Err(SwapError::InvalidSwapTokenPair(pair.to_string())),
    }
}

/// Deposits liquidity into an existing pool and mints pool share tokens to
/// the sender.
///
/// Every check runs before the first write. The writes then happen in a
/// fixed order: escrow transfer, pool record, share minting. A failure after
/// the transfer leaves earlier writes in place, so callers that need
/// all-or-nothing semantics run this through [`crate::SwapPipeline`].
pub fn handle_add_liquidity<K>(
    block: &BlockInfo,
    keeper: &mut K,
    params: &SwapParams,
    msg: MsgAddLiquidity,
) -> SwapResult<Response>
where
    K: SwapKeeper + TokenService,
{
    debug!(
        "add liquidity from {}: {} + up to {}",
        msg.sender, msg.quote_tokens, msg.max_base_tokens
    );

    ensure!(
        block.time < msg.deadline,
        SwapError::DeadlineExceeded {
            deadline: msg.deadline,
            block_time: block.time,
        }
    );

    let pair_key = msg.swap_token_pair(params);
    let pair = keeper
        .get_swap_token_pair(&pair_key)?
        .ok_or_else(|| SwapError::ExchangeNotFound(pair_key.to_string()))?;
    let pool_token = keeper
        .get_pool_token_info(&pair.pool_token_name)?
        .ok_or_else(|| SwapError::PoolTokenNotExist(pair.pool_token_name.clone()))?;

    let Deposit {
        base_tokens,
        liquidity,
    } = calculate_deposit(&pair, &pool_token, &msg)?;

    ensure!(
        base_tokens.amount <= msg.max_base_tokens.amount,
        SwapError::MaxBaseTokensExceeded {
            required: base_tokens.to_string(),
            max: msg.max_base_tokens.to_string(),
        }
    );
    ensure!(
        liquidity >= msg.min_liquidity,
        SwapError::MinLiquidityNotMet {
            liquidity: liquidity.to_string(),
            min: msg.min_liquidity.to_string(),
        }
    );

    let updated = pair.with_deposit(&msg.quote_tokens, &base_tokens)?;
    let pool_coins = DecCoin::new(pool_token.symbol, liquidity);

    keeper.send_coins_to_pool(&[msg.quote_tokens.clone(), base_tokens.clone()], &msg.sender)?;
    keeper.set_swap_token_pair(&pair_key, &updated)?;
    keeper.mint_pool_coins(&[pool_coins], &msg.sender)?;

    info!(
        "added liquidity to {}: reserves {} / {}, issued {}",
        pair_key, updated.base_pooled_coin, updated.quote_pooled_coin, liquidity
    );

    Ok(Response::new().add_event(
        module_event()
            .add_attribute(ATTRIBUTE_KEY_LIQUIDITY, liquidity.to_string())
            .add_attribute(ATTRIBUTE_KEY_BASE_TOKENS, base_tokens.to_string()),
    ))
}
