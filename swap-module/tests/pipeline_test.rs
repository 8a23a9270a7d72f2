use std::str::FromStr;

use cosmwasm_std::{
    testing::{mock_env, MockStorage},
    Addr, BlockInfo, Decimal256, Timestamp,
};

use tokenswap_module::{config::params_from_toml, SwapKeeper, SwapPipeline};
use tokenswap_utils::{
    module_account, DecCoin, PairKey, PoolTokenInfo, ResultCode, SwapParams, TokenInfo,
};

fn dec(value: &str) -> Decimal256 {
    Decimal256::from_str(value).unwrap()
}

fn setup(params: SwapParams) -> (SwapPipeline<MockStorage>, BlockInfo) {
    let mut pipeline = SwapPipeline::new(MockStorage::new(), params.clone()).unwrap();
    let alice = Addr::unchecked("alice");

    let mut keeper = pipeline.keeper();
    keeper
        .register_token(&TokenInfo {
            symbol: "ABC".to_string(),
            name: "ABC token".to_string(),
            total_supply: dec("1000000"),
        })
        .unwrap();
    keeper
        .register_pool_token(&PoolTokenInfo::new(
            params.pool_token_name("ABC"),
            "ABC pool token",
            module_account(),
        ))
        .unwrap();
    keeper
        .set_balance(&alice, &DecCoin::new(params.native_denom.clone(), dec("100")))
        .unwrap();
    keeper
        .set_balance(&alice, &DecCoin::new("ABC", dec("100")))
        .unwrap();

    (pipeline, mock_env().block)
}

fn add_liquidity_json(native_denom: &str, deadline: Timestamp) -> String {
    let deadline = deadline.nanos();
    format!(
        r#"{{"add_liquidity":{{"min_liquidity":"1","max_base_tokens":{{"denom":"ABC","amount":"10"}},"quote_tokens":{{"denom":"{native_denom}","amount":"10"}},"deadline":"{deadline}","sender":"alice"}}}}"#
    )
}

#[test]
fn test_raw_intents_end_to_end() {
    let (mut pipeline, block) = setup(SwapParams::default());
    let deadline = block.time.plus_seconds(60);

    let res = pipeline.deliver_raw(&block, br#"{"create_exchange":{"token":"ABC"}}"#);
    assert!(res.is_ok(), "{}", res.log);

    let res = pipeline.deliver_raw(&block, add_liquidity_json("OKT", deadline).as_bytes());
    assert!(res.is_ok(), "{}", res.log);
    assert_eq!(res.events.len(), 1);
    assert_eq!(res.events[0].ty, "message");

    let keeper = pipeline.keeper();
    let pair = keeper
        .get_swap_token_pair(&PairKey::new("ABC", "OKT"))
        .unwrap()
        .unwrap();
    assert_eq!(pair.base_pooled_coin.amount, dec("10"));
    assert_eq!(pair.quote_pooled_coin.amount, dec("10"));

    let alice = Addr::unchecked("alice");
    assert_eq!(keeper.balance(&alice, "OIP3-ABC").unwrap(), Decimal256::one());
    assert_eq!(keeper.balance(&alice, "OKT").unwrap(), dec("90"));
    assert_eq!(
        keeper.all_swap_token_pairs().unwrap(),
        vec![(PairKey::new("ABC", "OKT"), pair)]
    );
}

#[test]
fn test_undecodable_intent_is_unknown_request() {
    let (mut pipeline, block) = setup(SwapParams::default());

    for raw in [
        br#"{"remove_liquidity":{"token":"ABC"}}"#.as_slice(),
        br#"{"create_exchange":{"token":"ABC","extra":1}}"#.as_slice(),
        b"not json".as_slice(),
    ] {
        let res = pipeline.deliver_raw(&block, raw);
        assert_eq!(res.code, ResultCode::UnknownRequest);
        assert_eq!(res.code.as_u32(), 6);
        assert!(res.log.starts_with("Invalid msg type"));
    }

    let keeper = pipeline.keeper();
    assert!(keeper.all_swap_token_pairs().unwrap().is_empty());
}

#[test]
fn test_params_from_config_drive_derivations() {
    let params = params_from_toml(
        r#"
        native_denom = "uokt"
        pool_token_prefix = "LP-"
        "#,
    )
    .unwrap();
    let (mut pipeline, block) = setup(params);
    let deadline = block.time.plus_seconds(60);

    assert!(pipeline
        .deliver_raw(&block, br#"{"create_exchange":{"token":"ABC"}}"#)
        .is_ok());
    let res = pipeline.deliver_raw(&block, add_liquidity_json("uokt", deadline).as_bytes());
    assert!(res.is_ok(), "{}", res.log);

    // The default native denom is now just another token
    let res = pipeline.deliver_raw(&block, add_liquidity_json("OKT", deadline).as_bytes());
    assert_eq!(res.code, ResultCode::InvalidCoins);

    let keeper = pipeline.keeper();
    assert!(keeper
        .get_swap_token_pair(&PairKey::new("ABC", "uokt"))
        .unwrap()
        .is_some());
    assert_eq!(
        keeper
            .balance(&Addr::unchecked("alice"), "LP-ABC")
            .unwrap(),
        Decimal256::one()
    );
}

#[test]
fn test_invalid_params_are_refused() {
    let params = SwapParams {
        pool_token_prefix: String::new(),
        ..SwapParams::default()
    };

    assert!(SwapPipeline::new(MockStorage::new(), params).is_err());
}
