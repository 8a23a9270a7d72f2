use cosmwasm_std::{CheckedFromRatioError, OverflowError, StdError, Timestamp};
use thiserror::Error;

use crate::ResultCode;

#[derive(Error, Debug, PartialEq)]
pub enum SwapError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    DivideByZero(#[from] CheckedFromRatioError),

    #[error("token {0} does not exist")]
    TokenNotExist(String),

    #[error("Failed to create Exchange: exchange already exists: {0}")]
    ExchangeAlreadyExists(String),

    #[error("exchange not found: {0}")]
    ExchangeNotFound(String),

    #[error("Failed to create Exchange: Pool Token {0} does not exist")]
    PoolTokenNotExist(String),

    #[error("blockTime exceeded deadline: deadline {deadline}, block time {block_time}")]
    DeadlineExceeded {
        deadline: Timestamp,
        block_time: Timestamp,
    },

    #[error("invalid swapTokenPair {0}")]
    InvalidSwapTokenPair(String),

    #[error("unexpected totalSupply in poolToken {0}")]
    UnexpectedTotalSupply(String),

    #[error("MaxBaseTokens is too high: required {required}, max {max}")]
    MaxBaseTokensExceeded { required: String, max: String },

    #[error("MinLiquidity is too low: liquidity {liquidity}, min {min}")]
    MinLiquidityNotMet { liquidity: String, min: String },

    #[error("insufficient Coins: {address} has {available}, needs {required}")]
    InsufficientCoins {
        address: String,
        available: String,
        required: String,
    },

    #[error("fail to mint poolCoins: {0}")]
    MintFailed(String),

    #[error("denom mismatch: {left} != {right}")]
    DenomMismatch { left: String, right: String },

    #[error("Invalid msg: {0}")]
    InvalidMsg(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid coins: {0}")]
    InvalidCoins(String),

    #[error("Invalid msg type: {0}")]
    UnknownRequest(String),
}

impl SwapError {
    /// Result code reported to the block pipeline for this failure.
    pub fn code(&self) -> ResultCode {
        match self {
            SwapError::InsufficientCoins { .. } => ResultCode::InsufficientCoins,
            SwapError::UnknownRequest(_) | SwapError::InvalidMsg(_) => ResultCode::UnknownRequest,
            SwapError::InvalidAddress(_) => ResultCode::InvalidAddress,
            SwapError::InvalidCoins(_) => ResultCode::InvalidCoins,
            _ => ResultCode::Internal,
        }
    }
}
