use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Event, Response};

use crate::SwapError;

/// Numeric result codes, aligned with the Cosmos SDK root codespace.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum ResultCode {
    Ok,
    Internal,
    UnknownRequest,
    InvalidAddress,
    InsufficientCoins,
    InvalidCoins,
}

impl ResultCode {
    pub fn as_u32(&self) -> u32 {
        match self {
            ResultCode::Ok => 0,
            ResultCode::Internal => 1,
            ResultCode::UnknownRequest => 6,
            ResultCode::InvalidAddress => 7,
            ResultCode::InsufficientCoins => 10,
            ResultCode::InvalidCoins => 11,
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Outcome of delivering one intent: either success with the emitted
/// events, or a failure code with a human readable log.
#[cw_serde]
pub struct TxResult {
    pub code: ResultCode,
    pub log: String,
    pub events: Vec<Event>,
}

impl TxResult {
    pub fn is_ok(&self) -> bool {
        self.code == ResultCode::Ok
    }
}

impl From<Result<Response, SwapError>> for TxResult {
    fn from(result: Result<Response, SwapError>) -> Self {
        match result {
            Ok(response) => TxResult {
                code: ResultCode::Ok,
                log: String::new(),
                events: response.events,
            },
            Err(error) => TxResult {
                code: error.code(),
                log: error.to_string(),
                events: vec![],
            },
        }
    }
}
