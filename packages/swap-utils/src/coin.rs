use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, Decimal256};

use crate::{SwapError, SwapResult};

/// A denomination together with an 18-digit fixed point amount.
///
/// Coins are values: every arithmetic helper returns a new coin and leaves
/// the receiver untouched.
#[cw_serde]
pub struct DecCoin {
    pub denom: String,
    pub amount: Decimal256,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Decimal256) -> Self {
        DecCoin {
            denom: denom.into(),
            amount,
        }
    }

    pub fn zero(denom: impl Into<String>) -> Self {
        DecCoin::new(denom, Decimal256::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        !self.amount.is_zero()
    }

    /// Same denom, new amount.
    pub fn with_amount(&self, amount: Decimal256) -> Self {
        DecCoin::new(self.denom.clone(), amount)
    }

    pub fn checked_add(&self, other: &DecCoin) -> SwapResult<DecCoin> {
        ensure!(
            self.denom == other.denom,
            SwapError::DenomMismatch {
                left: self.denom.clone(),
                right: other.denom.clone(),
            }
        );
        Ok(self.with_amount(self.amount.checked_add(other.amount)?))
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
