use std::fmt;

use cosmwasm_schema::cw_serde;

/// Identity of a pool: an ordered pair of base and quote denominations.
///
/// Stored under the tuple key `(base, quote)`; the `Display` form
/// `<base>_<quote>` only appears in events and logs.
#[cw_serde]
#[derive(Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    pub base: String,
    pub quote: String,
}

impl PairKey {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        PairKey {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Borrowed composite storage key.
    pub fn key(&self) -> (&str, &str) {
        (self.base.as_str(), self.quote.as_str())
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.base, self.quote)
    }
}
