// Attribute keys of the events emitted by the swap handlers.

pub const EVENT_TYPE_MESSAGE: &str = "message";
pub const ATTRIBUTE_KEY_MODULE: &str = "module";
pub const ATTRIBUTE_KEY_TOKEN_PAIR: &str = "tokenpair";
pub const ATTRIBUTE_KEY_LIQUIDITY: &str = "liquidity";
pub const ATTRIBUTE_KEY_BASE_TOKENS: &str = "baseTokens";
