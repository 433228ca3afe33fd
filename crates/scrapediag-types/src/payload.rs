//! Keys of the scraping service's `/debug` payload.
//!
//! Every field is optional on the wire. The service has changed its debug
//! output more than once, so readers must treat a missing key as "nothing
//! found" rather than as a parse failure.

/// Indicator key: elements whose class attribute mentions "trade".
pub const INDICATOR_TRADE_CLASS: &str = "elements_with_trade_class";
/// Indicator key: elements whose text carries a dollar amount.
pub const INDICATOR_DOLLAR_SIGNS: &str = "elements_with_dollar_signs";
/// Indicator key: text nodes naming a tracked politician.
pub const INDICATOR_POLITICIAN_MENTIONS: &str = "politician_mentions";
