//! The configuration for the crate, given from environment variables and lazy
//! initialized when needed.

use once_cell::race::OnceBool;
use std::env;


/// Return true if enchantments dropped while decoding an item stack because their id is
/// unknown should be logged as warnings instead of traces.
///
/// To enable this feature, set `MCITEM_WARN_UNKNOWN_ENCHANTMENT=1`.
pub fn warn_unknown_enchantment() -> bool {
    static ENV: OnceBool = OnceBool::new();
    ENV.get_or_init(|| {
        env::var_os("MCITEM_WARN_UNKNOWN_ENCHANTMENT")
            .map(|s| s.as_encoded_bytes() == b"1")
            .unwrap_or(false)
    })
}
