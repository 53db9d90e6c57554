pub mod auction_state;
pub use auction_state::*;

pub mod config;
pub use config::*;

pub mod referrer_whitelist;
pub use referrer_whitelist::*;
