pub mod whitelist_referrer;
pub use whitelist_referrer::*;
