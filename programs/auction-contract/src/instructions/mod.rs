pub mod initialize;
pub use initialize::*;

pub mod auction_system;
pub use auction_system::*;

pub mod referral_system;
pub use referral_system::*;
