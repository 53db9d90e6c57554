pub mod create_auction;
pub use create_auction::*;

pub mod place_bid;
pub use place_bid::*;

pub mod claim_nft;
pub use claim_nft::*;

pub mod claim_payment;
pub use claim_payment::*;
