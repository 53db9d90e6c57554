use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The auction has not started yet.")]
    AuctionNotStarted,

    #[msg("The auction has already ended.")]
    AuctionEnded,

    #[msg("The auction is still active and cannot be claimed yet.")]
    AuctionNotEnded,

    #[msg("Bid amount does not clear the minimum price or increment.")]
    BidTooLow,

    #[msg("The preceding bidder account does not match the current highest bidder.")]
    BadPrecedingBidder,

    #[msg("An account failed an ownership or identity check.")]
    BadAccount,

    #[msg("The referrer whitelist is full.")]
    ReferrersListFull,

    #[msg("The referrer is already whitelisted.")]
    ExistingReferrer,

    #[msg("The buyer discount cannot exceed the base referral fee.")]
    IncorrectFeeStructure,

    #[msg("The auction deadline must be after its start time.")]
    IncorrectSchedule,

    #[msg("The token account has insufficient balance for the operation.")]
    InsufficientTokenBalance,

    #[msg("Arithmetic operation resulted in an overflow.")]
    Overflow,

    #[msg("There is nothing left to claim.")]
    NothingToClaim,
}
