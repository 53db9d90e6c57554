pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("FMbPxmEm3fDtPzH8RTpqWx9xT1bd3Bio38vg7MrXr9Rv");

#[program]
pub mod auction_contract {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    pub fn create_auction(
        ctx: Context<CreateAuction>,
        seed: u64,
        start_time: i64,
        deadline: i64,
        min_price: u64,
        min_increment: u64,
        referral_structure: Option<ReferralStructure>,
    ) -> Result<()> {
        handle_create_auction(
            ctx,
            seed,
            start_time,
            deadline,
            min_price,
            min_increment,
            referral_structure,
        )
    }

    pub fn bid(ctx: Context<PlaceBid>, seed: u64, amount: u64) -> Result<()> {
        handle_place_bid(ctx, seed, amount)
    }

    pub fn whitelist_referrer(ctx: Context<WhitelistReferrer>, seed: u64) -> Result<()> {
        handle_whitelist_referrer(ctx, seed)
    }

    pub fn claim_nft(ctx: Context<ClaimNft>, seed: u64) -> Result<()> {
        handle_claim_nft(ctx, seed)
    }

    pub fn claim_payment(ctx: Context<ClaimPayment>, seed: u64) -> Result<()> {
        handle_claim_payment(ctx, seed)
    }
}
