use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::{AuctionState, ReferrerWhitelist};
use crate::{SEED_AUCTION_ACCOUNT, SEED_WHITELIST_ACCOUNT};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct WhitelistReferrer<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    #[account(
        has_one = maker @ ErrorCode::BadAccount,
        seeds = [SEED_AUCTION_ACCOUNT, seed.to_le_bytes().as_ref()],
        bump = auction.bump,
    )]
    pub auction: Account<'info, AuctionState>,

    #[account(
        init_if_needed,
        payer = maker,
        space = 8 + ReferrerWhitelist::INIT_SPACE,
        seeds = [SEED_WHITELIST_ACCOUNT, seed.to_le_bytes().as_ref()],
        bump,
    )]
    pub referrer_whitelist: Account<'info, ReferrerWhitelist>,

    pub referrer: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_whitelist_referrer(ctx: Context<WhitelistReferrer>, _seed: u64) -> Result<()> {
    let whitelist = &mut ctx.accounts.referrer_whitelist;
    whitelist.bump = ctx.bumps.referrer_whitelist;
    whitelist.add(ctx.accounts.referrer.key())
}
