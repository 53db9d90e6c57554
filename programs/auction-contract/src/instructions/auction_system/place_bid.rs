use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

use crate::error::ErrorCode;
use crate::state::{AuctionState, BidSplit, ReferrerWhitelist};
use crate::{SEED_AUCTION_ACCOUNT, SEED_VAULT_ACCOUNT, SEED_WHITELIST_ACCOUNT};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct PlaceBid<'info> {
    #[account(mut)]
    pub bidder: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_AUCTION_ACCOUNT, seed.to_le_bytes().as_ref()],
        bump = auction.bump,
    )]
    pub auction: Account<'info, AuctionState>,

    #[account(
        mut,
        seeds = [SEED_VAULT_ACCOUNT, seed.to_le_bytes().as_ref()],
        bump = auction.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// CHECK: refund destination; only accepted if its key matches the
    /// auction's recorded current bidder.
    #[account(mut)]
    pub preceding_bidder: Option<UncheckedAccount<'info>>,

    #[account(
        seeds = [SEED_WHITELIST_ACCOUNT, seed.to_le_bytes().as_ref()],
        bump = referrer_whitelist.bump,
    )]
    pub referrer_whitelist: Option<Account<'info, ReferrerWhitelist>>,

    #[account(mut)]
    pub referrer: Option<SystemAccount<'info>>,

    pub system_program: Program<'info, System>,
}

pub fn handle_place_bid(ctx: Context<PlaceBid>, seed: u64, amount: u64) -> Result<()> {
    // every precondition is checked before the first transfer
    let now = Clock::get()?.unix_timestamp;
    require!(
        now >= ctx.accounts.auction.start_time,
        ErrorCode::AuctionNotStarted
    );
    require!(now < ctx.accounts.auction.deadline, ErrorCode::AuctionEnded);

    ctx.accounts.auction.check_bid_amount(amount)?;

    // the supplied preceding bidder authorizes the refund target
    require!(
        ctx.accounts.auction.current_bidder
            == ctx.accounts.preceding_bidder.as_ref().map(|a| a.key()),
        ErrorCode::BadPrecedingBidder
    );

    // a supplied referrer must be vouched for by the auction's whitelist
    if let Some(referrer) = &ctx.accounts.referrer {
        let whitelist = ctx
            .accounts
            .referrer_whitelist
            .as_ref()
            .ok_or(ErrorCode::BadAccount)?;
        require!(whitelist.contains(&referrer.key()), ErrorCode::BadAccount);
    }

    // fee splitting activates only when the auction carries referral terms
    // and a whitelisted referrer was supplied on this call
    let split = match (
        &ctx.accounts.auction.referral_structure,
        &ctx.accounts.referrer,
    ) {
        (Some(structure), Some(_)) => structure.split(amount)?,
        _ => BidSplit::without_referral(amount),
    };

    let floor = Rent::get()?.minimum_balance(0);
    let seed_bytes = seed.to_le_bytes();

    // refund the outbid party exactly what the vault holds for them: the
    // live balance above the floor, i.e. the previous bid's net escrow
    if let Some(preceding_bidder) = &ctx.accounts.preceding_bidder {
        let refund = ctx.accounts.vault.lamports().saturating_sub(floor);
        if refund > 0 {
            let signer_seeds: &[&[&[u8]]] = &[&[
                SEED_VAULT_ACCOUNT,
                seed_bytes.as_ref(),
                &[ctx.accounts.auction.vault_bump],
            ]];
            let cpi_ctx = CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: preceding_bidder.to_account_info(),
                },
                signer_seeds,
            );
            transfer(cpi_ctx, refund)?;
        }
    }

    // admit the new escrow
    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.bidder.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    transfer(cpi_ctx, split.vault_net)?;

    if split.referrer_cut > 0 {
        if let Some(referrer) = &ctx.accounts.referrer {
            let cpi_ctx = CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.bidder.to_account_info(),
                    to: referrer.to_account_info(),
                },
            );
            transfer(cpi_ctx, split.referrer_cut)?;
        }
    }

    let auction = &mut ctx.accounts.auction;
    auction.current_bidder = Some(ctx.accounts.bidder.key());
    // the gross amount drives the next bidder's increment comparison
    auction.current_bid = Some(amount);

    Ok(())
}
