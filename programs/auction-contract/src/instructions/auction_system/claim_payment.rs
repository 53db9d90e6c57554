use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

use crate::error::ErrorCode;
use crate::state::AuctionState;
use crate::{SEED_AUCTION_ACCOUNT, SEED_VAULT_ACCOUNT};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct ClaimPayment<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    #[account(
        seeds = [SEED_AUCTION_ACCOUNT, seed.to_le_bytes().as_ref()],
        has_one = maker @ ErrorCode::BadAccount,
        bump = auction.bump,
    )]
    pub auction: Account<'info, AuctionState>,

    #[account(
        mut,
        seeds = [SEED_VAULT_ACCOUNT, seed.to_le_bytes().as_ref()],
        bump = auction.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_claim_payment(ctx: Context<ClaimPayment>, seed: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(
        now >= ctx.accounts.auction.deadline,
        ErrorCode::AuctionNotEnded
    );

    // everything above the solvency floor is the winning bid's net escrow;
    // after a first successful claim this is zero and the claim fails
    let floor = Rent::get()?.minimum_balance(0);
    let payout = ctx.accounts.vault.lamports().saturating_sub(floor);
    require!(payout > 0, ErrorCode::NothingToClaim);

    let seed_bytes = seed.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SEED_VAULT_ACCOUNT,
        seed_bytes.as_ref(),
        &[ctx.accounts.auction.vault_bump],
    ]];
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.maker.to_account_info(),
        },
        signer_seeds,
    );
    transfer(cpi_ctx, payout)?;

    msg!("payment of {} lamports claimed by maker", payout);
    Ok(())
}
