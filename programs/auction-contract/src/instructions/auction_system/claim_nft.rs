use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::error::ErrorCode;
use crate::state::AuctionState;
use crate::SEED_AUCTION_ACCOUNT;

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct ClaimNft<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = claimer,
        associated_token::mint = mint,
        associated_token::authority = claimer,
        associated_token::token_program = token_program,
    )]
    pub claimer_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        seeds = [SEED_AUCTION_ACCOUNT, seed.to_le_bytes().as_ref()],
        has_one = mint @ ErrorCode::BadAccount,
        bump = auction.bump,
    )]
    pub auction: Account<'info, AuctionState>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = auction,
        associated_token::token_program = token_program,
    )]
    pub nft_vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_claim_nft(ctx: Context<ClaimNft>, seed: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(
        now >= ctx.accounts.auction.deadline,
        ErrorCode::AuctionNotEnded
    );

    // the winner claims the asset; the maker reclaims it if nobody bid
    let claimer = ctx.accounts.claimer.key();
    match ctx.accounts.auction.current_bidder {
        Some(bidder) => require!(claimer == bidder, ErrorCode::BadAccount),
        None => require!(claimer == ctx.accounts.auction.maker, ErrorCode::BadAccount),
    }

    // there is no claimed flag: once the vault is empty a second transfer of
    // one unit fails on its own
    let seed_bytes = seed.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SEED_AUCTION_ACCOUNT,
        seed_bytes.as_ref(),
        &[ctx.accounts.auction.bump],
    ]];
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.nft_vault.to_account_info(),
            to: ctx.accounts.claimer_ata.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            authority: ctx.accounts.auction.to_account_info(),
        },
        signer_seeds,
    );
    transfer_checked(cpi_ctx, 1, ctx.accounts.mint.decimals)?;

    msg!("auctioned asset claimed by {}", claimer);
    Ok(())
}
