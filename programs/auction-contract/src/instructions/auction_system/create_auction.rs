use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::error::ErrorCode;
use crate::state::{AuctionState, ReferralStructure};
use crate::{SEED_AUCTION_ACCOUNT, SEED_VAULT_ACCOUNT};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct CreateAuction<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = maker,
    )]
    pub maker_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = maker,
        space = 8 + AuctionState::INIT_SPACE,
        seeds = [SEED_AUCTION_ACCOUNT, seed.to_le_bytes().as_ref()],
        bump
    )]
    pub auction: Account<'info, AuctionState>,

    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint,
        associated_token::authority = auction,
        associated_token::token_program = token_program,
    )]
    pub nft_vault: InterfaceAccount<'info, TokenAccount>,

    /// Currency side of the escrow: a zero-data, system-owned PDA. It is
    /// funded to the rent floor below rather than allocated, so the system
    /// program can keep debiting it for refunds.
    #[account(
        mut,
        seeds = [SEED_VAULT_ACCOUNT, seed.to_le_bytes().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_create_auction(
    ctx: Context<CreateAuction>,
    _seed: u64,
    start_time: i64,
    deadline: i64,
    min_price: u64,
    min_increment: u64,
    referral_structure: Option<ReferralStructure>,
) -> Result<()> {
    require!(deadline > start_time, ErrorCode::IncorrectSchedule);
    if let Some(structure) = &referral_structure {
        structure.validate()?;
    }
    require!(
        ctx.accounts.maker_ata.amount >= 1,
        ErrorCode::InsufficientTokenBalance
    );

    ctx.accounts.auction.set_inner(AuctionState {
        start_time,
        deadline,
        min_price,
        min_increment,
        mint: ctx.accounts.mint.key(),
        maker: ctx.accounts.maker.key(),
        current_bidder: None,
        current_bid: None,
        referral_structure,
        bump: ctx.bumps.auction,
        vault_bump: ctx.bumps.vault,
    });

    // move the single auctioned unit into custody
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.maker_ata.to_account_info(),
        to: ctx.accounts.nft_vault.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        authority: ctx.accounts.maker.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    transfer_checked(cpi_ctx, 1, ctx.accounts.mint.decimals)?;

    // fund the currency vault to its solvency floor so refunds can never
    // drop it below rent exemption
    let floor = Rent::get()?.minimum_balance(0);
    let balance = ctx.accounts.vault.lamports();
    if balance < floor {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.maker.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        );
        transfer(cpi_ctx, floor - balance)?;
    }

    Ok(())
}
