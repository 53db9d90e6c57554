use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::error::ErrorCode;

/// Basis-point terms attached to an auction at creation. A whitelisted
/// referrer earns `base_fee_bps` of each bid, out of which the bidder keeps
/// `buyer_discount_bps` as a discount on their own payment.
#[derive(InitSpace, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct ReferralStructure {
    pub base_fee_bps: u16,
    pub buyer_discount_bps: u16,
}

/// How one gross bid amount is divided between the escrow vault, the
/// referrer and the bidder's own wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BidSplit {
    /// Lamports deposited into the currency vault (net escrow).
    pub vault_net: u64,
    /// Lamports paid out to the referrer.
    pub referrer_cut: u64,
    /// Lamports leaving the bidder's wallet in total.
    pub bidder_pays: u64,
}

impl BidSplit {
    pub fn without_referral(amount: u64) -> Self {
        Self {
            vault_net: amount,
            referrer_cut: 0,
            bidder_pays: amount,
        }
    }
}

impl ReferralStructure {
    /// `buyer_discount_bps <= base_fee_bps <= 10_000` is enforced at auction
    /// creation, so neither subtraction below can underflow.
    pub fn validate(&self) -> Result<()> {
        require!(
            self.base_fee_bps as u64 <= BPS_DENOMINATOR,
            ErrorCode::IncorrectFeeStructure
        );
        require!(
            self.buyer_discount_bps <= self.base_fee_bps,
            ErrorCode::IncorrectFeeStructure
        );
        Ok(())
    }

    pub fn split(&self, amount: u64) -> Result<BidSplit> {
        let fee = bps_share(amount, self.base_fee_bps)?;
        let discount = bps_share(amount, self.buyer_discount_bps)?;
        let vault_net = amount.checked_sub(fee).ok_or(ErrorCode::Overflow)?;
        let referrer_cut = fee.checked_sub(discount).ok_or(ErrorCode::Overflow)?;
        let bidder_pays = amount.checked_sub(discount).ok_or(ErrorCode::Overflow)?;
        Ok(BidSplit {
            vault_net,
            referrer_cut,
            bidder_pays,
        })
    }
}

fn bps_share(amount: u64, bps: u16) -> Result<u64> {
    let share = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(ErrorCode::Overflow)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(share).map_err(|_| error!(ErrorCode::Overflow))
}

#[account]
#[derive(InitSpace)]
pub struct AuctionState {
    pub start_time: i64,
    pub deadline: i64,
    pub min_price: u64,
    pub min_increment: u64,
    /// Mint of the custodied asset.
    pub mint: Pubkey,
    /// Seller; immutable after creation.
    pub maker: Pubkey,
    pub current_bidder: Option<Pubkey>,
    /// Gross amount of the standing bid. The vault holds the net amount,
    /// which is lower whenever a referral fee was withheld.
    pub current_bid: Option<u64>,
    pub referral_structure: Option<ReferralStructure>,
    pub bump: u8,
    pub vault_bump: u8,
}

impl AuctionState {
    /// Bid floor rule: a first bid clears `min_price`; every later bid must
    /// beat the standing gross bid by at least `min_increment` and always
    /// strictly exceed it, so equal bids lose even when the increment is 0.
    pub fn check_bid_amount(&self, amount: u64) -> Result<()> {
        match self.current_bid {
            Some(current) => {
                let floor = current
                    .checked_add(self.min_increment)
                    .ok_or(ErrorCode::Overflow)?;
                require!(amount > current && amount >= floor, ErrorCode::BidTooLow);
            }
            None => require!(amount >= self.min_price, ErrorCode::BidTooLow),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auction(min_price: u64, min_increment: u64, current_bid: Option<u64>) -> AuctionState {
        AuctionState {
            start_time: 0,
            deadline: 100,
            min_price,
            min_increment,
            mint: Pubkey::new_unique(),
            maker: Pubkey::new_unique(),
            current_bidder: current_bid.map(|_| Pubkey::new_unique()),
            current_bid,
            referral_structure: None,
            bump: 255,
            vault_bump: 255,
        }
    }

    #[test]
    fn first_bid_must_clear_min_price() {
        let a = auction(1_000, 50, None);
        assert!(a.check_bid_amount(999).is_err());
        assert!(a.check_bid_amount(1_000).is_ok());
    }

    #[test]
    fn increment_boundary_is_inclusive() {
        let a = auction(0, 50, Some(1_000));
        assert_eq!(
            a.check_bid_amount(1_049).unwrap_err(),
            ErrorCode::BidTooLow.into()
        );
        assert!(a.check_bid_amount(1_050).is_ok());
    }

    #[test]
    fn zero_increment_still_rejects_equal_bids() {
        let a = auction(0, 0, Some(1));
        assert_eq!(a.check_bid_amount(1).unwrap_err(), ErrorCode::BidTooLow.into());
        assert!(a.check_bid_amount(2).is_ok());
    }

    #[test]
    fn increment_past_u64_max_is_an_overflow() {
        let a = auction(0, u64::MAX, Some(2));
        assert_eq!(
            a.check_bid_amount(u64::MAX).unwrap_err(),
            ErrorCode::Overflow.into()
        );
    }

    #[test]
    fn split_matches_reference_scenario() {
        // 10_000 lamports at 500/200 bps: vault 9_500, referrer 300, bidder 9_800
        let terms = ReferralStructure {
            base_fee_bps: 500,
            buyer_discount_bps: 200,
        };
        let split = terms.split(10_000).unwrap();
        assert_eq!(
            split,
            BidSplit {
                vault_net: 9_500,
                referrer_cut: 300,
                bidder_pays: 9_800,
            }
        );
    }

    #[test]
    fn split_conserves_value() {
        let terms = ReferralStructure {
            base_fee_bps: 777,
            buyer_discount_bps: 333,
        };
        for amount in [0, 1, 9, 10_000, 123_456_789, u64::MAX / 2] {
            let split = terms.split(amount).unwrap();
            assert_eq!(split.vault_net + split.referrer_cut, split.bidder_pays);
            assert!(split.bidder_pays <= amount);
        }
    }

    #[test]
    fn zero_bps_split_is_a_plain_deposit() {
        let terms = ReferralStructure {
            base_fee_bps: 0,
            buyer_discount_bps: 0,
        };
        assert_eq!(terms.split(5_000).unwrap(), BidSplit::without_referral(5_000));
    }

    #[test]
    fn validate_rejects_discount_above_fee() {
        let terms = ReferralStructure {
            base_fee_bps: 200,
            buyer_discount_bps: 500,
        };
        assert_eq!(
            terms.validate().unwrap_err(),
            ErrorCode::IncorrectFeeStructure.into()
        );
    }

    #[test]
    fn validate_rejects_fee_above_denominator() {
        let terms = ReferralStructure {
            base_fee_bps: 10_001,
            buyer_discount_bps: 0,
        };
        assert_eq!(
            terms.validate().unwrap_err(),
            ErrorCode::IncorrectFeeStructure.into()
        );
    }
}
