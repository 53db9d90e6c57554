use anchor_lang::prelude::*;

use crate::constants::MAX_REFERRERS;
use crate::error::ErrorCode;

/// Seller-curated, append-only set of identities eligible to receive
/// referral fees for one auction. Fixed capacity, no removal.
#[account]
#[derive(InitSpace)]
pub struct ReferrerWhitelist {
    pub referrers: [Pubkey; MAX_REFERRERS],
    pub count: u8,
    pub bump: u8,
}

impl ReferrerWhitelist {
    pub fn contains(&self, referrer: &Pubkey) -> bool {
        self.referrers[..self.count as usize].contains(referrer)
    }

    pub fn add(&mut self, referrer: Pubkey) -> Result<()> {
        // duplicate check first: re-adding a member of a full list is still
        // reported as a duplicate, not as capacity
        require!(!self.contains(&referrer), ErrorCode::ExistingReferrer);
        require!(
            (self.count as usize) < self.referrers.len(),
            ErrorCode::ReferrersListFull
        );

        self.referrers[self.count as usize] = referrer;
        self.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> ReferrerWhitelist {
        ReferrerWhitelist {
            referrers: [Pubkey::default(); MAX_REFERRERS],
            count: 0,
            bump: 255,
        }
    }

    #[test]
    fn membership_honors_count() {
        let mut whitelist = empty();
        let member = Pubkey::new_unique();
        whitelist.add(member).unwrap();

        assert!(whitelist.contains(&member));
        // slots past `count` are zeroed but must not read as members
        assert!(!whitelist.contains(&Pubkey::default()));
    }

    #[test]
    fn rejects_duplicates() {
        let mut whitelist = empty();
        let member = Pubkey::new_unique();
        whitelist.add(member).unwrap();

        assert_eq!(
            whitelist.add(member).unwrap_err(),
            ErrorCode::ExistingReferrer.into()
        );
        assert_eq!(whitelist.count, 1);
    }

    #[test]
    fn rejects_forty_first_entry() {
        let mut whitelist = empty();
        let fifth = Pubkey::new_unique();
        for i in 0..MAX_REFERRERS {
            let entry = if i == 4 { fifth } else { Pubkey::new_unique() };
            whitelist.add(entry).unwrap();
        }
        assert_eq!(whitelist.count as usize, MAX_REFERRERS);

        assert_eq!(
            whitelist.add(Pubkey::new_unique()).unwrap_err(),
            ErrorCode::ReferrersListFull.into()
        );
        // a duplicate of entry #5 still reports the duplicate, not capacity
        assert_eq!(
            whitelist.add(fifth).unwrap_err(),
            ErrorCode::ExistingReferrer.into()
        );
    }
}
