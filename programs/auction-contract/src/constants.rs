use anchor_lang::prelude::*;

#[constant]
pub const SEED_AUCTION_ACCOUNT: &[u8] = b"auction";
pub const SEED_VAULT_ACCOUNT: &[u8] = b"vault";
pub const SEED_WHITELIST_ACCOUNT: &[u8] = b"whitelist";
pub const SEED_CONFIG_ACCOUNT: &[u8] = b"config";

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Capacity of the per-auction referrer whitelist.
pub const MAX_REFERRERS: usize = 40;
