//! Static reference data: the branch ranges attached to each checksum rule
//! and the account types identified by the suffix.

mod account_types;
mod branch_ranges;

pub use account_types::{find_account_type, AccountType, ACCOUNT_TYPES};
pub use branch_ranges::{
    find_branch_range, BankRanges, BranchRangeEntry, RangeKey, AB_BASE_THRESHOLD,
    BANK_BRANCH_RANGES,
};
