// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod bank_register;
mod checksum;
mod observability;
mod parts;
mod registry;
mod str_utils;
mod tokio;
mod validator;

// This is the public API of the library
pub use bank_register::config::{
    RegisterConfig, RegisterConfigBuilder, RequestHeader, BANK_REGISTER_FILE,
    DEFAULT_HTTPS_TIMEOUT_SEC,
};
pub use bank_register::error::RegisterFetchError;
pub use bank_register::{
    BankDescriptor, BankRegister, BranchDescriptor, HttpRegisterSource, RegisterSource,
};
pub use checksum::{padded_account_digits, ChecksumAlgorithm, ChecksumVariant, ACCOUNT_DIGITS};
pub use observability::labels::Labels;
pub use parts::{get_parts_object, AccountInput, AccountParts, Part};
pub use registry::{
    find_account_type, find_branch_range, AccountType, BankRanges, BranchRangeEntry, RangeKey,
    ACCOUNT_TYPES, AB_BASE_THRESHOLD, BANK_BRANCH_RANGES,
};
pub use validator::{
    resolve_checksum_variant, validate_with_register, BankAccountValidator,
    BankAccountValidatorBuilder, ValidationResult, NO_ACCOUNT_TYPE_FOUND, NO_BANK_FOUND,
};

/// Check that every part is present, numeric and within its maximum width.
pub fn is_structurally_valid(parts: &AccountParts) -> bool {
    parts.is_structurally_valid()
}
