use crate::parts::Part;
use crate::str_utils::pad_left;
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountType {
    pub name: &'static str,
    /// Zero-padded four digit suffix.
    pub code: &'static str,
}

pub static ACCOUNT_TYPES: &[AccountType] = &[
    AccountType {
        name: "Cheque Account",
        code: "0000",
    },
    AccountType {
        name: "Credit Card Account",
        code: "0040",
    },
    AccountType {
        name: "Fixed Account",
        code: "0003",
    },
    AccountType {
        name: "Number 2 Account",
        code: "0002",
    },
    AccountType {
        name: "Savings Account",
        code: "0030",
    },
    AccountType {
        name: "Term Deposit Account",
        code: "0081",
    },
    AccountType {
        name: "Thrift Club Account",
        code: "0050",
    },
];

/// Exact match on the zero-padded suffix.
pub fn find_account_type(suffix: &str) -> Option<&'static AccountType> {
    let padded = pad_left(suffix, Part::Suffix.max_len());
    ACCOUNT_TYPES.iter().find(|t| t.code == padded)
}
