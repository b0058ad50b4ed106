//! The descriptive bank register: display names and branch details keyed by
//! bank id. It is external data, loaded once through a [`RegisterSource`].

pub mod config;
pub mod error;
mod serde_helpers;
mod source;

use crate::parts::Part;
use crate::str_utils::pad_left;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub use source::{HttpRegisterSource, RegisterSource};

/// Banks keyed by their two digit id. Decoding only fails when the document
/// is not a JSON object; malformed banks and branches are skipped one by one.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct BankRegister(BTreeMap<String, BankDescriptor>);

impl<'de> Deserialize<'de> for BankRegister {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let banks = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(BankRegister::new(serde_helpers::decode_entries(banks)))
    }
}

impl BankRegister {
    pub fn new(banks: BTreeMap<String, BankDescriptor>) -> Self {
        BankRegister(banks)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a bank; the id is zero-padded first so `"1"` and `"01"` agree.
    pub fn bank(&self, id: &str) -> Option<&BankDescriptor> {
        self.0.get(&*pad_left(id, Part::Id.max_len()))
    }

    pub fn branch(&self, id: &str, branch: &str) -> Option<&BranchDescriptor> {
        self.bank(id)?.branch(branch)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BankDescriptor {
    #[serde(
        rename = "Bank_Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_lenient_string"
    )]
    pub bank_name: Option<String>,
    #[serde(
        rename = "Branches",
        default,
        deserialize_with = "serde_helpers::deserialize_lenient_map"
    )]
    pub branches: BTreeMap<String, BranchDescriptor>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BankDescriptor {
    pub fn branch(&self, branch: &str) -> Option<&BranchDescriptor> {
        self.branches.get(&*pad_left(branch, Part::Branch.max_len()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BranchDescriptor {
    #[serde(
        rename = "Branch_Information",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_lenient_string"
    )]
    pub information: Option<String>,
    #[serde(
        rename = "Physical_Address1",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_lenient_string"
    )]
    pub physical_address: Option<String>,
    #[serde(
        rename = "City",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_lenient_string"
    )]
    pub city: Option<String>,
    #[serde(
        rename = "Post_Code",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_lenient_string"
    )]
    pub post_code: Option<String>,
    #[serde(
        rename = "Country_Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_lenient_string"
    )]
    pub country: Option<String>,
    #[serde(
        rename = "STD",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_lenient_string"
    )]
    pub std_code: Option<String>,
    #[serde(
        rename = "Phone",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_lenient_string"
    )]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BranchDescriptor {
    pub fn name(&self) -> Option<&str> {
        self.information.as_deref()
    }

    /// Street, city and country, skipping the empty ones.
    pub fn address(&self) -> String {
        join_non_empty(
            [
                self.physical_address.as_deref(),
                self.city.as_deref(),
                self.country.as_deref(),
            ],
            ", ",
        )
    }

    /// Phone number, prefixed with the STD code unless it is an 0800 number.
    pub fn phone(&self) -> String {
        let Some(phone) = self.phone.as_deref() else {
            return String::new();
        };
        let std_code = self
            .std_code
            .as_deref()
            .filter(|_| !phone.starts_with("0800"));
        join_non_empty([std_code, Some(phone)], " ")
    }
}

fn join_non_empty<const N: usize>(values: [Option<&str>; N], separator: &str) -> String {
    values
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
