mod metrics;

#[cfg(test)]
mod test;

use crate::bank_register::config::RegisterConfig;
use crate::bank_register::{
    BankDescriptor, BankRegister, BranchDescriptor, HttpRegisterSource, RegisterSource,
};
use crate::checksum::{padded_account_digits, ChecksumVariant};
use crate::observability::labels::{Labels, NO_LABEL};
use crate::parts::{get_parts_object, AccountInput, AccountParts};
use crate::registry::{find_account_type, find_branch_range, AccountType};
use crate::str_utils::parse_digits;
use crate::tokio::TOKIO_RUNTIME;
use log::{debug, error};
use self::metrics::Metrics;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub const NO_BANK_FOUND: &str = "No bank found";
pub const NO_ACCOUNT_TYPE_FOUND: &str = "No account type found";

/// Outcome of validating one account number. Every lookup is reported
/// separately; a failed lookup never stops the independent ones.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub parts_object_valid: bool,
    pub id: bool,
    pub id_data: Option<BankDescriptor>,
    pub branch: bool,
    pub branch_data: Option<BranchDescriptor>,
    pub base: bool,
    pub suffix: bool,
    pub suffix_data: Option<AccountType>,
}

impl ValidationResult {
    /// The whole account number is valid: well formed, known bank and branch,
    /// matching checksum and known account type.
    pub fn is_valid(&self) -> bool {
        self.parts_object_valid && self.id && self.branch && self.base && self.suffix
    }

    pub fn bank_name(&self) -> &str {
        self.id_data
            .as_ref()
            .and_then(|bank| bank.bank_name.as_deref())
            .unwrap_or(NO_BANK_FOUND)
    }

    pub fn account_type_name(&self) -> &str {
        self.suffix_data
            .as_ref()
            .map_or(NO_ACCOUNT_TYPE_FOUND, |account_type| account_type.name)
    }
}

/// Find the checksum rule for an account: the first branch range registered
/// for its bank that contains the branch, with the A/B split decided by the
/// base. `None` when no range matches or the base is missing.
pub fn resolve_checksum_variant(parts: &AccountParts) -> Option<ChecksumVariant> {
    let id = parts.id.as_deref()?;
    let branch = parse_digits(parts.branch.as_deref()?)?;
    let base = parse_digits(parts.base.as_deref()?)?;
    let entry = find_branch_range(id, branch)?;
    Some(entry.key.resolve(base))
}

/// Validate an account number against the static tables, and against
/// `register` for the descriptive bank and branch data when one is available.
///
/// Bank and branch descriptions come from the register while the checksum
/// rule comes from the static branch ranges. The two sources are independent
/// and are not reconciled.
pub fn validate_with_register(
    input: impl Into<AccountInput>,
    register: Option<&BankRegister>,
) -> ValidationResult {
    let parts = get_parts_object(input);
    let mut result = ValidationResult {
        parts_object_valid: parts.is_structurally_valid(),
        ..Default::default()
    };
    if !result.parts_object_valid {
        return result;
    }
    let (Some(id), Some(branch), Some(suffix)) = (
        parts.id.as_deref(),
        parts.branch.as_deref(),
        parts.suffix.as_deref(),
    ) else {
        return result;
    };

    result.id_data = register.and_then(|r| r.bank(id)).cloned();
    result.id = result.id_data.is_some();

    result.branch_data = result
        .id_data
        .as_ref()
        .and_then(|bank| bank.branch(branch))
        .cloned();
    result.branch = result.branch_data.is_some();

    if let (Some(variant), Some(digits)) = (
        resolve_checksum_variant(&parts),
        padded_account_digits(&parts),
    ) {
        result.base = variant.algorithm().is_valid(&digits);
    }

    result.suffix_data = find_account_type(suffix).copied();
    result.suffix = result.suffix_data.is_some();

    result
}

pub struct BankAccountValidatorBuilder {
    source: Arc<dyn RegisterSource>,
    register: Option<BankRegister>,
    labels: Labels,
}

impl BankAccountValidatorBuilder {
    pub fn new(source: Arc<dyn RegisterSource>) -> Self {
        BankAccountValidatorBuilder {
            source,
            register: None,
            labels: NO_LABEL,
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Start with `register` already loaded; the source is never called.
    pub fn with_register(mut self, register: BankRegister) -> Self {
        self.register = Some(register);
        self
    }

    pub fn build(self) -> BankAccountValidator {
        let metrics = Metrics::new(&self.labels, self.source.name());
        let register = match self.register {
            Some(register) => OnceCell::new_with(Some(Some(register))),
            None => OnceCell::new(),
        };
        BankAccountValidator {
            source: self.source,
            register,
            metrics,
        }
    }
}

/// Validates account numbers, loading the descriptive bank register the
/// first time it is needed.
///
/// The register is fetched at most once per validator. Calls that arrive
/// while the fetch is in flight wait for it instead of starting another one.
/// A failed fetch is logged and the validator keeps working without
/// descriptive data from then on.
pub struct BankAccountValidator {
    source: Arc<dyn RegisterSource>,
    register: OnceCell<Option<BankRegister>>,
    metrics: Metrics,
}

impl BankAccountValidator {
    pub fn new(source: Arc<dyn RegisterSource>) -> Self {
        BankAccountValidatorBuilder::new(source).build()
    }

    /// Fetch the register over HTTP as described by `config`.
    pub fn from_config(config: RegisterConfig) -> Self {
        BankAccountValidator::new(Arc::new(HttpRegisterSource::new(config)))
    }

    pub fn builder(source: Arc<dyn RegisterSource>) -> BankAccountValidatorBuilder {
        BankAccountValidatorBuilder::new(source)
    }

    /// The bank register, loading it on first use. `None` if loading failed.
    pub async fn register(&self) -> Option<&BankRegister> {
        self.register
            .get_or_init(|| self.load_register())
            .await
            .as_ref()
    }

    async fn load_register(&self) -> Option<BankRegister> {
        self.metrics.register_fetches.increment(1);
        debug!("Fetching the bank register from the {} source", self.source.name());
        match self.source.fetch().await {
            Ok(register) => {
                debug!("Loaded the bank register with {} banks", register.len());
                Some(register)
            }
            Err(err) => {
                self.metrics.register_fetch_failures.increment(1);
                error!("Unable to load the bank register: {}", err);
                None
            }
        }
    }

    pub async fn validate(&self, input: impl Into<AccountInput>) -> ValidationResult {
        let input = input.into();
        let register = self.register().await;
        let result = validate_with_register(input, register);
        self.record_metrics(&result);
        result
    }

    /// Blocking version of [`BankAccountValidator::validate`], driven by a
    /// shared runtime. Must not be called from within an async context.
    pub fn validate_blocking(&self, input: impl Into<AccountInput>) -> ValidationResult {
        TOKIO_RUNTIME.block_on(self.validate(input))
    }

    fn record_metrics(&self, result: &ValidationResult) {
        self.metrics.validations.increment(1);
        if !result.parts_object_valid {
            self.metrics.structurally_invalid.increment(1);
        }
        if result.is_valid() {
            self.metrics.valid_accounts.increment(1);
        }
    }
}
