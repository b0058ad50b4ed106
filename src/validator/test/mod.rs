mod metrics;

use super::*;
use crate::checksum::ChecksumVariant;
use serde_json::json;

pub(crate) const BANKS_JSON: &str = include_str!("../../../tests/data/banks.json");

pub(crate) fn test_register() -> BankRegister {
    BankRegister::from_json_str(BANKS_JSON).unwrap()
}

fn validate(input: impl Into<AccountInput>) -> ValidationResult {
    validate_with_register(input, Some(&test_register()))
}

#[test]
fn should_reject_malformed_input_without_further_checks() {
    let inputs: Vec<AccountInput> = vec![
        "".into(),
        "not an account".into(),
        "01-0902-0068389".into(),
        "001-0902-0068389-00".into(),
        "01-09020-0068389-00".into(),
        "01-0902-000068389-00".into(),
        "01-0902-0068389-00000".into(),
        "010001000001-0000".into(),
        AccountParts::new("01", "0902", "0068389", "0a").into(),
        AccountParts::new("01", "", "0068389", "00").into(),
        AccountParts::default().into(),
        json!(1234567890).into(),
        json!({"id": "01"}).into(),
        AccountInput::Unrecognized,
    ];

    for input in inputs {
        let result = validate(input.clone());
        assert_eq!(result, ValidationResult::default(), "{:?}", input);
        assert!(!result.is_valid());
    }
}

#[test]
fn should_validate_a_complete_account() {
    let result = validate("01-0902-0068389-00");

    assert!(result.parts_object_valid);
    assert!(result.id);
    assert!(result.branch);
    assert!(result.base);
    assert!(result.suffix);
    assert!(result.is_valid());

    assert_eq!(result.bank_name(), "ANZ Bank New Zealand");
    assert_eq!(
        result.branch_data.as_ref().and_then(|b| b.name()),
        Some("ANZ Retail 902")
    );
    assert_eq!(
        result.suffix_data,
        Some(AccountType {
            name: "Cheque Account",
            code: "0000",
        })
    );
    assert_eq!(result.account_type_name(), "Cheque Account");
}

#[test]
fn should_accept_every_input_shape() {
    let expected = validate("01-0902-0068389-00");

    assert_eq!(validate("01 0902 0068389 00"), expected);
    assert_eq!(validate("0190200683890000"), expected);
    assert_eq!(validate(AccountParts::new("01", "0902", "0068389", "00")), expected);
    assert_eq!(
        validate(json!({"id": "01", "branch": "0902", "base": "0068389", "suffix": "00"})),
        expected
    );
}

#[test]
fn should_pad_parts_before_lookups() {
    let padded = validate("01-0902-00068389-0000");
    let short = validate("1-902-68389-0");

    assert!(short.is_valid());
    assert_eq!(short, padded);
    assert_eq!(short.id_data, padded.id_data);
}

#[test]
fn should_evaluate_the_single_digit_base_fixture() {
    let result = validate(AccountParts::new("01", "0001", "000001", "0000"));

    assert!(result.parts_object_valid);
    assert!(result.id);
    assert!(result.branch);
    assert_eq!(
        result.branch_data.as_ref().map(|b| b.address()),
        Some("215-229 Lambton Quay, Wellington, New Zealand".to_string())
    );
    // The variant A total for this number is 10, which does not divide by 11
    assert_eq!(
        resolve_checksum_variant(&AccountParts::new("01", "0001", "000001", "0000")),
        Some(ChecksumVariant::A)
    );
    assert!(!result.base);
    assert!(result.suffix);
    assert_eq!(result.account_type_name(), "Cheque Account");
    assert!(!result.is_valid());
}

#[test]
fn should_split_a_and_b_at_990000() {
    let below = AccountParts::new("01", "0001", "989999", "0000");
    let at = AccountParts::new("01", "0001", "990000", "0000");
    assert_eq!(resolve_checksum_variant(&below), Some(ChecksumVariant::A));
    assert_eq!(resolve_checksum_variant(&at), Some(ChecksumVariant::B));

    // Valid with the B weights, but the base is below the threshold so A applies
    assert!(!validate("01-0001-989998-0000").base);
    // Valid with the B weights and selected by the threshold
    assert!(validate("01-0001-990008-0000").base);
}

#[test]
fn should_use_bank_specific_variants() {
    let cases = vec![
        ("08-6523-1954512-001", ChecksumVariant::D),
        ("09-0000-0000028-0009", ChecksumVariant::E),
        ("26-2600-0320871-032", ChecksumVariant::G),
        ("31-2800-1234567-000", ChecksumVariant::X),
    ];
    for (account, variant) in cases {
        let parts = get_parts_object(account);
        assert_eq!(resolve_checksum_variant(&parts), Some(variant), "{}", account);
        assert!(validate(account).base, "{}", account);
    }
}

#[test]
fn should_always_accept_the_base_for_banks_without_checksum() {
    for account in [
        "31-2800-1234567-000",
        "31-2800-99999999-0000",
        "31-2849-0000001-0000",
        "31-2800-0-0",
    ] {
        assert!(validate(account).base, "{}", account);
    }
    // Outside the registered range there is no variant at all
    assert!(!validate("31-2850-1234567-000").base);
}

#[test]
fn should_keep_descriptive_and_range_lookups_independent() {
    // Known branch in the register, outside every checksum range
    let result = validate("01-1000-0068389-00");
    assert!(result.id);
    assert!(result.branch);
    assert!(!result.base);
    assert_eq!(
        resolve_checksum_variant(&get_parts_object("01-1000-0068389-00")),
        None
    );

    // Checksum range known, bank missing from the register
    let result = validate("08-6523-1954512-001");
    assert!(!result.id);
    assert_eq!(result.id_data, None);
    assert!(!result.branch);
    assert!(result.base);
    assert_eq!(result.bank_name(), NO_BANK_FOUND);
}

#[test]
fn should_reject_checksum_failures() {
    let result = validate("01-0902-0068388-00");
    assert!(result.id);
    assert!(result.branch);
    assert!(!result.base);
    assert!(result.suffix);
    assert!(!result.is_valid());
}

#[test]
fn should_only_match_exact_suffix_codes() {
    let result = validate("01-0902-0068389-0001");
    assert!(result.base);
    assert!(!result.suffix);
    assert_eq!(result.suffix_data, None);
    assert_eq!(result.account_type_name(), NO_ACCOUNT_TYPE_FOUND);

    let result = validate("01-0902-0068389-30");
    assert!(result.suffix);
    assert_eq!(result.account_type_name(), "Savings Account");
}

#[test]
fn should_validate_without_register() {
    let result = validate_with_register("01-0902-0068389-00", None);
    assert!(result.parts_object_valid);
    assert!(!result.id);
    assert!(!result.branch);
    assert_eq!(result.id_data, None);
    assert_eq!(result.branch_data, None);
    assert!(result.base);
    assert!(result.suffix);
    assert!(!result.is_valid());
}

#[test]
fn should_serialize_result_with_camel_case_names() {
    let value = serde_json::to_value(validate("01-0902-0068389-00")).unwrap();

    assert_eq!(value["partsObjectValid"], true);
    assert_eq!(value["id"], true);
    assert_eq!(value["idData"]["Bank_Name"], "ANZ Bank New Zealand");
    assert_eq!(value["branch"], true);
    assert_eq!(value["branchData"]["Branch_Information"], "ANZ Retail 902");
    assert_eq!(value["base"], true);
    assert_eq!(value["suffix"], true);
    assert_eq!(value["suffixData"], json!({"name": "Cheque Account", "code": "0000"}));

    let value = serde_json::to_value(validate("garbage")).unwrap();
    assert_eq!(value["partsObjectValid"], false);
    assert_eq!(value["idData"], serde_json::Value::Null);
    assert_eq!(value["suffixData"], serde_json::Value::Null);
}

#[test]
fn should_keep_other_banks_when_one_register_entry_is_malformed() {
    let register = BankRegister::from_json_str(
        r#"{
            "01": {"Bank_Name": "ANZ Bank New Zealand", "Branches": {"0902": {"Branch_Information": "ANZ Retail 902"}}},
            "02": {"Bank_Name": "Bank of New Zealand", "Branches": {"0040": {"Post_Code": 6011}, "0041": null}},
            "03": "not a bank"
        }"#,
    )
    .unwrap();

    let result = validate_with_register("01-0902-0068389-00", Some(&register));
    assert!(result.id);
    assert!(result.branch);
    assert!(result.is_valid());

    let result = validate_with_register("02-0040-0000000-00", Some(&register));
    assert!(result.id);
    assert!(result.branch);
    assert_eq!(
        result.branch_data.and_then(|branch| branch.post_code),
        Some("6011".to_string())
    );
}
