use models::swift_code::{has_valid_length, DEFAULT_CODE_TYPE};

use super::domain::{CreateSwiftCodeInput, NewSwiftCode};
use crate::errors::ValidationError;

/// Check a create payload and apply defaults.
///
/// Required: `address`, `bankName`, `countryISO2`, `countryName`,
/// `isHeadquarter`, `swiftCode`. A required string that is empty counts as
/// missing. `codeType` falls back to `BIC11`; empty `townName`/`timeZone`
/// are stored as NULL.
pub fn validate_new_swift_code(input: CreateSwiftCodeInput) -> Result<NewSwiftCode, ValidationError> {
    let address = required(input.address, "address")?;
    let bank_name = required(input.bank_name, "bankName")?;
    let country_iso2 = required(input.country_iso2, "countryISO2")?;
    let country_name = required(input.country_name, "countryName")?;
    let is_headquarter = input
        .is_headquarter
        .ok_or_else(|| missing("isHeadquarter"))?;
    let swift_code = required(input.swift_code, "swiftCode")?;

    if !has_valid_length(&swift_code) {
        return Err(ValidationError::SwiftCodeLength("SwiftCode"));
    }

    let code_type = non_empty(input.code_type).unwrap_or_else(|| DEFAULT_CODE_TYPE.to_string());

    Ok(NewSwiftCode {
        country_iso2,
        swift_code,
        code_type,
        bank_name,
        address,
        town_name: non_empty(input.town_name),
        country_name,
        time_zone: non_empty(input.time_zone),
        is_headquarter,
    })
}

/// Length check for identifiers that arrive as a path segment.
pub fn validate_swift_code_param(swift_code: &str) -> Result<(), ValidationError> {
    if has_valid_length(swift_code) {
        Ok(())
    } else {
        Err(ValidationError::SwiftCodeLength("Swift code"))
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ValidationError> {
    non_empty(value).ok_or_else(|| missing(field))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn missing(field: &str) -> ValidationError {
    ValidationError::Payload(format!("missing required field `{field}`"))
}
