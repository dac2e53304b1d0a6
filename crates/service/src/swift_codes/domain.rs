use serde::{Deserialize, Serialize};

/// Raw POST body. Every field is optional here so that a missing field is
/// reported by validation with its wire name instead of a serde error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSwiftCodeInput {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "bankName")]
    pub bank_name: Option<String>,
    #[serde(default, rename = "countryISO2")]
    pub country_iso2: Option<String>,
    #[serde(default, rename = "countryName")]
    pub country_name: Option<String>,
    #[serde(default, rename = "isHeadquarter")]
    pub is_headquarter: Option<bool>,
    #[serde(default, rename = "swiftCode")]
    pub swift_code: Option<String>,
    #[serde(default, rename = "codeType")]
    pub code_type: Option<String>,
    #[serde(default, rename = "townName")]
    pub town_name: Option<String>,
    #[serde(default, rename = "timeZone")]
    pub time_zone: Option<String>,
}

/// A record that passed validation, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSwiftCode {
    pub country_iso2: String,
    pub swift_code: String,
    pub code_type: String,
    pub bank_name: String,
    pub address: String,
    pub town_name: Option<String>,
    pub country_name: String,
    pub time_zone: Option<String>,
    pub is_headquarter: bool,
}

impl From<NewSwiftCode> for models::swift_code::Model {
    fn from(n: NewSwiftCode) -> Self {
        Self {
            country_iso2: n.country_iso2,
            swift_code: n.swift_code,
            code_type: n.code_type,
            bank_name: n.bank_name,
            address: n.address,
            town_name: n.town_name,
            country_name: n.country_name,
            time_zone: n.time_zone,
            is_headquarter: n.is_headquarter,
        }
    }
}

/// Full row as returned by `GET /v1/swift-codes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftCodeRecord {
    pub country_iso2: String,
    pub swift_code: String,
    pub code_type: String,
    pub bank_name: String,
    pub address: String,
    pub town_name: Option<String>,
    pub country_name: String,
    pub time_zone: Option<String>,
    pub is_headquarter: bool,
}

impl From<models::swift_code::Model> for SwiftCodeRecord {
    fn from(m: models::swift_code::Model) -> Self {
        Self {
            country_iso2: m.country_iso2,
            swift_code: m.swift_code,
            code_type: m.code_type,
            bank_name: m.bank_name,
            address: m.address,
            town_name: m.town_name,
            country_name: m.country_name,
            time_zone: m.time_zone,
            is_headquarter: m.is_headquarter,
        }
    }
}

/// Body of `GET /v1/swift-codes/{swift_code}`. `branches` is present only
/// for headquarters records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftCodeDetails {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub swift_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<BranchEntry>>,
}

impl SwiftCodeDetails {
    pub fn from_model(m: models::swift_code::Model, branches: Option<Vec<BranchEntry>>) -> Self {
        Self {
            address: m.address,
            bank_name: m.bank_name,
            country_iso2: m.country_iso2,
            country_name: m.country_name,
            is_headquarter: m.is_headquarter,
            swift_code: m.swift_code,
            branches,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchEntry {
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    pub address: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
}

impl From<models::swift_code::Model> for BranchEntry {
    fn from(m: models::swift_code::Model) -> Self {
        Self {
            swift_code: m.swift_code,
            bank_name: m.bank_name,
            address: m.address,
            country_iso2: m.country_iso2,
            is_headquarter: m.is_headquarter,
        }
    }
}

/// Body of `GET /v1/swift-codes/country/{country_iso2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySwiftCodes {
    pub country_iso2: String,
    pub country_name: String,
    #[serde(rename = "swiftCodes")]
    pub swift_codes: Vec<CountryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    pub country_iso2: String,
    pub is_headquarter: bool,
    pub swift_code: String,
}

impl From<models::swift_code::Model> for CountryEntry {
    fn from(m: models::swift_code::Model) -> Self {
        Self {
            address: m.address,
            bank_name: m.bank_name,
            country_iso2: m.country_iso2,
            is_headquarter: m.is_headquarter,
            swift_code: m.swift_code,
        }
    }
}
