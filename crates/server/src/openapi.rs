use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct CreateSwiftCodeInputDoc {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "countryName")]
    pub country_name: String,
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
    #[serde(rename = "codeType")]
    pub code_type: Option<String>,
    #[serde(rename = "townName")]
    pub town_name: Option<String>,
    #[serde(rename = "timeZone")]
    pub time_zone: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct SwiftCodeRecordDoc {
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

#[derive(Serialize, ToSchema)]
pub struct BranchEntryDoc {
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

#[derive(Serialize, ToSchema)]
pub struct SwiftCodeDetailsDoc {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub swift_code: String,
    /// Present for headquarters records only.
    pub branches: Option<Vec<BranchEntryDoc>>,
}

#[derive(Serialize, ToSchema)]
pub struct CountryEntryDoc {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    pub country_iso2: String,
    pub is_headquarter: bool,
    pub swift_code: String,
}

#[derive(Serialize, ToSchema)]
pub struct CountrySwiftCodesDoc {
    pub country_iso2: String,
    pub country_name: String,
    #[serde(rename = "swiftCodes")]
    pub swift_codes: Vec<CountryEntryDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::swift_codes::list,
        crate::swift_codes::get,
        crate::swift_codes::by_country,
        crate::swift_codes::create,
        crate::swift_codes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CreateSwiftCodeInputDoc,
            SwiftCodeRecordDoc,
            BranchEntryDoc,
            SwiftCodeDetailsDoc,
            CountryEntryDoc,
            CountrySwiftCodesDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "swift-codes")
    )
)]
pub struct ApiDoc;
