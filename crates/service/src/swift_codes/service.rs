use std::sync::Arc;

use models::swift_code::institution_prefix;
use tracing::{debug, info, instrument};

use super::domain::{
    BranchEntry, CountryEntry, CountrySwiftCodes, CreateSwiftCodeInput, SwiftCodeDetails, SwiftCodeRecord,
};
use super::repository::SwiftCodeRepository;
use super::validation::{validate_new_swift_code, validate_swift_code_param};
use crate::errors::ServiceError;

/// Query service over swift code records, independent of the web framework.
/// Each call issues at most two sequential store queries.
#[derive(Clone)]
pub struct SwiftCodeService {
    repo: Arc<dyn SwiftCodeRepository>,
}

impl SwiftCodeService {
    pub fn new(repo: Arc<dyn SwiftCodeRepository>) -> Self { Self { repo } }

    /// Every stored record with all of its fields.
    pub async fn list_all(&self) -> Result<Vec<SwiftCodeRecord>, ServiceError> {
        let rows = self.repo.list().await?;
        debug!(count = rows.len(), "listed swift codes");
        Ok(rows.into_iter().map(SwiftCodeRecord::from).collect())
    }

    /// Look up one record. Headquarters records also carry every other record
    /// sharing their eight-character institution prefix as `branches`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::swift_codes::{repository::mock::MockSwiftCodeRepository, SwiftCodeService};
    /// use service::errors::ServiceError;
    /// let svc = SwiftCodeService::new(Arc::new(MockSwiftCodeRepository::default()));
    /// let res = tokio_test::block_on(svc.get_by_swift_code("AAAABBCCXXX"));
    /// assert!(matches!(res, Err(ServiceError::NotFound(_))));
    /// ```
    #[instrument(skip(self))]
    pub async fn get_by_swift_code(&self, swift_code: &str) -> Result<SwiftCodeDetails, ServiceError> {
        let record = self
            .repo
            .find(swift_code)
            .await?
            .ok_or_else(|| ServiceError::not_found("swift code"))?;

        if !record.is_headquarter {
            return Ok(SwiftCodeDetails::from_model(record, None));
        }

        let prefix = institution_prefix(&record.swift_code)
            .ok_or_else(|| {
                ServiceError::DataIntegrity(format!(
                    "headquarters swift code {:?} is shorter than 8 characters",
                    record.swift_code
                ))
            })?
            .to_string();

        let branches: Vec<BranchEntry> = self
            .repo
            .find_branches(&record.swift_code, &prefix)
            .await
            .map_err(|e| match e {
                ServiceError::Db(detail) => ServiceError::BranchLookup(detail),
                other => other,
            })?
            .into_iter()
            .map(BranchEntry::from)
            .collect();
        debug!(%prefix, branches = branches.len(), "resolved headquarters branches");

        Ok(SwiftCodeDetails::from_model(record, Some(branches)))
    }

    /// Records of one country. An unknown country yields an empty list and an
    /// empty name, not an error.
    #[instrument(skip(self))]
    pub async fn get_by_country(&self, country_iso2: &str) -> Result<CountrySwiftCodes, ServiceError> {
        let rows = self.repo.list_by_country(country_iso2).await?;
        let country_name = rows.first().map(|r| r.country_name.clone()).unwrap_or_default();
        Ok(CountrySwiftCodes {
            country_iso2: country_iso2.to_string(),
            country_name,
            swift_codes: rows.into_iter().map(CountryEntry::from).collect(),
        })
    }

    /// Validate and insert one record. Invalid input never reaches the store;
    /// duplicates are left to the store's uniqueness constraint.
    #[instrument(skip(self, input), fields(swift_code = ?input.swift_code))]
    pub async fn create(&self, input: CreateSwiftCodeInput) -> Result<(), ServiceError> {
        let record = validate_new_swift_code(input)?;
        let code = record.swift_code.clone();
        self.repo.insert(record.into()).await?;
        info!(swift_code = %code, "swift_code_created");
        Ok(())
    }

    /// Delete by identifier. Repeated deletes keep reporting not-found.
    #[instrument(skip(self))]
    pub async fn delete(&self, swift_code: &str) -> Result<(), ServiceError> {
        validate_swift_code_param(swift_code)?;
        let removed = self.repo.delete(swift_code).await?;
        if removed == 0 {
            return Err(ServiceError::not_found("swift code"));
        }
        info!(swift_code, "swift_code_deleted");
        Ok(())
    }
}
