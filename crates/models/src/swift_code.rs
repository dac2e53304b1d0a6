use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, IntoActiveModel, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Code type stored when the caller does not supply one.
pub const DEFAULT_CODE_TYPE: &str = "BIC11";

/// Length of the institution prefix shared by a headquarters and its branches.
pub const PREFIX_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "swift_codes")]
pub struct Model {
    pub country_iso2: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub swift_code: String,
    pub code_type: String,
    pub bank_name: String,
    pub address: String,
    pub town_name: Option<String>,
    pub country_name: String,
    pub time_zone: Option<String>,
    pub is_headquarter: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Identifiers are exactly 8 or 11 characters long.
pub fn has_valid_length(code: &str) -> bool {
    matches!(code.chars().count(), 8 | 11)
}

pub fn validate_swift_code(code: &str) -> Result<(), errors::ModelError> {
    if !has_valid_length(code) {
        return Err(errors::ModelError::Validation(
            "swift_code must be either 8 or 11 characters long".into(),
        ));
    }
    Ok(())
}

/// First eight characters of `code`, or `None` when it is shorter than that.
pub fn institution_prefix(code: &str) -> Option<&str> {
    let end = code
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(code.len()))
        .nth(PREFIX_LEN)?;
    Some(&code[..end])
}

/// True when `candidate` is a different identifier sharing `headquarter`'s prefix.
pub fn is_branch_of(candidate: &str, headquarter: &str) -> bool {
    if candidate == headquarter {
        return false;
    }
    match (institution_prefix(candidate), institution_prefix(headquarter)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Insert one record. The primary key is the only duplicate guard: a
/// unique violation comes back as `ModelError::Conflict`.
pub async fn create(db: &DatabaseConnection, record: Model) -> Result<Model, errors::ModelError> {
    validate_swift_code(&record.swift_code)?;
    let code = record.swift_code.clone();
    record.into_active_model().insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => errors::ModelError::Conflict(code),
        _ => errors::ModelError::Db(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_lengths_are_eight_and_eleven() {
        assert!(has_valid_length("BPKOPLPW"));
        assert!(has_valid_length("BPKOPLPWXXX"));
        for bad in ["", "12345", "BPKOPLP", "BPKOPLPWX", "BPKOPLPWXX", "BPKOPLPWXXXX"] {
            assert!(!has_valid_length(bad), "{bad} should be rejected");
            assert!(validate_swift_code(bad).is_err());
        }
    }

    #[test]
    fn prefix_is_first_eight_characters() {
        assert_eq!(institution_prefix("BPKOPLPWXXX"), Some("BPKOPLPW"));
        assert_eq!(institution_prefix("BPKOPLPW"), Some("BPKOPLPW"));
        assert_eq!(institution_prefix("BPKOPLP"), None);
        assert_eq!(institution_prefix("ÄÖÜABCDEFG"), Some("ÄÖÜABCDE"));
    }

    #[test]
    fn branch_relation_excludes_self_and_other_institutions() {
        assert!(is_branch_of("BPKOPLPWKAT", "BPKOPLPWXXX"));
        assert!(is_branch_of("BPKOPLPW", "BPKOPLPWXXX"));
        assert!(!is_branch_of("BPKOPLPWXXX", "BPKOPLPWXXX"));
        assert!(!is_branch_of("ALBPPLPWXXX", "BPKOPLPWXXX"));
        assert!(!is_branch_of("BPKO", "BPKOPLPWXXX"));
    }
}
